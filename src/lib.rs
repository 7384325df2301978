// Author: kelexine (https://github.com/kelexine)
// lib.rs — crate root for the tstandard CLI front-end

//! CLI front-end for tstandard: turns raw process arguments into the options
//! record the lint pipeline runs on.
//!
//! The parser itself is pure — it reads an explicit argument slice and
//! returns a tagged [`cli::Outcome`]; printing and process exit live in the
//! binary.

pub mod cli;

pub use cli::{Options, Outcome, UsageError, parse};
