// tstandard — standard-style TypeScript linter, CLI front-end
//
// Author : kelexine (https://github.com/kelexine)
// License: MIT
//
// The binary owns every terminal side effect: parsing returns data (see
// cli::Outcome) and this driver turns it into output and an exit status.

use colored::Colorize;
use std::process;

use tstandard::cli::{self, Outcome};

fn main() {
    let argv: Vec<String> = std::env::args().collect();

    match cli::parse(&argv) {
        Outcome::Run(_options) => {
            // Hand-off point: the lint engine consumes the record from here
            // and decides the final exit status.
        }
        Outcome::Exit { lines, code } => {
            for line in lines {
                println!("{line}");
            }
            process::exit(code);
        }
        Outcome::Fail(err) => {
            eprintln!("{} {}", "[ERROR]".red().bold(), err);
            process::exit(1);
        }
    }
}
