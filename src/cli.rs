// Author: kelexine (https://github.com/kelexine)
// cli.rs — command-line option parsing for the tstandard front-end

use serde::Serialize;
use thiserror::Error;

/// Parsed command-line options, handed to the lint pipeline as-is.
///
/// Every field except the two booleans is absent (`None`) when the matching
/// flag was not given. A present list field is always non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Options {
    /// Apply auto-fixes where the rules support them
    pub fix: bool,

    /// Read input from stdin instead of files
    pub use_std_in: bool,

    /// File/glob patterns to lint, in command-line order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<String>>,

    /// tsconfig path(s) — `-p` / `--project`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<Vec<String>>,

    /// Additional global identifiers the rules should accept
    #[serde(skip_serializing_if = "Option::is_none")]
    pub globals: Option<Vec<String>>,

    /// Plugin module names
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plugins: Option<Vec<String>>,

    /// Environment names; `--env` values come before `--envs` values
    #[serde(skip_serializing_if = "Option::is_none")]
    pub envs: Option<Vec<String>>,

    /// Custom parser module
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parser: Option<String>,

    /// Report format name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<String>,

    /// Virtual filename associated with stdin content
    #[serde(rename = "stdInFilename", skip_serializing_if = "Option::is_none")]
    pub stdin_filename: Option<String>,
}

/// The one usage error this front-end validates on its own.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    #[error("the --stdin-filename flag is required when linting from stdin")]
    MissingStdinFilename,
}

/// What a single pass over the argument list decided.
///
/// `parse` never prints and never exits; the binary applies the outcome.
#[derive(Debug, PartialEq)]
pub enum Outcome {
    /// A complete record for the lint pipeline.
    Run(Options),
    /// Informational early exit: print `lines` to stdout, end with `code`.
    Exit { lines: Vec<String>, code: i32 },
    /// Usage error: print the diagnostic to stderr, end with status 1.
    Fail(UsageError),
}

const USAGE: &str = "Usage: tstandard [options] [file|glob ...]";
const OPTIONS_SUMMARY: &str = "Options: --fix  --stdin  --stdin-filename <path>  \
    --env <names>  --envs <names>  --plugins <names>  --parser <module>  \
    -p, --project <paths>  --globals <names>  --report <format>  --help  --version";

/// Raw value of a flag before list normalization. Repeated occurrences
/// accumulate their value strings in command-line order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum FlagValue {
    #[default]
    Missing,
    Single(String),
    Many(Vec<String>),
}

impl FlagValue {
    fn push(&mut self, value: String) {
        *self = match std::mem::take(self) {
            FlagValue::Missing => FlagValue::Single(value),
            FlagValue::Single(first) => FlagValue::Many(vec![first, value]),
            FlagValue::Many(mut values) => {
                values.push(value);
                FlagValue::Many(values)
            }
        };
    }
}

/// Turn a raw flag value into a list: a lone string splits on commas, an
/// accumulated list passes through untouched, a missing value stays absent.
fn into_list(value: FlagValue) -> Option<Vec<String>> {
    match value {
        FlagValue::Missing => None,
        FlagValue::Single(s) => Some(s.split(',').map(str::to_owned).collect()),
        FlagValue::Many(values) => Some(values),
    }
}

/// A token that starts another flag (`-x`, `--long`); a lone `-` is not one.
fn is_flag(token: &str) -> bool {
    token.len() > 1 && token.starts_with('-')
}

/// Split the inline `--name=value` form; everything else passes through.
fn split_flag(arg: &str) -> (&str, Option<String>) {
    match arg.split_once('=') {
        Some((name, value)) if name.starts_with('-') => (name, Some(value.to_owned())),
        _ => (arg, None),
    }
}

/// The value for the flag at position `i`: the inline `=` value if given,
/// otherwise the following token as long as it does not start a flag itself.
fn take_value(inline: Option<String>, args: &[String], i: &mut usize) -> Option<String> {
    if inline.is_some() {
        return inline;
    }
    match args.get(*i + 1) {
        Some(next) if !is_flag(next) => {
            *i += 1;
            Some(next.clone())
        }
        _ => None,
    }
}

/// Parse a full process argument list (program name included) into an
/// [`Outcome`].
///
/// Unknown flags are tolerated silently; the only validated error is a
/// stdin request without `--stdin-filename`.
pub fn parse(argv: &[String]) -> Outcome {
    let args = argv.get(1..).unwrap_or_default();

    if args.iter().any(|a| a == "--help") {
        return Outcome::Exit {
            lines: vec![USAGE.to_owned(), OPTIONS_SUMMARY.to_owned()],
            code: 0,
        };
    }
    if args.iter().any(|a| a == "--version") {
        return Outcome::Exit {
            lines: vec![env!("CARGO_PKG_VERSION").to_owned()],
            code: 0,
        };
    }

    let mut fix = false;
    let mut stdin_flag = false;
    let mut env = FlagValue::default();
    let mut envs = FlagValue::default();
    let mut plugins = FlagValue::default();
    let mut project = FlagValue::default();
    let mut globals = FlagValue::default();
    let mut parser: Option<String> = None;
    let mut report: Option<String> = None;
    let mut stdin_filename: Option<String> = None;
    let mut files: Vec<String> = Vec::new();

    // A leading `-` is the stdin request, not a file.
    let stdin_shortcut = args.first().is_some_and(|a| a == "-");

    let mut i = usize::from(stdin_shortcut);
    while i < args.len() {
        let arg = &args[i];
        if arg == "--" {
            // Everything after `--` is positional.
            files.extend(args[i + 1..].iter().cloned());
            break;
        }
        let (name, inline) = split_flag(arg);
        match name {
            "--fix" => fix = true,
            "--stdin" => stdin_flag = true,
            "--env" => {
                if let Some(value) = take_value(inline, args, &mut i) {
                    env.push(value);
                }
            }
            "--envs" => {
                if let Some(value) = take_value(inline, args, &mut i) {
                    envs.push(value);
                }
            }
            "--plugins" => {
                if let Some(value) = take_value(inline, args, &mut i) {
                    plugins.push(value);
                }
            }
            "-p" | "--project" => {
                if let Some(value) = take_value(inline, args, &mut i) {
                    project.push(value);
                }
            }
            "--globals" => {
                if let Some(value) = take_value(inline, args, &mut i) {
                    globals.push(value);
                }
            }
            "--parser" => {
                if let Some(value) = take_value(inline, args, &mut i) {
                    parser = Some(value);
                }
            }
            "--report" => {
                if let Some(value) = take_value(inline, args, &mut i) {
                    report = Some(value);
                }
            }
            "--stdin-filename" => {
                if let Some(value) = take_value(inline, args, &mut i) {
                    stdin_filename = Some(value);
                }
            }
            _ if is_flag(name) => {
                // Unknown flag: swallow it, and its value token if it has one.
                let _ = take_value(inline, args, &mut i);
            }
            _ => files.push(arg.clone()),
        }
        i += 1;
    }

    let use_std_in = stdin_shortcut || stdin_flag;
    if use_std_in && stdin_filename.is_none() {
        return Outcome::Fail(UsageError::MissingStdinFilename);
    }

    // `--env` values precede `--envs` values, whatever the flag order on the
    // command line; each side is normalized on its own first.
    let mut merged = into_list(env).unwrap_or_default();
    merged.extend(into_list(envs).unwrap_or_default());

    Outcome::Run(Options {
        fix,
        use_std_in,
        files: (!files.is_empty()).then_some(files),
        project: into_list(project),
        globals: into_list(globals),
        plugins: into_list(plugins),
        envs: (!merged.is_empty()).then_some(merged),
        parser,
        report,
        stdin_filename,
    })
}

#[cfg(test)]
mod tests {
    use super::{FlagValue, into_list};

    #[test]
    fn single_value_without_comma_becomes_one_element_list() {
        let res = into_list(FlagValue::Single("luke".into()));
        assert_eq!(res, Some(vec!["luke".to_owned()]));
    }

    #[test]
    fn single_value_splits_on_commas_in_order() {
        let res = into_list(FlagValue::Single("luke,leia,obi-wan".into()));
        assert_eq!(
            res,
            Some(vec!["luke".to_owned(), "leia".to_owned(), "obi-wan".to_owned()])
        );
    }

    #[test]
    fn accumulated_values_pass_through_unchanged() {
        // Raw strings from repeated flags are not re-split, commas included.
        let mut value = FlagValue::default();
        value.push("luke,leia".into());
        value.push("han".into());
        let res = into_list(value);
        assert_eq!(res, Some(vec!["luke,leia".to_owned(), "han".to_owned()]));
    }

    #[test]
    fn missing_value_stays_absent() {
        assert_eq!(into_list(FlagValue::Missing), None);
    }

    #[test]
    fn push_promotes_single_to_many() {
        let mut value = FlagValue::default();
        assert_eq!(value, FlagValue::Missing);
        value.push("a".into());
        assert_eq!(value, FlagValue::Single("a".into()));
        value.push("b".into());
        assert_eq!(value, FlagValue::Many(vec!["a".into(), "b".into()]));
    }
}
