mod logger;

use anyhow::{Context, Result};
use clap::Parser;
use logtint_core::{ColorizeReport, Colorizer, Rule, default_rules, parse_mappings};
use std::io::{self, BufWriter};
use std::process;

const EXAMPLE: &str = "Example:\n  logtint --mappings \"ERROR:196,WARNING:226,INFO:33\"";

#[derive(Parser, Debug)]
#[command(
    name = "logtint",
    version,
    about = "Reads from stdin and colors log lines based on keyword mappings.",
    after_help = EXAMPLE
)]
struct Cli {
    /// Comma-separated list of keyword:color mappings (e.g. ERROR:196,WARNING:226,INFO:33)
    #[arg(short, long, value_name = "MAPPINGS")]
    mappings: Option<String>,
}

/// Rules to colorize with, or `None` when the given mappings left nothing usable.
///
/// Malformed entries are reported on stderr and skipped.
fn resolve_rules(mappings: Option<&str>) -> Option<Vec<Rule>> {
    let Some(mappings) = mappings.filter(|m| !m.is_empty()) else {
        log::debug!("No mappings given, using built-in defaults");
        return Some(default_rules());
    };

    let parsed = parse_mappings(mappings);
    if let Some(err) = parsed.combined_error() {
        eprintln!("Warning: {}", err);
    }

    if parsed.rules.is_empty() {
        return None;
    }
    Some(parsed.rules)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init();

    let Some(rules) = resolve_rules(cli.mappings.as_deref()) else {
        eprintln!("No valid mappings provided; exiting.");
        process::exit(1);
    };

    let colorizer = Colorizer::new(rules);
    for rule in colorizer.rules() {
        log::debug!("Rule: {} -> {:?}", rule.keyword, rule.color.as_str());
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    finish(colorizer.run(stdin.lock(), BufWriter::new(stdout.lock())))
}

/// Map the outcome of a colorizer run to the process result.
///
/// A closed output pipe is a normal end; other write errors fail the process. Read
/// errors are only reported.
fn finish(result: io::Result<ColorizeReport>) -> Result<()> {
    let report = match result {
        Ok(report) => report,
        // the reader on the other end of the pipe went away (e.g. `| head`)
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            log::debug!("Output closed: {}", e);
            return Ok(());
        }
        Err(e) => return Err(e).context("Failed to write to standard output"),
    };

    if let Some(err) = report.read_error {
        eprintln!("Error reading standard input: {}", err);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_mappings_flag_forms() {
        let cli = Cli::try_parse_from(["logtint", "--mappings", "ERROR:196"]).unwrap();
        assert_eq!(cli.mappings.as_deref(), Some("ERROR:196"));

        let cli = Cli::try_parse_from(["logtint", "-m", "INFO:33"]).unwrap();
        assert_eq!(cli.mappings.as_deref(), Some("INFO:33"));

        let cli = Cli::try_parse_from(["logtint"]).unwrap();
        assert!(cli.mappings.is_none());
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        assert!(Cli::try_parse_from(["logtint", "--verbose"]).is_err());
    }

    #[test]
    fn test_resolve_rules_defaults() {
        let rules = resolve_rules(None).unwrap();
        assert_eq!(rules, default_rules());

        let rules = resolve_rules(Some("")).unwrap();
        assert_eq!(rules, default_rules());
    }

    #[test]
    fn test_resolve_rules_partial() {
        let rules = resolve_rules(Some("BAD_ENTRY,ERROR:196")).unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].keyword, "ERROR");
    }

    #[test]
    fn test_resolve_rules_nothing_usable() {
        assert!(resolve_rules(Some("X:")).is_none());
        assert!(resolve_rules(Some(" , ")).is_none());
    }

    #[test]
    fn test_finish_ok() {
        assert!(finish(Ok(ColorizeReport::default())).is_ok());
    }

    #[test]
    fn test_finish_read_error_keeps_success() {
        let report = ColorizeReport {
            read_error: Some(io::Error::other("stream reset")),
            ..ColorizeReport::default()
        };
        assert!(finish(Ok(report)).is_ok());
    }

    #[test]
    fn test_finish_broken_pipe_is_quiet() {
        let closed = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed");
        assert!(finish(Err(closed)).is_ok());
    }

    #[test]
    fn test_finish_write_error_fails() {
        let denied = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err = finish(Err(denied)).unwrap_err();
        assert_eq!(err.to_string(), "Failed to write to standard output");
        let source = err.downcast_ref::<io::Error>().unwrap();
        assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
    }
}
