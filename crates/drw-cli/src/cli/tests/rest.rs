//! Tests for the sanitize and completions subcommands.

use super::parse;
use crate::cli::CliCommand;
use clap::Parser;
use clap_complete::Shell;

#[test]
fn cli_parse_sanitize() {
    match parse(&["drw", "sanitize", "https://example.com/invoice?id=42"]) {
        CliCommand::Sanitize { input } => {
            assert_eq!(input, "https://example.com/invoice?id=42");
        }
        _ => panic!("expected Sanitize"),
    }
}

#[test]
fn cli_parse_completions() {
    match parse(&["drw", "completions", "bash"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, Shell::Bash),
        _ => panic!("expected Completions"),
    }
}

#[test]
fn cli_requires_a_subcommand() {
    assert!(crate::cli::Cli::try_parse_from(["drw"]).is_err());
}
