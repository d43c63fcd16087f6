//! CLI parse tests.

use super::Cli;
use clap::Parser;
use std::path::Path;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn cli_parse_logfile_only() {
    let cli = parse(&["logpuzzle", "apache_code.google.com"]);
    assert_eq!(cli.logfile, Path::new("apache_code.google.com"));
    assert!(cli.todir.is_none());
}

#[test]
fn cli_parse_todir_long() {
    let cli = parse(&["logpuzzle", "apache_code.google.com", "--todir", "/tmp/puzzle"]);
    assert_eq!(cli.todir.as_deref(), Some(Path::new("/tmp/puzzle")));
}

#[test]
fn cli_parse_todir_short() {
    let cli = parse(&["logpuzzle", "apache_code.google.com", "-d", "out"]);
    assert_eq!(cli.todir.as_deref(), Some(Path::new("out")));
}

#[test]
fn cli_requires_logfile() {
    assert!(Cli::try_parse_from(["logpuzzle"]).is_err());
}
