use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_safe_name() {
    match parse(&["anidl", "safe-name", "Re:Zero?"]) {
        CliCommand::SafeName { text } => assert_eq!(text, "Re:Zero?"),
        _ => panic!("expected SafeName"),
    }
}

#[test]
fn cli_parse_pad_default_width() {
    match parse(&["anidl", "pad", "7"]) {
        CliCommand::Pad { num, width } => {
            assert_eq!(num, "7");
            assert_eq!(width, None);
        }
        _ => panic!("expected Pad"),
    }
}

#[test]
fn cli_parse_pad_width() {
    match parse(&["anidl", "pad", "7", "--width", "4"]) {
        CliCommand::Pad { width, .. } => assert_eq!(width, Some(4)),
        _ => panic!("expected Pad with width"),
    }
}

#[test]
fn cli_parse_clean_name() {
    match parse(&["anidl", "clean-name", "Keijo (SUB)"]) {
        CliCommand::CleanName { name } => assert_eq!(name, "Keijo (SUB)"),
        _ => panic!("expected CleanName"),
    }
}

#[test]
fn cli_parse_slug() {
    match parse(&["anidl", "slug", "Keijo!!!!!!!!"]) {
        CliCommand::Slug { name } => assert_eq!(name, "Keijo!!!!!!!!"),
        _ => panic!("expected Slug"),
    }
}

#[test]
fn cli_missing_subcommand_is_error() {
    assert!(Cli::try_parse_from(["anidl"]).is_err());
}
