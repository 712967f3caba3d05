//! Tests for command-line parsing into Options.

use std::path::PathBuf;

use clap::Parser;

use crate::cli::TeeArgs;
use crate::config::{NamingMode, Options};

fn parse(args: &[&str]) -> Options {
    let argv = std::iter::once("multitee").chain(args.iter().copied());
    TeeArgs::try_parse_from(argv).expect("valid arguments").into()
}

#[test]
fn no_arguments_means_no_targets() {
    let options = parse(&[]);
    assert_eq!(options, Options::default());
}

#[test]
fn short_flags_map_to_options() {
    let options = parse(&["-a", "-t", "-i", "one", "two"]);
    assert!(options.append);
    assert!(options.timestamp);
    assert!(options.ignore_interrupt);
    assert_eq!(options.targets, vec![PathBuf::from("one"), PathBuf::from("two")]);
    assert_eq!(options.naming_mode(), NamingMode::Verbatim);
}

#[test]
fn combined_short_flags_are_accepted() {
    let options = parse(&["-ti", "log"]);
    assert!(!options.append);
    assert!(options.timestamp);
    assert!(options.ignore_interrupt);
}

#[test]
fn positional_order_and_duplicates_are_kept() {
    let options = parse(&["b", "a", "b"]);
    assert_eq!(
        options.targets,
        vec![PathBuf::from("b"), PathBuf::from("a"), PathBuf::from("b")]
    );
}

#[test]
fn unknown_flag_is_rejected() {
    let argv = ["multitee", "-z"];
    assert!(TeeArgs::try_parse_from(argv).is_err());
}
