//! Tests for bundle-size, set-bundle-size, completions, man.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;

#[test]
fn cli_parse_bundle_size() {
    match parse(&["sitelist", "bundle-size", "https://example.com/?bundle_size=5"]) {
        CliCommand::BundleSize { url, products } => {
            assert_eq!(url, "https://example.com/?bundle_size=5");
            assert!(products.is_none());
        }
        _ => panic!("expected BundleSize"),
    }
}

#[test]
fn cli_parse_bundle_size_products() {
    match parse(&[
        "sitelist",
        "bundle-size",
        "https://example.com/",
        "--products",
        "/tmp/products.json",
    ]) {
        CliCommand::BundleSize { products, .. } => {
            assert_eq!(
                products.as_deref(),
                Some(std::path::Path::new("/tmp/products.json"))
            );
        }
        _ => panic!("expected BundleSize with --products"),
    }
}

#[test]
fn cli_parse_set_bundle_size() {
    match parse(&["sitelist", "set-bundle-size", "https://example.com/", "10"]) {
        CliCommand::SetBundleSize { url, size } => {
            assert_eq!(url, "https://example.com/");
            assert_eq!(size, 10);
        }
        _ => panic!("expected SetBundleSize"),
    }
}

#[test]
fn cli_set_bundle_size_rejects_non_numeric() {
    assert!(Cli::try_parse_from(["sitelist", "set-bundle-size", "https://example.com/", "ten"]).is_err());
}

#[test]
fn cli_parse_completions() {
    match parse(&["sitelist", "completions", "bash"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, Shell::Bash),
        _ => panic!("expected Completions"),
    }
}

#[test]
fn cli_parse_man() {
    assert!(matches!(parse(&["sitelist", "man"]), CliCommand::Man));
}

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}
