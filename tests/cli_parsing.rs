//! Tests for CLI argument parsing.

use clap::Parser;
use seo_audit::{Action, Config, ExportFormat};
use std::path::PathBuf;

#[test]
fn test_minimal_invocation_uses_defaults() {
    let config = Config::try_parse_from(["seo_audit", "posts.jsonl"])
        .expect("Should parse with just a file argument");

    assert_eq!(config.file, PathBuf::from("posts.jsonl"));
    assert_eq!(config.action, Action::Analyze);
    assert_eq!(config.format, ExportFormat::Csv);
    assert_eq!(config.min_score, 0);
    assert_eq!(config.max_score, 100);
    assert!(config.output.is_none());
    assert_eq!(config.base_url, "https://ai-bytes.tech");
}

#[test]
fn test_stdin_marker_is_accepted() {
    let config = Config::try_parse_from(["seo_audit", "-"]).expect("Should accept '-' for stdin");
    assert_eq!(config.file, PathBuf::from("-"));
}

#[test]
fn test_action_values_parse() {
    for (value, expected) in [
        ("analyze", Action::Analyze),
        ("audit", Action::Audit),
        ("export", Action::Export),
        ("fix", Action::Fix),
    ] {
        let config = Config::try_parse_from(["seo_audit", "posts.jsonl", "--action", value])
            .unwrap_or_else(|e| panic!("--action {} should parse: {}", value, e));
        assert_eq!(config.action, expected);
    }
}

#[test]
fn test_invalid_action_is_rejected() {
    let result = Config::try_parse_from(["seo_audit", "posts.jsonl", "--action", "publish"]);
    assert!(result.is_err());
}

#[test]
fn test_export_flags() {
    let config = Config::try_parse_from([
        "seo_audit",
        "posts.jsonl",
        "--action",
        "export",
        "--format",
        "jsonl",
        "--output",
        "report.jsonl",
    ])
    .expect("Should parse export flags");

    assert_eq!(config.action, Action::Export);
    assert_eq!(config.format, ExportFormat::Jsonl);
    assert_eq!(config.output, Some(PathBuf::from("report.jsonl")));
}

#[test]
fn test_score_range_flags() {
    let config = Config::try_parse_from([
        "seo_audit",
        "posts.jsonl",
        "--min-score",
        "40",
        "--max-score",
        "80",
    ])
    .expect("Should parse score range");

    assert_eq!(config.min_score, 40);
    assert_eq!(config.max_score, 80);
}

#[test]
fn test_site_context_flags() {
    let config = Config::try_parse_from([
        "seo_audit",
        "posts.jsonl",
        "--base-url",
        "https://blog.example.com",
        "--site-name",
        "Example Blog",
        "--twitter-site",
        "@example",
    ])
    .expect("Should parse site flags");

    assert_eq!(config.base_url, "https://blog.example.com");
    assert_eq!(config.site_name, "Example Blog");
    assert_eq!(config.twitter_site, "@example");
}

#[test]
fn test_missing_file_argument_is_rejected() {
    let result = Config::try_parse_from(["seo_audit"]);
    assert!(result.is_err());
}
