//! Tests for CLI option parsing.

use clap::Parser;
use std::path::PathBuf;
use tldgen::config::{DEFAULT_OUTPUT_PATH, SUFFIX_LIST_URL, TLD_REGISTRY_URL};
use tldgen::{Config, OrderPolicy};

#[test]
fn test_defaults_preserve_unparameterized_behavior() {
    let config = Config::try_parse_from(["tldgen"]).expect("no args should parse");

    assert_eq!(config.output, PathBuf::from(DEFAULT_OUTPUT_PATH));
    assert_eq!(config.order_policy, OrderPolicy::ReverseLexicographic);
    assert!(!config.skip_suffix_list);
    assert_eq!(config.tld_registry_url.as_str(), TLD_REGISTRY_URL);
    assert_eq!(config.suffix_list_url.as_str(), SUFFIX_LIST_URL);
    assert_eq!(
        log::LevelFilter::from(config.log_level),
        log::LevelFilter::Info
    );
}

#[test]
fn test_defaults_match_config_default_impl() {
    let parsed = Config::try_parse_from(["tldgen"]).expect("no args should parse");
    let default = Config::default();

    assert_eq!(parsed.output, default.output);
    assert_eq!(parsed.order_policy, default.order_policy);
    assert_eq!(parsed.skip_suffix_list, default.skip_suffix_list);
    assert_eq!(parsed.timeout_seconds, default.timeout_seconds);
    assert_eq!(parsed.tld_registry_url, default.tld_registry_url);
    assert_eq!(parsed.suffix_list_url, default.suffix_list_url);
    assert_eq!(parsed.user_agent, default.user_agent);
}

#[test]
fn test_order_policy_parsing() {
    let config = Config::try_parse_from(["tldgen", "--order-policy", "longest-first"])
        .expect("should parse");
    assert_eq!(config.order_policy, OrderPolicy::LongestFirst);

    let config = Config::try_parse_from(["tldgen", "--order-policy", "reverse-lex"])
        .expect("should parse");
    assert_eq!(config.order_policy, OrderPolicy::ReverseLexicographic);
}

#[test]
fn test_order_policy_rejects_unknown_value() {
    assert!(Config::try_parse_from(["tldgen", "--order-policy", "shuffled"]).is_err());
}

#[test]
fn test_skip_suffix_list_flag() {
    let config = Config::try_parse_from(["tldgen", "--skip-suffix-list"]).expect("should parse");
    assert!(config.skip_suffix_list);
}

#[test]
fn test_output_and_timeout_overrides() {
    let config = Config::try_parse_from([
        "tldgen",
        "--output",
        "src/generated/tlds.go",
        "--timeout-seconds",
        "5",
    ])
    .expect("should parse");

    assert_eq!(config.output, PathBuf::from("src/generated/tlds.go"));
    assert_eq!(config.timeout_seconds, 5);
}

#[test]
fn test_source_url_overrides_must_be_valid_urls() {
    let config = Config::try_parse_from([
        "tldgen",
        "--tld-registry-url",
        "https://mirror.example.org/tlds.txt",
    ])
    .expect("should parse");
    assert_eq!(
        config.tld_registry_url.as_str(),
        "https://mirror.example.org/tlds.txt"
    );

    assert!(Config::try_parse_from(["tldgen", "--tld-registry-url", "not a url"]).is_err());
}
