//! Configuration: CLI options and process-wide constants.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use url::Url;

use crate::order::OrderPolicy;

// constants (used as defaults)
/// IANA registry of delegated top-level domains, one token or comment per line.
pub const TLD_REGISTRY_URL: &str = "https://data.iana.org/TLD/tlds-alpha-by-domain.txt";
/// Mozilla public suffix list; mixes suffix rules, comments, wildcards and exceptions.
pub const SUFFIX_LIST_URL: &str = "https://publicsuffix.org/list/effective_tld_names.dat";
/// Default artifact path, relative to the invocation directory.
pub const DEFAULT_OUTPUT_PATH: &str = "tlds.go";

// Network operation timeouts
/// Per-request timeout in seconds; keeps a run from hanging on an unreachable registry
pub const FETCH_TIMEOUT_SECS: u64 = 30;
/// TCP connection timeout in seconds
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Default User-Agent string for registry requests.
///
/// Identifies the tool to registry operators. Users can override this via the
/// `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str = concat!("tldgen/", env!("CARGO_PKG_VERSION"));

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace). Used with the `--log-level` CLI option.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Errors and warnings
    Warn,
    /// Normal operational output (default)
    Info,
    /// Per-source diagnostic output
    Debug,
    /// Everything
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors
    Plain,
    /// Structured JSON format
    Json,
}

/// Command-line options and configuration.
///
/// This struct is automatically generated by `clap` from the field attributes.
/// All options default to the tool's hard-coded behavior: consult both
/// registries, order reverse-lexicographically, write `tlds.go`.
///
/// # Examples
///
/// ```bash
/// # Default behavior
/// tldgen
///
/// # Write elsewhere, flat registry only
/// tldgen --output src/tlds.go --skip-suffix-list
///
/// # The stricter ordering guarantee
/// tldgen --order-policy longest-first
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "tldgen",
    about = "Regenerates the canonical TLD list from the public registries."
)]
pub struct Config {
    /// Artifact output path
    #[arg(long, value_parser, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Ordering policy for the emitted list
    #[arg(long, value_enum, default_value_t = OrderPolicy::ReverseLexicographic)]
    pub order_policy: OrderPolicy,

    /// Consult only the flat TLD registry, skipping the public suffix list
    #[arg(long)]
    pub skip_suffix_list: bool,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = FETCH_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Flat TLD registry URL
    #[arg(long, default_value = TLD_REGISTRY_URL)]
    pub tld_registry_url: Url,

    /// Public suffix list URL
    #[arg(long, default_value = SUFFIX_LIST_URL)]
    pub suffix_list_url: Url,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            order_policy: OrderPolicy::ReverseLexicographic,
            skip_suffix_list: false,
            timeout_seconds: FETCH_TIMEOUT_SECS,
            tld_registry_url: Url::parse(TLD_REGISTRY_URL)
                .expect("TLD_REGISTRY_URL is a valid URL"),
            suffix_list_url: Url::parse(SUFFIX_LIST_URL)
                .expect("SUFFIX_LIST_URL is a valid URL"),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}
