//! tldgen library: TLD list generation pipeline
//!
//! This library fetches the authoritative top-level-domain registries, extracts
//! and normalizes the TLD tokens they publish, merges them into a single
//! deduplicated set, orders that set so that longest-match-first suffix lookup
//! works for downstream consumers, and emits the result as a Go source file.
//!
//! # Example
//!
//! ```no_run
//! use tldgen::{run_generation, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     output: std::path::PathBuf::from("tlds.go"),
//!     ..Default::default()
//! };
//!
//! let report = run_generation(config).await?;
//! println!("Wrote {} entries from {} sources", report.token_count, report.source_count);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

pub mod aggregate;
pub mod classify;
pub mod config;
pub mod emit;
pub mod error_handling;
pub mod fetch;
pub mod initialization;
pub mod order;
pub mod sources;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use order::OrderPolicy;
pub use run::{run_generation, GenerationReport};

// Internal run module (contains the main pipeline orchestration)
mod run {
    use std::path::PathBuf;
    use std::time::Instant;

    use anyhow::{Context, Result};
    use futures::future::try_join_all;
    use log::{debug, info, warn};

    use crate::aggregate::TldSet;
    use crate::classify::extract_tokens;
    use crate::config::Config;
    use crate::emit::{render_artifact, write_artifact};
    use crate::fetch::fetch_source;
    use crate::initialization::init_client;
    use crate::order::order_tokens;
    use crate::sources::configured_sources;

    /// Results of a completed generation run.
    #[derive(Debug, Clone)]
    pub struct GenerationReport {
        /// Number of unique TLD tokens written to the artifact
        pub token_count: usize,
        /// Number of registry sources consulted
        pub source_count: usize,
        /// Path of the generated artifact
        pub output_path: PathBuf,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs the full generation pipeline with the provided configuration.
    ///
    /// This is the main entry point for the library. It fetches every
    /// configured registry, classifies and normalizes each source's text into
    /// TLD tokens, merges them into one deduplicated set, orders the set under
    /// the configured policy, and writes the Go artifact.
    ///
    /// The pipeline is all-or-nothing: any fetch, classification, or write
    /// failure aborts the run and leaves a previously generated artifact
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed, any source
    /// fails to fetch or decode, classification surfaces a malformed line, or
    /// the artifact cannot be written.
    pub async fn run_generation(config: Config) -> Result<GenerationReport> {
        let started = Instant::now();

        let client = init_client(&config).context("Failed to initialize HTTP client")?;
        let sources = configured_sources(&config);

        // Sources share no mutable state until the merge, so they are fetched
        // concurrently and merged only after every fetch has completed.
        let texts = try_join_all(sources.iter().map(|source| fetch_source(&client, source)))
            .await
            .context("Failed to fetch registry sources")?;

        let mut set = TldSet::new();
        for (source, text) in sources.iter().zip(texts.iter()) {
            let tokens = extract_tokens(text, &source.format)
                .with_context(|| format!("Failed to classify {} source text", source.name))?;
            let added = set.merge(tokens);
            debug!("{}: {added} new tokens after merge", source.name);
        }

        if set.is_empty() {
            warn!("no TLD tokens extracted from any source; artifact will be empty");
        }
        info!("merged {} unique TLD tokens", set.len());

        let ordered = order_tokens(set, config.order_policy);
        let artifact = render_artifact(&ordered);
        write_artifact(&config.output, &artifact)
            .with_context(|| format!("Failed to write artifact to {}", config.output.display()))?;
        info!("wrote {} entries to {}", ordered.len(), config.output.display());

        Ok(GenerationReport {
            token_count: ordered.len(),
            source_count: sources.len(),
            output_path: config.output,
            elapsed_seconds: started.elapsed().as_secs_f64(),
        })
    }
}
