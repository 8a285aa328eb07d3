//! Error type definitions.
//!
//! This module defines all error types used throughout the pipeline. Every
//! kind is fatal for the run: there is no retry policy and no partial
//! artifact is ever considered valid.

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] reqwest::Error),
}

/// Error types for registry fetches.
///
/// Tagged with the registry name and URL so a failed run names the source
/// that broke it.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport-level failure: connect, timeout, TLS, or body read.
    #[error("fetch of {registry} ({url}) failed: {cause}")]
    Transport {
        /// Display name of the registry source
        registry: String,
        /// URL that was requested
        url: String,
        /// Underlying transport error
        #[source]
        cause: reqwest::Error,
    },

    /// The registry responded with a non-success HTTP status.
    #[error("{registry} responded with HTTP {status} at {url}")]
    Status {
        /// Display name of the registry source
        registry: String,
        /// URL that was requested
        url: String,
        /// HTTP status code received
        status: u16,
    },

    /// The registry body was not valid UTF-8.
    #[error("{registry} returned non-UTF-8 content at {url}")]
    Decode {
        /// Display name of the registry source
        registry: String,
        /// URL that was requested
        url: String,
        /// Underlying decode error
        #[source]
        cause: std::string::FromUtf8Error,
    },
}

/// Error types for source-text classification.
///
/// Classification is permissive-by-filtering, so this only occurs when a
/// line carries evidence of a mangled decode (a Unicode replacement
/// character) that slipped past the transport layer.
#[derive(Error, Debug)]
pub enum ParseError {
    /// A line contained a Unicode replacement character.
    #[error("malformed encoding on line {line}")]
    MalformedLine {
        /// 1-based line number within the source text
        line: usize,
    },
}

/// Error types for artifact output.
#[derive(Error, Debug)]
pub enum WriteError {
    /// Error creating or writing the temporary artifact file.
    #[error("artifact I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error renaming the temporary file over the output path.
    #[error("persisting artifact: {0}")]
    Persist(#[from] tempfile::PersistError),
}
