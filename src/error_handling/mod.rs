//! Error types for the generation pipeline.

mod types;

pub use types::{FetchError, InitializationError, ParseError, WriteError};
