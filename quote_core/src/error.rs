//! Error types shared between the core library and the CLI.
//!
//! The `QuoteError` enum unifies common failure cases for I/O, serialization,
//! HTTP transport, and internal logic, allowing crates to propagate a single
//! error type.
use std::io;

use thiserror::Error;

/// Unified error type shared by the library and the CLI.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// I/O error originating from the standard library or files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Generic formatting/validation error with a human-readable message.
    #[error("Format error: {0}")]
    Format(String),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// HTTP transport failure or non-success status from the remote source.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A remote or imported payload did not have the expected JSON shape.
    /// The whole payload is rejected; no partial state is kept.
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    /// A resolution was requested while no sync conflict is pending.
    #[error("No sync conflict is pending")]
    NoPendingConflict,
}
