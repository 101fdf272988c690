//!
//! Core library for the quote store and its remote synchronization.
//!
//! This crate aggregates:
//! - `error` — unified error type `QuoteError` used across the workspace.
//! - `result` — handy `Result<T, QuoteError>` alias.
//! - `quote` — the `Quote` record and normalized-key equality.
//! - `storage` — key-value persistence trait and file-backed implementation.
//! - `store` — the owned durable quote list with explicit load/mutate/persist.
//! - `reconcile` — local/remote list reconciliation.
//! - `remote` — HTTP access to the remote quote source.
//! - `sync` — fetch/reconcile/resolve orchestration and pending conflict state.
#![warn(missing_docs)]
pub mod error;
pub mod result;
pub mod quote;
pub mod storage;
pub mod store;
pub mod reconcile;
pub mod remote;
pub mod sync;

pub use error::QuoteError;
pub use result::Result;
pub use quote::Quote;
