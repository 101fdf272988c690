//! Fetch/reconcile/resolve orchestration.
//!
//! `SyncService` runs one synchronization cycle at a time: fetch the remote
//! list, reconcile it against the store, and either adopt the remote list,
//! record a pending conflict for the user to arbitrate, or do nothing. The
//! pending conflict is persisted through the store so a later invocation (or
//! a later timer tick) can resolve or replace it; a newer conflicting fetch
//! simply overwrites the previous snapshot.
//!
//! The service holds no locks and never runs cycles concurrently; the fetch
//! is the only suspension point and the rest of the cycle completes
//! synchronously.

use chrono::Utc;
use clap::ValueEnum;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::QuoteError;
use crate::quote::Quote;
use crate::reconcile::{ReconciliationResult, SyncDecision, reconcile};
use crate::remote::RemoteSource;
use crate::result::Result;
use crate::storage::Storage;
use crate::store::QuoteStore;

/// Seconds between automatic sync cycles in watch mode.
pub const SYNC_INTERVAL_SECS: u64 = 60;

/// User decision applied to a pending sync conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Display, EnumString)]
#[clap(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Resolution {
    /// Replace the local list with the remote snapshot captured at diff time.
    AcceptRemote,
    /// Discard the remote snapshot and keep the local list unchanged.
    KeepLocal,
}

/// Persisted conflict state awaiting user arbitration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingSync {
    /// The full remote list captured at diff time. Accept-remote adopts
    /// exactly this snapshot, not whatever the remote serves later.
    pub remote_snapshot: Vec<Quote>,
    /// Remote entries absent locally, in remote order.
    pub server_only: Vec<Quote>,
    /// Local entries absent remotely, in local order.
    pub local_only: Vec<Quote>,
    /// Fetch time in UTC milliseconds since the Unix epoch.
    pub fetched_at_ms: u64,
}

impl PendingSync {
    fn from_diff(remote_snapshot: Vec<Quote>, result: ReconciliationResult) -> Self {
        PendingSync {
            remote_snapshot,
            server_only: result.server_only,
            local_only: result.local_only,
            fetched_at_ms: Utc::now().timestamp_millis() as u64,
        }
    }
}

/// Outcome of one synchronization cycle, for the caller to display.
#[derive(Debug, Clone, PartialEq)]
pub enum SyncReport {
    /// Local and remote lists already match; nothing changed.
    InSync,
    /// The remote list was adopted without conflicts.
    AutoMerged {
        /// Size of the adopted list.
        total: usize,
    },
    /// Differences were found; a pending conflict was recorded.
    Conflict {
        /// Remote entries absent locally.
        server_only: Vec<Quote>,
        /// Local entries absent remotely.
        local_only: Vec<Quote>,
    },
}

/// Outcome of applying a resolution to a pending conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolveReport {
    /// The resolution that was applied.
    pub resolution: Resolution,
    /// Size of the local list after applying it.
    pub total: usize,
}

/// Synchronization orchestrator over a quote store.
pub struct SyncService<'a, S: Storage> {
    store: &'a mut QuoteStore<S>,
}

impl<'a, S: Storage> SyncService<'a, S> {
    /// Creates a service operating on `store`.
    pub fn new(store: &'a mut QuoteStore<S>) -> Self {
        SyncService { store }
    }

    /// Runs one fetch-and-reconcile cycle against `remote`.
    ///
    /// Any fetch or payload failure is returned before state is touched, so
    /// a failed cycle mutates nothing. A conflict replaces whatever pending
    /// snapshot a previous cycle may have recorded.
    pub fn run_cycle(&mut self, remote: &dyn RemoteSource) -> Result<SyncReport> {
        let remote_quotes = remote.fetch_quotes()?;

        match reconcile(&remote_quotes, self.store.quotes()) {
            SyncDecision::InSync => {
                debug!("remote list matches the local list; nothing to do");
                Ok(SyncReport::InSync)
            }
            SyncDecision::AutoMerge { merged } => {
                let total = merged.len();
                self.store.replace(merged)?;
                info!("adopted {total} quotes from the remote source (no conflicts)");
                Ok(SyncReport::AutoMerged { total })
            }
            SyncDecision::NeedsResolution(result) => {
                info!(
                    "sync detected {} server-only and {} local-only quote(s); awaiting resolution",
                    result.server_only.len(),
                    result.local_only.len()
                );
                let report = SyncReport::Conflict {
                    server_only: result.server_only.clone(),
                    local_only: result.local_only.clone(),
                };
                let pending = PendingSync::from_diff(remote_quotes, result);
                self.store.set_pending(&pending)?;
                Ok(report)
            }
        }
    }

    /// Applies `resolution` to the pending conflict.
    ///
    /// Accept-remote replaces the local list with the snapshot captured at
    /// diff time; keep-local persists the local list unchanged. Both clear
    /// the pending state. Errors with [`QuoteError::NoPendingConflict`] when
    /// nothing is pending.
    pub fn resolve(&mut self, resolution: Resolution) -> Result<ResolveReport> {
        let pending = self.store.pending()?.ok_or(QuoteError::NoPendingConflict)?;

        match resolution {
            Resolution::AcceptRemote => {
                let total = pending.remote_snapshot.len();
                self.store.replace(pending.remote_snapshot)?;
                self.store.clear_pending()?;
                info!("accepted the remote snapshot ({total} quotes)");
                Ok(ResolveReport { resolution, total })
            }
            Resolution::KeepLocal => {
                self.store.save()?;
                self.store.clear_pending()?;
                let total = self.store.quotes().len();
                info!("kept the local list ({total} quotes)");
                Ok(ResolveReport { resolution, total })
            }
        }
    }
}
