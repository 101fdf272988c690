//! Local/remote quote list reconciliation.
//!
//! Reconciliation computes the symmetric difference between a freshly fetched
//! remote list and the durable local list under normalized-key equality, and
//! decides whether the remote list can be adopted silently or the user has to
//! arbitrate. Both functions here are pure: no I/O, no locks, and running
//! them twice on unchanged inputs yields value-equal results.
//!
//! Design notes:
//! - Within one input list, duplicate keys collapse last-write-wins while the
//!   key keeps its first-seen position, so output ordering follows the first
//!   occurrence in the source list.
//! - An order-only difference between set-equal lists is not a sync event:
//!   equality is decided per matched key, never by serialized order.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::quote::Quote;

/// Symmetric difference between a remote and a local quote list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReconciliationResult {
    /// Remote entries whose key is absent locally, in remote first-seen order.
    pub server_only: Vec<Quote>,
    /// Local entries whose key is absent remotely, in local first-seen order.
    pub local_only: Vec<Quote>,
}

impl ReconciliationResult {
    /// `true` when either side holds entries the other does not.
    pub fn has_differences(&self) -> bool {
        !self.server_only.is_empty() || !self.local_only.is_empty()
    }
}

/// Outcome of reconciling a remote list against the local one.
#[derive(Debug, Clone, PartialEq)]
pub enum SyncDecision {
    /// Key sets are equal and every matched pair is literally equal; nothing
    /// to do, regardless of element order.
    InSync,
    /// Key sets are equal but at least one matched pair drifted in literal
    /// form (case or whitespace); the remote list wins silently.
    AutoMerge {
        /// The remote list, to be adopted as the new local list.
        merged: Vec<Quote>,
    },
    /// The diff is non-empty; the local list must not be mutated until the
    /// user applies a resolution.
    NeedsResolution(ReconciliationResult),
}

/// Indexes a list by normalized key: first-seen key order plus a
/// last-write-wins key-to-quote mapping.
fn index_by_key(list: &[Quote]) -> (Vec<String>, HashMap<String, Quote>) {
    let mut order: Vec<String> = Vec::new();
    let mut map: HashMap<String, Quote> = HashMap::new();
    for quote in list {
        let key = quote.normalized_key();
        if !map.contains_key(&key) {
            order.push(key.clone());
        }
        map.insert(key, quote.clone());
    }
    (order, map)
}

/// Computes which quotes exist only remotely and only locally.
///
/// Quotes whose key exists in both inputs are excluded from the result,
/// whichever literal instance each side kept.
pub fn diff(remote: &[Quote], local: &[Quote]) -> ReconciliationResult {
    let (remote_order, remote_map) = index_by_key(remote);
    let (local_order, local_map) = index_by_key(local);

    let server_only = remote_order
        .iter()
        .filter(|key| !local_map.contains_key(*key))
        .map(|key| remote_map[key].clone())
        .collect();
    let local_only = local_order
        .iter()
        .filter(|key| !remote_map.contains_key(*key))
        .map(|key| local_map[key].clone())
        .collect();

    ReconciliationResult {
        server_only,
        local_only,
    }
}

/// Decides how a freshly fetched remote list relates to the local one.
///
/// With a non-empty diff the caller must request user arbitration. With an
/// empty diff the key sets are equal; the lists are in sync when every
/// matched pair is also literally equal field-for-field, otherwise the
/// remote list is adopted.
pub fn reconcile(remote: &[Quote], local: &[Quote]) -> SyncDecision {
    let result = diff(remote, local);
    if result.has_differences() {
        return SyncDecision::NeedsResolution(result);
    }

    let (_, remote_map) = index_by_key(remote);
    let (_, local_map) = index_by_key(local);
    let literally_equal = remote_map.iter().all(|(key, remote_quote)| {
        local_map
            .get(key)
            .is_some_and(|local_quote| local_quote == remote_quote)
    });

    if literally_equal {
        SyncDecision::InSync
    } else {
        SyncDecision::AutoMerge {
            merged: remote.to_vec(),
        }
    }
}
