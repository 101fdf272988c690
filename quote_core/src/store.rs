//! Owned, durable quote list.
//!
//! `QuoteStore` is the single writer of all persisted state. It loads the
//! quote list once at startup, keeps it in memory, and saves it back after
//! every mutation (add, import, replace). The remembered category filter and
//! the pending sync snapshot live behind the same storage collaborator.
//!
//! Design notes:
//! - When the storage holds no list yet, the store starts from the built-in
//!   defaults; those are not persisted until the first mutation.
//! - Import keeps only entries that are objects with string `text` and
//!   `category` fields and reports how many were accepted. A payload that is
//!   not an array, or yields no valid entry, is rejected without mutating
//!   anything.

use rand::Rng;

use crate::error::QuoteError;
use crate::quote::{Quote, default_quotes};
use crate::result::Result;
use crate::storage::Storage;
use crate::sync::PendingSync;

/// Storage key holding the durable quote list as a JSON array.
pub const QUOTES_KEY: &str = "quotesData";
/// Storage key holding the remembered category filter.
pub const FILTER_KEY: &str = "selectedCategory";
/// Storage key holding the pending sync conflict snapshot.
pub const PENDING_KEY: &str = "pendingSync";
/// Filter value that stands for "no category filter".
pub const ALL_CATEGORIES: &str = "all";

/// Durable quote list with explicit load/mutate/persist operations.
pub struct QuoteStore<S: Storage> {
    storage: S,
    quotes: Vec<Quote>,
}

impl<S: Storage> QuoteStore<S> {
    /// Loads the quote list from `storage`, falling back to the built-in
    /// defaults when nothing is stored yet.
    pub fn load(storage: S) -> Result<Self> {
        let quotes = match storage.read(QUOTES_KEY)? {
            Some(raw) => serde_json::from_str(&raw)?,
            None => default_quotes(),
        };
        Ok(QuoteStore { storage, quotes })
    }

    /// Current quote list, in insertion order.
    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    /// Adds a quote after trimming both fields.
    ///
    /// Returns an error when either field is empty after trimming, without
    /// touching the stored list.
    pub fn add(&mut self, text: &str, category: &str) -> Result<Quote> {
        let text = text.trim();
        let category = category.trim();
        if text.is_empty() || category.is_empty() {
            return Err(QuoteError::Format(
                "both quote text and category are required".to_string(),
            ));
        }
        let quote = Quote::new(text, category);
        self.quotes.push(quote.clone());
        self.persist()?;
        Ok(quote)
    }

    /// Merges quotes from a JSON array into the list.
    ///
    /// Entries that are not objects with string `text` and `category` fields
    /// are skipped. Returns the number of accepted quotes.
    pub fn import_json(&mut self, raw: &str) -> Result<usize> {
        let payload: serde_json::Value = serde_json::from_str(raw)?;
        let entries = payload.as_array().ok_or_else(|| {
            QuoteError::InvalidPayload("import payload is not a JSON array".to_string())
        })?;
        let valid: Vec<Quote> = entries
            .iter()
            .filter_map(|entry| {
                let object = entry.as_object()?;
                let text = object.get("text")?.as_str()?;
                let category = object.get("category")?.as_str()?;
                Some(Quote::new(text, category))
            })
            .collect();
        if valid.is_empty() {
            return Err(QuoteError::InvalidPayload(
                "no valid quotes found in import payload".to_string(),
            ));
        }
        let count = valid.len();
        self.quotes.extend(valid);
        self.persist()?;
        Ok(count)
    }

    /// Current list as a pretty-printed JSON array.
    pub fn export_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.quotes)?)
    }

    /// Replaces the whole list and persists it. Used by sync adoption.
    pub fn replace(&mut self, quotes: Vec<Quote>) -> Result<()> {
        self.quotes = quotes;
        self.persist()
    }

    /// Persists the current list unchanged.
    ///
    /// The keep-local resolution is contractually a persist of the unchanged
    /// list, so the operation is exposed even though it mutates nothing.
    pub fn save(&mut self) -> Result<()> {
        self.persist()
    }

    /// Picks a uniformly random quote, optionally restricted to an exact
    /// category match. Returns `None` when the (filtered) list is empty.
    pub fn pick_random(&self, category: Option<&str>) -> Option<&Quote> {
        let filtered: Vec<&Quote> = match category {
            Some(wanted) if wanted != ALL_CATEGORIES => self
                .quotes
                .iter()
                .filter(|q| q.category == wanted)
                .collect(),
            _ => self.quotes.iter().collect(),
        };
        if filtered.is_empty() {
            return None;
        }
        let mut rng = rand::rng();
        Some(filtered[rng.random_range(0..filtered.len())])
    }

    /// Unique categories in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for quote in &self.quotes {
            if !seen.iter().any(|c| c == &quote.category) {
                seen.push(quote.category.clone());
            }
        }
        seen
    }

    /// The remembered category filter, if one is set.
    pub fn selected_category(&self) -> Result<Option<String>> {
        Ok(self.storage.read(FILTER_KEY)?.filter(|c| c != ALL_CATEGORIES))
    }

    /// Remembers `category` as the active filter. The special value
    /// [`ALL_CATEGORIES`] clears the filter instead.
    pub fn set_selected_category(&mut self, category: &str) -> Result<()> {
        if category == ALL_CATEGORIES {
            self.storage.remove(FILTER_KEY)
        } else {
            self.storage.write(FILTER_KEY, category)
        }
    }

    /// The persisted pending sync conflict, if any.
    pub fn pending(&self) -> Result<Option<PendingSync>> {
        match self.storage.read(PENDING_KEY)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Persists `pending` as the current conflict snapshot, replacing any
    /// prior one.
    pub fn set_pending(&mut self, pending: &PendingSync) -> Result<()> {
        let raw = serde_json::to_string(pending)?;
        self.storage.write(PENDING_KEY, &raw)
    }

    /// Clears the pending conflict snapshot.
    pub fn clear_pending(&mut self) -> Result<()> {
        self.storage.remove(PENDING_KEY)
    }

    fn persist(&mut self) -> Result<()> {
        let raw = serde_json::to_string(&self.quotes)?;
        self.storage.write(QUOTES_KEY, &raw)
    }
}
