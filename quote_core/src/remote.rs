//! HTTP access to the remote quote source.
//!
//! The remote side is a plain HTTP endpoint that serves and accepts JSON
//! arrays of quotes. `RemoteSource` is the seam the sync service is tested
//! through; `HttpRemote` is the production implementation on a blocking
//! reqwest client.
//!
//! Payload handling is deliberately lopsided: a body that is not an array of
//! objects is rejected wholesale (callers treat that as a failed fetch and
//! skip the cycle), while malformed fields inside an object coerce to empty
//! strings and never fail a fetch. Placeholder feeds that carry a `title`
//! field instead of `text` are mapped into quotes under a fixed category.

use serde_json::Value;

use crate::error::QuoteError;
use crate::quote::Quote;
use crate::result::Result;

/// Category assigned to quotes mapped from `title`-shaped remote entries.
pub const SHIM_CATEGORY: &str = "Server";

/// A source of remote quotes that can also receive the local list.
pub trait RemoteSource {
    /// Fetches the current remote quote list.
    fn fetch_quotes(&self) -> Result<Vec<Quote>>;
    /// Sends the full local quote list to the remote side.
    fn push_quotes(&self, quotes: &[Quote]) -> Result<()>;
}

/// Remote quote source backed by an HTTP endpoint.
pub struct HttpRemote {
    url: String,
    client: reqwest::blocking::Client,
}

impl HttpRemote {
    /// Creates a client for the endpoint at `url`.
    pub fn new(url: impl Into<String>) -> Self {
        HttpRemote {
            url: url.into(),
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl RemoteSource for HttpRemote {
    fn fetch_quotes(&self) -> Result<Vec<Quote>> {
        let payload: Value = self
            .client
            .get(&self.url)
            .send()?
            .error_for_status()?
            .json()?;
        quotes_from_payload(&payload)
    }

    fn push_quotes(&self, quotes: &[Quote]) -> Result<()> {
        self.client
            .post(&self.url)
            .json(quotes)
            .send()?
            .error_for_status()?;
        Ok(())
    }
}

/// Converts a fetched JSON value into quotes.
///
/// The value must be an array of objects; anything else rejects the whole
/// payload. Within an object, missing or non-string `text`/`category` fields
/// coerce to empty strings.
pub fn quotes_from_payload(payload: &Value) -> Result<Vec<Quote>> {
    let entries = payload.as_array().ok_or_else(|| {
        QuoteError::InvalidPayload("remote payload is not a JSON array".to_string())
    })?;
    entries.iter().map(quote_from_entry).collect()
}

fn quote_from_entry(entry: &Value) -> Result<Quote> {
    let object = entry.as_object().ok_or_else(|| {
        QuoteError::InvalidPayload(format!("remote entry is not an object: {entry}"))
    })?;

    let text = object.get("text").and_then(Value::as_str);
    if text.is_none() {
        // Placeholder-API shim: entries shaped like {"title": ...}.
        if let Some(title) = object.get("title").and_then(Value::as_str) {
            return Ok(Quote::new(title, SHIM_CATEGORY));
        }
    }

    let category = object.get("category").and_then(Value::as_str).unwrap_or("");
    Ok(Quote::new(text.unwrap_or(""), category))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn payload_must_be_an_array() {
        let err = quotes_from_payload(&json!({"quotes": []})).unwrap_err();
        assert!(matches!(err, QuoteError::InvalidPayload(_)));
    }

    #[test]
    fn entries_must_be_objects() {
        let err = quotes_from_payload(&json!(["just a string"])).unwrap_err();
        assert!(matches!(err, QuoteError::InvalidPayload(_)));
    }

    #[test]
    fn object_fields_coerce_to_empty_strings() {
        let quotes = quotes_from_payload(&json!([{"text": 5, "category": null}, {}])).unwrap();
        assert_eq!(quotes, vec![Quote::new("", ""), Quote::new("", "")]);
    }

    #[test]
    fn well_formed_entries_pass_through() {
        let quotes =
            quotes_from_payload(&json!([{"text": "A", "category": "X"}])).unwrap();
        assert_eq!(quotes, vec![Quote::new("A", "X")]);
    }

    #[test]
    fn title_maps_to_the_shim_category() {
        let quotes = quotes_from_payload(&json!([{"title": "remote works"}])).unwrap();
        assert_eq!(quotes, vec![Quote::new("remote works", SHIM_CATEGORY)]);
    }

    #[test]
    fn text_takes_precedence_over_title() {
        let quotes = quotes_from_payload(
            &json!([{"text": "T", "title": "ignored", "category": "C"}]),
        )
        .unwrap();
        assert_eq!(quotes, vec![Quote::new("T", "C")]);
    }
}
