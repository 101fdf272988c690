//! Quote data model and key normalization.
//!
//! A `Quote` is the sole domain record: a piece of text and the category it
//! belongs to. Quotes carry no identifier; identity is derived from content
//! through [`Quote::normalized_key`], which is what the reconciler compares.

use serde::{Deserialize, Serialize};

/// Separator between the text and category fields inside a normalized key.
///
/// Chosen not to occur naturally in either field. A category that embeds the
/// separator can collide with another key; accepted risk.
pub const KEY_SEPARATOR: &str = "||";

/// A single quote with its category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// The quote text.
    #[serde(default)]
    pub text: String,
    /// Category the quote is filed under.
    #[serde(default)]
    pub category: String,
}

impl Quote {
    /// Creates a quote from the given text and category.
    pub fn new(text: impl Into<String>, category: impl Into<String>) -> Self {
        Quote {
            text: text.into(),
            category: category.into(),
        }
    }

    /// Normalized identity key of this quote.
    ///
    /// Both fields are whitespace-trimmed, joined with [`KEY_SEPARATOR`], and
    /// the result is lowercased. The key is total and deterministic, so two
    /// quotes that differ only in case or surrounding whitespace compare
    /// equal. Fields missing from incoming JSON deserialize to empty strings
    /// and therefore still produce a valid key.
    pub fn normalized_key(&self) -> String {
        format!(
            "{}{}{}",
            self.text.trim(),
            KEY_SEPARATOR,
            self.category.trim()
        )
        .to_lowercase()
    }
}

/// Built-in quotes used when the durable store holds no list yet.
///
/// These are only kept in memory until the first mutation persists the list.
pub fn default_quotes() -> Vec<Quote> {
    vec![
        Quote::new(
            "The greatest glory in living lies not in never falling, but in rising every time we fall.",
            "Inspiration",
        ),
        Quote::new(
            "Life is what happens when you're busy making other plans.",
            "Life",
        ),
        Quote::new(
            "If you set your goals ridiculously high and it's a failure, you will fail above everyone else's success.",
            "Motivation",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_ignore_case_and_whitespace() {
        let a = Quote::new(" A ", "Cat");
        let b = Quote::new("a", "cat");
        assert_eq!(a.normalized_key(), b.normalized_key());
    }

    #[test]
    fn key_joins_fields_with_separator() {
        let quote = Quote::new("Stay hungry", "Life");
        assert_eq!(quote.normalized_key(), "stay hungry||life");
    }

    #[test]
    fn missing_fields_deserialize_to_empty_strings() {
        let quote: Quote = serde_json::from_str("{}").unwrap();
        assert_eq!(quote, Quote::new("", ""));
        assert_eq!(quote.normalized_key(), KEY_SEPARATOR);
    }
}
