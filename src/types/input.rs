//! Engine input: the caller's responses, raw and normalized

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Ordered responses supplied by the caller, untouched
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInput {
    pub responses: Vec<String>,
}

impl RawInput {
    pub fn new<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            responses: responses.into_iter().map(Into::into).collect(),
        }
    }

    /// Build from loosely typed JSON; entries that are not strings are dropped
    pub fn from_values(values: &[Value]) -> Self {
        Self {
            responses: values
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect(),
        }
    }

    /// Responses joined with single spaces, no other processing.
    ///
    /// This is the text the depth estimator counts and the phrase selector hashes.
    pub fn raw_text(&self) -> String {
        self.responses.join(" ")
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }
}

/// Lower-cased, whitespace-collapsed analysis text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedText(String);

impl NormalizedText {
    pub(crate) fn new(text: String) -> Self {
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Plain substring containment
    pub fn contains(&self, phrase: &str) -> bool {
        self.0.contains(phrase)
    }
}
