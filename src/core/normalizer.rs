//! Text normalizer: responses → one lower-cased analysis string

use lazy_static::lazy_static;
use regex::Regex;

use crate::types::{NormalizedText, RawInput};

lazy_static! {
    static ref RE_WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Trim and collapse each response, drop the empty ones, join with single
/// spaces and lower-case the result.
pub fn normalize(input: &RawInput) -> NormalizedText {
    let joined = input
        .responses
        .iter()
        .filter_map(|response| collapse(response))
        .collect::<Vec<_>>()
        .join(" ");

    NormalizedText::new(joined.to_lowercase())
}

fn collapse(response: &str) -> Option<String> {
    let trimmed = response.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(RE_WHITESPACE.replace_all(trimmed, " ").into_owned())
}
