//! Input depth estimator: word and sentence counts → depth label
//!
//! Works on the raw joined text and ignores the signal catalog entirely.

use crate::types::{DepthLabel, DepthRating};
use crate::{
    DEPTH_LIMITED_SENTENCES, DEPTH_LIMITED_WORDS,
    DEPTH_MODERATE_SENTENCES, DEPTH_MODERATE_WORDS,
};

/// Counts the estimator used
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthCounts {
    pub word_count: usize,
    /// Number of `.`, `!`, `?` characters, floored at 1
    pub sentence_count: usize,
}

impl DepthCounts {
    pub fn measure(raw_text: &str) -> Self {
        let word_count = raw_text.split_whitespace().count();
        let sentence_count = raw_text
            .chars()
            .filter(|c| matches!(c, '.' | '!' | '?'))
            .count()
            .max(1);

        Self {
            word_count,
            sentence_count,
        }
    }

    pub fn label(&self) -> DepthLabel {
        if self.word_count < DEPTH_LIMITED_WORDS || self.sentence_count < DEPTH_LIMITED_SENTENCES {
            DepthLabel::Limited
        } else if self.word_count < DEPTH_MODERATE_WORDS
            || self.sentence_count < DEPTH_MODERATE_SENTENCES
        {
            DepthLabel::Moderate
        } else {
            DepthLabel::High
        }
    }
}

/// Classifies how much detail the caller supplied
#[derive(Debug, Default)]
pub struct DepthEstimator;

impl DepthEstimator {
    pub fn new() -> Self {
        Self
    }

    pub fn estimate(&self, raw_text: &str) -> (DepthRating, DepthCounts) {
        let counts = DepthCounts::measure(raw_text);
        (DepthRating::new(counts.label()), counts)
    }

    /// Just the rating
    pub fn rate(&self, raw_text: &str) -> DepthRating {
        self.estimate(raw_text).0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// `words` words split into sentences, `terminators` of them ending in '.'
    fn text(words: usize, terminators: usize) -> String {
        let mut out = Vec::with_capacity(words);
        for i in 0..words {
            let end_here = i + 1 > words - terminators;
            out.push(if end_here { "word.".to_string() } else { "word".to_string() });
        }
        out.join(" ")
    }

    #[test]
    fn test_empty_is_limited() {
        let (rating, counts) = DepthEstimator::new().estimate("");
        assert_eq!(rating.label, DepthLabel::Limited);
        assert_eq!(counts.word_count, 0);
        assert_eq!(counts.sentence_count, 1);
    }

    #[test]
    fn test_sentence_floor() {
        let counts = DepthCounts::measure("no terminators at all");
        assert_eq!(counts.sentence_count, 1);
        assert_eq!(counts.word_count, 4);
    }

    #[test]
    fn test_terminator_kinds() {
        let counts = DepthCounts::measure("Really? Yes! Fine. Ok...");
        assert_eq!(counts.sentence_count, 6);
    }

    #[test]
    fn test_word_boundaries() {
        let estimator = DepthEstimator::new();
        assert_eq!(estimator.rate(&text(79, 3)).label, DepthLabel::Limited);
        assert_eq!(estimator.rate(&text(79, 7)).label, DepthLabel::Limited);
        assert_eq!(estimator.rate(&text(80, 4)).label, DepthLabel::Moderate);
        assert_eq!(estimator.rate(&text(169, 7)).label, DepthLabel::Moderate);
        assert_eq!(estimator.rate(&text(170, 7)).label, DepthLabel::High);
    }

    #[test]
    fn test_sentence_boundaries() {
        let estimator = DepthEstimator::new();
        assert_eq!(estimator.rate(&text(200, 3)).label, DepthLabel::Limited);
        assert_eq!(estimator.rate(&text(200, 6)).label, DepthLabel::Moderate);
        assert_eq!(estimator.rate(&text(200, 7)).label, DepthLabel::High);
    }

    #[test]
    fn test_notes_follow_label() {
        let estimator = DepthEstimator::new();
        let limited = estimator.rate("Short.");
        assert_eq!(limited.note, DepthLabel::Limited.note());
        assert!(limited.note.contains("Limited"));
    }
}
