//! Input depth classification

use serde::{Deserialize, Serialize};

/// How much detail the caller supplied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DepthLabel {
    /// Short or fragmentary input
    Limited,
    /// Usable but thin
    Moderate,
    /// Well detailed
    High,
}

impl DepthLabel {
    /// Fixed advisory attached to the label
    pub fn note(&self) -> &'static str {
        match self {
            DepthLabel::Limited => {
                "Limited input depth. Longer answers with concrete examples will sharpen this snapshot."
            }
            DepthLabel::Moderate => {
                "Moderate input depth. A few more specific examples would sharpen the read."
            }
            DepthLabel::High => {
                "High input depth. The snapshot draws on a well-detailed set of responses."
            }
        }
    }
}

impl std::fmt::Display for DepthLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DepthLabel::Limited => "Limited",
            DepthLabel::Moderate => "Moderate",
            DepthLabel::High => "High",
        };
        write!(f, "{}", name)
    }
}

/// Depth label plus its advisory note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepthRating {
    pub label: DepthLabel,
    pub note: String,
}

impl DepthRating {
    pub fn new(label: DepthLabel) -> Self {
        Self {
            label,
            note: label.note().to_string(),
        }
    }
}
