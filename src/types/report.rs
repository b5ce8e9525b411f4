//! Final report structure

use serde::{Deserialize, Serialize};

use crate::types::{DepthRating, Mode, ModeScores, SignalSummary};

/// The personality snapshot returned for one set of responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// How much detail the input carried
    pub depth_rating: DepthRating,
    /// Opener + body + nuance prose
    pub orientation_snapshot: String,
    /// Short synthesis of the dominant themes
    pub core_themes: String,
    /// The three named narrative sections
    pub sections: ReportSections,
    /// Observable behaviors, most salient first (≤5)
    pub real_world_signals: Vec<String>,
    /// What tends to work well in this pattern (≤4)
    pub strengths: Vec<String>,
    /// How the pattern is commonly misread (≤4)
    pub common_misinterpretations: Vec<String>,
    /// Observational prompts (≤4)
    pub reflection_prompts: Vec<String>,
    /// Follow-up advice; empty unless depth is Limited
    pub next_step_note: String,
    /// Internal scoring detail, only when requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagnostics: Option<Diagnostics>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSections {
    pub underlying_patterns: String,
    pub internal_dynamics: String,
    pub decision_control: String,
}

/// Debug view of the scoring pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostics {
    pub signal_summary: SignalSummary,
    pub mode_scores: ModeScores,
    pub dominant_mode: Mode,
    pub secondary_mode: Mode,
    pub word_count: usize,
    pub sentence_count: usize,
}
