//! Narrative archetypes ("modes") and their scores

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Behavioral archetypes, in tie-break order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Mode {
    /// Guards self-direction; reacts to imposed control
    AutonomySentinel,
    /// Processes through analysis and replay
    RuminativeAnalyst,
    /// Absorbs pressure and carries it quietly
    ContainedLoadBearer,
    /// Releases pressure by talking it out
    ExternalProcessor,
    /// Moves fast and commits early
    DecisiveExecutor,
    /// Tunes decisions against other people
    CollabCalibrator,
    /// Stalls or sidesteps under load
    FreezeAvoidance,
    /// Not enough signal to commit to an archetype
    LowSignalBaseline,
}

impl Mode {
    /// Every mode, fallback last
    pub const ALL: [Mode; 8] = [
        Mode::AutonomySentinel,
        Mode::RuminativeAnalyst,
        Mode::ContainedLoadBearer,
        Mode::ExternalProcessor,
        Mode::DecisiveExecutor,
        Mode::CollabCalibrator,
        Mode::FreezeAvoidance,
        Mode::LowSignalBaseline,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Mode::AutonomySentinel => "AUTONOMY_SENTINEL",
            Mode::RuminativeAnalyst => "RUMINATIVE_ANALYST",
            Mode::ContainedLoadBearer => "CONTAINED_LOAD_BEARER",
            Mode::ExternalProcessor => "EXTERNAL_PROCESSOR",
            Mode::DecisiveExecutor => "DECISIVE_EXECUTOR",
            Mode::CollabCalibrator => "COLLAB_CALIBRATOR",
            Mode::FreezeAvoidance => "FREEZE_AVOIDANCE",
            Mode::LowSignalBaseline => "LOW_SIGNAL_BASELINE",
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Mode::LowSignalBaseline)
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Weighted score per scored archetype (the fallback is never scored)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModeScores {
    scores: BTreeMap<Mode, f64>,
}

impl ModeScores {
    pub fn insert(&mut self, mode: Mode, score: f64) {
        self.scores.insert(mode, score.max(0.0));
    }

    pub fn get(&self, mode: Mode) -> f64 {
        self.scores.get(&mode).copied().unwrap_or(0.0)
    }

    /// Entries in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (Mode, f64)> + '_ {
        self.scores.iter().map(|(&m, &s)| (m, s))
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

/// Modes fixed for the whole narrative assembly of one call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedModes {
    /// Drives every section
    pub dominant: Mode,
    /// Contributes texture only (themes, one prompt)
    pub secondary: Mode,
}
