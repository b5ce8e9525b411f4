//! Mode selector: signal intensities → weighted archetype scores → dominant mode

use tracing::debug;

use crate::core::signal_bank::{
    AUTONOMY_NEED, AVOIDANCE_FREEZE, COGNITIVE_LOAD, COLLABORATIVE_CALIBRATION,
    CONTROL_ORIENTATION, DECISIVE_DECISION_STYLE, DELIBERATIVE_DECISION_STYLE,
    EXTERNAL_PRESSURE_RELEASE, INTERNAL_PRESSURE_REGULATION, MOTIVATION, RESPONSIBILITY_LOAD,
};
use crate::types::{DepthLabel, Mode, ModeScores, SelectedModes, SignalSummary};
use crate::{AUTONOMY_GATE_MIN_CONTROL, GATE_DAMPING, LOW_SIGNAL_TOTAL_MAX};

/// A mode's score is damped unless `signal` reaches `min_intensity`
#[derive(Debug, Clone, Copy)]
pub struct Gate {
    pub signal: &'static str,
    pub min_intensity: u8,
    pub damping: f64,
}

/// Scoring recipe for one archetype
#[derive(Debug, Clone, Copy)]
pub struct ModeProfile {
    pub mode: Mode,
    /// (signal, weight) pairs summed into the raw score
    pub terms: &'static [(&'static str, f64)],
    /// Signal that must back the mode before it lends texture as secondary
    pub primary_signal: &'static str,
    pub gate: Option<Gate>,
}

/// Scored archetypes in tie-break order. The fallback mode is not listed.
pub const MODE_CATALOG: &[ModeProfile] = &[
    ModeProfile {
        mode: Mode::AutonomySentinel,
        terms: &[(CONTROL_ORIENTATION, 2.4), (AUTONOMY_NEED, 1.8)],
        primary_signal: CONTROL_ORIENTATION,
        gate: Some(Gate {
            signal: CONTROL_ORIENTATION,
            min_intensity: AUTONOMY_GATE_MIN_CONTROL,
            damping: GATE_DAMPING,
        }),
    },
    ModeProfile {
        mode: Mode::RuminativeAnalyst,
        terms: &[(COGNITIVE_LOAD, 2.6), (DELIBERATIVE_DECISION_STYLE, 1.3)],
        primary_signal: COGNITIVE_LOAD,
        gate: None,
    },
    ModeProfile {
        mode: Mode::ContainedLoadBearer,
        terms: &[(INTERNAL_PRESSURE_REGULATION, 2.5), (RESPONSIBILITY_LOAD, 1.4)],
        primary_signal: INTERNAL_PRESSURE_REGULATION,
        gate: None,
    },
    ModeProfile {
        mode: Mode::ExternalProcessor,
        terms: &[(EXTERNAL_PRESSURE_RELEASE, 2.5), (COLLABORATIVE_CALIBRATION, 1.2)],
        primary_signal: EXTERNAL_PRESSURE_RELEASE,
        gate: None,
    },
    ModeProfile {
        mode: Mode::DecisiveExecutor,
        terms: &[(DECISIVE_DECISION_STYLE, 2.4), (MOTIVATION, 1.2)],
        primary_signal: DECISIVE_DECISION_STYLE,
        gate: None,
    },
    ModeProfile {
        mode: Mode::CollabCalibrator,
        terms: &[(COLLABORATIVE_CALIBRATION, 2.3), (DELIBERATIVE_DECISION_STYLE, 0.9)],
        primary_signal: COLLABORATIVE_CALIBRATION,
        gate: None,
    },
    ModeProfile {
        mode: Mode::FreezeAvoidance,
        terms: &[(AVOIDANCE_FREEZE, 2.6), (COGNITIVE_LOAD, 0.8)],
        primary_signal: AVOIDANCE_FREEZE,
        gate: None,
    },
];

impl ModeProfile {
    /// Weighted sum before any gate
    pub fn raw_score(&self, summary: &SignalSummary) -> f64 {
        self.terms
            .iter()
            .map(|&(signal, weight)| summary.get(signal) as f64 * weight)
            .sum()
    }

    /// Weighted sum with the gate applied
    pub fn score(&self, summary: &SignalSummary) -> f64 {
        let raw = self.raw_score(summary);
        if self.gate_closed(summary) {
            raw * self.gate.map_or(1.0, |g| g.damping)
        } else {
            raw
        }
    }

    pub fn gate_closed(&self, summary: &SignalSummary) -> bool {
        self.gate
            .map_or(false, |gate| summary.get(gate.signal) < gate.min_intensity)
    }

    /// Gate closed and every non-gate term at zero: the score is nothing but
    /// marginal gate-signal hits, which must not decide the narrative.
    pub fn gate_only(&self, summary: &SignalSummary) -> bool {
        match self.gate {
            Some(gate) if self.gate_closed(summary) => self
                .terms
                .iter()
                .filter(|(signal, _)| *signal != gate.signal)
                .all(|(signal, _)| summary.get(signal) == 0),
            _ => false,
        }
    }
}

/// Profile for a scored mode; `None` for the fallback
pub fn profile(mode: Mode) -> Option<&'static ModeProfile> {
    MODE_CATALOG.iter().find(|p| p.mode == mode)
}

/// Result of mode selection
#[derive(Debug, Clone, PartialEq)]
pub struct ModeSelection {
    pub modes: SelectedModes,
    pub scores: ModeScores,
    /// True when the low-signal fallback overrode the ranking
    pub fallback: bool,
}

/// Picks the dominant and secondary archetypes
#[derive(Debug, Default)]
pub struct ModeSelector;

impl ModeSelector {
    pub fn new() -> Self {
        Self
    }

    pub fn select(&self, summary: &SignalSummary, depth: DepthLabel) -> ModeSelection {
        let mut scores = ModeScores::default();
        let mut ranked: Vec<(Mode, f64)> = MODE_CATALOG
            .iter()
            .map(|p| {
                let score = p.score(summary).max(0.0);
                scores.insert(p.mode, score);
                (p.mode, score)
            })
            .collect();

        // Stable: equal scores keep catalog order
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

        let leader = ranked
            .iter()
            .copied()
            .find(|&(mode, score)| score > 0.0 && !profile(mode).is_some_and(|p| p.gate_only(summary)));

        let low_signal = summary.total() <= LOW_SIGNAL_TOTAL_MAX && depth == DepthLabel::Limited;

        let (modes, fallback) = match leader {
            Some((dominant, _)) if !low_signal => {
                let secondary = ranked
                    .iter()
                    .map(|&(mode, _)| mode)
                    .find(|&mode| mode != dominant)
                    .unwrap_or(dominant);
                (SelectedModes { dominant, secondary }, false)
            }
            _ => {
                let secondary = ranked.first().map_or(Mode::LowSignalBaseline, |&(mode, _)| mode);
                (
                    SelectedModes {
                        dominant: Mode::LowSignalBaseline,
                        secondary,
                    },
                    true,
                )
            }
        };

        debug!(
            dominant = %modes.dominant,
            secondary = %modes.secondary,
            top_score = ranked.first().map_or(0.0, |&(_, score)| score),
            fallback,
            "mode selected"
        );

        ModeSelection {
            modes,
            scores,
            fallback,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
