//! Report builder and the engine entry point
//!
//! `analyze` is a pure function of its input: no clock, no counters, no
//! shared state. It can be called from any number of threads at once.

use tracing::debug;

use crate::core::depth::DepthEstimator;
use crate::core::mode_selector::ModeSelector;
use crate::core::narrative::{Narrative, NarrativeAssembler};
use crate::core::narrative_bank::SIGNAL_OVERLAYS;
use crate::core::normalizer::normalize;
use crate::core::signal_bank::SignalExtractor;
use crate::types::{DepthLabel, DepthRating, Diagnostics, Mode, RawInput, Report, SignalSummary};
use crate::{MAX_MISINTERPRETATIONS, MAX_REAL_WORLD_SIGNALS, MAX_REFLECTION_PROMPTS, MAX_STRENGTHS};

/// Follow-up note attached when depth is Limited
pub const NEXT_STEP_NOTE: &str = "For a sharper snapshot, answer each prompt with two or three \
sentences and include a concrete recent example.";

/// Composes depth, narrative and overlays into a Report
#[derive(Debug)]
pub struct ReportBuilder {
    depth: DepthRating,
    narrative: Narrative,
    overlays: Vec<&'static str>,
    diagnostics: Option<Diagnostics>,
}

impl ReportBuilder {
    pub fn new(depth: DepthRating, narrative: Narrative) -> Self {
        Self {
            depth,
            narrative,
            overlays: Vec::new(),
            diagnostics: None,
        }
    }

    /// Queue overlay bullets for strong signals. Skipped for the fallback mode.
    pub fn with_signal_overlays(mut self, summary: &SignalSummary, dominant: Mode) -> Self {
        if dominant.is_fallback() {
            return self;
        }
        self.overlays = SIGNAL_OVERLAYS
            .iter()
            .filter(|o| summary.get(o.signal) >= o.min_intensity)
            .map(|o| o.line)
            .collect();
        self
    }

    pub fn with_diagnostics(mut self, diagnostics: Diagnostics) -> Self {
        self.diagnostics = Some(diagnostics);
        self
    }

    pub fn build(self) -> Report {
        let Narrative {
            orientation_snapshot,
            core_themes,
            sections,
            mut real_world_signals,
            mut reflection_prompts,
            mut strengths,
            mut common_misinterpretations,
        } = self.narrative;

        for line in self.overlays {
            if real_world_signals.len() >= MAX_REAL_WORLD_SIGNALS {
                break;
            }
            if !real_world_signals.iter().any(|s| s == line) {
                real_world_signals.push(line.to_string());
            }
        }

        real_world_signals.truncate(MAX_REAL_WORLD_SIGNALS);
        reflection_prompts.truncate(MAX_REFLECTION_PROMPTS);
        strengths.truncate(MAX_STRENGTHS);
        common_misinterpretations.truncate(MAX_MISINTERPRETATIONS);

        let next_step_note = if self.depth.label == DepthLabel::Limited {
            NEXT_STEP_NOTE.to_string()
        } else {
            String::new()
        };

        Report {
            depth_rating: self.depth,
            orientation_snapshot,
            core_themes,
            sections,
            real_world_signals,
            strengths,
            common_misinterpretations,
            reflection_prompts,
            next_step_note,
            diagnostics: self.diagnostics,
        }
    }
}

/// The whole pipeline. Holds no state between calls.
#[derive(Debug, Default)]
pub struct PersonalityEngine {
    extractor: SignalExtractor,
    depth: DepthEstimator,
    selector: ModeSelector,
    assembler: NarrativeAssembler,
}

impl PersonalityEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn analyze(&self, input: &RawInput) -> Report {
        self.run(input, false)
    }

    /// Same report, with the scoring detail attached
    pub fn analyze_with_diagnostics(&self, input: &RawInput) -> Report {
        self.run(input, true)
    }

    fn run(&self, input: &RawInput, diagnostics: bool) -> Report {
        let raw_text = input.raw_text();
        let normalized = normalize(input);

        let summary = self.extractor.extract(&normalized);
        let (depth, counts) = self.depth.estimate(&raw_text);
        let selection = self.selector.select(&summary, depth.label);
        let narrative = self.assembler.assemble(selection.modes, &summary, &raw_text);

        debug!(
            responses = input.len(),
            words = counts.word_count,
            sentences = counts.sentence_count,
            depth = %depth.label,
            signal_total = summary.total(),
            dominant = %selection.modes.dominant,
            "analysis complete"
        );

        let mut builder = ReportBuilder::new(depth, narrative)
            .with_signal_overlays(&summary, selection.modes.dominant);

        if diagnostics {
            builder = builder.with_diagnostics(Diagnostics {
                signal_summary: summary,
                mode_scores: selection.scores,
                dominant_mode: selection.modes.dominant,
                secondary_mode: selection.modes.secondary,
                word_count: counts.word_count,
                sentence_count: counts.sentence_count,
            });
        }

        builder.build()
    }
}

/// Analyze one set of responses
pub fn analyze(input: &RawInput) -> Report {
    PersonalityEngine::new().analyze(input)
}

/// Analyze and attach diagnostics
pub fn analyze_with_diagnostics(input: &RawInput) -> Report {
    PersonalityEngine::new().analyze_with_diagnostics(input)
}

// =============================================================================
// TESTS
// =============================================================================
