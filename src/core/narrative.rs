//! Narrative assembler: selected modes → prose sections
//!
//! Every slot draws from the dominant mode's pools through `select` with its
//! own salt. The secondary mode only adds texture (extra themes and one
//! prompt) and only when its primary signal is actually present.

use crate::core::mode_selector::profile;
use crate::core::narrative_bank::{narrative, ModeNarrative};
use crate::core::selection::select;
use crate::types::{ReportSections, SelectedModes, SignalSummary};
use crate::{MAX_SECONDARY_THEMES, SECONDARY_TEXTURE_MIN};

/// Salt labels, one per narrative slot
pub mod salt {
    pub const OPENER: &str = "orientation.opener";
    pub const BODY: &str = "orientation.body";
    pub const NUANCE: &str = "orientation.nuance";
    pub const UNDERLYING_PATTERNS: &str = "sections.underlying_patterns";
    pub const INTERNAL_DYNAMICS: &str = "sections.internal_dynamics";
    pub const DECISION_CONTROL: &str = "sections.decision_control";
    pub const SIGNALS: [&str; 2] = ["signals.0", "signals.1"];
    pub const PROMPTS: [&str; 2] = ["prompts.0", "prompts.1"];
    pub const SECONDARY_PROMPT: &str = "prompts.secondary";
}

/// Mode-driven prose, before the report builder adds overlays and depth
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Narrative {
    pub orientation_snapshot: String,
    pub core_themes: String,
    pub sections: ReportSections,
    pub real_world_signals: Vec<String>,
    pub reflection_prompts: Vec<String>,
    pub strengths: Vec<String>,
    pub common_misinterpretations: Vec<String>,
}

#[derive(Debug, Default)]
pub struct NarrativeAssembler;

impl NarrativeAssembler {
    pub fn new() -> Self {
        Self
    }

    /// `source` is the raw input text; it seeds every selection.
    pub fn assemble(&self, modes: SelectedModes, summary: &SignalSummary, source: &str) -> Narrative {
        let pools = narrative(modes.dominant);
        let texture = secondary_texture(modes, summary);

        let orientation_snapshot = [
            select(&pools.openers, salt::OPENER, source),
            select(&pools.bodies, salt::BODY, source),
            select(&pools.nuances, salt::NUANCE, source),
        ]
        .join(" ");

        let mut themes: Vec<&str> = pools.themes.to_vec();
        if let Some(secondary) = texture {
            for theme in secondary.themes.iter().take(MAX_SECONDARY_THEMES) {
                if !themes.contains(theme) {
                    themes.push(*theme);
                }
            }
        }

        let sections = ReportSections {
            underlying_patterns: select(&pools.underlying_patterns, salt::UNDERLYING_PATTERNS, source)
                .to_string(),
            internal_dynamics: select(&pools.internal_dynamics, salt::INTERNAL_DYNAMICS, source)
                .to_string(),
            decision_control: select(&pools.decision_control, salt::DECISION_CONTROL, source)
                .to_string(),
        };

        let real_world_signals = pick_slots(&pools.signals, &salt::SIGNALS, source);

        let mut reflection_prompts = pick_slots(&pools.prompts, &salt::PROMPTS, source);
        if let Some(secondary) = texture {
            push_unique(
                &mut reflection_prompts,
                select(&secondary.prompts[0], salt::SECONDARY_PROMPT, source),
            );
        }

        let strengths: Vec<String> = pools.strengths.iter().map(|s| s.to_string()).collect();

        Narrative {
            orientation_snapshot,
            core_themes: themes.join("; "),
            sections,
            real_world_signals,
            reflection_prompts,
            strengths,
            common_misinterpretations: pools.misinterpretations.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Secondary pools, if the secondary mode may lend texture
fn secondary_texture(modes: SelectedModes, summary: &SignalSummary) -> Option<&'static ModeNarrative> {
    if modes.dominant.is_fallback() || modes.secondary == modes.dominant {
        return None;
    }
    let secondary = profile(modes.secondary)?;
    if summary.get(secondary.primary_signal) < SECONDARY_TEXTURE_MIN {
        return None;
    }
    Some(narrative(modes.secondary))
}

fn pick_slots(slots: &[[&'static str; 2]; 2], salts: &[&str; 2], source: &str) -> Vec<String> {
    slots
        .iter()
        .zip(salts)
        .map(|(pool, salt)| select(pool, salt, source).to_string())
        .collect()
}

fn push_unique(list: &mut Vec<String>, item: &str) {
    if !list.iter().any(|existing| existing == item) {
        list.push(item.to_string());
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::signal_bank::{
        EXTERNAL_PRESSURE_RELEASE, INTERNAL_PRESSURE_REGULATION, SIGNAL_BANK,
    };
    use crate::types::Mode;

    fn summary(values: &[(&str, u32)]) -> SignalSummary {
        let mut s = SignalSummary::zero(SIGNAL_BANK);
        for &(name, v) in values {
            s.set(name, v);
        }
        s
    }

    fn modes(dominant: Mode, secondary: Mode) -> SelectedModes {
        SelectedModes { dominant, secondary }
    }

    #[test]
    fn test_deterministic() {
        let assembler = NarrativeAssembler::new();
        let s = summary(&[(INTERNAL_PRESSURE_REGULATION, 4)]);
        let m = modes(Mode::ContainedLoadBearer, Mode::AutonomySentinel);
        let a = assembler.assemble(m, &s, "I keep things inside.");
        let b = assembler.assemble(m, &s, "I keep things inside.");
        assert_eq!(a, b);
    }

    #[test]
    fn test_draws_from_dominant_pools() {
        let pools = narrative(Mode::ContainedLoadBearer);
        let n = NarrativeAssembler::new().assemble(
            modes(Mode::ContainedLoadBearer, Mode::AutonomySentinel),
            &summary(&[(INTERNAL_PRESSURE_REGULATION, 4)]),
            "source text",
        );

        assert!(pools.openers.iter().any(|o| n.orientation_snapshot.starts_with(o)));
        assert!(pools.nuances.iter().any(|o| n.orientation_snapshot.ends_with(o)));
        assert!(pools.underlying_patterns.contains(&n.sections.underlying_patterns.as_str()));
        assert!(pools.internal_dynamics.contains(&n.sections.internal_dynamics.as_str()));
        assert!(pools.decision_control.contains(&n.sections.decision_control.as_str()));
        assert_eq!(n.real_world_signals.len(), 2);
        assert!(pools.signals[0].contains(&n.real_world_signals[0].as_str()));
        assert!(pools.signals[1].contains(&n.real_world_signals[1].as_str()));
    }

    #[test]
    fn test_secondary_themes_need_support() {
        let assembler = NarrativeAssembler::new();
        let m = modes(Mode::ContainedLoadBearer, Mode::ExternalProcessor);
        let external_theme = narrative(Mode::ExternalProcessor).themes[0];

        let weak = assembler.assemble(
            m,
            &summary(&[(INTERNAL_PRESSURE_REGULATION, 4), (EXTERNAL_PRESSURE_RELEASE, 1)]),
            "x",
        );
        assert!(!weak.core_themes.contains(external_theme));
        assert_eq!(weak.reflection_prompts.len(), 2);

        let strong = assembler.assemble(
            m,
            &summary(&[(INTERNAL_PRESSURE_REGULATION, 4), (EXTERNAL_PRESSURE_RELEASE, 2)]),
            "x",
        );
        assert!(strong.core_themes.contains(external_theme));
        assert_eq!(strong.reflection_prompts.len(), 3);
        assert_eq!(strong.strengths.len(), 2);
        for strength in narrative(Mode::ExternalProcessor).strengths {
            assert!(!strong.strengths.iter().any(|s| s == strength));
        }
    }

    #[test]
    fn test_secondary_theme_cap() {
        let n = NarrativeAssembler::new().assemble(
            modes(Mode::ContainedLoadBearer, Mode::RuminativeAnalyst),
            &summary(&[(INTERNAL_PRESSURE_REGULATION, 4), (crate::core::signal_bank::COGNITIVE_LOAD, 3)]),
            "x",
        );
        let own = narrative(Mode::ContainedLoadBearer).themes.len();
        assert_eq!(n.core_themes.split("; ").count(), own + MAX_SECONDARY_THEMES);
    }

    #[test]
    fn test_fallback_uses_only_its_own_pools() {
        let pools = narrative(Mode::LowSignalBaseline);
        let n = NarrativeAssembler::new().assemble(
            modes(Mode::LowSignalBaseline, Mode::ExternalProcessor),
            &summary(&[(EXTERNAL_PRESSURE_RELEASE, 5)]),
            "",
        );
        assert_eq!(n.core_themes, pools.themes.join("; "));
        assert_eq!(n.reflection_prompts.len(), 2);
        assert_eq!(n.strengths.len(), 2);
        for prompt in &n.reflection_prompts {
            assert!(pools.prompts.iter().flatten().any(|p| p == prompt));
        }
    }

    #[test]
    fn test_orientation_has_three_sentences() {
        let n = NarrativeAssembler::new().assemble(
            modes(Mode::DecisiveExecutor, Mode::AutonomySentinel),
            &SignalSummary::zero(SIGNAL_BANK),
            "I just do it.",
        );
        assert_eq!(n.orientation_snapshot.matches(". ").count(), 2);
        assert!(n.orientation_snapshot.ends_with('.'));
    }
}
