//! Signal bank: phrase catalog and the extractor that scores it
//!
//! Matching is plain substring containment on the normalized text. No word
//! boundaries are enforced, so "control" also fires inside "uncontrollable"
//! and one phrase can feed several signals. Within a signal each phrase counts
//! at most once.

use crate::types::{NormalizedText, SignalDefinition, SignalSummary};

// =============================================================================
// SIGNAL NAMES
// =============================================================================

pub const MOTIVATION: &str = "motivation";
pub const RESPONSIBILITY_LOAD: &str = "responsibility_load";
pub const AUTONOMY_NEED: &str = "autonomy_need";
pub const CONTROL_ORIENTATION: &str = "control_orientation";
pub const COGNITIVE_LOAD: &str = "cognitive_load";
pub const INTERNAL_PRESSURE_REGULATION: &str = "internal_pressure_regulation";
pub const EXTERNAL_PRESSURE_RELEASE: &str = "external_pressure_release";
pub const DELIBERATIVE_DECISION_STYLE: &str = "deliberative_decision_style";
pub const DECISIVE_DECISION_STYLE: &str = "decisive_decision_style";
pub const COLLABORATIVE_CALIBRATION: &str = "collaborative_calibration";
pub const AVOIDANCE_FREEZE: &str = "avoidance_freeze";

/// Negators that damp any signal by one when present
pub const GLOBAL_NEGATORS: &[&str] = &["not really", "not at all", "none of that", "i wouldn't say"];

/// The full catalog. New signals are appended here; the extractor never changes.
pub const SIGNAL_BANK: &[SignalDefinition] = &[
    SignalDefinition {
        name: MOTIVATION,
        hits: &[
            "motivated", "driven", "goal", "ambitio", "push myself", "purpose",
            "energized", "want to achieve", "progress", "determined",
        ],
        neg: &["not motivated", "no motivation", "lost my drive", "unmotivated"],
    },
    SignalDefinition {
        name: RESPONSIBILITY_LOAD,
        hits: &[
            "responsible", "holding everything together", "hard on myself", "pressure",
            "expectations", "burden", "carry", "weight", "standards", "on my shoulders",
            "let people down", "accountab",
        ],
        neg: &["not my responsibility", "no pressure", "don't feel responsible"],
    },
    SignalDefinition {
        name: AUTONOMY_NEED,
        hits: &[
            "independent", "micromanag", "freedom", "own decisions", "on my own terms",
            "my own way", "told what to do", "space to", "self-directed", "breathing room",
        ],
        neg: &["don't mind being told", "happy to follow", "prefer direction"],
    },
    SignalDefinition {
        name: CONTROL_ORIENTATION,
        hits: &[
            "control", "in charge", "take charge", "take over", "my way", "structure",
            "predictab", "on top of", "order", "grip",
        ],
        neg: &["let go of control", "don't need control", "go with the flow"],
    },
    SignalDefinition {
        name: COGNITIVE_LOAD,
        hits: &[
            "overthink", "analyze", "analyse", "patterns", "in my head", "replay",
            "can't stop thinking", "ruminat", "what if", "spiral", "mind racing", "notice",
        ],
        neg: &["don't overthink", "not much of a thinker", "clear headed"],
    },
    SignalDefinition {
        name: INTERNAL_PRESSURE_REGULATION,
        hits: &[
            "keep things inside", "keep it inside", "keep it to myself", "handle it myself",
            "deal with it", "internally", "bottle", "hold it in", "rarely vent",
            "don't show", "on my own",
        ],
        neg: &["i vent", "let it all out", "talk it out", "wear my heart"],
    },
    SignalDefinition {
        name: EXTERNAL_PRESSURE_RELEASE,
        hits: &[
            "vent", "talk it out", "let it out", "call a friend", "blow off steam",
            "talk to someone", "express", "rant", "say what i feel", "need to talk",
        ],
        neg: &["i don't vent", "rarely vent", "never vent", "don't talk about"],
    },
    SignalDefinition {
        name: DELIBERATIVE_DECISION_STYLE,
        hits: &[
            "think it through", "weigh", "pros and cons", "take my time", "careful",
            "research", "sleep on it", "consider", "deliberat", "all the options",
        ],
        neg: &["don't overplan", "rarely deliberate", "skip the research"],
    },
    SignalDefinition {
        name: DECISIVE_DECISION_STYLE,
        hits: &[
            "decide quickly", "act fast", "just do it", "gut", "make a call", "right away",
            "instinct", "decisive", "commit", "move on quickly",
        ],
        neg: &["can't decide", "indecisive", "hard to commit"],
    },
    SignalDefinition {
        name: COLLABORATIVE_CALIBRATION,
        hits: &[
            "ask others", "team", "feedback", "together", "input from", "check with",
            "get advice", "bounce ideas", "second opinion", "consensus",
        ],
        neg: &["don't ask for help", "prefer to work alone", "never ask"],
    },
    SignalDefinition {
        name: AVOIDANCE_FREEZE,
        hits: &[
            "avoid", "put it off", "procrastinat", "freeze", "shut down", "stuck",
            "overwhelmed", "withdraw", "ignore it", "paralyz",
        ],
        neg: &["don't avoid", "face it head on", "never freeze"],
    },
];

/// Extracts capped signal intensities from normalized text
#[derive(Debug, Default)]
pub struct SignalExtractor;

impl SignalExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Score every signal in the bank
    pub fn extract(&self, text: &NormalizedText) -> SignalSummary {
        let mut summary = SignalSummary::zero(SIGNAL_BANK);
        if text.is_empty() {
            return summary;
        }

        for def in SIGNAL_BANK {
            summary.set(def.name, evaluate(def, text));
        }
        summary
    }
}

/// Raw intensity for one signal, before clamping
pub fn evaluate(def: &SignalDefinition, text: &NormalizedText) -> u32 {
    let hits = def.hits.iter().filter(|p| text.contains(p)).count() as u32;
    if hits == 0 {
        return 0;
    }

    let negated = def.neg.iter().any(|p| text.contains(p))
        || GLOBAL_NEGATORS.iter().any(|p| text.contains(p));

    if negated {
        hits - 1
    } else {
        hits
    }
}

/// Look up a definition by name
pub fn definition(name: &str) -> Option<&'static SignalDefinition> {
    SIGNAL_BANK.iter().find(|def| def.name == name)
}

// =============================================================================
// TESTS
// =============================================================================
