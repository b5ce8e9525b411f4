//! Integration tests for the analysis pipeline
//!
//! Tests the full path: responses → signals → depth → mode → narrative → report

use pretty_assertions::assert_eq;

use pek_lite::core::mode_selector::profile;
use pek_lite::core::narrative_bank::narrative;
use pek_lite::core::signal_bank::{
    AUTONOMY_NEED, CONTROL_ORIENTATION, EXTERNAL_PRESSURE_RELEASE, INTERNAL_PRESSURE_REGULATION,
};
use pek_lite::core::{SIGNAL_BANK, MODE_CATALOG};
use pek_lite::types::{DepthLabel, Mode, RawInput, Report};
use pek_lite::{analyze, analyze_with_diagnostics, PersonalityEngine, SIGNAL_INTENSITY_MAX};

fn contained_input() -> RawInput {
    RawInput::new([
        "I keep things inside and rarely vent, I handle it myself.",
        "I usually deal with it internally.",
    ])
}

/// `words` filler words with the last `sentences` of them ending in a period
fn filler(words: usize, sentences: usize) -> String {
    (0..words)
        .map(|i| if i + sentences >= words { "plain." } else { "plain" })
        .collect::<Vec<_>>()
        .join(" ")
}

fn depth_of(text: &str) -> DepthLabel {
    analyze(&RawInput::new([text])).depth_rating.label
}

/// Same input, same bytes
#[test]
fn test_determinism() {
    let inputs = [
        contained_input(),
        RawInput::new(["I overthink everything and replay conversations in my head."]),
        RawInput::new(Vec::<String>::new()),
    ];
    for input in &inputs {
        let a = serde_json::to_string(&analyze_with_diagnostics(input)).unwrap();
        let b = serde_json::to_string(&analyze_with_diagnostics(input)).unwrap();
        assert_eq!(a, b);
    }
}

/// Intensities stay within [0, 8] and list caps hold under saturation
#[test]
fn test_boundedness() {
    let every_phrase: Vec<String> = SIGNAL_BANK
        .iter()
        .flat_map(|def| def.hits.iter().map(|p| format!("{} {} {}.", p, p, p)))
        .collect();
    let report = analyze_with_diagnostics(&RawInput::new(every_phrase));
    let diag = report.diagnostics.as_ref().unwrap();

    assert!(diag.signal_summary.iter().all(|(_, v)| v <= SIGNAL_INTENSITY_MAX));
    assert!(diag.signal_summary.iter().any(|(_, v)| v == SIGNAL_INTENSITY_MAX));
    assert!(report.real_world_signals.len() <= 5);
    assert!(report.reflection_prompts.len() <= 4);
    assert!(report.strengths.len() <= 4);
    assert!(report.common_misinterpretations.len() <= 4);
}

/// Exactly one dominant mode, always a known archetype or the fallback
#[test]
fn test_mode_exclusivity() {
    for text in [
        "I went to the store.",
        "I vent and talk it out with friends.",
        "I avoid it, I put it off and I freeze.",
    ] {
        let diag = analyze_with_diagnostics(&RawInput::new([text])).diagnostics.unwrap();
        assert!(Mode::ALL.contains(&diag.dominant_mode));
        assert_ne!(diag.dominant_mode, diag.secondary_mode, "{}", text);
    }
}

/// Weak control keeps AUTONOMY_SENTINEL at a quarter of its raw score
#[test]
fn test_autonomy_gating() {
    let input = RawInput::new(["I need freedom and my own decisions, and I like control."]);
    let diag = analyze_with_diagnostics(&input).diagnostics.unwrap();
    assert!(diag.signal_summary.get(CONTROL_ORIENTATION) < 3);
    assert!(diag.signal_summary.get(AUTONOMY_NEED) >= 2);

    let raw = profile(Mode::AutonomySentinel).unwrap().raw_score(&diag.signal_summary);
    let effective = diag.mode_scores.get(Mode::AutonomySentinel);
    assert!(effective <= raw * 0.25 + 1e-9);
}

/// Control phrases alone never make AUTONOMY_SENTINEL dominant
#[test]
fn test_marginal_control_not_dominant() {
    let diag = analyze_with_diagnostics(&RawInput::new(["I like control and structure."]))
        .diagnostics
        .unwrap();
    assert_eq!(diag.signal_summary.get(CONTROL_ORIENTATION), 2);
    assert_ne!(diag.dominant_mode, Mode::AutonomySentinel);
}

/// A single neutral sentence falls back to the baseline
#[test]
fn test_neutral_sentence_falls_back() {
    let report = analyze_with_diagnostics(&RawInput::new(["I went to the store."]));
    let diag = report.diagnostics.as_ref().unwrap();

    assert!(diag.signal_summary.total() <= 1);
    assert_eq!(report.depth_rating.label, DepthLabel::Limited);
    assert_eq!(diag.dominant_mode, Mode::LowSignalBaseline);
    assert!(!report.next_step_note.is_empty());
}

/// A matching negator costs exactly one point
#[test]
fn test_negation_damping() {
    let plain = analyze_with_diagnostics(&RawInput::new(["I vent and talk it out with my sister."]));
    let negated = analyze_with_diagnostics(&RawInput::new([
        "I vent and talk it out with my sister.",
        "Though honestly I don't vent at work.",
    ]));

    let before = plain.diagnostics.unwrap().signal_summary.get(EXTERNAL_PRESSURE_RELEASE);
    let after = negated.diagnostics.unwrap().signal_summary.get(EXTERNAL_PRESSURE_RELEASE);
    assert_eq!(before, 2);
    assert_eq!(after, before - 1);
}

/// Word and sentence thresholds at their boundaries
#[test]
fn test_depth_thresholds() {
    assert_eq!(depth_of(&filler(79, 3)), DepthLabel::Limited);
    assert_eq!(depth_of(&filler(79, 4)), DepthLabel::Limited);
    assert_eq!(depth_of(&filler(80, 3)), DepthLabel::Limited);
    assert_eq!(depth_of(&filler(80, 4)), DepthLabel::Moderate);
    assert_eq!(depth_of(&filler(169, 7)), DepthLabel::Moderate);
    assert_eq!(depth_of(&filler(170, 6)), DepthLabel::Moderate);
    assert_eq!(depth_of(&filler(170, 7)), DepthLabel::High);
}

/// No responses still yields a complete baseline report
#[test]
fn test_empty_input() {
    let report = analyze_with_diagnostics(&RawInput::new(Vec::<String>::new()));
    let diag = report.diagnostics.as_ref().unwrap();

    assert_eq!(diag.signal_summary.len(), SIGNAL_BANK.len());
    assert_eq!(diag.signal_summary.total(), 0);
    assert_eq!(report.depth_rating.label, DepthLabel::Limited);
    assert_eq!(diag.dominant_mode, Mode::LowSignalBaseline);

    let pools = narrative(Mode::LowSignalBaseline);
    let signals: Vec<&str> = pools.signals.iter().flatten().copied().collect();
    let prompts: Vec<&str> = pools.prompts.iter().flatten().copied().collect();

    assert!(!report.real_world_signals.is_empty());
    assert!(!report.reflection_prompts.is_empty());
    assert!(report.real_world_signals.iter().all(|s| signals.contains(&s.as_str())));
    assert!(report.reflection_prompts.iter().all(|p| prompts.contains(&p.as_str())));
}

/// Inward pressure handling lands on CONTAINED_LOAD_BEARER
#[test]
fn test_contained_scenario() {
    let report = analyze_with_diagnostics(&contained_input());
    let diag = report.diagnostics.as_ref().unwrap();

    assert!(diag.signal_summary.get(INTERNAL_PRESSURE_REGULATION) >= 2);
    assert_eq!(diag.signal_summary.get(EXTERNAL_PRESSURE_RELEASE), 0);
    assert_eq!(diag.dominant_mode, Mode::ContainedLoadBearer);

    let pools = narrative(Mode::ContainedLoadBearer);
    assert!(pools.underlying_patterns.contains(&report.sections.underlying_patterns.as_str()));
    assert!(pools.internal_dynamics.contains(&report.sections.internal_dynamics.as_str()));
    assert!(pools.decision_control.contains(&report.sections.decision_control.as_str()));
    assert!(pools.openers.iter().any(|o| report.orientation_snapshot.starts_with(o)));
    assert!(report.core_themes.starts_with(pools.themes[0]));

    let first_signal = report.real_world_signals[0].as_str();
    assert!(pools.signals.iter().flatten().any(|s| *s == first_signal));
}

/// Every scored archetype is reachable from text
#[test]
fn test_catalog_modes_reachable() {
    assert_eq!(MODE_CATALOG.len(), Mode::ALL.len() - 1);
    let cases = [
        ("I need control, structure and order, I take charge and stay on top of things.", Mode::AutonomySentinel),
        ("I overthink, replay it in my head and my mind racing won't stop.", Mode::RuminativeAnalyst),
        ("I keep things inside, bottle it up, hold it in and deal with it internally.", Mode::ContainedLoadBearer),
        ("I vent, rant and call a friend to blow off steam.", Mode::ExternalProcessor),
        ("I decide quickly, trust my gut and act fast.", Mode::DecisiveExecutor),
        ("I ask others for feedback, check with my team, get advice and look for consensus before acting.", Mode::CollabCalibrator),
        ("I avoid it, put it off, freeze and shut down.", Mode::FreezeAvoidance),
    ];
    let covered: Vec<Mode> = cases.iter().map(|&(_, mode)| mode).collect();
    for p in MODE_CATALOG {
        assert!(covered.contains(&p.mode), "no case for {}", p.mode);
    }
    for (text, expected) in cases {
        let diag = analyze_with_diagnostics(&RawInput::new([text])).diagnostics.unwrap();
        assert_eq!(diag.dominant_mode, expected, "{}", text);
    }
}

/// A supported secondary mode adds a theme and a prompt but never its strengths
#[test]
fn test_secondary_mode_keeps_out_of_strengths() {
    let input = RawInput::new([
        "I keep things inside, bottle it up, hold it in and deal with it internally. Sometimes I rant and call a friend.",
    ]);
    let report = analyze_with_diagnostics(&input);
    let diag = report.diagnostics.as_ref().unwrap();
    assert_eq!(diag.dominant_mode, Mode::ContainedLoadBearer);
    assert_eq!(diag.secondary_mode, Mode::ExternalProcessor);
    assert_eq!(diag.signal_summary.get(EXTERNAL_PRESSURE_RELEASE), 2);

    let contained = narrative(Mode::ContainedLoadBearer);
    let external = narrative(Mode::ExternalProcessor);
    assert_eq!(report.strengths, contained.strengths.to_vec());
    assert!(report.core_themes.contains(external.themes[0]));
    assert!(external.strengths.iter().all(|s| !report.strengths.iter().any(|r| r == s)));
}

/// One engine shared across threads gives identical reports
#[test]
fn test_concurrent_calls_agree() {
    let engine = PersonalityEngine::new();
    let input = contained_input();
    let expected = engine.analyze(&input);

    let reports: Vec<Report> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8).map(|_| scope.spawn(|| engine.analyze(&input))).collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for report in reports {
        assert_eq!(report, expected);
    }
}

/// Reports without diagnostics omit the field and read back unchanged
#[test]
fn test_report_json_shape() {
    let report = analyze(&contained_input());
    let json = serde_json::to_value(&report).unwrap();

    assert!(json.get("diagnostics").is_none());
    assert_eq!(json["depth_rating"]["label"], "Limited");
    assert!(json["sections"]["underlying_patterns"].is_string());

    let back: Report = serde_json::from_value(json).unwrap();
    assert_eq!(back, report);
}
