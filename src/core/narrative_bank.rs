//! Phrase pools per mode
//!
//! Observational language only: no advice, no diagnostic claims.

use crate::core::signal_bank::{
    AUTONOMY_NEED, AVOIDANCE_FREEZE, COGNITIVE_LOAD, COLLABORATIVE_CALIBRATION,
    CONTROL_ORIENTATION, DECISIVE_DECISION_STYLE, DELIBERATIVE_DECISION_STYLE,
    EXTERNAL_PRESSURE_RELEASE, INTERNAL_PRESSURE_REGULATION, MOTIVATION, RESPONSIBILITY_LOAD,
};
use crate::types::Mode;

/// Every candidate phrasing for one mode
#[derive(Debug)]
pub struct ModeNarrative {
    pub openers: [&'static str; 3],
    pub bodies: [&'static str; 3],
    pub nuances: [&'static str; 3],
    /// Intrinsic theme phrases, most central first
    pub themes: &'static [&'static str],
    pub underlying_patterns: [&'static str; 2],
    pub internal_dynamics: [&'static str; 2],
    pub decision_control: [&'static str; 2],
    /// Two slots, each a two-option pool
    pub signals: [[&'static str; 2]; 2],
    pub prompts: [[&'static str; 2]; 2],
    pub strengths: [&'static str; 2],
    pub misinterpretations: [&'static str; 2],
}

/// Pools for `mode`
pub fn narrative(mode: Mode) -> &'static ModeNarrative {
    match mode {
        Mode::AutonomySentinel => &AUTONOMY_SENTINEL,
        Mode::RuminativeAnalyst => &RUMINATIVE_ANALYST,
        Mode::ContainedLoadBearer => &CONTAINED_LOAD_BEARER,
        Mode::ExternalProcessor => &EXTERNAL_PROCESSOR,
        Mode::DecisiveExecutor => &DECISIVE_EXECUTOR,
        Mode::CollabCalibrator => &COLLAB_CALIBRATOR,
        Mode::FreezeAvoidance => &FREEZE_AVOIDANCE,
        Mode::LowSignalBaseline => &LOW_SIGNAL_BASELINE,
    }
}

/// Extra real-world bullet added when a signal is strong enough
#[derive(Debug, Clone, Copy)]
pub struct SignalOverlay {
    pub signal: &'static str,
    pub min_intensity: u8,
    pub line: &'static str,
}

/// Overlays in catalog order
pub const SIGNAL_OVERLAYS: &[SignalOverlay] = &[
    SignalOverlay {
        signal: MOTIVATION,
        min_intensity: 3,
        line: "Momentum seems to matter to you; stalled progress may register as more than an inconvenience.",
    },
    SignalOverlay {
        signal: RESPONSIBILITY_LOAD,
        min_intensity: 2,
        line: "You may feel like the stabilizing force in uncertain situations.",
    },
    SignalOverlay {
        signal: AUTONOMY_NEED,
        min_intensity: 2,
        line: "You appear sensitive to unnecessary constraint or micromanagement.",
    },
    SignalOverlay {
        signal: CONTROL_ORIENTATION,
        min_intensity: 3,
        line: "Unclear ownership of a situation may bother you more than the situation itself.",
    },
    SignalOverlay {
        signal: COGNITIVE_LOAD,
        min_intensity: 3,
        line: "You often think several steps ahead, sometimes before anyone else has started.",
    },
    SignalOverlay {
        signal: INTERNAL_PRESSURE_REGULATION,
        min_intensity: 3,
        line: "You often internalize pressure rather than expressing it outwardly.",
    },
    SignalOverlay {
        signal: EXTERNAL_PRESSURE_RELEASE,
        min_intensity: 3,
        line: "Saying things out loud seems to be part of how you sort them.",
    },
    SignalOverlay {
        signal: DELIBERATIVE_DECISION_STYLE,
        min_intensity: 3,
        line: "You tend to gather more information than a decision strictly requires.",
    },
    SignalOverlay {
        signal: DECISIVE_DECISION_STYLE,
        min_intensity: 3,
        line: "Open loops seem to cost you energy until they are closed.",
    },
    SignalOverlay {
        signal: COLLABORATIVE_CALIBRATION,
        min_intensity: 3,
        line: "Other people's reactions appear to be part of your decision data.",
    },
    SignalOverlay {
        signal: AVOIDANCE_FREEZE,
        min_intensity: 3,
        line: "Some tasks may sit untouched longer than their difficulty would suggest.",
    },
];

// =============================================================================
// AUTONOMY_SENTINEL
// =============================================================================

static AUTONOMY_SENTINEL: ModeNarrative = ModeNarrative {
    openers: [
        "Your responses center on self-direction.",
        "A strong preference for owning your own choices runs through your answers.",
        "Your answers return repeatedly to who gets to decide.",
    ],
    bodies: [
        "You appear to work best when the path is yours to set, and imposed structure tends to register as friction rather than support.",
        "Control over how and when things happen seems to matter as much to you as the outcome itself.",
        "You seem to track where decisions are being made and notice quickly when they are being made for you.",
    ],
    nuances: [
        "That same vigilance can make collaboration feel like a negotiation over territory.",
        "This is less about resisting people than about protecting room to think and act.",
        "When autonomy is respected, this pattern often reads as calm competence.",
    ],
    themes: &["Self-direction", "Sensitivity to imposed control"],
    underlying_patterns: [
        "Underneath, your pattern organizes around keeping decisions close to yourself and limiting how much others steer the process.",
        "The underlying pattern is one of guarded self-direction: you act most freely when the structure is one you chose.",
    ],
    internal_dynamics: [
        "Pressure seems to rise fastest when control is taken away, and less from the workload itself.",
        "Internally, constraint appears to be processed as a signal to push back or to reclaim space.",
    ],
    decision_control: [
        "Your decision style leans toward independent judgment, with input from others treated as optional rather than required.",
        "You appear to prefer setting the terms of a decision before committing to it.",
    ],
    signals: [
        [
            "You may bristle when someone checks your work more often than it needs.",
            "You may quietly redo a plan so that it feels like your own.",
        ],
        [
            "You may prefer clear ownership over shared responsibility.",
            "You may hold back effort when the direction feels imposed.",
        ],
    ],
    prompts: [
        [
            "Notice which kinds of structure feel supportive to you and which feel confining.",
            "Pay attention to when protecting your independence costs you useful input.",
        ],
        [
            "Notice how quickly you register a loss of control, and what follows it.",
            "Pay attention to the moments when sharing a decision feels easy.",
        ],
    ],
    strengths: [
        "Clear internal boundaries around autonomy and self-direction.",
        "Ability to operate without close supervision.",
    ],
    misinterpretations: [
        "This pattern can be mistaken for stubbornness or a dislike of teamwork.",
        "In reality, it often reflects a need for ownership in order to commit fully.",
    ],
};

// =============================================================================
// RUMINATIVE_ANALYST
// =============================================================================

static RUMINATIVE_ANALYST: ModeNarrative = ModeNarrative {
    openers: [
        "Your responses point to a mind that stays busy.",
        "Analysis runs through nearly everything you describe.",
        "Your answers suggest you process experience by turning it over, often more than once.",
    ],
    bodies: [
        "You appear to work through situations by breaking them into parts and replaying how they could unfold.",
        "Patterns, contingencies and what-ifs seem to occupy a large share of your attention.",
        "You tend to keep thinking about a problem after others have set it down.",
    ],
    nuances: [
        "That depth of processing sharpens insight, though it can be hard to switch off.",
        "The same loop that produces careful conclusions can also keep old questions open.",
        "From the outside this can look like hesitation even when a great deal is happening internally.",
    ],
    themes: &["Analytical processing", "Mental replay", "Anticipation of outcomes"],
    underlying_patterns: [
        "Underneath, your pattern relies on thinking as the primary way of managing uncertainty.",
        "The underlying pattern is analytical: understanding a situation seems to come before being comfortable in it.",
    ],
    internal_dynamics: [
        "Cognitive load appears to build quietly, with unresolved questions running in the background.",
        "Internally, tension seems to show up as repeated review rather than as outward stress.",
    ],
    decision_control: [
        "Your decisions tend to follow extended evaluation, sometimes past the point where more information changes the answer.",
        "You appear to prefer seeing the full map before taking the first step.",
    ],
    signals: [
        [
            "You may replay conversations afterward to check what was meant.",
            "You may notice flaws in a plan before anyone else raises them.",
        ],
        [
            "You may find it hard to stop thinking about an unresolved issue at night.",
            "You may prepare for scenarios that never end up happening.",
        ],
    ],
    prompts: [
        [
            "Notice when further analysis adds clarity and when it only adds loops.",
            "Pay attention to which questions you return to most often.",
        ],
        [
            "Notice what finally lets a problem feel settled for you.",
            "Pay attention to how your body feels during long stretches of thinking.",
        ],
    ],
    strengths: [
        "Thorough, pattern-aware reasoning.",
        "Ability to anticipate problems before they surface.",
    ],
    misinterpretations: [
        "This analytical style is sometimes mistaken for indecision.",
        "In reality, it reflects a high standard for understanding before acting.",
    ],
};

// =============================================================================
// CONTAINED_LOAD_BEARER
// =============================================================================

static CONTAINED_LOAD_BEARER: ModeNarrative = ModeNarrative {
    openers: [
        "Your responses suggest you carry a lot without showing it.",
        "Self-containment is the clearest thread in your answers.",
        "Your answers describe someone who handles pressure internally.",
    ],
    bodies: [
        "You appear to absorb demands quietly, working through them on your own before anything reaches the surface.",
        "Strain seems to be managed inward first, with outward signals kept to a minimum.",
        "You tend to take ownership of difficulty and deal with it privately rather than sharing the load.",
    ],
    nuances: [
        "This produces steady composure, though pressure may accumulate below the surface.",
        "Others may not realize how much you are holding until it is already resolved.",
        "The composure is real; it is also partly the result of continuous internal work.",
    ],
    themes: &["Internal pressure regulation", "Quiet ownership of difficulty"],
    underlying_patterns: [
        "Underneath, your pattern organizes around self-reliance: problems are yours to solve, and often yours alone.",
        "The underlying pattern is containment: stress is processed privately before it is expressed, if it is expressed at all.",
    ],
    internal_dynamics: [
        "Pressure appears to be absorbed rather than released, which keeps you outwardly steady while the load builds inside.",
        "Internally, tension seems to be held and managed instead of discharged, so its effects may show up later or indirectly.",
    ],
    decision_control: [
        "Your decisions tend to be made internally and presented once they are settled, with little visible deliberation.",
        "You appear to keep control of difficult situations by handling them yourself rather than delegating or escalating.",
    ],
    signals: [
        [
            "You may be the person others assume is fine.",
            "You may deal with a problem fully before mentioning it existed.",
        ],
        [
            "You may feel tired after stretches that looked calm from the outside.",
            "You may find asking for help more effortful than doing the work.",
        ],
    ],
    prompts: [
        [
            "Notice where pressure tends to settle when you keep it to yourself.",
            "Pay attention to how long you hold something before it feels heavy.",
        ],
        [
            "Notice which people, if any, get to see the load you carry.",
            "Pay attention to what changes on the days you do share the weight.",
        ],
    ],
    strengths: [
        "Reliability under pressure.",
        "Ability to sustain effort without external validation.",
    ],
    misinterpretations: [
        "This pattern can be mistaken for detachment or a lack of feeling.",
        "In reality, it reflects internal discipline and a strong sense of responsibility.",
    ],
};

// =============================================================================
// EXTERNAL_PROCESSOR
// =============================================================================

static EXTERNAL_PROCESSOR: ModeNarrative = ModeNarrative {
    openers: [
        "Your responses suggest you work things out by putting them into words.",
        "Expression is central to how you handle pressure.",
        "Your answers point to a pattern of releasing tension outward.",
    ],
    bodies: [
        "You appear to process experience out loud, with conversation doing much of the sorting.",
        "Strain seems to move through you rather than settling, usually by being shared with someone.",
        "Talking a situation through appears to be how you find out what you actually think about it.",
    ],
    nuances: [
        "This keeps pressure from building, though the first version you say out loud is rarely the final one.",
        "Others may hear a situation as more serious than it is, because they are hearing it mid-process.",
        "The release is quick; the thinking behind it is often still underway.",
    ],
    themes: &["Outward pressure release", "Processing through conversation"],
    underlying_patterns: [
        "Underneath, your pattern relies on expression as a regulator: saying it is part of resolving it.",
        "The underlying pattern is external processing, where clarity forms in dialogue rather than in isolation.",
    ],
    internal_dynamics: [
        "Pressure appears to be discharged steadily rather than stored, which limits buildup but depends on having an outlet.",
        "Internally, tension seems to ease once it has been voiced, even if nothing else has changed.",
    ],
    decision_control: [
        "Your decisions tend to take shape through discussion, with other people acting as a sounding board.",
        "You appear to reach conclusions faster when you can think them through with someone.",
    ],
    signals: [
        [
            "You may reach for a call or a message when something is bothering you.",
            "You may feel noticeably lighter after talking a problem through.",
        ],
        [
            "You may find long silences harder to sit with than difficult conversations.",
            "You may express a reaction strongly and then revise it quickly.",
        ],
    ],
    prompts: [
        [
            "Notice which conversations leave you clearer and which leave you more stirred up.",
            "Pay attention to what happens when no one is available to talk to.",
        ],
        [
            "Notice how your view of a problem changes from the first telling to the last.",
            "Pay attention to who you reach for first when pressure rises.",
        ],
    ],
    strengths: [
        "Pressure rarely builds unnoticed.",
        "Openness that invites others in.",
    ],
    misinterpretations: [
        "This pattern can be mistaken for overreaction or emotional volatility.",
        "In reality, speaking is often the processing step, not the conclusion.",
    ],
};

// =============================================================================
// DECISIVE_EXECUTOR
// =============================================================================

static DECISIVE_EXECUTOR: ModeNarrative = ModeNarrative {
    openers: [
        "Your responses lean strongly toward action.",
        "Momentum is the clearest thread in your answers.",
        "Your answers describe someone who prefers moving to waiting.",
    ],
    bodies: [
        "You appear to make calls quickly and adjust along the way rather than waiting for certainty.",
        "Open questions seem to be resolved by committing, then correcting course if needed.",
        "You tend to trust your read of a situation enough to act on it early.",
    ],
    nuances: [
        "This keeps things moving, though it can leave less room for input from slower processors.",
        "Speed here reflects confidence in recovery more than certainty about the answer.",
        "The same drive that closes loops quickly can feel impatient to people still deciding.",
    ],
    themes: &["Action orientation", "Early commitment"],
    underlying_patterns: [
        "Underneath, your pattern organizes around forward motion: a decision made is better than a decision pending.",
        "The underlying pattern is executive, treating uncertainty as something resolved by doing rather than by deliberating.",
    ],
    internal_dynamics: [
        "Pressure appears to be converted into action quickly, so it rarely has time to accumulate.",
        "Internally, waiting seems to generate more tension than the risk of being wrong.",
    ],
    decision_control: [
        "Your decision style is fast and instinct-led, with correction built into the process instead of caution.",
        "You appear comfortable making the call and owning the outcome, including the adjustments.",
    ],
    signals: [
        [
            "You may decide while others are still listing options.",
            "You may feel restless in meetings that end without a decision.",
        ],
        [
            "You may start before the plan is fully formed.",
            "You may find it easier to fix a wrong choice than to keep choosing.",
        ],
    ],
    prompts: [
        [
            "Notice which decisions you would make differently with one more day.",
            "Pay attention to how waiting feels in your body.",
        ],
        [
            "Notice when speed helps the people around you and when it leaves them behind.",
            "Pay attention to the calls you later revise, and what they share.",
        ],
    ],
    strengths: [
        "Ability to create momentum under uncertainty.",
        "Willingness to own a decision and adjust it.",
    ],
    misinterpretations: [
        "This pattern can be mistaken for impulsiveness.",
        "In reality, it often reflects confidence in course-correction rather than carelessness.",
    ],
};

// =============================================================================
// COLLAB_CALIBRATOR
// =============================================================================

static COLLAB_CALIBRATOR: ModeNarrative = ModeNarrative {
    openers: [
        "Your responses suggest you calibrate against the people around you.",
        "Other perspectives play a central role in how you decide.",
        "Your answers describe a pattern of checking in before committing.",
    ],
    bodies: [
        "You appear to gather input and adjust your position until it fits both the facts and the group.",
        "Feedback seems to function as a steering mechanism rather than a verdict.",
        "You tend to treat decisions as shared work, even when the final call is yours.",
    ],
    nuances: [
        "This builds alignment, though your own view can get harder to hear among the others.",
        "The calibration is active; it is not simply deference.",
        "When input is scarce, decisions may feel less settled than they actually are.",
    ],
    themes: &["Collaborative calibration", "Feedback-driven adjustment"],
    underlying_patterns: [
        "Underneath, your pattern organizes around fit: a good decision is one that works for the people it touches.",
        "The underlying pattern is relational, with other perspectives used to test and refine your own.",
    ],
    internal_dynamics: [
        "Pressure appears to ease once others have weighed in, and to rise when you are deciding alone.",
        "Internally, disagreement within the group seems to register more strongly than difficulty in the task.",
    ],
    decision_control: [
        "Your decisions tend to be made in consultation, with control distributed rather than held tightly.",
        "You appear to prefer a decision that has been checked with others over one made quickly.",
    ],
    signals: [
        [
            "You may run an idea past someone before acting on it.",
            "You may notice when a group has stopped agreeing before anyone says so.",
        ],
        [
            "You may adjust your position after hearing a strong counterpoint.",
            "You may feel uneasy committing to something no one else has seen.",
        ],
    ],
    prompts: [
        [
            "Notice whose input you weigh most heavily, and why.",
            "Pay attention to decisions where your own view got lost in the consultation.",
        ],
        [
            "Notice how you feel when you decide something entirely alone.",
            "Pay attention to the difference between calibrating and deferring.",
        ],
    ],
    strengths: [
        "Ability to build alignment and shared ownership.",
        "Openness to correction and new information.",
    ],
    misinterpretations: [
        "This pattern can be mistaken for a lack of conviction.",
        "In reality, it reflects a deliberate use of other perspectives as decision data.",
    ],
};

// =============================================================================
// FREEZE_AVOIDANCE
// =============================================================================

static FREEZE_AVOIDANCE: ModeNarrative = ModeNarrative {
    openers: [
        "Your responses suggest that pressure sometimes stops you in place.",
        "A pattern of pulling back under load runs through your answers.",
        "Your answers describe moments where engaging feels harder than waiting.",
    ],
    bodies: [
        "You appear to step back from demands that feel too large or too undefined, at least at first.",
        "When pressure peaks, activity seems to slow down rather than speed up.",
        "Difficult tasks may be set aside until the pressure to act outweighs the pressure to avoid.",
    ],
    nuances: [
        "This is a protective response, not a lack of care about the outcome.",
        "Once the first step is taken, the freeze often lifts faster than expected.",
        "The pause can look like indifference from outside while feeling like overload from inside.",
    ],
    themes: &["Protective withdrawal under load", "Delayed engagement"],
    underlying_patterns: [
        "Underneath, your pattern organizes around protection: stepping back limits exposure when demands feel uncertain.",
        "The underlying pattern is one of conserving energy by delaying engagement until the situation feels more manageable.",
    ],
    internal_dynamics: [
        "Pressure appears to accumulate faster than it can be sorted, which tips the system toward shutting down.",
        "Internally, overwhelm seems to show up as stillness rather than as visible stress.",
    ],
    decision_control: [
        "Your decisions may wait until a deadline or outside event forces them.",
        "You appear to regain a sense of control once a task is broken into something small enough to start.",
    ],
    signals: [
        [
            "You may leave a message unanswered because replying feels bigger than it is.",
            "You may reorganize everything around a task instead of starting it.",
        ],
        [
            "You may feel relief when a deadline finally makes the decision for you.",
            "You may go quiet when a conversation becomes tense.",
        ],
    ],
    prompts: [
        [
            "Notice what the first sign of a freeze feels like for you.",
            "Pay attention to which tasks get set aside most often.",
        ],
        [
            "Notice what helps you take the first small step.",
            "Pay attention to how the weight of a task changes once it is started.",
        ],
    ],
    strengths: [
        "Sensitivity to overload before it becomes a crisis.",
        "Capacity to move quickly once the first step is taken.",
    ],
    misinterpretations: [
        "This pattern can be mistaken for laziness or indifference.",
        "In reality, it usually reflects overload and a protective response to it.",
    ],
};

// =============================================================================
// LOW_SIGNAL_BASELINE
// =============================================================================

static LOW_SIGNAL_BASELINE: ModeNarrative = ModeNarrative {
    openers: [
        "Your responses give only a light read so far.",
        "There is not yet enough detail here to sharpen a clear pattern.",
        "The available signal is limited, so this snapshot stays general.",
    ],
    bodies: [
        "Motivational structure appears internally consistent, without a single tendency dominating.",
        "Nothing in your answers points strongly in one direction, which can reflect balance as much as brevity.",
        "The answers read as steady and even, with no strong pull toward any particular pattern.",
    ],
    nuances: [
        "More detail, especially concrete examples, would let a clearer pattern emerge.",
        "A fuller description of a recent decision or a stressful week would sharpen the read.",
        "Low signal is not an error; it usually means the system needs more to work with.",
    ],
    themes: &["Not enough signal yet for a defined theme"],
    underlying_patterns: [
        "No underlying pattern stands out strongly from the input so far.",
        "Underlying patterns are not yet distinct enough to describe with confidence.",
    ],
    internal_dynamics: [
        "How pressure moves through you is not yet visible in these answers.",
        "There is not enough detail yet to describe how you handle internal pressure.",
    ],
    decision_control: [
        "Your decision and control style is not yet clear from the available input.",
        "Decision patterns may become visible with a few concrete examples.",
    ],
    signals: [
        [
            "You may hesitate to act until things feel internally clearer.",
            "You may prefer to keep your options open until a situation settles.",
        ],
        [
            "You may avoid conflict unless it feels especially meaningful.",
            "You may reveal more of yourself in action than in description.",
        ],
    ],
    prompts: [
        [
            "Notice what increases internal clarity for you.",
            "Notice which recent situations felt most like you.",
        ],
        [
            "Pay attention to moments when waiting helps you act more deliberately.",
            "Pay attention to what you would add if you answered again.",
        ],
    ],
    strengths: [
        "Internal consistency rather than impulsive action.",
        "Capacity to pause and reflect before acting.",
    ],
    misinterpretations: [
        "This can be mistaken for indecision or a lack of drive.",
        "In reality, it may reflect a system that waits for internal alignment before committing energy.",
    ],
};

// =============================================================================
// TESTS
// =============================================================================
