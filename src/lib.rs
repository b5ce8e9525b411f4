//! PEK Lite: deterministic personality snapshot engine
//!
//! Pipeline: raw responses → normalizer → {signal bank, depth estimator}
//! → mode selector → narrative assembler → report

pub mod config;
pub mod core;
pub mod error;
pub mod types;

pub use crate::core::{analyze, analyze_with_diagnostics, PersonalityEngine};
pub use error::{Error, Result};

// =============================================================================
// SIGNAL BOUNDS
// =============================================================================

/// Upper clamp for any signal intensity
pub const SIGNAL_INTENSITY_MAX: u8 = 8;

// =============================================================================
// DEPTH THRESHOLDS
// =============================================================================

/// Below this many words the input is LIMITED
pub const DEPTH_LIMITED_WORDS: usize = 80;

/// Below this many sentence terminators the input is LIMITED
pub const DEPTH_LIMITED_SENTENCES: usize = 4;

/// Below this many words the input is MODERATE
pub const DEPTH_MODERATE_WORDS: usize = 170;

/// Below this many sentence terminators the input is MODERATE
pub const DEPTH_MODERATE_SENTENCES: usize = 7;

// =============================================================================
// MODE SELECTION
// =============================================================================

/// AUTONOMY_SENTINEL stays damped unless control_orientation reaches this
pub const AUTONOMY_GATE_MIN_CONTROL: u8 = 3;

/// Multiplier applied to a gated mode whose gate is closed
pub const GATE_DAMPING: f64 = 0.25;

/// Total signal activity at or below this (with LIMITED depth) forces the baseline
pub const LOW_SIGNAL_TOTAL_MAX: u32 = 1;

/// Secondary mode only contributes texture when its primary signal reaches this
pub const SECONDARY_TEXTURE_MIN: u8 = 2;

// =============================================================================
// REPORT CAPS
// =============================================================================

pub const MAX_REAL_WORLD_SIGNALS: usize = 5;
pub const MAX_REFLECTION_PROMPTS: usize = 4;
pub const MAX_STRENGTHS: usize = 4;
pub const MAX_MISINTERPRETATIONS: usize = 4;

/// Extra core-theme phrases borrowed from the secondary mode
pub const MAX_SECONDARY_THEMES: usize = 2;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";

/// Engine name reported by the health endpoint
pub const ENGINE_NAME: &str = "PEK Lite";
