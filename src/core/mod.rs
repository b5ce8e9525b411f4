//! Core modules for PEK Lite

pub mod normalizer;
pub mod signal_bank;
pub mod depth;
pub mod mode_selector;
pub mod selection;
pub mod narrative_bank;
pub mod narrative;
pub mod report;
pub mod render;
pub mod api;

pub use normalizer::normalize;
pub use signal_bank::{SignalExtractor, SIGNAL_BANK, GLOBAL_NEGATORS};
pub use depth::{DepthEstimator, DepthCounts};
pub use mode_selector::{ModeSelector, ModeSelection, MODE_CATALOG};
pub use selection::{select, select_index};
pub use narrative::{Narrative, NarrativeAssembler};
pub use report::{analyze, analyze_with_diagnostics, PersonalityEngine, ReportBuilder};
pub use render::{render_html, render_terminal, escape_html};
pub use api::{create_router, run_server};
