//! Core types for PEK Lite

mod input;
mod signals;
mod depth;
mod mode;
mod report;

pub use input::{RawInput, NormalizedText};
pub use signals::{SignalDefinition, SignalSummary};
pub use depth::{DepthLabel, DepthRating};
pub use mode::{Mode, ModeScores, SelectedModes};
pub use report::{Report, ReportSections, Diagnostics};
