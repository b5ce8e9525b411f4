//! Signal catalog records and per-call intensities

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::SIGNAL_INTENSITY_MAX;

/// One named behavioral signal and the phrases that move it
#[derive(Debug, Clone, Copy)]
pub struct SignalDefinition {
    /// Stable name, used as the summary key
    pub name: &'static str,
    /// Each phrase found in the text adds 1 (at most once per phrase)
    pub hits: &'static [&'static str],
    /// Any of these present takes 1 back off a positive count
    pub neg: &'static [&'static str],
}

/// Signal name → intensity in [0, 8]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SignalSummary {
    values: BTreeMap<String, u8>,
}

impl SignalSummary {
    /// Every catalog signal present at 0
    pub fn zero(catalog: &[SignalDefinition]) -> Self {
        Self {
            values: catalog.iter().map(|def| (def.name.to_string(), 0)).collect(),
        }
    }

    /// Store an intensity, clamped to the allowed range
    pub fn set(&mut self, name: &str, intensity: u32) {
        let clamped = intensity.min(SIGNAL_INTENSITY_MAX as u32) as u8;
        self.values.insert(name.to_string(), clamped);
    }

    /// Intensity for `name`; unknown names read as 0
    pub fn get(&self, name: &str) -> u8 {
        self.values.get(name).copied().unwrap_or(0)
    }

    /// Sum of all intensities
    pub fn total(&self) -> u32 {
        self.values.values().map(|&v| v as u32).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u8)> {
        self.values.iter().map(|(k, &v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
