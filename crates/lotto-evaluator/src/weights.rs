//! Pattern weight tables for the scoring engine.
//!
//! # Weighting Modes
//!
//! - **Static**: the reliability weight of each pattern over the full history
//!   (`satisfaction_rate / 10`).
//! - **Custom**: weights supplied by the caller; patterns the caller leaves out get
//!   [`DEFAULT_CUSTOM_WEIGHT`].
//! - **Dynamic**: the static weight nudged by recent behaviour,
//!   `overall_weight * (0.7 + 0.3 * recent_rate / overall_rate)`. A pattern that
//!   was never satisfied keeps weight 0.

use std::{collections::BTreeMap, ops::Index};

use serde::{Deserialize, Serialize};
use tracing::debug;

use lotto_engine::{DrawRecord, dataset};
use lotto_pattern::{Pattern, PatternConfig, PatternMap};

use crate::reliability::analyze_pattern_reliability;

pub const DEFAULT_CUSTOM_WEIGHT: f64 = 5.0;
pub const DEFAULT_RECENT_COUNT: usize = 50;

const DYNAMIC_BASE_FACTOR: f64 = 0.7;
const DYNAMIC_RECENT_FACTOR: f64 = 0.3;

/// Caller-supplied weights keyed by pattern.
///
/// Deserializes from a JSON object keyed by pattern id, e.g. `{"total_sum": 8.5}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomWeights(pub BTreeMap<Pattern, f64>);

#[derive(Debug, Clone, Default, PartialEq)]
pub enum WeightingMode {
    #[default]
    Static,
    Custom(CustomWeights),
    Dynamic {
        recent_count: usize,
    },
}

impl WeightingMode {
    #[must_use]
    pub fn dynamic() -> Self {
        Self::Dynamic {
            recent_count: DEFAULT_RECENT_COUNT,
        }
    }
}

/// A weight for every pattern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PatternWeights(PatternMap<f64>);

impl PatternWeights {
    #[must_use]
    pub fn new(weights: PatternMap<f64>) -> Self {
        Self(weights)
    }

    /// Computes the weight table for `mode` from the historical draws.
    #[must_use]
    pub fn compute(historical: &[DrawRecord], mode: &WeightingMode, config: &PatternConfig) -> Self {
        let weights = match mode {
            WeightingMode::Static => {
                analyze_pattern_reliability(historical, config).map(|_, r| r.weight)
            }
            WeightingMode::Custom(weights) => PatternMap::from_fn(|pattern| {
                weights
                    .0
                    .get(&pattern)
                    .copied()
                    .unwrap_or(DEFAULT_CUSTOM_WEIGHT)
            }),
            WeightingMode::Dynamic { recent_count } => {
                let overall = analyze_pattern_reliability(historical, config);
                let recent = analyze_pattern_reliability(
                    &dataset::recent_rounds(historical, *recent_count),
                    config,
                );
                PatternMap::from_fn(|pattern| {
                    let overall = overall[pattern];
                    if overall.satisfied_count == 0 {
                        return 0.0;
                    }
                    let ratio = recent[pattern].satisfaction_rate / overall.satisfaction_rate;
                    overall.weight * (DYNAMIC_BASE_FACTOR + DYNAMIC_RECENT_FACTOR * ratio)
                })
            }
        };
        debug!(?mode, records = historical.len(), "computed pattern weights");
        Self(weights)
    }

    #[must_use]
    pub fn as_map(&self) -> &PatternMap<f64> {
        &self.0
    }

    /// Sum of all weights, the denominator of every score.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.0.values().sum()
    }
}

impl Index<Pattern> for PatternWeights {
    type Output = f64;

    fn index(&self, pattern: Pattern) -> &f64 {
        &self.0[pattern]
    }
}
