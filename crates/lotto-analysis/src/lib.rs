//! Time-series analysis of pattern behaviour over historical draws.
//!
//! Where `lotto-evaluator` treats the history as a single sample, this crate looks
//! at how pattern outcomes change over rounds:
//!
//! - [`trend`] - recent versus overall satisfaction, volatility and weight advice
//! - [`window`] - satisfaction over windows anchored at the most recent round
//! - [`cycle`] - gaps between consecutive violations of a pattern
//! - [`correlation`] - phi coefficients between pairs of patterns
//!
//! All functions take the draws in any order and sort them by round internally.
//!
//! # Example
//!
//! ```
//! use lotto_analysis::trend::{TrendConfig, analyze_pattern_trends};
//! use lotto_pattern::{Pattern, PatternConfig};
//!
//! let trends = analyze_pattern_trends(&[], &TrendConfig::default(), &PatternConfig::default());
//! assert!(trends[Pattern::TotalSum].trend_direction.is_stable());
//! ```

use lotto_engine::{DrawRecord, dataset};
use lotto_pattern::{PatternConfig, PatternMap, classify};

pub mod correlation;
pub mod cycle;
pub mod trend;
pub mod window;

/// Pattern outcomes of one draw.
#[derive(Debug, Clone, Copy)]
struct EvaluatedDraw {
    round: u32,
    result: PatternMap<bool>,
}

impl EvaluatedDraw {
    /// Evaluates every draw once, most recent round first.
    fn evaluate_desc(data: &[DrawRecord], config: &PatternConfig) -> Vec<Self> {
        dataset::sorted_by_round_desc(data)
            .iter()
            .map(|record| Self {
                round: record.round(),
                result: classify::evaluate_all(&record.numbers(), config),
            })
            .collect()
    }
}
