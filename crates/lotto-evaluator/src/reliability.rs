//! Per-pattern satisfaction statistics over a historical dataset.
//!
//! The reliability of a pattern is simply how often historical draws satisfied it.
//! It doubles as the static weight of the pattern in the scoring engine:
//! `weight = satisfaction_rate / 10`, so a pattern that always held weighs 10.

use serde::Serialize;
use tracing::debug;

use lotto_engine::{DrawRecord, dataset};
use lotto_pattern::{Pattern, PatternConfig, PatternMap, classify};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PatternReliability {
    /// Percentage of records satisfying the pattern, in `0.0..=100.0`.
    pub satisfaction_rate: f64,
    /// `satisfaction_rate / 10`.
    pub weight: f64,
    pub total_samples: usize,
    pub satisfied_count: usize,
}

impl PatternReliability {
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn new(satisfied_count: usize, total_samples: usize) -> Self {
        let satisfaction_rate = if total_samples == 0 {
            0.0
        } else {
            satisfied_count as f64 / total_samples as f64 * 100.0
        };
        Self {
            satisfaction_rate,
            weight: satisfaction_rate / 10.0,
            total_samples,
            satisfied_count,
        }
    }
}

/// Measures every pattern against every record.
///
/// An empty dataset gives a zero rate for every pattern.
///
/// # Examples
///
/// ```
/// use lotto_evaluator::reliability::analyze_pattern_reliability;
/// use lotto_pattern::{Pattern, PatternConfig};
///
/// let reliability = analyze_pattern_reliability(&[], &PatternConfig::default());
/// assert_eq!(reliability[Pattern::TotalSum].satisfaction_rate, 0.0);
/// ```
#[must_use]
pub fn analyze_pattern_reliability(
    data: &[DrawRecord],
    config: &PatternConfig,
) -> PatternMap<PatternReliability> {
    let mut satisfied = PatternMap::<usize>::default();
    for record in data {
        let result = classify::evaluate_all(&record.numbers(), config);
        for (pattern, ok) in result.iter() {
            if *ok {
                satisfied[pattern] += 1;
            }
        }
    }
    debug!(records = data.len(), "analyzed pattern reliability");
    satisfied.map(|_, count| PatternReliability::new(*count, data.len()))
}

/// Satisfaction rate over the `recent_count` most recent rounds minus the rate over
/// the whole dataset, in percentage points.
#[must_use]
pub fn analyze_recent_trends(
    data: &[DrawRecord],
    recent_count: usize,
    config: &PatternConfig,
) -> PatternMap<f64> {
    let overall = analyze_pattern_reliability(data, config);
    let recent = analyze_pattern_reliability(&dataset::recent_rounds(data, recent_count), config);
    PatternMap::from_fn(|pattern| {
        recent[pattern].satisfaction_rate - overall[pattern].satisfaction_rate
    })
}

/// Patterns ordered by descending satisfaction rate.
///
/// Ties keep the canonical pattern order.
#[must_use]
pub fn sorted_by_rate(
    reliability: &PatternMap<PatternReliability>,
) -> Vec<(Pattern, PatternReliability)> {
    let mut entries = reliability
        .iter()
        .map(|(pattern, r)| (pattern, *r))
        .collect::<Vec<_>>();
    entries.sort_by(|a, b| b.1.satisfaction_rate.total_cmp(&a.1.satisfaction_rate));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::fixture;

    #[test]
    fn test_empty_dataset_has_zero_rates() {
        let reliability = analyze_pattern_reliability(&[], &PatternConfig::default());
        for (_, r) in reliability.iter() {
            assert_eq!(*r, PatternReliability::default());
        }
    }

    #[test]
    fn test_fixture_rates() {
        let reliability = analyze_pattern_reliability(&fixture(), &PatternConfig::default());
        assert_eq!(reliability[Pattern::TotalSum].satisfied_count, 10);
        assert_eq!(reliability[Pattern::TotalSum].satisfaction_rate, 100.0);
        assert_eq!(reliability[Pattern::TotalSum].weight, 10.0);
        assert_eq!(reliability[Pattern::AcValue].satisfied_count, 9);
        assert_eq!(reliability[Pattern::CompositeCount].satisfied_count, 8);
        assert_eq!(reliability[Pattern::StartEndSpread].satisfied_count, 0);
        for (_, r) in reliability.iter() {
            assert_eq!(r.total_samples, 10);
            assert!((0.0..=100.0).contains(&r.satisfaction_rate));
        }
    }

    #[test]
    fn test_half_satisfied_pattern_weighs_five() {
        let r = PatternReliability::new(5, 10);
        assert_eq!(r.satisfaction_rate, 50.0);
        assert_eq!(r.weight, 5.0);
    }

    #[test]
    fn test_recent_trends() {
        // The three most recent rounds (1108..=1110) satisfy composite_count 2/3
        // while the whole fixture satisfies it 8/10.
        let trends = analyze_recent_trends(&fixture(), 3, &PatternConfig::default());
        let expected = 2.0 / 3.0 * 100.0 - 80.0;
        assert!((trends[Pattern::CompositeCount] - expected).abs() < 1e-9);
        assert_eq!(trends[Pattern::TotalSum], 0.0);
    }

    #[test]
    fn test_sorted_by_rate_is_descending_and_stable() {
        let reliability = analyze_pattern_reliability(&fixture(), &PatternConfig::default());
        let sorted = sorted_by_rate(&reliability);
        assert_eq!(sorted.len(), Pattern::COUNT);
        assert!(
            sorted
                .windows(2)
                .all(|w| w[0].1.satisfaction_rate >= w[1].1.satisfaction_rate)
        );
        assert_eq!(sorted[0].0, Pattern::TotalSum);
        assert_eq!(sorted.last().map(|e| e.0), Some(Pattern::StartEndSpread));
    }
}
