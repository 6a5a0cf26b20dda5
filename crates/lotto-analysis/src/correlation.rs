//! Pairwise correlation between pattern outcomes.
//!
//! Each pattern is a binary variable over the dataset, so the Pearson correlation
//! of two patterns reduces to the phi coefficient of their 2×2 contingency table.
//! All 136 unordered pairs of the 17 patterns are measured.

use serde::Serialize;
use tracing::debug;

use lotto_engine::DrawRecord;
use lotto_pattern::{Pattern, PatternConfig};
use lotto_stats::correlation::ContingencyTable;

use crate::EvaluatedDraw;

pub const DEFAULT_CORRELATION_THRESHOLD: f64 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::IsVariant)]
#[serde(rename_all = "snake_case")]
pub enum CorrelationKind {
    Positive,
    Negative,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PatternCorrelation {
    pub pattern1: Pattern,
    pub pattern2: Pattern,
    /// Phi coefficient in `[-1.0, 1.0]`.
    pub value: f64,
    pub kind: CorrelationKind,
}

/// Contingency table of two patterns over pre-evaluated draws.
fn contingency(evaluated: &[EvaluatedDraw], a: Pattern, b: Pattern) -> ContingencyTable {
    ContingencyTable::from_pairs(evaluated.iter().map(|e| (e.result[a], e.result[b])))
}

/// Phi coefficient of two patterns over `data`.
#[must_use]
pub fn pattern_phi(data: &[DrawRecord], a: Pattern, b: Pattern, config: &PatternConfig) -> f64 {
    let evaluated = EvaluatedDraw::evaluate_desc(data, config);
    contingency(&evaluated, a, b).phi()
}

/// Pattern pairs with `|phi| >= threshold`, strongest first.
#[must_use]
pub fn analyze_pattern_correlations(
    data: &[DrawRecord],
    threshold: f64,
    config: &PatternConfig,
) -> Vec<PatternCorrelation> {
    let evaluated = EvaluatedDraw::evaluate_desc(data, config);

    let mut correlations = vec![];
    for (i, &pattern1) in Pattern::ALL.iter().enumerate() {
        for &pattern2 in &Pattern::ALL[i + 1..] {
            let value = contingency(&evaluated, pattern1, pattern2).phi();
            if value.abs() >= threshold {
                let kind = if value > 0.0 {
                    CorrelationKind::Positive
                } else {
                    CorrelationKind::Negative
                };
                correlations.push(PatternCorrelation {
                    pattern1,
                    pattern2,
                    value,
                    kind,
                });
            }
        }
    }
    correlations.sort_by(|a, b| b.value.abs().total_cmp(&a.value.abs()));

    debug!(
        records = data.len(),
        threshold,
        found = correlations.len(),
        "analyzed pattern correlations"
    );
    correlations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::split_history;

    /// Patterns whose outcome differs between the two combinations of the split history.
    const VARYING: [Pattern; 7] = [
        Pattern::TotalSum,
        Pattern::AcValue,
        Pattern::HighLowRatio,
        Pattern::ConsecutiveRun,
        Pattern::StartEndSpread,
        Pattern::SectionConcentration,
        Pattern::TriangleExclusion,
    ];

    #[test]
    fn test_phi_is_symmetric() {
        let data = split_history();
        let config = PatternConfig::default();
        for a in Pattern::ALL {
            for b in Pattern::ALL {
                assert_eq!(
                    pattern_phi(&data, a, b, &config),
                    pattern_phi(&data, b, a, &config)
                );
            }
        }
    }

    #[test]
    fn test_split_history_correlations() {
        let correlations =
            analyze_pattern_correlations(&split_history(), 0.7, &PatternConfig::default());
        // every pair among the seven varying patterns is perfectly (anti)correlated
        assert_eq!(correlations.len(), 21);
        for c in &correlations {
            assert!(VARYING.contains(&c.pattern1) && VARYING.contains(&c.pattern2));
            assert!(c.pattern1 < c.pattern2);
            assert_eq!(c.value.abs(), 1.0);
            let involves_spread =
                c.pattern1 == Pattern::StartEndSpread || c.pattern2 == Pattern::StartEndSpread;
            assert_eq!(c.kind.is_negative(), involves_spread);
        }
    }

    #[test]
    fn test_empty_data_has_zero_phi() {
        let config = PatternConfig::default();
        // phi is 0 for every pair, so only a zero threshold keeps them (all 136)
        assert_eq!(analyze_pattern_correlations(&[], 0.0, &config).len(), 136);
        assert!(analyze_pattern_correlations(&[], 0.1, &config).is_empty());
        assert_eq!(pattern_phi(&[], Pattern::TotalSum, Pattern::AcValue, &config), 0.0);
    }
}
