//! Score-based selection of candidate combinations.
//!
//! [`ScoreFilter`] scores every candidate once with its [`Scorer`] and keeps the
//! ones that pass a [`FilterConfig`]. Sorting is stable, so candidates with equal
//! keys keep their input order.

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::debug;

use lotto_engine::DrawRecord;
use lotto_pattern::Pattern;

use crate::scoring::{Grade, PatternScore, Scorer};

/// Thresholds swept by [`ScoreFilter::optimal_threshold`].
pub const OPTIMAL_THRESHOLD_CANDIDATES: [f64; 8] = [60.0, 65.0, 70.0, 75.0, 80.0, 85.0, 90.0, 95.0];

pub const DEFAULT_EFFECTIVENESS_THRESHOLDS: [f64; 5] = [70.0, 75.0, 80.0, 85.0, 90.0];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, derive_more::IsVariant)]
pub enum SortBy {
    #[default]
    ScoreDesc,
    ScoreAsc,
    RoundDesc,
    RoundAsc,
}

impl SortBy {
    fn sort(self, scores: &mut [PatternScore]) {
        match self {
            Self::ScoreDesc => scores.sort_by(|a, b| b.score.total_cmp(&a.score)),
            Self::ScoreAsc => scores.sort_by(|a, b| a.score.total_cmp(&b.score)),
            Self::RoundDesc => scores.sort_by(|a, b| b.round.cmp(&a.round)),
            Self::RoundAsc => scores.sort_by_key(|s| s.round),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterConfig {
    pub min_score: f64,
    pub max_results: usize,
    pub include_grades: BTreeSet<Grade>,
    pub sort_by: SortBy,
    /// Patterns every kept candidate must satisfy.
    pub require_patterns: BTreeSet<Pattern>,
    /// Patterns no kept candidate may violate.
    pub exclude_patterns: BTreeSet<Pattern>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            min_score: 80.0,
            max_results: 1000,
            include_grades: [Grade::SPlus, Grade::S, Grade::APlus, Grade::A]
                .into_iter()
                .collect(),
            sort_by: SortBy::default(),
            require_patterns: BTreeSet::new(),
            exclude_patterns: BTreeSet::new(),
        }
    }
}

impl FilterConfig {
    fn accepts(&self, score: &PatternScore) -> bool {
        score.score >= self.min_score
            && self.include_grades.contains(&score.grade)
            && self
                .require_patterns
                .iter()
                .all(|p| score.satisfied().any(|s| s == *p))
            && !score.violated().any(|v| self.exclude_patterns.contains(&v))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterResult {
    /// Kept candidates, sorted and truncated.
    pub filtered_scores: Vec<PatternScore>,
    pub total_evaluated: usize,
    /// Candidates that passed, counted before truncation.
    pub total_passed: usize,
    /// `total_passed / total_evaluated * 100`, or 0 when nothing was evaluated.
    pub filtering_rate: f64,
}

impl FilterResult {
    #[expect(clippy::cast_precision_loss)]
    fn new(mut passed: Vec<PatternScore>, total_evaluated: usize, max_results: usize) -> Self {
        let total_passed = passed.len();
        passed.truncate(max_results);
        let filtering_rate = if total_evaluated == 0 {
            0.0
        } else {
            total_passed as f64 / total_evaluated as f64 * 100.0
        };
        Self {
            filtered_scores: passed,
            total_evaluated,
            total_passed,
            filtering_rate,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThresholdResult {
    pub threshold: f64,
    pub result: FilterResult,
}

/// How a threshold would have treated actual winning combinations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EffectivenessReport {
    pub threshold: f64,
    pub total_filtered: usize,
    pub filtering_rate: f64,
    pub winners_captured: usize,
    pub capture_rate: f64,
    pub avg_winner_score: f64,
}

#[derive(Debug, Clone)]
pub struct ScoreFilter {
    scorer: Scorer,
}

impl ScoreFilter {
    #[must_use]
    pub fn new(scorer: Scorer) -> Self {
        Self { scorer }
    }

    #[must_use]
    pub fn scorer(&self) -> &Scorer {
        &self.scorer
    }

    #[must_use]
    pub fn filter_by_score(&self, candidates: &[DrawRecord], config: &FilterConfig) -> FilterResult {
        let scores = self.scorer.score_batch(candidates);
        Self::select(scores, config)
    }

    fn select(scores: Vec<PatternScore>, config: &FilterConfig) -> FilterResult {
        let total_evaluated = scores.len();
        let mut passed = scores
            .into_iter()
            .filter(|s| config.accepts(s))
            .collect::<Vec<_>>();
        config.sort_by.sort(&mut passed);
        debug!(
            total_evaluated,
            total_passed = passed.len(),
            min_score = config.min_score,
            "filtered candidates"
        );
        FilterResult::new(passed, total_evaluated, config.max_results)
    }

    /// Keeps candidates with `min <= score <= max`, best first.
    #[must_use]
    pub fn filter_by_score_range(
        &self,
        candidates: &[DrawRecord],
        min: f64,
        max: f64,
        max_results: usize,
    ) -> FilterResult {
        let mut passed = self
            .scorer
            .score_batch(candidates)
            .into_iter()
            .filter(|s| (min..=max).contains(&s.score))
            .collect::<Vec<_>>();
        SortBy::ScoreDesc.sort(&mut passed);
        FilterResult::new(passed, candidates.len(), max_results)
    }

    /// Runs [`Self::filter_by_score`] once per threshold, replacing `base.min_score`.
    ///
    /// Results are in the order of `thresholds`. Candidates are scored once.
    #[must_use]
    pub fn filter_with_multiple_thresholds(
        &self,
        candidates: &[DrawRecord],
        thresholds: &[f64],
        base: &FilterConfig,
    ) -> Vec<ThresholdResult> {
        let scores = self.scorer.score_batch(candidates);
        thresholds
            .iter()
            .map(|&threshold| {
                let config = FilterConfig {
                    min_score: threshold,
                    ..base.clone()
                };
                ThresholdResult {
                    threshold,
                    result: Self::select(scores.clone(), &config),
                }
            })
            .collect()
    }

    /// The threshold in `60, 65, ..., 95` whose pass count is closest to `target`.
    ///
    /// Ties go to the lowest threshold.
    #[must_use]
    pub fn optimal_threshold(&self, candidates: &[DrawRecord], target: usize) -> f64 {
        self.filter_with_multiple_thresholds(
            candidates,
            &OPTIMAL_THRESHOLD_CANDIDATES,
            &FilterConfig::default(),
        )
        .into_iter()
        .min_by_key(|r| r.result.total_passed.abs_diff(target))
        .map_or(FilterConfig::default().min_score, |r| r.threshold)
    }

    /// Keeps candidates with at least `min_satisfied` satisfied and at most
    /// `max_violated` violated patterns, best first.
    #[must_use]
    pub fn filter_by_pattern_count(
        &self,
        candidates: &[DrawRecord],
        min_satisfied: usize,
        max_violated: usize,
    ) -> FilterResult {
        let mut passed = self
            .scorer
            .score_batch(candidates)
            .into_iter()
            .filter(|s| {
                s.satisfied_patterns.len() >= min_satisfied
                    && s.violated_patterns.len() <= max_violated
            })
            .collect::<Vec<_>>();
        SortBy::ScoreDesc.sort(&mut passed);
        let total_passed = passed.len();
        FilterResult::new(passed, candidates.len(), total_passed)
    }

    /// The `top_n` best-scoring candidates.
    #[must_use]
    pub fn top_score_combinations(
        &self,
        candidates: &[DrawRecord],
        top_n: usize,
    ) -> Vec<PatternScore> {
        let mut scores = self.scorer.score_batch(candidates);
        SortBy::ScoreDesc.sort(&mut scores);
        scores.truncate(top_n);
        scores
    }

    /// Compares, per threshold, how many test candidates pass with how many actual
    /// winning combinations would have been kept.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn analyze_filter_effectiveness(
        &self,
        test: &[DrawRecord],
        winners: &[DrawRecord],
        thresholds: &[f64],
    ) -> Vec<EffectivenessReport> {
        let winner_scores = self
            .scorer
            .score_batch(winners)
            .into_iter()
            .map(|s| s.score)
            .collect::<Vec<_>>();
        let avg_winner_score = if winner_scores.is_empty() {
            0.0
        } else {
            winner_scores.iter().sum::<f64>() / winner_scores.len() as f64
        };

        self.filter_with_multiple_thresholds(test, thresholds, &FilterConfig::default())
            .into_iter()
            .map(|ThresholdResult { threshold, result }| {
                let winners_captured = winner_scores.iter().filter(|&&s| s >= threshold).count();
                let capture_rate = if winners.is_empty() {
                    0.0
                } else {
                    winners_captured as f64 / winners.len() as f64 * 100.0
                };
                EffectivenessReport {
                    threshold,
                    total_filtered: result.total_passed,
                    filtering_rate: result.filtering_rate,
                    winners_captured,
                    capture_rate,
                    avg_winner_score,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use lotto_pattern::PatternConfig;

    use super::*;
    use crate::{
        test_util::{candidate, fixture},
        weights::WeightingMode,
    };

    fn filter() -> ScoreFilter {
        ScoreFilter::new(Scorer::from_history(
            &fixture(),
            &WeightingMode::Static,
            PatternConfig::default(),
        ))
    }

    #[test]
    fn test_default_config() {
        let config = FilterConfig::default();
        assert_eq!(config.min_score, 80.0);
        assert_eq!(config.max_results, 1000);
        assert_eq!(config.include_grades.len(), 4);
        assert!(config.sort_by.is_score_desc());
    }

    #[test]
    fn test_filter_by_score() {
        let candidates = fixture();
        let result = filter().filter_by_score(&candidates, &FilterConfig::default());
        assert_eq!(result.total_evaluated, 10);
        assert_eq!(result.total_passed, 10);
        assert_eq!(result.filtering_rate, 100.0);

        let config = FilterConfig {
            min_score: 90.0,
            ..FilterConfig::default()
        };
        let result = filter().filter_by_score(&candidates, &config);
        assert_eq!(result.total_passed, 8);
        assert!(result.filtered_scores.iter().all(|s| s.score >= 90.0));
        // the four perfect scores come first, in input order
        let rounds = result.filtered_scores.iter().map(|s| s.round).collect::<Vec<_>>();
        assert_eq!(rounds, vec![1101, 1103, 1104, 1106, 1107, 1108, 1109, 1110]);
    }

    #[test]
    fn test_truncation_keeps_total_passed() {
        let config = FilterConfig {
            max_results: 3,
            sort_by: SortBy::RoundDesc,
            ..FilterConfig::default()
        };
        let result = filter().filter_by_score(&fixture(), &config);
        assert_eq!(result.total_passed, 10);
        let rounds = result.filtered_scores.iter().map(|s| s.round).collect::<Vec<_>>();
        assert_eq!(rounds, vec![1110, 1109, 1108]);
    }

    #[test]
    fn test_grade_and_pattern_constraints() {
        let candidates = fixture();
        let config = FilterConfig {
            include_grades: [Grade::A].into_iter().collect(),
            ..FilterConfig::default()
        };
        let rounds = filter()
            .filter_by_score(&candidates, &config)
            .filtered_scores
            .iter()
            .map(|s| s.round)
            .collect::<Vec<_>>();
        assert_eq!(rounds, vec![1102, 1105]);

        let config = FilterConfig {
            exclude_patterns: [Pattern::FrogExclusion].into_iter().collect(),
            ..FilterConfig::default()
        };
        assert_eq!(filter().filter_by_score(&candidates, &config).total_passed, 8);

        let config = FilterConfig {
            require_patterns: [Pattern::AcValue, Pattern::CompositeCount].into_iter().collect(),
            ..FilterConfig::default()
        };
        assert_eq!(filter().filter_by_score(&candidates, &config).total_passed, 7);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let config = FilterConfig::default();
        let first = filter().filter_by_score(&fixture(), &config);
        let kept = fixture()
            .into_iter()
            .filter(|r| first.filtered_scores.iter().any(|s| s.round == r.round()))
            .collect::<Vec<_>>();
        let second = filter().filter_by_score(&kept, &config);
        assert_eq!(first.filtered_scores, second.filtered_scores);
    }

    #[test]
    fn test_empty_candidates() {
        let result = filter().filter_by_score(&[], &FilterConfig::default());
        assert_eq!(result.total_evaluated, 0);
        assert_eq!(result.filtering_rate, 0.0);
        assert!(result.filtered_scores.is_empty());
    }

    #[test]
    fn test_filter_by_score_range() {
        let result = filter().filter_by_score_range(&fixture(), 81.0, 95.0, 1000);
        assert_eq!(result.total_passed, 6);
        assert!(
            result
                .filtered_scores
                .windows(2)
                .all(|w| w[0].score >= w[1].score)
        );
        let result = filter().filter_by_score_range(&fixture(), 81.0, 95.0, 2);
        assert_eq!(result.filtered_scores.len(), 2);
        assert_eq!(result.total_passed, 6);
    }

    #[test]
    fn test_multiple_thresholds_keep_input_order() {
        let results = filter().filter_with_multiple_thresholds(
            &fixture(),
            &[95.0, 60.0, 90.0],
            &FilterConfig::default(),
        );
        let summary = results
            .iter()
            .map(|r| (r.threshold, r.result.total_passed))
            .collect::<Vec<_>>();
        assert_eq!(summary, vec![(95.0, 4), (60.0, 10), (90.0, 8)]);
    }

    #[test]
    fn test_optimal_threshold() {
        let f = filter();
        // 60..=80 pass 10, 85 and 90 pass 8, 95 passes 4
        assert_eq!(f.optimal_threshold(&fixture(), 10), 60.0);
        assert_eq!(f.optimal_threshold(&fixture(), 8), 85.0);
        assert_eq!(f.optimal_threshold(&fixture(), 0), 95.0);
        assert_eq!(f.optimal_threshold(&[], 0), 60.0);
    }

    #[test]
    fn test_filter_by_pattern_count() {
        let result = filter().filter_by_pattern_count(&fixture(), 16, 1);
        assert_eq!(result.total_passed, 4);
        assert!(result.filtered_scores.iter().all(|s| s.score == 100.0));
        let result = filter().filter_by_pattern_count(&fixture(), 0, 17);
        assert_eq!(result.total_passed, 10);
    }

    #[test]
    fn test_top_score_combinations() {
        let extra = candidate(2000, [1, 2, 3, 4, 5, 6]);
        let mut candidates = fixture();
        candidates.push(extra);
        let top = filter().top_score_combinations(&candidates, 5);
        assert_eq!(top.len(), 5);
        assert_eq!(top[0].round, 1101);
        assert!(top.iter().all(|s| s.round != 2000));
    }

    #[test]
    fn test_filter_effectiveness() {
        let reports = filter().analyze_filter_effectiveness(
            &fixture(),
            &fixture()[..2],
            &DEFAULT_EFFECTIVENESS_THRESHOLDS,
        );
        assert_eq!(reports.len(), 5);
        // winners 1101 (100) and 1102 (83.3)
        let at_80 = &reports[2];
        assert_eq!(at_80.threshold, 80.0);
        assert_eq!(at_80.winners_captured, 2);
        assert_eq!(at_80.capture_rate, 100.0);
        let at_85 = &reports[3];
        assert_eq!(at_85.winners_captured, 1);
        assert_eq!(at_85.capture_rate, 50.0);
        assert_eq!(at_85.total_filtered, 8);
        assert!((at_85.avg_winner_score - (100.0 + 125.0 / 1.5) / 2.0).abs() < 1e-9);

        let reports = filter().analyze_filter_effectiveness(&fixture(), &[], &[80.0]);
        assert_eq!(reports[0].capture_rate, 0.0);
        assert_eq!(reports[0].avg_winner_score, 0.0);
    }
}
