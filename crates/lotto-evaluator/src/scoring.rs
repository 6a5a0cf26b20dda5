//! Weighted pattern scoring of candidate combinations.
//!
//! A candidate's score is the share of total pattern weight carried by the patterns
//! it satisfies, scaled to `0..=100`:
//!
//! ```text
//! score = sum(weight of satisfied patterns) / sum(weight of all patterns) * 100
//! ```
//!
//! The score is then bucketed into a [`Grade`]. Weight tables come from
//! [`crate::weights`]; a [`Scorer`] owns one table and scores any number of
//! candidates against it.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::debug;

use lotto_engine::{DrawNumbers, DrawRecord};
use lotto_pattern::{Pattern, PatternConfig, classify};
use lotto_stats::descriptive::DescriptiveStats;

use crate::weights::{PatternWeights, WeightingMode};

/// Letter grade of a score, best first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub enum Grade {
    SPlus,
    S,
    APlus,
    A,
    BPlus,
    B,
    CPlus,
    C,
    D,
}

impl Grade {
    pub const ALL: [Self; 9] = [
        Self::SPlus,
        Self::S,
        Self::APlus,
        Self::A,
        Self::BPlus,
        Self::B,
        Self::CPlus,
        Self::C,
        Self::D,
    ];

    /// Lowest score that earns each grade above `D`.
    const THRESHOLDS: [(f64, Self); 8] = [
        (95.0, Self::SPlus),
        (90.0, Self::S),
        (85.0, Self::APlus),
        (80.0, Self::A),
        (75.0, Self::BPlus),
        (70.0, Self::B),
        (65.0, Self::CPlus),
        (60.0, Self::C),
    ];

    /// # Examples
    ///
    /// ```
    /// use lotto_evaluator::scoring::Grade;
    ///
    /// assert_eq!(Grade::from_score(95.0), Grade::SPlus);
    /// assert_eq!(Grade::from_score(94.99), Grade::S);
    /// assert_eq!(Grade::from_score(12.0), Grade::D);
    /// ```
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        Self::THRESHOLDS
            .into_iter()
            .find(|(min, _)| score >= *min)
            .map_or(Self::D, |(_, grade)| grade)
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SPlus => "S+",
            Self::S => "S",
            Self::APlus => "A+",
            Self::A => "A",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::CPlus => "C+",
            Self::C => "C",
            Self::D => "D",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown grade `{label}`")]
pub struct ParseGradeError {
    label: String,
}

impl FromStr for Grade {
    type Err = ParseGradeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|g| g.label() == s)
            .ok_or_else(|| ParseGradeError {
                label: s.to_owned(),
            })
    }
}

impl TryFrom<String> for Grade {
    type Error = ParseGradeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Grade> for String {
    fn from(grade: Grade) -> Self {
        grade.label().to_owned()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PatternDetail {
    pub pattern: Pattern,
    pub weight: f64,
    pub satisfied: bool,
}

/// Score of one candidate with a per-pattern breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatternScore {
    pub round: u32,
    pub numbers: DrawNumbers,
    pub score: f64,
    pub grade: Grade,
    /// Satisfied patterns, heaviest first.
    pub satisfied_patterns: Vec<PatternDetail>,
    /// Violated patterns, heaviest first.
    pub violated_patterns: Vec<PatternDetail>,
}

impl PatternScore {
    pub fn satisfied(&self) -> impl Iterator<Item = Pattern> + '_ {
        self.satisfied_patterns.iter().map(|d| d.pattern)
    }

    pub fn violated(&self) -> impl Iterator<Item = Pattern> + '_ {
        self.violated_patterns.iter().map(|d| d.pattern)
    }
}

/// Scores candidates against a fixed weight table.
#[derive(Debug, Clone)]
pub struct Scorer {
    weights: PatternWeights,
    config: PatternConfig,
}

impl Scorer {
    #[must_use]
    pub fn new(weights: PatternWeights, config: PatternConfig) -> Self {
        Self { weights, config }
    }

    /// Builds a scorer whose weights are derived from `historical`.
    #[must_use]
    pub fn from_history(
        historical: &[DrawRecord],
        mode: &WeightingMode,
        config: PatternConfig,
    ) -> Self {
        Self::new(PatternWeights::compute(historical, mode, &config), config)
    }

    #[must_use]
    pub fn weights(&self) -> &PatternWeights {
        &self.weights
    }

    #[must_use]
    pub fn config(&self) -> &PatternConfig {
        &self.config
    }

    #[must_use]
    pub fn score(&self, candidate: &DrawRecord) -> PatternScore {
        let result = classify::evaluate_all(&candidate.numbers(), &self.config);

        let mut total = 0.0;
        let mut max = 0.0;
        let mut satisfied_patterns = vec![];
        let mut violated_patterns = vec![];
        for (pattern, &satisfied) in result.iter() {
            let weight = self.weights[pattern];
            max += weight;
            let detail = PatternDetail {
                pattern,
                weight,
                satisfied,
            };
            if satisfied {
                total += weight;
                satisfied_patterns.push(detail);
            } else {
                violated_patterns.push(detail);
            }
        }
        satisfied_patterns.sort_by(|a, b| b.weight.total_cmp(&a.weight));
        violated_patterns.sort_by(|a, b| b.weight.total_cmp(&a.weight));

        let score = if max > 0.0 { total / max * 100.0 } else { 0.0 };
        PatternScore {
            round: candidate.round(),
            numbers: candidate.numbers(),
            score,
            grade: Grade::from_score(score),
            satisfied_patterns,
            violated_patterns,
        }
    }

    #[must_use]
    pub fn score_batch(&self, candidates: &[DrawRecord]) -> Vec<PatternScore> {
        candidates.iter().map(|c| self.score(c)).collect()
    }
}

/// Scores one candidate with weights derived from `historical`.
#[must_use]
pub fn calculate_score(
    combination: &DrawRecord,
    historical: &[DrawRecord],
    mode: &WeightingMode,
    config: &PatternConfig,
) -> PatternScore {
    Scorer::from_history(historical, mode, *config).score(combination)
}

/// Scores many candidates, computing the weight table once.
#[must_use]
pub fn calculate_score_batch(
    combinations: &[DrawRecord],
    historical: &[DrawRecord],
    mode: &WeightingMode,
    config: &PatternConfig,
) -> Vec<PatternScore> {
    let scorer = Scorer::from_history(historical, mode, *config);
    let scores = scorer.score_batch(combinations);
    debug!(candidates = combinations.len(), "scored candidate batch");
    scores
}

/// Summary of a batch of scores.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScoreStatistics {
    pub average: f64,
    pub min: f64,
    pub max: f64,
    /// Upper median: `sorted[len / 2]`.
    pub median: f64,
    /// Count per grade, best grade first; grades with no scores are omitted.
    pub grade_distribution: Vec<(Grade, usize)>,
}

#[must_use]
pub fn score_statistics(scores: &[PatternScore]) -> ScoreStatistics {
    let Some(stats) = DescriptiveStats::new(scores.iter().map(|s| s.score)) else {
        return ScoreStatistics::default();
    };
    let grade_distribution = Grade::ALL
        .into_iter()
        .map(|grade| (grade, scores.iter().filter(|s| s.grade == grade).count()))
        .filter(|(_, count)| *count > 0)
        .collect();
    ScoreStatistics {
        average: stats.mean,
        min: stats.min,
        max: stats.max,
        median: stats.median,
        grade_distribution,
    }
}

#[cfg(test)]
mod tests {
    use lotto_pattern::PatternMap;

    use super::*;
    use crate::test_util::{candidate, fixture};

    fn static_scorer() -> Scorer {
        Scorer::from_history(&fixture(), &WeightingMode::Static, PatternConfig::default())
    }

    #[test]
    fn test_grade_thresholds_are_closed_below() {
        assert_eq!(Grade::from_score(100.0), Grade::SPlus);
        assert_eq!(Grade::from_score(90.0), Grade::S);
        assert_eq!(Grade::from_score(89.999), Grade::APlus);
        assert_eq!(Grade::from_score(80.0), Grade::A);
        assert_eq!(Grade::from_score(75.0), Grade::BPlus);
        assert_eq!(Grade::from_score(70.0), Grade::B);
        assert_eq!(Grade::from_score(65.0), Grade::CPlus);
        assert_eq!(Grade::from_score(60.0), Grade::C);
        assert_eq!(Grade::from_score(59.999), Grade::D);
        assert_eq!(Grade::from_score(0.0), Grade::D);
    }

    #[test]
    fn test_grade_labels() {
        for grade in Grade::ALL {
            assert_eq!(grade.to_string().parse::<Grade>(), Ok(grade));
        }
        assert_eq!(serde_json::to_string(&Grade::APlus).unwrap(), r#""A+""#);
        assert_eq!(serde_json::from_str::<Grade>(r#""C+""#).unwrap(), Grade::CPlus);
        assert!("E".parse::<Grade>().is_err());
        assert!(Grade::SPlus < Grade::D);
    }

    #[test]
    fn test_fixture_scores() {
        let scorer = static_scorer();
        let scores = scorer.score_batch(&fixture());
        let expected = [
            (1101, 100.0, Grade::SPlus),
            (1102, 125.0 / 1.5, Grade::A),
            (1103, 100.0, Grade::SPlus),
            (1104, 100.0, Grade::SPlus),
            (1105, 82.0, Grade::A),
            (1106, 100.0, Grade::SPlus),
            (1107, 142.0 / 1.5, Grade::S),
            (1108, 142.0 / 1.5, Grade::S),
            (1109, 142.0 / 1.5, Grade::S),
            (1110, 142.0 / 1.5, Grade::S),
        ];
        for (score, (round, value, grade)) in scores.iter().zip(expected) {
            assert_eq!(score.round, round);
            assert!((score.score - value).abs() < 1e-9, "round {round}: {}", score.score);
            assert_eq!(score.grade, grade, "round {round}");
            assert_eq!(
                score.satisfied_patterns.len() + score.violated_patterns.len(),
                Pattern::COUNT
            );
        }
    }

    #[test]
    fn test_breakdown_is_sorted_by_weight() {
        let scorer = static_scorer();
        let score = scorer.score(&fixture()[1]);
        let violated = score.violated().collect::<Vec<_>>();
        // weights: perfect_square_count 9, composite_count 8, frog_exclusion 8,
        // start_end_spread 0; equal weights keep canonical order
        assert_eq!(
            violated,
            vec![
                Pattern::PerfectSquareCount,
                Pattern::CompositeCount,
                Pattern::FrogExclusion,
                Pattern::StartEndSpread,
            ]
        );
        assert!(
            score
                .satisfied_patterns
                .windows(2)
                .all(|w| w[0].weight >= w[1].weight)
        );
        assert!(score.satisfied_patterns.iter().all(|d| d.satisfied));
        assert!(score.violated_patterns.iter().all(|d| !d.satisfied));
    }

    #[test]
    fn test_zero_weights_score_zero() {
        let scorer = Scorer::new(
            PatternWeights::new(PatternMap::default()),
            PatternConfig::default(),
        );
        let score = scorer.score(&candidate(1, [7, 11, 16, 21, 27, 33]));
        assert_eq!(score.score, 0.0);
        assert_eq!(score.grade, Grade::D);
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let scorer = static_scorer();
        let c = candidate(1, [3, 14, 22, 28, 35, 41]);
        assert_eq!(scorer.score(&c), scorer.score(&c));

        let batch = calculate_score_batch(
            &[c],
            &fixture(),
            &WeightingMode::Static,
            &PatternConfig::default(),
        );
        assert_eq!(
            batch[0],
            calculate_score(&c, &fixture(), &WeightingMode::Static, &PatternConfig::default())
        );
    }

    #[test]
    fn test_score_statistics() {
        let scores = static_scorer().score_batch(&fixture());
        let stats = score_statistics(&scores);
        assert!((stats.average - 94.4).abs() < 1e-9);
        assert!((stats.min - 82.0).abs() < 1e-9);
        assert_eq!(stats.max, 100.0);
        assert!((stats.median - 142.0 / 1.5).abs() < 1e-9);
        assert_eq!(
            stats.grade_distribution,
            vec![(Grade::SPlus, 4), (Grade::S, 4), (Grade::A, 2)]
        );
        let total = stats.grade_distribution.iter().map(|(_, n)| n).sum::<usize>();
        assert_eq!(total, 10);

        assert_eq!(score_statistics(&[]), ScoreStatistics::default());
    }
}
