//! Recent-versus-overall pattern trends.
//!
//! For every pattern, the satisfaction rate over the most recent rounds is compared
//! with the rate over the whole history. The difference (`trend_value`, in
//! percentage points) is bucketed into a [`TrendDirection`]; the spread of rates
//! across sliding windows gives the pattern's volatility.

use std::fmt;

use arrayvec::ArrayVec;
use serde::Serialize;
use tracing::debug;

use lotto_engine::{DrawRecord, dataset};
use lotto_evaluator::reliability::analyze_pattern_reliability;
use lotto_pattern::{Pattern, PatternConfig, PatternMap};
use lotto_stats::descriptive::DescriptiveStats;

use crate::EvaluatedDraw;

pub const MAX_RECENT_VIOLATIONS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrendConfig {
    /// Number of most recent rounds compared against the whole history.
    pub recent_count: usize,
    /// Size of the sliding windows used for volatility.
    pub window_size: usize,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            recent_count: 50,
            window_size: 10,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::IsVariant)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    StronglyUp,
    Up,
    Stable,
    Down,
    StronglyDown,
}

impl TrendDirection {
    /// Buckets a rate change in percentage points.
    ///
    /// # Examples
    ///
    /// ```
    /// use lotto_analysis::trend::TrendDirection;
    ///
    /// assert_eq!(TrendDirection::from_change(5.5), TrendDirection::StronglyUp);
    /// assert_eq!(TrendDirection::from_change(5.0), TrendDirection::Up);
    /// assert_eq!(TrendDirection::from_change(-2.0), TrendDirection::Down);
    /// ```
    #[must_use]
    pub fn from_change(trend_value: f64) -> Self {
        if trend_value > 5.0 {
            Self::StronglyUp
        } else if trend_value > 2.0 {
            Self::Up
        } else if trend_value > -2.0 {
            Self::Stable
        } else if trend_value > -5.0 {
            Self::Down
        } else {
            Self::StronglyDown
        }
    }

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::StronglyUp => "↑↑",
            Self::Up => "↑",
            Self::Stable => "→",
            Self::Down => "↓",
            Self::StronglyDown => "↓↓",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display, derive_more::IsVariant)]
#[serde(rename_all = "snake_case")]
pub enum Stability {
    #[display("stable")]
    Stable,
    #[display("moderate")]
    Moderate,
    #[display("volatile")]
    Volatile,
}

impl Stability {
    #[must_use]
    pub fn from_volatility(volatility: f64) -> Self {
        if volatility < 5.0 {
            Self::Stable
        } else if volatility < 10.0 {
            Self::Moderate
        } else {
            Self::Volatile
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatternTrend {
    pub pattern: Pattern,
    pub overall_satisfaction_rate: f64,
    pub recent_satisfaction_rate: f64,
    /// `recent_satisfaction_rate - overall_satisfaction_rate`.
    pub trend_value: f64,
    pub trend_direction: TrendDirection,
    /// Population standard deviation of sliding-window satisfaction rates.
    pub volatility: f64,
    /// Most recent violating rounds, newest first.
    pub recent_violations: ArrayVec<u32, MAX_RECENT_VIOLATIONS>,
    pub stability: Stability,
    /// Free-text weight advice, see [`Recommendation`].
    pub recommendation: String,
}

/// Weight advice derived from a trend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Recommendation {
    pub direction: TrendDirection,
    pub recent_rate: f64,
    pub stability: Stability,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (headline, advice) = match self.direction {
            TrendDirection::StronglyUp => ("strong upward trend", "consider raising the weight"),
            TrendDirection::Up => ("upward trend", "keep the current weight"),
            TrendDirection::Stable => ("holding steady", "apply the base weight"),
            TrendDirection::Down => ("downward trend", "consider lowering the weight"),
            TrendDirection::StronglyDown => ("sharp decline", "lower the weight substantially"),
        };
        write!(
            f,
            "{headline} ({:.1}%), {}; {advice}",
            self.recent_rate, self.stability
        )
    }
}

/// Computes the trend of every pattern.
#[must_use]
pub fn analyze_pattern_trends(
    data: &[DrawRecord],
    trend_config: &TrendConfig,
    config: &PatternConfig,
) -> PatternMap<PatternTrend> {
    let recent = dataset::recent_rounds(data, trend_config.recent_count);
    let overall_reliability = analyze_pattern_reliability(data, config);
    let recent_reliability = analyze_pattern_reliability(&recent, config);
    let evaluated = EvaluatedDraw::evaluate_desc(data, config);
    let recent_evaluated = &evaluated[..recent.len()];

    debug!(
        records = data.len(),
        recent = recent.len(),
        window_size = trend_config.window_size,
        "analyzing pattern trends"
    );

    PatternMap::from_fn(|pattern| {
        let overall = overall_reliability[pattern].satisfaction_rate;
        let recent_rate = recent_reliability[pattern].satisfaction_rate;
        let trend_value = recent_rate - overall;
        let trend_direction = TrendDirection::from_change(trend_value);
        let satisfied = evaluated.iter().map(|e| e.result[pattern]).collect::<Vec<_>>();
        let volatility = volatility(&satisfied, trend_config.window_size);
        let stability = Stability::from_volatility(volatility);
        let recent_violations = recent_evaluated
            .iter()
            .filter(|e| !e.result[pattern])
            .map(|e| e.round)
            .take(MAX_RECENT_VIOLATIONS)
            .collect();

        PatternTrend {
            pattern,
            overall_satisfaction_rate: overall,
            recent_satisfaction_rate: recent_rate,
            trend_value,
            trend_direction,
            volatility,
            recent_violations,
            stability,
            recommendation: Recommendation {
                direction: trend_direction,
                recent_rate,
                stability,
            }
            .to_string(),
        }
    })
}

/// Population standard deviation of the satisfaction rates of every contiguous
/// window of `window_size` observations.
///
/// Returns 0 when `window_size` is 0 or there are fewer than `2 * window_size`
/// observations.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn volatility(satisfied: &[bool], window_size: usize) -> f64 {
    if window_size == 0 || satisfied.len() < window_size * 2 {
        return 0.0;
    }
    let rates = satisfied.windows(window_size).map(|window| {
        let count = window.iter().filter(|s| **s).count();
        count as f64 / window_size as f64 * 100.0
    });
    DescriptiveStats::new(rates).map_or(0.0, |stats| stats.std_dev)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::split_history;

    #[test]
    fn test_direction_buckets() {
        assert!(TrendDirection::from_change(50.0).is_strongly_up());
        assert!(TrendDirection::from_change(2.5).is_up());
        assert!(TrendDirection::from_change(2.0).is_stable());
        assert!(TrendDirection::from_change(-1.9).is_stable());
        assert!(TrendDirection::from_change(-4.9).is_down());
        assert!(TrendDirection::from_change(-5.0).is_strongly_down());
    }

    #[test]
    fn test_stability_buckets() {
        assert!(Stability::from_volatility(0.0).is_stable());
        assert!(Stability::from_volatility(5.0).is_moderate());
        assert!(Stability::from_volatility(9.99).is_moderate());
        assert!(Stability::from_volatility(10.0).is_volatile());
    }

    #[test]
    fn test_volatility_guards() {
        let satisfied = [true, false, true, false, true];
        assert_eq!(volatility(&satisfied, 0), 0.0);
        assert_eq!(volatility(&satisfied, 3), 0.0);
        assert_eq!(volatility(&[true; 20], 5), 0.0);
    }

    #[test]
    fn test_volatility_of_step_change() {
        // ten satisfied then ten violated: window rates are
        // 100 x6, 80, 60, 40, 20, 0 x6 (mean 50, variance 2000)
        let satisfied = [[true; 10], [false; 10]].concat();
        assert!((volatility(&satisfied, 5) - 2000.0_f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_trends_of_split_history() {
        let data = split_history();
        let config = TrendConfig {
            recent_count: 10,
            window_size: 5,
        };
        let trends = analyze_pattern_trends(&data, &config, &PatternConfig::default());

        let total_sum = &trends[Pattern::TotalSum];
        assert_eq!(total_sum.overall_satisfaction_rate, 50.0);
        assert_eq!(total_sum.recent_satisfaction_rate, 100.0);
        assert_eq!(total_sum.trend_value, 50.0);
        assert!(total_sum.trend_direction.is_strongly_up());
        assert!(total_sum.stability.is_volatile());
        assert!(total_sum.recent_violations.is_empty());

        let spread = &trends[Pattern::StartEndSpread];
        assert!(spread.trend_direction.is_strongly_down());
        assert_eq!(
            spread.recent_violations.as_slice(),
            &[20, 19, 18, 17, 16, 15, 14, 13, 12, 11]
        );

        let odd_even = &trends[Pattern::OddEvenBias];
        assert!(odd_even.trend_direction.is_stable());
        assert_eq!(odd_even.volatility, 0.0);
        assert!(odd_even.stability.is_stable());
        assert_eq!(
            odd_even.recommendation,
            "holding steady (100.0%), stable; apply the base weight"
        );
    }

    #[test]
    fn test_empty_history() {
        let trends = analyze_pattern_trends(&[], &TrendConfig::default(), &PatternConfig::default());
        for (_, trend) in trends.iter() {
            assert_eq!(trend.trend_value, 0.0);
            assert_eq!(trend.volatility, 0.0);
            assert!(trend.recent_violations.is_empty());
        }
    }
}
