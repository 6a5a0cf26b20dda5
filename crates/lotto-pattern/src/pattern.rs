use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use lotto_engine::DrawNumbers;

use crate::{config::PatternConfig, rules};

/// One of the seventeen combination patterns.
///
/// A pattern is a boolean predicate over the six main numbers. "Satisfied" means the
/// combination looks like a typical historical draw for that aspect.
///
/// The declaration order is the canonical order used by [`PatternMap`](crate::PatternMap)
/// and by reports.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Pattern {
    TotalSum,
    AcValue,
    OddEvenBias,
    HighLowRatio,
    SameLastDigit,
    LastDigitSum,
    ConsecutiveRun,
    PrimeCount,
    CompositeCount,
    PerfectSquareCount,
    MultiplesOfThreeAndFive,
    RepeaterDigitCount,
    StartEndSpread,
    SectionConcentration,
    CornerMembership,
    TriangleExclusion,
    FrogExclusion,
}

impl Pattern {
    pub const COUNT: usize = 17;

    pub const ALL: [Self; Self::COUNT] = [
        Self::TotalSum,
        Self::AcValue,
        Self::OddEvenBias,
        Self::HighLowRatio,
        Self::SameLastDigit,
        Self::LastDigitSum,
        Self::ConsecutiveRun,
        Self::PrimeCount,
        Self::CompositeCount,
        Self::PerfectSquareCount,
        Self::MultiplesOfThreeAndFive,
        Self::RepeaterDigitCount,
        Self::StartEndSpread,
        Self::SectionConcentration,
        Self::CornerMembership,
        Self::TriangleExclusion,
        Self::FrogExclusion,
    ];

    /// Position in [`Pattern::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Stable snake_case identifier, also used as the serialized form.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::TotalSum => "total_sum",
            Self::AcValue => "ac_value",
            Self::OddEvenBias => "odd_even_bias",
            Self::HighLowRatio => "high_low_ratio",
            Self::SameLastDigit => "same_last_digit",
            Self::LastDigitSum => "last_digit_sum",
            Self::ConsecutiveRun => "consecutive_run",
            Self::PrimeCount => "prime_count",
            Self::CompositeCount => "composite_count",
            Self::PerfectSquareCount => "perfect_square_count",
            Self::MultiplesOfThreeAndFive => "multiples_of_three_and_five",
            Self::RepeaterDigitCount => "repeater_digit_count",
            Self::StartEndSpread => "start_end_spread",
            Self::SectionConcentration => "section_concentration",
            Self::CornerMembership => "corner_membership",
            Self::TriangleExclusion => "triangle_exclusion",
            Self::FrogExclusion => "frog_exclusion",
        }
    }

    /// Human-readable name for reports.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::TotalSum => "Total Sum",
            Self::AcValue => "AC Value",
            Self::OddEvenBias => "Odd/Even Bias",
            Self::HighLowRatio => "High/Low Ratio",
            Self::SameLastDigit => "Same Last Digit",
            Self::LastDigitSum => "Last Digit Sum",
            Self::ConsecutiveRun => "Consecutive Run",
            Self::PrimeCount => "Prime Count",
            Self::CompositeCount => "Composite Count",
            Self::PerfectSquareCount => "Perfect Square Count",
            Self::MultiplesOfThreeAndFive => "Multiples of 3 and 5",
            Self::RepeaterDigitCount => "Repeater Digit Count",
            Self::StartEndSpread => "Start/End Spread",
            Self::SectionConcentration => "Section Concentration",
            Self::CornerMembership => "Corner Membership",
            Self::TriangleExclusion => "Triangle Exclusion",
            Self::FrogExclusion => "Frog Exclusion",
        }
    }

    /// Evaluates the pattern against a combination.
    ///
    /// # Examples
    ///
    /// ```
    /// use lotto_engine::DrawNumbers;
    /// use lotto_pattern::{Pattern, PatternConfig};
    ///
    /// let config = PatternConfig::default();
    /// let numbers = DrawNumbers::new([1, 2, 3, 4, 5, 6]).unwrap();
    /// assert!(!Pattern::TotalSum.check(&numbers, &config));
    /// assert!(Pattern::OddEvenBias.check(&numbers, &config));
    /// ```
    #[must_use]
    pub fn check(self, numbers: &DrawNumbers, config: &PatternConfig) -> bool {
        match self {
            Self::TotalSum => rules::total_sum(numbers),
            Self::AcValue => rules::ac(numbers),
            Self::OddEvenBias => rules::odd_even_bias(numbers),
            Self::HighLowRatio => rules::high_low_ratio(numbers),
            Self::SameLastDigit => rules::same_last_digit(numbers),
            Self::LastDigitSum => rules::last_digit_sum_in(
                numbers,
                config.last_digit_sum_min,
                config.last_digit_sum_max,
            ),
            Self::ConsecutiveRun => rules::consecutive_run(numbers),
            Self::PrimeCount => rules::prime_count(numbers),
            Self::CompositeCount => rules::composite_count(numbers),
            Self::PerfectSquareCount => rules::perfect_square_count(numbers),
            Self::MultiplesOfThreeAndFive => rules::multiples_of_three_and_five(numbers),
            Self::RepeaterDigitCount => rules::repeater_digit_count(numbers),
            Self::StartEndSpread => rules::start_end_spread(numbers, config.span_rule),
            Self::SectionConcentration => rules::section_concentration(numbers),
            Self::CornerMembership => rules::corner_membership(numbers),
            Self::TriangleExclusion => rules::triangle_exclusion(numbers),
            Self::FrogExclusion => rules::frog_exclusion(numbers),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown pattern `{name}`")]
pub struct ParsePatternError {
    name: String,
}

impl FromStr for Pattern {
    type Err = ParsePatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.id() == s)
            .ok_or_else(|| ParsePatternError {
                name: s.to_owned(),
            })
    }
}
