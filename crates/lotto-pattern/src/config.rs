use serde::{Deserialize, Serialize};

/// How the start/end spread rule interprets "low start, high end".
///
/// Both variants look at the smallest and largest of the six numbers.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::IsVariant,
)]
#[serde(rename_all = "snake_case")]
pub enum SpanRule {
    /// Satisfied unless the combination both starts below 14 and ends above 30.
    #[default]
    ExcludeLowStartHighEnd,
    /// Satisfied only when the combination starts below 14 and ends above 30.
    LiteralLowStartHighEnd,
}

/// Tunable bounds of the pattern library.
///
/// Everything else in the library is fixed domain data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternConfig {
    /// Inclusive lower bound of the sum of last digits.
    pub last_digit_sum_min: u32,
    /// Inclusive upper bound of the sum of last digits.
    pub last_digit_sum_max: u32,
    pub span_rule: SpanRule,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            last_digit_sum_min: 14,
            last_digit_sum_max: 38,
            span_rule: SpanRule::default(),
        }
    }
}

impl PatternConfig {
    /// The older bound set that used `15..=38` for the last-digit sum.
    #[must_use]
    pub fn historical_variant() -> Self {
        Self {
            last_digit_sum_min: 15,
            ..Self::default()
        }
    }
}
