use serde::Serialize;

use lotto_engine::DrawRecord;
use lotto_pattern::{Pattern, PatternConfig};

use crate::EvaluatedDraw;

pub const DEFAULT_MIN_CYCLE_LENGTH: u32 = 5;
pub const DEFAULT_MAX_CYCLE_LENGTH: u32 = 50;

/// Gap between two consecutive violations of a pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternCycle {
    pub pattern: Pattern,
    /// The older violation.
    pub start_round: u32,
    /// The newer violation.
    pub end_round: u32,
    pub cycle_length: u32,
    pub violation_rounds: [u32; 2],
}

/// Finds gaps of `min_length..=max_length` rounds between consecutive violations
/// of `pattern`, newest first.
#[must_use]
pub fn find_pattern_cycles(
    data: &[DrawRecord],
    pattern: Pattern,
    min_length: u32,
    max_length: u32,
    config: &PatternConfig,
) -> Vec<PatternCycle> {
    let violations = EvaluatedDraw::evaluate_desc(data, config)
        .into_iter()
        .filter(|e| !e.result[pattern])
        .map(|e| e.round)
        .collect::<Vec<_>>();

    violations
        .windows(2)
        .filter_map(|pair| {
            let (newer, older) = (pair[0], pair[1]);
            let cycle_length = newer - older;
            (min_length..=max_length)
                .contains(&cycle_length)
                .then_some(PatternCycle {
                    pattern,
                    start_round: older,
                    end_round: newer,
                    cycle_length,
                    violation_rounds: [older, newer],
                })
        })
        .collect()
}
