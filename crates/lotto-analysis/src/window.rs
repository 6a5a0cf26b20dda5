use serde::Serialize;

use lotto_engine::DrawRecord;
use lotto_pattern::{Pattern, PatternConfig};

use crate::EvaluatedDraw;

pub const DEFAULT_WINDOW_SIZES: [usize; 4] = [10, 20, 30, 50];

/// Satisfaction of one pattern over the most recent `window_size` rounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WindowAnalysis {
    pub window_size: usize,
    /// Oldest round in the window.
    pub start_round: u32,
    /// Newest round in the window.
    pub end_round: u32,
    pub satisfaction_rate: f64,
    pub violation_rate: f64,
}

/// Analyzes `pattern` over windows anchored at the most recent round.
///
/// Window sizes that are zero or larger than the dataset are skipped.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn analyze_moving_window(
    data: &[DrawRecord],
    pattern: Pattern,
    window_sizes: &[usize],
    config: &PatternConfig,
) -> Vec<WindowAnalysis> {
    let evaluated = EvaluatedDraw::evaluate_desc(data, config);
    window_sizes
        .iter()
        .filter(|&&size| size > 0 && size <= evaluated.len())
        .map(|&window_size| {
            let window = &evaluated[..window_size];
            let satisfied = window.iter().filter(|e| e.result[pattern]).count();
            let satisfaction_rate = satisfied as f64 / window_size as f64 * 100.0;
            WindowAnalysis {
                window_size,
                start_round: window[window_size - 1].round,
                end_round: window[0].round,
                satisfaction_rate,
                violation_rate: 100.0 - satisfaction_rate,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::split_history;

    #[test]
    fn test_windows_larger_than_data_are_skipped() {
        let analyses = analyze_moving_window(
            &split_history(),
            Pattern::TotalSum,
            &DEFAULT_WINDOW_SIZES,
            &PatternConfig::default(),
        );
        let sizes = analyses.iter().map(|a| a.window_size).collect::<Vec<_>>();
        assert_eq!(sizes, vec![10, 20]);

        assert_eq!(analyses[0].start_round, 11);
        assert_eq!(analyses[0].end_round, 20);
        assert_eq!(analyses[0].satisfaction_rate, 100.0);
        assert_eq!(analyses[0].violation_rate, 0.0);

        assert_eq!(analyses[1].start_round, 1);
        assert_eq!(analyses[1].end_round, 20);
        assert_eq!(analyses[1].satisfaction_rate, 50.0);
        assert_eq!(analyses[1].violation_rate, 50.0);
    }

    #[test]
    fn test_zero_window_and_empty_data() {
        let config = PatternConfig::default();
        assert!(analyze_moving_window(&split_history(), Pattern::AcValue, &[0], &config).is_empty());
        assert!(analyze_moving_window(&[], Pattern::AcValue, &[1, 10], &config).is_empty());
    }
}
