//! Whole-combination evaluation over all patterns.

use lotto_engine::{DrawNumbers, DrawRecord};

use crate::{Pattern, PatternConfig, PatternMap};

/// Evaluates every pattern against a combination.
#[must_use]
pub fn evaluate_all(numbers: &DrawNumbers, config: &PatternConfig) -> PatternMap<bool> {
    PatternMap::from_fn(|pattern| pattern.check(numbers, config))
}

/// Patterns the combination violates, in canonical order.
#[must_use]
pub fn violated_patterns(numbers: &DrawNumbers, config: &PatternConfig) -> Vec<Pattern> {
    Pattern::ALL
        .into_iter()
        .filter(|pattern| !pattern.check(numbers, config))
        .collect()
}

#[must_use]
pub fn satisfies_all(numbers: &DrawNumbers, config: &PatternConfig) -> bool {
    Pattern::ALL
        .into_iter()
        .all(|pattern| pattern.check(numbers, config))
}

/// Keeps the records whose main numbers satisfy every pattern.
#[must_use]
pub fn filter_all_patterns(records: &[DrawRecord], config: &PatternConfig) -> Vec<DrawRecord> {
    records
        .iter()
        .filter(|record| satisfies_all(&record.numbers(), config))
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::SpanRule;

    fn numbers(n: [u8; 6]) -> DrawNumbers {
        DrawNumbers::new(n).unwrap()
    }

    #[test]
    fn test_violated_patterns_of_known_draws() {
        let config = PatternConfig::default();
        assert_eq!(
            violated_patterns(&numbers([7, 11, 16, 21, 27, 33]), &config),
            vec![Pattern::StartEndSpread]
        );
        assert_eq!(
            violated_patterns(&numbers([2, 9, 16, 25, 26, 40]), &config),
            vec![
                Pattern::CompositeCount,
                Pattern::PerfectSquareCount,
                Pattern::StartEndSpread,
                Pattern::FrogExclusion,
            ]
        );
        assert_eq!(
            violated_patterns(&numbers([6, 13, 25, 31, 36, 43]), &config),
            vec![
                Pattern::AcValue,
                Pattern::StartEndSpread,
                Pattern::CornerMembership,
                Pattern::TriangleExclusion,
            ]
        );
    }

    #[test]
    fn test_satisfies_all_and_filter() {
        let literal = PatternConfig {
            span_rule: SpanRule::LiteralLowStartHighEnd,
            ..PatternConfig::default()
        };
        let clean = numbers([7, 11, 16, 21, 27, 33]);
        assert!(!satisfies_all(&clean, &PatternConfig::default()));
        assert!(satisfies_all(&clean, &literal));

        let date = chrono::NaiveDate::from_ymd_opt(2024, 1, 6).unwrap();
        let records = [
            DrawRecord::new(date, 1, clean, 45).unwrap(),
            DrawRecord::from_slice(date, 2, &[2, 9, 16, 25, 26, 40], 42).unwrap(),
        ];
        let kept = filter_all_patterns(&records, &literal);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].round(), 1);
        assert!(filter_all_patterns(&records, &PatternConfig::default()).is_empty());
    }

    #[test]
    fn test_evaluate_all_agrees_with_violated() {
        let config = PatternConfig::default();
        let n = numbers([6, 13, 25, 31, 36, 43]);
        let result = evaluate_all(&n, &config);
        let violated = result
            .iter()
            .filter(|(_, satisfied)| !**satisfied)
            .map(|(pattern, _)| pattern)
            .collect::<Vec<_>>();
        assert_eq!(violated, violated_patterns(&n, &config));
    }

    fn combination() -> impl Strategy<Value = Vec<u8>> {
        proptest::sample::subsequence((1..=45).collect::<Vec<u8>>(), 6).prop_shuffle()
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        #[test]
        fn prop_patterns_ignore_draw_order(drawn in combination()) {
            let config = PatternConfig::default();
            let drawn = DrawNumbers::try_from(drawn.as_slice()).unwrap();
            let sorted = DrawNumbers::new(drawn.sorted()).unwrap();
            prop_assert_eq!(evaluate_all(&drawn, &config), evaluate_all(&sorted, &config));
        }

        #[test]
        fn prop_span_rules_are_complementary(drawn in combination()) {
            let drawn = DrawNumbers::try_from(drawn.as_slice()).unwrap();
            let literal = PatternConfig {
                span_rule: SpanRule::LiteralLowStartHighEnd,
                ..PatternConfig::default()
            };
            prop_assert_ne!(
                Pattern::StartEndSpread.check(&drawn, &PatternConfig::default()),
                Pattern::StartEndSpread.check(&drawn, &literal)
            );
        }
    }
}
