//! The individual pattern predicates and the measurements they are built on.
//!
//! Each predicate looks only at the six main numbers; none of them depends on the
//! order in which the numbers were drawn.

use lotto_engine::DrawNumbers;

use crate::{
    config::SpanRule,
    tables::{
        COMPOSITES, CORNERS, Frog, PERFECT_SQUARES, PRIMES, REPEATER_DIGITS, SECTIONS, Triangle,
    },
};

pub const TOTAL_SUM_MIN: u32 = 100;
pub const TOTAL_SUM_MAX: u32 = 175;
pub const AC_VALUE_MIN: u32 = 7;
pub const HIGH_LOW_BOUNDARY: u8 = 23;
pub const SAME_LAST_DIGIT_MAX: usize = 3;
pub const CONSECUTIVE_RUN_MAX: u32 = 1;
pub const PRIME_MAX: usize = 3;
pub const COMPOSITE_MAX: usize = 3;
pub const PERFECT_SQUARE_MAX: usize = 2;
pub const MULTIPLES_OF_THREE_MAX: usize = 3;
pub const MULTIPLES_OF_FIVE_MAX: usize = 2;
pub const REPEATER_DIGIT_MAX: usize = 2;
pub const SPAN_START_BELOW: u8 = 14;
pub const SPAN_END_ABOVE: u8 = 30;
/// A section holding this many numbers or more is too concentrated.
pub const SECTION_LIMIT: usize = 4;
pub const CORNER_MIN: usize = 1;
pub const CORNER_MAX: usize = 3;

/// Arithmetic complexity: distinct absolute pairwise differences minus 5.
///
/// # Examples
///
/// ```
/// use lotto_engine::DrawNumbers;
/// use lotto_pattern::rules::ac_value;
///
/// let numbers = DrawNumbers::new([1, 2, 3, 4, 5, 6]).unwrap();
/// assert_eq!(ac_value(&numbers), 0);
/// ```
#[must_use]
pub fn ac_value(numbers: &DrawNumbers) -> u32 {
    let numbers = numbers.as_array();
    let mut differences = 0_u64;
    for (i, a) in numbers.iter().enumerate() {
        for b in &numbers[i + 1..] {
            differences |= 1 << a.abs_diff(*b);
        }
    }
    differences.count_ones().saturating_sub(5)
}

/// Length of the longest chain of `+1` steps in the sorted numbers.
///
/// `0` means no two numbers are adjacent, `1` means the longest chain is a pair,
/// `2` means three numbers in a row, and so on.
#[must_use]
pub fn longest_consecutive_run(numbers: &DrawNumbers) -> u32 {
    let sorted = numbers.sorted();
    let mut longest = 0;
    let mut current = 0;
    for pair in sorted.windows(2) {
        if pair[1] == pair[0] + 1 {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    longest
}

/// Highest number of main numbers sharing one last digit.
#[must_use]
pub fn max_same_last_digit(numbers: &DrawNumbers) -> usize {
    let mut counts = [0; 10];
    for n in numbers.iter() {
        counts[usize::from(n % 10)] += 1;
    }
    counts.into_iter().max().unwrap_or(0)
}

#[must_use]
pub fn last_digit_sum(numbers: &DrawNumbers) -> u32 {
    numbers.iter().map(|n| u32::from(n % 10)).sum()
}

#[must_use]
pub fn multiples_of_three_count(numbers: &DrawNumbers) -> usize {
    numbers.iter().filter(|n| n % 3 == 0).count()
}

#[must_use]
pub fn multiples_of_five_count(numbers: &DrawNumbers) -> usize {
    numbers.iter().filter(|n| n % 5 == 0).count()
}

/// Count of numbers in each of the five sections.
#[must_use]
pub fn section_counts(numbers: &DrawNumbers) -> [usize; 5] {
    SECTIONS.map(|section| section.count_in(numbers))
}

#[must_use]
pub fn corner_count(numbers: &DrawNumbers) -> usize {
    CORNERS.count_in(numbers)
}

/// Triangles that contain all six numbers.
#[must_use]
pub fn triangle_membership(numbers: &DrawNumbers) -> Vec<Triangle> {
    Triangle::ALL
        .into_iter()
        .filter(|t| t.members().contains_all(numbers))
        .collect()
}

/// Frog shapes that contain all six numbers.
#[must_use]
pub fn frog_membership(numbers: &DrawNumbers) -> Vec<Frog> {
    Frog::ALL
        .into_iter()
        .filter(|f| f.members().contains_all(numbers))
        .collect()
}

#[must_use]
pub fn total_sum(numbers: &DrawNumbers) -> bool {
    (TOTAL_SUM_MIN..=TOTAL_SUM_MAX).contains(&numbers.sum())
}

#[must_use]
pub fn ac(numbers: &DrawNumbers) -> bool {
    ac_value(numbers) >= AC_VALUE_MIN
}

#[must_use]
pub fn odd_even_bias(numbers: &DrawNumbers) -> bool {
    let odd = numbers.iter().filter(|n| n % 2 == 1).count();
    odd != 0 && odd != numbers.as_array().len()
}

#[must_use]
pub fn high_low_ratio(numbers: &DrawNumbers) -> bool {
    let high = numbers.iter().filter(|&n| n >= HIGH_LOW_BOUNDARY).count();
    high != 0 && high != numbers.as_array().len()
}

#[must_use]
pub fn same_last_digit(numbers: &DrawNumbers) -> bool {
    max_same_last_digit(numbers) <= SAME_LAST_DIGIT_MAX
}

#[must_use]
pub fn last_digit_sum_in(numbers: &DrawNumbers, min: u32, max: u32) -> bool {
    (min..=max).contains(&last_digit_sum(numbers))
}

#[must_use]
pub fn consecutive_run(numbers: &DrawNumbers) -> bool {
    longest_consecutive_run(numbers) <= CONSECUTIVE_RUN_MAX
}

#[must_use]
pub fn prime_count(numbers: &DrawNumbers) -> bool {
    PRIMES.count_in(numbers) <= PRIME_MAX
}

#[must_use]
pub fn composite_count(numbers: &DrawNumbers) -> bool {
    COMPOSITES.count_in(numbers) <= COMPOSITE_MAX
}

#[must_use]
pub fn perfect_square_count(numbers: &DrawNumbers) -> bool {
    PERFECT_SQUARES.count_in(numbers) <= PERFECT_SQUARE_MAX
}

#[must_use]
pub fn multiples_of_three_and_five(numbers: &DrawNumbers) -> bool {
    multiples_of_three_count(numbers) <= MULTIPLES_OF_THREE_MAX
        && multiples_of_five_count(numbers) <= MULTIPLES_OF_FIVE_MAX
}

#[must_use]
pub fn repeater_digit_count(numbers: &DrawNumbers) -> bool {
    REPEATER_DIGITS.count_in(numbers) <= REPEATER_DIGIT_MAX
}

#[must_use]
pub fn start_end_spread(numbers: &DrawNumbers, rule: SpanRule) -> bool {
    let low_start_high_end = numbers.min() < SPAN_START_BELOW && numbers.max() > SPAN_END_ABOVE;
    match rule {
        SpanRule::ExcludeLowStartHighEnd => !low_start_high_end,
        SpanRule::LiteralLowStartHighEnd => low_start_high_end,
    }
}

#[must_use]
pub fn section_concentration(numbers: &DrawNumbers) -> bool {
    section_counts(numbers)
        .into_iter()
        .all(|count| count < SECTION_LIMIT)
}

#[must_use]
pub fn corner_membership(numbers: &DrawNumbers) -> bool {
    (CORNER_MIN..=CORNER_MAX).contains(&corner_count(numbers))
}

#[must_use]
pub fn triangle_exclusion(numbers: &DrawNumbers) -> bool {
    triangle_membership(numbers).is_empty()
}

#[must_use]
pub fn frog_exclusion(numbers: &DrawNumbers) -> bool {
    frog_membership(numbers).is_empty()
}
