//! Fixed number sets used by the pattern predicates.
//!
//! The ticket layout is a 7-column grid of the numbers 1..=45. The corner, triangle
//! and frog shapes below are regions of that grid, expressed as sets of numbers.
//! All sets are compile-time bitmasks over `1..=45`.

use serde::Serialize;

use lotto_engine::DrawNumbers;

/// A set of lottery numbers stored as a bitmask (bit `n` set iff `n` is a member).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NumberSet(u64);

impl NumberSet {
    pub const EMPTY: Self = Self(0);

    /// Builds a set from a list of numbers.
    #[must_use]
    pub const fn from_numbers(numbers: &[u8]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < numbers.len() {
            bits |= 1 << numbers[i];
            i += 1;
        }
        Self(bits)
    }

    /// Builds the set `start..=end`.
    #[must_use]
    pub const fn range(start: u8, end: u8) -> Self {
        let mut bits = 0;
        let mut n = start;
        while n <= end {
            bits |= 1 << n;
            n += 1;
        }
        Self(bits)
    }

    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[must_use]
    pub const fn contains(self, number: u8) -> bool {
        number < 64 && self.0 & (1 << number) != 0
    }

    #[must_use]
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Counts how many of the drawn numbers are members.
    #[must_use]
    pub fn count_in(self, numbers: &DrawNumbers) -> usize {
        numbers.iter().filter(|&n| self.contains(n)).count()
    }

    /// Whether every drawn number is a member.
    #[must_use]
    pub fn contains_all(self, numbers: &DrawNumbers) -> bool {
        numbers.iter().all(|n| self.contains(n))
    }
}

pub const PRIMES: NumberSet =
    NumberSet::from_numbers(&[2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43]);

/// Numbers that are neither prime nor multiples of 3.
pub const COMPOSITES: NumberSet = NumberSet::from_numbers(&[
    1, 4, 8, 10, 14, 16, 20, 22, 25, 26, 28, 32, 34, 35, 38, 40, 44,
]);

pub const PERFECT_SQUARES: NumberSet = NumberSet::from_numbers(&[1, 4, 9, 16, 25, 36]);

/// Numbers whose two digits are equal.
pub const REPEATER_DIGITS: NumberSet = NumberSet::from_numbers(&[11, 22, 33, 44]);

/// The five bands used by the section concentration rule.
pub const SECTIONS: [NumberSet; 5] = [
    NumberSet::range(1, 10),
    NumberSet::range(11, 20),
    NumberSet::range(21, 30),
    NumberSet::range(31, 40),
    NumberSet::range(41, 45),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Corner {
    LeftTop,
    RightTop,
    LeftBottom,
    RightBottom,
}

impl Corner {
    pub const ALL: [Self; 4] = [
        Self::LeftTop,
        Self::RightTop,
        Self::LeftBottom,
        Self::RightBottom,
    ];

    #[must_use]
    pub const fn members(self) -> NumberSet {
        match self {
            Self::LeftTop => NumberSet::from_numbers(&[1, 2, 8, 9]),
            Self::RightTop => NumberSet::from_numbers(&[6, 7, 13, 14]),
            Self::LeftBottom => NumberSet::from_numbers(&[29, 30, 36, 37, 43, 44]),
            Self::RightBottom => NumberSet::from_numbers(&[34, 35, 41, 42]),
        }
    }
}

/// Union of the four corner regions.
pub const CORNERS: NumberSet = Corner::LeftTop
    .members()
    .union(Corner::RightTop.members())
    .union(Corner::LeftBottom.members())
    .union(Corner::RightBottom.members());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Triangle {
    LeftTop,
    RightTop,
    LeftBottom,
    RightBottom,
}

impl Triangle {
    pub const ALL: [Self; 4] = [
        Self::LeftTop,
        Self::RightTop,
        Self::LeftBottom,
        Self::RightBottom,
    ];

    #[must_use]
    pub const fn members(self) -> NumberSet {
        match self {
            Self::LeftTop => NumberSet::from_numbers(&[
                1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 15, 16, 17, 18, 19, 22, 23, 24, 25, 29,
                30, 31, 36, 37, 43,
            ]),
            Self::RightTop => NumberSet::range(1, 7)
                .union(NumberSet::range(9, 14))
                .union(NumberSet::range(17, 21))
                .union(NumberSet::range(25, 28))
                .union(NumberSet::range(33, 35))
                .union(NumberSet::range(41, 42)),
            Self::LeftBottom => NumberSet::from_numbers(&[
                1, 8, 9, 15, 16, 17, 22, 23, 24, 25, 29, 30, 31, 32, 33, 36, 37, 38, 39, 40, 41,
                43, 44, 45,
            ]),
            Self::RightBottom => NumberSet::from_numbers(&[7])
                .union(NumberSet::range(13, 14))
                .union(NumberSet::range(19, 21))
                .union(NumberSet::range(25, 28))
                .union(NumberSet::range(31, 35))
                .union(NumberSet::range(37, 42))
                .union(NumberSet::range(43, 45)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Frog {
    LeftAligned,
    RightAligned,
}

impl Frog {
    pub const ALL: [Self; 2] = [Self::LeftAligned, Self::RightAligned];

    #[must_use]
    pub const fn members(self) -> NumberSet {
        match self {
            Self::LeftAligned => NumberSet::from_numbers(&[
                1, 2, 4, 5, 8, 9, 11, 12, 15, 16, 18, 19, 22, 23, 25, 26, 29, 30, 32, 33, 36, 37,
                39, 40, 43, 44,
            ]),
            Self::RightAligned => NumberSet::from_numbers(&[
                3, 4, 6, 7, 10, 11, 13, 14, 17, 18, 20, 21, 24, 25, 27, 28, 31, 32, 34, 35, 38, 39,
                41, 42, 45,
            ]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_sizes() {
        assert_eq!(PRIMES.len(), 14);
        assert_eq!(COMPOSITES.len(), 17);
        assert_eq!(PERFECT_SQUARES.len(), 6);
        assert_eq!(CORNERS.len(), 18);
        assert_eq!(Triangle::LeftTop.members().len(), 28);
        assert_eq!(Triangle::RightTop.members().len(), 27);
        assert_eq!(Triangle::LeftBottom.members().len(), 24);
        assert_eq!(Triangle::RightBottom.members().len(), 24);
        assert_eq!(Frog::LeftAligned.members().len(), 26);
        assert_eq!(Frog::RightAligned.members().len(), 25);
    }

    #[test]
    fn test_sections_partition_all_numbers() {
        for n in 1..=45 {
            let hits = SECTIONS.iter().filter(|s| s.contains(n)).count();
            assert_eq!(hits, 1, "number {n}");
        }
        assert!(!SECTIONS.iter().any(|s| s.contains(0) || s.contains(46)));
    }

    #[test]
    fn test_range_and_membership() {
        let set = NumberSet::range(3, 5);
        assert!(!set.contains(2));
        assert!(set.contains(3) && set.contains(5));
        assert!(!set.contains(6));
        assert!(!set.contains(200));
        assert!(NumberSet::EMPTY.is_empty());
    }

    #[test]
    fn test_count_and_contains_all() {
        let numbers = DrawNumbers::new([1, 2, 8, 9, 20, 40]).unwrap();
        assert_eq!(Corner::LeftTop.members().count_in(&numbers), 4);
        assert_eq!(CORNERS.count_in(&numbers), 4);
        assert!(!Frog::LeftAligned.members().contains_all(&numbers));

        let numbers = DrawNumbers::new([1, 2, 4, 5, 8, 9]).unwrap();
        assert!(Frog::LeftAligned.members().contains_all(&numbers));
    }
}
