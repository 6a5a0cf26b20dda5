use std::fmt;

use chrono::{Datelike as _, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{InvalidDrawError, MAX_NUMBER, MIN_NUMBER, NUMBERS_PER_DRAW};

/// Six distinct main numbers in `1..=45`, kept in draw order.
///
/// Pattern predicates never depend on the order, but the draw order is preserved
/// so that reports can show the numbers exactly as they were drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct DrawNumbers([u8; NUMBERS_PER_DRAW]);

impl DrawNumbers {
    /// Validates and wraps six numbers.
    ///
    /// # Examples
    ///
    /// ```
    /// use lotto_engine::{DrawNumbers, InvalidDrawError};
    ///
    /// assert!(DrawNumbers::new([1, 2, 3, 4, 5, 6]).is_ok());
    /// assert_eq!(
    ///     DrawNumbers::new([1, 2, 3, 4, 5, 46]),
    ///     Err(InvalidDrawError::NumberOutOfRange { number: 46 })
    /// );
    /// assert_eq!(
    ///     DrawNumbers::new([1, 2, 3, 4, 5, 5]),
    ///     Err(InvalidDrawError::DuplicateNumber { number: 5 })
    /// );
    /// ```
    pub fn new(numbers: [u8; NUMBERS_PER_DRAW]) -> Result<Self, InvalidDrawError> {
        let mut seen = 0_u64;
        for &number in &numbers {
            if !(MIN_NUMBER..=MAX_NUMBER).contains(&number) {
                return Err(InvalidDrawError::NumberOutOfRange { number });
            }
            let bit = 1_u64 << number;
            if seen & bit != 0 {
                return Err(InvalidDrawError::DuplicateNumber { number });
            }
            seen |= bit;
        }
        Ok(Self(numbers))
    }

    #[must_use]
    pub fn as_array(&self) -> &[u8; NUMBERS_PER_DRAW] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.iter().copied()
    }

    /// Returns the numbers in ascending order.
    #[must_use]
    pub fn sorted(&self) -> [u8; NUMBERS_PER_DRAW] {
        let mut sorted = self.0;
        sorted.sort_unstable();
        sorted
    }

    #[must_use]
    pub fn sum(&self) -> u32 {
        self.iter().map(u32::from).sum()
    }

    #[must_use]
    pub fn min(&self) -> u8 {
        self.iter().min().unwrap_or(MIN_NUMBER)
    }

    #[must_use]
    pub fn max(&self) -> u8 {
        self.iter().max().unwrap_or(MAX_NUMBER)
    }

    #[must_use]
    pub fn contains(&self, number: u8) -> bool {
        self.0.contains(&number)
    }
}

impl TryFrom<&[u8]> for DrawNumbers {
    type Error = InvalidDrawError;

    fn try_from(numbers: &[u8]) -> Result<Self, Self::Error> {
        let numbers = <[u8; NUMBERS_PER_DRAW]>::try_from(numbers).map_err(|_| {
            InvalidDrawError::WrongCount {
                count: numbers.len(),
            }
        })?;
        Self::new(numbers)
    }
}

impl TryFrom<Vec<u8>> for DrawNumbers {
    type Error = InvalidDrawError;

    fn try_from(numbers: Vec<u8>) -> Result<Self, Self::Error> {
        Self::try_from(numbers.as_slice())
    }
}

impl From<DrawNumbers> for Vec<u8> {
    fn from(numbers: DrawNumbers) -> Self {
        numbers.0.to_vec()
    }
}

impl fmt::Display for DrawNumbers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, number) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{number:02}")?;
        }
        Ok(())
    }
}

/// One lottery draw: the date, the round number, six main numbers and the bonus.
///
/// Candidate combinations are represented with the same type so that the scoring and
/// filtering code can treat historical and generated draws uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "DrawRecordRepr", into = "DrawRecordRepr")]
pub struct DrawRecord {
    date: NaiveDate,
    round: u32,
    numbers: DrawNumbers,
    bonus: u8,
}

impl DrawRecord {
    pub fn new(
        date: NaiveDate,
        round: u32,
        numbers: DrawNumbers,
        bonus: u8,
    ) -> Result<Self, InvalidDrawError> {
        if round == 0 {
            return Err(InvalidDrawError::ZeroRound);
        }
        if !(MIN_NUMBER..=MAX_NUMBER).contains(&bonus) {
            return Err(InvalidDrawError::BonusOutOfRange { bonus });
        }
        Ok(Self {
            date,
            round,
            numbers,
            bonus,
        })
    }

    /// Builds a record from an unchecked slice of main numbers.
    pub fn from_slice(
        date: NaiveDate,
        round: u32,
        numbers: &[u8],
        bonus: u8,
    ) -> Result<Self, InvalidDrawError> {
        Self::new(date, round, DrawNumbers::try_from(numbers)?, bonus)
    }

    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub fn numbers(&self) -> DrawNumbers {
        self.numbers
    }

    #[must_use]
    pub fn sorted_numbers(&self) -> [u8; NUMBERS_PER_DRAW] {
        self.numbers.sorted()
    }

    #[must_use]
    pub fn bonus(&self) -> u8 {
        self.bonus
    }

    #[must_use]
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    #[must_use]
    pub fn month(&self) -> u32 {
        self.date.month()
    }

    /// Year and month packed as `yyyymm` (e.g. `202508`).
    #[expect(clippy::cast_possible_wrap)]
    #[must_use]
    pub fn year_month(&self) -> i32 {
        self.year() * 100 + self.month() as i32
    }

    /// Year and month formatted as `yyyy-mm` (e.g. `"2025-08"`).
    #[must_use]
    pub fn year_month_key(&self) -> String {
        format!("{}-{:02}", self.year(), self.month())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct DrawRecordRepr {
    date: NaiveDate,
    round: u32,
    number1: u8,
    number2: u8,
    number3: u8,
    number4: u8,
    number5: u8,
    number6: u8,
    bonus: u8,
}

impl TryFrom<DrawRecordRepr> for DrawRecord {
    type Error = InvalidDrawError;

    fn try_from(repr: DrawRecordRepr) -> Result<Self, Self::Error> {
        let numbers = DrawNumbers::new([
            repr.number1,
            repr.number2,
            repr.number3,
            repr.number4,
            repr.number5,
            repr.number6,
        ])?;
        Self::new(repr.date, repr.round, numbers, repr.bonus)
    }
}

impl From<DrawRecord> for DrawRecordRepr {
    fn from(record: DrawRecord) -> Self {
        let [number1, number2, number3, number4, number5, number6] = record.numbers.0;
        Self {
            date: record.date,
            round: record.round,
            number1,
            number2,
            number3,
            number4,
            number5,
            number6,
            bonus: record.bonus,
        }
    }
}
