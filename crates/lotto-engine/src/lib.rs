//! Draw records and dataset queries for lottery pattern analysis.
//!
//! This crate holds the value types every other crate in the workspace consumes:
//!
//! - [`DrawNumbers`] - a validated combination of six distinct numbers in `1..=45`
//! - [`DrawRecord`] - one historical (or candidate) draw: date, round, numbers and bonus
//! - [`dataset`] - read-only queries over a slice of draw records (recent rounds,
//!   round ranges, number frequencies, calendar slices)
//!
//! Records are immutable `Copy` values. Validation happens once, at construction or
//! deserialization time, so downstream code can rely on the invariants without
//! re-checking them.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use lotto_engine::{DrawNumbers, DrawRecord};
//!
//! let date = NaiveDate::from_ymd_opt(2024, 1, 6).unwrap();
//! let numbers = DrawNumbers::new([7, 11, 16, 21, 27, 33]).unwrap();
//! let record = DrawRecord::new(date, 1101, numbers, 45).unwrap();
//!
//! assert_eq!(record.year_month(), 202_401);
//! assert_eq!(record.numbers().sum(), 115);
//! ```

pub use self::draw::*;

pub mod dataset;
mod draw;

/// Lowest number that can be drawn.
pub const MIN_NUMBER: u8 = 1;
/// Highest number that can be drawn.
pub const MAX_NUMBER: u8 = 45;
/// Count of main numbers in one draw.
pub const NUMBERS_PER_DRAW: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InvalidDrawError {
    #[display("expected 6 main numbers, got {count}")]
    WrongCount { count: usize },
    #[display("number {number} is outside 1..=45")]
    NumberOutOfRange { number: u8 },
    #[display("number {number} appears more than once")]
    DuplicateNumber { number: u8 },
    #[display("bonus number {bonus} is outside 1..=45")]
    BonusOutOfRange { bonus: u8 },
    #[display("round must be positive")]
    ZeroRound,
}
