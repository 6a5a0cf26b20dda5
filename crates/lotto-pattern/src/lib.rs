//! Pattern library for six-number lottery combinations.
//!
//! A [`Pattern`] is a pure boolean predicate over the six main numbers of a draw
//! (the bonus never takes part). Seventeen patterns cover four aspects of a
//! combination:
//!
//! - **Arithmetic shape**: total sum, AC value, last-digit sum, same last digit,
//!   consecutive runs
//! - **Balance**: odd/even, high/low, start/end spread, section concentration
//! - **Number classes**: primes, composites, perfect squares, multiples of 3 and 5,
//!   repeater digits
//! - **Ticket layout**: corner membership, triangle and frog exclusion
//!
//! Every predicate is independent of the order in which the numbers were drawn.
//!
//! # Modules
//!
//! - [`rules`] - the individual predicates and the measurements behind them
//! - [`tables`] - fixed number sets (primes, sections, corners, triangles, frogs)
//! - [`classify`] - evaluation of all patterns at once
//!
//! # Example
//!
//! ```
//! use lotto_engine::DrawNumbers;
//! use lotto_pattern::{Pattern, PatternConfig, classify};
//!
//! let numbers = DrawNumbers::new([7, 11, 16, 21, 27, 33]).unwrap();
//! let result = classify::evaluate_all(&numbers, &PatternConfig::default());
//! assert!(result[Pattern::TotalSum]);
//! assert!(!result[Pattern::StartEndSpread]);
//! ```

pub use self::{config::*, pattern::*, pattern_map::*};

pub mod classify;
mod config;
mod pattern;
mod pattern_map;
pub mod rules;
pub mod tables;
