//! Statistical utilities for pattern analysis.
//!
//! This crate provides the small set of statistics the evaluator and the trend
//! analyzer need:
//!
//! - **Descriptive statistics**: mean, median, variance and standard deviation
//! - **Binary correlation**: 2×2 contingency tables and the phi coefficient
//!
//! # Modules
//!
//! - [`descriptive`]: Descriptive statistics for summarizing datasets
//! - [`correlation`]: Contingency tables for pairs of boolean observations
//!
//! # Examples
//!
//! ## Computing descriptive statistics
//!
//! ```
//! use lotto_stats::descriptive::DescriptiveStats;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let stats = DescriptiveStats::new(values).unwrap();
//! assert_eq!(stats.mean, 3.0);
//! ```
//!
//! ## Computing a phi coefficient
//!
//! ```
//! use lotto_stats::correlation::ContingencyTable;
//!
//! let pairs = [(true, true), (false, false), (true, true), (false, false)];
//! let table = ContingencyTable::from_pairs(pairs);
//! assert_eq!(table.phi(), 1.0);
//! ```

pub mod correlation;
pub mod descriptive;
