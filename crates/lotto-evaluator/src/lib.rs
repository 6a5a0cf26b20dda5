//! Reliability analysis, weighted scoring and score-based filtering of lottery
//! combinations.
//!
//! This crate implements a three-stage evaluation pipeline on top of the pattern
//! library:
//!
//! 1. **Reliability** ([`reliability`]) - How often each pattern held over the
//!    historical draws. The satisfaction rate becomes the pattern's base weight.
//!
//! 2. **Scoring** ([`weights`], [`scoring`]) - A weight table built from the history
//!    (static, caller-supplied or recency-adjusted) turns a candidate's satisfied
//!    patterns into a 0-100 score and a letter grade.
//!
//! 3. **Filtering** ([`filter`]) - Batch scoring of candidate combinations and
//!    selection by score, grade and pattern constraints.
//!
//! # Architecture
//!
//! ```text
//! Filtering (select candidates)
//!     ↓ uses
//! Scoring (score one candidate)
//!     ↓ uses
//! Reliability (weight per pattern)
//! ```
//!
//! # Design Principles
//!
//! ## Data-Driven Weights
//!
//! Weights come from the same historical draws the candidates are compared with, so
//! patterns that rarely held in practice contribute little to a score. A pattern
//! that never held has weight 0 and cannot move any score.
//!
//! ## Linear Scoring Model
//!
//! A score is a normalized weighted sum of boolean pattern results. It is simple
//! and explainable (every score comes with its per-pattern breakdown), but it
//! cannot express interactions between patterns.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use lotto_engine::DrawRecord;
//! use lotto_evaluator::{
//!     filter::{FilterConfig, ScoreFilter},
//!     scoring::Scorer,
//!     weights::WeightingMode,
//! };
//! use lotto_pattern::PatternConfig;
//!
//! let date = NaiveDate::from_ymd_opt(2024, 1, 6).unwrap();
//! let history = [DrawRecord::from_slice(date, 1, &[7, 11, 16, 21, 27, 33], 45).unwrap()];
//! let candidates = [DrawRecord::from_slice(date, 2, &[5, 12, 17, 29, 34, 44], 35).unwrap()];
//!
//! let scorer = Scorer::from_history(&history, &WeightingMode::Static, PatternConfig::default());
//! let result = ScoreFilter::new(scorer).filter_by_score(&candidates, &FilterConfig::default());
//! assert_eq!(result.total_evaluated, 1);
//! ```

pub mod filter;
pub mod reliability;
pub mod scoring;
pub mod weights;
