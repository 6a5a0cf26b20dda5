//! Read-only queries over a collection of draw records.
//!
//! Every function takes the records as a slice and returns fresh values; the input
//! order is never relied upon; functions that need an order sort by round.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::DrawRecord;

/// Returns the records sorted by round, most recent first.
#[must_use]
pub fn sorted_by_round_desc(data: &[DrawRecord]) -> Vec<DrawRecord> {
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| b.round().cmp(&a.round()));
    sorted
}

/// Returns the `count` most recent records (by round), most recent first.
#[must_use]
pub fn recent_rounds(data: &[DrawRecord], count: usize) -> Vec<DrawRecord> {
    let mut sorted = sorted_by_round_desc(data);
    sorted.truncate(count);
    sorted
}

/// Returns the records whose round lies in `start..=end`, in ascending round order.
#[must_use]
pub fn round_range(data: &[DrawRecord], start: u32, end: u32) -> Vec<DrawRecord> {
    let mut records = data
        .iter()
        .filter(|r| (start..=end).contains(&r.round()))
        .copied()
        .collect::<Vec<_>>();
    records.sort_by_key(DrawRecord::round);
    records
}

#[must_use]
pub fn find_by_round(data: &[DrawRecord], round: u32) -> Option<&DrawRecord> {
    data.iter().find(|r| r.round() == round)
}

/// Returns the records containing `number` either as a main number or as the bonus.
#[must_use]
pub fn rounds_with_number(data: &[DrawRecord], number: u8) -> Vec<DrawRecord> {
    data.iter()
        .filter(|r| r.numbers().contains(number) || r.bonus() == number)
        .copied()
        .collect()
}

/// Counts how often each main number was drawn.
#[must_use]
pub fn number_frequency(data: &[DrawRecord]) -> BTreeMap<u8, usize> {
    let mut frequency = BTreeMap::new();
    for record in data {
        for number in record.numbers().iter() {
            *frequency.entry(number).or_insert(0) += 1;
        }
    }
    frequency
}

#[must_use]
pub fn bonus_frequency(data: &[DrawRecord]) -> BTreeMap<u8, usize> {
    let mut frequency = BTreeMap::new();
    for record in data {
        *frequency.entry(record.bonus()).or_insert(0) += 1;
    }
    frequency
}

/// Most frequently drawn main numbers, ties broken by the smaller number.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use lotto_engine::{DrawRecord, dataset};
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 6).unwrap();
/// let data = [
///     DrawRecord::from_slice(date, 1, &[1, 2, 3, 4, 5, 6], 7).unwrap(),
///     DrawRecord::from_slice(date, 2, &[1, 2, 3, 10, 11, 12], 7).unwrap(),
///     DrawRecord::from_slice(date, 3, &[1, 20, 21, 22, 23, 24], 7).unwrap(),
/// ];
/// assert_eq!(dataset::top_numbers(&data, 3), vec![(1, 3), (2, 2), (3, 2)]);
/// ```
#[must_use]
pub fn top_numbers(data: &[DrawRecord], top_n: usize) -> Vec<(u8, usize)> {
    let mut counts = number_frequency(data).into_iter().collect::<Vec<_>>();
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(top_n);
    counts
}

/// Least frequently drawn main numbers (among numbers drawn at least once).
#[must_use]
pub fn least_frequent_numbers(data: &[DrawRecord], top_n: usize) -> Vec<(u8, usize)> {
    let mut counts = number_frequency(data).into_iter().collect::<Vec<_>>();
    counts.sort_by_key(|&(_, count)| count);
    counts.truncate(top_n);
    counts
}

#[must_use]
pub fn by_year(data: &[DrawRecord], year: i32) -> Vec<DrawRecord> {
    data.iter().filter(|r| r.year() == year).copied().collect()
}

#[must_use]
pub fn by_month(data: &[DrawRecord], month: u32) -> Vec<DrawRecord> {
    data.iter().filter(|r| r.month() == month).copied().collect()
}

/// Records drawn in the given `yyyymm` month (e.g. `202508`).
#[must_use]
pub fn by_year_month(data: &[DrawRecord], year_month: i32) -> Vec<DrawRecord> {
    data.iter()
        .filter(|r| r.year_month() == year_month)
        .copied()
        .collect()
}

/// Groups the records of one calendar month by year, most recent year first.
#[must_use]
pub fn by_month_grouped_by_year(data: &[DrawRecord], month: u32) -> Vec<(i32, Vec<DrawRecord>)> {
    let mut groups = BTreeMap::<i32, Vec<DrawRecord>>::new();
    for record in data.iter().filter(|r| r.month() == month) {
        groups.entry(record.year()).or_default().push(*record);
    }
    groups.into_iter().rev().collect()
}

/// Number frequency restricted to one calendar month of one year.
#[must_use]
pub fn monthly_number_frequency(data: &[DrawRecord], year: i32, month: u32) -> BTreeMap<u8, usize> {
    let monthly = data
        .iter()
        .filter(|r| r.year() == year && r.month() == month)
        .copied()
        .collect::<Vec<_>>();
    number_frequency(&monthly)
}

/// Number of draws per `yyyy-mm` key.
#[must_use]
pub fn monthly_round_count(data: &[DrawRecord]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for record in data {
        *counts.entry(record.year_month_key()).or_insert(0) += 1;
    }
    counts
}

/// Records drawn between `start` and `end`, both inclusive.
#[must_use]
pub fn between_dates(data: &[DrawRecord], start: NaiveDate, end: NaiveDate) -> Vec<DrawRecord> {
    data.iter()
        .filter(|r| start <= r.date() && r.date() <= end)
        .copied()
        .collect()
}

/// Frequencies of the numbers drawn in the `count` most recent rounds, minus the
/// numbers that were over-drawn in any of the six trailing windows ending at
/// `round`, `round - 1`, ..., `round - 5`.
///
/// A number is over-drawn in a window `[r - count, r]` when it was drawn at least
/// `cutoff` times in it.
#[must_use]
pub fn core_numbers(
    data: &[DrawRecord],
    round: u32,
    count: usize,
    cutoff: usize,
) -> BTreeMap<u8, usize> {
    let recent = recent_rounds(data, count);
    let mut frequency = number_frequency(&recent);
    let span = u32::try_from(count).unwrap_or(u32::MAX);

    for offset in 0..=5 {
        let Some(current) = round.checked_sub(offset) else {
            break;
        };
        let window = round_range(data, current.saturating_sub(span), current);
        for (number, drawn) in number_frequency(&window) {
            if drawn >= cutoff {
                frequency.remove(&number);
            }
        }
    }

    frequency
}
