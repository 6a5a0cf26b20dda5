//! Correlation between two binary variables.
//!
//! A [`ContingencyTable`] counts how often two boolean observations co-occur. The
//! [`phi`](ContingencyTable::phi) coefficient is the Pearson correlation specialized
//! to that table:
//!
//! ```text
//! p1  = P(a)          = (both + a_only) / n
//! p2  = P(b)          = (both + b_only) / n
//! p12 = P(a and b)    = both / n
//! phi = (p12 - p1 * p2) / sqrt(p1 (1 - p1) p2 (1 - p2))
//! ```
//!
//! The coefficient is defined as `0.0` when the table is empty or when either
//! variable is constant (zero denominator).

/// 2×2 table of co-occurrence counts for two boolean variables `a` and `b`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ContingencyTable {
    /// Observations where both `a` and `b` hold.
    pub both: usize,
    /// Observations where only `a` holds.
    pub a_only: usize,
    /// Observations where only `b` holds.
    pub b_only: usize,
    /// Observations where neither holds.
    pub neither: usize,
}

impl ContingencyTable {
    #[must_use]
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (bool, bool)>,
    {
        let mut table = Self::default();
        for (a, b) in pairs {
            table.push(a, b);
        }
        table
    }

    pub fn push(&mut self, a: bool, b: bool) {
        match (a, b) {
            (true, true) => self.both += 1,
            (true, false) => self.a_only += 1,
            (false, true) => self.b_only += 1,
            (false, false) => self.neither += 1,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.both + self.a_only + self.b_only + self.neither
    }

    /// Swaps the roles of `a` and `b`.
    #[must_use]
    pub fn transposed(&self) -> Self {
        Self {
            both: self.both,
            a_only: self.b_only,
            b_only: self.a_only,
            neither: self.neither,
        }
    }

    /// Phi coefficient in `[-1.0, 1.0]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lotto_stats::correlation::ContingencyTable;
    ///
    /// let opposite = ContingencyTable { both: 0, a_only: 3, b_only: 3, neither: 0 };
    /// assert_eq!(opposite.phi(), -1.0);
    ///
    /// let constant = ContingencyTable { both: 4, a_only: 0, b_only: 0, neither: 0 };
    /// assert_eq!(constant.phi(), 0.0);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn phi(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        let n = total as f64;
        let p1 = (self.both + self.a_only) as f64 / n;
        let p2 = (self.both + self.b_only) as f64 / n;
        let p12 = self.both as f64 / n;

        let denominator = (p1 * (1.0 - p1) * p2 * (1.0 - p2)).sqrt();
        if denominator == 0.0 {
            0.0
        } else {
            (p12 - p1 * p2) / denominator
        }
    }
}
