//! Savings balance
//!
//! The balance is a single owned value. Each reconciliation updates it in
//! place, so buckets processed later in a session see the earlier result.

use super::money::Money;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SavingsBalance(Money);

impl SavingsBalance {
    pub fn new(amount: Money) -> Self {
        Self(amount)
    }

    pub fn amount(&self) -> Money {
        self.0
    }

    /// Absorb a negative surplus.
    ///
    /// Returns the new balance, or `None` without touching the balance when
    /// savings cannot cover the deficit.
    pub fn cover_deficit(&mut self, surplus: Money) -> Option<Money> {
        let cover = self.0 + surplus;
        if cover.is_negative() {
            return None;
        }
        self.0 = cover;
        Some(cover)
    }

    /// Add a positive surplus
    pub fn deposit(&mut self, amount: Money) -> Money {
        self.0 += amount;
        self.0
    }
}
