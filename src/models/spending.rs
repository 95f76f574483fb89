//! Per-category spendings of a bucket and the computed totals

use super::money::Money;

/// Amount spent in one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySpend {
    pub category: String,
    pub amount: Money,
}

/// Result of one collection pass over a bucket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spendings {
    pub entries: Vec<CategorySpend>,
    /// Sum of all entries
    pub total: Money,
    /// Ceiling minus total; negative on overspend
    pub surplus: Money,
}

impl Spendings {
    /// Compute `TOTAL` and `SURPLUS` for a bucket ceiling
    pub fn compute(ceiling: Money, entries: Vec<CategorySpend>) -> Self {
        let total: Money = entries.iter().map(|e| e.amount).sum();
        Self {
            entries,
            total,
            surplus: ceiling - total,
        }
    }

    /// Amount entered for a category
    pub fn get(&self, category: &str) -> Option<Money> {
        self.entries
            .iter()
            .find(|e| e.category == category)
            .map(|e| e.amount)
    }

    pub fn is_overspent(&self) -> bool {
        self.surplus.is_negative()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spend(category: &str, units: i64) -> CategorySpend {
        CategorySpend {
            category: category.to_string(),
            amount: Money::from_units(units),
        }
    }

    #[test]
    fn test_total_and_surplus() {
        let spendings = Spendings::compute(
            Money::from_units(1500),
            vec![spend("Housing", 800), spend("Food", 500)],
        );
        assert_eq!(spendings.total, Money::from_units(1300));
        assert_eq!(spendings.surplus, Money::from_units(200));
        assert_eq!(spendings.get("Food"), Some(Money::from_units(500)));
        assert!(!spendings.is_overspent());
    }

    #[test]
    fn test_no_categories() {
        let spendings = Spendings::compute(Money::from_units(900), Vec::new());
        assert!(spendings.total.is_zero());
        assert_eq!(spendings.surplus, Money::from_units(900));
    }

    #[test]
    fn test_overspend() {
        let spendings = Spendings::compute(Money::from_units(100), vec![spend("Travel", 150)]);
        assert_eq!(spendings.surplus, Money::from_units(-50));
        assert!(spendings.is_overspent());
    }
}
