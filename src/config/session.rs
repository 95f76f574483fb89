//! Session configuration
//!
//! Everything a budget session needs besides the store and the prompter,
//! resolved once at startup and passed in explicitly.

use chrono::Month;

use super::settings::{default_needs, default_wants, Settings};
use crate::error::{BudgetError, BudgetResult};
use crate::models::period::{current_month, month_label, parse_month};
use crate::models::{BucketKind, CategorySet, Money, Plan};

#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Month whose row is written
    pub month: Month,
    pub currency_symbol: String,
    pub default_needs: CategorySet,
    pub default_wants: CategorySet,
}

impl SessionConfig {
    /// Configuration with built-in defaults for a given month
    pub fn new(month: Month) -> Self {
        Self {
            month,
            currency_symbol: "$".to_string(),
            default_needs: CategorySet::from_header_labels(default_needs()),
            default_wants: CategorySet::from_header_labels(default_wants()),
        }
    }

    /// Resolve settings into a session configuration
    pub fn from_settings(settings: &Settings) -> BudgetResult<Self> {
        let month = match settings.month_override.as_deref() {
            Some(label) => parse_month(label)?,
            None => current_month(),
        };

        Ok(Self {
            month,
            currency_symbol: settings.currency_symbol.clone(),
            default_needs: default_set("default_needs", &settings.default_needs)?,
            default_wants: default_set("default_wants", &settings.default_wants)?,
        })
    }

    /// Row label of the active month
    pub fn month_label(&self) -> &'static str {
        month_label(self.month)
    }

    pub fn default_categories(&self, kind: BucketKind) -> &CategorySet {
        match kind {
            BucketKind::Needs => &self.default_needs,
            BucketKind::Wants => &self.default_wants,
        }
    }

    /// Plans offered in the plan menu
    pub fn plans(&self) -> &'static [Plan] {
        Plan::all()
    }

    pub fn format_money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }
}

fn default_set(field: &str, names: &[String]) -> BudgetResult<CategorySet> {
    CategorySet::new(names.iter().cloned())
        .map_err(|e| BudgetError::Config(format!("Invalid {} in settings: {}", field, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_default_settings() {
        let config = SessionConfig::from_settings(&Settings::default()).unwrap();
        assert_eq!(config.default_needs.len(), 5);
        assert_eq!(config.default_categories(BucketKind::Wants).len(), 3);
    }

    #[test]
    fn test_month_override() {
        let settings = Settings {
            month_override: Some("mar".to_string()),
            ..Settings::default()
        };
        let config = SessionConfig::from_settings(&settings).unwrap();
        assert_eq!(config.month_label(), "March");
    }

    #[test]
    fn test_invalid_default_category_is_rejected() {
        let settings = Settings {
            default_needs: vec!["Car Loan".to_string()],
            ..Settings::default()
        };
        let err = SessionConfig::from_settings(&settings).unwrap_err();
        assert!(err.to_string().contains("default_needs"));
    }

    #[test]
    fn test_format_money_uses_symbol() {
        let mut config = SessionConfig::new(Month::May);
        config.currency_symbol = "€".to_string();
        assert_eq!(config.format_money(Money::from_cents(-250)), "-€2.50");
    }
}
