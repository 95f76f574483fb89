//! Month labels used as row keys in every sheet
//!
//! Rows are addressed by the English month name in column A, so the active
//! budget period is always a calendar month.

use chrono::{Datelike, Month};

use crate::error::{BudgetError, BudgetResult};

/// All months in calendar order
pub fn all_months() -> [Month; 12] {
    [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ]
}

/// The month of the local clock
pub fn current_month() -> Month {
    let today = chrono::Local::now().date_naive();
    month_from_number(today.month())
}

/// Resolve a 1-based month number, clamped into 1..=12
pub fn month_from_number(number: u32) -> Month {
    let index = number.clamp(1, 12) as usize - 1;
    all_months()[index]
}

/// Parse a month from user text ("march", "Mar", "3")
pub fn parse_month(input: &str) -> BudgetResult<Month> {
    let input = input.trim();

    if let Ok(number) = input.parse::<u32>() {
        if (1..=12).contains(&number) {
            return Ok(month_from_number(number));
        }
        return Err(BudgetError::Validation(format!(
            "Month number must be between 1 and 12, got {}",
            number
        )));
    }

    input
        .parse::<Month>()
        .map_err(|_| BudgetError::Validation(format!("Unknown month: {}", input)))
}

/// Row label for a month, as stored in column A
pub fn month_label(month: Month) -> &'static str {
    month.name()
}
