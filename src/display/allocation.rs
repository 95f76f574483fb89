//! Allocation display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::SessionConfig;
use crate::models::{Allocation, BucketKind};

#[derive(Tabled)]
struct AllocationRow {
    #[tabled(rename = "Bucket")]
    bucket: &'static str,
    #[tabled(rename = "Share")]
    share: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format the split of income under the chosen plan
pub fn format_allocation(allocation: &Allocation, config: &SessionConfig) -> String {
    let shares = allocation.plan.shares();
    let rows = vec![
        AllocationRow {
            bucket: BucketKind::Needs.title(),
            share: format!("{}%", shares.needs),
            amount: config.format_money(allocation.needs),
        },
        AllocationRow {
            bucket: BucketKind::Wants.title(),
            share: format!("{}%", shares.wants),
            amount: config.format_money(allocation.wants),
        },
        AllocationRow {
            bucket: "Savings",
            share: format!("{}%", shares.savings),
            amount: config.format_money(allocation.savings),
        },
    ];

    let mut table = Table::new(rows);
    table.with(Style::modern());

    format!(
        "Budget for {} ({} plan), income {}\n{}",
        config.month_label(),
        allocation.plan,
        config.format_money(allocation.income),
        table
    )
}
