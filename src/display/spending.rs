//! Spendings display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::SessionConfig;
use crate::models::{BucketKind, Money, Spendings, SURPLUS_LABEL, TOTAL_LABEL};

#[derive(Tabled)]
struct SpendingRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format one bucket's entered values followed by `TOTAL` and `SURPLUS`
pub fn format_spendings(
    kind: BucketKind,
    ceiling: Money,
    spendings: &Spendings,
    config: &SessionConfig,
) -> String {
    let mut rows: Vec<SpendingRow> = spendings
        .entries
        .iter()
        .map(|e| SpendingRow {
            category: e.category.clone(),
            amount: config.format_money(e.amount),
        })
        .collect();
    rows.push(SpendingRow {
        category: TOTAL_LABEL.to_string(),
        amount: config.format_money(spendings.total),
    });
    rows.push(SpendingRow {
        category: SURPLUS_LABEL.to_string(),
        amount: config.format_money(spendings.surplus),
    });

    let mut table = Table::new(rows);
    table.with(Style::modern());

    let mut output = format!(
        "{} for {} (ceiling {})\n{}",
        kind.title(),
        config.month_label(),
        config.format_money(ceiling),
        table
    );
    if spendings.is_overspent() {
        output.push_str(&format!(
            "\nOverspent by {}",
            config.format_money(spendings.surplus.abs())
        ));
    }
    output
}
