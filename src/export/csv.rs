//! CSV export of a single sheet

use std::io::Write;

use crate::error::BudgetResult;
use crate::storage::Sheet;

/// Write every row of `sheet` as CSV, padding short rows to the widest one.
///
/// Amounts are written as plain decimals (`1500.00`) and empty cells as
/// empty fields.
pub fn export_sheet_csv<W: Write>(sheet: &Sheet, writer: W) -> BudgetResult<()> {
    let width = sheet.width();
    let mut csv_writer = csv::Writer::from_writer(writer);

    for row in &sheet.rows {
        let mut record: Vec<String> = row.iter().map(|cell| cell.to_string()).collect();
        record.resize(width, String::new());
        csv_writer.write_record(&record)?;
    }

    csv_writer.flush()?;
    Ok(())
}
