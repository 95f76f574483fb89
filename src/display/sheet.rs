//! Raw sheet display

use tabled::builder::Builder;
use tabled::settings::Style;

use crate::storage::Sheet;

/// Render every row of a sheet; short rows are padded to the widest one
pub fn format_sheet(sheet: &Sheet) -> String {
    let width = sheet.width();
    if width == 0 {
        return format!("Sheet '{}' is empty.", sheet.name);
    }

    let mut builder = Builder::default();
    for row in &sheet.rows {
        let mut record: Vec<String> = row.iter().map(|cell| cell.to_string()).collect();
        record.resize(width, String::new());
        builder.push_record(record);
    }

    let mut table = builder.build();
    table.with(Style::modern());
    table.to_string()
}
