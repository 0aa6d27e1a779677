use serde::Serialize;

use crate::process::numeric::{classify, CellValue};
use crate::process::table::Table;

/// A metric cell that was not a clean number and got coerced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvalidCell {
    pub row: usize,
    pub column: usize,
    pub item: String,
    pub header: String,
    pub raw: String,
    pub coerced: f64,
}

/// Every non-blank metric cell (column 1 onward) that does not parse as a
/// finite number. Totals are unaffected; this only reports what the silent
/// zero policy hid.
pub fn invalid_cells(table: &Table) -> Vec<InvalidCell> {
    let mut out = Vec::new();
    for (r, row) in table.rows.iter().enumerate() {
        for (c, raw) in row.iter().enumerate().skip(1) {
            if let CellValue::Invalid { coerced } = classify(raw) {
                out.push(InvalidCell {
                    row: r,
                    column: c,
                    item: row[0].clone(),
                    header: table.headers.get(c).cloned().unwrap_or_default(),
                    raw: raw.clone(),
                    coerced,
                });
            }
        }
    }
    out
}
