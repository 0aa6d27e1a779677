use csv::ReaderBuilder;
use serde::Serialize;
use tracing::{debug, warn};

/// One sheet line: cell 0 is the item label, the rest are metrics as text.
pub type Row = Vec<String>;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Table {
    /// Column names from the first line of the export.
    pub headers: Vec<String>,
    /// Every following line, padded or cut to `headers.len()` cells.
    pub rows: Vec<Row>,
}

impl Table {
    pub fn header_count(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }
}

/// Split raw CSV text into a [`Table`].
///
/// - Records end at `\n` or `\r\n`, cells split on a bare `,`. Quoting is
///   off, so a label containing a comma shifts its row.
/// - The first record is the header row.
/// - Empty lines (including the trailing newline) are skipped.
/// - Rows are padded with `""` or truncated to the header width.
pub fn parse_csv(raw: &str) -> Table {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true) // ragged rows are normalised below
        .quoting(false)
        .from_reader(raw.as_bytes());

    let mut records = rdr
        .records()
        .enumerate()
        .filter_map(|(idx, result)| match result {
            Ok(record) => Some(record.iter().map(str::to_string).collect::<Row>()),
            Err(e) => {
                warn!(record = idx, error = %e, "skipping unreadable csv record");
                None
            }
        });

    let Some(headers) = records.next() else {
        return Table::default();
    };

    let width = headers.len();
    let mut ragged = 0usize;
    let rows: Vec<Row> = records
        .map(|mut row| {
            if row.len() != width {
                ragged += 1;
                row.resize(width, String::new());
            }
            row
        })
        .collect();

    debug!(
        columns = width,
        rows = rows.len(),
        ragged,
        "parsed csv export"
    );
    Table { headers, rows }
}
