// src/process/mod.rs
pub mod aggregate;
pub mod diagnostics;
pub mod grouper;
pub mod numeric;
pub mod rank;
pub mod table;

pub use aggregate::{aggregate_week, AggregateRow};
pub use diagnostics::{invalid_cells, InvalidCell};
pub use grouper::{day_groups, monthly_range, week_groups, ColumnRange, DayGroup, WeekGroup};
pub use numeric::{classify, format_number, parse_numeric, CellValue};
pub use rank::{sort_aggregates, sort_by_column};
pub use table::{parse_csv, Row, Table};
