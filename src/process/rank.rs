use std::cmp::Ordering;

use crate::process::aggregate::AggregateRow;
use crate::process::numeric::parse_numeric;
use crate::process::table::Row;

/// Ascending by `key`; ties keep their input order.
fn sorted_by_value<T: Clone>(items: &[T], key: impl Fn(&T) -> f64) -> Vec<T> {
    let mut out = items.to_vec();
    out.sort_by(|a, b| key(a).partial_cmp(&key(b)).unwrap_or(Ordering::Equal));
    out
}

/// Copy of `rows` sorted ascending by the numeric value at `column`.
/// Missing or non-numeric cells sort as zero.
pub fn sort_by_column(rows: &[Row], column: usize) -> Vec<Row> {
    sorted_by_value(rows, |r| {
        parse_numeric(r.get(column).map(String::as_str).unwrap_or(""))
    })
}

/// Copy of `rows` sorted ascending by the sum at metric `offset`.
pub fn sort_aggregates(rows: &[AggregateRow], offset: usize) -> Vec<AggregateRow> {
    sorted_by_value(rows, |r| r.sums.get(offset).copied().unwrap_or(0.0))
}
