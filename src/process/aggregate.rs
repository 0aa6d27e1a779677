use serde::Serialize;

use crate::config::Layout;
use crate::process::numeric::{format_number, parse_numeric};
use crate::process::table::Row;

/// Per-item totals for one week, one sum per metric offset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateRow {
    pub label: String,
    pub sums: Vec<f64>,
}

impl AggregateRow {
    /// Label followed by the formatted sums.
    pub fn cells(&self) -> Vec<String> {
        std::iter::once(self.label.clone())
            .chain(self.sums.iter().map(|v| format_number(*v)))
            .collect()
    }
}

/// Sum every column in `[start, end)` into its metric offset
/// (`(col - start) % metrics_per_day`), once per input row, in input order.
///
/// Cells that are missing, empty or not numeric add zero.
pub fn aggregate_week(rows: &[Row], start: usize, end: usize, layout: &Layout) -> Vec<AggregateRow> {
    let width = layout.metrics_per_day;
    rows.iter()
        .map(|row| {
            let mut sums = vec![0.0; width];
            if width > 0 {
                for col in start..end {
                    let cell = row.get(col).map(String::as_str).unwrap_or("");
                    sums[(col - start) % width] += parse_numeric(cell);
                }
            }
            AggregateRow {
                label: row.first().cloned().unwrap_or_default(),
                sums,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Row {
        cells.iter().map(|s| s.to_string()).collect()
    }

    /// Label plus seven days of `(p, l, d, n)` built from `f(day, offset)`.
    fn week_row(label: &str, f: impl Fn(usize, usize) -> String) -> Row {
        let mut r = vec![label.to_string()];
        for day in 0..7 {
            for off in 0..4 {
                r.push(f(day, off));
            }
        }
        r
    }

    #[test]
    fn full_week_is_elementwise_sum() {
        let rows = vec![
            week_row("A", |d, o| ((d + 1) * (o + 1)).to_string()),
            week_row("B", |_, o| o.to_string()),
        ];
        let out = aggregate_week(&rows, 1, 29, &Layout::default());
        assert_eq!(out.len(), 2);
        // sum over days of (d+1)*(o+1) = 28*(o+1)
        assert_eq!(out[0].label, "A");
        assert_eq!(out[0].sums, vec![28.0, 56.0, 84.0, 112.0]);
        assert_eq!(out[1].sums, vec![0.0, 7.0, 14.0, 21.0]);
    }

    #[test]
    fn unparsable_cell_contributes_zero() {
        let mut r = week_row("A", |_, _| "1".to_string());
        // day 3, offset 2
        r[1 + 3 * 4 + 2] = "oops".to_string();
        let out = aggregate_week(&[r], 1, 29, &Layout::default());
        assert_eq!(out[0].sums, vec![7.0, 7.0, 6.0, 7.0]);
    }

    #[test]
    fn short_rows_count_missing_cells_as_zero() {
        let r = row(&["A", "1", "2", "3", "4", "5"]);
        let out = aggregate_week(&[r], 1, 29, &Layout::default());
        assert_eq!(out[0].sums, vec![6.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn order_follows_input() {
        let rows = vec![row(&["Z", "9", "9", "9", "9"]), row(&["A", "1", "1", "1", "1"])];
        let out = aggregate_week(&rows, 1, 5, &Layout::default());
        let labels: Vec<_> = out.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["Z", "A"]);
    }

    #[test]
    fn zero_metrics_per_day_sums_nothing() {
        let layout = Layout {
            metrics_per_day: 0,
            ..Layout::default()
        };
        let out = aggregate_week(&[row(&["A", "1", "2"])], 1, 3, &layout);
        assert_eq!(out[0].label, "A");
        assert!(out[0].sums.is_empty());
    }

    #[test]
    fn cells_format_sums() {
        let r = AggregateRow {
            label: "A".into(),
            sums: vec![3.0, 0.5, 0.0, 12.0],
        };
        assert_eq!(r.cells(), vec!["A", "3", "0.5", "0", "12"]);
    }
}
