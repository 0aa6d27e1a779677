use anyhow::{bail, Result};
use serde::Serialize;

use crate::config::Layout;

/// Half-open column span `[start, start + len)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColumnRange {
    pub start: usize,
    pub len: usize,
}

impl ColumnRange {
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// Last column of the span; the net metric for a day or monthly block.
    pub fn last(&self) -> usize {
        self.end() - 1
    }

    pub fn columns(&self) -> std::ops::Range<usize> {
        self.start..self.end()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayGroup {
    pub label: String,
    pub range: ColumnRange,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekGroup {
    pub label: String,
    /// First column of the first day in the week.
    pub start: usize,
    /// One past the last column of the last day in the week.
    pub end: usize,
    /// Day-groups actually covered; below `days_per_week` for a trailing
    /// partial week.
    pub days: usize,
}

/// Day blocks between the label column and the monthly block.
///
/// Only full blocks are returned; leftover columns that do not complete a
/// block are ignored.
pub fn day_groups(header_count: usize, layout: &Layout) -> Vec<DayGroup> {
    let width = layout.metrics_per_day;
    if width == 0 {
        return Vec::new();
    }
    let limit = header_count.saturating_sub(layout.monthly_column_count);
    (1..)
        .step_by(width)
        .take_while(|start| start + width <= limit)
        .enumerate()
        .map(|(i, start)| DayGroup {
            label: format!("Day {}", i + 1),
            range: ColumnRange { start, len: width },
        })
        .collect()
}

/// Week spans over `day_count` consecutive day-groups starting at column 1.
pub fn week_groups(day_count: usize, layout: &Layout) -> Vec<WeekGroup> {
    if layout.days_per_week == 0 {
        return Vec::new();
    }
    (0..day_count)
        .step_by(layout.days_per_week)
        .enumerate()
        .map(|(i, first_day)| {
            let days = (day_count - first_day).min(layout.days_per_week);
            let start = 1 + i * layout.week_width();
            WeekGroup {
                label: format!("Week {}", i + 1),
                start,
                end: start + days * layout.metrics_per_day,
                days,
            }
        })
        .collect()
}

/// The trailing monthly block.
///
/// Errors when the header row is too short to hold a label column plus the
/// block, which means the sheet does not follow the configured layout.
pub fn monthly_range(header_count: usize, layout: &Layout) -> Result<ColumnRange> {
    if header_count < layout.min_header_count() {
        bail!(
            "sheet has {} columns; at least {} are needed for the label and monthly block",
            header_count,
            layout.min_header_count()
        );
    }
    Ok(ColumnRange {
        start: header_count - layout.monthly_column_count,
        len: layout.monthly_column_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Layout {
        Layout::default()
    }

    #[test]
    fn day_groups_cover_every_full_block() {
        for d in 0..12 {
            let groups = day_groups(1 + 4 * d + 4, &layout());
            assert_eq!(groups.len(), d);
            for (k, g) in groups.iter().enumerate() {
                assert_eq!(g.range.start, 1 + 4 * k);
                assert_eq!(g.range.len, 4);
                assert_eq!(g.label, format!("Day {}", k + 1));
            }
        }
    }

    #[test]
    fn remainder_columns_are_ignored() {
        // 1 label + 2 days + 2 stray columns + 4 monthly
        let groups = day_groups(1 + 8 + 2 + 4, &layout());
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[1].range.end(), 9);
    }

    #[test]
    fn short_headers_have_no_days() {
        assert!(day_groups(0, &layout()).is_empty());
        assert!(day_groups(5, &layout()).is_empty());
        assert!(day_groups(8, &layout()).is_empty());
    }

    #[test]
    fn weeks_step_by_seven_days() {
        let weeks = week_groups(14, &layout());
        assert_eq!(weeks.len(), 2);
        assert_eq!(weeks[0].label, "Week 1");
        assert_eq!((weeks[0].start, weeks[0].end), (1, 29));
        assert_eq!((weeks[1].start, weeks[1].end), (29, 57));
        assert!(weeks.iter().all(|w| w.days == 7));
    }

    #[test]
    fn partial_week_covers_only_present_days() {
        let weeks = week_groups(31, &layout());
        assert_eq!(weeks.len(), 5);
        let last = weeks.last().unwrap();
        assert_eq!(last.label, "Week 5");
        assert_eq!(last.days, 3);
        assert_eq!(last.start, 1 + 28 * 4);
        assert_eq!(last.end, 1 + 31 * 4);
    }

    #[test]
    fn no_days_means_no_weeks() {
        assert!(week_groups(0, &layout()).is_empty());
    }

    #[test]
    fn zero_sized_layout_yields_no_groups() {
        let no_metrics = Layout {
            metrics_per_day: 0,
            ..Layout::default()
        };
        assert!(day_groups(13, &no_metrics).is_empty());
        let no_days = Layout {
            days_per_week: 0,
            ..Layout::default()
        };
        assert!(week_groups(3, &no_days).is_empty());
    }

    #[test]
    fn monthly_is_last_block() {
        let r = monthly_range(13, &layout()).unwrap();
        assert_eq!(r, ColumnRange { start: 9, len: 4 });
        assert_eq!(r.last(), 12);
        let r = monthly_range(5, &layout()).unwrap();
        assert_eq!(r.start, 1);
    }

    #[test]
    fn monthly_needs_five_columns() {
        assert!(monthly_range(4, &layout()).is_err());
        assert!(monthly_range(0, &layout()).is_err());
    }
}
