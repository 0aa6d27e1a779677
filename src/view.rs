// src/view.rs

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::process::{
    aggregate_week, day_groups, monthly_range, sort_aggregates, sort_by_column, week_groups,
    ColumnRange, Row, Table,
};

/// One renderable table: a tab of the daily or weekly section, or the
/// monthly summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct View {
    pub label: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Report {
    pub daily: Vec<View>,
    pub weekly: Vec<View>,
    pub monthly: Option<View>,
}

impl Report {
    pub fn is_empty(&self) -> bool {
        self.daily.is_empty() && self.weekly.is_empty() && self.monthly.is_none()
    }
}

/// Build every view for `table`. A table without headers yields an empty
/// report; an invalid config or a header row too short for the monthly
/// block is an error.
#[tracing::instrument(level = "info", skip_all, fields(columns = table.header_count(), rows = table.rows.len()))]
pub fn build_report(table: &Table, cfg: &AppConfig) -> Result<Report> {
    cfg.validate().context("invalid report config")?;
    if table.is_empty() {
        info!("empty sheet; nothing to report");
        return Ok(Report::default());
    }

    let monthly = monthly_view(table, cfg)?;
    let daily = daily_views(table, cfg);
    let weekly = weekly_views(table, cfg);
    info!(
        days = daily.len(),
        weeks = weekly.len(),
        "built report"
    );

    Ok(Report {
        daily,
        weekly,
        monthly: Some(monthly),
    })
}

pub fn daily_views(table: &Table, cfg: &AppConfig) -> Vec<View> {
    day_groups(table.header_count(), &cfg.layout)
        .into_iter()
        .map(|day| {
            debug!(label = %day.label, start = day.range.start, "daily view");
            View {
                headers: headers_for(cfg, &table.headers, day.range),
                rows: sorted_slice(&table.rows, day.range),
                label: day.label,
            }
        })
        .collect()
}

pub fn weekly_views(table: &Table, cfg: &AppConfig) -> Vec<View> {
    let layout = &cfg.layout;
    let day_count = day_groups(table.header_count(), layout).len();
    let net = layout.metrics_per_day - 1;

    let headers: Vec<String> = std::iter::once(cfg.item_header.clone())
        .chain(cfg.metric_names.iter().cloned())
        .collect();

    week_groups(day_count, layout)
        .into_iter()
        .map(|week| {
            debug!(label = %week.label, days = week.days, "weekly view");
            let totals = aggregate_week(&table.rows, week.start, week.end, layout);
            View {
                label: week.label,
                headers: headers.clone(),
                rows: sort_aggregates(&totals, net)
                    .iter()
                    .map(|r| r.cells())
                    .collect(),
            }
        })
        .collect()
}

pub fn monthly_view(table: &Table, cfg: &AppConfig) -> Result<View> {
    let range = monthly_range(table.header_count(), &cfg.layout)?;
    Ok(View {
        label: cfg.monthly_label.clone(),
        headers: headers_for(cfg, &table.headers, range),
        rows: sorted_slice(&table.rows, range),
    })
}

fn headers_for(cfg: &AppConfig, headers: &[String], range: ColumnRange) -> Vec<String> {
    std::iter::once(cfg.item_header.clone())
        .chain(headers[range.columns()].iter().cloned())
        .collect()
}

/// Rows sorted by the block's last column, cut to label + block cells.
/// Empty cells show as `"0"`.
fn sorted_slice(rows: &[Row], range: ColumnRange) -> Vec<Vec<String>> {
    sort_by_column(rows, range.last())
        .into_iter()
        .map(|row| {
            let label = row.first().cloned().unwrap_or_default();
            std::iter::once(label)
                .chain(range.columns().map(|c| match row.get(c) {
                    Some(cell) if !cell.is_empty() => cell.clone(),
                    _ => "0".to_string(),
                }))
                .collect()
        })
        .collect()
}
