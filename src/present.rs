// src/present.rs
//! Tab selection and plain-text rendering of a [`Report`].

use std::fmt::Write;

use crate::view::{Report, View};

/// Which daily and weekly tab is showing. Starts on the first tab of each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabState {
    daily: Vec<String>,
    weekly: Vec<String>,
    active_daily: Option<usize>,
    active_weekly: Option<usize>,
}

impl TabState {
    pub fn new(report: &Report) -> Self {
        let daily: Vec<String> = report.daily.iter().map(|v| v.label.clone()).collect();
        let weekly: Vec<String> = report.weekly.iter().map(|v| v.label.clone()).collect();
        Self {
            active_daily: (!daily.is_empty()).then_some(0),
            active_weekly: (!weekly.is_empty()).then_some(0),
            daily,
            weekly,
        }
    }

    pub fn active_daily(&self) -> Option<&str> {
        self.active_daily.map(|i| self.daily[i].as_str())
    }

    pub fn active_weekly(&self) -> Option<&str> {
        self.active_weekly.map(|i| self.weekly[i].as_str())
    }

    /// Switch the daily tab. Unknown labels leave the state alone.
    /// Returns whether the active tab changed.
    pub fn select_daily(&mut self, label: &str) -> bool {
        select(&self.daily, &mut self.active_daily, label)
    }

    pub fn select_weekly(&mut self, label: &str) -> bool {
        select(&self.weekly, &mut self.active_weekly, label)
    }
}

fn select(labels: &[String], active: &mut Option<usize>, label: &str) -> bool {
    match labels.iter().position(|l| l == label) {
        Some(i) if *active != Some(i) => {
            *active = Some(i);
            true
        }
        _ => false,
    }
}

/// Render the active daily tab, the active weekly tab and the monthly
/// summary, each with its tab strip.
pub fn render_text(report: &Report, tabs: &TabState) -> String {
    let mut out = String::new();

    out.push_str("== Daily Summary ==\n");
    section(&mut out, &report.daily, tabs.active_daily());

    out.push_str("\n== Weekly Summary ==\n");
    section(&mut out, &report.weekly, tabs.active_weekly());

    out.push_str("\n== Monthly Summary ==\n");
    match &report.monthly {
        Some(v) => table(&mut out, v),
        None => out.push_str("(no data)\n"),
    }
    out
}

fn section(out: &mut String, views: &[View], active: Option<&str>) {
    let Some(active) = active else {
        out.push_str("(no data)\n");
        return;
    };
    let strip: Vec<String> = views
        .iter()
        .map(|v| {
            if v.label == active {
                format!("[{}]", v.label)
            } else {
                format!(" {} ", v.label)
            }
        })
        .collect();
    out.push_str(&strip.join(" "));
    out.push('\n');
    if let Some(v) = views.iter().find(|v| v.label == active) {
        table(out, v);
    }
}

/// Left-aligned columns padded to the widest cell, counted in chars.
fn table(out: &mut String, view: &View) {
    let cols = view.headers.len();
    let mut widths: Vec<usize> = view.headers.iter().map(|h| h.chars().count()).collect();
    for row in &view.rows {
        for (i, cell) in row.iter().enumerate().take(cols) {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    write_row(out, &widths, &view.headers);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let _ = writeln!(out, "|-{}-|", rule.join("-|-"));
    for row in &view.rows {
        write_row(out, &widths, row);
    }
}

fn write_row(out: &mut String, widths: &[usize], cells: &[String]) {
    let parts: Vec<String> = widths
        .iter()
        .enumerate()
        .map(|(i, w)| {
            let cell = cells.get(i).map(String::as_str).unwrap_or("");
            let pad = w.saturating_sub(cell.chars().count());
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect();
    let _ = writeln!(out, "| {} |", parts.join(" | "));
}
