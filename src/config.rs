// src/config.rs

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::{env, fs, path::Path};
use tracing::{debug, info};
use url::Url;

/// Published sheet the daily tally is exported from.
pub const DEFAULT_SOURCE_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vS2BOrelk2XUJGFgoOWTboVeDAn6pwQxYsFQTDPcu0w_To-8UOzXZA8lx8fUhZB4Q/pub?gid=1631424503&single=true&output=csv";

/// Title of the monthly summary view unless configured otherwise.
pub const DEFAULT_MONTHLY_LABEL: &str = "Monthly Summary";

/// Overrides `source_url` when set.
pub const SOURCE_URL_ENV: &str = "MENUTALLY_CSV_URL";

/// Column layout of the exported sheet.
///
/// Column 0 is the item label, followed by one block of `metrics_per_day`
/// columns per day, closed by a `monthly_column_count` block of totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    pub metrics_per_day: usize,
    pub days_per_week: usize,
    pub monthly_column_count: usize,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            metrics_per_day: 4,
            days_per_week: 7,
            monthly_column_count: 4,
        }
    }
}

impl Layout {
    /// Number of columns one week-group spans.
    pub fn week_width(&self) -> usize {
        self.metrics_per_day * self.days_per_week
    }

    /// Smallest header count that still has a label column and a monthly block.
    pub fn min_header_count(&self) -> usize {
        1 + self.monthly_column_count
    }

    pub fn validate(&self) -> Result<()> {
        if self.metrics_per_day == 0 {
            bail!("layout.metrics_per_day must be at least 1");
        }
        if self.days_per_week == 0 {
            bail!("layout.days_per_week must be at least 1");
        }
        if self.monthly_column_count == 0 {
            bail!("layout.monthly_column_count must be at least 1");
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where the CSV export is fetched from.
    pub source_url: String,
    /// Header shown above the item label column in every view.
    pub item_header: String,
    /// Column names for the weekly rollup, one per metric (produced, leftover,
    /// discarded, net).
    pub metric_names: Vec<String>,
    /// Label of the monthly summary view.
    pub monthly_label: String,
    pub layout: Layout,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            item_header: "Menu Item".to_string(),
            metric_names: ["ทำ", "เหลือ", "ทิ้ง", "ยอดสุทธิ"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            monthly_label: DEFAULT_MONTHLY_LABEL.to_string(),
            layout: Layout::default(),
        }
    }
}

impl AppConfig {
    /// Load from an optional YAML file, apply the environment override and validate.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut cfg = match path {
            Some(p) => {
                let text = fs::read_to_string(p)
                    .with_context(|| format!("reading config {}", p.display()))?;
                let cfg = Self::from_yaml(&text)
                    .with_context(|| format!("parsing config {}", p.display()))?;
                info!(path = %p.display(), "loaded config");
                cfg
            }
            None => Self::default(),
        };

        if let Ok(url) = env::var(SOURCE_URL_ENV) {
            debug!(env = SOURCE_URL_ENV, "source url overridden from environment");
            cfg.source_url = url;
        }

        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_yaml(text: &str) -> Result<Self> {
        let cfg: Self = serde_yaml::from_str(text)?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        self.layout.validate()?;
        if self.metric_names.len() != self.layout.metrics_per_day {
            bail!(
                "metric_names has {} entries but layout.metrics_per_day is {}",
                self.metric_names.len(),
                self.layout.metrics_per_day
            );
        }
        Url::parse(&self.source_url)
            .with_context(|| format!("invalid source_url `{}`", self.source_url))?;
        Ok(())
    }
}
