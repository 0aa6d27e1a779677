use anyhow::Result;
use clap::{Parser, ValueEnum};
use menutally::{
    config::AppConfig,
    fetch::{fetch_table, FileSource, HttpSource, Source},
    present::{render_text, TabState},
    process::invalid_cells,
    view::build_report,
};
use reqwest::Client;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Parser)]
#[command(author, version, about = "Daily, weekly and monthly tallies from a menu sheet export")]
struct Args {
    /// Fetch the CSV export from this URL instead of the configured one.
    #[arg(long, conflicts_with = "file")]
    url: Option<String>,
    /// Read the CSV export from a local file.
    #[arg(long)]
    file: Option<PathBuf>,
    /// YAML config file.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, value_enum, default_value = "text")]
    format: Format,
    /// Daily tab to show, e.g. "Day 3".
    #[arg(long)]
    day: Option<String>,
    /// Weekly tab to show, e.g. "Week 2".
    #[arg(long)]
    week: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    // ─── 2) config & source ──────────────────────────────────────────
    let cfg = AppConfig::load(args.config.as_deref())?;
    let source = match (&args.file, &args.url) {
        (Some(path), _) => Source::File(FileSource::new(path)),
        (None, Some(url)) => Source::Http(HttpSource::new(Client::new(), url)?),
        (None, None) => Source::Http(HttpSource::new(Client::new(), &cfg.source_url)?),
    };

    // ─── 3) fetch, then transform ────────────────────────────────────
    let table = fetch_table(&source).await?;

    let invalid = invalid_cells(&table);
    if !invalid.is_empty() {
        warn!(count = invalid.len(), "non-numeric cells counted as zero");
        for cell in invalid.iter().take(10) {
            warn!(
                item = %cell.item,
                header = %cell.header,
                raw = %cell.raw,
                coerced = cell.coerced,
                "invalid cell"
            );
        }
    }

    let report = build_report(&table, &cfg)?;

    // ─── 4) output ───────────────────────────────────────────────────
    match args.format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        Format::Text => {
            let mut tabs = TabState::new(&report);
            if let Some(day) = &args.day {
                if !tabs.select_daily(day) && tabs.active_daily() != Some(day.as_str()) {
                    warn!(tab = %day, "no such daily tab");
                }
            }
            if let Some(week) = &args.week {
                if !tabs.select_weekly(week) && tabs.active_weekly() != Some(week.as_str()) {
                    warn!(tab = %week, "no such weekly tab");
                }
            }
            print!("{}", render_text(&report, &tabs));
        }
    }

    info!("done");
    Ok(())
}
