// src/fetch/mod.rs

use anyhow::{Context, Result};
use reqwest::Client;
use std::path::PathBuf;
use tokio::fs;
use tracing::info;
use url::Url;

use crate::process::{parse_csv, Table};

/// Anything that can hand over the raw CSV export.
///
/// Called once per refresh; no retry or timeout is applied here, errors go
/// straight back to the caller.
#[allow(async_fn_in_trait)]
pub trait RawTextSource {
    /// Human-readable origin, for logs.
    fn describe(&self) -> String;

    async fn raw_text(&self) -> Result<String>;
}

/// Published sheet reachable over HTTP(S).
pub struct HttpSource {
    client: Client,
    url: Url,
}

impl HttpSource {
    pub fn new(client: Client, url: &str) -> Result<Self> {
        let url = Url::parse(url).with_context(|| format!("parsing source URL {}", url))?;
        Ok(Self { client, url })
    }
}

impl RawTextSource for HttpSource {
    fn describe(&self) -> String {
        self.url.to_string()
    }

    async fn raw_text(&self) -> Result<String> {
        let text = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .with_context(|| format!("GET {}", self.url))?
            .error_for_status()?
            .text()
            .await
            .with_context(|| format!("reading body from {}", self.url))?;
        Ok(text)
    }
}

/// A CSV export saved to disk.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RawTextSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn raw_text(&self) -> Result<String> {
        fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("reading {}", self.path.display()))
    }
}

/// Source picked at startup.
pub enum Source {
    Http(HttpSource),
    File(FileSource),
}

impl RawTextSource for Source {
    fn describe(&self) -> String {
        match self {
            Source::Http(s) => s.describe(),
            Source::File(s) => s.describe(),
        }
    }

    async fn raw_text(&self) -> Result<String> {
        match self {
            Source::Http(s) => s.raw_text().await,
            Source::File(s) => s.raw_text().await,
        }
    }
}

/// Await the source once and parse what it returns.
pub async fn fetch_table<S: RawTextSource>(source: &S) -> Result<Table> {
    let origin = source.describe();
    info!(source = %origin, "fetching sheet");
    let raw = source.raw_text().await?;
    info!(source = %origin, bytes = raw.len(), "fetched sheet");
    Ok(parse_csv(&raw))
}
