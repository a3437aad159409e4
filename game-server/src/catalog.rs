use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use game_types::{GameError, Golfer};
use reqwest::Client;
use tracing::{error, info};

use crate::config::GolferSourceConfig;

/// Supplies the full golfer catalog on demand.
#[async_trait]
pub trait GolferSource: Send + Sync {
    async fn fetch_golfers(&self) -> Result<Vec<Golfer>, GameError>;
}

pub fn golfer_source_from_config(config: &GolferSourceConfig) -> Arc<dyn GolferSource> {
    match config {
        GolferSourceConfig::Url(url) => Arc::new(HttpGolferSource::new(url.clone())),
        GolferSourceConfig::File(path) => Arc::new(FileGolferSource::new(path.clone())),
    }
}

/// Catalog published as a JSON array at a URL (e.g. an S3 object).
pub struct HttpGolferSource {
    client: Client,
    url: String,
}

impl HttpGolferSource {
    pub fn new(url: String) -> Self {
        Self {
            client: Client::new(),
            url,
        }
    }
}

#[async_trait]
impl GolferSource for HttpGolferSource {
    async fn fetch_golfers(&self) -> Result<Vec<Golfer>, GameError> {
        let response = self.client.get(&self.url).send().await.map_err(|e| {
            error!("Error fetching golfers from {}: {}", self.url, e);
            GameError::catalog("request failed")
        })?;

        if !response.status().is_success() {
            error!("Golfer catalog returned {}", response.status());
            return Err(GameError::catalog(format!(
                "Failed to fetch golfers: {}",
                response.status()
            )));
        }

        // A `null` document is an empty catalog
        let golfers: Option<Vec<Golfer>> = response.json().await.map_err(|e| {
            error!("Invalid golfer catalog at {}: {}", self.url, e);
            GameError::catalog("invalid catalog document")
        })?;

        let golfers = golfers.unwrap_or_default();
        info!("Fetched {} golfers from {}", golfers.len(), self.url);
        Ok(golfers)
    }
}

/// Catalog stored as a local JSON file.
pub struct FileGolferSource {
    path: PathBuf,
}

impl FileGolferSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl GolferSource for FileGolferSource {
    async fn fetch_golfers(&self) -> Result<Vec<Golfer>, GameError> {
        let contents = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            error!("Error reading golfers from {}: {}", self.path.display(), e);
            GameError::catalog("catalog file unreadable")
        })?;

        let golfers: Option<Vec<Golfer>> = serde_json::from_str(&contents).map_err(|e| {
            error!("Invalid golfer catalog in {}: {}", self.path.display(), e);
            GameError::catalog("invalid catalog document")
        })?;

        Ok(golfers.unwrap_or_default())
    }
}

/// Fixed in-memory catalog.
pub struct StaticGolferSource {
    golfers: Vec<Golfer>,
}

impl StaticGolferSource {
    pub fn new(golfers: Vec<Golfer>) -> Self {
        Self { golfers }
    }
}

#[async_trait]
impl GolferSource for StaticGolferSource {
    async fn fetch_golfers(&self) -> Result<Vec<Golfer>, GameError> {
        Ok(self.golfers.clone())
    }
}
