use std::path::Path;

use crate::app::error::{NewsieError, Result};
use crate::app::Session;
use crate::config::Config;
use crate::fetcher::http_fetcher::HttpFetcher;
use crate::fetcher::{Fetcher, FEED_URL};
use crate::normalizer::Normalizer;
use crate::store::bootstrap::{self, CacheOwner};
use crate::store::ReadCache;

pub struct AppContext {
    pub config: Config,
    pub fetcher: Box<dyn Fetcher + Send + Sync>,
    pub normalizer: Normalizer,
}

impl AppContext {
    pub fn new(config_path: Option<&Path>) -> Result<Self> {
        let config = Config::load(config_path).map_err(|e| NewsieError::Config(e.to_string()))?;
        let fetcher = Box::new(HttpFetcher::new(&config.fetch)?);
        Ok(Self::with_fetcher(config, fetcher))
    }

    pub fn with_fetcher(config: Config, fetcher: Box<dyn Fetcher + Send + Sync>) -> Self {
        Self {
            config,
            fetcher,
            normalizer: Normalizer::new(),
        }
    }

    /// Bootstrap the invoking user's cache, then load it and fetch the feed.
    pub async fn open_session(&self) -> Result<Session> {
        let owner = CacheOwner::resolve()?;
        let cache_path = bootstrap::bootstrap(&owner)?;
        self.open_session_with(&cache_path).await
    }

    /// Load an existing cache file and fetch the feed.
    pub async fn open_session_with(&self, cache_path: &Path) -> Result<Session> {
        let cache = ReadCache::load(cache_path)?;

        let body = self.fetcher.fetch(FEED_URL).await?;
        let items = self.normalizer.normalize(&body)?;

        Ok(Session::new(items, cache, self.config.styles.clone()))
    }
}
