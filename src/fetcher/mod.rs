pub mod http_fetcher;

use async_trait::async_trait;

use crate::app::Result;

/// The Arch Linux news feed. The only feed newsie reads.
pub const FEED_URL: &str = "https://www.archlinux.org/feeds/news/";

#[async_trait]
pub trait Fetcher {
    /// Download the raw feed document at `url`.
    async fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}
