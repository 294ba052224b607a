use chrono::{DateTime, Utc};
use feed_rs::parser;
use html_escape::decode_html_entities;

use crate::app::{NewsieError, Result};
use crate::domain::FeedItem;

/// `Mon, 02 Jan 2006 15:04:05 +0000`. feed-rs hands dates over in UTC, so
/// the offset is always `+0000`.
const PUBLISHED_FORMAT: &str = "%a, %d %b %Y %H:%M:%S %z";

#[derive(Clone, Default)]
pub struct Normalizer;

impl Normalizer {
    pub fn new() -> Self {
        Self
    }

    /// Parse an RSS or Atom document into items, keeping feed order.
    ///
    /// The description stays HTML; only the title is entity-decoded.
    pub fn normalize(&self, body: &[u8]) -> Result<Vec<FeedItem>> {
        let feed = parser::parse(body).map_err(|e| NewsieError::FeedParse(e.to_string()))?;

        let items = feed
            .entries
            .into_iter()
            .map(|entry| {
                let title = entry
                    .title
                    .map(|t| decode_html_entities(&t.content).to_string())
                    .unwrap_or_default();

                let description = entry
                    .summary
                    .map(|s| s.content)
                    .or_else(|| entry.content.and_then(|c| c.body))
                    .unwrap_or_default();

                let published = entry
                    .published
                    .or(entry.updated)
                    .map(format_published)
                    .unwrap_or_default();

                let link = entry
                    .links
                    .first()
                    .map(|l| l.href.clone())
                    .unwrap_or_default();

                FeedItem {
                    title,
                    description,
                    published,
                    link,
                }
            })
            .collect();

        Ok(items)
    }
}

fn format_published(dt: DateTime<Utc>) -> String {
    dt.format(PUBLISHED_FORMAT).to_string()
}
