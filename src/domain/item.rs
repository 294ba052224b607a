use serde::{Deserialize, Serialize};
use sha1::{Digest, Sha1};

/// One announcement from the news feed.
///
/// Items are identified towards the user by their 1-based position in the
/// feed and towards the read cache by the hash of their title.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedItem {
    pub title: String,
    /// Raw HTML as supplied by the feed.
    pub description: String,
    pub published: String,
    pub link: String,
}

impl FeedItem {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    /// Hex-encoded SHA-1 of the title, as stored in the read cache.
    pub fn title_hash(&self) -> String {
        hash_title(&self.title)
    }
}

/// Hash a title into the 40 character key used by the read cache.
pub fn hash_title(title: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(title.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_deterministic() {
        assert_eq!(hash_title("Example Title"), hash_title("Example Title"));
    }

    #[test]
    fn test_hash_different_inputs() {
        assert_ne!(hash_title("Example Title"), hash_title("Example title"));
    }

    #[test]
    fn test_hash_is_hex_sha1() {
        let hash = hash_title("Example Title");
        assert_eq!(hash.len(), 40);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_hash_known_value() {
        // sha1("abc")
        assert_eq!(hash_title("abc"), "a9993e364706816aba3e25717850c26c9cd0d89d");
    }

    #[test]
    fn test_item_hash_matches_title_hash() {
        let item = FeedItem::new("Same", "<p>x</p>");
        assert_eq!(item.title_hash(), hash_title("Same"));
    }
}
