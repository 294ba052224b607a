use thiserror::Error;

#[derive(Error, Debug)]
pub enum NewsieError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Feed parsing error: {0}")]
    FeedParse(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid post number: {number} (feed has {count} posts)")]
    InvalidPostNumber { number: usize, count: usize },

    #[error("Could not resolve user: {0}")]
    UserLookup(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, NewsieError>;
