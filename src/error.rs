use thiserror::Error;

pub type Result<T> = std::result::Result<T, MenuError>;

#[derive(Debug, Error)]
pub enum MenuError {
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("could not repair page markup: {0}")]
    Repair(String),

    #[error("cache I/O error: {0}")]
    Cache(#[from] std::io::Error),

    #[error("cache entry is not valid JSON: {0}")]
    CacheFormat(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("no cached menu for the week of {0}")]
    NotCached(chrono::NaiveDate),
}

impl MenuError {
    pub fn network(url: impl Into<String>, source: reqwest::Error) -> Self {
        MenuError::Network {
            url: url.into(),
            source,
        }
    }
}
