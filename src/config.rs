use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::Result;

pub const DEFAULT_REDIRECT_URL: &str = "http://cern.ch/resto1";
pub const DEFAULT_MENU_URL: &str =
    "http://extranet.novae-restauration.ch/novae/traiteur/restauration/restaurant-cern.html?frame=1";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/108.0.0.0 Safari/537.36";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Short link that redirects to the restaurant page and picks the backend node.
    pub redirect_url: String,
    /// Framed menu page. The redirect's query string is appended to it.
    pub menu_url: String,
    pub cache_dir: PathBuf,
    pub user_agent: String,
    pub request_timeout_seconds: u64,
}

impl Config {
    /// Defaults, then `cafeteria_menu.toml` if present, then `CAFETERIA_MENU_*` env vars.
    pub fn load() -> Result<Self> {
        let settings = config::Config::builder()
            .set_default("redirect_url", DEFAULT_REDIRECT_URL)?
            .set_default("menu_url", DEFAULT_MENU_URL)?
            .set_default("cache_dir", "data")?
            .set_default("user_agent", DEFAULT_USER_AGENT)?
            .set_default("request_timeout_seconds", 30_i64)?
            .add_source(config::File::with_name("cafeteria_menu").required(false))
            .add_source(config::Environment::with_prefix("CAFETERIA_MENU"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            redirect_url: DEFAULT_REDIRECT_URL.to_string(),
            menu_url: DEFAULT_MENU_URL.to_string(),
            cache_dir: PathBuf::from("data"),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout_seconds: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_without_file_uses_defaults() {
        let config = Config::load().unwrap();
        assert_eq!(config.redirect_url, DEFAULT_REDIRECT_URL);
        assert!(config.menu_url.ends_with("?frame=1"));
        assert!(config.request_timeout_seconds > 0);
    }
}
