use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Serialize;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::error::Result;
use crate::models::WeekMenu;
use crate::storage::WeekCache;

/// One pretty-printed JSON file per week: `<dir>/<YYYY-MM-DD>.json`.
pub struct JsonFileCache {
    dir: PathBuf,
}

impl JsonFileCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, week_start: NaiveDate) -> PathBuf {
        self.dir
            .join(format!("{}.json", week_start.format("%Y-%m-%d")))
    }
}

#[async_trait]
impl WeekCache for JsonFileCache {
    async fn load(&self, week_start: NaiveDate) -> Result<Option<WeekMenu>> {
        let path = self.path_for(week_start);

        let content = match tokio::fs::read(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("Nothing in cache for week of {}", week_start);
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let menu: WeekMenu = serde_json::from_slice(&content)?;
        debug!("Loaded {} days from {}", menu.len(), path.display());
        Ok(Some(menu))
    }

    async fn store(&self, week_start: NaiveDate, menu: &WeekMenu) -> Result<()> {
        tokio::fs::create_dir_all(&self.dir).await?;

        let mut content = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut content, formatter);
        menu.serialize(&mut serializer)?;

        // Write next to the target and rename so a reader never sees half a file.
        let path = self.path_for(week_start);
        let partial = path.with_extension("json.part");
        tokio::fs::write(&partial, &content).await?;
        tokio::fs::rename(&partial, &path).await?;

        info!("Cached week of {} in {}", week_start, path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MenuError;
    use crate::models::{MenuItem, NO_DESCRIPTION};
    use pretty_assertions::assert_eq;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "cafeteria-menu-{}-{}",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn week() -> WeekMenu {
        let mut week = WeekMenu::new();
        week.insert(
            "Lundi 19.10",
            vec![
                MenuItem::new("Menu 1", "Filet de perche, riz", "CHF 12.50"),
                MenuItem::new("Végétarien", NO_DESCRIPTION, "CHF 9.00"),
            ],
        );
        week.insert("Mardi 20.10", vec![]);
        week
    }

    #[tokio::test]
    async fn missing_file_is_a_miss() {
        let cache = JsonFileCache::new(scratch_dir("miss"));
        assert_eq!(cache.load(monday()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn store_then_load_round_trips() {
        let dir = scratch_dir("round-trip");
        let cache = JsonFileCache::new(&dir);

        cache.store(monday(), &week()).await.unwrap();
        let loaded = cache.load(monday()).await.unwrap();

        assert_eq!(loaded, Some(week()));
        assert!(dir.join("2026-10-19.json").exists());
        assert!(!dir.join("2026-10-19.json.part").exists());
        std::fs::remove_dir_all(dir).unwrap();
    }

    #[tokio::test]
    async fn file_uses_four_space_indent_and_type_key() {
        let dir = scratch_dir("format");
        let cache = JsonFileCache::new(&dir);
        cache.store(monday(), &week()).await.unwrap();

        let text = std::fs::read_to_string(cache.path_for(monday())).unwrap();
        assert!(text.starts_with("{\n    \"Lundi 19.10\": [\n        {\n"));
        assert!(text.contains("\"type\": \"Menu 1\""));
        std::fs::remove_dir_all(dir).unwrap();
    }

    #[tokio::test]
    async fn corrupt_file_is_an_error() {
        let dir = scratch_dir("corrupt");
        std::fs::create_dir_all(&dir).unwrap();
        let cache = JsonFileCache::new(&dir);
        std::fs::write(cache.path_for(monday()), "{ not json").unwrap();

        let result = cache.load(monday()).await;
        assert!(matches!(result, Err(MenuError::CacheFormat(_))));
        std::fs::remove_dir_all(dir).unwrap();
    }
}
