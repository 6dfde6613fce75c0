use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::Result;
use crate::models::WeekMenu;

mod json_file;
pub use json_file::JsonFileCache;

/// Weekly menus keyed by the Monday of their ISO week.
#[async_trait]
pub trait WeekCache: Send + Sync {
    /// `Ok(None)` when nothing is stored for that week yet.
    async fn load(&self, week_start: NaiveDate) -> Result<Option<WeekMenu>>;
    async fn store(&self, week_start: NaiveDate, menu: &WeekMenu) -> Result<()>;
}
