use reqwest::Client;
use tracing::info;

use crate::error::{MenuError, Result};
use crate::merge::merge_pages;
use crate::models::{TargetDate, WeekMenu};
use crate::scrapers::MenuSource;
use crate::storage::WeekCache;

#[derive(Debug, Clone, Copy, Default)]
pub struct FetchOptions {
    /// Skip the cache lookup and overwrite the week's entry.
    pub refresh: bool,
    /// Never touch the network; a cache miss is an error.
    pub offline: bool,
}

/// Returns the week's menu from the cache, or fetches, merges and caches it.
///
/// Nothing is written unless all three pages were fetched and parsed.
pub async fn load_week(
    source: &dyn MenuSource,
    client: &Client,
    cache: &dyn WeekCache,
    target: &TargetDate,
    options: FetchOptions,
) -> Result<WeekMenu> {
    let week_start = target.week_start();

    if !options.refresh {
        if let Some(menu) = cache.load(week_start).await? {
            info!("Using cached menu for week of {}", week_start);
            return Ok(menu);
        }
    }

    if options.offline {
        return Err(MenuError::NotCached(week_start));
    }

    let pages = source.fetch_week_pages(client, target).await?;
    let week = merge_pages(pages);
    info!(
        "Merged menu: {} days, {} options",
        week.len(),
        week.item_count()
    );

    cache.store(week_start, &week).await?;
    Ok(week)
}
