use async_trait::async_trait;
use reqwest::Client;

use crate::error::Result;
use crate::models::{PageResult, TargetDate};

mod restaurant;

pub use restaurant::{framed_menu_url, page_form, RestaurantScraper, PAGE_OFFSETS};

/// Source of the three menu pages for the week containing a target day.
#[async_trait]
pub trait MenuSource: Send + Sync {
    async fn fetch_week_pages(&self, client: &Client, target: &TargetDate) -> Result<[PageResult; 3]>;
}
