use async_trait::async_trait;
use futures::future::try_join;
use reqwest::Client;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::Result;
use crate::models::{PageResult, TargetDate};
use crate::parsers::parse_page;
use crate::scrapers::MenuSource;
use crate::utils::http::fetch_raw;

/// `(page number, category offset)` for the three menu pages.
pub const PAGE_OFFSETS: [(u8, u8); 3] = [(1, 0), (2, 3), (3, 5)];

/// Drives the restaurant site: redirect, session page, then the three form posts.
pub struct RestaurantScraper {
    config: Arc<Config>,
}

impl RestaurantScraper {
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    /// Follows the short link and returns the menu URL with the load
    /// balancer's query string appended.
    async fn resolve_menu_url(&self, client: &Client) -> Result<String> {
        let redirect_url = &self.config.redirect_url;
        let landing = fetch_raw(client.get(redirect_url), redirect_url).await?;
        debug!("Redirect landed on {}", landing.url);

        Ok(framed_menu_url(&self.config.menu_url, landing.url.query()))
    }

    async fn fetch_page(
        &self,
        client: &Client,
        menu_url: &str,
        page: u8,
        offset: u8,
        target: &TargetDate,
    ) -> Result<PageResult> {
        let started = Instant::now();
        let form = page_form(page, offset, target);
        let response = fetch_raw(client.post(menu_url).form(&form), menu_url).await?;
        debug!(
            "Menu page {} fetched in {:?} ({} bytes)",
            page,
            started.elapsed(),
            response.body.len()
        );

        let result = parse_page(&response.body, response.content_type.as_deref())?;
        info!(
            "Page {}: {} days, {} options",
            page,
            result.len(),
            result.item_count()
        );
        Ok(result)
    }
}

#[async_trait]
impl MenuSource for RestaurantScraper {
    async fn fetch_week_pages(&self, client: &Client, target: &TargetDate) -> Result<[PageResult; 3]> {
        info!("Fetching menu for {}", target);

        let menu_url = self.resolve_menu_url(client).await?;

        // Sets the session cookies; the page itself is not needed.
        fetch_raw(client.get(&menu_url), &menu_url).await?;

        let [(page1, offset1), (page2, offset2), (page3, offset3)] = PAGE_OFFSETS;
        let first = self
            .fetch_page(client, &menu_url, page1, offset1, target)
            .await?;
        let (second, third) = try_join(
            self.fetch_page(client, &menu_url, page2, offset2, target),
            self.fetch_page(client, &menu_url, page3, offset3, target),
        )
        .await?;

        Ok([first, second, third])
    }
}

/// Appends the redirect's query string to the menu URL.
pub fn framed_menu_url(menu_url: &str, query: Option<&str>) -> String {
    match query.filter(|query| !query.is_empty()) {
        Some(query) if menu_url.contains('?') => format!("{}&{}", menu_url, query),
        Some(query) => format!("{}?{}", menu_url, query),
        None => menu_url.to_string(),
    }
}

/// Form fields of the "Page N" submit button.
pub fn page_form(page: u8, offset: u8, target: &TargetDate) -> Vec<(&'static str, String)> {
    vec![
        ("fn_limite", offset.to_string()),
        ("fn_numpage", page.to_string()),
        ("fn_jourSemaine", target.form_value()),
        ("fn_refresh", "1".to_string()),
        ("fn_changeType", "2".to_string()),
        ("fa_afficheSemaine_menurestaurant", format!("Page {}", page)),
    ]
}
