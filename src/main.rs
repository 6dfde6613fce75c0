use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use cafeteria_menu::app::{load_week, FetchOptions};
use cafeteria_menu::config::Config;
use cafeteria_menu::display::render_day;
use cafeteria_menu::models::TargetDate;
use cafeteria_menu::scrapers::RestaurantScraper;
use cafeteria_menu::storage::JsonFileCache;
use cafeteria_menu::utils;

/// Print this week's restaurant menu for one day.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// ISO weekday to show (1 = Monday .. 7 = Sunday). Defaults to today,
    /// or next Monday during the weekend.
    #[arg(value_parser = clap::value_parser!(u32).range(1..=7))]
    day: Option<u32>,

    /// Directory holding the weekly menu files
    #[arg(long)]
    cache_dir: Option<PathBuf>,

    /// Fetch the menu even if this week is cached
    #[arg(long, conflicts_with = "offline")]
    refresh: bool,

    /// Only use the cache
    #[arg(long)]
    offline: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr, stdout only carries the table
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(utils::logging::env_filter())
        .init();

    let cli = Cli::parse();

    let mut config = Config::load().context("Failed to load configuration")?;
    if let Some(dir) = cli.cache_dir {
        config.cache_dir = dir;
    }
    let config = Arc::new(config);

    let target = TargetDate::resolve(Local::now().date_naive(), cli.day);
    info!("Showing menu for {}", target);

    let cache = JsonFileCache::new(config.cache_dir.clone());
    let client = utils::http::create_client(&config)?;
    let scraper = RestaurantScraper::new(config.clone());
    let options = FetchOptions {
        refresh: cli.refresh,
        offline: cli.offline,
    };

    let week = load_week(&scraper, &client, &cache, &target, options)
        .await
        .with_context(|| format!("Failed to get the menu for the week of {}", target.week_start()))?;

    print!("{}", render_day(&week, &target));
    Ok(())
}
