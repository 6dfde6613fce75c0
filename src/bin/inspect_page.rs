use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;

use cafeteria_menu::parsers::encoding::resolve_encoding;
use cafeteria_menu::parsers::parse_page;

/// Run a saved menu page through decoding, repair and extraction.
#[derive(Debug, Parser)]
#[command(about)]
struct Args {
    /// HTML file as received from the server
    file: PathBuf,

    /// Content-Type header the page was served with
    #[arg(long)]
    content_type: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let raw = fs::read(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;

    let (encoding, source) = resolve_encoding(&raw, args.content_type.as_deref());
    println!("Charset: {} ({:?})", encoding.name(), source);

    let page = parse_page(&raw, args.content_type.as_deref())?;
    println!("Found {} days, {} options", page.len(), page.item_count());
    println!("{}", serde_json::to_string_pretty(&page)?);

    Ok(())
}
