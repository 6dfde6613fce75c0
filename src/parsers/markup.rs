use scraper::Html;
use tracing::debug;

use crate::error::{MenuError, Result};

/// Builds a well-formed document tree from page markup.
///
/// The HTML5 tree builder closes unclosed tags and re-parents misnested
/// ones, so the structural queries in [`super::page`] see a consistent
/// tree. Markup errors are recovered from and only logged. Input with no
/// markup at all cannot be repaired.
pub fn repair(text: &str) -> Result<Html> {
    if text.trim().is_empty() {
        return Err(MenuError::Repair("page body is empty".to_string()));
    }

    let document = Html::parse_document(text);
    if !document.errors.is_empty() {
        debug!("Repaired {} markup errors", document.errors.len());
        for error in document.errors.iter().take(5) {
            debug!("  {}", error);
        }
    }

    Ok(document)
}
