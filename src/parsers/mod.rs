pub mod encoding;
pub mod markup;
pub mod page;

pub use encoding::normalize;
pub use markup::repair;
pub use page::extract_page;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::Result;
use crate::models::PageResult;

static LINE_BREAK_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[ \t]*(?:\r\n|\r|\n)+[ \t]*").expect("Invalid line break regex")
});

/// Collapse every whitespace run to one space and trim the ends.
/// Entities are already decoded by the HTML parser.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Replace each run of line breaks (and the blanks around it) with one space
pub fn collapse_line_breaks(text: &str) -> String {
    LINE_BREAK_REGEX.replace_all(text, " ").into_owned()
}

/// Raw response body to page fragment: decode, repair, extract.
pub fn parse_page(raw: &[u8], content_type: Option<&str>) -> Result<PageResult> {
    let text = normalize(raw, content_type);
    let document = repair(&text)?;
    Ok(extract_page(&document))
}
