use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use super::{collapse_line_breaks, collapse_whitespace};
use crate::models::{DayMenu, MenuItem, PageResult, NO_DESCRIPTION};

static CATEGORY_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".typeMenu").expect("Invalid category selector"));
static DAY_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".EnteteMenu").expect("Invalid day selector"));
static DESCRIPTION_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("span").expect("Invalid description selector"));
static PRICE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("center").expect("Invalid price selector"));

/// Extracts the per-day menu fragment of one page.
///
/// Category headers and option cells are matched by position: the i-th
/// cell of a day belongs to the i-th `.typeMenu` header of the page. The
/// site gives cells no other identifier. Missing structure never fails,
/// it just yields fewer items.
pub fn extract_page(document: &Html) -> PageResult {
    let categories: Vec<String> = document
        .select(&CATEGORY_SELECTOR)
        .map(|element| collapse_whitespace(&element.text().collect::<String>()))
        .collect();

    let mut page = PageResult::new();

    for header in document.select(&DAY_SELECTOR) {
        let day = collapse_line_breaks(&header.text().collect::<String>())
            .trim()
            .to_string();
        let items = day_items(header, &categories);
        debug!("{}: {} options", day, items.len());
        page.insert(day, items);
    }

    page
}

fn day_items(header: ElementRef<'_>, categories: &[String]) -> DayMenu {
    option_cells(header)
        .into_iter()
        .enumerate()
        .filter_map(|(index, cell)| match categories.get(index) {
            Some(category) => Some(menu_item(category, cell)),
            None => {
                debug!("Option cell {} has no category header, skipped", index);
                None
            }
        })
        .collect()
}

/// The `td` children of the row that follows the day header's row. A
/// following row holding the next day's header means this day has none.
fn option_cells(header: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    let row = header
        .parent()
        .and_then(|parent| parent.next_siblings().find_map(ElementRef::wrap))
        .filter(|row| row.select(&DAY_SELECTOR).next().is_none());

    match row {
        Some(row) => row
            .children()
            .filter_map(ElementRef::wrap)
            .filter(|child| child.value().name() == "td")
            .collect(),
        None => Vec::new(),
    }
}

fn menu_item(category: &str, cell: ElementRef<'_>) -> MenuItem {
    let description = collapse_line_breaks(&outer_text(cell, &DESCRIPTION_SELECTOR, "span"));
    let description = match description.trim() {
        "" => NO_DESCRIPTION.to_string(),
        text => text.to_string(),
    };

    let price = collapse_line_breaks(outer_text(cell, &PRICE_SELECTOR, "center").trim());

    MenuItem::new(category, description, price)
}

/// Text of the outermost `tag` elements under `cell`, so nested ones are
/// not counted twice.
fn outer_text(cell: ElementRef<'_>, selector: &Selector, tag: &str) -> String {
    cell.select(selector)
        .filter(|element| {
            !element
                .ancestors()
                .take_while(|node| node.id() != cell.id())
                .filter_map(ElementRef::wrap)
                .any(|ancestor| ancestor.value().name() == tag)
        })
        .flat_map(|element| element.text())
        .collect()
}
