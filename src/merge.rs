use tracing::debug;

use crate::models::{PageResult, WeekMenu};

/// Combines the three page fragments into the week's menu.
///
/// Page 1 decides which days exist and in which order. For each of its
/// days the items of pages 1, 2 and 3 are concatenated in that order. Days
/// that only appear on page 2 or 3 are dropped.
pub fn merge_pages(pages: [PageResult; 3]) -> WeekMenu {
    let [first, second, third] = pages;
    let mut week = WeekMenu::new();

    for (day, items) in first.iter() {
        let mut merged = items.clone();
        for page in [&second, &third] {
            if let Some(more) = page.get(day) {
                merged.extend(more.iter().cloned());
            }
        }
        week.insert(day, merged);
    }

    for page in [&second, &third] {
        for day in page.days().filter(|day| first.get(day).is_none()) {
            debug!("Ignoring day {:?} missing from the first page", day);
        }
    }

    week
}
