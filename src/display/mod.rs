pub mod table;

pub use table::Table;

use crate::models::{TargetDate, WeekMenu};

/// Renders the target day's menu: one row per category, the day label as heading.
///
/// The day is picked by position, the n-th day of the week menu for ISO
/// weekday n. A category listed twice on the same day gets one extra
/// column per repeat.
pub fn render_day(week: &WeekMenu, target: &TargetDate) -> String {
    let index = target.iso_weekday() as usize - 1;
    let Some((day, items)) = week.day_at(index) else {
        return format!("No menu for {} ({} days published)\n", target, week.len());
    };

    let mut rows: Vec<Vec<String>> = Vec::new();
    for item in items {
        match rows.iter_mut().find(|row| row[0] == item.category()) {
            Some(row) => row.push(item.to_string()),
            None => rows.push(vec![item.category().to_string(), item.to_string()]),
        }
    }

    let mut table = Table::new();
    table.set_heading(["", day]);
    for row in rows {
        table.add_row(row);
    }
    table.to_string()
}
