use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Shown when a menu option has no description text.
pub const NO_DESCRIPTION: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    #[serde(rename = "type")]
    category: String,
    description: String,
    price: String,
}

impl MenuItem {
    pub fn new(
        category: impl Into<String>,
        description: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            description: description.into(),
            price: price.into(),
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> &str {
        &self.price
    }
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.description, self.price)
    }
}

/// Items for one day, in the category order of the page(s) they came from.
pub type DayMenu = Vec<MenuItem>;

/// Day label to menu items, keeping the order in which days were inserted.
///
/// Day labels are the site's own header text ("Lundi 19.10" and the like),
/// so the position of a day is the only link back to a weekday. The map
/// serializes as a JSON object and reads back in the same key order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DaySchedule {
    days: Vec<(String, DayMenu)>,
}

/// Partial schedule extracted from one of the three menu pages.
pub type PageResult = DaySchedule;

/// Complete schedule for a week, all three pages merged.
pub type WeekMenu = DaySchedule;

impl DaySchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a day. A label already present keeps its position and gets the new items.
    pub fn insert(&mut self, day: impl Into<String>, items: DayMenu) {
        let day = day.into();
        match self.days.iter_mut().find(|(label, _)| *label == day) {
            Some(entry) => entry.1 = items,
            None => self.days.push((day, items)),
        }
    }

    pub fn get(&self, day: &str) -> Option<&DayMenu> {
        self.days
            .iter()
            .find(|(label, _)| label == day)
            .map(|(_, items)| items)
    }

    /// Day at `index` in insertion order.
    pub fn day_at(&self, index: usize) -> Option<(&str, &DayMenu)> {
        self.days
            .get(index)
            .map(|(label, items)| (label.as_str(), items))
    }

    pub fn days(&self) -> impl Iterator<Item = &str> {
        self.days.iter().map(|(label, _)| label.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DayMenu)> {
        self.days.iter().map(|(label, items)| (label.as_str(), items))
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn item_count(&self) -> usize {
        self.days.iter().map(|(_, items)| items.len()).sum()
    }
}

impl Serialize for DaySchedule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.days.len()))?;
        for (day, items) in &self.days {
            map.serialize_entry(day, items)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for DaySchedule {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ScheduleVisitor;

        impl<'de> Visitor<'de> for ScheduleVisitor {
            type Value = DaySchedule;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of day labels to menu items")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut schedule = DaySchedule::new();
                while let Some((day, items)) = access.next_entry::<String, DayMenu>()? {
                    schedule.insert(day, items);
                }
                Ok(schedule)
            }
        }

        deserializer.deserialize_map(ScheduleVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_week() -> WeekMenu {
        let mut week = WeekMenu::new();
        week.insert(
            "Vendredi 23.10",
            vec![MenuItem::new("Menu 1", "Fish and chips", "CHF 11.50")],
        );
        week.insert(
            "Lundi 19.10",
            vec![
                MenuItem::new("Menu 1", "Poulet rôti", "CHF 10.90"),
                MenuItem::new("Végétarien", NO_DESCRIPTION, "CHF 9.50"),
            ],
        );
        week
    }

    #[test]
    fn serializes_items_with_type_key() {
        let item = MenuItem::new("Menu 1", "Soupe", "2.50");
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "Menu 1", "description": "Soupe", "price": "2.50"})
        );
    }

    #[test]
    fn json_round_trip_keeps_day_order() {
        let week = sample_week();
        let json = serde_json::to_string_pretty(&week).unwrap();
        let back: WeekMenu = serde_json::from_str(&json).unwrap();

        assert_eq!(back, week);
        assert_eq!(
            back.days().collect::<Vec<_>>(),
            vec!["Vendredi 23.10", "Lundi 19.10"]
        );
    }

    #[test]
    fn insert_existing_day_replaces_in_place() {
        let mut week = sample_week();
        week.insert("Vendredi 23.10", Vec::new());

        assert_eq!(week.len(), 2);
        assert_eq!(week.day_at(0), Some(("Vendredi 23.10", &Vec::new())));
        assert_eq!(week.item_count(), 2);
    }

    #[test]
    fn display_shows_description_and_price() {
        let item = MenuItem::new("Menu 1", "Soupe", "2.50");
        assert_eq!(item.to_string(), "Soupe (2.50)");
    }
}
