use chrono::{Datelike, Duration, NaiveDate};
use std::fmt;

/// The day whose menu is requested, resolved once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetDate {
    date: NaiveDate,
}

impl TargetDate {
    /// Saturday and Sunday roll forward to the next Monday, then `weekday`
    /// (ISO, 1 = Monday) moves the date within that ISO week.
    pub fn resolve(today: NaiveDate, weekday: Option<u32>) -> Self {
        let current = today.weekday().number_from_monday();
        let base = if current >= 6 {
            today + Duration::days(i64::from(8 - current))
        } else {
            today
        };

        let date = match weekday {
            Some(day) => {
                let day = day.clamp(1, 7);
                let offset = i64::from(day) - i64::from(base.weekday().number_from_monday());
                base + Duration::days(offset)
            }
            None => base,
        };

        Self { date }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// 1 = Monday .. 7 = Sunday
    pub fn iso_weekday(&self) -> u32 {
        self.date.weekday().number_from_monday()
    }

    /// Monday of the ISO week containing the target day.
    pub fn week_start(&self) -> NaiveDate {
        self.date - Duration::days(i64::from(self.iso_weekday() - 1))
    }

    /// `YYYY-MM-DD`, the format expected by the menu form.
    pub fn form_value(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

impl fmt::Display for TargetDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.date.format("%A %Y-%m-%d"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn weekday_is_kept() {
        let target = TargetDate::resolve(day(2026, 10, 21), None);
        assert_eq!(target.date(), day(2026, 10, 21));
        assert_eq!(target.iso_weekday(), 3);
        assert_eq!(target.week_start(), day(2026, 10, 19));
    }

    #[test]
    fn weekend_rolls_to_next_monday() {
        assert_eq!(TargetDate::resolve(day(2026, 10, 24), None).date(), day(2026, 10, 26));
        assert_eq!(TargetDate::resolve(day(2026, 10, 25), None).date(), day(2026, 10, 26));
    }

    #[test]
    fn override_selects_day_in_same_week() {
        let target = TargetDate::resolve(day(2026, 10, 21), Some(1));
        assert_eq!(target.date(), day(2026, 10, 19));

        let target = TargetDate::resolve(day(2026, 10, 21), Some(5));
        assert_eq!(target.date(), day(2026, 10, 23));
        assert_eq!(target.form_value(), "2026-10-23");
    }

    #[test]
    fn weekend_override_never_precedes_next_monday() {
        for today in [day(2026, 10, 24), day(2026, 10, 25), day(2027, 1, 2), day(2027, 1, 3)] {
            let next_monday = TargetDate::resolve(today, None).date();
            for weekday in 1..=7 {
                let target = TargetDate::resolve(today, Some(weekday));
                assert!(target.date() >= next_monday, "{today} / {weekday}");
                assert_eq!(target.iso_weekday(), weekday);
                assert_eq!(target.week_start(), next_monday);
            }
        }
    }

    #[test]
    fn week_start_across_year_boundary() {
        let target = TargetDate::resolve(day(2027, 1, 1), None);
        assert_eq!(target.week_start(), day(2026, 12, 28));
    }
}
