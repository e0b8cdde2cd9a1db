//! Weekday vocabulary and scheduling-week date range.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// One of the seven fixed weekday labels, Monday first.
///
/// This is the universal key for all day-keyed structures in the engine.
/// `Ord` follows declaration order, so a `BTreeMap<Weekday, _>` iterates
/// Monday through Sunday.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All seven weekdays in their fixed order.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Position in the fixed Monday-first order (0..=6).
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Weekday at a position, wrapping cyclically (Sunday is followed by
    /// Monday). Used by the consecutive-days check.
    pub fn from_index_cyclic(index: usize) -> Weekday {
        Weekday::ALL[index % 7]
    }

    /// Lowercase label matching the serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
            Weekday::Sunday => "sunday",
        }
    }

    /// Convert from a chrono weekday.
    pub fn from_chrono(day: chrono::Weekday) -> Weekday {
        match day {
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
            chrono::Weekday::Sun => Weekday::Sunday,
        }
    }

    /// Parse a serialized label ("monday".."sunday").
    pub fn parse_label(label: &str) -> Option<Weekday> {
        Weekday::ALL.into_iter().find(|d| d.label() == label)
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The scheduling week: an inclusive calendar date range.
///
/// Absence records are matched against this range; dates outside it are
/// ignored rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl WeekRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// True when the range is exactly one calendar week starting on Monday.
    pub fn is_valid(&self) -> bool {
        self.start.weekday() == chrono::Weekday::Mon
            && self.end - self.start == chrono::Duration::days(6)
    }

    /// True when `date` falls inside the week (inclusive on both ends).
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Map a calendar date to its weekday label, or `None` when the date is
    /// outside the week.
    pub fn weekday_of(&self, date: NaiveDate) -> Option<Weekday> {
        if self.contains(date) {
            Some(Weekday::from_chrono(date.weekday()))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_weekday_order_is_monday_first() {
        assert_eq!(Weekday::ALL[0], Weekday::Monday);
        assert_eq!(Weekday::ALL[6], Weekday::Sunday);
        assert!(Weekday::Monday < Weekday::Sunday);
    }

    #[test]
    fn test_weekday_cyclic_index() {
        assert_eq!(Weekday::from_index_cyclic(6), Weekday::Sunday);
        assert_eq!(Weekday::from_index_cyclic(7), Weekday::Monday);
        assert_eq!(Weekday::from_index_cyclic(8), Weekday::Tuesday);
    }

    #[test]
    fn test_weekday_label_round_trip() {
        for day in Weekday::ALL {
            assert_eq!(Weekday::parse_label(day.label()), Some(day));
        }
        assert_eq!(Weekday::parse_label("funday"), None);
    }

    #[test]
    fn test_week_range_weekday_of() {
        // 2025-06-02 is a Monday.
        let week = WeekRange::new(date(2025, 6, 2), date(2025, 6, 8));
        assert_eq!(week.weekday_of(date(2025, 6, 2)), Some(Weekday::Monday));
        assert_eq!(week.weekday_of(date(2025, 6, 7)), Some(Weekday::Saturday));
        assert_eq!(week.weekday_of(date(2025, 6, 8)), Some(Weekday::Sunday));
    }

    #[test]
    fn test_week_range_outside_dates_are_none() {
        let week = WeekRange::new(date(2025, 6, 2), date(2025, 6, 8));
        assert_eq!(week.weekday_of(date(2025, 6, 1)), None);
        assert_eq!(week.weekday_of(date(2025, 6, 9)), None);
    }

    #[test]
    fn test_week_range_validity() {
        assert!(WeekRange::new(date(2025, 6, 2), date(2025, 6, 8)).is_valid());
        // Inverted range.
        assert!(!WeekRange::new(date(2025, 6, 8), date(2025, 6, 2)).is_valid());
        // Tuesday start.
        assert!(!WeekRange::new(date(2025, 6, 3), date(2025, 6, 9)).is_valid());
        // Monday start but two weeks long.
        assert!(!WeekRange::new(date(2025, 6, 2), date(2025, 6, 15)).is_valid());
    }
}
