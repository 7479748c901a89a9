//! Query window lengths

use chrono::{Days, Months, NaiveDate};

/// Length of a range query window, anchored at a start date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Span {
    Day,
    Week,
    Month,
}

impl Span {
    /// Exclusive end of the window starting at `anchor`.
    ///
    /// Month windows clamp to the last day of the next month when the
    /// anchor day does not exist there (Jan 31 -> Feb 29 in a leap year).
    /// Returns `None` when the end lies past the representable date range.
    pub fn end(self, anchor: NaiveDate) -> Option<NaiveDate> {
        match self {
            Span::Day => anchor.checked_add_days(Days::new(1)),
            Span::Week => anchor.checked_add_days(Days::new(7)),
            Span::Month => anchor.checked_add_months(Months::new(1)),
        }
    }

    /// Short name used in logs
    pub fn as_str(self) -> &'static str {
        match self {
            Span::Day => "day",
            Span::Week => "week",
            Span::Month => "month",
        }
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_day_and_week_end() {
        assert_eq!(Span::Day.end(date(2024, 3, 4)), Some(date(2024, 3, 5)));
        assert_eq!(Span::Week.end(date(2024, 3, 4)), Some(date(2024, 3, 11)));
        assert_eq!(Span::Week.end(date(2024, 12, 29)), Some(date(2025, 1, 5)));
    }

    #[test]
    fn test_month_end_is_calendar_month() {
        assert_eq!(Span::Month.end(date(2024, 3, 4)), Some(date(2024, 4, 4)));
        assert_eq!(Span::Month.end(date(2024, 12, 15)), Some(date(2025, 1, 15)));
        // clamped
        assert_eq!(Span::Month.end(date(2024, 1, 31)), Some(date(2024, 2, 29)));
        assert_eq!(Span::Month.end(date(2023, 1, 31)), Some(date(2023, 2, 28)));
    }

    #[test]
    fn test_end_overflow() {
        assert_eq!(Span::Day.end(NaiveDate::MAX), None);
    }
}
