use chrono::{Duration, NaiveDate};

/// The two supported dashboard ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Window {
    Week,
    Month,
}

impl Window {
    pub fn days(&self) -> u32 {
        match self {
            Window::Week => 7,
            Window::Month => 30,
        }
    }

    pub fn toggled(&self) -> Window {
        match self {
            Window::Week => Window::Month,
            Window::Month => Window::Week,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Window::Week => "7 days",
            Window::Month => "30 days",
        }
    }

    /// Chart label for one date. Weekday names read well across a week; a
    /// month of them would not, so the 30-day window labels by day-of-month.
    pub fn label_for(&self, date: NaiveDate) -> String {
        match self {
            Window::Week => date.format("%a").to_string(),
            Window::Month => date.format("%d").to_string(),
        }
    }
}

/// `days` consecutive calendar dates ending at and including `today`,
/// newest first. Callers pin `today` once, so every date in one window
/// shares the same anchor. Calendar arithmetic, not 24h offsets.
pub fn trailing_dates(today: NaiveDate, days: u32) -> Vec<NaiveDate> {
    (0..days as i64)
        .map(|offset| today - Duration::days(offset))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn window_lengths() {
        let today = day(2024, 5, 15);
        assert_eq!(trailing_dates(today, 7).len(), 7);
        assert_eq!(trailing_dates(today, 30).len(), 30);
    }

    #[test]
    fn newest_first_and_includes_today() {
        let today = day(2024, 5, 15);
        let dates = trailing_dates(today, 7);
        assert_eq!(dates[0], today);
        assert_eq!(*dates.last().unwrap(), day(2024, 5, 9));
    }

    #[test]
    fn dates_are_distinct_and_consecutive() {
        let today = day(2024, 3, 3);
        let dates = trailing_dates(today, 30);
        for pair in dates.windows(2) {
            assert_eq!(pair[0] - pair[1], Duration::days(1));
        }
        // Crosses into February of a leap year.
        assert_eq!(*dates.last().unwrap(), day(2024, 2, 3));
    }

    #[test]
    fn single_day_window_is_just_today() {
        let today = day(2024, 5, 15);
        assert_eq!(trailing_dates(today, 1), vec![today]);
    }

    #[test]
    fn labels_by_window() {
        let sunday = day(2024, 5, 12);
        assert_eq!(Window::Week.label_for(sunday), "Sun");
        assert_eq!(Window::Month.label_for(sunday), "12");
    }
}
