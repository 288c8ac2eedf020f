use anyhow::{anyhow, Result};
use chrono::{Local, NaiveDate};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Format a date as the ISO `YYYY-MM-DD` key used throughout the store.
pub fn iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn parse_iso(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| anyhow!("'{}' is not a valid date (expected YYYY-MM-DD)", s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iso_roundtrip() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 6).unwrap();
        assert_eq!(iso(date), "2024-05-06");
        assert_eq!(parse_iso("2024-05-06").unwrap(), date);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(parse_iso("yesterday").is_err());
        assert!(parse_iso("2024-13-40").is_err());
    }
}
