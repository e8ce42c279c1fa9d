use std::fmt;

use chrono::{Datelike, NaiveDate};

/// A calendar month. Completions and payouts are keyed by its `YYYY-MM` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Period {
    year: i32,
    month: u32,
}

impl Period {
    pub fn new(year: i32, month: u32) -> Result<Self, String> {
        if !(1..=12).contains(&month) {
            return Err(format!("Month must be between 1 and 12, got {month}"));
        }
        if !(1970..=9999).contains(&year) {
            return Err(format!("Year out of range: {year}"));
        }
        Ok(Self { year, month })
    }

    /// Parse separate month and year strings, e.g. `("3", "2024")`.
    pub fn from_parts(month: &str, year: &str) -> Result<Self, String> {
        let month: u32 = month
            .trim()
            .parse()
            .map_err(|_| format!("Invalid month: {month}"))?;
        let year: i32 = year
            .trim()
            .parse()
            .map_err(|_| format!("Invalid year: {year}"))?;
        Self::new(year, month)
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Zero-padded `YYYY-MM` key.
    pub fn key(&self) -> String {
        self.to_string()
    }

    pub fn first_day(&self) -> NaiveDate {
        // year and month are validated on construction
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Half-open `[first day, first day of next month)`.
    pub fn bounds(&self) -> (NaiveDate, NaiveDate) {
        (self.first_day(), self.next().first_day())
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_is_zero_padded() {
        let period = Period::from_parts("3", "2024").unwrap();
        assert_eq!(period.key(), "2024-03");
        assert_eq!(Period::from_parts("03", "2024").unwrap(), period);
    }

    #[test]
    fn rejects_bad_months() {
        assert!(Period::from_parts("0", "2024").is_err());
        assert!(Period::from_parts("13", "2024").is_err());
        assert!(Period::from_parts("march", "2024").is_err());
        assert!(Period::from_parts("3", "twenty").is_err());
    }

    #[test]
    fn december_bounds_roll_into_next_year() {
        let period = Period::new(2024, 12).unwrap();
        let (start, end) = period.bounds();
        assert_eq!(start, NaiveDate::from_ymd_opt(2024, 12, 1).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
    }

    #[test]
    fn containing_uses_date_month() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let period = Period::containing(date);
        assert_eq!(period.key(), "2024-02");
        let (start, end) = period.bounds();
        assert!(start <= date && date < end);
    }
}
