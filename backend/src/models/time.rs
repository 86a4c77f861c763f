//! Calendar helpers for the reference year.
//!
//! All synthesis happens inside one calendar year. Dates outside that year are
//! clamped to its first or last day instead of being rejected.

use chrono::{Datelike, Days, Months, NaiveDate};

use crate::error::{EngineResult, ErrorContext, SeriesError};

/// Year used by the demo dashboard when nothing else is configured.
pub const DEFAULT_REFERENCE_YEAR: i32 = 2025;

/// A single calendar year that bounds every resolved range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReferenceYear {
    year: i32,
    first: NaiveDate,
    last: NaiveDate,
}

impl ReferenceYear {
    /// Create a reference year. Only years 1..=9999 are accepted.
    pub fn new(year: i32) -> EngineResult<Self> {
        if !(1..=9999).contains(&year) {
            return Err(SeriesError::configuration_with_context(
                format!("reference year {} is outside 1..=9999", year),
                ErrorContext::new("reference_year").with_input(year.to_string()),
            ));
        }
        Ok(Self {
            year,
            first: ymd(year, 1, 1),
            last: ymd(year, 12, 31),
        })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// January 1st.
    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    /// December 31st.
    pub fn last_day(&self) -> NaiveDate {
        self.last
    }

    /// Collapse `date` onto the nearest day inside the year.
    pub fn clamp(&self, date: NaiveDate) -> NaiveDate {
        date.clamp(self.first, self.last)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.first && date <= self.last
    }

    /// First day of the 0-based month `month0` (taken modulo 12).
    pub fn month_start(&self, month0: u32) -> NaiveDate {
        ymd(self.year, month0 % 12 + 1, 1)
    }
}

impl Default for ReferenceYear {
    fn default() -> Self {
        Self {
            year: DEFAULT_REFERENCE_YEAR,
            first: ymd(DEFAULT_REFERENCE_YEAR, 1, 1),
            last: ymd(DEFAULT_REFERENCE_YEAR, 12, 31),
        }
    }
}

/// First day of the month containing `date`.
pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    ymd(date.year(), date.month(), 1)
}

/// Last day of the month containing `date`.
pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    start_of_month(add_months(date, 1))
        .pred_opt()
        .unwrap_or(NaiveDate::MAX)
}

/// Add calendar months, pinning the day to the end of shorter months.
pub fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months))
        .unwrap_or(NaiveDate::MAX)
}

pub fn add_days(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_add_days(Days::new(days)).unwrap_or(NaiveDate::MAX)
}

// Callers only pass in-range components; MIN is never observed.
fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}
