use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SeriesError;

/// Time window selected on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WindowSelector {
    #[serde(rename = "1d")]
    Day,
    #[serde(rename = "1w")]
    Week,
    #[serde(rename = "1m")]
    Month,
    #[serde(rename = "3m")]
    Quarter,
    #[serde(rename = "6m")]
    HalfYear,
    #[serde(rename = "12m")]
    Year,
}

impl WindowSelector {
    /// All selectors, shortest span first.
    pub const ALL: [WindowSelector; 6] = [
        WindowSelector::Day,
        WindowSelector::Week,
        WindowSelector::Month,
        WindowSelector::Quarter,
        WindowSelector::HalfYear,
        WindowSelector::Year,
    ];

    /// Number of samples the window produces.
    pub fn point_count(self) -> usize {
        match self {
            WindowSelector::Day => 7,
            WindowSelector::Week => 7,
            WindowSelector::Month => 6,
            WindowSelector::Quarter => 3,
            WindowSelector::HalfYear => 6,
            WindowSelector::Year => 12,
        }
    }

    /// Months spanned by month-stepping windows, `None` for the others.
    pub fn month_span(self) -> Option<u32> {
        match self {
            WindowSelector::Quarter => Some(3),
            WindowSelector::HalfYear => Some(6),
            WindowSelector::Year => Some(12),
            _ => None,
        }
    }

    /// Whether the anchor date affects the resolved range.
    pub fn uses_anchor(self) -> bool {
        self != WindowSelector::Year
    }

    /// Dashboard code for the selector.
    pub fn as_code(self) -> &'static str {
        match self {
            WindowSelector::Day => "1d",
            WindowSelector::Week => "1w",
            WindowSelector::Month => "1m",
            WindowSelector::Quarter => "3m",
            WindowSelector::HalfYear => "6m",
            WindowSelector::Year => "12m",
        }
    }
}

impl fmt::Display for WindowSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

impl FromStr for WindowSelector {
    type Err = SeriesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1d" | "day" => Ok(WindowSelector::Day),
            "1w" | "week" => Ok(WindowSelector::Week),
            "1m" | "month" => Ok(WindowSelector::Month),
            "3m" | "quarter" => Ok(WindowSelector::Quarter),
            "6m" | "half-year" | "halfyear" => Ok(WindowSelector::HalfYear),
            "12m" | "year" => Ok(WindowSelector::Year),
            _ => Err(SeriesError::invalid_window(s)),
        }
    }
}
