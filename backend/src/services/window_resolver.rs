//! Resolution of `(anchor, window)` requests into concrete sampling plans.

use chrono::{Datelike, NaiveDate};

use crate::models::{
    add_days, add_months, end_of_month, start_of_month, ReferenceYear, WindowSelector,
};

/// First hour of the intraday solar production window.
pub const DAY_FIRST_HOUR: u32 = 10;

/// Stride between sampled days in the month window.
pub const MONTH_DAY_STRIDE: u32 = 5;

/// Highest sampled day in the month window, valid in every month.
pub const MONTH_DAY_CAP: u32 = 28;

/// Concrete sampling plan for one synthesis call.
///
/// Built by [`resolve`]; the range always lies inside the reference year.
#[derive(Debug, Clone, PartialEq)]
pub struct SamplePlan {
    window: WindowSelector,
    reference_year: ReferenceYear,
    range_start: NaiveDate,
    range_end: NaiveDate,
    point_count: usize,
    range_label: String,
}

impl SamplePlan {
    pub fn window(&self) -> WindowSelector {
        self.window
    }

    pub fn reference_year(&self) -> ReferenceYear {
        self.reference_year
    }

    /// Inclusive start of the resolved range.
    pub fn range_start(&self) -> NaiveDate {
        self.range_start
    }

    /// Inclusive end of the resolved range.
    pub fn range_end(&self) -> NaiveDate {
        self.range_end
    }

    pub fn point_count(&self) -> usize {
        self.point_count
    }

    pub fn range_label(&self) -> &str {
        &self.range_label
    }

    /// Calendar date sampled at `index`.
    pub fn sample_date(&self, index: usize) -> NaiveDate {
        let year = self.reference_year;
        match self.window {
            WindowSelector::Day => self.range_start,
            WindowSelector::Week => year.clamp(add_days(self.range_start, index as u64)),
            WindowSelector::Month => {
                let day = (1 + index as u32 * MONTH_DAY_STRIDE).min(MONTH_DAY_CAP);
                let date = NaiveDate::from_ymd_opt(
                    self.range_start.year(),
                    self.range_start.month(),
                    day,
                )
                .unwrap_or(self.range_start);
                year.clamp(date)
            }
            WindowSelector::Quarter | WindowSelector::HalfYear => {
                year.clamp(add_months(self.range_start, index as u32))
            }
            WindowSelector::Year => year.month_start(index as u32),
        }
    }

    /// Hour of day sampled at `index`, only meaningful for the day window.
    pub fn sample_hour(&self, index: usize) -> Option<u32> {
        match self.window {
            WindowSelector::Day => Some(DAY_FIRST_HOUR + index as u32),
            _ => None,
        }
    }

    /// Axis label for the sample at `index`.
    pub fn tick_label(&self, index: usize) -> String {
        if let Some(hour) = self.sample_hour(index) {
            return format!("{:02}:00", hour);
        }
        let date = self.sample_date(index);
        match self.window {
            WindowSelector::Week => date.format("%a").to_string(),
            WindowSelector::Month => date.format("%b %-d").to_string(),
            _ => date.format("%b").to_string(),
        }
    }

    /// Normalized position of `index` within the window, in `[0, 1]`.
    ///
    /// Degenerate plans with a single point sit at the midpoint.
    pub fn position(&self, index: usize) -> f64 {
        if self.point_count <= 1 {
            0.5
        } else {
            index as f64 / (self.point_count - 1) as f64
        }
    }
}

/// Resolve an anchor date and window into a sampling plan.
///
/// The anchor is clamped into the reference year first; the year window
/// ignores it entirely.
pub fn resolve(anchor: NaiveDate, window: WindowSelector, year: ReferenceYear) -> SamplePlan {
    let anchor = year.clamp(anchor);

    let (range_start, range_end, range_label) = match window {
        WindowSelector::Day => {
            let last_hour = DAY_FIRST_HOUR + window.point_count() as u32 - 1;
            let label = format!(
                "{} ({:02}:00-{:02}:00)",
                anchor.format("%b %-d, %Y"),
                DAY_FIRST_HOUR,
                last_hour
            );
            (anchor, anchor, label)
        }
        WindowSelector::Week => {
            let end = year.clamp(add_days(anchor, 6));
            let label = format!("{}-{}", anchor.format("%b %-d"), end.format("%b %-d, %Y"));
            (anchor, end, label)
        }
        WindowSelector::Month => {
            let start = year.clamp(start_of_month(anchor));
            let end = year.clamp(end_of_month(anchor));
            (start, end, start.format("%b %Y").to_string())
        }
        WindowSelector::Quarter | WindowSelector::HalfYear => {
            let span = window.month_span().unwrap_or(1);
            let start = year.clamp(start_of_month(anchor));
            let end = year.clamp(end_of_month(add_months(start, span - 1)));
            let label = format!("{}-{}", start.format("%b"), end.format("%b %Y"));
            (start, end, label)
        }
        WindowSelector::Year => (
            year.first_day(),
            year.last_day(),
            format!("Jan-Dec {}", year.year()),
        ),
    };

    log::debug!(
        "Resolved window {} at {} to {}..{} ({} points)",
        window,
        anchor,
        range_start,
        range_end,
        window.point_count()
    );

    SamplePlan {
        window,
        reference_year: year,
        range_start,
        range_end,
        point_count: window.point_count(),
        range_label,
    }
}
