use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{EngineResult, SeriesError};
use crate::models::{SeasonKey, WindowSelector};
use crate::services::SeriesEngine;

// =========================================================
// Series types + route
// =========================================================

/// One synthesized sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    /// Axis label (hour, weekday, day or month depending on the window)
    pub tick_label: String,
    pub date: NaiveDate,
    /// Ambient temperature (°C)
    pub ambient: f64,
    /// Panel temperature (°C), never below `ambient`
    pub panel: f64,
    /// `panel - ambient`, never negative
    pub delta: f64,
    pub season: SeasonKey,
    pub season_label: String,
}

/// Complete series for one `(anchor, window)` request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesData {
    pub window: WindowSelector,
    pub range_start: NaiveDate,
    pub range_end: NaiveDate,
    pub range_label: String,
    pub points: Vec<DataPoint>,
    /// Samples per season; every catalog season is present.
    pub season_mix: BTreeMap<SeasonKey, usize>,
}

/// Share of the visible samples that fall in one season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonCoverage {
    pub key: SeasonKey,
    pub label: String,
    pub count: usize,
    pub ratio: f64,
    /// `ratio` as a whole percentage
    pub percent: u32,
}

/// Summary statistics shown on the dashboard cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSummary {
    pub max_delta: f64,
    pub avg_delta: f64,
    pub peak_ambient: f64,
    pub peak_panel: f64,
    pub season_mix: BTreeMap<SeasonKey, usize>,
    pub coverage: Vec<SeasonCoverage>,
    /// Display heuristic in `[5, 10]`
    pub demo_score: f64,
}

impl SeriesSummary {
    /// Coverage rendered for display, e.g. `Pre Monsoon: 25% · Monsoon: 33%`.
    pub fn coverage_line(&self) -> String {
        self.coverage
            .iter()
            .map(|c| format!("{}: {}%", c.label, c.percent))
            .collect::<Vec<_>>()
            .join(" · ")
    }
}

/// Series together with its summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesReport {
    pub series: SeriesData,
    pub summary: SeriesSummary,
}

/// Route function name constant for series
pub const GET_SERIES_DATA: &str = "get_series_data";

/// Parse a `YYYY-MM-DD` anchor string.
pub fn parse_anchor(input: &str) -> EngineResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|e| SeriesError::invalid_anchor(input, e.to_string()))
}

/// Get the series report for string-typed dashboard input.
///
/// The window is validated before anything is computed. A missing anchor
/// defaults to January 1st of the reference year.
pub fn get_series_data(
    engine: &SeriesEngine,
    anchor: Option<&str>,
    window: &str,
) -> EngineResult<SeriesReport> {
    let window: WindowSelector = window.parse()?;
    let anchor = match anchor {
        Some(raw) => parse_anchor(raw)?,
        None => engine.reference_year().first_day(),
    };
    Ok(engine.report(anchor, window))
}
