use crate::api::{DataPoint, SeasonCoverage, SeriesData, SeriesSummary};
use crate::models::SeasonCatalog;
use crate::services::synthesizer::round1;

/// Lowest demo score.
pub const DEMO_SCORE_MIN: f64 = 5.0;
/// Highest demo score.
pub const DEMO_SCORE_MAX: f64 = 10.0;

/// Presentation score derived from the average panel/ambient delta.
///
/// Bigger deltas mean more potential gain from panel cooling. This is a
/// display heuristic in `[5, 10]`, not a calibrated physical model.
pub fn demo_score(avg_delta: f64) -> f64 {
    let boost = (((avg_delta - 25.0) / 10.0).max(0.0) * 2.0).min(5.0);
    round1(DEMO_SCORE_MIN + boost).clamp(DEMO_SCORE_MIN, DEMO_SCORE_MAX)
}

/// Format a percentage value with one decimal, e.g. `7.5%`.
pub fn format_percent(x: f64) -> String {
    format!("{}%", round1(x))
}

fn max_of(points: &[DataPoint], f: impl Fn(&DataPoint) -> f64) -> f64 {
    if points.is_empty() {
        return 0.0;
    }
    points.iter().map(f).fold(f64::NEG_INFINITY, f64::max)
}

/// Share of samples per season, in catalog order, skipping unseen seasons.
pub fn season_coverage(data: &SeriesData, catalog: &SeasonCatalog) -> Vec<SeasonCoverage> {
    let total = data.points.len();
    if total == 0 {
        return vec![];
    }

    catalog
        .profiles()
        .iter()
        .filter_map(|profile| {
            let count = data.season_mix.get(&profile.key).copied().unwrap_or(0);
            if count == 0 {
                return None;
            }
            let ratio = count as f64 / total as f64;
            Some(SeasonCoverage {
                key: profile.key,
                label: profile.label.clone(),
                count,
                ratio,
                percent: (ratio * 100.0).round() as u32,
            })
        })
        .collect()
}

/// Reduce a synthesized series into the dashboard summary.
pub fn summarize(data: &SeriesData, catalog: &SeasonCatalog) -> SeriesSummary {
    let points = &data.points;

    let avg_delta = if points.is_empty() {
        0.0
    } else {
        points.iter().map(|p| p.delta).sum::<f64>() / points.len() as f64
    };

    SeriesSummary {
        max_delta: max_of(points, |p| p.delta),
        avg_delta,
        peak_ambient: max_of(points, |p| p.ambient),
        peak_panel: max_of(points, |p| p.panel),
        season_mix: data.season_mix.clone(),
        coverage: season_coverage(data, catalog),
        demo_score: demo_score(avg_delta),
    }
}
