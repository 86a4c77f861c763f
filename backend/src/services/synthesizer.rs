//! Deterministic seasonal waveform synthesis.
//!
//! Each sample interpolates between a season's low and high bounds using a
//! half-sine weight, so values rise from the window edges to a peak at its
//! midpoint (the midday peak for the day window). No randomness is involved.

use std::collections::BTreeMap;
use std::f64::consts::PI;

use crate::api::{DataPoint, SeriesData};
use crate::models::{SeasonCatalog, SeasonKey};
use crate::services::window_resolver::SamplePlan;

/// Linear interpolation between `a` and `b`.
pub fn lerp(a: f64, b: f64, w: f64) -> f64 {
    a + (b - a) * w
}

/// Round to one decimal place.
pub fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Half-sine weight: 0 at both edges, 1 at `t = 0.5`.
pub fn waveform_weight(t: f64) -> f64 {
    (t * PI).sin()
}

/// Synthesize every sample of `plan`.
///
/// `season_mix` starts with every catalog key at zero so callers can rely on
/// all seasons being present.
pub fn synthesize(plan: &SamplePlan, catalog: &SeasonCatalog) -> SeriesData {
    let mut season_mix: BTreeMap<SeasonKey, usize> = catalog.keys().map(|k| (k, 0)).collect();
    let mut points = Vec::with_capacity(plan.point_count());

    for index in 0..plan.point_count() {
        let date = plan.sample_date(index);
        let profile = catalog.classify(date);
        *season_mix.entry(profile.key).or_insert(0) += 1;

        let w = waveform_weight(plan.position(index));
        let ambient = round1(lerp(profile.ambient_low, profile.ambient_high, w));
        // Panel never drops below ambient, even if a profile's ranges cross.
        let panel = round1(ambient.max(lerp(profile.panel_low, profile.panel_high, w)));
        let delta = round1(panel - ambient);

        points.push(DataPoint {
            tick_label: plan.tick_label(index),
            date,
            ambient,
            panel,
            delta,
            season: profile.key,
            season_label: profile.label.clone(),
        });
    }

    SeriesData {
        window: plan.window(),
        range_start: plan.range_start(),
        range_end: plan.range_end(),
        range_label: plan.range_label().to_string(),
        points,
        season_mix,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{default_profiles, ReferenceYear, SeasonProfile, WindowSelector};
    use crate::services::window_resolver::resolve;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_round1() {
        assert_eq!(round1(35.54), 35.5);
        assert_eq!(round1(35.55000001), 35.6);
        assert_eq!(round1(18.0), 18.0);
        assert_eq!(round1(0.04), 0.0);
    }

    #[test]
    fn test_lerp_and_weight() {
        assert_eq!(lerp(10.0, 20.0, 0.0), 10.0);
        assert_eq!(lerp(10.0, 20.0, 1.0), 20.0);
        assert_eq!(lerp(10.0, 20.0, 0.25), 12.5);
        assert!(waveform_weight(0.0).abs() < 1e-12);
        assert!(waveform_weight(1.0).abs() < 1e-12);
        assert!(approx(waveform_weight(0.5), 1.0));
    }

    #[test]
    fn test_pre_monsoon_day_values() {
        let catalog = SeasonCatalog::default();
        let plan = resolve(date(2025, 4, 15), WindowSelector::Day, ReferenceYear::default());
        let data = synthesize(&plan, &catalog);

        let ambient: Vec<f64> = data.points.iter().map(|p| p.ambient).collect();
        let panel: Vec<f64> = data.points.iter().map(|p| p.panel).collect();
        let expected_ambient = [29.0, 35.5, 40.3, 42.0, 40.3, 35.5, 29.0];
        let expected_panel = [44.0, 66.5, 83.0, 89.0, 83.0, 66.5, 44.0];
        for i in 0..7 {
            assert!(approx(ambient[i], expected_ambient[i]), "ambient[{i}]={}", ambient[i]);
            assert!(approx(panel[i], expected_panel[i]), "panel[{i}]={}", panel[i]);
        }
        assert!(approx(data.points[3].delta, 47.0));
        assert!(data.points.iter().all(|p| p.season_label == "Pre Monsoon"));
        assert_eq!(data.season_mix[&SeasonKey::Pre], 7);
        assert_eq!(data.season_mix[&SeasonKey::Monsoon], 0);
        assert_eq!(data.season_mix[&SeasonKey::Post], 0);
    }

    #[test]
    fn test_year_series_values() {
        let catalog = SeasonCatalog::default();
        let plan = resolve(date(2025, 6, 1), WindowSelector::Year, ReferenceYear::default());
        let data = synthesize(&plan, &catalog);

        assert_eq!(data.points.len(), 12);
        assert_eq!(data.range_label, "Jan-Dec 2025");
        assert!(approx(data.points[0].ambient, 18.0));
        assert!(approx(data.points[0].panel, 39.0));
        assert!(approx(data.points[4].ambient, 40.8));
        assert!(approx(data.points[4].panel, 84.9));
        assert!(approx(data.points[4].delta, 44.1));
        assert_eq!(data.points[4].tick_label, "May");
        assert_eq!(data.points[4].season, SeasonKey::Pre);
        assert_eq!(data.season_mix[&SeasonKey::Post], 5);
        assert_eq!(data.season_mix[&SeasonKey::Pre], 3);
        assert_eq!(data.season_mix[&SeasonKey::Monsoon], 4);
    }

    #[test]
    fn test_dominance_when_ranges_cross() {
        // Panel bounds sit entirely below ambient bounds.
        let profiles = vec![SeasonProfile {
            key: SeasonKey::Post,
            label: "Inverted".to_string(),
            months: (0..12).collect(),
            ambient_low: 40.0,
            ambient_high: 50.0,
            panel_low: 10.0,
            panel_high: 20.0,
        }];
        let catalog = SeasonCatalog::new(profiles).unwrap();
        let plan = resolve(date(2025, 1, 1), WindowSelector::Year, ReferenceYear::default());
        let data = synthesize(&plan, &catalog);

        for p in &data.points {
            assert_eq!(p.panel, p.ambient);
            assert_eq!(p.delta, 0.0);
        }
    }

    #[test]
    fn test_season_mix_keeps_unseen_keys() {
        let catalog = SeasonCatalog::new(default_profiles()).unwrap();
        let plan = resolve(date(2025, 7, 1), WindowSelector::Week, ReferenceYear::default());
        let data = synthesize(&plan, &catalog);
        assert_eq!(data.season_mix.len(), 3);
        assert_eq!(data.season_mix[&SeasonKey::Monsoon], 7);
        assert_eq!(data.season_mix.values().sum::<usize>(), data.points.len());
    }

    #[test]
    fn test_synthesis_is_deterministic() {
        let catalog = SeasonCatalog::default();
        let plan = resolve(date(2025, 9, 17), WindowSelector::HalfYear, ReferenceYear::default());
        let a = synthesize(&plan, &catalog);
        let b = synthesize(&plan, &catalog);
        assert_eq!(a, b);
    }
}
