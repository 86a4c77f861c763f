//! Season profiles and the month → season classifier.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::error::{EngineResult, ErrorContext, SeriesError};

/// Season identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeasonKey {
    Pre,
    Monsoon,
    Post,
}

impl SeasonKey {
    pub fn as_str(self) -> &'static str {
        match self {
            SeasonKey::Pre => "pre",
            SeasonKey::Monsoon => "monsoon",
            SeasonKey::Post => "post",
        }
    }
}

impl fmt::Display for SeasonKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named group of calendar months with ambient and panel temperature bounds (°C).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonProfile {
    pub key: SeasonKey,
    pub label: String,
    /// 0-based month indices (January = 0).
    pub months: Vec<u32>,
    pub ambient_low: f64,
    pub ambient_high: f64,
    pub panel_low: f64,
    pub panel_high: f64,
}

impl SeasonProfile {
    pub fn covers_month(&self, month0: u32) -> bool {
        self.months.contains(&month0)
    }
}

/// Ordered list of season profiles with a derived month lookup table.
///
/// Classification is equivalent to scanning the profiles in order and taking
/// the first one that covers the month. The table is built once so lookups
/// don't repeat the scan.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonCatalog {
    profiles: Vec<SeasonProfile>,
    by_month: [Option<usize>; 12],
}

impl SeasonCatalog {
    /// Build a catalog after validating the profiles.
    ///
    /// Rejects an empty catalog, duplicate keys, month indices outside 0..=11,
    /// months claimed by two profiles, and bounds where low exceeds high.
    /// Uncovered months are allowed but logged, since they route through the
    /// fallback in [`SeasonCatalog::classify`].
    pub fn new(profiles: Vec<SeasonProfile>) -> EngineResult<Self> {
        if profiles.is_empty() {
            return Err(SeriesError::configuration_with_context(
                "season catalog must contain at least one profile",
                ErrorContext::new("build_catalog"),
            ));
        }

        let mut keys = BTreeSet::new();
        let mut by_month: [Option<usize>; 12] = [None; 12];

        for (idx, profile) in profiles.iter().enumerate() {
            let ctx = || ErrorContext::new("build_catalog").with_input(profile.key.as_str());

            if !keys.insert(profile.key) {
                return Err(SeriesError::configuration_with_context(
                    format!("duplicate season key '{}'", profile.key),
                    ctx(),
                ));
            }
            let bounds = [
                profile.ambient_low,
                profile.ambient_high,
                profile.panel_low,
                profile.panel_high,
            ];
            if bounds.iter().any(|b| !b.is_finite()) {
                return Err(SeriesError::configuration_with_context(
                    format!("season '{}' has a non-finite temperature bound", profile.key),
                    ctx(),
                ));
            }
            if profile.ambient_low > profile.ambient_high || profile.panel_low > profile.panel_high
            {
                return Err(SeriesError::configuration_with_context(
                    format!("season '{}' has a low bound above its high bound", profile.key),
                    ctx(),
                ));
            }
            for &month in &profile.months {
                let Some(slot) = by_month.get_mut(month as usize) else {
                    return Err(SeriesError::configuration_with_context(
                        format!("month index {} is outside 0..=11", month),
                        ctx(),
                    ));
                };
                if let Some(owner) = *slot {
                    if owner != idx {
                        return Err(SeriesError::configuration_with_context(
                            format!(
                                "month index {} is claimed by both '{}' and '{}'",
                                month, profiles[owner].key, profile.key
                            ),
                            ctx(),
                        ));
                    }
                }
                *slot = Some(idx);
            }
        }

        let uncovered: Vec<u32> = (0..12u32)
            .filter(|m| by_month[*m as usize].is_none())
            .collect();
        if !uncovered.is_empty() {
            log::warn!(
                "Season catalog leaves months {:?} uncovered; they classify as '{}'",
                uncovered,
                profiles[profiles.len() - 1].key
            );
        }

        Ok(Self { profiles, by_month })
    }

    /// Profiles in priority order.
    pub fn profiles(&self) -> &[SeasonProfile] {
        &self.profiles
    }

    pub fn keys(&self) -> impl Iterator<Item = SeasonKey> + '_ {
        self.profiles.iter().map(|p| p.key)
    }

    pub fn get(&self, key: SeasonKey) -> Option<&SeasonProfile> {
        self.profiles.iter().find(|p| p.key == key)
    }

    /// True when every month resolves without the fallback.
    pub fn is_exhaustive(&self) -> bool {
        self.by_month.iter().all(Option::is_some)
    }

    /// Season for a 0-based month index, or `None` when no profile covers it.
    pub fn lookup_month(&self, month0: u32) -> Option<&SeasonProfile> {
        self.by_month
            .get(month0 as usize)
            .copied()
            .flatten()
            .map(|idx| &self.profiles[idx])
    }

    /// Season for a calendar date.
    ///
    /// Falls back to the last profile when the month is uncovered. This is a
    /// defensive default for non-exhaustive configured catalogs; the default
    /// catalog never reaches it.
    pub fn classify(&self, date: NaiveDate) -> &SeasonProfile {
        match self.lookup_month(date.month0()) {
            Some(profile) => profile,
            None => {
                let fallback = &self.profiles[self.profiles.len() - 1];
                log::warn!(
                    "No season covers {}; falling back to '{}'",
                    date,
                    fallback.key
                );
                fallback
            }
        }
    }
}

impl Default for SeasonCatalog {
    fn default() -> Self {
        let profiles = default_profiles();
        let mut by_month = [None; 12];
        for (idx, profile) in profiles.iter().enumerate() {
            for &month in &profile.months {
                by_month[month as usize].get_or_insert(idx);
            }
        }
        Self { profiles, by_month }
    }
}

/// Bangladesh demo seasons: pre-monsoon Mar–May, monsoon Jun–Sep, and
/// post-monsoon Oct–Feb (wrapping inside the same calendar year).
pub fn default_profiles() -> Vec<SeasonProfile> {
    vec![
        SeasonProfile {
            key: SeasonKey::Pre,
            label: "Pre Monsoon".to_string(),
            months: vec![2, 3, 4],
            ambient_low: 29.0,
            ambient_high: 42.0,
            panel_low: 44.0,
            panel_high: 89.0,
        },
        SeasonProfile {
            key: SeasonKey::Monsoon,
            label: "Monsoon".to_string(),
            months: vec![5, 6, 7, 8],
            ambient_low: 28.0,
            ambient_high: 40.0,
            panel_low: 49.0,
            panel_high: 82.0,
        },
        SeasonProfile {
            key: SeasonKey::Post,
            label: "Post Monsoon".to_string(),
            months: vec![9, 10, 11, 0, 1],
            ambient_low: 18.0,
            ambient_high: 35.0,
            panel_low: 39.0,
            panel_high: 76.0,
        },
    ]
}
