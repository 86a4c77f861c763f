//! Series engine entry point and caller-side memoization.

use chrono::NaiveDate;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use crate::api::{SeriesData, SeriesReport, SeriesSummary};
use crate::config::SeriesConfig;
use crate::error::EngineResult;
use crate::models::{ReferenceYear, SeasonCatalog, SeasonProfile, WindowSelector};
use crate::services::analytics::summarize;
use crate::services::synthesizer::synthesize;
use crate::services::window_resolver::{resolve, SamplePlan};

/// Immutable synthesis engine holding the injected reference year and catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesEngine {
    reference_year: ReferenceYear,
    catalog: SeasonCatalog,
}

impl SeriesEngine {
    /// Build an engine from validated configuration.
    pub fn new(config: &SeriesConfig) -> EngineResult<Self> {
        let reference_year = ReferenceYear::new(config.reference_year)?;
        let catalog = SeasonCatalog::new(config.seasons.clone())?;
        log::debug!(
            "Series engine ready: year={}, seasons={}",
            reference_year.year(),
            catalog.profiles().len()
        );
        Ok(Self::from_parts(reference_year, catalog))
    }

    pub fn from_parts(reference_year: ReferenceYear, catalog: SeasonCatalog) -> Self {
        Self {
            reference_year,
            catalog,
        }
    }

    pub fn reference_year(&self) -> ReferenceYear {
        self.reference_year
    }

    pub fn catalog(&self) -> &SeasonCatalog {
        &self.catalog
    }

    pub fn resolve(&self, anchor: NaiveDate, window: WindowSelector) -> SamplePlan {
        resolve(anchor, window, self.reference_year)
    }

    pub fn classify(&self, date: NaiveDate) -> &SeasonProfile {
        self.catalog.classify(date)
    }

    /// Synthesize the series for `(anchor, window)`.
    pub fn synthesize_series(&self, anchor: NaiveDate, window: WindowSelector) -> SeriesData {
        let plan = self.resolve(anchor, window);
        synthesize(&plan, &self.catalog)
    }

    pub fn summarize(&self, data: &SeriesData) -> SeriesSummary {
        summarize(data, &self.catalog)
    }

    /// Series plus summary in one call.
    pub fn report(&self, anchor: NaiveDate, window: WindowSelector) -> SeriesReport {
        let series = self.synthesize_series(anchor, window);
        let summary = self.summarize(&series);
        SeriesReport { series, summary }
    }

    /// Cache key under which two requests produce identical output.
    pub fn cache_key(&self, anchor: NaiveDate, window: WindowSelector) -> (NaiveDate, WindowSelector) {
        let anchor = if window.uses_anchor() {
            self.reference_year.clamp(anchor)
        } else {
            self.reference_year.first_day()
        };
        (anchor, window)
    }
}

/// Memoizes series per normalized `(anchor, window)`.
///
/// Purely an optimization for callers that recompute on every interaction
/// (e.g. toggling the window selector back and forth).
#[derive(Clone)]
pub struct SeriesCache {
    engine: Arc<SeriesEngine>,
    entries: Arc<RwLock<HashMap<(NaiveDate, WindowSelector), Arc<SeriesData>>>>,
}

impl SeriesCache {
    pub fn new(engine: Arc<SeriesEngine>) -> Self {
        Self {
            engine,
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub fn engine(&self) -> &SeriesEngine {
        &self.engine
    }

    /// Return the cached series, computing it on first request.
    pub fn get_or_compute(&self, anchor: NaiveDate, window: WindowSelector) -> Arc<SeriesData> {
        let key = self.engine.cache_key(anchor, window);
        if let Some(hit) = self.entries.read().get(&key) {
            return Arc::clone(hit);
        }

        let data = Arc::new(self.engine.synthesize_series(key.0, key.1));
        let mut entries = self.entries.write();
        Arc::clone(entries.entry(key).or_insert(data))
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }
}
