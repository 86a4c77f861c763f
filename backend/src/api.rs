//! Public API surface for the series engine.
//!
//! This file consolidates the DTO types handed to the presentation layer.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::routes::series::DataPoint;
pub use crate::routes::series::SeasonCoverage;
pub use crate::routes::series::SeriesData;
pub use crate::routes::series::SeriesReport;
pub use crate::routes::series::SeriesSummary;

pub use crate::error::{EngineResult, ErrorContext, SeriesError};
pub use crate::models::{SeasonKey, SeasonProfile, WindowSelector};
