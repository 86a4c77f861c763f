//! Service layer for series synthesis.
//!
//! Services hold the synthesis logic: resolving windows into sampling plans,
//! synthesizing the seasonal waveform, and summarizing the result. The route
//! layer sits on top and handles untyped caller input.

pub mod analytics;
pub mod series;
pub mod synthesizer;
pub mod window_resolver;

pub use analytics::{demo_score, format_percent, summarize};
pub use series::{SeriesCache, SeriesEngine};
pub use synthesizer::synthesize;
pub use window_resolver::{resolve, SamplePlan};
