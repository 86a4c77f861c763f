//! # OptiSol Series
//!
//! Deterministic demo temperature series for the OptiSol dashboard.
//!
//! Given an anchor date and a time window, the engine produces a reproducible
//! sequence of ambient and panel temperatures for one reference year, shaped
//! by seasonal bounds, plus the summary statistics shown on the dashboard
//! cards. Panel temperature never falls below ambient temperature.
//!
//! ## Architecture
//!
//! - [`models`]: season catalog, window selectors and reference-year calendar helpers
//! - [`services`]: window resolution, waveform synthesis, analytics, engine and cache
//! - [`routes`]: string-typed entry point and the DTOs it returns
//! - [`api`]: re-exports of the DTO types
//! - [`config`]: TOML configuration for the reference year and seasons
//! - [`error`]: error taxonomy
//!
//! ## Example
//!
//! ```
//! use chrono::NaiveDate;
//! use optisol_series::models::WindowSelector;
//! use optisol_series::services::SeriesEngine;
//!
//! let engine = SeriesEngine::default();
//! let anchor = NaiveDate::from_ymd_opt(2025, 4, 15).unwrap();
//! let report = engine.report(anchor, WindowSelector::Day);
//! assert_eq!(report.series.points.len(), 7);
//! assert!(report.series.points.iter().all(|p| p.panel >= p.ambient));
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
