//! Series configuration file support.
//!
//! The reference year and the season catalog are injected at engine
//! construction. They can be loaded from a TOML file:
//!
//! ```toml
//! reference_year = 2025
//!
//! [[season]]
//! key = "pre"
//! label = "Pre Monsoon"
//! months = [2, 3, 4]
//! ambient_low = 29.0
//! ambient_high = 42.0
//! panel_low = 44.0
//! panel_high = 89.0
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{EngineResult, ErrorContext, SeriesError};
use crate::models::{default_profiles, ReferenceYear, SeasonCatalog, SeasonProfile, DEFAULT_REFERENCE_YEAR};

/// Environment variable naming a configuration file.
pub const CONFIG_ENV_VAR: &str = "OPTISOL_SERIES_CONFIG";

/// Engine configuration from file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesConfig {
    #[serde(default = "default_reference_year")]
    pub reference_year: i32,
    #[serde(default = "default_profiles", rename = "season")]
    pub seasons: Vec<SeasonProfile>,
}

fn default_reference_year() -> i32 {
    DEFAULT_REFERENCE_YEAR
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            reference_year: default_reference_year(),
            seasons: default_profiles(),
        }
    }
}

impl SeriesConfig {
    /// Parse and validate configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> EngineResult<Self> {
        let config: SeriesConfig = toml::from_str(content).map_err(|e| {
            SeriesError::configuration_with_context(
                format!("Failed to parse config: {}", e),
                ErrorContext::new("load_config"),
            )
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Returns
    /// * `Ok(SeriesConfig)` if the file was read, parsed and validated
    /// * `Err(SeriesError::ConfigurationError)` otherwise
    pub fn from_file<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            SeriesError::configuration_with_context(
                format!("Failed to read config file: {}", e),
                ErrorContext::new("load_config").with_input(path.display().to_string()),
            )
        })?;
        Self::from_toml_str(&content)
            .map_err(|e| e.with_operation(format!("load_config({})", path.display())))
    }

    /// Load configuration from the default location.
    ///
    /// Searches for `series.toml` in:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    pub fn from_default_location() -> EngineResult<Self> {
        let search_paths = [
            PathBuf::from("series.toml"),
            PathBuf::from("backend/series.toml"),
            PathBuf::from("../series.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(SeriesError::configuration(
            "No series.toml found in standard locations",
        ))
    }

    /// Load the file named by `OPTISOL_SERIES_CONFIG`, or use the defaults
    /// when the variable is unset or empty.
    pub fn from_env_or_default() -> EngineResult<Self> {
        match std::env::var(CONFIG_ENV_VAR) {
            Ok(path) if !path.trim().is_empty() => Self::from_file(path.trim()),
            _ => Ok(Self::default()),
        }
    }

    /// Check the reference year and season catalog.
    pub fn validate(&self) -> EngineResult<()> {
        ReferenceYear::new(self.reference_year)?;
        SeasonCatalog::new(self.seasons.clone())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SeasonKey;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = SeriesConfig::from_toml_str("").unwrap();
        assert_eq!(config, SeriesConfig::default());
    }

    #[test]
    fn test_parse_reference_year_only() {
        let config = SeriesConfig::from_toml_str("reference_year = 2026").unwrap();
        assert_eq!(config.reference_year, 2026);
        assert_eq!(config.seasons, default_profiles());
    }

    #[test]
    fn test_parse_custom_seasons() {
        let toml = r#"
reference_year = 2024

[[season]]
key = "monsoon"
label = "Wet"
months = [4, 5, 6, 7, 8, 9]
ambient_low = 26.0
ambient_high = 33.0
panel_low = 40.0
panel_high = 70.0

[[season]]
key = "post"
label = "Dry"
months = [10, 11, 0, 1, 2, 3]
ambient_low = 15.0
ambient_high = 30.0
panel_low = 30.0
panel_high = 65.0
"#;
        let config = SeriesConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.reference_year, 2024);
        assert_eq!(config.seasons.len(), 2);
        assert_eq!(config.seasons[0].key, SeasonKey::Monsoon);
        assert_eq!(config.seasons[1].label, "Dry");
    }

    #[test]
    fn test_rejects_bad_toml() {
        let err = SeriesConfig::from_toml_str("reference_year = \"soon\"").unwrap_err();
        assert!(matches!(err, SeriesError::ConfigurationError { .. }));
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn test_rejects_unknown_season_key() {
        let toml = r#"
[[season]]
key = "winter"
label = "Winter"
months = [0]
ambient_low = 1.0
ambient_high = 2.0
panel_low = 3.0
panel_high = 4.0
"#;
        assert!(SeriesConfig::from_toml_str(toml).is_err());
    }

    #[test]
    fn test_rejects_invalid_year() {
        let err = SeriesConfig::from_toml_str("reference_year = 0").unwrap_err();
        assert!(err.to_string().contains("reference year"));
    }

    #[test]
    fn test_rejects_overlapping_months() {
        let toml = r#"
[[season]]
key = "pre"
label = "A"
months = [0, 1]
ambient_low = 1.0
ambient_high = 2.0
panel_low = 3.0
panel_high = 4.0

[[season]]
key = "post"
label = "B"
months = [1, 2]
ambient_low = 1.0
ambient_high = 2.0
panel_low = 3.0
panel_high = 4.0
"#;
        assert!(SeriesConfig::from_toml_str(toml).is_err());
    }

    fn single_season_toml(ambient_low: &str, panel_high: &str) -> String {
        format!(
            r#"
[[season]]
key = "pre"
label = "Pre Monsoon"
months = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]
ambient_low = {ambient_low}
ambient_high = 42.0
panel_low = 44.0
panel_high = {panel_high}
"#
        )
    }

    #[test]
    fn test_single_season_template_is_valid() {
        let config = SeriesConfig::from_toml_str(&single_season_toml("29.0", "89.0")).unwrap();
        assert_eq!(config.seasons.len(), 1);
    }

    #[test]
    fn test_rejects_nan_bound() {
        let err = SeriesConfig::from_toml_str(&single_season_toml("nan", "89.0")).unwrap_err();
        assert!(matches!(err, SeriesError::ConfigurationError { .. }));
        assert!(err.to_string().contains("non-finite"), "{}", err);
    }

    #[test]
    fn test_rejects_infinite_bounds() {
        for (low, high) in [("29.0", "inf"), ("-inf", "89.0"), ("29.0", "+inf")] {
            let err = SeriesConfig::from_toml_str(&single_season_toml(low, high)).unwrap_err();
            assert!(err.to_string().contains("non-finite"), "{}", err);
        }
    }

    #[test]
    fn test_from_file_missing() {
        let err = SeriesConfig::from_file("/definitely/not/here/series.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("series.toml");
        fs::write(&path, "reference_year = 2023\n").unwrap();
        let config = SeriesConfig::from_file(&path).unwrap();
        assert_eq!(config.reference_year, 2023);
    }

    #[test]
    fn test_serialized_default_parses_back() {
        let text = toml::to_string(&SeriesConfig::default()).unwrap();
        let config = SeriesConfig::from_toml_str(&text).unwrap();
        assert_eq!(config, SeriesConfig::default());
    }
}
