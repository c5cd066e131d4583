use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Thresholds used by the fix filter, the track buffer and the instruments.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Fixes closer than this to the last accepted one are discarded.
    pub min_interval_ms: i64,
    /// Movement needed before speed is derived from two fixes (meters).
    pub min_speed_distance_m: f64,
    /// Movement needed before course is derived from two fixes (meters).
    pub min_course_distance_m: f64,
    pub track_capacity: usize,
    /// Accuracy below this is reported as a high quality signal (meters).
    pub high_accuracy_threshold_m: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        NavConfig {
            min_interval_ms: 2000,
            min_speed_distance_m: 0.5,
            min_course_distance_m: 1.0,
            track_capacity: 100,
            high_accuracy_threshold_m: 10.0,
        }
    }
}

impl NavConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: NavConfig = serde_json::from_str(json).context("invalid config json")?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = Self::from_json_str(&content)?;
        info!("loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_interval_ms < 0 {
            bail!("`min_interval_ms` must not be negative");
        }
        for (name, value) in [
            ("min_speed_distance_m", self.min_speed_distance_m),
            ("min_course_distance_m", self.min_course_distance_m),
            ("high_accuracy_threshold_m", self.high_accuracy_threshold_m),
        ] {
            if !value.is_finite() || value < 0.0 {
                bail!("`{name}` must be a non-negative number, got {value}");
            }
        }
        if self.track_capacity == 0 {
            bail!("`track_capacity` must be positive");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::NavConfig;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = NavConfig::from_json_str(r#"{ "track_capacity": 20 }"#).unwrap();
        assert_eq!(config.track_capacity, 20);
        assert_eq!(config.min_interval_ms, 2000);
        assert_eq!(config.min_course_distance_m, 1.0);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(NavConfig::from_json_str(r#"{ "track_capacity": 0 }"#).is_err());
        assert!(NavConfig::from_json_str(r#"{ "min_speed_distance_m": -1.0 }"#).is_err());
        assert!(NavConfig::from_json_str(r#"{ "min_interval_ms": -5 }"#).is_err());
        assert!(NavConfig::from_json_str("not json").is_err());
    }
}
