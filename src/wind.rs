use crate::geodesy;
use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Deserialize)]
struct WeatherReport {
    wind: Option<WindSection>,
}

#[derive(Deserialize)]
struct WindSection {
    // m/s
    speed: f64,
    deg: Option<f64>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WindReading {
    pub speed_kn: f64,
    pub direction_deg: f64,
}

impl WindReading {
    /// Decodes a current weather document (metric units). Returns `None` when
    /// the report carries no wind data.
    pub fn from_weather_json(json: &str) -> Result<Option<WindReading>> {
        let report: WeatherReport =
            serde_json::from_str(json).context("failed to parse weather report")?;
        Ok(report.wind.map(|wind| WindReading {
            speed_kn: geodesy::meters_per_second_to_knots(wind.speed.max(0.0)),
            direction_deg: wind.deg.unwrap_or(0.0),
        }))
    }

    pub fn speed_label(&self) -> String {
        format!("{:.1} kn", self.speed_kn)
    }

    pub fn direction_label(&self) -> String {
        format!("{}°", self.direction_deg)
    }
}
