use serde::{Deserialize, Serialize};

/// Weather snapshot for a single city, in metric units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    pub temp_c: f64,
    pub condition: String,
    pub humidity: u8,
    pub wind_kmh: f64,
    pub pressure_mb: f64,
}

impl WeatherRecord {
    pub fn new(
        temp_c: f64,
        condition: impl Into<String>,
        humidity: u8,
        wind_kmh: f64,
        pressure_mb: f64,
    ) -> Self {
        Self { temp_c, condition: condition.into(), humidity, wind_kmh, pressure_mb }
    }
}
