//! Weather data models

use serde::{Deserialize, Serialize};

/// A current-conditions reading for a location.
///
/// Produced fresh on every lookup and never persisted. Callers that can
/// render a degraded page should use [`WeatherReading::unknown`] as the
/// fallback value instead of failing the whole request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherReading {
    /// Condition group from the provider, e.g. "Clear", "Rain"
    pub condition: String,
    pub temperature_c: f64,
    pub humidity_pct: f64,
    pub wind_speed_mps: f64,
    pub pressure_hpa: f64,
}

impl WeatherReading {
    /// Sentinel value returned when the weather provider is unreachable,
    /// returns a malformed payload, or no API key is configured.
    pub fn unknown() -> Self {
        Self {
            condition: "Unknown".to_string(),
            temperature_c: 0.0,
            humidity_pct: 0.0,
            wind_speed_mps: 0.0,
            pressure_hpa: 0.0,
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.condition == "Unknown"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_reading_is_zeroed() {
        let reading = WeatherReading::unknown();
        assert_eq!(reading.condition, "Unknown");
        assert_eq!(reading.temperature_c, 0.0);
        assert_eq!(reading.humidity_pct, 0.0);
        assert_eq!(reading.wind_speed_mps, 0.0);
        assert_eq!(reading.pressure_hpa, 0.0);
        assert!(reading.is_unknown());
    }
}
