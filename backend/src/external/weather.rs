//! Weather API client for fetching current conditions
//!
//! Integrates with the OpenWeatherMap current-weather endpoint

use std::time::Duration;

use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use shared::WeatherReading;

use crate::error::{AppError, AppResult};

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

/// OpenWeatherMap API response for current weather
#[derive(Debug, Deserialize)]
struct OwmCurrentResponse {
    weather: Vec<OwmWeather>,
    main: OwmMain,
    wind: OwmWind,
}

#[derive(Debug, Deserialize)]
struct OwmWeather {
    main: String,
}

#[derive(Debug, Deserialize)]
struct OwmMain {
    temp: f64,
    humidity: f64,
    pressure: f64,
}

#[derive(Debug, Deserialize)]
struct OwmWind {
    speed: f64,
}

impl WeatherClient {
    /// Create a new WeatherClient
    pub fn new(api_key: String, base_url: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            api_key,
            base_url,
        }
    }

    /// Create a WeatherClient with a custom base URL (for testing)
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self::new(api_key, base_url)
    }

    /// Fetch current weather conditions by GPS coordinates.
    ///
    /// Fails with a typed error; use [`current_or_unknown`] on paths that
    /// should render a degraded page instead.
    ///
    /// [`current_or_unknown`]: WeatherClient::current_or_unknown
    pub async fn current_weather(
        &self,
        latitude: Decimal,
        longitude: Decimal,
    ) -> AppResult<WeatherReading> {
        if self.api_key.is_empty() {
            return Err(AppError::MissingCredentials("weather".to_string()));
        }

        let url = format!(
            "{}/weather?lat={}&lon={}&appid={}&units=metric",
            self.base_url, latitude, longitude, self.api_key
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Gateway(format!("weather request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Gateway(format!(
                "weather API error: {} - {}",
                status, body
            )));
        }

        let data: OwmCurrentResponse = response
            .json()
            .await
            .map_err(|e| AppError::Gateway(format!("malformed weather response: {}", e)))?;

        Ok(convert_current_response(data))
    }

    /// Fetch current weather, falling back to the sentinel reading on any
    /// failure. Never raises; the degradation is logged.
    pub async fn current_or_unknown(&self, latitude: Decimal, longitude: Decimal) -> WeatherReading {
        match self.current_weather(latitude, longitude).await {
            Ok(reading) => reading,
            Err(e) => {
                tracing::warn!("weather lookup degraded to sentinel: {}", e);
                WeatherReading::unknown()
            }
        }
    }
}

/// Convert the provider response to our reading
fn convert_current_response(data: OwmCurrentResponse) -> WeatherReading {
    WeatherReading {
        condition: data
            .weather
            .first()
            .map(|w| w.main.clone())
            .unwrap_or_else(|| "Unknown".to_string()),
        temperature_c: data.main.temp,
        humidity_pct: data.main.humidity,
        wind_speed_mps: data.wind.speed,
        pressure_hpa: data.main.pressure,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_provider_payload() {
        let raw = r#"{
            "weather": [{"id": 500, "main": "Rain", "description": "light rain", "icon": "10d"}],
            "main": {"temp": 28.4, "feels_like": 31.0, "temp_min": 27.0, "temp_max": 30.0, "pressure": 1004, "humidity": 83},
            "wind": {"speed": 3.6, "deg": 220},
            "name": "Kolkata"
        }"#;

        let data: OwmCurrentResponse = serde_json::from_str(raw).unwrap();
        let reading = convert_current_response(data);

        assert_eq!(reading.condition, "Rain");
        assert_eq!(reading.temperature_c, 28.4);
        assert_eq!(reading.humidity_pct, 83.0);
        assert_eq!(reading.wind_speed_mps, 3.6);
        assert_eq!(reading.pressure_hpa, 1004.0);
    }

    #[tokio::test]
    async fn missing_key_is_a_typed_error() {
        let client = WeatherClient::new(String::new(), "http://localhost:9".to_string());
        let err = client
            .current_weather(Decimal::from(22), Decimal::from(88))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::MissingCredentials(_)));
    }

    #[tokio::test]
    async fn degraded_lookup_returns_sentinel_not_error() {
        let client = WeatherClient::new(String::new(), "http://localhost:9".to_string());
        let reading = client
            .current_or_unknown(Decimal::from(22), Decimal::from(88))
            .await;
        assert_eq!(reading, WeatherReading::unknown());
    }

    #[tokio::test]
    async fn unreachable_provider_degrades_to_sentinel() {
        // Unroutable base URL: the request itself fails, not just the key check
        let client = WeatherClient::with_base_url(
            "key".to_string(),
            "http://127.0.0.1:1/data/2.5".to_string(),
        );
        let reading = client
            .current_or_unknown(Decimal::from(22), Decimal::from(88))
            .await;
        assert!(reading.is_unknown());
    }

    #[test]
    fn empty_weather_array_maps_to_unknown_condition() {
        let raw = r#"{
            "weather": [],
            "main": {"temp": 20.0, "pressure": 1010, "humidity": 50},
            "wind": {"speed": 1.0}
        }"#;

        let data: OwmCurrentResponse = serde_json::from_str(raw).unwrap();
        let reading = convert_current_response(data);
        assert_eq!(reading.condition, "Unknown");
        assert_eq!(reading.temperature_c, 20.0);
    }
}
