//! Government market-data client
//!
//! Fetches daily mandi price records from the data.gov.in resource API,
//! one request per state.

use std::time::Duration;

use reqwest::Client;
use shared::MarketRecord;

use crate::error::{AppError, AppResult};

/// Market data API client
#[derive(Clone)]
pub struct MarketDataClient {
    client: Client,
    api_key: String,
    base_url: String,
    resource_id: String,
}

impl MarketDataClient {
    /// Create a new MarketDataClient
    pub fn new(api_key: String, base_url: String, resource_id: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            api_key,
            base_url,
            resource_id,
        }
    }

    /// Fetch all price records for one state, in the order the provider
    /// returns them.
    pub async fn state_prices(&self, state: &str) -> AppResult<Vec<MarketRecord>> {
        if self.api_key.is_empty() {
            return Err(AppError::MissingCredentials("market data".to_string()));
        }

        // The provider expects '+' for spaces inside the filter value.
        let state_param = state.replace(' ', "+");
        let url = format!(
            "{}/{}?api-key={}&format=json&filters%5Bstate%5D={}",
            self.base_url, self.resource_id, self.api_key, state_param
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Gateway(format!("market request for {} failed: {}", state, e)))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(AppError::Gateway(format!(
                "market API error for {}: {}",
                state, status
            )));
        }

        let data: serde_json::Value = response.json().await.map_err(|e| {
            AppError::Gateway(format!("malformed market response for {}: {}", state, e))
        })?;

        let records = data
            .get("records")
            .and_then(|r| r.as_array())
            .ok_or_else(|| {
                AppError::Gateway(format!("'records' array missing for {}", state))
            })?;

        Ok(records
            .iter()
            .filter_map(|r| r.as_object().cloned())
            .collect())
    }
}
