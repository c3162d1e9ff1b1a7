//! Market price models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One mandi price record as returned by the government data API.
///
/// Provider-defined fields (commodity, market, modal price, ...) pass
/// through as an opaque mapping.
pub type MarketRecord = serde_json::Map<String, serde_json::Value>;

/// Aggregated market prices across all tracked jurisdictions.
///
/// Records keep the fixed jurisdiction iteration order; within one
/// jurisdiction they keep the order the provider returned them in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketPriceBoard {
    pub records: Vec<MarketRecord>,
    pub fetched_at: DateTime<Utc>,
}

impl MarketPriceBoard {
    pub fn new(records: Vec<MarketRecord>) -> Self {
        Self {
            records,
            fetched_at: Utc::now(),
        }
    }
}
