//! Produce marketplace models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// A produce listing on the marketplace
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProduceListing {
    pub id: Uuid,
    pub farmer_id: Uuid,
    pub crop: String,
    pub quantity: Decimal,
    pub unit: String,
    pub price_per_unit: Decimal,
    pub listed_at: DateTime<Utc>,
}

/// Input for creating a produce listing
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProduceInput {
    #[validate(length(min = 1, max = 100))]
    pub crop: String,
    #[validate(custom = "crate::validation::validate_positive_decimal")]
    pub quantity: Decimal,
    #[validate(custom = "crate::validation::validate_positive_decimal")]
    pub price_per_unit: Decimal,
}
