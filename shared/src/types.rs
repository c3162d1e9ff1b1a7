//! Common types used across the platform

use serde::{Deserialize, Serialize};

/// Quantity unit for produce listings. Listings are recorded in quintals;
/// the enum leaves room for other units without a schema change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum QuantityUnit {
    #[default]
    Quintals,
    Kilograms,
    Tonnes,
}

impl QuantityUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuantityUnit::Quintals => "quintals",
            QuantityUnit::Kilograms => "kilograms",
            QuantityUnit::Tonnes => "tonnes",
        }
    }
}
