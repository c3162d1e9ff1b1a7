//! Validation utilities for the AgriDash platform

use rust_decimal::Decimal;
use validator::ValidationError;

/// Validate that a decimal value is strictly positive (quantities, prices)
pub fn validate_positive_decimal(value: &Decimal) -> Result<(), ValidationError> {
    if *value <= Decimal::ZERO {
        return Err(ValidationError::new("must_be_positive"));
    }
    Ok(())
}
