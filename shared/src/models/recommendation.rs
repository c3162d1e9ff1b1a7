//! Crop and fertilizer recommendation models

use serde::{Deserialize, Serialize};
use validator::Validate;

/// User-supplied inputs for a fertilizer recommendation.
///
/// Temperature and humidity are intentionally absent: they come from the
/// live weather reading for the farmer's coordinates, never from the form.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct FertilizerInput {
    #[validate(range(min = 0.0, max = 500.0))]
    pub nitrogen: f64,
    #[validate(range(min = 0.0, max = 500.0))]
    pub phosphorus: f64,
    #[validate(range(min = 0.0, max = 500.0))]
    pub potassium: f64,
    #[validate(range(min = 0.0, max = 100.0))]
    pub moisture: f64,
    /// Must belong to the trained soil-type vocabulary
    #[validate(length(min = 1))]
    pub soil_type: String,
    /// Must belong to the trained crop-type vocabulary
    #[validate(length(min = 1))]
    pub crop_type: String,
}

/// User-supplied inputs for a crop recommendation.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CropInput {
    #[validate(range(min = 0.0, max = 500.0))]
    pub nitrogen: f64,
    #[validate(range(min = 0.0, max = 500.0))]
    pub phosphorus: f64,
    #[validate(range(min = 0.0, max = 500.0))]
    pub potassium: f64,
    #[validate(range(min = 0.0, max = 14.0))]
    pub ph: f64,
    #[validate(range(min = 0.0, max = 1000.0))]
    pub rainfall_mm: f64,
}

/// A recommendation produced by one of the pre-trained classifiers,
/// together with the weather reading that fed the feature vector.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub label: String,
    pub temperature_c: f64,
    pub humidity_pct: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn fertilizer_input_rejects_empty_soil_type() {
        let input = FertilizerInput {
            nitrogen: 12.0,
            phosphorus: 10.0,
            potassium: 20.0,
            moisture: 40.0,
            soil_type: String::new(),
            crop_type: "Maize".to_string(),
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn crop_input_rejects_out_of_range_ph() {
        let input = CropInput {
            nitrogen: 90.0,
            phosphorus: 42.0,
            potassium: 43.0,
            ph: 15.2,
            rainfall_mm: 202.9,
        };
        assert!(input.validate().is_err());
    }
}
