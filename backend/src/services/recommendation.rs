//! Crop and fertilizer recommendation service
//!
//! Assembles fixed-order feature vectors from user input plus a live
//! weather reading and invokes the pre-trained classifiers. Feature
//! order is part of each model's training contract: permuting a column
//! produces silently wrong predictions, so the vectors are built in one
//! place and covered by tests.

use std::sync::Arc;

use shared::{CropInput, FertilizerInput, Recommendation, WeatherReading};

use crate::error::AppResult;
use crate::model::Classifier;
use crate::services::encoder::CategoryEncoders;

/// Recommendation service
#[derive(Clone)]
pub struct RecommendationService {
    encoders: Arc<CategoryEncoders>,
    crop_model: Arc<dyn Classifier>,
    fertilizer_model: Arc<dyn Classifier>,
}

impl RecommendationService {
    pub fn new(
        encoders: Arc<CategoryEncoders>,
        crop_model: Arc<dyn Classifier>,
        fertilizer_model: Arc<dyn Classifier>,
    ) -> Self {
        Self {
            encoders,
            crop_model,
            fertilizer_model,
        }
    }

    /// Recommend a crop for the given soil chemistry and live weather.
    ///
    /// Training-time feature order:
    /// [nitrogen, phosphorus, potassium, temperature, humidity, ph, rainfall]
    pub fn recommend_crop(
        &self,
        input: &CropInput,
        weather: &WeatherReading,
    ) -> AppResult<Recommendation> {
        let features = [
            input.nitrogen,
            input.phosphorus,
            input.potassium,
            weather.temperature_c,
            weather.humidity_pct,
            input.ph,
            input.rainfall_mm,
        ];
        let label = self.crop_model.predict(&features)?;

        Ok(Recommendation {
            label,
            temperature_c: weather.temperature_c,
            humidity_pct: weather.humidity_pct,
        })
    }

    /// Recommend a fertilizer for the given field conditions.
    ///
    /// Categorical fields are encoded first; an out-of-vocabulary soil or
    /// crop type fails before the model is ever invoked.
    ///
    /// Training-time feature order:
    /// [temperature, humidity, moisture, soil, crop, nitrogen, potassium, phosphorus]
    pub fn recommend_fertilizer(
        &self,
        input: &FertilizerInput,
        weather: &WeatherReading,
    ) -> AppResult<Recommendation> {
        let soil_code = self.encoders.soil.encode(&input.soil_type)?;
        let crop_code = self.encoders.crop.encode(&input.crop_type)?;

        let features = [
            weather.temperature_c,
            weather.humidity_pct,
            input.moisture,
            soil_code as f64,
            crop_code as f64,
            input.nitrogen,
            input.potassium,
            input.phosphorus,
        ];
        let label = self.fertilizer_model.predict(&features)?;

        Ok(Recommendation {
            label,
            temperature_c: weather.temperature_c,
            humidity_pct: weather.humidity_pct,
        })
    }
}
