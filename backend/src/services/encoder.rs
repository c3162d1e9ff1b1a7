//! Categorical encoding for the pre-trained classifiers
//!
//! The fertilizer model was trained with label-encoded soil and crop
//! columns. The vocabularies are built ONCE at process start from the
//! same reference dataset the training pipeline used, then shared
//! read-only behind an `Arc`; rebuilding them per request would be both
//! wasteful and a determinism risk if the file changed underneath us.

use std::collections::BTreeSet;
use std::collections::HashMap;
use std::path::Path;

use crate::error::{AppError, AppResult};

/// Bidirectional mapping between category labels and the small integers
/// the classifier expects. Immutable after construction.
#[derive(Debug, Clone)]
pub struct CategoryEncoder {
    field: String,
    labels: Vec<String>,
    index: HashMap<String, u32>,
}

impl CategoryEncoder {
    /// Build an encoder from observed labels.
    ///
    /// Codes are assigned in sorted-unique order, matching the label
    /// encoding used when the model was trained.
    pub fn fit(field: &str, values: impl IntoIterator<Item = String>) -> Self {
        let unique: BTreeSet<String> = values.into_iter().collect();
        let labels: Vec<String> = unique.into_iter().collect();
        let index = labels
            .iter()
            .enumerate()
            .map(|(i, label)| (label.clone(), i as u32))
            .collect();

        Self {
            field: field.to_string(),
            labels,
            index,
        }
    }

    /// Encode a label to its integer code.
    ///
    /// Out-of-vocabulary input is an explicit error: passing an unseen
    /// label to the model would produce a silently wrong prediction.
    pub fn encode(&self, value: &str) -> AppResult<u32> {
        self.index
            .get(value)
            .copied()
            .ok_or_else(|| AppError::UnknownCategory {
                field: self.field.clone(),
                value: value.to_string(),
            })
    }

    /// All known labels, in code order
    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}

/// The two vocabularies the fertilizer model depends on
#[derive(Debug, Clone)]
pub struct CategoryEncoders {
    pub soil: CategoryEncoder,
    pub crop: CategoryEncoder,
}

impl CategoryEncoders {
    /// Build both vocabularies from the reference dataset.
    ///
    /// The CSV must carry the training-time `Soil Type` and `Crop Type`
    /// columns. Called once at startup; the result is shared read-only.
    pub fn from_csv(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let mut reader = csv::Reader::from_path(path).map_err(|e| {
            AppError::Configuration(format!(
                "cannot read reference dataset {}: {}",
                path.display(),
                e
            ))
        })?;

        let headers = reader
            .headers()
            .map_err(|e| AppError::Configuration(format!("malformed dataset header: {}", e)))?
            .clone();
        let soil_col = column_index(&headers, "Soil Type")?;
        let crop_col = column_index(&headers, "Crop Type")?;

        let mut soils = Vec::new();
        let mut crops = Vec::new();
        for record in reader.records() {
            let record = record
                .map_err(|e| AppError::Configuration(format!("malformed dataset row: {}", e)))?;
            if let Some(soil) = record.get(soil_col) {
                soils.push(soil.trim().to_string());
            }
            if let Some(crop) = record.get(crop_col) {
                crops.push(crop.trim().to_string());
            }
        }

        if soils.is_empty() || crops.is_empty() {
            return Err(AppError::Configuration(
                "reference dataset has no category rows".to_string(),
            ));
        }

        Ok(Self {
            soil: CategoryEncoder::fit("soil_type", soils),
            crop: CategoryEncoder::fit("crop_type", crops),
        })
    }
}

fn column_index(headers: &csv::StringRecord, name: &str) -> AppResult<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| AppError::Configuration(format!("dataset missing '{}' column", name)))
}
