//! Recommendation handlers
//!
//! Both endpoints bind a weather reading before invoking the model, on
//! every code path; temperature and humidity never come from the form.

use axum::{extract::State, Json};
use shared::{CropInput, FertilizerInput, Recommendation};
use validator::Validate;

use crate::error::AppResult;
use crate::middleware::CurrentUser;
use crate::AppState;

/// Recommend a crop from soil chemistry plus live weather
pub async fn recommend_crop(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Json(input): Json<CropInput>,
) -> AppResult<Json<Recommendation>> {
    input.validate()?;
    let user = current_user.0;

    let weather = state
        .weather
        .current_or_unknown(user.latitude, user.longitude)
        .await;

    let recommendation = state.recommendations.recommend_crop(&input, &weather)?;
    Ok(Json(recommendation))
}

/// Recommend a fertilizer from field conditions plus live weather.
///
/// An unknown soil or crop type answers 422 with the offending field;
/// the model is not consulted in that case.
pub async fn recommend_fertilizer(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Json(input): Json<FertilizerInput>,
) -> AppResult<Json<Recommendation>> {
    input.validate()?;
    let user = current_user.0;

    let weather = state
        .weather
        .current_or_unknown(user.latitude, user.longitude)
        .await;

    let recommendation = state
        .recommendations
        .recommend_fertilizer(&input, &weather)?;
    Ok(Json(recommendation))
}
