//! Weather handlers

use axum::{extract::State, Json};
use shared::WeatherReading;

use crate::middleware::CurrentUser;
use crate::AppState;

/// Current conditions at the farmer's registered coordinates.
///
/// Always answers 200: provider failures surface as the sentinel
/// "Unknown" reading rather than an error page.
pub async fn get_current_weather(
    State(state): State<AppState>,
    current_user: CurrentUser,
) -> Json<WeatherReading> {
    let user = current_user.0;
    let reading = state
        .weather
        .current_or_unknown(user.latitude, user.longitude)
        .await;
    Json(reading)
}
