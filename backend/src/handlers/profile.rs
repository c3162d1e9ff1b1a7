//! Profile handler

use axum::Json;
use shared::UserProfile;

use crate::middleware::CurrentUser;

/// The logged-in farmer's profile
pub async fn get_profile(current_user: CurrentUser) -> Json<UserProfile> {
    Json(current_user.0)
}
