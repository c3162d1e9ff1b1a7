//! Request extractors
//!
//! Authentication lives at the platform edge; by the time a request
//! reaches this service the trusted gateway has stamped the user id on
//! it. The extractor resolves that id to a full profile.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use shared::UserProfile;
use uuid::Uuid;

use crate::error::AppError;
use crate::services::UserService;
use crate::AppState;

/// Header carrying the authenticated user's id
pub const USER_ID_HEADER: &str = "x-user-id";

/// The currently logged-in farmer
pub struct CurrentUser(pub UserProfile);

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user_id = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| Uuid::parse_str(s).ok())
            .ok_or_else(|| {
                AppError::InvalidInput(format!("missing or invalid {} header", USER_ID_HEADER))
            })?;

        let profile = UserService::new(state.db.clone()).get(user_id).await?;
        Ok(CurrentUser(profile))
    }
}
