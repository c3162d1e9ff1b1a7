//! Plant disease diagnosis handler

use axum::extract::{Multipart, State};
use axum::Json;
use shared::DiagnosisResult;

use crate::error::{AppError, AppResult};
use crate::middleware::CurrentUser;
use crate::AppState;

/// Diagnose a plant disease from an uploaded leaf image.
///
/// Expects a multipart form with an `image` part. The diagnosis itself
/// never fails; only a missing or unreadable upload is a client error.
pub async fn diagnose_plant(
    State(state): State<AppState>,
    _current_user: CurrentUser,
    mut multipart: Multipart,
) -> AppResult<Json<DiagnosisResult>> {
    let mut image: Option<(Vec<u8>, String)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidInput(format!("malformed multipart body: {}", e)))?
    {
        if field.name() == Some("image") {
            let mime_type = field
                .content_type()
                .unwrap_or("image/jpeg")
                .to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::InvalidInput(format!("unreadable image upload: {}", e)))?;
            image = Some((bytes.to_vec(), mime_type));
        }
    }

    let (bytes, mime_type) =
        image.ok_or_else(|| AppError::InvalidInput("missing 'image' part".to_string()))?;
    if bytes.is_empty() {
        return Err(AppError::InvalidInput("empty image upload".to_string()));
    }

    let result = state.diagnosis.diagnose(&bytes, &mime_type).await;
    Ok(Json(result))
}
