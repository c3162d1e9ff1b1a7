//! Produce marketplace handlers

use axum::{
    extract::{Path, State},
    Json,
};
use shared::{CreateProduceInput, ProduceListing};
use uuid::Uuid;

use crate::error::AppResult;
use crate::middleware::CurrentUser;
use crate::services::ProduceService;
use crate::AppState;

/// List a new produce lot on the marketplace
pub async fn create_listing(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Json(input): Json<CreateProduceInput>,
) -> AppResult<Json<ProduceListing>> {
    let service = ProduceService::new(state.db);
    let listing = service.create_listing(current_user.0.id, input).await?;
    Ok(Json(listing))
}

/// All public listings
pub async fn list_all_produce(
    State(state): State<AppState>,
    _current_user: CurrentUser,
) -> AppResult<Json<Vec<ProduceListing>>> {
    let service = ProduceService::new(state.db);
    let listings = service.list_all().await?;
    Ok(Json(listings))
}

/// The logged-in farmer's listings
pub async fn list_my_produce(
    State(state): State<AppState>,
    current_user: CurrentUser,
) -> AppResult<Json<Vec<ProduceListing>>> {
    let service = ProduceService::new(state.db);
    let listings = service.list_for_farmer(current_user.0.id).await?;
    Ok(Json(listings))
}

/// Delete one of the farmer's listings
pub async fn delete_listing(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(listing_id): Path<Uuid>,
) -> AppResult<Json<()>> {
    let service = ProduceService::new(state.db);
    service.delete_listing(current_user.0.id, listing_id).await?;
    Ok(Json(()))
}
