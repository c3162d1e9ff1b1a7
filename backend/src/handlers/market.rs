//! Market price handlers

use axum::{extract::State, Json};
use shared::MarketPriceBoard;

use crate::middleware::CurrentUser;
use crate::AppState;

/// Aggregated mandi prices across all tracked states, served from the
/// shared TTL cache.
pub async fn get_market_prices(
    State(state): State<AppState>,
    _current_user: CurrentUser,
) -> Json<MarketPriceBoard> {
    let board = state.market_prices.latest_prices().await;
    Json(board)
}

/// Drop the cached aggregate and refetch immediately
pub async fn refresh_market_prices(
    State(state): State<AppState>,
    _current_user: CurrentUser,
) -> Json<MarketPriceBoard> {
    state.market_prices.invalidate().await;
    let board = state.market_prices.latest_prices().await;
    Json(board)
}
