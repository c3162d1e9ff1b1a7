//! Route definitions for the AgriDash platform

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check (public)
        .route("/health", get(handlers::health_check))
        // Dashboard landing payload
        .route("/dashboard", get(handlers::get_dashboard))
        // Profile
        .route("/profile", get(handlers::get_profile))
        // Weather
        .route("/weather/current", get(handlers::get_current_weather))
        // News
        .route("/news", get(handlers::get_news))
        // Market prices
        .nest("/market", market_routes())
        // Recommendations
        .nest("/recommend", recommendation_routes())
        // Assistant chat
        .nest("/assistant", assistant_routes())
        // Disease diagnosis
        .route("/diagnosis", post(handlers::diagnose_plant))
        // Produce marketplace
        .nest("/produce", produce_routes())
}

/// Market price routes
fn market_routes() -> Router<AppState> {
    Router::new()
        .route("/prices", get(handlers::get_market_prices))
        .route("/prices/refresh", post(handlers::refresh_market_prices))
}

/// Recommendation routes
fn recommendation_routes() -> Router<AppState> {
    Router::new()
        .route("/crop", post(handlers::recommend_crop))
        .route("/fertilizer", post(handlers::recommend_fertilizer))
}

/// Assistant routes
fn assistant_routes() -> Router<AppState> {
    Router::new()
        .route("/ask", post(handlers::ask_assistant))
        .route(
            "/log",
            get(handlers::get_chat_log).delete(handlers::clear_chat_log),
        )
}

/// Produce marketplace routes
fn produce_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_all_produce).post(handlers::create_listing),
        )
        .route("/mine", get(handlers::list_my_produce))
        .route("/:listing_id", delete(handlers::delete_listing))
}
