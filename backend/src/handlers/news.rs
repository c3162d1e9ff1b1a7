//! News handlers

use axum::{extract::State, Json};
use shared::NewsFeed;

use crate::middleware::CurrentUser;
use crate::AppState;

/// Full agricultural news feed, provider order (publish time descending).
/// Degrades to an empty feed when the provider is unavailable.
pub async fn get_news(
    State(state): State<AppState>,
    _current_user: CurrentUser,
) -> Json<NewsFeed> {
    let articles = state.news.agro_news_or_empty().await;
    Json(NewsFeed::new(articles))
}
