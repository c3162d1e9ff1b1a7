//! Dashboard handler
//!
//! The landing page payload: current weather for the farmer's location,
//! a news teaser, and marketplace counts. Weather and news both degrade
//! rather than failing the page.

use axum::{extract::State, Json};
use serde::Serialize;
use shared::{NewsFeed, NewsItem, ProduceListing, UserProfile, WeatherReading};

use crate::error::AppResult;
use crate::middleware::CurrentUser;
use crate::services::ProduceService;
use crate::AppState;

/// Articles shown in the dashboard teaser
const TEASER_ARTICLES: usize = 3;

#[derive(Serialize)]
pub struct DashboardResponse {
    pub user: UserProfile,
    pub weather: WeatherReading,
    pub news: Vec<NewsItem>,
    pub my_listing_count: usize,
    pub public_listing_count: usize,
    pub last_listing: Option<ProduceListing>,
}

/// Dashboard payload for the logged-in farmer
pub async fn get_dashboard(
    State(state): State<AppState>,
    current_user: CurrentUser,
) -> AppResult<Json<DashboardResponse>> {
    let user = current_user.0;

    let weather = state
        .weather
        .current_or_unknown(user.latitude, user.longitude)
        .await;
    let feed = NewsFeed::new(state.news.agro_news_or_empty().await);

    let produce = ProduceService::new(state.db.clone());
    let my_listings = produce.list_for_farmer(user.id).await?;
    let public_listings = produce.list_all().await?;

    Ok(Json(DashboardResponse {
        last_listing: my_listings.first().cloned(),
        my_listing_count: my_listings.len(),
        public_listing_count: public_listings.len(),
        news: feed.top(TEASER_ARTICLES),
        weather,
        user,
    }))
}
