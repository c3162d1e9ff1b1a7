//! AgriDash - Farmer Dashboard Backend Server
//!
//! A dashboard service for farmers: crop and fertilizer recommendations
//! from pre-trained models, live weather, agricultural news, government
//! mandi prices, a produce marketplace, an AI chat helper, and plant
//! disease diagnosis from leaf photos.

use std::{net::SocketAddr, sync::Arc, time::Duration};

use axum::{routing::get, Router};
use sqlx::postgres::PgPoolOptions;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod external;
mod handlers;
mod middleware;
mod model;
mod routes;
mod services;

pub use config::Config;

use external::{GeminiClient, MarketDataClient, NewsClient, WeatherClient};
use model::DecisionTreeModel;
use services::{
    AssistantService, CategoryEncoders, DiagnosisService, MarketPriceService,
    RecommendationService, SessionStore,
};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db: sqlx::PgPool,
    pub config: Arc<Config>,
    pub weather: WeatherClient,
    pub news: NewsClient,
    pub market_prices: MarketPriceService,
    pub recommendations: RecommendationService,
    pub assistant: AssistantService,
    pub diagnosis: DiagnosisService,
    pub sessions: SessionStore,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "agridash_server=debug,tower_http=debug,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::load()?;

    tracing::info!("Starting AgriDash Server");
    tracing::info!("Environment: {}", config.environment);

    // Create database connection pool
    tracing::info!("Connecting to database...");
    let db_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .acquire_timeout(Duration::from_secs(30))
        .connect(&config.database.url)
        .await?;

    tracing::info!("Database connection established");

    // Run migrations in development
    if config.environment == "development" {
        tracing::info!("Running database migrations...");
        sqlx::migrate!("./migrations").run(&db_pool).await?;
        tracing::info!("Migrations completed");
    }

    // Build the categorical vocabularies and load the model artifacts
    // once; both are immutable for the life of the process.
    let encoders = Arc::new(CategoryEncoders::from_csv(
        &config.models.reference_dataset_path,
    )?);
    tracing::info!(
        "Loaded vocabularies: {} soil types, {} crop types",
        encoders.soil.labels().len(),
        encoders.crop.labels().len()
    );

    let crop_model = Arc::new(DecisionTreeModel::from_file(&config.models.crop_model_path)?);
    let fertilizer_model = Arc::new(DecisionTreeModel::from_file(
        &config.models.fertilizer_model_path,
    )?);
    tracing::info!("Loaded recommendation models");

    // External API clients
    let weather = WeatherClient::new(
        config.weather.api_key.clone(),
        config.weather.api_endpoint.clone(),
    );
    let news = NewsClient::new(
        config.news.api_key.clone(),
        config.news.api_endpoint.clone(),
        config.news.language.clone(),
        config.news.country.clone(),
        config.news.page_size,
    );
    let market = MarketDataClient::new(
        config.market.api_key.clone(),
        config.market.api_endpoint.clone(),
        config.market.resource_id.clone(),
    );
    let gemini = GeminiClient::new(
        config.gemini.api_key.clone(),
        config.gemini.api_endpoint.clone(),
        config.gemini.text_model.clone(),
        config.gemini.vision_model.clone(),
    );

    let sessions = SessionStore::new();

    // Create application state
    let state = AppState {
        db: db_pool,
        market_prices: MarketPriceService::new(
            market,
            Duration::from_secs(config.market.cache_ttl_seconds),
        ),
        recommendations: RecommendationService::new(encoders, crop_model, fertilizer_model),
        assistant: AssistantService::new(gemini.clone(), sessions.clone()),
        diagnosis: DiagnosisService::new(gemini),
        weather,
        news,
        sessions,
        config: Arc::new(config.clone()),
    };

    // Build application
    let app = create_app(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes and middleware
fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "AgriDash Platform API v1.0"
}
