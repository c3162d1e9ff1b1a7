//! Market price aggregation service
//!
//! Iterates the fixed jurisdiction list, one gateway call per state, and
//! flattens the results into a single ordered collection. A failure for
//! one state is logged and skipped rather than aborting the aggregate:
//! prices for twelve states beat an error page for all thirteen.

use std::sync::Arc;
use std::time::{Duration, Instant};

use shared::{MarketPriceBoard, MarketRecord};

use crate::error::AppResult;
use crate::external::MarketDataClient;
use tokio::sync::RwLock;

/// The administrative regions iterated when aggregating market prices,
/// in output order.
pub const TRACKED_STATES: [&str; 13] = [
    "West Bengal",
    "Kerala",
    "Uttrakhand",
    "Uttar Pradesh",
    "Rajasthan",
    "Nagaland",
    "Gujarat",
    "Maharashtra",
    "Tripura",
    "Punjab",
    "Bihar",
    "Telangana",
    "Meghalaya",
];

/// One paginated lookup against the market-data provider. Implemented by
/// the real client and by test stubs.
pub trait MarketGateway {
    fn state_prices(
        &self,
        state: &str,
    ) -> impl std::future::Future<Output = AppResult<Vec<MarketRecord>>> + Send;
}

impl MarketGateway for MarketDataClient {
    async fn state_prices(&self, state: &str) -> AppResult<Vec<MarketRecord>> {
        MarketDataClient::state_prices(self, state).await
    }
}

/// Aggregate price records across jurisdictions, in list order.
///
/// Per-state failures are skipped with a warning; the aggregate never
/// fails as a whole.
pub async fn aggregate_market_prices<G: MarketGateway>(
    gateway: &G,
    states: &[&str],
) -> Vec<MarketRecord> {
    let mut all_records = Vec::new();
    for state in states {
        match gateway.state_prices(state).await {
            Ok(records) => {
                tracing::debug!("fetched {} price records for {}", records.len(), state);
                all_records.extend(records);
            }
            Err(e) => {
                tracing::warn!("skipping {} in price aggregation: {}", state, e);
            }
        }
    }
    all_records
}

/// Cached aggregate with its fetch instant
struct CachedBoard {
    board: MarketPriceBoard,
    fetched: Instant,
}

/// Market price service with an explicit TTL cache.
///
/// The cache key is the fixed jurisdiction set, so one shared entry
/// serves every user until it expires; this replaces per-session caching
/// keyed by ambient login state.
#[derive(Clone)]
pub struct MarketPriceService<G = MarketDataClient> {
    gateway: G,
    ttl: Duration,
    cache: Arc<RwLock<Option<CachedBoard>>>,
}

impl<G: MarketGateway> MarketPriceService<G> {
    pub fn new(gateway: G, ttl: Duration) -> Self {
        Self {
            gateway,
            ttl,
            cache: Arc::new(RwLock::new(None)),
        }
    }

    /// Current price board, from cache when fresh.
    ///
    /// An aggregate with no records at all (provider outage across every
    /// state) is served but never cached, so the next request retries
    /// instead of pinning an empty board for the whole TTL.
    pub async fn latest_prices(&self) -> MarketPriceBoard {
        {
            let cache = self.cache.read().await;
            if let Some(cached) = cache.as_ref() {
                if cached.fetched.elapsed() < self.ttl {
                    return cached.board.clone();
                }
            }
        }

        let records = aggregate_market_prices(&self.gateway, &TRACKED_STATES).await;
        let board = MarketPriceBoard::new(records);

        if !board.records.is_empty() {
            let mut cache = self.cache.write().await;
            *cache = Some(CachedBoard {
                board: board.clone(),
                fetched: Instant::now(),
            });
        }
        board
    }

    /// Drop the cached aggregate so the next request refetches.
    pub async fn invalidate(&self) {
        *self.cache.write().await = None;
    }
}
