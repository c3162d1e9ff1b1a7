//! External API integrations
//!
//! One thin client per provider, each isolating its failures from the
//! rest of the application. No client retries or backs off; callers
//! decide whether a failure degrades or propagates.

pub mod gemini;
pub mod market;
pub mod news;
pub mod weather;

pub use gemini::GeminiClient;
pub use market::MarketDataClient;
pub use news::NewsClient;
pub use weather::WeatherClient;
