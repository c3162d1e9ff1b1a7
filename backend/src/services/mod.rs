//! Business logic services for the AgriDash platform

pub mod assistant;
pub mod diagnosis;
pub mod encoder;
pub mod market;
pub mod produce;
pub mod recommendation;
pub mod session;
pub mod user;

pub use assistant::AssistantService;
pub use diagnosis::DiagnosisService;
pub use encoder::{CategoryEncoder, CategoryEncoders};
pub use market::MarketPriceService;
pub use produce::ProduceService;
pub use recommendation::RecommendationService;
pub use session::SessionStore;
pub use user::UserService;
