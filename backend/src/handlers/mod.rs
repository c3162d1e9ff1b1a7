//! HTTP handlers for the AgriDash platform

pub mod assistant;
pub mod dashboard;
pub mod diagnosis;
pub mod health;
pub mod market;
pub mod news;
pub mod produce;
pub mod profile;
pub mod recommendation;
pub mod weather;

pub use assistant::*;
pub use dashboard::*;
pub use diagnosis::*;
pub use health::*;
pub use market::*;
pub use news::*;
pub use produce::*;
pub use profile::*;
pub use recommendation::*;
pub use weather::*;
