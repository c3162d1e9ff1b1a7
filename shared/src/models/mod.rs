//! Domain models for the AgriDash platform

pub mod chat;
pub mod diagnosis;
pub mod market;
pub mod news;
pub mod produce;
pub mod recommendation;
pub mod user;
pub mod weather;

pub use chat::*;
pub use diagnosis::*;
pub use market::*;
pub use news::*;
pub use produce::*;
pub use recommendation::*;
pub use user::*;
pub use weather::*;
