//! User profile models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A farmer's profile.
///
/// Account and session management live outside this service; the core
/// only reads the current user's identity and coordinates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub name: String,
    pub village: Option<String>,
    pub latitude: Decimal,
    pub longitude: Decimal,
}
