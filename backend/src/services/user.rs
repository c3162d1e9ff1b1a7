//! User profile lookups
//!
//! Accounts are managed outside this service; the core only reads the
//! current user's identity and coordinates.

use shared::UserProfile;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};

/// User profile service
#[derive(Clone)]
pub struct UserService {
    db: PgPool,
}

impl UserService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Fetch a user's profile by id
    pub async fn get(&self, user_id: Uuid) -> AppResult<UserProfile> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, village, latitude, longitude
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("User".to_string()))?;

        Ok(UserProfile {
            id: row.id,
            name: row.name,
            village: row.village,
            latitude: row.latitude,
            longitude: row.longitude,
        })
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    name: String,
    village: Option<String>,
    latitude: rust_decimal::Decimal,
    longitude: rust_decimal::Decimal,
}
