//! Produce marketplace service

use shared::{CreateProduceInput, ProduceListing, QuantityUnit};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, AppResult};

/// Produce marketplace service
#[derive(Clone)]
pub struct ProduceService {
    db: PgPool,
}

impl ProduceService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Create a listing for the farmer. Quantities are recorded in
    /// quintals.
    pub async fn create_listing(
        &self,
        farmer_id: Uuid,
        input: CreateProduceInput,
    ) -> AppResult<ProduceListing> {
        input.validate()?;

        let listing = sqlx::query_as::<_, ProduceRow>(
            r#"
            INSERT INTO produce_listings (farmer_id, crop, quantity, unit, price_per_unit)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, farmer_id, crop, quantity, unit, price_per_unit, listed_at
            "#,
        )
        .bind(farmer_id)
        .bind(&input.crop)
        .bind(input.quantity)
        .bind(QuantityUnit::Quintals.as_str())
        .bind(input.price_per_unit)
        .fetch_one(&self.db)
        .await?;

        Ok(listing.into())
    }

    /// All public listings, newest first
    pub async fn list_all(&self) -> AppResult<Vec<ProduceListing>> {
        let listings = sqlx::query_as::<_, ProduceRow>(
            r#"
            SELECT id, farmer_id, crop, quantity, unit, price_per_unit, listed_at
            FROM produce_listings
            ORDER BY listed_at DESC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(listings.into_iter().map(Into::into).collect())
    }

    /// The farmer's own listings, newest first
    pub async fn list_for_farmer(&self, farmer_id: Uuid) -> AppResult<Vec<ProduceListing>> {
        let listings = sqlx::query_as::<_, ProduceRow>(
            r#"
            SELECT id, farmer_id, crop, quantity, unit, price_per_unit, listed_at
            FROM produce_listings
            WHERE farmer_id = $1
            ORDER BY listed_at DESC
            "#,
        )
        .bind(farmer_id)
        .fetch_all(&self.db)
        .await?;

        Ok(listings.into_iter().map(Into::into).collect())
    }

    /// Delete one of the farmer's listings
    pub async fn delete_listing(&self, farmer_id: Uuid, listing_id: Uuid) -> AppResult<()> {
        let result =
            sqlx::query("DELETE FROM produce_listings WHERE id = $1 AND farmer_id = $2")
                .bind(listing_id)
                .bind(farmer_id)
                .execute(&self.db)
                .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Produce listing".to_string()));
        }
        Ok(())
    }
}

/// Row mapping for produce listings
#[derive(sqlx::FromRow)]
struct ProduceRow {
    id: Uuid,
    farmer_id: Uuid,
    crop: String,
    quantity: rust_decimal::Decimal,
    unit: String,
    price_per_unit: rust_decimal::Decimal,
    listed_at: chrono::DateTime<chrono::Utc>,
}

impl From<ProduceRow> for ProduceListing {
    fn from(row: ProduceRow) -> Self {
        ProduceListing {
            id: row.id,
            farmer_id: row.farmer_id,
            crop: row.crop,
            quantity: row.quantity,
            unit: row.unit,
            price_per_unit: row.price_per_unit,
            listed_at: row.listed_at,
        }
    }
}
