use sqlx::{Error, PgPool};
use uuid::Uuid;

use crate::db::models::{AvailabilityPeriod, NewAvailabilityPeriod, UpdateAvailabilityPeriod};

pub struct AvailabilityRepository;

impl AvailabilityRepository {
    /// Periods in stored order; readers resolve overlaps by this order.
    pub async fn list_for_property(
        pool: &PgPool,
        property_id: Uuid,
    ) -> Result<Vec<AvailabilityPeriod>, Error> {
        sqlx::query_as::<_, AvailabilityPeriod>(
            r#"
            SELECT id, property_id, start_date, end_date, price_per_week,
                   price_per_night, min_nights, status, notes, created_at
            FROM availability_periods
            WHERE property_id = $1
            ORDER BY start_date, created_at
            "#,
        )
        .bind(property_id)
        .fetch_all(pool)
        .await
    }

    pub async fn create(
        pool: &PgPool,
        property_id: Uuid,
        data: &NewAvailabilityPeriod,
    ) -> Result<AvailabilityPeriod, Error> {
        sqlx::query_as::<_, AvailabilityPeriod>(
            r#"
            INSERT INTO availability_periods
                (property_id, start_date, end_date, price_per_week,
                 price_per_night, min_nights, status, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, property_id, start_date, end_date, price_per_week,
                      price_per_night, min_nights, status, notes, created_at
            "#,
        )
        .bind(property_id)
        .bind(data.start_date)
        .bind(data.end_date)
        .bind(data.price_per_week)
        .bind(data.price_per_night)
        .bind(data.min_nights.unwrap_or(1))
        .bind(data.status)
        .bind(&data.notes)
        .fetch_one(pool)
        .await
    }

    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        data: &UpdateAvailabilityPeriod,
    ) -> Result<AvailabilityPeriod, Error> {
        sqlx::query_as::<_, AvailabilityPeriod>(
            r#"
            UPDATE availability_periods
            SET start_date = COALESCE($1, start_date),
                end_date = COALESCE($2, end_date),
                price_per_week = COALESCE($3, price_per_week),
                price_per_night = COALESCE($4, price_per_night),
                min_nights = COALESCE($5, min_nights),
                status = COALESCE($6, status),
                notes = COALESCE($7, notes)
            WHERE id = $8
            RETURNING id, property_id, start_date, end_date, price_per_week,
                      price_per_night, min_nights, status, notes, created_at
            "#,
        )
        .bind(data.start_date)
        .bind(data.end_date)
        .bind(data.price_per_week)
        .bind(data.price_per_night)
        .bind(data.min_nights)
        .bind(data.status)
        .bind(&data.notes)
        .bind(id)
        .fetch_one(pool)
        .await
    }

    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<u64, Error> {
        let result = sqlx::query("DELETE FROM availability_periods WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
