use sqlx::{Error, PgPool};
use uuid::Uuid;

use crate::db::models::{Customer, CustomerStatus, NewCustomer, UpdateCustomer};

pub struct CustomerRepository;

impl CustomerRepository {
    /// Full row set; the admin list view filters, sorts and paginates
    /// in memory.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Customer>, Error> {
        sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, name, email, phone, notes, source, status,
                   created_at, updated_at
            FROM customers
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(pool)
        .await
    }

    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Customer>, Error> {
        sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, name, email, phone, notes, source, status,
                   created_at, updated_at
            FROM customers
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    pub async fn create(pool: &PgPool, data: &NewCustomer) -> Result<Customer, Error> {
        sqlx::query_as::<_, Customer>(
            r#"
            INSERT INTO customers (name, email, phone, notes, source, status)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, email, phone, notes, source, status,
                      created_at, updated_at
            "#,
        )
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.phone)
        .bind(&data.notes)
        .bind(&data.source)
        .bind(data.status.unwrap_or(CustomerStatus::Active))
        .fetch_one(pool)
        .await
    }

    pub async fn update(pool: &PgPool, id: Uuid, data: &UpdateCustomer) -> Result<Customer, Error> {
        sqlx::query_as::<_, Customer>(
            r#"
            UPDATE customers
            SET name = COALESCE($1, name),
                email = COALESCE($2, email),
                phone = COALESCE($3, phone),
                notes = COALESCE($4, notes),
                source = COALESCE($5, source),
                status = COALESCE($6, status),
                updated_at = NOW()
            WHERE id = $7
            RETURNING id, name, email, phone, notes, source, status,
                      created_at, updated_at
            "#,
        )
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.phone)
        .bind(&data.notes)
        .bind(&data.source)
        .bind(data.status)
        .bind(id)
        .fetch_one(pool)
        .await
    }

    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<u64, Error> {
        let result = sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
