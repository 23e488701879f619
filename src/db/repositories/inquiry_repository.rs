use sqlx::{Error, PgPool};
use time::Date;
use uuid::Uuid;

use crate::db::models::{Inquiry, InquiryStatus};

pub struct InquiryRepository;

impl InquiryRepository {
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        pool: &PgPool,
        property_id: Option<Uuid>,
        check_in: Option<Date>,
        check_out: Option<Date>,
        guests: Option<i32>,
        full_name: &str,
        email: &str,
        phone: Option<&str>,
        message: Option<&str>,
        source_url: Option<&str>,
        locale: &str,
    ) -> Result<Inquiry, Error> {
        sqlx::query_as::<_, Inquiry>(
            r#"
            INSERT INTO inquiries
                (property_id, check_in, check_out, guests, full_name, email,
                 phone, message, source_url, locale, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, 'new')
            RETURNING id, property_id, check_in, check_out, guests, full_name,
                      email, phone, message, source_url, locale, status, created_at
            "#,
        )
        .bind(property_id)
        .bind(check_in)
        .bind(check_out)
        .bind(guests)
        .bind(full_name)
        .bind(email)
        .bind(phone)
        .bind(message)
        .bind(source_url)
        .bind(locale)
        .fetch_one(pool)
        .await
    }

    pub async fn list_all(pool: &PgPool) -> Result<Vec<Inquiry>, Error> {
        sqlx::query_as::<_, Inquiry>(
            r#"
            SELECT id, property_id, check_in, check_out, guests, full_name,
                   email, phone, message, source_url, locale, status, created_at
            FROM inquiries
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(pool)
        .await
    }

    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Inquiry>, Error> {
        sqlx::query_as::<_, Inquiry>(
            r#"
            SELECT id, property_id, check_in, check_out, guests, full_name,
                   email, phone, message, source_url, locale, status, created_at
            FROM inquiries
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Inquiries only ever change status; they are never deleted.
    pub async fn update_status(
        pool: &PgPool,
        id: Uuid,
        status: InquiryStatus,
    ) -> Result<Inquiry, Error> {
        sqlx::query_as::<_, Inquiry>(
            r#"
            UPDATE inquiries
            SET status = $1
            WHERE id = $2
            RETURNING id, property_id, check_in, check_out, guests, full_name,
                      email, phone, message, source_url, locale, status, created_at
            "#,
        )
        .bind(status)
        .bind(id)
        .fetch_one(pool)
        .await
    }
}
