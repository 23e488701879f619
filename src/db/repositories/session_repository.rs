use sqlx::{Error, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::db::models::{AdminSession, AdminUser};

pub struct SessionRepository;

impl SessionRepository {
    pub async fn find_admin_by_email(
        pool: &PgPool,
        email: &str,
    ) -> Result<Option<AdminUser>, Error> {
        sqlx::query_as::<_, AdminUser>(
            r#"
            SELECT id, email, password_hash, created_at
            FROM admin_users
            WHERE email = $1
            "#,
        )
        .bind(email.to_lowercase())
        .fetch_optional(pool)
        .await
    }

    pub async fn create_session(
        pool: &PgPool,
        admin_user_id: Uuid,
        token: &str,
        expires_at: OffsetDateTime,
    ) -> Result<AdminSession, Error> {
        sqlx::query_as::<_, AdminSession>(
            r#"
            INSERT INTO admin_sessions (admin_user_id, token, expires_at)
            VALUES ($1, $2, $3)
            RETURNING id, admin_user_id, token, expires_at, created_at
            "#,
        )
        .bind(admin_user_id)
        .bind(token)
        .bind(expires_at)
        .fetch_one(pool)
        .await
    }

    /// Looks up an unexpired session for the opaque cookie token.
    pub async fn find_valid(
        pool: &PgPool,
        token: &str,
        now: OffsetDateTime,
    ) -> Result<Option<AdminSession>, Error> {
        sqlx::query_as::<_, AdminSession>(
            r#"
            SELECT id, admin_user_id, token, expires_at, created_at
            FROM admin_sessions
            WHERE token = $1 AND expires_at > $2
            "#,
        )
        .bind(token)
        .bind(now)
        .fetch_optional(pool)
        .await
    }

    pub async fn delete_by_token(pool: &PgPool, token: &str) -> Result<u64, Error> {
        let result = sqlx::query("DELETE FROM admin_sessions WHERE token = $1")
            .bind(token)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    pub async fn delete_expired(pool: &PgPool, now: OffsetDateTime) -> Result<u64, Error> {
        let result = sqlx::query("DELETE FROM admin_sessions WHERE expires_at <= $1")
            .bind(now)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
