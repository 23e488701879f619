use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use sqlx::types::Uuid;
use time::OffsetDateTime;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub created_at: OffsetDateTime,
}

/// An opaque bearer token row backing the admin cookie. Tokens carry no
/// scopes; holding an unexpired one means "is a valid admin".
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct AdminSession {
    pub id: Uuid,
    pub admin_user_id: Uuid,
    pub token: String,
    pub expires_at: OffsetDateTime,
    pub created_at: OffsetDateTime,
}

impl AdminSession {
    pub fn is_expired(&self, now: OffsetDateTime) -> bool {
        self.expires_at <= now
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: SecretString,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::Duration;

    #[test]
    fn session_expiry_is_inclusive_of_the_deadline() {
        let now = OffsetDateTime::now_utc();
        let session = AdminSession {
            id: Uuid::new_v4(),
            admin_user_id: Uuid::new_v4(),
            token: "tok".into(),
            expires_at: now,
            created_at: now - Duration::hours(12),
        };
        assert!(session.is_expired(now));
        assert!(!session.is_expired(now - Duration::seconds(1)));
    }
}
