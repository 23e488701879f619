use serde::{Deserialize, Serialize};
use sqlx::types::Uuid;
use time::OffsetDateTime;
use validator::Validate;

use super::inquiry::{validate_email_format, validate_phone_format};

#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type, Serialize, Deserialize)]
#[sqlx(type_name = "customer_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum CustomerStatus {
    Active,
    Inactive,
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub notes: Option<String>,
    pub source: Option<String>,
    pub status: CustomerStatus,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewCustomer {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,
    #[validate(custom(function = validate_email_format))]
    pub email: String,
    #[validate(custom(function = validate_phone_format))]
    pub phone: Option<String>,
    pub notes: Option<String>,
    pub source: Option<String>,
    pub status: Option<CustomerStatus>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCustomer {
    pub name: Option<String>,
    #[validate(custom(function = validate_email_format))]
    pub email: Option<String>,
    #[validate(custom(function = validate_phone_format))]
    pub phone: Option<String>,
    pub notes: Option<String>,
    pub source: Option<String>,
    pub status: Option<CustomerStatus>,
}
