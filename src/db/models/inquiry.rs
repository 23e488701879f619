use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use sqlx::types::Uuid;
use time::{Date, OffsetDateTime};
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type, Serialize, Deserialize)]
#[sqlx(type_name = "inquiry_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum InquiryStatus {
    New,
    Contacted,
    Closed,
    Booked,
}

/// A lead captured from the public contact/booking form. Inquiries are
/// never deleted; admins only move them through statuses.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Inquiry {
    pub id: Uuid,
    pub property_id: Option<Uuid>,
    pub check_in: Option<Date>,
    pub check_out: Option<Date>,
    pub guests: Option<i32>,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: Option<String>,
    pub source_url: Option<String>,
    pub locale: String,
    pub status: InquiryStatus,
    pub created_at: OffsetDateTime,
}

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    // local@domain.tld, nothing fancier
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex")
});

pub fn validate_email_format(email: &str) -> Result<(), ValidationError> {
    if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        let mut err = ValidationError::new("email");
        err.message = Some("Please enter a valid email address".into());
        Err(err)
    }
}

/// Strips spaces, hyphens and parentheses, then requires at least seven
/// digits with an optional leading `+`.
pub fn validate_phone_format(phone: &str) -> Result<(), ValidationError> {
    let stripped: String = phone
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')'))
        .collect();
    let digits = stripped.strip_prefix('+').unwrap_or(&stripped);
    if digits.len() >= 7 && digits.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        let mut err = ValidationError::new("phone");
        err.message = Some("Please enter a valid phone number".into());
        Err(err)
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewInquiry {
    pub property_slug: Option<String>,
    pub check_in: Option<Date>,
    pub check_out: Option<Date>,
    pub guests: Option<i32>,
    #[validate(length(min = 1, message = "Please enter your name"))]
    pub full_name: String,
    #[validate(custom(function = validate_email_format))]
    pub email: String,
    #[validate(custom(function = validate_phone_format))]
    pub phone: Option<String>,
    pub message: Option<String>,
    pub source_url: Option<String>,
    pub locale: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateInquiryStatus {
    pub status: InquiryStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_word_is_not_an_email() {
        assert!(validate_email_format("not-an-email").is_err());
    }

    #[test]
    fn short_domain_email_passes() {
        assert!(validate_email_format("a@b.co").is_ok());
    }

    #[test]
    fn email_requires_a_dotted_domain() {
        assert!(validate_email_format("a@b").is_err());
        assert!(validate_email_format("a b@c.com").is_err());
    }

    #[test]
    fn formatted_international_phone_passes() {
        assert!(validate_phone_format("+1 555 123 4567").is_ok());
        assert!(validate_phone_format("(030) 123-4567").is_ok());
    }

    #[test]
    fn short_or_lettered_phones_fail() {
        assert!(validate_phone_format("12345").is_err());
        assert!(validate_phone_format("call me maybe").is_err());
        assert!(validate_phone_format("+49-30-CALL").is_err());
    }

    #[test]
    fn inquiry_payload_validates_required_fields() {
        let payload = NewInquiry {
            property_slug: None,
            check_in: None,
            check_out: None,
            guests: None,
            full_name: "".into(),
            email: "not-an-email".into(),
            phone: None,
            message: None,
            source_url: None,
            locale: None,
        };
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("full_name"));
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn inquiry_payload_accepts_valid_contact_details() {
        let payload = NewInquiry {
            property_slug: Some("villa-azzurra".into()),
            check_in: None,
            check_out: None,
            guests: Some(6),
            full_name: "Maria Keller".into(),
            email: "a@b.co".into(),
            phone: Some("+1 555 123 4567".into()),
            message: Some("Availability in July?".into()),
            source_url: Some("https://velamar.example/villa-azzurra".into()),
            locale: Some("de".into()),
        };
        assert!(payload.validate().is_ok());
    }
}
