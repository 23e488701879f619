use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use validator::Validate;

use super::email::{admin_notification, customer_confirmation};
use crate::app_state::AppState;
use crate::db::models::Property;
use crate::db::repositories::{InquiryRepository, PropertyRepository};
use crate::i18n::SupportedLanguage;

#[derive(Debug, Serialize)]
pub struct InquiryResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

fn rejected(status: StatusCode, error: &str) -> (StatusCode, Json<InquiryResponse>) {
    (
        status,
        Json(InquiryResponse {
            success: false,
            error: Some(error.to_string()),
        }),
    )
}

/// Stores the lead, then fires both notification emails without waiting
/// on them. The lead row is the one thing this endpoint must not lose;
/// everything after the insert is best-effort.
pub async fn submit_inquiry(
    State(state): State<AppState>,
    Json(payload): Json<crate::db::models::NewInquiry>,
) -> (StatusCode, Json<InquiryResponse>) {
    if let Err(errors) = payload.validate() {
        let message = errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .filter_map(|err| err.message.as_ref())
            .map(|msg| msg.to_string())
            .next()
            .unwrap_or_else(|| "Invalid submission".to_string());
        return rejected(StatusCode::UNPROCESSABLE_ENTITY, &message);
    }

    if let (Some(check_in), Some(check_out)) = (payload.check_in, payload.check_out) {
        if check_out <= check_in {
            return rejected(
                StatusCode::UNPROCESSABLE_ENTITY,
                "Check-out must be after check-in",
            );
        }
    }

    // A stale or mistyped slug must not cost us the lead; the inquiry is
    // stored without a property reference instead.
    let property: Option<Property> = match &payload.property_slug {
        Some(slug) => match PropertyRepository::find_by_slug(&state.db, slug).await {
            Ok(found) => found,
            Err(err) => {
                tracing::warn!("Property lookup failed for inquiry: {}", err);
                None
            }
        },
        None => None,
    };

    let locale = payload
        .locale
        .as_deref()
        .and_then(|code| code.parse::<SupportedLanguage>().ok())
        .unwrap_or_default();

    let inquiry = match InquiryRepository::create(
        &state.db,
        property.as_ref().map(|p| p.id),
        payload.check_in,
        payload.check_out,
        payload.guests,
        &payload.full_name,
        &payload.email,
        payload.phone.as_deref(),
        payload.message.as_deref(),
        payload.source_url.as_deref(),
        locale.code(),
    )
    .await
    {
        Ok(inquiry) => inquiry,
        Err(err) => {
            tracing::error!("Failed to store inquiry: {}", err);
            return rejected(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Could not submit, please try again",
            );
        }
    };

    state.mailer.spawn_send(admin_notification(
        &inquiry,
        property.as_ref(),
        &state.localizer,
        state.mailer.admin_address(),
    ));
    state.mailer.spawn_send(customer_confirmation(
        &inquiry,
        property.as_ref(),
        &state.localizer,
    ));

    tracing::info!(inquiry_id = %inquiry.id, "Inquiry stored");
    (
        StatusCode::OK,
        Json(InquiryResponse {
            success: true,
            error: None,
        }),
    )
}
