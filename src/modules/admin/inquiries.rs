use askama::Template;
use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    Json,
};
use uuid::Uuid;

use crate::app_state::AppState;
use crate::db::models::{Inquiry, InquiryStatus, UpdateInquiryStatus};
use crate::db::repositories::{InquiryRepository, PropertyRepository};
use crate::error::AppResult;
use crate::listview::{filter_rows, ListQuery};
use crate::modules::HtmlTemplate;

fn status_name(status: InquiryStatus) -> &'static str {
    match status {
        InquiryStatus::New => "new",
        InquiryStatus::Contacted => "contacted",
        InquiryStatus::Closed => "closed",
        InquiryStatus::Booked => "booked",
    }
}

pub struct InquiryRow {
    pub id: Uuid,
    pub created_at: String,
    pub full_name: String,
    pub email: String,
    pub property: String,
    pub dates: String,
    pub guests: String,
    pub status: &'static str,
}

#[derive(Template)]
#[template(path = "admin/inquiries.html")]
pub struct InquiriesTemplate {
    pub rows: Vec<InquiryRow>,
    pub q: String,
    pub status: String,
    pub total: usize,
}

pub async fn inquiries_page(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Response> {
    let mut inquiries = filter_rows(
        InquiryRepository::list_all(&state.db).await?,
        query.q.as_deref(),
        |i: &Inquiry| vec![i.full_name.clone(), i.email.clone()],
    );

    if let Some(status) = query.status.as_deref() {
        if !status.is_empty() {
            inquiries.retain(|i| status_name(i.status) == status);
        }
    }

    // Property names for the listing, resolved per distinct reference.
    let mut rows = Vec::with_capacity(inquiries.len());
    for inquiry in &inquiries {
        let property = match inquiry.property_id {
            Some(property_id) => PropertyRepository::find_by_id(&state.db, property_id)
                .await?
                .map(|p| p.name)
                .unwrap_or_default(),
            None => String::new(),
        };
        let dates = match (inquiry.check_in, inquiry.check_out) {
            (Some(check_in), Some(check_out)) => format!("{} – {}", check_in, check_out),
            (Some(check_in), None) => check_in.to_string(),
            _ => String::new(),
        };
        rows.push(InquiryRow {
            id: inquiry.id,
            created_at: inquiry.created_at.date().to_string(),
            full_name: inquiry.full_name.clone(),
            email: inquiry.email.clone(),
            property,
            dates,
            guests: inquiry.guests.map(|g| g.to_string()).unwrap_or_default(),
            status: status_name(inquiry.status),
        });
    }

    Ok(HtmlTemplate(InquiriesTemplate {
        total: rows.len(),
        rows,
        q: query.q.unwrap_or_default(),
        status: query.status.unwrap_or_default(),
    })
    .into_response())
}

// --- JSON API ---

pub async fn list_inquiries(State(state): State<AppState>) -> AppResult<Json<Vec<Inquiry>>> {
    Ok(Json(InquiryRepository::list_all(&state.db).await?))
}

pub async fn update_inquiry_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateInquiryStatus>,
) -> AppResult<Json<Inquiry>> {
    let inquiry = InquiryRepository::update_status(&state.db, id, payload.status).await?;
    tracing::info!(inquiry_id = %id, status = status_name(inquiry.status), "Inquiry status changed");
    Ok(Json(inquiry))
}
