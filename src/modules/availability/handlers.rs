use axum::{
    extract::{Path, Query, State},
    Json,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::{Date, Month, OffsetDateTime};
use uuid::Uuid;

use crate::app_state::AppState;
use crate::booking::{month_grid, DaySlot, Quote, Selection};
use crate::booking::resolver::resolve_status;
use crate::db::models::{AvailabilityPeriod, PeriodStatus};
use crate::db::repositories::{AvailabilityRepository, PropertyRepository};
use crate::error::{AppError, AppResult};

async fn property_id_for_slug(state: &AppState, slug: &str) -> AppResult<Uuid> {
    let property = PropertyRepository::find_by_slug(&state.db, slug)
        .await?
        .filter(|p| p.published)
        .ok_or_else(|| AppError::NotFound(format!("Unknown property: {}", slug)))?;
    Ok(property.id)
}

#[derive(Debug, Serialize)]
pub struct PeriodView {
    pub start_date: Date,
    pub end_date: Date,
    pub price_per_week: Decimal,
    pub price_per_night: Option<Decimal>,
    pub min_nights: i32,
    pub status: PeriodStatus,
}

impl From<AvailabilityPeriod> for PeriodView {
    fn from(period: AvailabilityPeriod) -> Self {
        Self {
            start_date: period.start_date,
            end_date: period.end_date,
            price_per_week: period.price_per_week,
            price_per_night: period.price_per_night,
            min_nights: period.min_nights,
            status: period.status,
        }
    }
}

/// The raw period list the booking calendar widget works from. Fetched
/// once when the calendar opens; the widget resolves against this
/// snapshot until reopened.
pub async fn list_periods(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<Vec<PeriodView>>> {
    let property_id = property_id_for_slug(&state, &slug).await?;
    let periods = AvailabilityRepository::list_for_property(&state.db, property_id).await?;
    Ok(Json(periods.into_iter().map(PeriodView::from).collect()))
}

#[derive(Debug, Deserialize)]
pub struct CalendarQuery {
    pub year: i32,
    pub month: u8,
}

#[derive(Debug, Serialize)]
pub struct CalendarMonth {
    pub year: i32,
    pub month: u8,
    pub days: Vec<DaySlot>,
}

/// Server-side month grid: every day of the requested month with its
/// resolved status and weekly price.
pub async fn calendar(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<CalendarQuery>,
) -> AppResult<Json<CalendarMonth>> {
    let month = Month::try_from(query.month)
        .map_err(|_| AppError::BadRequest(format!("Invalid month: {}", query.month)))?;
    if !(2000..=2100).contains(&query.year) {
        return Err(AppError::BadRequest(format!("Invalid year: {}", query.year)));
    }

    let property_id = property_id_for_slug(&state, &slug).await?;
    let periods = AvailabilityRepository::list_for_property(&state.db, property_id).await?;
    let today = OffsetDateTime::now_utc().date();

    Ok(Json(CalendarMonth {
        year: query.year,
        month: query.month,
        days: month_grid(query.year, month, today, &periods),
    }))
}

#[derive(Debug, Deserialize)]
pub struct QuoteQuery {
    pub check_in: Date,
    pub check_out: Date,
}

/// Prices a complete range: nights plus the prorated weekly total.
pub async fn quote(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<QuoteQuery>,
) -> AppResult<Json<Quote>> {
    if query.check_out <= query.check_in {
        return Err(AppError::Validation(
            "Check-out must be after check-in".to_string(),
        ));
    }

    let property_id = property_id_for_slug(&state, &slug).await?;
    let periods = AvailabilityRepository::list_for_property(&state.db, property_id).await?;
    let today = OffsetDateTime::now_utc().date();

    let selection = Selection {
        check_in: Some(query.check_in),
        check_out: Some(query.check_out),
        selecting: crate::booking::Endpoint::CheckIn,
    };

    selection
        .quote(today, &periods)
        .map(Json)
        .ok_or_else(|| AppError::Validation("No price available for the selected dates".to_string()))
}

#[derive(Debug, Deserialize)]
pub struct SelectionClick {
    #[serde(default)]
    pub selection: Option<Selection>,
    pub clicked: Date,
}

#[derive(Debug, Serialize)]
pub struct SelectionResponse {
    pub selection: Selection,
    pub quote: Option<Quote>,
}

/// One day click of the calendar widget: the client posts its current
/// selection state plus the clicked day and gets the updated state back,
/// with a quote once the range is complete and priceable.
pub async fn select(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(payload): Json<SelectionClick>,
) -> AppResult<Json<SelectionResponse>> {
    let property_id = property_id_for_slug(&state, &slug).await?;
    let periods = AvailabilityRepository::list_for_property(&state.db, property_id).await?;
    let today = OffsetDateTime::now_utc().date();

    let mut selection = payload.selection.unwrap_or_default();
    let status = resolve_status(payload.clicked, today, &periods);
    selection.click(payload.clicked, status);
    let quote = selection.quote(today, &periods);

    Ok(Json(SelectionResponse { selection, quote }))
}
