use askama::Template;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::app_state::AppState;
use crate::db::models::{
    NewAvailabilityPeriod, NewProperty, NewPropertyImage, Property, PropertyKind,
    UpdateAvailabilityPeriod, UpdateProperty,
};
use crate::db::repositories::{AvailabilityRepository, PropertyRepository};
use crate::error::{AppError, AppResult};
use crate::listview::{filter_rows, sort_rows, ListQuery, SortDir};
use crate::modules::HtmlTemplate;

pub fn first_validation_message(errors: &validator::ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .filter_map(|err| err.message.as_ref())
        .map(|msg| msg.to_string())
        .next()
        .unwrap_or_else(|| "Invalid input".to_string())
}

fn kind_name(kind: PropertyKind) -> &'static str {
    match kind {
        PropertyKind::Villa => "Villa",
        PropertyKind::Yacht => "Yacht",
    }
}

pub struct PropertyRow {
    pub id: Uuid,
    pub slug: String,
    pub name: String,
    pub destination: String,
    pub kind: &'static str,
    pub guests: i32,
    pub published: bool,
}

#[derive(Template)]
#[template(path = "admin/properties.html")]
pub struct PropertiesTemplate {
    pub rows: Vec<PropertyRow>,
    pub q: String,
    pub status: String,
    pub sort: String,
    pub dir: String,
    pub total: usize,
}

/// Property list view: substring filter over the text columns, an
/// optional published/draft filter and a sortable column. The list is
/// small, so there is no pagination here.
pub async fn properties_page(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Response> {
    let mut properties = PropertyRepository::list_all(&state.db).await?;

    properties = filter_rows(properties, query.q.as_deref(), |p: &Property| {
        vec![
            p.slug.clone(),
            p.name.clone(),
            p.destination.clone(),
            p.headline.clone().unwrap_or_default(),
        ]
    });

    if let Some(status) = query.status.as_deref() {
        match status {
            "published" => properties.retain(|p| p.published),
            "draft" => properties.retain(|p| !p.published),
            _ => {}
        }
    }

    let sort = query.sort.clone().unwrap_or_else(|| "name".to_string());
    let dir = query.dir.unwrap_or_default();
    sort_rows(&mut properties, dir, |p| match sort.as_str() {
        "destination" => p.destination.clone(),
        "slug" => p.slug.clone(),
        _ => p.name.clone(),
    });

    let rows: Vec<PropertyRow> = properties
        .iter()
        .map(|p| PropertyRow {
            id: p.id,
            slug: p.slug.clone(),
            name: p.name.clone(),
            destination: p.destination.clone(),
            kind: kind_name(p.kind),
            guests: p.guests,
            published: p.published,
        })
        .collect();

    Ok(HtmlTemplate(PropertiesTemplate {
        total: rows.len(),
        rows,
        q: query.q.unwrap_or_default(),
        status: query.status.unwrap_or_default(),
        sort,
        dir: match dir {
            SortDir::Asc => "asc".to_string(),
            SortDir::Desc => "desc".to_string(),
        },
    })
    .into_response())
}

pub struct PeriodRow {
    pub id: Uuid,
    pub start_date: String,
    pub end_date: String,
    pub price_per_week: String,
    pub min_nights: i32,
    pub status: String,
    pub notes: String,
}

pub struct ImageRow {
    pub id: Uuid,
    pub url: String,
    pub caption: String,
}

#[derive(Template)]
#[template(path = "admin/property_detail.html")]
pub struct PropertyDetailTemplate {
    pub id: Uuid,
    pub slug: String,
    pub name: String,
    pub destination: String,
    pub kind: &'static str,
    pub guests: i32,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub published: bool,
    pub periods: Vec<PeriodRow>,
    pub images: Vec<ImageRow>,
}

pub async fn property_detail_page(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Response> {
    let property = PropertyRepository::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Unknown property: {}", id)))?;

    let periods = AvailabilityRepository::list_for_property(&state.db, property.id)
        .await?
        .into_iter()
        .map(|p| PeriodRow {
            id: p.id,
            start_date: p.start_date.to_string(),
            end_date: p.end_date.to_string(),
            price_per_week: p.price_per_week.to_string(),
            min_nights: p.min_nights,
            status: format!("{:?}", p.status).to_lowercase(),
            notes: p.notes.unwrap_or_default(),
        })
        .collect();

    let images = PropertyRepository::list_images(&state.db, property.id)
        .await?
        .into_iter()
        .map(|img| ImageRow {
            id: img.id,
            url: img.url,
            caption: img.caption.unwrap_or_default(),
        })
        .collect();

    Ok(HtmlTemplate(PropertyDetailTemplate {
        id: property.id,
        slug: property.slug,
        name: property.name,
        destination: property.destination,
        kind: kind_name(property.kind),
        guests: property.guests,
        bedrooms: property.bedrooms,
        bathrooms: property.bathrooms,
        published: property.published,
        periods,
        images,
    })
    .into_response())
}

// --- JSON API ---

pub async fn list_properties(State(state): State<AppState>) -> AppResult<Json<Vec<Property>>> {
    Ok(Json(PropertyRepository::list_all(&state.db).await?))
}

pub async fn create_property(
    State(state): State<AppState>,
    Json(payload): Json<NewProperty>,
) -> AppResult<(StatusCode, Json<Property>)> {
    payload
        .validate()
        .map_err(|errors| AppError::Validation(first_validation_message(&errors)))?;

    let property = PropertyRepository::create(&state.db, &payload).await?;
    Ok((StatusCode::CREATED, Json(property)))
}

pub async fn update_property(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateProperty>,
) -> AppResult<Json<Property>> {
    payload
        .validate()
        .map_err(|errors| AppError::Validation(first_validation_message(&errors)))?;

    let property = PropertyRepository::update(&state.db, id, &payload).await?;
    Ok(Json(property))
}

pub async fn delete_property(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    let deleted = PropertyRepository::delete(&state.db, id).await?;
    if deleted == 0 {
        return Err(AppError::NotFound(format!("Unknown property: {}", id)));
    }
    Ok(StatusCode::NO_CONTENT)
}

// --- Availability periods ---

pub async fn list_periods(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Vec<crate::db::models::AvailabilityPeriod>>> {
    Ok(Json(
        AvailabilityRepository::list_for_property(&state.db, id).await?,
    ))
}

pub async fn create_period(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<NewAvailabilityPeriod>,
) -> AppResult<(StatusCode, Json<crate::db::models::AvailabilityPeriod>)> {
    payload
        .validate()
        .map_err(|errors| AppError::Validation(first_validation_message(&errors)))?;
    if payload.end_date < payload.start_date {
        return Err(AppError::Validation(
            "End date must not be before start date".to_string(),
        ));
    }

    let property = PropertyRepository::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Unknown property: {}", id)))?;

    let period = AvailabilityRepository::create(&state.db, property.id, &payload).await?;
    Ok((StatusCode::CREATED, Json(period)))
}

pub async fn update_period(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateAvailabilityPeriod>,
) -> AppResult<Json<crate::db::models::AvailabilityPeriod>> {
    payload
        .validate()
        .map_err(|errors| AppError::Validation(first_validation_message(&errors)))?;
    if let (Some(start), Some(end)) = (payload.start_date, payload.end_date) {
        if end < start {
            return Err(AppError::Validation(
                "End date must not be before start date".to_string(),
            ));
        }
    }

    let period = AvailabilityRepository::update(&state.db, id, &payload).await?;
    Ok(Json(period))
}

pub async fn delete_period(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    let deleted = AvailabilityRepository::delete(&state.db, id).await?;
    if deleted == 0 {
        return Err(AppError::NotFound(format!("Unknown period: {}", id)));
    }
    Ok(StatusCode::NO_CONTENT)
}

// --- Images ---

pub async fn add_image(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<NewPropertyImage>,
) -> AppResult<(StatusCode, Json<crate::db::models::PropertyImage>)> {
    payload
        .validate()
        .map_err(|errors| AppError::Validation(first_validation_message(&errors)))?;

    let image = PropertyRepository::add_image(&state.db, id, &payload).await?;
    Ok((StatusCode::CREATED, Json(image)))
}

pub async fn delete_image(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    let deleted = PropertyRepository::delete_image(&state.db, id).await?;
    if deleted == 0 {
        return Err(AppError::NotFound(format!("Unknown image: {}", id)));
    }
    Ok(StatusCode::NO_CONTENT)
}
