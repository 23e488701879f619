use askama::Template;
use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use time::OffsetDateTime;
use uuid::Uuid;
use validator::Validate;

use super::properties::first_validation_message;
use crate::app_state::AppState;
use crate::db::models::{Customer, CustomerStatus, NewCustomer, UpdateCustomer};
use crate::db::repositories::CustomerRepository;
use crate::error::{AppError, AppResult};
use crate::listview::{
    csv_export, csv_filename, filter_rows, page_count, paginate, sort_rows, ListQuery, SortDir,
    CUSTOMER_PAGE_SIZE,
};
use crate::modules::HtmlTemplate;

fn status_name(status: CustomerStatus) -> &'static str {
    match status {
        CustomerStatus::Active => "active",
        CustomerStatus::Inactive => "inactive",
    }
}

/// Effective sort column and direction; newest-first is the natural
/// default for the lead list.
fn effective_sort_dir(query: &ListQuery) -> (String, SortDir) {
    let sort = query.sort.clone().unwrap_or_else(|| "created_at".to_string());
    let dir = query.dir.unwrap_or(match sort.as_str() {
        "created_at" => SortDir::Desc,
        _ => SortDir::Asc,
    });
    (sort, dir)
}

/// Applies the list query's filter, status filter and sort; pagination
/// is left to the caller so the CSV export can reuse this on the full
/// filtered set.
fn filtered_sorted(customers: Vec<Customer>, query: &ListQuery) -> Vec<Customer> {
    let mut customers = filter_rows(customers, query.q.as_deref(), |c: &Customer| {
        vec![
            c.name.clone(),
            c.email.clone(),
            c.phone.clone().unwrap_or_default(),
            c.notes.clone().unwrap_or_default(),
        ]
    });

    if let Some(status) = query.status.as_deref() {
        match status {
            "active" => customers.retain(|c| c.status == CustomerStatus::Active),
            "inactive" => customers.retain(|c| c.status == CustomerStatus::Inactive),
            _ => {}
        }
    }

    let (sort, dir) = effective_sort_dir(query);
    sort_rows(&mut customers, dir, |c| match sort.as_str() {
        "email" => c.email.clone(),
        "status" => status_name(c.status).to_string(),
        "created_at" => format!("{:020}", c.created_at.unix_timestamp()),
        _ => c.name.clone(),
    });

    customers
}

pub struct CustomerRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub status: &'static str,
    pub created_at: String,
}

#[derive(Template)]
#[template(path = "admin/customers.html")]
pub struct CustomersTemplate {
    pub rows: Vec<CustomerRow>,
    pub q: String,
    pub status: String,
    pub sort: String,
    pub dir: String,
    pub page: usize,
    pub pages: usize,
    pub total: usize,
}

pub async fn customers_page(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Response> {
    let customers = filtered_sorted(CustomerRepository::list_all(&state.db).await?, &query);

    let total = customers.len();
    let page = query.page.unwrap_or(1).max(1);
    let rows: Vec<CustomerRow> = paginate(&customers, page, CUSTOMER_PAGE_SIZE)
        .iter()
        .map(|c| CustomerRow {
            id: c.id,
            name: c.name.clone(),
            email: c.email.clone(),
            phone: c.phone.clone().unwrap_or_default(),
            status: status_name(c.status),
            created_at: c.created_at.date().to_string(),
        })
        .collect();

    let (sort, dir) = effective_sort_dir(&query);
    Ok(HtmlTemplate(CustomersTemplate {
        rows,
        q: query.q.clone().unwrap_or_default(),
        status: query.status.clone().unwrap_or_default(),
        sort,
        dir: match dir {
            SortDir::Asc => "asc".to_string(),
            SortDir::Desc => "desc".to_string(),
        },
        page,
        pages: page_count(total, CUSTOMER_PAGE_SIZE),
        total,
    })
    .into_response())
}

/// CSV download of the currently-filtered customer list. Every cell is
/// quoted; the filename carries the export date.
pub async fn customers_export(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Response> {
    let customers = filtered_sorted(CustomerRepository::list_all(&state.db).await?, &query);

    let rows: Vec<Vec<String>> = customers
        .iter()
        .map(|c| {
            vec![
                c.name.clone(),
                c.email.clone(),
                c.phone.clone().unwrap_or_default(),
                c.notes.clone().unwrap_or_default(),
                c.source.clone().unwrap_or_default(),
                status_name(c.status).to_string(),
                c.created_at.date().to_string(),
            ]
        })
        .collect();

    let csv = csv_export(
        &["name", "email", "phone", "notes", "source", "status", "created_at"],
        &rows,
    );

    let filename = csv_filename("customers", OffsetDateTime::now_utc().date());
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        csv,
    )
        .into_response())
}

// --- JSON API ---

pub async fn list_customers(State(state): State<AppState>) -> AppResult<Json<Vec<Customer>>> {
    Ok(Json(CustomerRepository::list_all(&state.db).await?))
}

pub async fn create_customer(
    State(state): State<AppState>,
    Json(payload): Json<NewCustomer>,
) -> AppResult<(StatusCode, Json<Customer>)> {
    payload
        .validate()
        .map_err(|errors| AppError::Validation(first_validation_message(&errors)))?;

    let customer = CustomerRepository::create(&state.db, &payload).await?;
    Ok((StatusCode::CREATED, Json(customer)))
}

pub async fn update_customer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCustomer>,
) -> AppResult<Json<Customer>> {
    payload
        .validate()
        .map_err(|errors| AppError::Validation(first_validation_message(&errors)))?;

    let customer = CustomerRepository::update(&state.db, id, &payload).await?;
    Ok(Json(customer))
}

pub async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    let deleted = CustomerRepository::delete(&state.db, id).await?;
    if deleted == 0 {
        return Err(AppError::NotFound(format!("Unknown customer: {}", id)));
    }
    Ok(StatusCode::NO_CONTENT)
}
