use axum::{
    middleware,
    routing::{delete, get, patch, post, put},
    Router,
};

use super::customers::{
    create_customer, customers_export, customers_page, delete_customer, list_customers,
    update_customer,
};
use super::handlers::{dashboard, login, login_form, logout};
use super::inquiries::{inquiries_page, list_inquiries, update_inquiry_status};
use super::properties::{
    add_image, create_period, create_property, delete_image, delete_period, delete_property,
    list_periods, list_properties, properties_page, property_detail_page, update_period,
    update_property,
};
use crate::app_state::AppState;
use crate::middleware::auth::require_admin;

fn admin_api_routes() -> Router<AppState> {
    Router::new()
        .route("/properties", get(list_properties).post(create_property))
        .route("/properties/{id}", put(update_property).delete(delete_property))
        .route("/properties/{id}/periods", get(list_periods).post(create_period))
        .route("/periods/{id}", put(update_period).delete(delete_period))
        .route("/properties/{id}/images", post(add_image))
        .route("/images/{id}", delete(delete_image))
        .route("/customers", get(list_customers).post(create_customer))
        .route("/customers/{id}", put(update_customer).delete(delete_customer))
        .route("/inquiries", get(list_inquiries))
        .route("/inquiries/{id}/status", patch(update_inquiry_status))
}

pub fn admin_routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/", get(dashboard))
        .route("/logout", post(logout))
        .route("/properties", get(properties_page))
        .route("/properties/{id}", get(property_detail_page))
        .route("/customers", get(customers_page))
        .route("/customers/export.csv", get(customers_export))
        .route("/inquiries", get(inquiries_page))
        .nest("/api", admin_api_routes())
        .route_layer(middleware::from_fn_with_state(state, require_admin));

    Router::new()
        .route("/login", get(login_form).post(login))
        .merge(protected)
}
