use axum::{routing::get, Router};

use super::handlers::{destination, home, property, service};
use crate::app_state::AppState;

pub fn pages_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/destinations/{name}", get(destination))
        .route("/properties/{slug}", get(property))
        .route("/services/{slug}", get(service))
}
