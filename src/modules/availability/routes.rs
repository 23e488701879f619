use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{calendar, list_periods, quote, select};
use crate::app_state::AppState;

pub fn availability_routes() -> Router<AppState> {
    Router::new()
        .route("/properties/{slug}/availability", get(list_periods))
        .route("/properties/{slug}/calendar", get(calendar))
        .route("/properties/{slug}/quote", get(quote))
        .route("/properties/{slug}/selection", post(select))
}
