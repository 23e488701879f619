use axum::{routing::post, Router};

use super::handlers::submit_inquiry;
use crate::app_state::AppState;

pub fn inquiry_routes() -> Router<AppState> {
    Router::new().route("/inquiries", post(submit_inquiry))
}
