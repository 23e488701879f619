use axum::{middleware, routing::get, Json, Router};
use serde_json::json;

use crate::{
    app_state::AppState,
    middleware::{language::language_middleware, request_log::request_log_middleware},
    modules::{
        admin::routes::admin_routes, availability::routes::availability_routes,
        inquiries::routes::inquiry_routes, pages::handlers::not_found,
        pages::routes::pages_routes,
    },
};

pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .merge(availability_routes())
        .merge(inquiry_routes());

    let static_dir = state.config.app.static_dir.to_string();

    Router::new()
        .merge(pages_routes())
        .route("/health", get(health_check))
        .nest("/api", api)
        .nest("/admin", admin_routes(state.clone()))
        .nest_service(
            "/static",
            tower_http::services::ServeDir::new(static_dir),
        )
        .fallback(not_found)
        .layer(middleware::from_fn(language_middleware))
        .layer(middleware::from_fn(request_log_middleware))
        .with_state(state)
}

async fn health_check(
    axum::extract::State(state): axum::extract::State<AppState>,
) -> Json<serde_json::Value> {
    let db_result = sqlx::query("SELECT 1").execute(&state.db).await;

    let db_status = match db_result {
        Ok(_) => "healthy",
        Err(e) => {
            tracing::info!("Database health check failed: {}", e);
            "unhealthy"
        }
    };

    Json(json!({
        "status": "ok",
        "timestamp": time::OffsetDateTime::now_utc()
            .format(&time::format_description::well_known::Rfc3339)
            .unwrap_or_default(),
        "version": env!("CARGO_PKG_VERSION"),
        "services": {
            "database": db_status,
        }
    }))
}
