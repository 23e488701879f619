use axum::{
    extract::{Request, State},
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use serde_json::json;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::app_state::AppState;
use crate::db::repositories::SessionRepository;

pub const SESSION_COOKIE: &str = "velamar_admin";

/// The authenticated back-office operator, injected into request
/// extensions for handlers that care who acted.
#[derive(Debug, Clone, Copy)]
pub struct AdminContext {
    pub admin_user_id: Uuid,
}

/// Validates the admin session cookie against the session store. There
/// are no roles or scopes; an unexpired token is a valid admin.
pub async fn require_admin(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = match session_token(request.headers()) {
        Some(token) => token,
        None => return unauthorized(&request),
    };

    match SessionRepository::find_valid(&state.db, &token, OffsetDateTime::now_utc()).await {
        Ok(Some(session)) => {
            request.extensions_mut().insert(AdminContext {
                admin_user_id: session.admin_user_id,
            });
            next.run(request).await
        }
        Ok(None) => unauthorized(&request),
        Err(err) => {
            tracing::error!("Session lookup failed: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": { "message": "An internal server error occurred" } })),
            )
                .into_response()
        }
    }
}

/// API callers get a 401; browser page requests bounce to the login form.
fn unauthorized(request: &Request) -> Response {
    if request.uri().path().starts_with("/admin/api") {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": { "message": "Authentication failed" } })),
        )
            .into_response()
    } else {
        Redirect::to("/admin/login").into_response()
    }
}

pub fn session_token(headers: &HeaderMap) -> Option<String> {
    let cookie_header = headers.get("Cookie")?.to_str().ok()?;
    for pair in cookie_header.split(';') {
        let value = pair
            .trim()
            .strip_prefix(SESSION_COOKIE)
            .and_then(|rest| rest.strip_prefix('='));
        if let Some(value) = value {
            if !value.is_empty() {
                return Some(value.to_string());
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn extracts_the_session_cookie_among_others() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "Cookie",
            HeaderValue::from_static("lang=de; velamar_admin=abc123; theme=dark"),
        );
        assert_eq!(session_token(&headers), Some("abc123".to_string()));
    }

    #[test]
    fn missing_or_empty_cookie_yields_none() {
        assert_eq!(session_token(&HeaderMap::new()), None);

        let mut headers = HeaderMap::new();
        headers.insert("Cookie", HeaderValue::from_static("velamar_admin="));
        assert_eq!(session_token(&headers), None);
    }
}
