use askama::Template;
use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{AppendHeaders, IntoResponse, Redirect, Response},
    Form,
};
use secrecy::ExposeSecret;
use time::{Duration, OffsetDateTime};

use super::password::{generate_session_token, verify_password};
use crate::app_state::AppState;
use crate::db::models::LoginCredentials;
use crate::db::repositories::SessionRepository;
use crate::error::AppResult;
use crate::middleware::auth::{session_token, SESSION_COOKIE};
use crate::modules::HtmlTemplate;

#[derive(Template)]
#[template(path = "admin/login.html")]
pub struct LoginTemplate {
    pub error: String,
}

pub async fn login_form() -> impl IntoResponse {
    HtmlTemplate(LoginTemplate {
        error: String::new(),
    })
}

fn session_cookie(token: &str, max_age_secs: i64, secure: bool) -> String {
    let mut cookie = format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        SESSION_COOKIE, token, max_age_secs
    );
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

pub async fn login(
    State(state): State<AppState>,
    Form(credentials): Form<LoginCredentials>,
) -> AppResult<Response> {
    let invalid = || {
        (
            StatusCode::UNAUTHORIZED,
            HtmlTemplate(LoginTemplate {
                error: "Invalid email or password".to_string(),
            }),
        )
            .into_response()
    };

    let admin = match SessionRepository::find_admin_by_email(&state.db, &credentials.email).await? {
        Some(admin) => admin,
        None => return Ok(invalid()),
    };

    if !verify_password(credentials.password.expose_secret(), &admin.password_hash) {
        tracing::info!(email = %credentials.email, "Rejected admin login");
        return Ok(invalid());
    }

    let token = generate_session_token();
    let ttl = Duration::hours(state.config.app.session_ttl_hours);
    let expires_at = OffsetDateTime::now_utc() + ttl;
    SessionRepository::create_session(&state.db, admin.id, &token, expires_at).await?;

    tracing::info!(email = %credentials.email, "Admin logged in");
    let cookie = session_cookie(&token, ttl.whole_seconds(), state.config.is_production());
    Ok((
        AppendHeaders([(header::SET_COOKIE, cookie)]),
        Redirect::to("/admin"),
    )
        .into_response())
}

pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> AppResult<Response> {
    if let Some(token) = session_token(&headers) {
        SessionRepository::delete_by_token(&state.db, &token).await?;
    }

    let cookie = session_cookie("", 0, state.config.is_production());
    Ok((
        AppendHeaders([(header::SET_COOKIE, cookie)]),
        Redirect::to("/admin/login"),
    )
        .into_response())
}

#[derive(Template)]
#[template(path = "admin/dashboard.html")]
pub struct DashboardTemplate {
    pub properties: i64,
    pub customers: i64,
    pub new_inquiries: i64,
}

pub async fn dashboard(State(state): State<AppState>) -> AppResult<Response> {
    let properties = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM properties")
        .fetch_one(&state.db)
        .await?;
    let customers = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM customers")
        .fetch_one(&state.db)
        .await?;
    let new_inquiries =
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM inquiries WHERE status = 'new'")
            .fetch_one(&state.db)
            .await?;

    Ok(HtmlTemplate(DashboardTemplate {
        properties,
        customers,
        new_inquiries,
    })
    .into_response())
}
