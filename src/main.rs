use std::sync::Arc;

use anyhow::Context;
use dotenv::dotenv;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod app;
mod app_state;
mod booking;
mod config;
mod db;
mod error;
mod i18n;
mod listview;
mod mailer;
mod middleware;
mod modules;

use app_state::AppState;
use mailer::Mailer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=debug", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenv().ok();

    let config = config::Config::from_env().context("Failed to load configuration")?;

    let pool = db::init_pool(&config.database)
        .await
        .context("Failed to initialize database")?;

    let localizer = Arc::new(i18n::init_i18n().context("Failed to load locales")?);

    let mailer = Arc::new(Mailer::new(&config.mail));

    let addr = config.server_addr();
    let state = AppState::new(pool, config, localizer, mailer);
    let app = app::create_router(state);

    info!("Velamar backend listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app)
        .await
        .context("Failed to serve application")?;

    Ok(())
}
