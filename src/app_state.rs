use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::i18n::Localizer;
use crate::mailer::Mailer;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    pub localizer: Arc<Localizer>,
    pub mailer: Arc<Mailer>,
}

impl AppState {
    pub fn new(db: PgPool, config: Config, localizer: Arc<Localizer>, mailer: Arc<Mailer>) -> Self {
        Self {
            db,
            config,
            localizer,
            mailer,
        }
    }
}
