//! Shared handler state.

use std::sync::Arc;

use hireflow_core::{AuthService, CalendarProvider, Notifier, SchedulingService, TokenRepository};
use hireflow_domain::Config;
use hireflow_infra::{DbManager, SqliteInterviewRepository, SqliteTokenRepository};

/// State handed to every request handler.
#[derive(Clone)]
pub struct AppContext {
    pub scheduling: Arc<SchedulingService>,
    pub auth: Arc<AuthService>,
    pub db: DbManager,
    pub frontend_url: String,
}

impl AppContext {
    /// Wire the services over SQLite repositories. The calendar provider
    /// and notifier are injected so tests can substitute doubles.
    pub fn new(
        config: &Config,
        db: DbManager,
        calendar: Arc<dyn CalendarProvider>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let interviews = Arc::new(SqliteInterviewRepository::new(db.clone()));
        let tokens: Arc<dyn TokenRepository> = Arc::new(SqliteTokenRepository::new(db.clone()));

        let scheduling = Arc::new(SchedulingService::new(
            interviews,
            tokens.clone(),
            calendar.clone(),
            notifier,
            &config.workflow,
        ));
        let auth = Arc::new(AuthService::new(tokens, calendar, config.google.clone()));

        Self { scheduling, auth, db, frontend_url: config.frontend.url.clone() }
    }
}
