//! `hireflowd` - interview scheduling REST server.

use std::sync::Arc;

use anyhow::Context;
use hireflow_app::{router, AppContext};
use hireflow_core::{CalendarProvider, Notifier};
use hireflow_infra::{config, DbManager, NoopNotifier, SmtpNotifier, StubCalendarProvider};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = config::load().context("failed to load configuration")?;

    let db = DbManager::new(&config.database.path, config.database.pool_size)
        .context("failed to open database")?;
    db.run_migrations().context("failed to run migrations")?;

    let calendar: Arc<dyn CalendarProvider> = Arc::new(StubCalendarProvider::new());
    let notifier: Arc<dyn Notifier> = if config.smtp.enabled {
        Arc::new(SmtpNotifier::new(&config.smtp).context("failed to build SMTP notifier")?)
    } else {
        Arc::new(NoopNotifier::new())
    };

    let ctx = AppContext::new(&config, db, calendar, notifier);

    let listener = tokio::net::TcpListener::bind(&config.http.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.http.bind_addr))?;

    info!(bind_addr = %config.http.bind_addr, "hireflowd listening");

    axum::serve(listener, router(ctx)).await.context("server error")?;

    Ok(())
}
