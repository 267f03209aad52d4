//! Notification dispatcher daemon. Drains the outbox that the workflow
//! commands fill, so email delivery never happens inline with a request.
use anyhow::Result;
use lawnation_core::application::notifications::NotificationDispatcher;
use lawnation_core::application::ports::mailer::Mailer;
use lawnation_core::application::ports::time::Clock;
use lawnation_core::config::AppConfig;
use lawnation_core::domain::outbox::OutboxRepository;
use lawnation_core::infrastructure::database;
use lawnation_core::infrastructure::mail::ResendMailer;
use lawnation_core::infrastructure::repositories::SqliteOutboxRepository;
use lawnation_core::infrastructure::time::SystemClock;
use std::sync::Arc;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::ensure_schema(&pool).await?;
    let pool = Arc::new(pool);

    let outbox_repo: Arc<dyn OutboxRepository> =
        Arc::new(SqliteOutboxRepository::new(Arc::clone(&pool)));
    let mailer: Arc<dyn Mailer> = Arc::new(ResendMailer::from_config(&config)?);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock::default());

    let dispatcher = NotificationDispatcher::new(
        outbox_repo,
        mailer,
        clock,
        config.outbox_batch_size(),
    );

    tracing::info!(
        interval_secs = config.dispatch_interval().as_secs(),
        batch_size = config.outbox_batch_size(),
        "notification dispatcher running"
    );
    dispatcher
        .run(config.dispatch_interval(), shutdown_signal())
        .await;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
