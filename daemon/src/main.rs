use crate::error::StackTrace;
use crate::handler::AppModule;
use application::service::{RefreshCatalogService, SessionService};
use application::ticker::PenaltyTicker;
use driver::config::LibraryConfig;
use error_stack::ResultExt;
use kernel::KernelError;
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

mod error;
mod handler;

#[tokio::main]
async fn main() -> Result<(), StackTrace> {
    let _ = dotenvy::dotenv();

    let appender = tracing_appender::rolling::daily(std::path::Path::new("./logs/"), "debug.log");
    let (non_blocking_appender, _guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_filter(tracing_subscriber::EnvFilter::new(
                    std::env::var("RUST_LOG").unwrap_or_else(|_| {
                        "application=debug,driver=debug,daemon=debug".into()
                    }),
                ))
                .with_filter(tracing_subscriber::filter::LevelFilter::DEBUG),
        )
        .with(
            tracing_subscriber::fmt::Layer::default()
                .with_writer(non_blocking_appender)
                .with_ansi(false)
                .with_filter(tracing_subscriber::filter::LevelFilter::DEBUG),
        )
        .init();

    let config = LibraryConfig::from_env()?;
    info!("Starting with {config:?}");
    let app = AppModule::new(&config).await?;

    // An unreachable catalog API leaves the catalog empty; the ledger is unaffected.
    if let Err(report) = app.refresh_catalog().await {
        error!("Failed to fetch catalog: {report:?}");
    }
    match app.current_session().await? {
        Some(session) => info!("Restored session of {}", session.user.username),
        None => info!("No active session"),
    }

    let ticker = PenaltyTicker::start(app.clone(), *config.tick_period());

    tokio::signal::ctrl_c()
        .await
        .change_context_lazy(|| KernelError::Internal)
        .attach_printable_lazy(|| "Failed to listen for shutdown signal")?;

    info!("Shutting down");
    ticker.stop().await;
    Ok(())
}
