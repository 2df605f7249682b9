use std::net::SocketAddr;
use std::sync::Arc;

use tokio::signal;
use tracing_subscriber::EnvFilter;

use sheetmail::config::Config;
use sheetmail::notify::SmtpNotifier;
use sheetmail::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(&config.log_level)
        }))
        .init();

    tracing::info!("Starting sheetmail");
    tracing::info!("Sender email configured: {}", config.mail.sender_configured());
    tracing::info!("Recipient email configured: {}", config.mail.recipient_configured());
    tracing::info!("CORS origins: {}", config.cors_origins.join(", "));
    if config.debug {
        tracing::warn!("Debug mode on: internal error details are returned to callers");
    }

    let store = sheetmail::connect_store(&config.sheets);
    let notifier = Arc::new(SmtpNotifier::new(config.mail.clone()));

    let addr = SocketAddr::new(config.host, config.port);
    let app = sheetmail::build_app(Arc::new(AppState {
        config,
        store,
        notifier,
    }));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
