use anyhow::Context as _;
use exceptra::prelude::*;
use tokio::signal;

mod modules;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    tracing::info!("🚀 Starting Demo Server...");

    let config = ConfigService::new();

    let router = Router::new()
        .nest(modules::person::BASE_PATH, modules::person::router())
        .layer(ExceptionLayer::new())
        .layer(RequestLogLayer::default());

    let host = config.get_or("HOST", "0.0.0.0");
    let port = config.get_or("PORT", "3000");
    let addr = format!("{}:{}", host, port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    tracing::info!("✅ Server running on http://127.0.0.1:{}", port);

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            shutdown_signal().await;
            tracing::info!("🛑 Initiating graceful shutdown...");
        })
        .await?;

    tracing::info!("👋 Server stopped");
    Ok(())
}

/// Complete when a shutdown signal is received (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal");
        },
    }
}
