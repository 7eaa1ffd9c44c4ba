use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use showcase_api::config::{self, ServerConfig};
use showcase_api::router::build_app_router;
use showcase_api::state::AppState;
use showcase_db::DbPool;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ServerConfig::from_env().unwrap_or_else(|e| fail("Invalid configuration", e));
    let database_url = config::database_url().unwrap_or_else(|e| fail("Invalid configuration", e));

    let pool = open_store(&database_url).await;
    let app = build_app_router(AppState { pool }, &config);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| fail("Failed to bind listener", e));
    tracing::info!(%addr, cors_origins = ?config.cors_origins, "Showcase API listening");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        fail("Server error", e);
    }

    tracing::info!("Graceful shutdown complete");
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "showcase_api=debug,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Connect, confirm the database answers, and bring the schema up to date.
async fn open_store(database_url: &str) -> DbPool {
    let pool = showcase_db::create_pool(database_url)
        .await
        .unwrap_or_else(|e| fail("Failed to connect to database", e));

    if let Err(e) = showcase_db::health_check(&pool).await {
        fail("Database health check failed", e);
    }

    showcase_db::run_migrations(&pool)
        .await
        .unwrap_or_else(|e| fail("Failed to run database migrations", e));
    tracing::info!("Database ready, migrations applied");

    pool
}

/// Log a startup failure and exit non-zero.
fn fail(context: &str, err: impl std::fmt::Display) -> ! {
    tracing::error!(error = %err, "{context}");
    std::process::exit(1);
}

/// Resolves on SIGINT, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "Ctrl-C handler unavailable");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "SIGTERM handler unavailable");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("SIGINT received, shutting down"),
        () = terminate => tracing::info!("SIGTERM received, shutting down"),
    }
}
