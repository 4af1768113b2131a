//! CourseCast server - main entry point

use anyhow::Result;
use coursecast_common::logging::{init_logging, LogConfig};
use std::{future::IntoFuture, net::SocketAddr, time::Duration};
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use coursecast_server::{api, config::Config, db, features::FeatureState, seed};

#[tokio::main]
async fn main() -> Result<()> {
    let log_config = LogConfig::builder()
        .log_file_prefix("coursecast-server")
        .filter_directives("coursecast_server=debug,tower_http=debug,sqlx=info")
        .build()
        .with_env()?;

    let _log_guard = init_logging(&log_config)?;

    info!("Starting CourseCast server");

    let config = Config::load()?;
    info!(
        environment = ?config.environment,
        "Configuration loaded - server will bind to {}:{}",
        config.server.host, config.server.port
    );

    let pool = db::create_pool(&config.database).await?;
    db::run_migrations(&pool).await?;

    if config.seed_demo {
        seed::seed_demo(&pool).await?;
    }

    if tokio::fs::metadata(&config.videos.dir).await.is_err() {
        warn!(
            dir = %config.videos.dir.display(),
            "Video directory does not exist yet; video requests will return 404"
        );
    } else {
        info!(dir = %config.videos.dir.display(), "Serving videos");
    }

    let state = FeatureState::new(pool.clone(), &config);
    let app = api::create_router(state, &config);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on {}", addr);

    let shutdown = CancellationToken::new();
    let server = axum::serve(listener, app).with_graceful_shutdown({
        let shutdown = shutdown.clone();
        async move {
            shutdown_signal().await;
            shutdown.cancel();
        }
    });

    // In-flight requests get `shutdown_timeout_secs` to finish after the signal.
    let drain_deadline = async {
        shutdown.cancelled().await;
        info!(
            "Waiting up to {} seconds for connections to close",
            config.server.shutdown_timeout_secs
        );
        tokio::time::sleep(Duration::from_secs(config.server.shutdown_timeout_secs)).await;
    };

    tokio::select! {
        result = server.into_future() => result?,
        _ = drain_deadline => warn!("Shutdown timeout elapsed, closing remaining connections"),
    }

    pool.close().await;
    info!("Server shut down gracefully");

    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received terminate signal, starting graceful shutdown");
        },
    }
}
