//! Server startup and graceful shutdown

use std::future::Future;

use anyhow::{Context, Result};
use axum::Router;
use reelvault_core::Config;
use tokio::net::TcpListener;

/// Bind the configured port and serve until SIGINT or SIGTERM.
pub async fn start_server(config: &Config, app: Router) -> Result<()> {
    let addr = format!("0.0.0.0:{}", config.server_port);
    tracing::info!(addr = %addr, "Starting server");

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!(
        max_upload_mb = config.max_upload_bytes / 1024 / 1024,
        upload_dir = %config.upload_dir.display(),
        environment = %config.environment,
        "Server ready and accepting connections"
    );

    serve(listener, app, async {
        let signal = wait_for_shutdown_signal().await;
        tracing::info!(signal, "Shutdown requested, draining in-flight requests");
    })
    .await
}

/// Serve `app` on `listener` until `shutdown` resolves, then let in-flight
/// requests finish.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .context("Server terminated with an error")?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves with the name of the first shutdown signal received.
///
/// A handler that cannot be installed is logged and never fires, so the
/// other one still works.
async fn wait_for_shutdown_signal() -> &'static str {
    tokio::select! {
        name = interrupt() => name,
        name = terminate() => name,
    }
}

async fn interrupt() -> &'static str {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Could not listen for SIGINT");
        std::future::pending::<()>().await;
    }
    "SIGINT"
}

#[cfg(unix)]
async fn terminate() -> &'static str {
    use tokio::signal::unix::{signal, SignalKind};

    match signal(SignalKind::terminate()) {
        Ok(mut stream) => {
            stream.recv().await;
        }
        Err(e) => {
            tracing::warn!(error = %e, "Could not listen for SIGTERM");
            std::future::pending::<()>().await;
        }
    }
    "SIGTERM"
}

#[cfg(not(unix))]
async fn terminate() -> &'static str {
    std::future::pending::<&'static str>().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::routing::get;
    use std::time::Duration;
    use tokio::sync::oneshot;

    #[tokio::test]
    async fn test_serve_stops_when_shutdown_resolves() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let app = Router::new().route("/live", get(|| async { "OK" }));
        let (tx, rx) = oneshot::channel::<()>();

        let server = tokio::spawn(serve(listener, app, async {
            let _ = rx.await;
        }));

        tx.send(()).unwrap();
        let result = tokio::time::timeout(Duration::from_secs(5), server)
            .await
            .expect("server did not stop after shutdown")
            .unwrap();
        assert!(result.is_ok());
    }
}
