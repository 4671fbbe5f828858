use push_router::config::{resolve_port, resolve_scope};
use push_router::{load_data, resolve_data_path, router, AppState, WorkerEvent};
use std::net::SocketAddr;
use tokio::fs;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let data_path = resolve_data_path()?;
    if let Some(parent) = data_path.parent() {
        fs::create_dir_all(parent).await?;
    }

    let port = resolve_port();
    let scope = resolve_scope(port)?;
    let data = load_data(&data_path).await;
    let state = AppState::new(data_path, data, scope);

    state.worker.handle(WorkerEvent::Install).await?;
    state.worker.handle(WorkerEvent::Activate).await?;

    let app = router(state);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutting down"),
        Err(err) => error!("failed to listen for shutdown signal: {err}"),
    }
}
