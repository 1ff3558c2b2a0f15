use axum::routing::get;

use enlist::error::Result;
use enlist::{app, initialize_state, telemetry};

#[tokio::main]
async fn main() -> Result<()> {
    telemetry::init_tracing();

    let state = initialize_state()?;
    let recorder = telemetry::setup_metrics_recorder()?;

    let port = state.config.port();
    let router = app(state).route(
        "/metrics",
        get(move || {
            let recorder = recorder.clone();
            async move { recorder.render() }
        }),
    );

    let listener =
        tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!(port, "server started");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "cannot listen for shutdown signal");
    }
}
