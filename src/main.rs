//! nearcam relay service entry point.
//!
//! # Purpose
//! Wires configuration, the response cache, the webcam directory client,
//! and the HTTP router, then starts the API server and the metrics server.
//!
//! # Notes
//! The `build_state` helper keeps wiring testable and minimizes main setup
//! logic; `run_with_shutdown` is generic over the shutdown future so tests
//! can drive a full start/stop cycle.
use nearcam::app::{build_router, AppState};
use nearcam::cache::ResponseCache;
use nearcam::upstream::WebcamDirectoryClient;
use nearcam::{config, observability};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = config::RelayConfig::from_env_or_yaml()?;
    run_with_shutdown(config, async {
        let _ = tokio::signal::ctrl_c().await;
    })
    .await
}

async fn run_with_shutdown<F>(config: config::RelayConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let metrics_handle = observability::init_observability();
    let state = build_state(&config);
    let metrics_task = tokio::spawn(observability::serve_metrics(
        metrics_handle,
        config.metrics_bind,
    ));

    let app = build_router(state);

    let addr = config.bind_addr;
    tracing::info!(%addr, "nearcam relay listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tokio::pin!(shutdown);
    tokio::select! {
        result = axum::serve(listener, app.into_make_service()) => {
            result?;
        }
        _ = &mut shutdown => {}
    }

    metrics_task.abort();
    let _ = metrics_task.await;
    Ok(())
}

fn build_state(config: &config::RelayConfig) -> AppState {
    AppState {
        api_version: "v1".to_string(),
        default_radius_km: config.default_radius_km,
        cache_ttl_ms: config.cache_ttl_ms,
        cache: Arc::new(ResponseCache::new(Duration::from_millis(config.cache_ttl_ms))),
        directory: WebcamDirectoryClient::new(
            config.upstream_url.clone(),
            config.api_key.clone(),
            config.upstream_limit,
        ),
        cors_origin: config.cors_origin.clone(),
    }
}
