// Framework bootstrap for the simulation service.

use crate::frameworks::config;
use crate::interface_adapters::clients::elevation::EpqsClient;
use crate::interface_adapters::clients::neows::NeoWsClient;
use crate::interface_adapters::clients::sbdb::SsdClient;
use crate::interface_adapters::routes;
use crate::interface_adapters::state::AppState;

use std::io::Result;
use std::net::SocketAddr;
use std::sync::Arc;

fn init_runtime() {
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

pub async fn run(listener: tokio::net::TcpListener) -> Result<()> {
    let address = listener.local_addr()?;
    let state = build_state()?;
    let app = routes::app(state);

    tracing::info!(%address, "listening");

    // Serve app and report errors rather than panicking.
    axum::serve(listener, app).await.inspect_err(|e| {
        tracing::error!(error = %e, "server error");
    })
}

pub async fn run_with_config() -> Result<()> {
    init_runtime();

    let address = SocketAddr::from(([0, 0, 0, 0], config::http_port()));

    // Bind TCP listener with error handling.
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .inspect_err(|e| {
            tracing::error!(%address, error = %e, "failed to bind");
        })?;

    run(listener).await
}

fn build_state() -> Result<Arc<AppState>> {
    // One pooled client shared by every upstream adapter; the per-call
    // timeout applies to each request it sends.
    let http = reqwest::Client::builder()
        .timeout(config::provider_timeout())
        .build()
        .map_err(|e| std::io::Error::other(format!("failed to initialize http client: {e}")))?;

    let api_key = config::nasa_api_key();
    if api_key.is_none() {
        tracing::warn!("NASA_API_KEY is not set; identifier-mode requests will be rejected");
    }

    Ok(Arc::new(AppState {
        elevation: Arc::new(EpqsClient::new(http.clone(), config::epqs_url())),
        catalog: Arc::new(NeoWsClient::new(http.clone(), config::neows_url(), api_key)),
        small_body: Arc::new(SsdClient::new(http, config::ssd_api_url())),
    }))
}
