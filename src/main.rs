//! Text Processor - chat-style front end for on-device AI
//!
//! Detects the language of submitted text and, per message, translates or
//! summarizes it through the host's on-device language detector,
//! translator, and summarizer.

mod api;
mod capability;
mod languages;
mod session;

use api::{create_router, AppState};
use capability::{CapabilityGateway, Gateway, HostConfig, HttpHost, LoggingGateway};
use session::SessionStore;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "text_processor=info,tower_http=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false),
        )
        .init();

    // Configuration
    let port: u16 = std::env::var("TEXT_PROCESSOR_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8000);

    let host_config = HostConfig::from_env();
    let host = match HttpHost::discover(&host_config).await {
        Ok(host) => {
            let features = host.features();
            if host_config.base_url.is_some() {
                tracing::info!(
                    language_detector = features.language_detector,
                    translator = features.translator,
                    summarizer = features.summarizer,
                    "Model host features discovered"
                );
            } else {
                tracing::warn!(
                    "No model host configured. Set TEXT_PROCESSOR_HOST_URL to enable on-device AI."
                );
            }
            host
        }
        Err(e) => {
            tracing::warn!(error = %e, "Model host discovery failed; all capabilities unavailable");
            HttpHost::unconfigured()
        }
    };

    // Session state lives for the life of the process
    let gateway: Arc<dyn Gateway> =
        Arc::new(LoggingGateway::new(CapabilityGateway::new(host)));
    let state = AppState::new(Arc::new(SessionStore::new(gateway)));

    // Create router
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let compression = CompressionLayer::new()
        .gzip(true)
        .br(true)
        .deflate(true)
        .zstd(true);

    let app = create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(compression);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Text processor listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
