use std::sync::Arc;

use axum::http::Request;
use clap::Parser;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use zipline_events::ConsoleSink;
use zipline_gateway::{router, AppState, Cli};
use zipline_registry::LinkRegistry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Flags and real environment variables win over .env entries.
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let events = Arc::new(ConsoleSink::with_operator(&cli.operator()));
    let registry = Arc::new(LinkRegistry::new(events.clone()));
    let state = AppState::new(registry, events, cli.base_url.clone());

    let app = router(state)
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                tracing::span!(
                    Level::INFO,
                    "http_request",
                    method = %request.method(),
                    path = %request.uri().path(),
                )
            }),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    let listener = tokio::net::TcpListener::bind(cli.listen_addr).await?;
    info!(
        listen_addr = %cli.listen_addr,
        base_url = %cli.base_url,
        "starting gateway"
    );
    axum::serve(listener, app).await?;

    Ok(())
}
