//! HTTP service for the stockchat pipeline
//!
//! One read endpoint: `GET /stock/:symbol` runs a fresh collection pipeline
//! and returns the full state record, or an error status when the run did not
//! reach completion.

use std::net::SocketAddr;

use anyhow::Result;
use clap::Parser;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

mod config;
mod error;
mod routes;
mod state;

#[tokio::main]
async fn main() -> Result<()> {
    stockchat_utils::init_tracing("stockchat_api=info,info");

    let args = config::Args::parse();
    let data_config = stockchat_data::DataConfig::from_env()?;
    let app_state = state::AppState::from_config(&data_config)?;

    let router = routes::router()
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = args.listen.parse()?;
    info!(%addr, "starting stockchat-api");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
