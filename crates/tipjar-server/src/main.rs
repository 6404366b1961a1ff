//! tipjar HTTP Server
//!
//! Axum-based server for the donation page: the checkout session endpoint
//! plus static hosting of the Leptos frontend.

mod config;
mod handlers;
mod routes;
mod state;

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tipjar_payments::StripeGateway;

use crate::config::ServerConfig;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // No Stripe key, no server
    let gateway = StripeGateway::from_env().inspect_err(|e| {
        tracing::error!("{}", e);
        tracing::error!("  Set STRIPE_SECRET_KEY in the environment or .env");
    })?;
    tracing::info!("✓ Stripe configured");

    let config = ServerConfig::from_env();
    match &config.public_base_url {
        Some(url) => tracing::info!("Checkout redirects to {}", url),
        None => tracing::info!("Checkout redirects follow the request Host header"),
    }

    let state = AppState {
        gateway: Arc::new(gateway),
        config: Arc::new(config.clone()),
    };

    let app = routes::router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("💝 tipjar server running on http://{}", config.bind_addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health                       - Health check");
    tracing::info!("  POST /api/create-checkout-session  - Create Stripe checkout");
    tracing::info!("  GET  /, /success                   - Web frontend ({})", config.static_dir);
    tracing::info!("");

    axum::serve(listener, app).await?;

    Ok(())
}
