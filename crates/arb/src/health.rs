//! Liveness endpoint for external uptime probing.

use std::net::SocketAddr;

use axum::{routing::get, Router};

async fn root() -> &'static str {
    "Bot is running"
}

pub async fn serve(port: u16) {
    let app = Router::new().route("/", get(root));

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!("health endpoint bind failed on {addr}: {e}");
            return;
        }
    };

    tracing::info!("health endpoint listening on {addr}");
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("health endpoint failed: {e}");
    }
}
