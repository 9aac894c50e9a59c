//! HTML front end: route table, handlers and pages.
//!
//! The router is built explicitly from an [`AppState`] and handed to
//! [`serve`]; there is no global registration.

pub mod handlers;
pub mod pages;
pub mod params;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::{lookup::LookupWorkflow, Result};

/// Shared, read-only state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub workflow: LookupWorkflow,
}

impl AppState {
    pub fn new(workflow: LookupWorkflow) -> Self {
        Self { workflow }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/health", get(handlers::health))
        .route("/player", post(handlers::player_search))
        .route("/player/select", post(handlers::player_selected))
        .route("/player/:player_id", get(handlers::player_by_id))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve `router` on `listener` until Ctrl-C.
pub async fn serve(listener: TcpListener, router: Router) -> Result<()> {
    info!(addr = %listener.local_addr()?, "mlb hitter lookup listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "could not install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
}
