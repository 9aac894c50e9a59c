//! `serve` command: run the HTML front end.

use tokio::net::TcpListener;
use tracing::info;

use crate::{
    config::Config,
    web::{build_router, serve, AppState},
    Result,
};

use super::build_workflow;

pub async fn handle_serve(config: &Config) -> Result<()> {
    let workflow = build_workflow(config)?;
    let router = build_router(AppState::new(workflow));

    info!(
        api = %config.api_base_url,
        timeout_secs = config.http_timeout.as_secs(),
        "stats api configured"
    );

    let listener = TcpListener::bind(config.bind_addr).await?;
    println!("Listening on http://{}", listener.local_addr()?);

    serve(listener, router).await
}
