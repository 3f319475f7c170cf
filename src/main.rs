use axum::{body::Bytes, routing::any, Router};
use tokio::net::TcpListener;
use tracing::{error, info};

mod config;
mod error;
mod handlers;
mod models;

use crate::config::Config;
use crate::error::ServerError;
use crate::models::RoleScopesResponse;

const ROLE_SCOPES_PATH: &str = "/v1/roleScopes";

/// Shared application state. The payload is serialized once at startup and
/// only read afterwards; cloning shares the same buffer.
#[derive(Clone)]
pub struct AppState {
    pub role_scopes: Bytes,
}

impl AppState {
    pub fn new() -> anyhow::Result<Self> {
        let body = serde_json::to_vec(&RoleScopesResponse::fixture())?;
        Ok(Self {
            role_scopes: Bytes::from(body),
        })
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,role_scopes_stub=debug".into()),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;
    let state = AppState::new()?;
    let app = build_router(state);

    let addr = config.addr();
    let listener = bind(&addr).await.inspect_err(|err| {
        error!(%err, "Startup failed, is another instance already running?");
    })?;

    info!("Listening on http://{}", addr);
    info!("Serving canned role scopes on {}", ROLE_SCOPES_PATH);

    axum::serve(listener, app).await?;

    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(ROLE_SCOPES_PATH, any(handlers::role_scopes))
        .with_state(state)
}

pub async fn bind(addr: &str) -> Result<TcpListener, ServerError> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.to_string(),
            source,
        })
}
