pub mod config;
mod routes;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

use std::sync::Arc;

use anyhow::Result;
use taskdeck_service::LocalService;
use tokio::net::TcpListener;
use tracing::info;

pub use routes::{build_router, AppState, InnerAppState};

pub async fn serve(listener: TcpListener, cors_origin: Option<String>) -> Result<()> {
    let state: AppState = Arc::new(InnerAppState {
        service: LocalService::new(),
    });
    let app = build_router(state, cors_origin.as_deref())?;
    info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
