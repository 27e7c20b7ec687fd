pub mod health;
pub mod tasks;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::http::{header, HeaderValue, Method};
use axum::Router;
use taskdeck_service::LocalService;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub struct InnerAppState {
    pub service: LocalService,
}

pub type AppState = Arc<InnerAppState>;

pub fn build_router(state: AppState, cors_origin: Option<&str>) -> Result<Router> {
    let router = Router::new()
        .merge(health::routes())
        .merge(tasks::routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    let Some(origin) = cors_origin else {
        return Ok(router);
    };
    let origin: HeaderValue = origin
        .parse()
        .with_context(|| format!("invalid cors origin: {origin}"))?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);
    Ok(router.layer(cors))
}
