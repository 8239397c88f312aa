use std::time::Duration;

use axum::{error_handling::HandleErrorLayer, extract::DefaultBodyLimit, http::StatusCode, BoxError, Router};
use tower::{timeout::TimeoutLayer, ServiceBuilder};
use tower_http::trace::TraceLayer;

use crate::state::Services;

pub mod convert;
pub mod root;

pub fn create_app(services: Services, max_body_bytes: usize, request_timeout: Duration) -> Router {
    Router::new()
        .merge(root::create_route())
        .merge(convert::create_route(services))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(HandleErrorLayer::new(|_: BoxError| async { StatusCode::REQUEST_TIMEOUT }))
                .layer(TimeoutLayer::new(request_timeout)),
        )
}
