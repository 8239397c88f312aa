use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use common::dtos::{RootDto, RootLinks};
use common::util::consts::{CONVERT_ROUTE, NAME, VERSION};

pub fn create_route() -> Router {
    Router::new().route("/", get(root_links)).route("/health", get(health))
}

pub async fn root_links() -> Json<RootDto<'static>> {
    Json(RootDto {
        version: VERSION,
        name: NAME,
        _links: RootLinks { convert: CONVERT_ROUTE },
    })
}

#[tracing::instrument]
pub async fn health() -> StatusCode {
    StatusCode::OK
}
