use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use common::{
    dtos::{ConvertResultDto, ErrorDto},
    models::ConversionRequest,
    util::consts::CONVERT_ROUTE,
};
use tracing::{error, info, warn};

use crate::state::Services;

pub fn create_route(services: Services) -> Router {
    Router::new().route(CONVERT_ROUTE, post(convert_to_jpg)).with_state(services)
}

#[tracing::instrument(skip(services, payload))]
pub async fn convert_to_jpg(State(services): State<Services>, payload: Result<Json<ConversionRequest>, JsonRejection>) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(rejection),
    };

    match services.convert_service.convert_to_jpg(request).await {
        Ok(stored) => {
            info!("Stored {}", &stored.key);
            (StatusCode::OK, Json(ConvertResultDto::from(stored))).into_response()
        }
        Err(err) => {
            if err.is_client_error() {
                warn!("Rejected conversion: {}", &err);
            } else {
                error!("Conversion failed: {}", &err);
            }
            (err.status_code(), Json(ErrorDto::from(&err))).into_response()
        }
    }
}

/// Malformed bodies answer 400 like any other input error, oversized ones keep their 413.
fn rejection_response(rejection: JsonRejection) -> Response {
    let status = match rejection.status() {
        StatusCode::PAYLOAD_TOO_LARGE => StatusCode::PAYLOAD_TOO_LARGE,
        _ => StatusCode::BAD_REQUEST,
    };
    warn!("Rejected request body: {}", rejection.body_text());
    (status, Json(ErrorDto { error: rejection.body_text() })).into_response()
}
