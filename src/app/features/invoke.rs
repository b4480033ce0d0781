//! POST /invoke/:handler — Local emulation of the gateway: the request body is a full gateway event.

use std::str::FromStr;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};

use crate::app::{
    error::AppError,
    event::{self, GatewayEvent, Handler},
    response::ApiResponse,
    AppState,
};

pub async fn invoke(
    State(state): State<AppState>,
    Path(handler): Path<String>,
    body: String,
) -> Response {
    let handler = match Handler::from_str(&handler) {
        Ok(h) => h,
        Err(_) => return AppError::NotFound(format!("Unknown handler: {}", handler)).into_response(),
    };

    let event: GatewayEvent = match serde_json::from_str(&body) {
        Ok(e) => e,
        Err(_) => {
            return ApiResponse::<()>::error(StatusCode::BAD_REQUEST, "Malformed gateway event")
                .into_response()
        }
    };

    event::dispatch(&state, handler, &event).await.into_response()
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/invoke/:handler", post(invoke))
}
