/**
 * Error Conversion
 *
 * This module implements `IntoResponse` for `GateError`, allowing handlers
 * to return the error directly. The conversion is the per-request error
 * channel: internal failures are logged here with their full detail and
 * then reduced to a generic response, so no stack trace or query text ever
 * reaches the client.
 *
 * # Response Format
 *
 * Error responses are returned as JSON:
 * ```json
 * {
 *   "error": "Username is required",
 *   "status": 400
 * }
 * ```
 */

use axum::{
    body::Body,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::error::types::GateError;

impl IntoResponse for GateError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Internal classes are logged in full here; validation failures are
        // the caller's own input and only warrant a warning.
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::warn!("Request rejected: {}", self);
        }

        let message = self.public_message();
        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        Response::builder()
            .status(status)
            .header("Content-Type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap_or_else(
                |_| format!(r#"{{"error":"{}","status":{}}}"#, message, status.as_u16()),
            )))
            .unwrap_or_else(|_| {
                Response::builder()
                    .status(StatusCode::INTERNAL_SERVER_ERROR)
                    .body(Body::from("Internal Server Error"))
                    .unwrap()
            })
    }
}
