/**
 * Error Conversion
 *
 * All backend errors implement `IntoResponse`, so handlers can return
 * `Result<_, BackendError>` and let Axum build the response.
 */

use axum::{
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }
        (status, Json(self.body())).into_response()
    }
}
