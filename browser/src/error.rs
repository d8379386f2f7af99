use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::export::ExportError;

/// Failures that end a request with a 500. Everything the user can recover
/// from is reported as a notice on the page instead.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to render page: {0}")]
    Render(#[from] askama::Error),
    #[error("failed to build workbook: {0}")]
    Export(#[from] ExportError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;
