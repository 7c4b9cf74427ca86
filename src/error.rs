use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::sheets::SheetError;

#[derive(Debug)]
pub enum AppError {
    Sheet(SheetError),
    Template(askama::Error),
    Timestamp(chrono::ParseError),
    BadHeader(Vec<String>),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Sheet(e) => {
                tracing::error!("Sheet error: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
            AppError::Template(e) => {
                tracing::error!("Template error: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
            AppError::Timestamp(e) => {
                tracing::error!("Stored timestamp did not match pattern: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
            AppError::BadHeader(header) => {
                tracing::error!("Unexpected sheet header row: {header:?}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
        }
    }
}

impl From<SheetError> for AppError {
    fn from(e: SheetError) -> Self {
        AppError::Sheet(e)
    }
}

impl From<askama::Error> for AppError {
    fn from(e: askama::Error) -> Self {
        AppError::Template(e)
    }
}

impl From<chrono::ParseError> for AppError {
    fn from(e: chrono::ParseError) -> Self {
        AppError::Timestamp(e)
    }
}
