use axum::{Json, http::StatusCode, response::{IntoResponse, Response}};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::catalog::CatalogError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Not found")]
    NotFound,

    #[error("Configuration error: {0}")]
    Config(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "Not Found".to_string()),
            AppError::Config(msg) => {
                error!("configuration error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            AppError::Template(e) => {
                error!("template error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Page could not be rendered".to_string(),
                )
            }
            AppError::Catalog(e) => {
                error!("catalog error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Catalog error occurred".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: status.to_string(),
            message: error_message,
        });

        (status, body).into_response()
    }
}
