use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errors surfaced by the signal service.
///
/// Upstream market-data failures never appear here: collaborators absorb
/// them and serve fallback data.
#[derive(Error, Debug)]
pub enum AppError {
    /// No stored signal for the requested symbol.
    #[error("{0}")]
    NotFound(String),

    /// The symbol maps to no known asset.
    #[error("Unknown symbol: {0}")]
    UnknownSymbol(String),
}

impl AppError {
    /// HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) | AppError::UnknownSymbol(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
