//! Translation of domain failures into HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::domains::fruits::FruitError;

/// JSON body of every error response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    pub status: u16,
}

/// Errors a route can return
#[derive(Debug)]
pub enum ApiError {
    /// Request could not be decoded (bad JSON, query or path segment)
    BadRequest(String),
    Fruit(FruitError),
}

impl ApiError {
    pub fn invalid_body() -> Self {
        ApiError::BadRequest("invalid request body".to_string())
    }

    pub fn invalid_query() -> Self {
        ApiError::BadRequest("invalid query string".to_string())
    }

    pub fn invalid_id() -> Self {
        ApiError::BadRequest("invalid fruit id".to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Fruit(FruitError::Validation(_)) => StatusCode::BAD_REQUEST,
            ApiError::Fruit(FruitError::NotFound) => StatusCode::NOT_FOUND,
            ApiError::Fruit(FruitError::Conflict(_)) => StatusCode::CONFLICT,
            ApiError::Fruit(FruitError::Repository(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::BadRequest(message) => message.clone(),
            ApiError::Fruit(err) => err.to_string(),
        }
    }
}

impl From<FruitError> for ApiError {
    fn from(err: FruitError) -> Self {
        ApiError::Fruit(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.message();

        if status.is_server_error() {
            error!(status = status.as_u16(), error = %message, "Request failed");
        } else {
            warn!(status = status.as_u16(), error = %message, "Request rejected");
        }

        (
            status,
            Json(ErrorBody {
                message,
                status: status.as_u16(),
            }),
        )
            .into_response()
    }
}
