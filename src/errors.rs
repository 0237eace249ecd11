use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::JsonResponse;

#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("{0}")]
    InvalidInput(&'static str),
    #[error("{0}")]
    NotFound(&'static str),
    #[error("database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct RequestErrorJson {
    pub msg: String,
}

impl RequestErrorJson {
    pub fn new(message: &str) -> RequestErrorJson {
        RequestErrorJson {
            msg: message.to_string(),
        }
    }
}

impl IntoResponse for RequestError {
    fn into_response(self) -> axum::response::Response {
        self.to_json_response().into_response()
    }
}

impl RequestError {
    pub fn status(&self) -> StatusCode {
        match self {
            RequestError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            RequestError::NotFound(_) => StatusCode::NOT_FOUND,
            RequestError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message. Store failures are never echoed back.
    pub fn message(&self) -> &str {
        match self {
            RequestError::InvalidInput(message) | RequestError::NotFound(message) => message,
            RequestError::DatabaseError(_) => "Internal Server Error",
        }
    }

    pub fn to_json_response(&self) -> JsonResponse<RequestErrorJson> {
        if let RequestError::DatabaseError(e) = self {
            tracing::error!(error = %e, "database error");
        }
        (self.status(), Json(RequestErrorJson::new(self.message())))
    }

    /// True when the store rejected a write because a referenced row is missing.
    pub fn is_foreign_key_violation(&self) -> bool {
        match self {
            RequestError::DatabaseError(sqlx::Error::Database(e)) => {
                e.message().contains("FOREIGN KEY constraint failed")
            }
            _ => false,
        }
    }
}
