use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;

/// Domain errors that carry their own HTTP status and machine-checkable code.
/// Implementors get converted into [`AppError`] (and thus into a response)
/// through [`AppError::from_request_error`].
pub trait ApiRequestError: std::error::Error {
    fn status_code(&self) -> StatusCode;

    fn code(&self) -> &'static str {
        "ERR"
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),

    #[error("connection pool error: {0}")]
    Pool(#[from] diesel_async::pooled_connection::deadpool::PoolError),

    #[error("{msg}")]
    Request {
        status: StatusCode,
        code: &'static str,
        msg: String,
    },
}

impl AppError {
    pub fn from_request_error<E: ApiRequestError>(e: E) -> Self {
        AppError::Request {
            status: e.status_code(),
            code: e.code(),
            msg: e.to_string(),
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    code: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    msg: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match self {
            // Persistence failures are surfaced as opaque 500s. The detail
            // only goes to the logs.
            AppError::Database(e) => {
                tracing::error!(error = %e, "database error while handling request");
                internal_error()
            }
            AppError::Pool(e) => {
                tracing::error!(error = %e, "could not check out a database connection");
                internal_error()
            }
            AppError::Request { status, code, msg } => (
                status,
                ErrorResponse {
                    code,
                    msg: Some(msg),
                },
            ),
        };

        (status, Json(body)).into_response()
    }
}

fn internal_error() -> (StatusCode, ErrorResponse) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        ErrorResponse {
            code: "SERVER_ERR",
            msg: Some("Internal server error".into()),
        },
    )
}

impl From<(&'static str, StatusCode)> for AppError {
    fn from((msg, status): (&'static str, StatusCode)) -> Self {
        AppError::Request {
            status,
            code: "ERR",
            msg: msg.into(),
        }
    }
}

impl From<(String, StatusCode)> for AppError {
    fn from((msg, status): (String, StatusCode)) -> Self {
        AppError::Request {
            status,
            code: "ERR",
            msg,
        }
    }
}

impl From<&'static str> for AppError {
    fn from(msg: &'static str) -> Self {
        AppError::Request {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            code: "ERR",
            msg: msg.into(),
        }
    }
}

impl From<String> for AppError {
    fn from(msg: String) -> Self {
        AppError::Request {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            code: "ERR",
            msg,
        }
    }
}
