//! Unified error types for show-results.
//! Used by: config, store, handlers, main.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::view::ViewState;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("authentication rejected")]
    AuthenticationRejected,

    #[error("no record for metric: {0}")]
    RecordNotFound(String),

    #[error("store query failed: {0}")]
    StoreQuery(String),

    #[error("store connection failed: {0}")]
    StoreConnection(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::AuthenticationRejected => StatusCode::UNAUTHORIZED,
            Error::RecordNotFound(_) => StatusCode::NOT_FOUND,
            Error::StoreQuery(_) | Error::StoreConnection(_) | Error::Config(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Text shown to the caller. Never carries internal failure detail.
    pub fn user_message(&self) -> String {
        match self {
            Error::AuthenticationRejected => {
                "Invalid username or password. Please try again.".into()
            }
            Error::RecordNotFound(metric) => format!(
                "No analytics data found for the metric '{}'. Try submitting some data first.",
                metric
            ),
            Error::StoreQuery(_) | Error::StoreConnection(_) | Error::Config(_) => {
                "An error occurred while fetching analytics data.".into()
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        if let Error::StoreQuery(detail) = &self {
            tracing::error!(error = %detail, "database query failed");
        }
        (self.status(), ViewState::failed(self.user_message())).into_response()
    }
}

pub type Result<T> = std::result::Result<T, Error>;
