use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use chainlog_ledger::LedgerError;
use chainlog_protocol::ProtocolError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid payload")]
    InvalidPayload,

    #[error("data is required")]
    DataRequired,

    #[error("replacement failed: {0}")]
    ReplacementFailed(LedgerError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServerResult<T> = Result<T, ServerError>;

impl ServerError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidPayload | Self::DataRequired | Self::ReplacementFailed(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Ledger(_)
            | Self::Protocol(_)
            | Self::Config(_)
            | Self::Io(_)
            | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Errors are single plain-text lines, the same shape existing nodes send.
impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let mut response = (status, format!("{self}\n")).into_response();
        let headers = response.headers_mut();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("text/plain; charset=utf-8"),
        );
        headers.insert(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        );
        response
    }
}
