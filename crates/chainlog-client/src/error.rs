use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid node URL: {0}")]
    InvalidUrl(String),

    #[error("data is required")]
    DataRequired,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("server error ({status}): {body}")]
    Server { status: u16, body: String },

    #[error("protocol error: {0}")]
    Protocol(#[from] chainlog_protocol::ProtocolError),
}

pub type ClientResult<T> = Result<T, ClientError>;
