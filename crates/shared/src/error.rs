use thiserror::Error;

/// Failure to obtain a typed outcome from the orchestration service.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Http(String),
    #[error("unexpected http status {0}")]
    Status(u16),
    #[error("graphql errors: {}", .0.join("; "))]
    GraphQl(Vec<String>),
    #[error("response carried no data")]
    MissingData,
    #[error("failed to decode response: {0}")]
    Decode(String),
    #[error("{0}")]
    Unavailable(String),
}

impl TransportError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }
}
