//! API error types for the warframe.market REST client.

use reqwest::StatusCode;
use thiserror::Error;

/// Error type for every client operation.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The API answered with a non-2xx status.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// The request could not be completed (connect, TLS, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The body was not JSON or did not match the expected shape.
    #[error("Decode error ({context}): {source}")]
    Decode {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// An operation was attempted after the client was closed.
    #[error("Client is closed")]
    Closed,

    /// The endpoint is known to be broken upstream; no request was sent.
    #[error("Feature unavailable: {endpoint} is currently non-functional on warframe.market")]
    Unavailable { endpoint: String },

    /// Invalid parameter provided
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

impl ApiError {
    pub(crate) fn decode(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Decode {
            context: context.into(),
            source,
        }
    }

    /// HTTP status of a [`ApiError::Transport`] error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport(e) => Some(e.status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Transport(e) if e.kind == StatusKind::NotFound)
    }

    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::Transport(e) if e.kind == StatusKind::RateLimited)
    }
}

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Classification of a non-2xx status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// 400
    BadRequest,
    /// 401
    Unauthorized,
    /// 403
    Forbidden,
    /// 404, usually a slug that matches no item
    NotFound,
    /// 429
    RateLimited,
    /// 5xx
    ServerError,
    /// Anything else outside 2xx
    Unexpected,
}

impl StatusKind {
    pub fn from_status(status: StatusCode) -> Self {
        match status {
            StatusCode::BAD_REQUEST => Self::BadRequest,
            StatusCode::UNAUTHORIZED => Self::Unauthorized,
            StatusCode::FORBIDDEN => Self::Forbidden,
            StatusCode::NOT_FOUND => Self::NotFound,
            StatusCode::TOO_MANY_REQUESTS => Self::RateLimited,
            _ if status.is_server_error() => Self::ServerError,
            _ => Self::Unexpected,
        }
    }
}

/// A non-2xx response. The body is never read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("status {status} ({kind:?})")]
pub struct TransportError {
    pub status: u16,
    pub kind: StatusKind,
}

impl From<StatusCode> for TransportError {
    fn from(status: StatusCode) -> Self {
        Self {
            status: status.as_u16(),
            kind: StatusKind::from_status(status),
        }
    }
}
