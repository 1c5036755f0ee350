//! Error types for the radar client

use std::fmt;
use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// The two call shapes the client issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiCall {
    /// Starts a remote test run.
    Trigger,
    /// Queries the status of a started run.
    Results,
}

impl fmt::Display for ApiCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiCall::Trigger => f.write_str("trigger"),
            ApiCall::Results => f.write_str("results"),
        }
    }
}

/// Errors that can occur when calling the remote API
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP client construction failed
    #[error("failed to initialize HTTP client: {0}")]
    Init(#[source] reqwest::Error),

    /// The round trip itself failed (connect, timeout, I/O)
    #[error("{call} request failed: {source}")]
    Request {
        /// Which call was on the wire
        call: ApiCall,
        /// Underlying transport error
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with a non-success status code
    #[error("{call} request returned status {status}: {body}")]
    Status {
        /// Which call was on the wire
        call: ApiCall,
        /// HTTP status code
        status: u16,
        /// Response body, as far as it could be read
        body: String,
    },

    /// The response payload was missing the expected field or unparseable
    #[error("malformed {call} response: {reason}")]
    Payload {
        /// Which call was on the wire
        call: ApiCall,
        /// What went wrong while extracting the field
        reason: String,
    },
}

impl ClientError {
    /// The call this error belongs to, if it got as far as a request.
    pub fn call(&self) -> Option<ApiCall> {
        match self {
            ClientError::Init(_) => None,
            ClientError::Request { call, .. }
            | ClientError::Status { call, .. }
            | ClientError::Payload { call, .. } => Some(*call),
        }
    }

    /// Check if the underlying cause is an exceeded timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, ClientError::Request { source, .. } if source.is_timeout())
    }

    /// Check if the API answered with a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        matches!(self, ClientError::Status { status, .. } if *status >= 400 && *status < 500)
    }

    /// Check if the API answered with a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self, ClientError::Status { status, .. } if *status >= 500)
    }
}
