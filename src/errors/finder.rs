// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Error types for gateway calls and result normalization.
//!
//! Every failure reported by this crate falls into one of three kinds (see
//! [`ErrorKind`]). An engine that legitimately finds nothing, or a native
//! callback that never fires, is not an error: those calls return `Ok(None)`
//! or an empty `names` list.

use std::time::Duration;
use thiserror::Error;

/// Coarse classification of a [`FinderError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Unresolvable platform, library or configuration. Raised once at
    /// construction time, never per call.
    Configuration,
    /// Remote connection refused, reset or timed out.
    Transport,
    /// Response does not conform to the expected schema.
    Protocol,
}

/// Error type for all engine gateway and normalizer operations.
#[derive(Error, Debug)]
pub enum FinderError {
    /// The running OS has no engine build.
    #[error("Unsupported platform: {0}")]
    UnsupportedPlatform(String),

    /// The native library could not be opened or lacks the expected export.
    #[error("Failed to load engine library '{path}': {reason}")]
    LibraryLoad { path: String, reason: String },

    /// Configuration file or value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The remote service could not be reached.
    #[error("Connection error: {0}")]
    Connection(String),

    /// The call did not complete before the configured deadline.
    #[error("Engine call timed out after {0:?}")]
    Timeout(Duration),

    /// The engine call was torn down before it produced anything.
    #[error("Engine call aborted: {0}")]
    Aborted(String),

    /// The request cannot be handed to the engine as given.
    #[error("Request rejected: {0}")]
    InvalidRequest(String),

    /// The remote service answered with a non-OK status.
    #[error("RPC failed: {0}")]
    Rpc(#[from] tonic::Status),

    /// Engine output lacks the top-level `metadata` object.
    #[error("Engine response is missing 'metadata'")]
    MissingMetadata,

    /// Engine output is not valid JSON.
    #[error("Malformed engine response: {0}")]
    MalformedJson(#[from] serde_json::Error),

    /// Engine output is valid JSON but has the wrong shape.
    #[error("Unexpected engine response: {0}")]
    Schema(String),
}

impl FinderError {
    /// Classifies this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            FinderError::UnsupportedPlatform(_)
            | FinderError::LibraryLoad { .. }
            | FinderError::InvalidConfig(_) => ErrorKind::Configuration,
            FinderError::Connection(_) | FinderError::Timeout(_) | FinderError::Aborted(_) => {
                ErrorKind::Transport
            }
            FinderError::Rpc(status) => {
                if is_transport_code(status.code()) {
                    ErrorKind::Transport
                } else {
                    ErrorKind::Protocol
                }
            }
            FinderError::InvalidRequest(_)
            | FinderError::MissingMetadata
            | FinderError::MalformedJson(_)
            | FinderError::Schema(_) => ErrorKind::Protocol,
        }
    }

    pub fn is_transport(&self) -> bool {
        self.kind() == ErrorKind::Transport
    }

    pub fn is_protocol(&self) -> bool {
        self.kind() == ErrorKind::Protocol
    }

    pub fn is_configuration(&self) -> bool {
        self.kind() == ErrorKind::Configuration
    }
}

impl From<tonic::transport::Error> for FinderError {
    fn from(err: tonic::transport::Error) -> Self {
        FinderError::Connection(err.to_string())
    }
}

/// Status codes that describe the channel rather than the payload.
fn is_transport_code(code: tonic::Code) -> bool {
    matches!(
        code,
        tonic::Code::Unavailable
            | tonic::Code::DeadlineExceeded
            | tonic::Code::Cancelled
            | tonic::Code::Aborted
            | tonic::Code::ResourceExhausted
    )
}

/// Result type alias for gateway and normalizer operations.
pub type FinderResult<T> = Result<T, FinderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_kinds() {
        assert_eq!(
            FinderError::UnsupportedPlatform("plan9".to_string()).kind(),
            ErrorKind::Configuration
        );
        let err = FinderError::LibraryLoad {
            path: "clib/linux/libgnfinder.so".to_string(),
            reason: "not found".to_string(),
        };
        assert!(err.is_configuration());
        assert!(err.to_string().contains("clib/linux/libgnfinder.so"));
    }

    #[test]
    fn test_rpc_status_is_split_by_code() {
        let unavailable = FinderError::Rpc(tonic::Status::unavailable("connection refused"));
        assert!(unavailable.is_transport());

        let deadline = FinderError::Rpc(tonic::Status::deadline_exceeded("too slow"));
        assert!(deadline.is_transport());

        let unimplemented = FinderError::Rpc(tonic::Status::unimplemented("no such method"));
        assert!(unimplemented.is_protocol());

        let internal = FinderError::Rpc(tonic::Status::internal("decode failure"));
        assert!(internal.is_protocol());
    }

    #[test]
    fn test_timeout_is_transport_not_empty() {
        let err = FinderError::Timeout(Duration::from_secs(3));
        assert_eq!(err.kind(), ErrorKind::Transport);
        assert!(err.to_string().contains("3s"));
    }

    #[test]
    fn test_aborted_and_rejected_kinds() {
        let aborted = FinderError::Aborted("task cancelled".to_string());
        assert!(aborted.is_transport());

        let rejected = FinderError::InvalidRequest("text contains a NUL byte".to_string());
        assert!(rejected.is_protocol());
        assert_eq!(rejected.to_string(), "Request rejected: text contains a NUL byte");
    }

    #[test]
    fn test_json_errors_are_protocol() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: FinderError = parse_err.into();
        assert!(err.is_protocol());
        assert!(FinderError::MissingMetadata.is_protocol());
        assert!(FinderError::Schema("names is not an array".to_string()).is_protocol());
    }
}
