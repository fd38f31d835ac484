// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for engine gateway events.
//!
//! This module contains message types for logging events related to:
//! * Native library discovery and loading
//! * Remote service connections
//! * Engine call lifecycle and timing

use std::fmt::{Display, Formatter};
use std::time::Duration;

/// Native engine library located for the running platform.
///
/// # Log Level
/// `debug!` - Diagnostic information
///
/// # Example
/// ```
/// use gnfinder::observability::messages::gateway::LibraryResolved;
///
/// let msg = LibraryResolved {
///     platform: "linux",
///     library_path: "clib/linux/libgnfinder.so",
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct LibraryResolved<'a> {
    pub platform: &'a str,
    pub library_path: &'a str,
}

impl Display for LibraryResolved<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Resolved engine library for platform '{}': {}",
            self.platform, self.library_path
        )
    }
}

/// Native engine library loaded and its export resolved.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use gnfinder::observability::messages::gateway::LibraryLoaded;
///
/// let msg = LibraryLoaded {
///     library_path: "clib/linux/libgnfinder.so",
///     symbol: "FindNamesToJSON",
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct LibraryLoaded<'a> {
    pub library_path: &'a str,
    pub symbol: &'a str,
}

impl Display for LibraryLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Loaded engine library: {} (export '{}')",
            self.library_path, self.symbol
        )
    }
}

/// Native engine library could not be loaded.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct LibraryLoadFailed<'a> {
    pub library_path: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for LibraryLoadFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Failed to load engine library '{}': {}",
            self.library_path, self.error
        )
    }
}

/// Connection to the remote engine established.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use gnfinder::observability::messages::gateway::ConnectionEstablished;
///
/// let msg = ConnectionEstablished {
///     endpoint: "http://localhost:8778",
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct ConnectionEstablished<'a> {
    pub endpoint: &'a str,
}

impl Display for ConnectionEstablished<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Connected to remote engine at {}", self.endpoint)
    }
}

/// Connection to the remote engine failed.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct ConnectionFailed<'a> {
    pub endpoint: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for ConnectionFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Failed to connect to remote engine at {}: {}",
            self.endpoint, self.error
        )
    }
}

/// Engine call started.
///
/// # Log Level
/// `debug!` - Diagnostic information
pub struct CallStarted<'a> {
    pub gateway: &'a str,
    pub text_len: usize,
    pub options_json: &'a str,
}

impl Display for CallStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Calling {} engine: text_len={} bytes, options={}",
            self.gateway, self.text_len, self.options_json
        )
    }
}

/// Engine call returned a result.
///
/// # Log Level
/// `debug!` - Diagnostic information
///
/// # Example
/// ```
/// use gnfinder::observability::messages::gateway::CallCompleted;
/// use std::time::Duration;
///
/// let msg = CallCompleted {
///     gateway: "local",
///     output_size: 512,
///     elapsed: Duration::from_millis(12),
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct CallCompleted<'a> {
    pub gateway: &'a str,
    pub output_size: usize,
    pub elapsed: Duration,
}

impl Display for CallCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} engine call completed in {:?}: output={} bytes",
            self.gateway, self.elapsed, self.output_size
        )
    }
}

/// Engine call failed.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct CallFailed<'a> {
    pub gateway: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for CallFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{} engine call failed: {}", self.gateway, self.error)
    }
}

/// Native call returned without invoking its result callback.
///
/// # Log Level
/// `warn!` - The caller receives no result
pub struct CallbackNotInvoked<'a> {
    pub library_path: &'a str,
}

impl Display for CallbackNotInvoked<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Engine library '{}' returned without producing a result",
            self.library_path
        )
    }
}

/// Engine call exceeded its deadline.
///
/// # Log Level
/// `warn!` - Call abandoned
pub struct CallTimedOut<'a> {
    pub gateway: &'a str,
    pub timeout: Duration,
}

impl Display for CallTimedOut<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} engine call abandoned after {:?}",
            self.gateway, self.timeout
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_render_fields() {
        let msg = LibraryResolved {
            platform: "mac",
            library_path: "clib/mac/libgnfinder.so",
        };
        assert_eq!(
            msg.to_string(),
            "Resolved engine library for platform 'mac': clib/mac/libgnfinder.so"
        );

        let msg = CallTimedOut {
            gateway: "remote",
            timeout: Duration::from_secs(2),
        };
        assert_eq!(msg.to_string(), "remote engine call abandoned after 2s");
    }

    #[test]
    fn test_error_messages_include_cause() {
        let error = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let msg = ConnectionFailed {
            endpoint: "http://localhost:8778",
            error: &error,
        };
        assert!(msg.to_string().ends_with("http://localhost:8778: refused"));
    }
}
