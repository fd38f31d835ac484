// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging.
//!
//! This module provides centralized message types for all diagnostic and
//! operational logging in the crate. Message types follow a struct-based
//! pattern with a `Display` implementation to:
//!
//! * Keep log wording out of gateway and normalizer code
//! * Keep the output of the same event identical wherever it is logged
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::gateway` - library loading, connections and engine calls
//! * `messages::normalizer` - result normalization events
//!
//! # Usage
//!
//! ```rust
//! use gnfinder::observability::messages::gateway::CallFailed;
//!
//! let error = std::io::Error::new(std::io::ErrorKind::Other, "test error");
//! let msg = CallFailed {
//!     gateway: "remote",
//!     error: &error,
//! };
//!
//! tracing::error!("{}", msg);
//! ```

pub mod messages;
