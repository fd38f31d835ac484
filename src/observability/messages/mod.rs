// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements `Display` so that call sites only pick the
//! log level and the fields.
//!
//! * `gateway` - native library loading, remote connections, engine calls
//! * `normalizer` - result normalization
//!
//! # Usage Pattern
//!
//! ```rust
//! use gnfinder::observability::messages::gateway::CallStarted;
//!
//! let msg = CallStarted {
//!     gateway: "local",
//!     text_len: 26,
//!     options_json: "{}",
//! };
//!
//! tracing::debug!("{}", msg);
//! ```

pub mod gateway;
pub mod normalizer;
