// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Engine gateways.
//!
//! Each gateway implements [`NameFinder`](crate::traits::NameFinder) and hands
//! back the engine's raw output; normalization happens above this layer.
//!
//! # Available Backends
//!
//! ## Local Backend
//! Loads the engine's native shared library and calls its `FindNamesToJSON`
//! export on a blocking worker thread:
//! - **Discovery**: `<library_dir>/<platform>/libgnfinder.so`, platform being
//!   `linux`, `mac` or `win`
//! - **Result delivery**: one-shot callback, surfaced as a return value
//! - **Bounded wait**: optional per-call timeout
//!
//! ## Remote Backend
//! Talks to the engine's gRPC service:
//! - **Unary**: `FindNames` returns the whole result at once
//! - **Streaming**: `FindNamesStream` delivers names one by one, then metadata
//! - **Sharing**: clients are cheap clones over one multiplexed channel
//!
//! ## Stub Backend (Test-Only)
//! Replays recorded engine output. NOT available in production builds.
//!
//! # Examples
//!
//! ```rust,no_run
//! use gnfinder::backends::local::LocalFinder;
//! use gnfinder::model::RequestOptions;
//! use gnfinder::traits::NameFinder;
//! use std::time::Duration;
//!
//! # async fn run() -> Result<(), gnfinder::errors::FinderError> {
//! let finder = LocalFinder::from_library_dir("clib", Some(Duration::from_secs(30)))?;
//! let raw = finder
//!     .find_names("Pardosa moesta is a spider", &RequestOptions::default())
//!     .await?;
//! assert!(raw.is_some());
//! # Ok(())
//! # }
//! ```

pub mod local;
pub mod remote;
#[cfg(test)]
pub mod stub;
