// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

// Module declaration for generated protobuf code
#[path = "gnfinder.v1.rs"]
pub mod gnfinder_v1;

// Re-export the types for easier access
pub use gnfinder_v1::gn_finder_client::GnFinderClient;
pub use gnfinder_v1::{FindNamesEvent, Output, Params};
