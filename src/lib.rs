// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod backends;   // engine gateways
pub mod client;     // caller-facing facade
pub mod config;     // config + gateway builder
pub mod errors;     // error handling
pub mod model;      // request options + result types
pub mod normalizer; // raw engine output -> canonical result
pub mod observability;
pub mod proto;      // generated protobufs live here
pub mod traits;     // unified abstractions
