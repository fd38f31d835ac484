// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Request and result types shared by both gateways and the normalizer.

mod options;
mod result;

pub use options::RequestOptions;
pub(crate) use result::json_type_name;
pub use result::{
    AnnotNomenType, CanonicalResult, EngineVersion, MatchResult, MatchType, NameMatch, RawResult,
    Verification,
};
