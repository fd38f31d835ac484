// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for result normalization.

use std::fmt::{Display, Formatter};

/// Engine output arrived without a `metadata` object.
///
/// # Log Level
/// `warn!` - The result is rejected
pub struct MetadataMissing<'a> {
    pub source: &'a str,
}

impl Display for MetadataMissing<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Engine {} has no 'metadata' object", self.source)
    }
}

/// Engine reported a match tag outside the known vocabulary.
///
/// # Log Level
/// `debug!` - Mapped to NONE
pub struct UnknownMatchType<'a> {
    pub tag: &'a str,
}

impl Display for UnknownMatchType<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Unknown match type '{}', using NONE", self.tag)
    }
}

/// Raw result normalized.
///
/// # Log Level
/// `debug!` - Diagnostic information
///
/// # Example
/// ```
/// use gnfinder::observability::messages::normalizer::ResultNormalized;
///
/// let msg = ResultNormalized {
///     names: 3,
///     total_tokens: 120,
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct ResultNormalized {
    pub names: usize,
    pub total_tokens: u64,
}

impl Display for ResultNormalized {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Normalized engine result: names={}, total_tokens={}",
            self.names, self.total_tokens
        )
    }
}
