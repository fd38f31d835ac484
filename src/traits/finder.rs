// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;

use crate::errors::FinderResult;
use crate::model::{EngineVersion, RawResult, RequestOptions};

/// Access path into a name-finding engine.
///
/// Implemented by the local (native library) and remote (gRPC) gateways.
/// Implementations hold no request-scoped state, so one instance can serve
/// concurrent callers.
#[async_trait]
pub trait NameFinder: Send + Sync {
    /// Runs the engine over `text`.
    ///
    /// Returns `Ok(None)` when the engine produced no result at all, which is
    /// different from a result with an empty `names` list.
    async fn find_names(
        &self,
        text: &str,
        options: &RequestOptions,
    ) -> FinderResult<Option<RawResult>>;

    /// Liveness probe. Answers `"pong"`.
    async fn ping(&self) -> FinderResult<String>;

    /// Version of the engine behind this gateway.
    async fn version(&self) -> FinderResult<EngineVersion>;

    /// Short gateway name for logs.
    fn name(&self) -> &'static str;
}
