// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;

use super::library::NativeLibrary;
use crate::config::consts::PONG;
use crate::errors::{FinderError, FinderResult};
use crate::model::{EngineVersion, RawResult, RequestOptions};
use crate::observability::messages::gateway::{
    CallCompleted, CallFailed, CallStarted, CallTimedOut, CallbackNotInvoked,
};
use crate::traits::NameFinder;

const GATEWAY_NAME: &str = "local";
const UNKNOWN_VERSION: &str = "unknown";

/// Gateway into an engine loaded from a native shared library.
///
/// Each call runs the native function on a blocking worker thread. The
/// engine's callback fires on that same thread before the native function
/// returns, so no result is ever delivered after the call has finished.
///
/// # Example
/// ```rust,no_run
/// use gnfinder::backends::local::LocalFinder;
/// use gnfinder::model::RequestOptions;
/// use gnfinder::traits::NameFinder;
///
/// # async fn run() -> Result<(), gnfinder::errors::FinderError> {
/// let finder = LocalFinder::from_library_dir("clib", None)?;
/// let raw = finder
///     .find_names("Pardosa moesta is a spider", &RequestOptions::default())
///     .await?;
/// assert!(raw.is_some());
/// # Ok(())
/// # }
/// ```
pub struct LocalFinder {
    library: Arc<NativeLibrary>,
    timeout: Option<Duration>,
}

impl LocalFinder {
    /// Wraps an already loaded library.
    ///
    /// `timeout` bounds how long a caller waits for the native call. The
    /// native call itself cannot be interrupted and keeps its worker thread
    /// until it returns.
    pub fn new(library: NativeLibrary, timeout: Option<Duration>) -> Self {
        Self {
            library: Arc::new(library),
            timeout,
        }
    }

    /// Loads the platform library found under `root`.
    pub fn from_library_dir<P: AsRef<Path>>(root: P, timeout: Option<Duration>) -> FinderResult<Self> {
        Ok(Self::new(NativeLibrary::load_for_platform(root)?, timeout))
    }

    /// Loads the library at an explicit path.
    pub fn from_path<P: AsRef<Path>>(path: P, timeout: Option<Duration>) -> FinderResult<Self> {
        Ok(Self::new(NativeLibrary::load(path)?, timeout))
    }

    pub fn library_path(&self) -> &Path {
        self.library.path()
    }

    async fn call_engine(&self, text: &str, options_json: String) -> FinderResult<Option<String>> {
        let library = Arc::clone(&self.library);
        let text = text.to_owned();
        let worker =
            tokio::task::spawn_blocking(move || library.find_names_json(&text, &options_json));

        let joined = match self.timeout {
            Some(timeout) => tokio::time::timeout(timeout, worker).await.map_err(|_| {
                tracing::warn!(
                    "{}",
                    CallTimedOut {
                        gateway: GATEWAY_NAME,
                        timeout,
                    }
                );
                FinderError::Timeout(timeout)
            })?,
            None => worker.await,
        };

        joined.map_err(|e| FinderError::Aborted(e.to_string()))?
    }
}

#[async_trait]
impl NameFinder for LocalFinder {
    async fn find_names(
        &self,
        text: &str,
        options: &RequestOptions,
    ) -> FinderResult<Option<RawResult>> {
        let options_json = options.to_json()?;
        tracing::debug!(
            "{}",
            CallStarted {
                gateway: GATEWAY_NAME,
                text_len: text.len(),
                options_json: &options_json,
            }
        );

        let started = Instant::now();
        let output = match self.call_engine(text, options_json).await {
            Ok(output) => output,
            Err(error) => {
                tracing::error!(
                    "{}",
                    CallFailed {
                        gateway: GATEWAY_NAME,
                        error: &error,
                    }
                );
                return Err(error);
            }
        };

        let Some(json) = output else {
            tracing::warn!(
                "{}",
                CallbackNotInvoked {
                    library_path: &self.library.path().display().to_string(),
                }
            );
            return Ok(None);
        };

        tracing::debug!(
            "{}",
            CallCompleted {
                gateway: GATEWAY_NAME,
                output_size: json.len(),
                elapsed: started.elapsed(),
            }
        );
        RawResult::from_json(&json).map(Some)
    }

    async fn ping(&self) -> FinderResult<String> {
        // A loaded library with a resolved export is as alive as it gets.
        Ok(PONG.to_string())
    }

    async fn version(&self) -> FinderResult<EngineVersion> {
        Ok(EngineVersion {
            version: self
                .library
                .version()
                .unwrap_or_else(|| UNKNOWN_VERSION.to_string()),
            build: None,
        })
    }

    fn name(&self) -> &'static str {
        GATEWAY_NAME
    }
}
