// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Caller-facing entry point.
//!
//! [`Finder`] pairs a gateway with default request options and runs every
//! engine result through the normalizer, so callers only ever see
//! [`CanonicalResult`]s.
//!
//! ```rust,no_run
//! use gnfinder::client::Finder;
//! use gnfinder::config::load_and_validate_config;
//!
//! # async fn run() -> Result<(), gnfinder::errors::FinderError> {
//! let config = load_and_validate_config("configs/grpc.yaml")?;
//! let finder = Finder::from_config(&config).await?;
//!
//! if let Some(result) = finder.find("Pardosa moesta is a spider").await? {
//!     for name in &result.names {
//!         println!("{} at {}..{}", name.name, name.offset_start, name.offset_end);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use crate::config::{Config, FinderBuilder};
use crate::errors::FinderResult;
use crate::model::{CanonicalResult, EngineVersion, RequestOptions};
use crate::normalizer::Normalizer;
use crate::traits::NameFinder;


/// A gateway plus the request options used when none are given.
#[derive(Clone)]
pub struct Finder {
    gateway: Arc<dyn NameFinder>,
    defaults: RequestOptions,
}

impl Finder {
    pub fn new(gateway: Arc<dyn NameFinder>, defaults: RequestOptions) -> Self {
        Self { gateway, defaults }
    }

    /// Builds the configured gateway and takes the configured defaults.
    pub async fn from_config(cfg: &Config) -> FinderResult<Self> {
        let gateway = FinderBuilder::from_config(cfg).await?;
        Ok(Self::new(gateway, cfg.defaults.clone()))
    }

    pub fn gateway_name(&self) -> &'static str {
        self.gateway.name()
    }

    pub fn defaults(&self) -> &RequestOptions {
        &self.defaults
    }

    /// Finds names in `text` with explicit options.
    ///
    /// `Ok(None)` means the engine produced nothing; it is not an error and is
    /// different from a result whose `names` list is empty.
    pub async fn find_names(
        &self,
        text: &str,
        options: &RequestOptions,
    ) -> FinderResult<Option<CanonicalResult>> {
        match self.gateway.find_names(text, options).await? {
            Some(raw) => Normalizer::normalize(raw).map(Some),
            None => Ok(None),
        }
    }

    /// Finds names in `text` with the default options.
    pub async fn find(&self, text: &str) -> FinderResult<Option<CanonicalResult>> {
        self.find_names(text, &self.defaults).await
    }

    pub async fn ping(&self) -> FinderResult<String> {
        self.gateway.ping().await
    }

    pub async fn version(&self) -> FinderResult<EngineVersion> {
        self.gateway.version().await
    }
}
