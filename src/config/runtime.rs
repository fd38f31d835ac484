// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use crate::backends::local::LocalFinder;
use crate::backends::remote::RemoteFinder;
use crate::config::{BackendType, Config};
use crate::errors::FinderResult;
use crate::traits::NameFinder;

/// Gateway builder - turns a configuration into a ready engine gateway.
///
/// The local backend loads the library right away, so a missing or broken
/// library is reported here as a configuration error. The remote backend
/// connects eagerly for the same reason.
///
/// # Examples
///
/// ```rust,no_run
/// use gnfinder::config::{load_and_validate_config, FinderBuilder};
///
/// # async fn run() -> Result<(), gnfinder::errors::FinderError> {
/// let config = load_and_validate_config("gnfinder.yaml")?;
/// let gateway = FinderBuilder::from_config(&config).await?;
/// assert_eq!(gateway.ping().await?, "pong");
/// # Ok(())
/// # }
/// ```
pub struct FinderBuilder;

impl FinderBuilder {
    /// Build the gateway selected by `cfg.backend`.
    ///
    /// For the local backend an explicit `library_path` wins over platform
    /// discovery under `library_dir`.
    pub async fn from_config(cfg: &Config) -> FinderResult<Arc<dyn NameFinder>> {
        let timeout = Some(cfg.gateway.timeout());
        match cfg.backend {
            BackendType::Local => {
                let finder = match &cfg.library_path {
                    Some(path) => LocalFinder::from_path(path, timeout)?,
                    None => LocalFinder::from_library_dir(cfg.library_dir(), timeout)?,
                };
                Ok(Arc::new(finder))
            }
            BackendType::Grpc => {
                let finder = RemoteFinder::connect(cfg.endpoint(), &cfg.gateway).await?;
                Ok(Arc::new(finder))
            }
        }
    }
}
