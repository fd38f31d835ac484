// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::future::Future;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tonic::transport::{Channel, Endpoint};
use tonic::{Request, Status};

use super::convert::output_to_raw;
use super::stream::NameStream;
use crate::config::GatewayOptions;
use crate::errors::{FinderError, FinderResult};
use crate::model::{EngineVersion, RawResult, RequestOptions};
use crate::observability::messages::gateway::{
    CallCompleted, CallFailed, CallStarted, CallTimedOut, ConnectionEstablished, ConnectionFailed,
};
use crate::proto::gnfinder_v1::Void;
use crate::proto::GnFinderClient;
use crate::traits::NameFinder;

const GATEWAY_NAME: &str = "remote";

/// Gateway into a name-finding service reached over gRPC.
///
/// The underlying channel multiplexes requests, so one `RemoteFinder` (or
/// any of its clones) can be shared by concurrent callers. Calls are never
/// retried.
///
/// # Example
/// ```rust,no_run
/// use gnfinder::backends::remote::RemoteFinder;
/// use gnfinder::config::GatewayOptions;
/// use gnfinder::traits::NameFinder;
///
/// # async fn run() -> Result<(), gnfinder::errors::FinderError> {
/// let finder = RemoteFinder::connect("http://localhost:8778", &GatewayOptions::default()).await?;
/// assert_eq!(finder.ping().await?, "pong");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RemoteFinder {
    client: GnFinderClient<Channel>,
    endpoint: String,
    timeout: Option<Duration>,
}

impl RemoteFinder {
    /// Connects eagerly, so an unreachable service is reported here rather
    /// than on the first call.
    pub async fn connect(endpoint: &str, options: &GatewayOptions) -> FinderResult<Self> {
        let channel = Self::endpoint(endpoint, options)?
            .connect()
            .await
            .map_err(|e| {
                let error = FinderError::Connection(format!("{}: {}", endpoint, e));
                tracing::error!(
                    "{}",
                    ConnectionFailed {
                        endpoint,
                        error: &error,
                    }
                );
                error
            })?;

        tracing::info!("{}", ConnectionEstablished { endpoint });
        Ok(Self::from_channel(channel, endpoint, Some(options.timeout())))
    }

    /// Builds the client without connecting; the first call connects.
    pub fn connect_lazy(endpoint: &str, options: &GatewayOptions) -> FinderResult<Self> {
        let channel = Self::endpoint(endpoint, options)?.connect_lazy();
        Ok(Self::from_channel(channel, endpoint, Some(options.timeout())))
    }

    /// Wraps an existing channel.
    pub fn from_channel(channel: Channel, endpoint: &str, timeout: Option<Duration>) -> Self {
        Self {
            client: GnFinderClient::new(channel),
            endpoint: endpoint.to_string(),
            timeout,
        }
    }

    fn endpoint(endpoint: &str, options: &GatewayOptions) -> FinderResult<Endpoint> {
        let parsed = Endpoint::from_shared(endpoint.to_string()).map_err(|e| {
            FinderError::InvalidConfig(format!("invalid endpoint '{}': {}", endpoint, e))
        })?;
        Ok(parsed
            .connect_timeout(options.connect_timeout())
            .timeout(options.timeout()))
    }

    pub fn endpoint_url(&self) -> &str {
        &self.endpoint
    }

    /// Streaming variant of `find_names`: names are delivered one by one,
    /// followed by the metadata record.
    pub async fn stream(
        &self,
        text: &str,
        options: &RequestOptions,
    ) -> FinderResult<NameStream> {
        let mut client = self.client.clone();
        let request = self.request(options.to_params(text));
        let response = self
            .within_deadline(client.find_names_stream(request))
            .await?;
        Ok(NameStream::new(response.into_inner(), self.timeout))
    }

    fn request<T>(&self, message: T) -> Request<T> {
        let mut request = Request::new(message);
        if let Some(timeout) = self.timeout {
            request.set_timeout(timeout);
        }
        request
    }

    async fn within_deadline<T, F>(&self, call: F) -> FinderResult<T>
    where
        F: Future<Output = Result<T, Status>>,
    {
        let outcome = match self.timeout {
            Some(timeout) => tokio::time::timeout(timeout, call).await.map_err(|_| {
                tracing::warn!(
                    "{}",
                    CallTimedOut {
                        gateway: GATEWAY_NAME,
                        timeout,
                    }
                );
                FinderError::Timeout(timeout)
            })?,
            None => call.await,
        };
        outcome.map_err(status_to_error)
    }
}

/// The generated client reports a channel that never became ready as
/// `Unknown`; that is a connection problem, not a payload problem.
pub(super) fn status_to_error(status: Status) -> FinderError {
    let message = status.message();
    if status.code() == tonic::Code::Unknown
        && (message.starts_with("Service was not ready") || message.contains("transport error"))
    {
        FinderError::Connection(status.message().to_string())
    } else {
        FinderError::Rpc(status)
    }
}

#[async_trait]
impl NameFinder for RemoteFinder {
    async fn find_names(
        &self,
        text: &str,
        options: &RequestOptions,
    ) -> FinderResult<Option<RawResult>> {
        let params = options.to_params(text);
        tracing::debug!(
            "{}",
            CallStarted {
                gateway: GATEWAY_NAME,
                text_len: text.len(),
                options_json: &options.to_json()?,
            }
        );

        let started = Instant::now();
        let mut client = self.client.clone();
        let response = match self
            .within_deadline(client.find_names(self.request(params)))
            .await
        {
            Ok(response) => response,
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

        let output = response.into_inner();
        tracing::debug!(
            "{}",
            CallCompleted {
                gateway: GATEWAY_NAME,
                output_size: prost::Message::encoded_len(&output),
                elapsed: started.elapsed(),
            }
        );
        Ok(Some(output_to_raw(output)))
    }

    async fn ping(&self) -> FinderResult<String> {
        let mut client = self.client.clone();
        let pong = self.within_deadline(client.ping(self.request(Void {}))).await?;
        Ok(pong.into_inner().value)
    }

    async fn version(&self) -> FinderResult<EngineVersion> {
        let mut client = self.client.clone();
        let version = self
            .within_deadline(client.get_version(self.request(Void {})))
            .await?
            .into_inner();
        Ok(EngineVersion {
            version: version.version,
            build: (!version.build.is_empty()).then_some(version.build),
        })
    }

    fn name(&self) -> &'static str {
        GATEWAY_NAME
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quick_options() -> GatewayOptions {
        GatewayOptions {
            timeout_seconds: Some(2),
            connect_timeout_seconds: Some(1),
        }
    }

    #[tokio::test]
    async fn test_invalid_endpoint_is_configuration_error() {
        let err = RemoteFinder::connect("not a uri", &quick_options())
            .await
            .unwrap_err();
        assert!(err.is_configuration());
    }

    #[tokio::test]
    async fn test_unreachable_service_is_transport_error() {
        // Port 1 is reserved and nothing listens there.
        let err = RemoteFinder::connect("http://127.0.0.1:1", &quick_options())
            .await
            .unwrap_err();
        assert!(matches!(err, FinderError::Connection(_)));
        assert!(err.is_transport());
    }

    #[tokio::test]
    async fn test_lazy_client_reports_transport_error_on_call() {
        let finder = RemoteFinder::connect_lazy("http://127.0.0.1:1", &quick_options()).unwrap();
        assert_eq!(finder.endpoint_url(), "http://127.0.0.1:1");

        let err = finder
            .find_names("Pardosa moesta is a spider", &RequestOptions::default())
            .await
            .unwrap_err();
        assert!(err.is_transport(), "unexpected error kind: {err:?}");

        let err = finder.ping().await.unwrap_err();
        assert!(err.is_transport(), "unexpected error kind: {err:?}");
    }

    #[test]
    fn test_status_classification() {
        let err = status_to_error(Status::new(
            tonic::Code::Unknown,
            "Service was not ready: transport error",
        ));
        assert!(matches!(err, FinderError::Connection(_)));

        let err = status_to_error(Status::unknown("engine panicked"));
        assert!(err.is_protocol());

        let err = status_to_error(Status::unavailable("refused"));
        assert!(err.is_transport());
    }

    #[tokio::test]
    async fn test_live_service_when_configured() {
        let Ok(endpoint) = std::env::var("GNFINDER_ENDPOINT") else {
            return;
        };
        let finder = RemoteFinder::connect(&endpoint, &GatewayOptions::default())
            .await
            .unwrap();
        assert_eq!(finder.ping().await.unwrap(), "pong");
        assert!(finder.version().await.unwrap().version.starts_with('v'));

        let result = finder
            .stream("Pardosa moesta is a spider", &RequestOptions::default())
            .await
            .unwrap()
            .collect()
            .await
            .unwrap();
        assert_eq!(result.names[0].name, "Pardosa moesta");
    }
}
