// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::time::Duration;

use async_trait::async_trait;
use tokio::time::Instant;
use tonic::codec::Streaming;
use tonic::Status;

use super::convert::{metadata_to_json, name_to_json};
use super::finder::status_to_error;
use crate::errors::{FinderError, FinderResult};
use crate::model::{CanonicalResult, NameMatch};
use crate::normalizer::Normalizer;
use crate::proto::gnfinder_v1::find_names_event::Event;
use crate::proto::FindNamesEvent;

/// One normalized record of a streamed find-names call.
#[derive(Debug, Clone, PartialEq)]
pub enum StreamEvent {
    /// A name, delivered as soon as the engine found it.
    Name(NameMatch),
    /// The trailing metadata record. Its `names` list is empty.
    Summary(CanonicalResult),
}

/// Where streamed records come from.
#[async_trait]
pub(crate) trait EventSource: Send {
    async fn recv(&mut self) -> Result<Option<FindNamesEvent>, Status>;
}

#[async_trait]
impl EventSource for Streaming<FindNamesEvent> {
    async fn recv(&mut self) -> Result<Option<FindNamesEvent>, Status> {
        self.message().await
    }
}

/// Normalizing reader over a streamed find-names response.
///
/// The whole stream shares one deadline, counted from the moment the stream
/// was opened. The stream ends after the metadata record.
pub struct NameStream {
    source: Box<dyn EventSource>,
    deadline: Option<(Instant, Duration)>,
    finished: bool,
}

impl NameStream {
    pub(crate) fn new<S>(source: S, timeout: Option<Duration>) -> Self
    where
        S: EventSource + 'static,
    {
        Self {
            source: Box::new(source),
            deadline: timeout.map(|timeout| (Instant::now() + timeout, timeout)),
            finished: false,
        }
    }

    /// Next normalized record, or `None` once the stream is over.
    pub async fn next(&mut self) -> FinderResult<Option<StreamEvent>> {
        if self.finished {
            return Ok(None);
        }

        let received = match self.deadline {
            Some((deadline, timeout)) => tokio::time::timeout_at(deadline, self.source.recv())
                .await
                .map_err(|_| FinderError::Timeout(timeout))?,
            None => self.source.recv().await,
        };

        self.on_event(received.map_err(status_to_error)?)
    }

    fn on_event(&mut self, message: Option<FindNamesEvent>) -> FinderResult<Option<StreamEvent>> {
        match message {
            None => {
                self.finished = true;
                Ok(None)
            }
            Some(FindNamesEvent { event: Some(Event::Name(name)) }) => Ok(Some(
                StreamEvent::Name(Normalizer::normalize_name(name_to_json(name))?),
            )),
            Some(FindNamesEvent { event: Some(Event::Metadata(metadata)) }) => {
                self.finished = true;
                Ok(Some(StreamEvent::Summary(Normalizer::normalize_summary(
                    metadata_to_json(metadata),
                )?)))
            }
            Some(FindNamesEvent { event: None }) => {
                Err(FinderError::Schema("stream record carries no event".to_string()))
            }
        }
    }

    /// Drains the stream into one result, names in arrival order.
    ///
    /// A stream that ends without a metadata record is a protocol error.
    pub async fn collect(mut self) -> FinderResult<CanonicalResult> {
        let mut names = Vec::new();
        let mut summary = None;
        while let Some(event) = self.next().await? {
            match event {
                StreamEvent::Name(name) => names.push(name),
                StreamEvent::Summary(result) => summary = Some(result),
            }
        }

        let mut result = summary.ok_or(FinderError::MissingMetadata)?;
        result.names = names;
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    use crate::model::MatchType;
    use crate::proto::gnfinder_v1::{
        MatchType as WireMatchType, Metadata, NameString, ResultData, Verification,
    };

    /// Replays queued records, optionally pausing before each one.
    struct Replay {
        records: VecDeque<Result<FindNamesEvent, Status>>,
        delay: Duration,
    }

    impl Replay {
        fn new(records: Vec<Result<FindNamesEvent, Status>>) -> Self {
            Self {
                records: records.into(),
                delay: Duration::ZERO,
            }
        }

        fn paced(mut self, delay: Duration) -> Self {
            self.delay = delay;
            self
        }
    }

    #[async_trait]
    impl EventSource for Replay {
        async fn recv(&mut self) -> Result<Option<FindNamesEvent>, Status> {
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            self.records.pop_front().transpose()
        }
    }

    fn name(verbatim: &str, start: i32) -> Result<FindNamesEvent, Status> {
        Ok(FindNamesEvent {
            event: Some(Event::Name(NameString {
                name: verbatim.to_string(),
                verbatim: verbatim.to_string(),
                start: Some(start),
                end: Some(start + verbatim.len() as i32),
                verification: Some(Verification {
                    best_result: Some(ResultData {
                        data_source_id: 1,
                        match_type: WireMatchType::CanonicalExact as i32,
                        classification_ids: "3WD|3W5".to_string(),
                        ..Default::default()
                    }),
                    ..Default::default()
                }),
                ..Default::default()
            })),
        })
    }

    fn metadata() -> Result<FindNamesEvent, Status> {
        Ok(FindNamesEvent {
            event: Some(Event::Metadata(Metadata {
                language_used: "eng".to_string(),
                total_words: 9,
                total_names: 2,
                ..Default::default()
            })),
        })
    }

    #[tokio::test]
    async fn test_records_are_normalized_one_by_one() {
        let mut stream = NameStream::new(
            Replay::new(vec![name("Pardosa moesta", 0), metadata()]),
            None,
        );

        let Some(StreamEvent::Name(first)) = stream.next().await.unwrap() else {
            panic!("expected a name record first");
        };
        assert_eq!(first.offset_start, 0);
        assert_eq!(first.offset_end, 14);
        assert_eq!(first.odds, 0.0);
        let best = first.best_result().unwrap();
        assert_eq!(best.match_type, MatchType::Exact);
        assert_eq!(best.classification_ids.as_deref(), Some("3WD|3W5"));

        let Some(StreamEvent::Summary(summary)) = stream.next().await.unwrap() else {
            panic!("expected the metadata record");
        };
        assert_eq!(summary.total_tokens, 9);
        assert_eq!(summary.language_used.as_deref(), Some("eng"));
        assert!(summary.names.is_empty());
    }

    #[tokio::test]
    async fn test_stream_finishes_after_metadata() {
        // Anything the service sends after metadata is never read.
        let mut stream = NameStream::new(
            Replay::new(vec![metadata(), name("Aus bus", 0)]),
            None,
        );

        assert!(matches!(stream.next().await.unwrap(), Some(StreamEvent::Summary(_))));
        assert_eq!(stream.next().await.unwrap(), None);
        assert_eq!(stream.next().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_collect_assembles_result_in_arrival_order() {
        let stream = NameStream::new(
            Replay::new(vec![name("Pardosa moesta", 0), name("Bubo bubo", 30), metadata()]),
            None,
        );

        let result = stream.collect().await.unwrap();
        let names: Vec<_> = result.names.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["Pardosa moesta", "Bubo bubo"]);
        assert_eq!(result.names[1].offset_start, 30);
        assert_eq!(result.total_names, 2);
    }

    #[tokio::test]
    async fn test_collect_without_metadata_is_protocol_error() {
        let stream = NameStream::new(Replay::new(vec![name("Pardosa moesta", 0)]), None);

        let err = stream.collect().await.unwrap_err();
        assert!(matches!(err, FinderError::MissingMetadata));
        assert!(err.is_protocol());
    }

    #[tokio::test]
    async fn test_empty_record_is_schema_error() {
        let mut stream = NameStream::new(
            Replay::new(vec![Ok(FindNamesEvent { event: None })]),
            None,
        );

        let err = stream.next().await.unwrap_err();
        assert!(matches!(err, FinderError::Schema(_)));
    }

    #[tokio::test]
    async fn test_mid_stream_status_is_classified_like_unary_calls() {
        let mut stream = NameStream::new(
            Replay::new(vec![
                name("Pardosa moesta", 0),
                Err(Status::new(
                    tonic::Code::Unknown,
                    "Service was not ready: transport error",
                )),
            ]),
            None,
        );

        assert!(stream.next().await.unwrap().is_some());
        let err = stream.next().await.unwrap_err();
        assert!(matches!(err, FinderError::Connection(_)), "unexpected error: {err:?}");
        assert!(err.is_transport());

        let mut stream = NameStream::new(
            Replay::new(vec![Err(Status::internal("decode failure"))]),
            None,
        );
        assert!(stream.next().await.unwrap_err().is_protocol());
    }

    #[tokio::test]
    async fn test_one_deadline_covers_the_whole_stream() {
        // Each record alone arrives within the timeout; all of them do not.
        let timeout = Duration::from_millis(150);
        let mut stream = NameStream::new(
            Replay::new(vec![name("Aus bus", 0), name("Bus cus", 10), metadata()])
                .paced(Duration::from_millis(100)),
            Some(timeout),
        );

        assert!(stream.next().await.unwrap().is_some());
        let err = stream.next().await.unwrap_err();
        assert!(matches!(err, FinderError::Timeout(t) if t == timeout));
        assert!(err.is_transport());
    }
}
