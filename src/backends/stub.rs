// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Mutex;

use serde_json::{json, Value};

use crate::config::consts::PONG;
use crate::errors::{FinderError, FinderResult};
use crate::model::{EngineVersion, RawResult, RequestOptions};
use crate::traits::NameFinder;

type Responder = Box<dyn Fn(&str, &RequestOptions) -> FinderResult<Option<RawResult>> + Send + Sync>;

/// A gateway that answers from recorded engine output instead of a real engine.
pub struct StubFinder {
    respond: Responder,
    last_options: Mutex<Option<RequestOptions>>,
}

impl StubFinder {
    pub fn new<F>(respond: F) -> Self
    where
        F: Fn(&str, &RequestOptions) -> FinderResult<Option<RawResult>> + Send + Sync + 'static,
    {
        Self {
            respond: Box::new(respond),
            last_options: Mutex::new(None),
        }
    }

    /// Always answers with the same recorded document.
    pub fn recorded(output: Value) -> Self {
        Self::new(move |_, _| match &output {
            Value::Object(map) => Ok(Some(RawResult::from_map(map.clone()))),
            other => Err(FinderError::Schema(format!("recorded output is {other}"))),
        })
    }

    /// The callback never fires.
    pub fn silent() -> Self {
        Self::new(|_, _| Ok(None))
    }

    /// Every call fails with the error produced by `error`.
    pub fn failing(error: fn() -> FinderError) -> Self {
        Self::new(move |_, _| Err(error()))
    }

    /// Replays what the engine reports for "Pardosa moesta is a spider",
    /// honouring the language and verification options the way the engine does.
    pub fn pardosa() -> Self {
        Self::new(|text, options| Ok(Some(pardosa_output(text, options))))
    }

    /// Options received by the most recent call.
    pub fn last_options(&self) -> Option<RequestOptions> {
        self.last_options.lock().ok().and_then(|guard| guard.clone())
    }
}

#[async_trait::async_trait]
impl NameFinder for StubFinder {
    async fn find_names(
        &self,
        text: &str,
        options: &RequestOptions,
    ) -> FinderResult<Option<RawResult>> {
        if let Ok(mut last) = self.last_options.lock() {
            *last = Some(options.clone());
        }
        (self.respond)(text, options)
    }

    async fn ping(&self) -> FinderResult<String> {
        Ok(PONG.to_string())
    }

    async fn version(&self) -> FinderResult<EngineVersion> {
        Ok(EngineVersion {
            version: "v0.19.0".to_string(),
            build: None,
        })
    }

    fn name(&self) -> &'static str {
        "stub"
    }
}

/// Languages the engine can be forced into.
const KNOWN_LANGUAGES: [&str; 2] = ["eng", "deu"];

fn pardosa_output(text: &str, options: &RequestOptions) -> RawResult {
    let forced = options
        .wire_language()
        .filter(|language| KNOWN_LANGUAGES.contains(language));

    let mut name = json!({
        "cardinality": 2,
        "verbatim": "Pardosa moesta",
        "name": "Pardosa moesta",
        "start": 0,
        "end": 14,
        "annotationNomenType": "NO_ANNOT",
    });
    if options.with_verification {
        name["verification"] = verification(&options.sources);
    }

    let output = json!({
        "metadata": {
            "date": "2021-01-05T10:12:44.5932-05:00",
            "finderVersion": "v0.19.0",
            "withBayes": !options.disable_bayes,
            "tokensAround": options.context_tokens,
            "languageUsed": forced.unwrap_or("eng"),
            "languageForced": forced.is_some(),
            "totalWords": text.split_whitespace().count(),
            "totalCandidates": 1,
            "totalNames": 1,
        },
        "names": [name],
    });

    match output {
        Value::Object(map) => RawResult::from_map(map),
        _ => RawResult::default(),
    }
}

fn verification(sources: &[i32]) -> Value {
    let preferred: Vec<Value> = sources
        .iter()
        .filter_map(|id| data_source(*id))
        .collect();
    json!({
        "bestResult": data_source(1),
        "preferredResults": preferred,
        "dataSourcesNum": 1,
    })
}

fn data_source(id: i32) -> Option<Value> {
    let (title, classification_ids) = match id {
        1 => ("Catalogue of Life", "3WD|3W5|6Q6B|3ZJ"),
        4 => ("NCBI", "131567|2759|33154|6656|6854|6893|33376|70014"),
        _ => return None,
    };
    Some(json!({
        "dataSourceId": id,
        "dataSourceTitle": title,
        "matchedName": "Pardosa moesta Banks, 1892",
        "matchedCanonical": "Pardosa moesta",
        "classificationIDs": classification_ids,
        "editDistance": 0,
        "matchType": "ExactMatch",
    }))
}
