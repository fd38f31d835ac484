// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};

use crate::errors::FinderResult;
use crate::proto::Params;

/// Options for a single find-names request.
///
/// Every field has a plain default, and each one is only transmitted to the
/// engine when it carries information. The engine applies its own defaults
/// to anything that is left out, so `false`, blank and zero values are never
/// put on the wire.
///
/// | field               | default | sent when             |
/// |---------------------|---------|-----------------------|
/// | `disable_bayes`     | `false` | `true`                |
/// | `language`          | `None`  | not blank             |
/// | `detect_language`   | `false` | `true`                |
/// | `with_verification` | `false` | `true`                |
/// | `sources`           | `[]`    | non-empty             |
/// | `context_tokens`    | `0`     | greater than zero     |
///
/// # Example
/// ```
/// use gnfinder::model::RequestOptions;
///
/// let opts = RequestOptions::default()
///     .with_language("eng")
///     .with_verification()
///     .with_sources(vec![1, 4]);
///
/// assert_eq!(
///     opts.to_json().unwrap(),
///     r#"{"language":"eng","verification":true,"sources":[1,4]}"#
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RequestOptions {
    /// Skip Bayesian scoring and rely on dictionaries only.
    pub disable_bayes: bool,
    /// Three-letter language code forced on the engine.
    pub language: Option<String>,
    /// Ask the engine to detect the language of the text.
    pub detect_language: bool,
    /// Verify found names against remote data sources.
    pub with_verification: bool,
    /// Preferred data-source ids, in preference order.
    pub sources: Vec<i32>,
    /// Number of tokens captured around each name.
    pub context_tokens: i32,
}

impl RequestOptions {
    pub fn without_bayes(mut self) -> Self {
        self.disable_bayes = true;
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_language_detection(mut self) -> Self {
        self.detect_language = true;
        self
    }

    pub fn with_verification(mut self) -> Self {
        self.with_verification = true;
        self
    }

    /// Sets preferred data sources. Verification results for these sources
    /// come back in the same order.
    pub fn with_sources(mut self, sources: Vec<i32>) -> Self {
        self.sources = sources;
        self
    }

    pub fn with_context_tokens(mut self, tokens: i32) -> Self {
        self.context_tokens = tokens;
        self
    }

    /// The language to transmit, if any. Blank values count as absent.
    pub fn wire_language(&self) -> Option<&str> {
        self.language
            .as_deref()
            .filter(|language| !language.trim().is_empty())
    }

    fn wire(&self) -> WireOptions<'_> {
        WireOptions {
            no_bayes: self.disable_bayes.then_some(true),
            language: self.wire_language(),
            detect_language: self.detect_language.then_some(true),
            verification: self.with_verification.then_some(true),
            sources: (!self.sources.is_empty()).then_some(self.sources.as_slice()),
            tokens_around: (self.context_tokens > 0).then_some(self.context_tokens),
        }
    }

    /// Encodes the options blob passed to the native engine.
    pub fn to_json(&self) -> FinderResult<String> {
        Ok(serde_json::to_string(&self.wire())?)
    }

    /// Builds the request message for the remote engine.
    pub fn to_params(&self, text: &str) -> Params {
        let wire = self.wire();
        Params {
            text: text.to_string(),
            no_bayes: wire.no_bayes,
            language: wire.language.map(str::to_string),
            detect_language: wire.detect_language,
            verification: wire.verification,
            sources: wire.sources.map(<[i32]>::to_vec).unwrap_or_default(),
            tokens_around: wire.tokens_around,
        }
    }
}

/// Sparse wire encoding of [`RequestOptions`].
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WireOptions<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    no_bayes: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    detect_language: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    verification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sources: Option<&'a [i32]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tokens_around: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_send_nothing() {
        let opts = RequestOptions::default();
        assert_eq!(opts.to_json().unwrap(), "{}");

        let params = opts.to_params("Pardosa moesta is a spider");
        assert_eq!(params.text, "Pardosa moesta is a spider");
        assert_eq!(params.no_bayes, None);
        assert_eq!(params.language, None);
        assert_eq!(params.detect_language, None);
        assert_eq!(params.verification, None);
        assert!(params.sources.is_empty());
        assert_eq!(params.tokens_around, None);
    }

    #[test]
    fn test_all_options_use_engine_key_names() {
        let opts = RequestOptions::default()
            .without_bayes()
            .with_language("deu")
            .with_language_detection()
            .with_verification()
            .with_sources(vec![1, 4])
            .with_context_tokens(3);

        let json: serde_json::Value = serde_json::from_str(&opts.to_json().unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "noBayes": true,
                "language": "deu",
                "detectLanguage": true,
                "verification": true,
                "sources": [1, 4],
                "tokensAround": 3
            })
        );
    }

    #[test]
    fn test_blank_language_is_omitted() {
        for blank in ["", "   ", "\t\n"] {
            let opts = RequestOptions::default().with_language(blank);
            assert_eq!(opts.wire_language(), None);
            assert_eq!(opts.to_json().unwrap(), "{}");
            assert_eq!(opts.to_params("x").language, None);
        }
    }

    #[test]
    fn test_unknown_language_is_passed_through() {
        // The engine decides what to do with codes it does not know.
        let opts = RequestOptions::default().with_language("whatisit");
        assert_eq!(opts.to_json().unwrap(), r#"{"language":"whatisit"}"#);
    }

    #[test]
    fn test_non_positive_context_tokens_are_omitted() {
        for tokens in [0, -1, -20] {
            let opts = RequestOptions::default().with_context_tokens(tokens);
            assert_eq!(opts.to_json().unwrap(), "{}");
            assert_eq!(opts.to_params("x").tokens_around, None);
        }
        let opts = RequestOptions::default().with_context_tokens(5);
        assert_eq!(opts.to_params("x").tokens_around, Some(5));
    }

    #[test]
    fn test_source_order_is_preserved() {
        let opts = RequestOptions::default().with_sources(vec![12, 1, 4]);
        assert_eq!(opts.to_params("x").sources, vec![12, 1, 4]);
        assert_eq!(opts.to_json().unwrap(), r#"{"sources":[12,1,4]}"#);
    }

    #[test]
    fn test_deserialize_from_yaml_with_defaults() {
        let yaml = r#"
language: eng
with_verification: true
sources: [1, 4]
"#;
        let opts: RequestOptions = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(opts.language.as_deref(), Some("eng"));
        assert!(opts.with_verification);
        assert!(!opts.disable_bayes);
        assert_eq!(opts.sources, vec![1, 4]);
        assert_eq!(opts.context_tokens, 0);
    }
}
