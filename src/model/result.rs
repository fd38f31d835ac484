// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::{FinderError, FinderResult};

/// Engine output exactly as produced, before normalization.
///
/// Keys use the engine's camel-case convention and the object is expected to
/// hold a `metadata` object and a `names` array.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawResult(Map<String, Value>);

impl RawResult {
    /// Parses the JSON document handed over by the native engine.
    pub fn from_json(json: &str) -> FinderResult<Self> {
        match serde_json::from_str::<Value>(json)? {
            Value::Object(map) => Ok(Self(map)),
            other => Err(FinderError::Schema(format!(
                "expected a JSON object, got {}",
                json_type_name(&other)
            ))),
        }
    }

    pub fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    pub fn has_metadata(&self) -> bool {
        matches!(self.0.get("metadata"), Some(Value::Object(_)))
    }
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Normalized find-names result.
///
/// Metadata reported by the engine sits at the top level next to `names`.
/// Metadata keys without a dedicated field are kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanonicalResult {
    pub date: Option<String>,
    pub language_detected: Option<String>,
    pub language_used: Option<String>,
    pub language_forced: bool,
    pub total_tokens: u64,
    pub total_candidates: u64,
    pub total_names: u64,
    pub finder_version: Option<String>,
    pub names: Vec<NameMatch>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A scientific name located in the input text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NameMatch {
    /// Normalized form of the name.
    pub name: String,
    /// The name exactly as it appears in the text.
    pub verbatim: String,
    /// Bayesian odds; `0.0` when no statistical scoring was done.
    pub odds: f64,
    pub offset_start: u64,
    pub offset_end: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annot_nomen: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annot_nomen_type: Option<AnnotNomenType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification: Option<Verification>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NameMatch {
    /// Offsets are in order. The engine guarantees this for located names.
    pub fn has_valid_offsets(&self) -> bool {
        self.offset_start <= self.offset_end
    }

    /// Best verification match, if verification was requested and succeeded.
    pub fn best_result(&self) -> Option<&MatchResult> {
        self.verification.as_ref()?.best_result.as_ref()
    }
}

/// Nomenclatural annotation found next to a name (e.g. "sp. nov.").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AnnotNomenType {
    NoAnnot,
    SpNov,
    CombNov,
    SubspNov,
    /// A symbol this crate does not know, kept as the engine sent it.
    Other(String),
}

impl AnnotNomenType {
    pub fn as_str(&self) -> &str {
        match self {
            AnnotNomenType::NoAnnot => "NO_ANNOT",
            AnnotNomenType::SpNov => "SP_NOV",
            AnnotNomenType::CombNov => "COMB_NOV",
            AnnotNomenType::SubspNov => "SUBSP_NOV",
            AnnotNomenType::Other(raw) => raw,
        }
    }
}

impl From<String> for AnnotNomenType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "NO_ANNOT" => AnnotNomenType::NoAnnot,
            "SP_NOV" => AnnotNomenType::SpNov,
            "COMB_NOV" => AnnotNomenType::CombNov,
            "SUBSP_NOV" => AnnotNomenType::SubspNov,
            _ => AnnotNomenType::Other(raw),
        }
    }
}

impl From<AnnotNomenType> for String {
    fn from(value: AnnotNomenType) -> Self {
        match value {
            AnnotNomenType::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

/// Verification of a name against external data sources.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Verification {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_result: Option<MatchResult>,
    /// One entry per preferred data source, in request order.
    pub preferred_results: Vec<MatchResult>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A single data-source match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchResult {
    pub match_type: MatchType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification_ids: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// How closely a name matched a data-source record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchType {
    Exact,
    Fuzzy,
    PartialExact,
    PartialFuzzy,
    #[default]
    None,
}

impl MatchType {
    /// Maps an engine match tag onto the canonical vocabulary.
    ///
    /// Tags are case-sensitive; anything unknown is `None`.
    pub fn from_engine_tag(tag: &str) -> Self {
        match tag {
            "ExactMatch" | "ExactCanonicalMatch" => MatchType::Exact,
            "FuzzyCanonicalMatch" => MatchType::Fuzzy,
            "ExactPartialMatch" => MatchType::PartialExact,
            "FuzzyPartialMatch" => MatchType::PartialFuzzy,
            _ => MatchType::None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchType::Exact => "EXACT",
            MatchType::Fuzzy => "FUZZY",
            MatchType::PartialExact => "PARTIAL_EXACT",
            MatchType::PartialFuzzy => "PARTIAL_FUZZY",
            MatchType::None => "NONE",
        }
    }
}

/// Engine version as reported by `version()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineVersion {
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build: Option<String>,
}
