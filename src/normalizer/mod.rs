// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Result normalization.
//!
//! Turns engine output into a [`CanonicalResult`]. The transformation is pure:
//! no I/O, no clocks, no randomness. The same raw result always produces the
//! same canonical result.
//!
//! # Pipeline
//!
//! ```text
//! RawResult
//!   → snake_case every key (recursively, arrays included)
//!   → hoist `metadata` keys to the top level
//!   → total_words → total_tokens
//!   → names defaulted to []
//!   → per name: renames, defaults, annotation symbol, match types
//!   → typed CanonicalResult
//! ```
//!
//! Streaming engines deliver names and metadata as separate records, so the
//! per-name and per-metadata halves are also available on their own through
//! [`Normalizer::normalize_name`] and [`Normalizer::normalize_summary`].

mod casing;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::errors::{FinderError, FinderResult};
use crate::model::{json_type_name, CanonicalResult, MatchType, NameMatch, RawResult};
use crate::observability::messages::normalizer::{
    MetadataMissing, ResultNormalized, UnknownMatchType,
};

const METADATA_KEY: &str = "metadata";
const NAMES_KEY: &str = "names";

/// Per-name field renames, applied after key casing.
const NAME_RENAMES: [(&str, &str); 4] = [
    ("start", "offset_start"),
    ("end", "offset_end"),
    ("annotation_nomen", "annot_nomen"),
    ("annotation_nomen_type", "annot_nomen_type"),
];

/// Stateless converter from engine output to canonical results.
pub struct Normalizer;

impl Normalizer {
    /// Normalizes a complete engine result.
    ///
    /// # Errors
    /// * [`FinderError::MissingMetadata`] when the raw result has no
    ///   `metadata` object. Nothing is defaulted in that case.
    /// * [`FinderError::Schema`] when `names` or one of its entries has the
    ///   wrong JSON type.
    pub fn normalize(raw: RawResult) -> FinderResult<CanonicalResult> {
        if !raw.has_metadata() {
            tracing::warn!("{}", MetadataMissing { source: "result" });
            return Err(FinderError::MissingMetadata);
        }

        let mut map = casing::snake_case_keys(raw.into_map());
        hoist_metadata(&mut map);
        finish_summary(&mut map);

        let names = match map.remove(NAMES_KEY) {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(names)) => names,
            Some(other) => {
                return Err(FinderError::Schema(format!(
                    "'names' must be an array, got {}",
                    json_type_name(&other)
                )))
            }
        };
        let names = names
            .into_iter()
            .map(|name| match name {
                Value::Object(fields) => Ok(Value::Object(canonical_name_fields(fields))),
                other => Err(FinderError::Schema(format!(
                    "name entries must be objects, got {}",
                    json_type_name(&other)
                ))),
            })
            .collect::<FinderResult<Vec<_>>>()?;
        map.insert(NAMES_KEY.to_string(), Value::Array(names));

        let result: CanonicalResult = into_typed(map)?;
        tracing::debug!(
            "{}",
            ResultNormalized {
                names: result.names.len(),
                total_tokens: result.total_tokens,
            }
        );
        Ok(result)
    }

    /// Normalizes one name record on its own, as emitted by a streaming
    /// engine.
    pub fn normalize_name(raw: Map<String, Value>) -> FinderResult<NameMatch> {
        let fields = canonical_name_fields(casing::snake_case_keys(raw));
        into_typed(fields)
    }

    /// Normalizes a trailing metadata record into a result with no names.
    ///
    /// The record may be the metadata object itself or an object wrapping it
    /// under `metadata`.
    pub fn normalize_summary(raw: Map<String, Value>) -> FinderResult<CanonicalResult> {
        let mut map = casing::snake_case_keys(raw);
        hoist_metadata(&mut map);
        finish_summary(&mut map);
        map.insert(NAMES_KEY.to_string(), Value::Array(Vec::new()));
        into_typed(map)
    }
}

fn into_typed<T: DeserializeOwned>(map: Map<String, Value>) -> FinderResult<T> {
    serde_json::from_value(Value::Object(map)).map_err(|e| FinderError::Schema(e.to_string()))
}

/// Moves every metadata key to the top level. Metadata wins on collisions.
fn hoist_metadata(map: &mut Map<String, Value>) {
    if let Some(Value::Object(metadata)) = map.remove(METADATA_KEY) {
        for (key, value) in metadata {
            map.insert(key, value);
        }
    }
}

fn finish_summary(map: &mut Map<String, Value>) {
    rename_key(map, "total_words", "total_tokens");
}

/// Moves `from` to `to`. A no-op when `from` is absent, so repeated
/// application is harmless.
fn rename_key(map: &mut Map<String, Value>, from: &str, to: &str) {
    if let Some(value) = map.remove(from) {
        map.insert(to.to_string(), value);
    }
}

/// Applies renames, defaults and enum mapping to one snake-cased name.
fn canonical_name_fields(mut fields: Map<String, Value>) -> Map<String, Value> {
    for (from, to) in NAME_RENAMES {
        rename_key(&mut fields, from, to);
    }

    // Only absent odds are defaulted; a wrong type fails in `into_typed`.
    let default_odds = match fields.get("odds") {
        None | Some(Value::Null) => true,
        Some(odds) => odds.as_f64().is_some_and(|odds| !odds.is_finite()),
    };
    if default_odds {
        fields.insert("odds".to_string(), Value::from(0.0));
    }
    for offset in ["offset_start", "offset_end"] {
        if fields.get(offset).map_or(true, Value::is_null) {
            fields.insert(offset.to_string(), Value::from(0));
        }
    }

    if fields.get("annot_nomen_type").is_some_and(Value::is_null) {
        fields.remove("annot_nomen_type");
    }

    if let Some(Value::Object(verification)) = fields.get_mut("verification") {
        if let Some(Value::Object(best)) = verification.get_mut("best_result") {
            canonical_match_fields(best);
        }
        if let Some(Value::Array(preferred)) = verification.get_mut("preferred_results") {
            for result in preferred.iter_mut() {
                if let Value::Object(result) = result {
                    canonical_match_fields(result);
                }
            }
        }
    }

    fields
}

/// Maps the engine match tag and fixes the acronym-split classification key.
fn canonical_match_fields(result: &mut Map<String, Value>) {
    let tag = result
        .get("match_type")
        .and_then(Value::as_str)
        .unwrap_or_default();
    let match_type = MatchType::from_engine_tag(tag);
    if match_type == MatchType::None && !tag.is_empty() && tag != "NoMatch" {
        tracing::debug!("{}", UnknownMatchType { tag });
    }
    result.insert(
        "match_type".to_string(),
        Value::from(match_type.as_str()),
    );
    rename_key(result, "classification_i_ds", "classification_ids");
}
