// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Projection of service messages onto the engine's JSON output shape.
//!
//! The native engine and the service describe the same result. Projecting the
//! messages onto the native JSON shape (camel-case keys, verbose match tags)
//! lets one normalizer serve both gateways.

use serde_json::{Map, Value};

use crate::model::RawResult;
use crate::proto::gnfinder_v1::{
    AnnotNomenType, MatchType, Metadata, NameString, Output, ResultData, Verification,
};

pub(crate) fn output_to_raw(output: Output) -> RawResult {
    let mut map = Map::new();
    // Left out when absent so the normalizer reports it.
    if let Some(metadata) = output.metadata {
        map.insert("metadata".to_string(), Value::Object(metadata_to_json(metadata)));
    }
    map.insert(
        "names".to_string(),
        Value::Array(
            output
                .names
                .into_iter()
                .map(|name| Value::Object(name_to_json(name)))
                .collect(),
        ),
    );
    RawResult::from_map(map)
}

pub(crate) fn metadata_to_json(metadata: Metadata) -> Map<String, Value> {
    let mut map = Map::new();
    map.insert("date".to_string(), metadata.date.into());
    map.insert("finderVersion".to_string(), metadata.finder_version.into());
    map.insert("languageDetected".to_string(), metadata.language_detected.into());
    map.insert("languageUsed".to_string(), metadata.language_used.into());
    map.insert("languageForced".to_string(), metadata.language_forced.into());
    map.insert("totalWords".to_string(), metadata.total_words.into());
    map.insert("totalCandidates".to_string(), metadata.total_candidates.into());
    map.insert("totalNames".to_string(), metadata.total_names.into());
    map.insert("withBayes".to_string(), metadata.with_bayes.into());
    map.insert("tokensAround".to_string(), metadata.tokens_around.into());
    map
}

pub(crate) fn name_to_json(name: NameString) -> Map<String, Value> {
    let mut map = Map::new();
    map.insert("name".to_string(), name.name.into());
    map.insert("verbatim".to_string(), name.verbatim.into());
    if let Some(odds) = name.odds {
        map.insert("odds".to_string(), odds.into());
    }
    if let Some(start) = name.start {
        map.insert("start".to_string(), start.into());
    }
    if let Some(end) = name.end {
        map.insert("end".to_string(), end.into());
    }
    if !name.annotation_nomen.is_empty() {
        map.insert("annotationNomen".to_string(), name.annotation_nomen.into());
    }
    if let Ok(annotation) = AnnotNomenType::try_from(name.annotation_nomen_type) {
        map.insert(
            "annotationNomenType".to_string(),
            annotation.as_str_name().into(),
        );
    }
    if !name.words_before.is_empty() {
        map.insert("wordsBefore".to_string(), name.words_before.into());
    }
    if !name.words_after.is_empty() {
        map.insert("wordsAfter".to_string(), name.words_after.into());
    }
    if let Some(verification) = name.verification {
        map.insert(
            "verification".to_string(),
            Value::Object(verification_to_json(verification)),
        );
    }
    map
}

fn verification_to_json(verification: Verification) -> Map<String, Value> {
    let mut map = Map::new();
    if let Some(best) = verification.best_result {
        map.insert("bestResult".to_string(), Value::Object(result_to_json(best)));
    }
    map.insert(
        "preferredResults".to_string(),
        Value::Array(
            verification
                .preferred_results
                .into_iter()
                .map(|result| Value::Object(result_to_json(result)))
                .collect(),
        ),
    );
    map.insert("dataSourcesNum".to_string(), verification.data_sources_num.into());
    if !verification.error.is_empty() {
        map.insert("error".to_string(), verification.error.into());
    }
    map
}

fn result_to_json(result: ResultData) -> Map<String, Value> {
    let mut map = Map::new();
    map.insert("dataSourceId".to_string(), result.data_source_id.into());
    map.insert("dataSourceTitle".to_string(), result.data_source_title.into());
    map.insert("taxonId".to_string(), result.taxon_id.into());
    map.insert("matchedName".to_string(), result.matched_name.into());
    map.insert("matchedCanonical".to_string(), result.matched_canonical.into());
    map.insert("currentName".to_string(), result.current_name.into());
    map.insert("classificationPath".to_string(), result.classification_path.into());
    map.insert("classificationRanks".to_string(), result.classification_ranks.into());
    map.insert("classificationIDs".to_string(), result.classification_ids.into());
    map.insert("editDistance".to_string(), result.edit_distance.into());
    map.insert(
        "matchType".to_string(),
        engine_match_tag(result.match_type).into(),
    );
    map
}

/// The native engine's tag for a service match type.
fn engine_match_tag(value: i32) -> &'static str {
    match MatchType::try_from(value) {
        Ok(MatchType::Exact) => "ExactMatch",
        Ok(MatchType::CanonicalExact) => "ExactCanonicalMatch",
        Ok(MatchType::CanonicalFuzzy) => "FuzzyCanonicalMatch",
        Ok(MatchType::PartialExact) => "ExactPartialMatch",
        Ok(MatchType::PartialFuzzy) => "FuzzyPartialMatch",
        Ok(MatchType::None) | Err(_) => "NoMatch",
    }
}
