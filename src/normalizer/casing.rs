// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Key casing conversion from the engine's camel case to snake case.

use regex::Regex;
use serde_json::{Map, Value};
use std::sync::OnceLock;

/// An uppercase/digit run followed by a capitalized word: `IDs`, `HTTPServer`.
fn acronym_boundary() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([A-Z0-9]+)([A-Z][a-z])").expect("static regex"))
}

/// A lowercase letter or digit followed by an uppercase letter.
fn word_boundary() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([a-z0-9])([A-Z])").expect("static regex"))
}

/// Converts one identifier, splitting acronym-trailing boundaries first and
/// ordinary camel-case boundaries second, then lowercasing.
///
/// `totalWords` becomes `total_words`, `classificationIDs` becomes
/// `classification_i_ds`.
pub(crate) fn snake_case(key: &str) -> String {
    let split = acronym_boundary().replace_all(key, "${1}_${2}");
    let split = word_boundary().replace_all(&split, "${1}_${2}");
    split.to_lowercase()
}

/// Rewrites every key of `map`, descending into nested objects and into
/// objects held by arrays. Array order is kept.
pub(crate) fn snake_case_keys(map: Map<String, Value>) -> Map<String, Value> {
    map.into_iter()
        .map(|(key, value)| (snake_case(&key), snake_case_value(value)))
        .collect()
}

fn snake_case_value(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(snake_case_keys(map)),
        Value::Array(items) => Value::Array(items.into_iter().map(snake_case_value).collect()),
        scalar => scalar,
    }
}
