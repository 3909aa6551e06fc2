//! Shared test utilities for the metalint workspace.
//!
//! This crate exists because `xtask` needs `normalize_nondeterministic` at
//! runtime (not behind `#[cfg(test)]`), so a `#[cfg(test)]` module inside
//! `metalint-types` would not suffice.

use std::path::{Path, PathBuf};

use serde_json::Value;

pub const TIMESTAMP_PLACEHOLDER: &str = "__TIMESTAMP__";
pub const VERSION_PLACEHOLDER: &str = "__VERSION__";
pub const FINGERPRINT_PLACEHOLDER: &str = "__FINGERPRINT__";

/// Golden report file name inside each fixture directory.
pub const EXPECTED_REPORT: &str = "expected.report.json";

/// Normalize non-deterministic JSON fields for golden-file comparison.
///
/// Two concerns are handled separately:
///
/// 1. **Root-only**: when the root object is a report envelope (has `schema`,
///    `tool`, `verdict`, `findings` and `data`), `tool.version` becomes
///    `"__VERSION__"` and every `findings[].fingerprint` becomes
///    `"__FINGERPRINT__"`. Nested objects with a similar shape are left alone.
///
/// 2. **Recursive**: `started_at` and `finished_at` are replaced at any depth.
pub fn normalize_nondeterministic(mut value: Value) -> Value {
    if let Some(obj) = value.as_object_mut() {
        let is_envelope = ["schema", "tool", "verdict", "findings", "data"]
            .iter()
            .all(|key| obj.contains_key(*key));

        if is_envelope {
            if let Some(tool_obj) = obj.get_mut("tool").and_then(Value::as_object_mut)
                && tool_obj.contains_key("version")
            {
                tool_obj.insert(
                    "version".to_string(),
                    Value::String(VERSION_PLACEHOLDER.to_string()),
                );
            }

            if let Some(findings) = obj.get_mut("findings").and_then(Value::as_array_mut) {
                for finding in findings.iter_mut().filter_map(Value::as_object_mut) {
                    if finding.contains_key("fingerprint") {
                        finding.insert(
                            "fingerprint".to_string(),
                            Value::String(FINGERPRINT_PLACEHOLDER.to_string()),
                        );
                    }
                }
            }
        }
    }

    normalize_timestamps_recursive(&mut value);
    value
}

fn normalize_timestamps_recursive(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for key in ["started_at", "finished_at"] {
                if let Some(v) = map.get_mut(key) {
                    *v = Value::String(TIMESTAMP_PLACEHOLDER.to_string());
                }
            }
            for val in map.values_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        Value::Array(arr) => {
            for val in arr.iter_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        _ => {}
    }
}

/// Each fixture is a directory holding exactly one `*.xml` document.
pub fn fixture_document(fixture_dir: &Path) -> Option<PathBuf> {
    let mut docs: Vec<PathBuf> = std::fs::read_dir(fixture_dir)
        .ok()?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "xml"))
        .collect();
    docs.sort();
    docs.into_iter().next()
}
