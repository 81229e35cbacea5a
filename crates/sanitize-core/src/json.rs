// JSON document helpers over serde_json::Value.
// Documents are read whole into memory before anything is written back, and
// written with 2-space indentation in their original key order.
use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{Result, SanitizeError};

pub fn read_json_file(path: &Path) -> Result<Value> {
    let data = fs::read(path).map_err(|e| SanitizeError::io(path, e))?;
    serde_json::from_slice(&data).map_err(|source| SanitizeError::Json {
        path: path.to_path_buf(),
        source,
    })
}

pub fn read_json_object(path: &Path) -> Result<Map<String, Value>> {
    match read_json_file(path)? {
        Value::Object(map) => Ok(map),
        _ => Err(SanitizeError::NotAnObject {
            path: path.to_path_buf(),
        }),
    }
}

pub fn write_json_to_file(path: &Path, value: &Value) -> Result<()> {
    let s = serde_json::to_string_pretty(value).map_err(|source| SanitizeError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, s).map_err(|e| SanitizeError::io(path, e))
}

/// Empties the list stored under `key` and returns how many entries it held.
///
/// Returns `None` when the key is missing, is not a list, or the list is
/// already empty; the document is left untouched in that case.
pub fn take_list_field(obj: &mut Map<String, Value>, key: &str) -> Option<usize> {
    match obj.get_mut(key) {
        Some(Value::Array(items)) if !items.is_empty() => {
            let n = items.len();
            items.clear();
            Some(n)
        }
        _ => None,
    }
}

/// Reads a non-empty string field.
pub fn str_field<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    obj.get(key).and_then(Value::as_str).filter(|s| !s.is_empty())
}
