//! JSON shape files: a top-level array of `{"type": ..., ...}` objects.

use super::{DecodeError, RawRecord, collect_shapes, strip_bom};
use crate::shapes::Shape;
use serde_json::Value;

/// Field keys copied from each JSON object.
const FIELDS: [&str; 10] = [
    "a",
    "b",
    "c",
    "center",
    "radius",
    "topleft",
    "bottomright",
    "color",
    "filled",
    "thickness",
];

/// Decode a JSON shape file.
pub fn decode_json(bytes: &[u8]) -> Result<Vec<Shape>, DecodeError> {
    let data: Value = serde_json::from_slice(strip_bom(bytes))
        .map_err(|e| DecodeError::MalformedDocument(format!("Invalid JSON: {}", e)))?;

    let elements = data.as_array().ok_or_else(|| {
        DecodeError::MalformedDocument("Expected a top-level array of shapes".to_string())
    })?;

    let records = elements.iter().enumerate().filter_map(|(index, elem)| {
        let record = to_record(elem);
        if record.is_none() {
            log::debug!("Skipping non-object JSON element at index {index}");
        }
        record
    });

    Ok(collect_shapes(records))
}

fn to_record(elem: &Value) -> Option<RawRecord> {
    let object = elem.as_object()?;
    let tag = object.get("type").and_then(|t| t.as_str()).map(str::to_string);

    let mut record = RawRecord::new(tag);
    for key in FIELDS {
        if let Some(text) = object.get(key).and_then(scalar_text) {
            record.insert(key, text);
        }
    }
    Some(record)
}

/// Text form of a scalar value. `null`, arrays and objects count as absent.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
