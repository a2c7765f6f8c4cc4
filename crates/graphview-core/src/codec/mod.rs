//! Shape file decoders.
//!
//! Both formats are first read into generic [`RawRecord`]s (a `type` tag plus
//! named text fields). Records are then dispatched on their tag into typed
//! [`Shape`] values, so the two formats share one set of field rules.

mod json;
mod xml;

pub use json::decode_json;
pub use xml::decode_xml;

use crate::shapes::{Circle, DEFAULT_THICKNESS, Line, Rectangle, Shape, ShapeKind, ShapeStyle, Triangle};
use crate::transform::parse_number;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Document-level decoding errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),
    #[error("Malformed document: {0}")]
    MalformedDocument(String),
}

/// The two supported serialization formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeFormat {
    Json,
    Xml,
}

impl ShapeFormat {
    /// All supported formats, in file-dialog order.
    pub const ALL: [ShapeFormat; 2] = [ShapeFormat::Json, ShapeFormat::Xml];

    /// Pick a format from a file extension, with or without the leading dot.
    pub fn from_extension(extension: &str) -> Result<Self, DecodeError> {
        let normalized = extension.trim_start_matches('.').to_lowercase();
        match normalized.as_str() {
            "json" => Ok(ShapeFormat::Json),
            "xml" => Ok(ShapeFormat::Xml),
            _ => Err(DecodeError::UnsupportedFormat(format!(".{}", normalized))),
        }
    }

    /// Pick a format from a file path's extension.
    pub fn from_path(path: &Path) -> Result<Self, DecodeError> {
        match path.extension() {
            Some(ext) => Self::from_extension(&ext.to_string_lossy()),
            None => Err(DecodeError::UnsupportedFormat(String::new())),
        }
    }

    /// File extension without the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            ShapeFormat::Json => "json",
            ShapeFormat::Xml => "xml",
        }
    }

    /// Label for file dialog filters.
    pub fn label(self) -> &'static str {
        match self {
            ShapeFormat::Json => "Json files",
            ShapeFormat::Xml => "Xml files",
        }
    }
}

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Drop a leading UTF-8 byte-order mark.
fn strip_bom(bytes: &[u8]) -> &[u8] {
    bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes)
}

/// Decode raw file bytes in the given format.
pub fn decode(bytes: &[u8], format: ShapeFormat) -> Result<Vec<Shape>, DecodeError> {
    match format {
        ShapeFormat::Json => decode_json(bytes),
        ShapeFormat::Xml => decode_xml(bytes),
    }
}

/// One shape record before dispatch: its `type` tag and text fields keyed by
/// the canonical (JSON) field name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecord {
    pub tag: Option<String>,
    fields: HashMap<&'static str, String>,
}

impl RawRecord {
    pub fn new(tag: Option<String>) -> Self {
        Self {
            tag,
            fields: HashMap::new(),
        }
    }

    pub fn insert(&mut self, key: &'static str, value: impl Into<String>) {
        self.fields.insert(key, value.into());
    }

    /// Insert unless the field is already set, so the first occurrence wins.
    pub fn insert_first(&mut self, key: &'static str, value: impl Into<String>) {
        self.fields.entry(key).or_insert_with(|| value.into());
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    fn owned(&self, key: &str) -> Option<String> {
        self.text(key).map(str::to_string)
    }

    /// Boolean field; anything other than a case-insensitive `true` is false.
    fn flag(&self, key: &str) -> bool {
        self.text(key)
            .is_some_and(|v| v.trim().eq_ignore_ascii_case("true"))
    }

    /// Numeric field, falling back to `default` when absent or unparseable.
    fn number_or(&self, key: &str, default: f64) -> f64 {
        match self.text(key) {
            Some(v) => parse_number(v).unwrap_or_else(|_| {
                log::debug!("Field {key} has non-numeric value {v:?}, using {default}");
                default
            }),
            None => default,
        }
    }

    fn style(&self) -> ShapeStyle {
        ShapeStyle {
            color: self.owned("color"),
            filled: self.flag("filled"),
            thickness: self.number_or("thickness", DEFAULT_THICKNESS),
        }
    }

    /// Build the typed shape for this record's tag.
    ///
    /// Returns `None` for a missing or unknown tag. Missing geometry is
    /// carried through as `None` and only rejected at placement.
    pub fn into_shape(self) -> Option<Shape> {
        let kind = self.tag.as_deref().and_then(ShapeKind::from_tag)?;
        let style = self.style();
        let shape = match kind {
            ShapeKind::Line => Shape::Line(Line {
                a: self.owned("a"),
                b: self.owned("b"),
                style,
            }),
            ShapeKind::Circle => Shape::Circle(Circle {
                center: self.owned("center"),
                radius: self.number_or("radius", 0.0),
                style,
            }),
            ShapeKind::Triangle => Shape::Triangle(Triangle {
                a: self.owned("a"),
                b: self.owned("b"),
                c: self.owned("c"),
                style,
            }),
            ShapeKind::Rectangle => Shape::Rectangle(Rectangle {
                top_left: self.owned("topleft"),
                bottom_right: self.owned("bottomright"),
                style,
            }),
        };
        Some(shape)
    }
}

/// Dispatch records into shapes, skipping unknown tags.
fn collect_shapes(records: impl IntoIterator<Item = RawRecord>) -> Vec<Shape> {
    records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| {
            let tag = record.tag.clone();
            let shape = record.into_shape();
            if shape.is_none() {
                log::debug!("Skipping record {index} with unknown type {tag:?}");
            }
            shape
        })
        .collect()
}
