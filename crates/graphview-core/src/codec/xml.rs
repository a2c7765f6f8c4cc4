//! XML shape files: `<Shape type="...">` elements with one child element per
//! field, found anywhere below the root.

use super::{DecodeError, RawRecord, collect_shapes, strip_bom};
use crate::shapes::Shape;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::fmt::Display;

const SHAPE_ELEMENT: &[u8] = b"Shape";

/// Map a child element name to its canonical field key.
fn field_key(name: &[u8]) -> Option<&'static str> {
    match name {
        b"A" => Some("a"),
        b"B" => Some("b"),
        b"C" => Some("c"),
        b"Center" => Some("center"),
        b"Radius" => Some("radius"),
        b"TopLeft" => Some("topleft"),
        b"BottomRight" => Some("bottomright"),
        b"Color" => Some("color"),
        b"Filled" => Some("filled"),
        b"Thickness" => Some("thickness"),
        _ => None,
    }
}

fn malformed(message: impl Display) -> DecodeError {
    DecodeError::MalformedDocument(format!("Invalid XML: {}", message))
}

fn shape_tag(element: &BytesStart<'_>) -> Result<Option<String>, DecodeError> {
    match element.try_get_attribute("type").map_err(malformed)? {
        Some(attr) => Ok(Some(attr.unescape_value().map_err(malformed)?.into_owned())),
        None => Ok(None),
    }
}

/// The `Shape` element currently being read.
struct OpenShape {
    record: RawRecord,
    /// Element depth of the `Shape` start tag.
    depth: usize,
    /// Field whose text is being collected, with the text so far.
    field: Option<(&'static str, String)>,
}

/// Decode an XML shape file.
pub fn decode_xml(bytes: &[u8]) -> Result<Vec<Shape>, DecodeError> {
    let text = std::str::from_utf8(strip_bom(bytes)).map_err(malformed)?;
    let mut reader = Reader::from_str(text);
    reader.trim_text(true);

    let mut records = Vec::new();
    let mut open: Option<OpenShape> = None;
    let mut depth = 0usize;
    let mut saw_root = false;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| malformed(format!("{} at position {}", e, reader.buffer_position())))?;

        match event {
            Event::Start(element) => {
                depth += 1;
                saw_root = true;
                let name = element.name();
                if let Some(shape) = open.as_mut() {
                    if depth == shape.depth + 1 {
                        shape.field = field_key(name.as_ref()).map(|key| (key, String::new()));
                    }
                } else if name.as_ref() == SHAPE_ELEMENT {
                    open = Some(OpenShape {
                        record: RawRecord::new(shape_tag(&element)?),
                        depth,
                        field: None,
                    });
                }
            }
            Event::Empty(element) => {
                saw_root = true;
                let name = element.name();
                if let Some(shape) = open.as_mut() {
                    if depth == shape.depth {
                        if let Some(key) = field_key(name.as_ref()) {
                            shape.record.insert_first(key, String::new());
                        }
                    }
                } else if name.as_ref() == SHAPE_ELEMENT {
                    records.push(RawRecord::new(shape_tag(&element)?));
                }
            }
            Event::Text(content) => {
                if let Some((_, buffer)) = open.as_mut().and_then(|s| s.field.as_mut()) {
                    buffer.push_str(&content.unescape().map_err(malformed)?);
                }
            }
            Event::CData(content) => {
                if let Some((_, buffer)) = open.as_mut().and_then(|s| s.field.as_mut()) {
                    buffer.push_str(&String::from_utf8_lossy(&content.into_inner()));
                }
            }
            Event::End(_) => {
                let shape_depth = open.as_ref().map(|shape| shape.depth);
                if shape_depth == Some(depth) {
                    if let Some(done) = open.take() {
                        records.push(done.record);
                    }
                } else if shape_depth.map(|d| d + 1) == Some(depth) {
                    if let Some(shape) = open.as_mut() {
                        if let Some((key, value)) = shape.field.take() {
                            shape.record.insert_first(key, value);
                        }
                    }
                }
                depth = depth.saturating_sub(1);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !saw_root {
        return Err(malformed("missing root element"));
    }
    if depth != 0 {
        return Err(malformed("unexpected end of document"));
    }

    Ok(collect_shapes(records))
}
