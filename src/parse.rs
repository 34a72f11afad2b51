//!
//! # Layout Input Parsing
//!
//! Reads the whitespace-separated rectangle-list format:
//! one `<layer> <x1> <y1> <x2> <y2>` record per line, though any whitespace
//! will do. Records append in file order. Parsing stops at the first record
//! that fails to parse completely; an unreadable file yields an empty shape
//! list, logged, not fatal.
//!

// Std-Lib
use std::path::Path;

// Local imports
use crate::data::Shape;
use crate::Int;

/// Read the layout file at `path`.
///
/// Shape-input failures are non-fatal by design:
/// the run proceeds with whatever parsed, possibly nothing.
pub fn read_layout(path: impl AsRef<Path>) -> Vec<Shape> {
    let path = path.as_ref();
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            log::warn!("cannot read layout file {}: {}", path.display(), e);
            return Vec::new();
        }
    };
    parse_layout(&text)
}

/// Parse layout records from `text`, in order,
/// stopping at the first incomplete or malformed record.
pub fn parse_layout(text: &str) -> Vec<Shape> {
    let mut shapes = Vec::new();
    let mut tokens = text.split_whitespace();
    while let Some(layer) = tokens.next() {
        let mut coords = [0 as Int; 4];
        let mut complete = true;
        for slot in coords.iter_mut() {
            match tokens.next().map(str::parse::<Int>) {
                Some(Ok(val)) => *slot = val,
                _ => {
                    complete = false;
                    break;
                }
            }
        }
        if !complete {
            log::warn!(
                "layout parse stopped at malformed record (layer tag {:?}, {} shapes kept)",
                layer,
                shapes.len()
            );
            break;
        }
        shapes.push(Shape::new(layer, coords[0], coords[1], coords[2], coords[3]));
    }
    shapes
}
