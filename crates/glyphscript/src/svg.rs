//! Serializing a composed document as SVG markup.

use std::fmt::Write;

use glyphscript_core::Point;
use ::svg::{
    Document,
    node::element::{Group, Polygon},
};

use crate::document::ComposedDocument;

/// Attributes applied to every polygon of the output.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgStyle {
    attributes: Vec<(String, String)>,
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self::new().with("fill", "#000000")
    }
}

impl SvgStyle {
    /// A style with no attributes at all.
    pub fn new() -> Self {
        Self {
            attributes: Vec::new(),
        }
    }

    /// Add an attribute, e.g. `with("stroke", "red")`.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }
}

fn points_attr(polygon: &[Point]) -> String {
    let mut out = String::new();
    for (i, p) in polygon.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        // Writing to a String cannot fail.
        let _ = write!(out, "{},{}", p.x, p.y);
    }
    out
}

/// Build an SVG document: one group per symbol, classed by symbol, holding one
/// polygon per outline.
pub fn to_document(document: &ComposedDocument, style: &SvgStyle) -> Document {
    let (width, height) = (document.width(), document.height());
    let mut svg = Document::new()
        .set("width", width)
        .set("height", height)
        .set("viewBox", (0, 0, width, height));

    for symbol in document.symbols() {
        let mut group = Group::new().set("class", symbol.class_name());
        for polygon in symbol.shape().polygons() {
            let mut element = Polygon::new().set("points", points_attr(polygon));
            for (name, value) in style.attributes() {
                element = element.set(name.as_str(), value.as_str());
            }
            group = group.add(element);
        }
        svg = svg.add(group);
    }

    svg
}
