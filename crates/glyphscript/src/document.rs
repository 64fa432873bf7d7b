//! Bounding and emission of a finished composition.

use glyphscript_core::{Affine, Rect, Symbol};

use crate::grid::Cell;

/// The final, immutable result of a composition: every placed symbol, moved so
/// the document's bounding box starts at the origin and scaled.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposedDocument {
    symbols: Vec<Symbol>,
    anchors: Vec<Cell>,
    width: f64,
    height: f64,
}

/// Smallest rectangle enclosing every symbol's bounds, or `None` when there
/// are no symbols.
pub fn bounding_rect(symbols: &[Symbol]) -> Option<Rect> {
    symbols
        .iter()
        .map(|symbol| symbol.shape().bounds())
        .reduce(|acc, bounds| acc.union(&bounds))
}

impl ComposedDocument {
    /// Shift `symbols` so their bounding box starts at the origin, then scale
    /// everything uniformly by `scale`.
    pub fn emit(symbols: Vec<Symbol>, anchors: Vec<Cell>, scale: f64) -> Self {
        let Some(bounds) = bounding_rect(&symbols) else {
            return Self {
                symbols,
                anchors,
                width: 0.0,
                height: 0.0,
            };
        };

        let transform =
            Affine::translate(-bounds.x, -bounds.y).then(&Affine::scale(scale, scale));
        let symbols = symbols
            .iter()
            .map(|symbol| symbol.transform(&transform))
            .collect();

        Self {
            symbols,
            anchors,
            width: bounds.w * scale,
            height: bounds.h * scale,
        }
    }

    /// Placed symbols, in placement order.
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Grid cells of every anchor, in allocation order.
    pub fn anchors(&self) -> &[Cell] {
        &self.anchors
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
