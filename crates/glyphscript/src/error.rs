//! Errors raised while composing a document.

use std::fmt;

use glyphscript_core::Point;

use crate::grid::Cell;

/// The step of word composition in which a letter was being resolved.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Phase {
    /// The outermost primary symbol of a stream or a mark.
    Anchor,
    /// A primary symbol fitted inside its parent's child box.
    Nested,
    /// A stacked decal on one of the anchor's arms.
    Decal,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Phase::Anchor => "anchor",
            Phase::Nested => "nested",
            Phase::Decal => "decal",
        })
    }
}

/// Every failure is fatal for the document being composed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ComposeError {
    #[error("no {phase} symbol for `{letter}`")]
    UnknownSymbol { letter: String, phase: Phase },

    #[error("glyph collision at cell x={}, y={}", .cell.x, .cell.y)]
    CellCollision { cell: Cell },

    #[error("no space to put decal(s) around anchor at x={}, y={}", .anchor.x, .anchor.y)]
    NoSpaceForDecal { anchor: Point },

    #[error("scale must be a positive finite number, got {scale}")]
    InvalidScale { scale: f64 },

    #[error("composition was aborted by an earlier error")]
    Aborted,
}

impl ComposeError {
    pub(crate) fn unknown(letter: impl Into<String>, phase: Phase) -> Self {
        ComposeError::UnknownSymbol {
            letter: letter.into(),
            phase,
        }
    }
}
