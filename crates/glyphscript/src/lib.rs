//! `glyphscript` composes text into a pictographic script drawn as vector art.
//!
//! Every word becomes a compound glyph. Its consonant-like letters form one
//! stream and its vowel-like letters another; each stream anchors a primary
//! symbol on a grid cell, nests the following letters' primary symbols inside
//! it, and stacks whatever is left as small decal symbols along the four sides
//! of the anchor. Decals steer around cells used or reserved by neighbouring
//! words, and composition fails rather than draw overlapping glyphs.
//!
//! Symbols come from a [Catalog]; the built-in one lives in
//! [glyphscript_symbols] and is re-exported as [BuiltinCatalog].
//!
//! ```
//! use glyphscript::{compose_text, BuiltinCatalog, ComposeOptions, SvgStyle};
//!
//! let document = compose_text("Hello world.", &BuiltinCatalog, ComposeOptions::default())?;
//! let svg = glyphscript::svg::to_document(&document, &SvgStyle::default());
//! # let _ = svg;
//! # Ok::<(), glyphscript::ComposeError>(())
//! ```

mod composer;
mod decal;
mod decompose;
mod document;
mod error;
mod grid;
mod options;
pub mod svg;
mod text;

pub use composer::Composer;
pub use decal::{Arm, Attempt, DecalSearch, MAX_CONSECUTIVE_FAILURES};
pub use decompose::{Decomposition, VOWELS, decompose, is_vowel};
pub use document::{ComposedDocument, bounding_rect};
pub use error::{ComposeError, Phase};
pub use glyphscript_core::{
    Affine, Catalog, DecalSymbol, MemoryCatalog, Point, Polygon, PrimarySymbol, REPEAT_MARKER,
    Rect, Shape, Symbol,
};
pub use glyphscript_symbols::BuiltinCatalog;
pub use grid::{CELL_SIZE, Cell, CellSets, GridPosition, LinearGrid, PathGrid};
pub use options::ComposeOptions;
pub use crate::svg::SvgStyle;
pub use text::{Token, scan};

/// Compose `text` into a finished document using the default linear grid.
pub fn compose_text<C: Catalog + ?Sized>(
    text: &str,
    catalog: &C,
    options: ComposeOptions,
) -> Result<ComposedDocument, ComposeError> {
    let mut composer = Composer::new(catalog, options);
    composer.add_text(text)?;
    composer.finish()
}
