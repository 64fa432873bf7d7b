#![no_std]

//! `glyphscript-core` provides core primitives for the `glyphscript` crate:
//! immutable geometry, the two symbol families, and the [Catalog] interface
//! through which the composition engine resolves letters to symbols.

extern crate alloc;
#[cfg(test)]
extern crate std;

mod catalog;
mod geometry;
mod symbol;

pub use catalog::{Catalog, MemoryCatalog, REPEAT_MARKER};
pub use geometry::{Affine, Point, Polygon, Rect, Shape};
pub use symbol::{
    CHILD_SIZE, DecalSymbol, GLYPH_SIZE, PackedDecal, PackedPoint, PackedPrimary, PrimarySymbol,
    Symbol,
};
