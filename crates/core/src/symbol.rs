use alloc::{format, string::String, vec::Vec};

use crate::geometry::{Affine, Point, Polygon, Rect, Shape};

/// Edge length of a primary symbol's box, in glyph units.
pub const GLYPH_SIZE: f64 = 10.0;

/// Edge length of the child box a primary symbol hosts.
pub const CHILD_SIZE: f64 = 4.0;

/// A point, in compact representation.
/// Used to store the outlines of the built-in symbols.
#[derive(Debug, Copy, Clone)]
pub struct PackedPoint {
    /// X coordinate of this point
    pub x: i8,
    /// Y coordinate of this point
    pub y: i8,
}

/// A primary symbol as stored in a static table.
#[derive(Debug, Copy, Clone)]
pub struct PackedPrimary {
    /// Top-left corner of the child box
    pub child: PackedPoint,
    /// Filled outlines within the 10x10 symbol box
    pub polygons: &'static [&'static [PackedPoint]],
}

/// A decal symbol as stored in a static table.
#[derive(Debug, Copy, Clone)]
pub struct PackedDecal {
    /// Number of units the decal extends upward from its baseline
    pub height: u8,
    /// Filled outlines, with y between `-height` and 0
    pub polygons: &'static [&'static [PackedPoint]],
}

fn unpack_polygons(polygons: &[&[PackedPoint]]) -> Vec<Polygon> {
    polygons
        .iter()
        .map(|polygon| {
            polygon
                .iter()
                .map(|p| Point::new(f64::from(p.x), f64::from(p.y)))
                .collect()
        })
        .collect()
}

impl PackedPrimary {
    pub fn unpack(&self, key: &str) -> PrimarySymbol {
        PrimarySymbol::new(
            key,
            Shape::new(
                unpack_polygons(self.polygons),
                Rect::new(0.0, 0.0, GLYPH_SIZE, GLYPH_SIZE),
            ),
            Rect::new(
                f64::from(self.child.x),
                f64::from(self.child.y),
                CHILD_SIZE,
                CHILD_SIZE,
            ),
        )
    }
}

impl PackedDecal {
    pub fn unpack(&self, key: &str) -> DecalSymbol {
        let height = f64::from(self.height);
        DecalSymbol::new(
            key,
            Shape::new(
                unpack_polygons(self.polygons),
                Rect::new(0.0, -height, GLYPH_SIZE, height),
            ),
            height,
        )
    }
}

/// A block-like symbol which anchors a grid cell and can host a nested
/// child symbol inside its child box.
#[derive(Debug, Clone, PartialEq)]
pub struct PrimarySymbol {
    key: String,
    shape: Shape,
    child: Rect,
}

impl PrimarySymbol {
    pub fn new(key: impl Into<String>, shape: Shape, child: Rect) -> Self {
        Self {
            key: key.into(),
            shape,
            child,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// The region a nested primary symbol is fitted into.
    pub fn child(&self) -> Rect {
        self.child
    }

    /// Transform the outline and the child box together.
    pub fn transform(&self, transform: &Affine) -> Self {
        Self {
            key: self.key.clone(),
            shape: self.shape.transform(transform),
            child: self.child.transform(transform),
        }
    }

    pub fn fit_to(&self, target: &Rect) -> Self {
        self.transform(&self.shape.fit_transform(target))
    }
}

/// A small mark stacked along one of the four arms around an anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct DecalSymbol {
    key: String,
    shape: Shape,
    height: f64,
}

impl DecalSymbol {
    pub fn new(key: impl Into<String>, shape: Shape, height: f64) -> Self {
        Self {
            key: key.into(),
            shape,
            height,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Units this decal occupies along its stacking axis.
    /// Unaffected by transforms.
    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn transform(&self, transform: &Affine) -> Self {
        Self {
            key: self.key.clone(),
            shape: self.shape.transform(transform),
            height: self.height,
        }
    }
}

/// Either symbol family, as placed in a composed document.
#[derive(Debug, Clone, PartialEq)]
pub enum Symbol {
    Primary(PrimarySymbol),
    Decal(DecalSymbol),
}

impl Symbol {
    pub fn key(&self) -> &str {
        match self {
            Symbol::Primary(symbol) => symbol.key(),
            Symbol::Decal(symbol) => symbol.key(),
        }
    }

    pub fn shape(&self) -> &Shape {
        match self {
            Symbol::Primary(symbol) => symbol.shape(),
            Symbol::Decal(symbol) => symbol.shape(),
        }
    }

    /// Class name used to group this symbol's polygons when serialized,
    /// e.g. `primary-symbol b` or `decal-symbol ditto`.
    pub fn class_name(&self) -> String {
        match self {
            Symbol::Primary(symbol) => format!("primary-symbol {}", symbol.key()),
            Symbol::Decal(symbol) => format!("decal-symbol {}", symbol.key()),
        }
    }

    pub fn transform(&self, transform: &Affine) -> Self {
        match self {
            Symbol::Primary(symbol) => Symbol::Primary(symbol.transform(transform)),
            Symbol::Decal(symbol) => Symbol::Decal(symbol.transform(transform)),
        }
    }
}

impl From<PrimarySymbol> for Symbol {
    fn from(symbol: PrimarySymbol) -> Self {
        Symbol::Primary(symbol)
    }
}

impl From<DecalSymbol> for Symbol {
    fn from(symbol: DecalSymbol) -> Self {
        Symbol::Decal(symbol)
    }
}
