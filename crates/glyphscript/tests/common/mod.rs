//! A small synthetic catalog with easily predicted geometry.
//!
//! Every primary symbol is a plain 10x10 square whose child box sits at
//! (3, 3). Every letter decal is a 10x2 bar; the repeat marker is a 10x1 bar.

#![allow(dead_code)]

use glyphscript::{DecalSymbol, MemoryCatalog, Point, PrimarySymbol, REPEAT_MARKER, Rect, Shape};

pub fn square() -> Shape {
    Shape::new(
        vec![vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ]],
        Rect::new(0.0, 0.0, 10.0, 10.0),
    )
}

pub fn bar(key: &str, height: f64) -> DecalSymbol {
    DecalSymbol::new(
        key,
        Shape::new(
            vec![vec![
                Point::new(0.0, -height),
                Point::new(10.0, -height),
                Point::new(10.0, 0.0),
                Point::new(0.0, 0.0),
            ]],
            Rect::new(0.0, -height, 10.0, height),
        ),
        height,
    )
}

pub fn catalog() -> MemoryCatalog {
    let mut catalog = MemoryCatalog::new(bar(REPEAT_MARKER, 1.0));
    let keys = ('a'..='z')
        .map(String::from)
        .chain([".", ":", "first_person", "the"].map(String::from));
    for key in keys {
        catalog.insert_primary(PrimarySymbol::new(
            key.as_str(),
            square(),
            Rect::new(3.0, 3.0, 4.0, 4.0),
        ));
    }
    for letter in 'a'..='z' {
        catalog.insert_decal(bar(&letter.to_string(), 2.0));
    }
    catalog
}
