#![no_std]

//! `glyphscript-symbols` is the built-in symbol catalog for the `glyphscript`
//! crate.
//!
//! It carries a primary symbol for every letter `a`-`z`, the marks `.` and `:`,
//! and the whole-word symbols `first_person` and `the`, plus a decal symbol
//! for every letter and the `ditto` repeat marker. The table is generated at
//! build time from `data/symbols.txt`.

#[cfg(test)]
extern crate std;

use glyphscript_core::{
    Catalog, DecalSymbol, PackedDecal, PackedPoint, PackedPrimary, PrimarySymbol, REPEAT_MARKER,
};

include!(concat!(env!("OUT_DIR"), "/symbols.rs"));

/// A [Catalog] backed by the symbol tables compiled into this crate.
#[derive(Debug, Default, Copy, Clone)]
pub struct BuiltinCatalog;

impl BuiltinCatalog {
    /// Keys of every primary symbol, in sorted order.
    pub fn primary_keys(&self) -> impl Iterator<Item = &'static str> {
        PRIMARY_SYMBOLS.iter().map(|(key, _)| *key)
    }

    /// Keys of every decal symbol, in sorted order.
    pub fn decal_keys(&self) -> impl Iterator<Item = &'static str> {
        DECAL_SYMBOLS.iter().map(|(key, _)| *key)
    }
}

impl Catalog for BuiltinCatalog {
    fn primary(&self, key: &str) -> Option<PrimarySymbol> {
        let idx = PRIMARY_SYMBOLS
            .binary_search_by_key(&key, |(key, _)| *key)
            .ok()?;
        Some(PRIMARY_SYMBOLS[idx].1.unpack(key))
    }

    fn decal(&self, key: &str) -> Option<DecalSymbol> {
        let idx = DECAL_SYMBOLS
            .binary_search_by_key(&key, |(key, _)| *key)
            .ok()?;
        Some(DECAL_SYMBOLS[idx].1.unpack(key))
    }

    fn repeat_marker(&self) -> DecalSymbol {
        REPEAT_MARKER_SYMBOL.unpack(REPEAT_MARKER)
    }
}
