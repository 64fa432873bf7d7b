use alloc::{collections::BTreeMap, string::String};

use crate::symbol::{DecalSymbol, PrimarySymbol};

/// Catalog key of the decal substituted for a letter that repeats the
/// previous letter on the same arm.
pub const REPEAT_MARKER: &str = "ditto";

/// Read-only lookup from symbol key to symbol geometry.
///
/// Implementors are built once and never mutated, so a single catalog can back
/// any number of compositions.
pub trait Catalog {
    /// Resolve `key` to a primary (nesting) symbol.
    fn primary(&self, key: &str) -> Option<PrimarySymbol>;

    /// Resolve `key` to a decal (stacking) symbol.
    fn decal(&self, key: &str) -> Option<DecalSymbol>;

    /// The repeat-marker decal. Every catalog must provide one.
    fn repeat_marker(&self) -> DecalSymbol;
}

impl<C: Catalog + ?Sized> Catalog for &C {
    fn primary(&self, key: &str) -> Option<PrimarySymbol> {
        (**self).primary(key)
    }

    fn decal(&self, key: &str) -> Option<DecalSymbol> {
        (**self).decal(key)
    }

    fn repeat_marker(&self) -> DecalSymbol {
        (**self).repeat_marker()
    }
}

/// A [Catalog] assembled at runtime, mostly useful for synthetic symbol sets.
#[derive(Debug, Clone)]
pub struct MemoryCatalog {
    primary: BTreeMap<String, PrimarySymbol>,
    decal: BTreeMap<String, DecalSymbol>,
    repeat_marker: DecalSymbol,
}

impl MemoryCatalog {
    pub fn new(repeat_marker: DecalSymbol) -> Self {
        Self {
            primary: BTreeMap::new(),
            decal: BTreeMap::new(),
            repeat_marker,
        }
    }

    /// Add or replace a primary symbol under its own key.
    pub fn insert_primary(&mut self, symbol: PrimarySymbol) {
        self.primary.insert(symbol.key().into(), symbol);
    }

    /// Add or replace a decal symbol under its own key.
    pub fn insert_decal(&mut self, symbol: DecalSymbol) {
        self.decal.insert(symbol.key().into(), symbol);
    }

    pub fn with_primary(mut self, symbol: PrimarySymbol) -> Self {
        self.insert_primary(symbol);
        self
    }

    pub fn with_decal(mut self, symbol: DecalSymbol) -> Self {
        self.insert_decal(symbol);
        self
    }
}

impl Catalog for MemoryCatalog {
    fn primary(&self, key: &str) -> Option<PrimarySymbol> {
        self.primary.get(key).cloned()
    }

    fn decal(&self, key: &str) -> Option<DecalSymbol> {
        self.decal.get(key).cloned()
    }

    fn repeat_marker(&self) -> DecalSymbol {
        self.repeat_marker.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Rect, Shape};
    use alloc::vec;

    fn decal(key: &str) -> DecalSymbol {
        DecalSymbol::new(key, Shape::new(vec![], Rect::new(0.0, -1.0, 10.0, 1.0)), 1.0)
    }

    #[test]
    fn lookups_are_per_family() {
        let catalog = MemoryCatalog::new(decal(REPEAT_MARKER)).with_decal(decal("a"));
        assert!(catalog.decal("a").is_some());
        assert!(catalog.primary("a").is_none());
        assert_eq!(catalog.repeat_marker().key(), REPEAT_MARKER);
    }

    #[test]
    fn primaries_keep_their_child_box() {
        let child = Rect::new(2.0, 2.0, 4.0, 4.0);
        let catalog = MemoryCatalog::new(decal(REPEAT_MARKER)).with_primary(PrimarySymbol::new(
            "b",
            Shape::new(vec![], Rect::new(0.0, 0.0, 10.0, 10.0)),
            child,
        ));
        assert_eq!(catalog.primary("b").map(|symbol| symbol.child()), Some(child));
        assert!(catalog.decal("b").is_none());
    }

    #[test]
    fn borrowed_catalog_delegates() {
        let catalog = MemoryCatalog::new(decal(REPEAT_MARKER)).with_decal(decal("o"));
        fn lookup(catalog: impl Catalog) -> bool {
            catalog.decal("o").is_some()
        }
        assert!(lookup(&catalog));
    }
}
