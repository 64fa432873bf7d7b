//! The placement engine: turns words and marks into positioned symbols.

use glyphscript_core::{Affine, Catalog, Point, PrimarySymbol, Symbol};
use tracing::debug;

use crate::{
    decal::DecalSearch,
    decompose::{Decomposition, decompose},
    document::ComposedDocument,
    error::{ComposeError, Phase},
    grid::{Cell, CellSets, GridPosition, LinearGrid},
    options::ComposeOptions,
    text::{Token, scan},
};

/// Composes one document, word by word.
///
/// Words must be fed in reading order: every placement depends on the cells
/// claimed and reserved by the words before it. The first error poisons the
/// composer; every later call, including [Composer::finish], returns
/// [ComposeError::Aborted].
pub struct Composer<'c, C: Catalog + ?Sized, G = LinearGrid> {
    catalog: &'c C,
    options: ComposeOptions,
    grid: G,
    next_index: u64,
    cells: CellSets,
    anchors: Vec<Cell>,
    symbols: Vec<Symbol>,
    failed: bool,
}

impl<'c, C: Catalog + ?Sized> Composer<'c, C> {
    pub fn new(catalog: &'c C, options: ComposeOptions) -> Self {
        Self {
            catalog,
            options,
            grid: LinearGrid,
            next_index: 0,
            cells: CellSets::new(),
            anchors: Vec::new(),
            symbols: Vec::new(),
            failed: false,
        }
    }
}

impl<'c, C: Catalog + ?Sized, G: GridPosition> Composer<'c, C, G> {
    /// Lay anchors out with `grid` instead.
    pub fn with_grid<H: GridPosition>(self, grid: H) -> Composer<'c, C, H> {
        Composer {
            catalog: self.catalog,
            options: self.options,
            grid,
            next_index: self.next_index,
            cells: self.cells,
            anchors: self.anchors,
            symbols: self.symbols,
            failed: self.failed,
        }
    }

    pub fn options(&self) -> &ComposeOptions {
        &self.options
    }

    /// Index the next anchor will be allocated at.
    pub fn next_index(&self) -> u64 {
        self.next_index
    }

    pub fn cells(&self) -> &CellSets {
        &self.cells
    }

    /// Anchor cells allocated so far, in allocation order.
    pub fn anchors(&self) -> &[Cell] {
        &self.anchors
    }

    /// Symbols placed so far, in world coordinates.
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Keep decals off `cell`, e.g. to leave room for content placed later.
    pub fn reserve(&mut self, cell: Cell) {
        self.cells.reserve(cell);
    }

    /// Mark `cell` as already taken.
    pub fn occupy(&mut self, cell: Cell) {
        self.cells.occupy(cell);
    }

    /// Scan `text` and compose every word and mark in it.
    pub fn add_text(&mut self, text: &str) -> Result<(), ComposeError> {
        for token in scan(text) {
            match token {
                Token::Word { text, last } => self.add_word(&text, last)?,
                Token::Mark(key) => self.add_mark(key)?,
            }
        }
        Ok(())
    }

    /// Compose one lower-cased word. `last` marks the final word of the text.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn add_word(&mut self, word: &str, last: bool) -> Result<(), ComposeError> {
        self.guard(|this| {
            let decomposition = decompose(word, this.options.word_overrides);

            for offset in decomposition.reserved_offsets(last) {
                let cell = this.grid.cell(this.next_index + offset);
                this.cells.reserve(cell);
            }

            let mut placed = Vec::new();
            match &decomposition {
                Decomposition::Override(key) => {
                    let (anchor, _) = this.allocate_anchor(key)?;
                    placed.push(anchor.into());
                }
                Decomposition::Streams { primary, secondary } => {
                    this.compose_stream(primary, &mut placed)?;
                    this.compose_stream(secondary, &mut placed)?;
                }
            }

            debug!(symbols = placed.len(), next_index = this.next_index, "word composed");
            this.symbols.append(&mut placed);
            Ok(())
        })
    }

    /// Compose a punctuation mark as a lone anchor.
    pub fn add_mark(&mut self, key: &str) -> Result<(), ComposeError> {
        self.guard(|this| {
            let (anchor, _) = this.allocate_anchor(key)?;
            debug!(key, "mark composed");
            this.symbols.push(anchor.into());
            Ok(())
        })
    }

    /// Compute the final layout. Consumes the composer.
    pub fn finish(self) -> Result<ComposedDocument, ComposeError> {
        if self.failed {
            return Err(ComposeError::Aborted);
        }
        let scale = self.options.scale;
        if !scale.is_finite() || scale <= 0.0 {
            return Err(ComposeError::InvalidScale { scale });
        }
        Ok(ComposedDocument::emit(self.symbols, self.anchors, scale))
    }

    fn guard(
        &mut self,
        step: impl FnOnce(&mut Self) -> Result<(), ComposeError>,
    ) -> Result<(), ComposeError> {
        if self.failed {
            return Err(ComposeError::Aborted);
        }
        let result = step(self);
        if let Err(error) = &result {
            debug!(%error, "composition failed");
            self.failed = true;
        }
        result
    }

    /// Claim the next anchor cell for the primary symbol `key`.
    fn allocate_anchor(&mut self, key: &str) -> Result<(PrimarySymbol, Point), ComposeError> {
        let cell = self.grid.cell(self.next_index);
        let symbol = self
            .catalog
            .primary(key)
            .ok_or_else(|| ComposeError::unknown(key, Phase::Anchor))?;
        self.cells.anchor(cell)?;
        self.next_index += 1;
        self.anchors.push(cell);

        let origin = cell.origin();
        debug!(%cell, key, "anchor allocated");
        Ok((
            symbol.transform(&Affine::translate(origin.x, origin.y)),
            origin,
        ))
    }

    /// Anchor the first letter, nest the following ones, and spread the rest
    /// as decals.
    fn compose_stream(
        &mut self,
        letters: &[char],
        placed: &mut Vec<Symbol>,
    ) -> Result<(), ComposeError> {
        let Some((&first, rest)) = letters.split_first() else {
            return Ok(());
        };

        let mut buf = [0; 4];
        let (anchor, origin) = self.allocate_anchor(first.encode_utf8(&mut buf))?;
        let mut child = anchor.child();
        placed.push(anchor.into());

        let depth = self.options.nesting_depth.min(rest.len());
        let (nested, overflow) = rest.split_at(depth);

        for &letter in nested {
            let key = letter.encode_utf8(&mut buf);
            let symbol = self
                .catalog
                .primary(key)
                .ok_or_else(|| ComposeError::unknown(&*key, Phase::Nested))?
                .fit_to(&child);
            child = symbol.child();
            placed.push(symbol.into());
        }

        if overflow.is_empty() {
            return Ok(());
        }

        let mut search = DecalSearch::new(origin);
        for &letter in overflow {
            search.place(letter, self.catalog, &self.cells)?;
        }
        placed.extend(search.finish(&mut self.cells).into_iter().map(Symbol::from));

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyphscript_core::{DecalSymbol, MemoryCatalog, REPEAT_MARKER, Rect, Shape};
    use pretty_assertions::assert_eq;

    fn catalog() -> MemoryCatalog {
        let square = vec![vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ]];
        let bar = vec![vec![
            Point::new(0.0, -1.0),
            Point::new(10.0, -1.0),
            Point::new(10.0, 0.0),
            Point::new(0.0, 0.0),
        ]];
        let bar = DecalSymbol::new(
            REPEAT_MARKER,
            Shape::new(bar, Rect::new(0.0, -1.0, 10.0, 1.0)),
            1.0,
        );

        let mut catalog = MemoryCatalog::new(bar.clone());
        for key in ["a", "b", "c", "d", "the", "first_person", "."] {
            catalog.insert_primary(PrimarySymbol::new(
                key,
                Shape::new(square.clone(), Rect::new(0.0, 0.0, 10.0, 10.0)),
                Rect::new(3.0, 3.0, 4.0, 4.0),
            ));
        }
        for key in ["a", "b", "c", "d"] {
            catalog.insert_decal(DecalSymbol::new(key, bar.shape().clone(), 1.0));
        }
        catalog
    }

    fn keys(composer: &Composer<'_, MemoryCatalog>) -> Vec<String> {
        composer.symbols().iter().map(Symbol::class_name).collect()
    }

    #[test]
    fn reservations_run_ahead_of_anchors() {
        let catalog = catalog();
        let mut composer = Composer::new(&catalog, ComposeOptions::default());
        composer.add_word("ba", false).unwrap();
        assert_eq!(composer.next_index(), 2);
        assert!(composer.cells().is_reserved(Cell::new(2, 0)));
        assert!(!composer.cells().is_occupied(Cell::new(2, 0)));
    }

    #[test]
    fn override_is_single_anchor() {
        let catalog = catalog();
        let mut composer = Composer::new(&catalog, ComposeOptions::default());
        composer.add_word("the", false).unwrap();
        assert_eq!(keys(&composer), vec!["primary-symbol the"]);
        assert!(!composer.cells().is_reserved(Cell::new(1, 0)));
    }

    #[test]
    fn marks_take_the_next_cell() {
        let catalog = catalog();
        let mut composer = Composer::new(&catalog, ComposeOptions::default());
        composer.add_text("b.").unwrap();
        assert_eq!(composer.anchors(), &[Cell::new(0, 0), Cell::new(1, 0)]);
        assert_eq!(composer.symbols()[1].shape().bounds().x, 11.0);
    }

    #[test]
    fn unknown_anchor_letter() {
        let catalog = catalog();
        let mut composer = Composer::new(&catalog, ComposeOptions::default());
        assert_eq!(
            composer.add_word("xa", true),
            Err(ComposeError::UnknownSymbol {
                letter: "x".into(),
                phase: Phase::Anchor
            })
        );
    }

    #[test]
    fn unknown_nested_letter() {
        let catalog = catalog();
        let mut composer = Composer::new(&catalog, ComposeOptions::default());
        assert_eq!(
            composer.add_word("bz", true),
            Err(ComposeError::UnknownSymbol {
                letter: "z".into(),
                phase: Phase::Nested
            })
        );
    }

    #[test]
    fn scale_is_checked_on_finish() {
        let catalog = catalog();
        let options = ComposeOptions::default().with_scale(0.0);
        let mut composer = Composer::new(&catalog, options);
        composer.add_word("b", true).unwrap();
        assert_eq!(composer.options().scale, 0.0);
        assert_eq!(
            composer.finish().err(),
            Some(ComposeError::InvalidScale { scale: 0.0 })
        );
    }

    #[test]
    fn error_poisons_composer() {
        let catalog = catalog();
        let mut composer = Composer::new(&catalog, ComposeOptions::default());
        assert!(composer.add_word("x", true).is_err());
        assert_eq!(composer.add_word("b", true), Err(ComposeError::Aborted));
        assert_eq!(composer.finish().err(), Some(ComposeError::Aborted));
    }
}
