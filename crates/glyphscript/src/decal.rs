//! Distributing leftover letters as decals around an anchor.
//!
//! Letters are offered to the four arms in strict rotation. An arm rejects a
//! letter when the decal would put a corner on a blocked cell, and the letter
//! moves on to the next arm. Four rejections in a row mean no arm can take the
//! letter, which fails the composition.

use glyphscript_core::{Affine, Catalog, DecalSymbol, GLYPH_SIZE, Point};
use tracing::trace;

use crate::{
    error::{ComposeError, Phase},
    grid::{Cell, CellSets},
};

/// Consecutive rejections after which the search gives up.
pub const MAX_CONSECUTIVE_FAILURES: u8 = 4;

/// A stacking direction around an anchor, named for where its decals grow.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Arm {
    Up,
    Right,
    Down,
    Left,
}

impl Arm {
    /// All arms, in round-robin order.
    pub const ALL: [Arm; 4] = [Arm::Up, Arm::Right, Arm::Down, Arm::Left];

    pub fn index(self) -> usize {
        self as usize
    }

    fn next(self) -> Arm {
        Arm::ALL[(self.index() + 1) % Arm::ALL.len()]
    }

    /// Quarter-turn of the decal's local frame about the symbol box.
    pub fn rotation(self) -> Affine {
        match self {
            Arm::Up => Affine::IDENTITY,
            // (x, y) -> (10 - y, x)
            Arm::Right => Affine::new(0.0, -1.0, GLYPH_SIZE, 1.0, 0.0, 0.0),
            // (x, y) -> (10 - x, 10 - y)
            Arm::Down => Affine::new(-1.0, 0.0, GLYPH_SIZE, 0.0, -1.0, GLYPH_SIZE),
            // (x, y) -> (y, 10 - x)
            Arm::Left => Affine::new(0.0, 1.0, 0.0, -1.0, 0.0, GLYPH_SIZE),
        }
    }

    /// Map from decal-local coordinates to world coordinates for a decal
    /// stacked `offset` units out from the anchor at `anchor`.
    pub fn placement(self, offset: f64, anchor: Point) -> Affine {
        Affine::translate(0.0, -offset)
            .then(&self.rotation())
            .then(&Affine::translate(anchor.x, anchor.y))
    }
}

#[derive(Debug, Clone)]
struct ArmStack {
    /// Offset at which the next decal on this arm starts.
    height: f64,
    letters: Vec<char>,
    decals: Vec<(DecalSymbol, f64)>,
}

impl Default for ArmStack {
    fn default() -> Self {
        Self {
            height: 1.0,
            letters: Vec::new(),
            decals: Vec::new(),
        }
    }
}

/// Result of offering a letter to the current arm once.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Attempt {
    Accepted(Arm),
    Rejected(Arm),
}

/// Round-robin placement of one stream's leftover letters around an anchor.
///
/// The search only reads the document's cell state. Corners of accepted
/// decals are collected and written back by [DecalSearch::finish].
#[derive(Debug, Clone)]
pub struct DecalSearch {
    anchor: Point,
    arm: Arm,
    failures: u8,
    arms: [ArmStack; 4],
    claimed: Vec<Cell>,
}

impl DecalSearch {
    /// Start a search around the anchor whose top-left corner is at `anchor`.
    pub fn new(anchor: Point) -> Self {
        Self {
            anchor,
            arm: Arm::Up,
            failures: 0,
            arms: Default::default(),
            claimed: Vec::new(),
        }
    }

    /// The arm the next letter will be offered to.
    pub fn current_arm(&self) -> Arm {
        self.arm
    }

    /// Rejections since the last accepted letter.
    pub fn failures(&self) -> u8 {
        self.failures
    }

    /// Letters accepted on `arm`, in stacking order.
    pub fn letters(&self, arm: Arm) -> &[char] {
        &self.arms[arm.index()].letters
    }

    /// Catalog keys of the decals accepted on `arm`, in stacking order.
    pub fn keys(&self, arm: Arm) -> impl Iterator<Item = &str> {
        self.arms[arm.index()]
            .decals
            .iter()
            .map(|(decal, _)| decal.key())
    }

    /// Offer `letter` to the current arm once, then advance to the next arm.
    pub fn attempt<C: Catalog + ?Sized>(
        &mut self,
        letter: char,
        catalog: &C,
        cells: &CellSets,
    ) -> Result<Attempt, ComposeError> {
        if self.failures >= MAX_CONSECUTIVE_FAILURES {
            return Err(ComposeError::NoSpaceForDecal {
                anchor: self.anchor,
            });
        }

        let arm = self.arm;
        self.arm = arm.next();
        let stack = &mut self.arms[arm.index()];

        let decal = if stack.letters.last() == Some(&letter) {
            catalog.repeat_marker()
        } else {
            let mut buf = [0; 4];
            let key = letter.encode_utf8(&mut buf);
            catalog
                .decal(key)
                .ok_or_else(|| ComposeError::unknown(&*key, Phase::Decal))?
        };

        let offset = stack.height;
        let bounds = decal
            .shape()
            .bounds()
            .transform(&arm.placement(offset, self.anchor));
        let corners = [Cell::containing(bounds.min()), Cell::containing(bounds.max())];

        if corners.iter().any(|&cell| cells.is_blocked(cell)) {
            self.failures += 1;
            trace!(?arm, %letter, failures = self.failures, "decal rejected");
            return Ok(Attempt::Rejected(arm));
        }

        trace!(?arm, %letter, key = decal.key(), offset, "decal accepted");
        self.failures = 0;
        stack.height += decal.height() + 1.0;
        stack.letters.push(letter);
        stack.decals.push((decal, offset));
        self.claimed.extend(corners);

        Ok(Attempt::Accepted(arm))
    }

    /// Keep offering `letter` to successive arms until one accepts it.
    pub fn place<C: Catalog + ?Sized>(
        &mut self,
        letter: char,
        catalog: &C,
        cells: &CellSets,
    ) -> Result<Arm, ComposeError> {
        loop {
            if let Attempt::Accepted(arm) = self.attempt(letter, catalog, cells)? {
                return Ok(arm);
            }
        }
    }

    /// Mark the claimed corner cells occupied and return the positioned
    /// decals, arm by arm.
    pub fn finish(self, cells: &mut CellSets) -> Vec<DecalSymbol> {
        for cell in self.claimed {
            cells.occupy(cell);
        }

        let anchor = self.anchor;
        Arm::ALL
            .into_iter()
            .zip(self.arms)
            .flat_map(|(arm, stack)| {
                stack
                    .decals
                    .into_iter()
                    .map(move |(decal, offset)| decal.transform(&arm.placement(offset, anchor)))
            })
            .collect()
    }
}
