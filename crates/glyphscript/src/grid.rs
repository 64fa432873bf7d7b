//! The abstract placement grid: cell coordinates, the functions that lay
//! anchors out across it, and the occupancy/reservation bookkeeping.

use std::{
    collections::{BTreeMap, HashSet},
    fmt,
};

use glyphscript_core::Point;

use crate::error::ComposeError;

/// World units spanned by one grid cell: a 10 unit symbol plus a 1 unit gap.
pub const CELL_SIZE: f64 = 11.0;

/// One unit of the placement grid.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Cell {
    pub x: i64,
    pub y: i64,
}

impl Cell {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// World position of this cell's top-left corner.
    pub fn origin(&self) -> Point {
        Point::new(self.x as f64 * CELL_SIZE, self.y as f64 * CELL_SIZE)
    }

    /// The cell containing a world position.
    pub fn containing(point: Point) -> Self {
        Self::new(
            (point.x / CELL_SIZE).floor() as i64,
            (point.y / CELL_SIZE).floor() as i64,
        )
    }

    fn offset(&self, by: Cell) -> Self {
        Self::new(self.x + by.x, self.y + by.y)
    }
}

/// Canonical key form, `"x y"`.
impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

/// Maps the n-th anchor of a document to the grid cell it occupies.
///
/// Implementations must be total, and should be deterministic: the same
/// index may be queried more than once while reservations are made ahead of
/// the anchors themselves.
pub trait GridPosition {
    fn cell(&mut self, index: u64) -> Cell;
}

impl<F: FnMut(u64) -> Cell> GridPosition for F {
    fn cell(&mut self, index: u64) -> Cell {
        self(index)
    }
}

/// Lays anchors out left to right along row 0.
#[derive(Debug, Default, Copy, Clone)]
pub struct LinearGrid;

impl GridPosition for LinearGrid {
    fn cell(&mut self, index: u64) -> Cell {
        Cell::new(index as i64, 0)
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
enum PathAction {
    Turn(Cell),
    Jump(Cell),
}

/// A walk across the grid, one cell per index.
///
/// The walk starts at (0, 0) heading right. Actions scheduled for an index
/// run before that index's cell is produced, so a path can wrap into rows,
/// spiral, or skip around. Cells are computed lazily and cached.
///
/// ```
/// use glyphscript::{Cell, GridPosition, PathGrid};
///
/// let mut grid = PathGrid::new().turn(3, Cell::new(0, 1));
/// assert_eq!(grid.cell(2), Cell::new(2, 0));
/// assert_eq!(grid.cell(4), Cell::new(3, 1));
/// ```
#[derive(Debug, Clone)]
pub struct PathGrid {
    actions: BTreeMap<u64, Vec<PathAction>>,
    direction: Cell,
    cursor: Cell,
    cells: Vec<Cell>,
}

impl Default for PathGrid {
    fn default() -> Self {
        Self {
            actions: BTreeMap::new(),
            direction: Cell::new(1, 0),
            cursor: Cell::new(0, 0),
            cells: Vec::new(),
        }
    }
}

impl PathGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// From `index` on, step by `direction` between cells.
    pub fn turn(self, index: u64, direction: Cell) -> Self {
        self.schedule(index, PathAction::Turn(direction))
    }

    /// Place the cell for `index` at `cell` and continue from there.
    pub fn jump(self, index: u64, cell: Cell) -> Self {
        self.schedule(index, PathAction::Jump(cell))
    }

    fn schedule(mut self, index: u64, action: PathAction) -> Self {
        // Already-produced cells are never recomputed.
        debug_assert!(index >= self.cells.len() as u64);
        self.actions.entry(index).or_default().push(action);
        self
    }
}

impl GridPosition for PathGrid {
    fn cell(&mut self, index: u64) -> Cell {
        while self.cells.len() as u64 <= index {
            let next = self.cells.len() as u64;
            for action in self.actions.get(&next).into_iter().flatten() {
                match *action {
                    PathAction::Turn(direction) => self.direction = direction,
                    PathAction::Jump(cell) => self.cursor = cell,
                }
            }
            self.cells.push(self.cursor);
            self.cursor = self.cursor.offset(self.direction);
        }
        self.cells[index as usize]
    }
}

/// The occupancy and reservation state of one document.
///
/// Occupied cells hold an anchor or a committed decal corner. Reserved cells
/// only keep decals out; a reservation never implies occupancy.
#[derive(Debug, Default, Clone)]
pub struct CellSets {
    occupied: HashSet<Cell>,
    reserved: HashSet<Cell>,
}

impl CellSets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.occupied.contains(&cell)
    }

    pub fn is_reserved(&self, cell: Cell) -> bool {
        self.reserved.contains(&cell)
    }

    /// Whether a decal corner may not land on `cell`.
    pub fn is_blocked(&self, cell: Cell) -> bool {
        self.is_occupied(cell) || self.is_reserved(cell)
    }

    pub fn reserve(&mut self, cell: Cell) {
        self.reserved.insert(cell);
    }

    pub fn occupy(&mut self, cell: Cell) {
        self.occupied.insert(cell);
    }

    /// Claim `cell` for an anchor. Each cell can be anchored once.
    pub fn anchor(&mut self, cell: Cell) -> Result<(), ComposeError> {
        if !self.occupied.insert(cell) {
            return Err(ComposeError::CellCollision { cell });
        }
        Ok(())
    }
}
