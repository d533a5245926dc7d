//! Fixed-size board of cells with placement and removal operations
//!
//! The board is the exclusive owner of every placed block. Out-of-range
//! queries return `None` rather than failing; mutation happens only through
//! the board-facing operations (`place`, `clear_unit`, `expand_unit`).

use ndarray::Array2;

use crate::board::block::{Block, Color, UNIT_COUNT};
use crate::board::shape::{OffsetKind, ShapeTemplate};
use crate::io::configuration::MAX_BOARD_DIMENSION;
use crate::io::error::{EngineError, Result, expansion_error, invalid_parameter, template_error};

/// One address in the board grid, holding at most one block
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    block: Option<Block>,
}

impl Cell {
    /// A cell is filled iff it holds a block
    pub const fn is_filled(&self) -> bool {
        self.block.is_some()
    }

    /// Read-only view of the occupying block
    pub const fn block(&self) -> Option<&Block> {
        self.block.as_ref()
    }

    /// Snapshot of the cell for presentation-layer queries
    pub fn state(&self) -> CellState {
        match &self.block {
            None => CellState::Empty,
            Some(Block::Simple(color)) => CellState::Simple { color: *color },
            Some(Block::Composite { units, active }) => CellState::Composite {
                unit_colors: *units,
                unit_active: *active,
            },
        }
    }

    fn attach(&mut self, block: Block) {
        self.block = Some(block);
    }
}

/// Read-only description of a cell's contents
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellState {
    /// No block occupies the cell
    Empty,
    /// A single-color atomic block
    Simple {
        /// The block's color
        color: Color,
    },
    /// A composite block with per-unit state
    Composite {
        /// Color of each of the four units
        unit_colors: [Color; UNIT_COUNT],
        /// Which units are currently present
        unit_active: [bool; UNIT_COUNT],
    },
}

/// Fixed width x height grid of cells
#[derive(Clone, Debug)]
pub struct Board {
    cells: Array2<Cell>,
    width: usize,
    height: usize,
}

impl Board {
    /// Create an empty board
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` when either dimension is zero or exceeds
    /// [`MAX_BOARD_DIMENSION`].
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(invalid_parameter(
                "board dimensions",
                &format!("{width}x{height}"),
                &"both dimensions must be at least 1",
            ));
        }
        if width > MAX_BOARD_DIMENSION || height > MAX_BOARD_DIMENSION {
            return Err(invalid_parameter(
                "board dimensions",
                &format!("{width}x{height}"),
                &format!("dimensions may not exceed {MAX_BOARD_DIMENSION}"),
            ));
        }
        Ok(Self {
            cells: Array2::from_elem((width, height), Cell::default()),
            width,
            height,
        })
    }

    /// Board width in cells
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Board height in cells
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Whether a coordinate lies on the board
    pub const fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Cell at a coordinate, or `None` when out of bounds
    pub fn cell(&self, x: i32, y: i32) -> Option<&Cell> {
        self.in_bounds(x, y)
            .then(|| self.cells.get([x as usize, y as usize]))
            .flatten()
    }

    /// Block occupying a cell position, if any
    pub fn block_at(&self, pos: [usize; 2]) -> Option<&Block> {
        self.cells.get(pos).and_then(Cell::block)
    }

    /// Iterate all cells in increasing (x, then y) scan order
    pub fn cells(&self) -> impl Iterator<Item = ([usize; 2], &Cell)> {
        self.cells.indexed_iter().map(|((x, y), cell)| ([x, y], cell))
    }

    /// Total active units on the board, counting simple blocks as four
    pub fn active_unit_count(&self) -> usize {
        self.cells
            .iter()
            .filter_map(|cell| cell.block().map(Block::active_units))
            .sum()
    }

    /// Whether every offset cell of a template is in bounds and unfilled
    ///
    /// An empty template trivially succeeds. No side effects.
    pub fn can_place(&self, template: &ShapeTemplate, anchor: [i32; 2]) -> bool {
        template.offsets().iter().all(|offset| {
            let x = anchor[0] + offset.delta[0];
            let y = anchor[1] + offset.delta[1];
            self.cell(x, y).is_some_and(|cell| !cell.is_filled())
        })
    }

    /// Commit a template, instantiating one block per offset
    ///
    /// Callers must have already confirmed [`Board::can_place`]; violating
    /// that contract is rejected, never silently corrected.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPlacement` when any offset cell is out of bounds or
    /// already filled, leaving the board unchanged. Returns
    /// `InvalidTemplate` for a composite offset without a palette.
    pub fn place(&mut self, template: &ShapeTemplate, anchor: [i32; 2]) -> Result<Vec<[usize; 2]>> {
        if !self.can_place(template, anchor) {
            return Err(EngineError::InvalidPlacement {
                anchor,
                reason: "offset cells out of bounds or overlapping occupied cells".to_string(),
            });
        }
        let mut placed = Vec::with_capacity(template.offsets().len());
        for offset in template.offsets() {
            let x = (anchor[0] + offset.delta[0]) as usize;
            let y = (anchor[1] + offset.delta[1]) as usize;
            let block = match offset.kind {
                OffsetKind::Simple => Block::simple(template.color()),
                OffsetKind::Composite => {
                    let palette = template.palette().ok_or_else(|| {
                        template_error("composite offset without a four-color palette")
                    })?;
                    Block::composite(palette)
                }
            };
            if let Some(cell) = self.cells.get_mut([x, y]) {
                cell.attach(block);
                placed.push([x, y]);
            }
        }
        Ok(placed)
    }

    /// Destroy one unit of the block at a position
    ///
    /// Detaches the block from its cell the instant it becomes empty: a
    /// simple block on the first hit, a composite block when its last
    /// active unit goes. Returns false when the cell is vacant or out of
    /// range (a matched simple block's remaining sub-cells land here).
    pub fn clear_unit(&mut self, pos: [usize; 2], unit: usize) -> bool {
        let Some(cell) = self.cells.get_mut(pos) else {
            return false;
        };
        let Some(block) = cell.block.as_mut() else {
            return false;
        };
        if block.destroy_unit(unit) {
            cell.block = None;
        }
        true
    }

    /// Expand an inactive unit from an active same-block source unit
    ///
    /// Returns the color the unit took on.
    ///
    /// # Errors
    ///
    /// Returns `InvalidExpansion` when the cell is vacant or the block-level
    /// preconditions of [`Block::expand_into`] are violated.
    pub fn expand_unit(&mut self, pos: [usize; 2], unit: usize, source: usize) -> Result<Color> {
        let Some(block) = self.cells.get_mut(pos).and_then(|cell| cell.block.as_mut()) else {
            return Err(expansion_error(
                unit,
                source,
                "expansion target cell is vacant or out of range",
            ));
        };
        block.expand_into(unit, source)?;
        block
            .unit_color(unit)
            .ok_or_else(|| expansion_error(unit, source, "expanded unit reports no color"))
    }
}
