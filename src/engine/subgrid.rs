//! Transient sub-cell view of the board used for match evaluation
//!
//! Every match evaluation builds a fresh (2W)x(2H) grid exposing each unit
//! of each block as an individually addressable, individually colored
//! cell; the grid is discarded after use and never persisted.

use ndarray::Array2;

use crate::board::Board;
use crate::board::block::{Color, UNIT_COUNT};

/// Sub-cells per board cell along each axis
pub const SUBDIVISION: usize = 2;

/// Virtual coordinate of a board cell's unit
pub const fn to_virtual(cell: [usize; 2], unit: usize) -> [usize; 2] {
    [
        cell[0] * SUBDIVISION + unit % SUBDIVISION,
        cell[1] * SUBDIVISION + unit / SUBDIVISION,
    ]
}

/// Board cell and unit index addressed by a virtual coordinate
pub const fn to_cell_unit(v: [usize; 2]) -> ([usize; 2], usize) {
    (
        [v[0] / SUBDIVISION, v[1] / SUBDIVISION],
        (v[1] % SUBDIVISION) * SUBDIVISION + v[0] % SUBDIVISION,
    )
}

/// Read-only (2W)x(2H) color map derived from current board state
#[derive(Debug)]
pub struct VirtualGrid {
    colors: Array2<Option<Color>>,
}

impl VirtualGrid {
    /// Project every active unit of every block onto the sub-grid
    ///
    /// Empty board cells and inactive units leave their sub-cells empty; a
    /// simple block fills all four of its sub-cells with its one color.
    pub fn from_board(board: &Board) -> Self {
        let mut colors = Array2::from_elem(
            (board.width() * SUBDIVISION, board.height() * SUBDIVISION),
            None,
        );
        for (pos, cell) in board.cells() {
            let Some(block) = cell.block() else {
                continue;
            };
            for unit in 0..UNIT_COUNT {
                if let Some(color) = block.unit_color(unit) {
                    if let Some(slot) = colors.get_mut(to_virtual(pos, unit)) {
                        *slot = Some(color);
                    }
                }
            }
        }
        Self { colors }
    }

    /// Sub-grid width
    pub fn width(&self) -> usize {
        self.colors.dim().0
    }

    /// Sub-grid height
    pub fn height(&self) -> usize {
        self.colors.dim().1
    }

    /// Color at a virtual coordinate, `None` when empty or out of range
    pub fn color_at(&self, v: [usize; 2]) -> Option<Color> {
        self.colors.get(v).copied().flatten()
    }
}
