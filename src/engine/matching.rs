//! Same-color connected-group detection on the virtual sub-grid
//!
//! Flood fill at sub-cell granularity: groups are maximal 4-connected
//! regions of one color, kept when they meet the configured minimum size.
//! Evaluation is read-only and never mutates board or block state.

use bitvec::prelude::{BitVec, bitvec};

use crate::board::Board;
use crate::board::block::Color;
use crate::engine::subgrid::VirtualGrid;

/// A removal group: one color, 4-connected virtual sub-cells
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchGroup {
    /// The shared color of every member
    pub color: Color,
    /// Member sub-cells in deterministic discovery order
    pub members: Vec<[usize; 2]>,
}

/// Find all removal groups on the current board
///
/// Builds the virtual sub-grid fresh, then scans in increasing (x, then y)
/// order so the returned groups are deterministic for a given board state.
pub fn evaluate(board: &Board, min_match_size: usize) -> Vec<MatchGroup> {
    find_groups(&VirtualGrid::from_board(board), min_match_size)
}

/// Find all removal groups on a prebuilt virtual sub-grid
pub fn find_groups(grid: &VirtualGrid, min_match_size: usize) -> Vec<MatchGroup> {
    let (width, height) = (grid.width(), grid.height());
    let mut visited: BitVec = bitvec![0; width * height];
    let mut groups = Vec::new();

    for vx in 0..width {
        for vy in 0..height {
            if is_visited(&visited, vx * height + vy) {
                continue;
            }
            let Some(color) = grid.color_at([vx, vy]) else {
                continue;
            };
            let members = flood_fill([vx, vy], color, grid, &mut visited);
            if members.len() >= min_match_size {
                groups.push(MatchGroup { color, members });
            }
        }
    }

    groups
}

fn is_visited(visited: &BitVec, index: usize) -> bool {
    visited.get(index).as_deref() == Some(&true)
}

fn mark_visited(visited: &mut BitVec, index: usize) {
    if index < visited.len() {
        visited.set(index, true);
    }
}

// Stack-based fill with a fixed neighbor push order (+x, -x, +y, -y) so
// member order is reproducible. Only matching sub-cells are marked
// visited; mismatching neighbors stay available as seeds for their own
// groups.
fn flood_fill(
    start: [usize; 2],
    color: Color,
    grid: &VirtualGrid,
    visited: &mut BitVec,
) -> Vec<[usize; 2]> {
    let (width, height) = (grid.width(), grid.height());
    let mut members = Vec::new();
    let mut stack = vec![start];

    while let Some([vx, vy]) = stack.pop() {
        let index = vx * height + vy;
        if is_visited(visited, index) {
            continue;
        }
        if grid.color_at([vx, vy]) != Some(color) {
            continue;
        }

        mark_visited(visited, index);
        members.push([vx, vy]);

        for [dx, dy] in [[1, 0], [-1, 0], [0, 1], [0, -1]] {
            let nx = vx as i32 + dx;
            let ny = vy as i32 + dy;
            if nx >= 0 && (nx as usize) < width && ny >= 0 && (ny as usize) < height {
                stack.push([nx as usize, ny as usize]);
            }
        }
    }

    members
}
