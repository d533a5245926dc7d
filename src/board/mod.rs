//! Board, block, and shape data model
//!
//! This module contains the occupancy model of the puzzle:
//! - Fixed-size cell grid with placement validation and commit
//! - Simple and composite block entities with their unit lifecycle
//! - Immutable shape templates and the seeded shape generator

/// Block entities, colors, and the unit adjacency table
pub mod block;
/// Board grid, cells, and board-facing mutation operations
pub mod grid;
/// Shape templates, offsets, and the preset generator
pub mod shape;

pub use block::{Block, Color};
pub use grid::{Board, Cell, CellState};
pub use shape::{ShapeGenerator, ShapeTemplate};
