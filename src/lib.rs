//! Match-and-cascade resolution engine for grid block-placement puzzles
//!
//! The system validates shape placements on a fixed-size board, finds
//! same-color connected groups at sub-cell granularity, removes them, and
//! lets surviving composite blocks grow into the vacated space until the
//! board reaches a stable configuration.

#![forbid(unsafe_code)]

/// Board, cell, block, and shape template data model
pub mod board;
/// Match evaluation and cascade resolution
pub mod engine;
/// Input/output operations and error handling
pub mod io;

pub use io::error::{EngineError, Result};
