//! Input/output operations and error handling
//!
//! This module contains the tooling around the engine:
//! - Error types shared by the whole crate
//! - Named constants and runtime defaults
//! - The simulation CLI with progress reporting
//! - PNG snapshot export of board state

/// Command-line interface and simulation runner
pub mod cli;
/// Named constants and configurable defaults
pub mod configuration;
/// Error types and the crate-wide result alias
pub mod error;
/// Progress reporting for the simulation loop
pub mod progress;
/// PNG snapshot export of the board's sub-cell view
pub mod snapshot;
