//! Match evaluation and cascade resolution
//!
//! This module contains the algorithmic core:
//! - Transient sub-cell projection of the board
//! - Flood-fill connected-group detection
//! - The evaluate-remove-expand fixed-point loop
//! - The session boundary consumed by presentation code

/// Cascade loop, expansion pass, and the resolution event log
pub mod cascade;
/// Same-color group detection on the virtual sub-grid
pub mod matching;
/// External session boundary and configuration
pub mod session;
/// Virtual sub-grid construction and coordinate mapping
pub mod subgrid;

pub use cascade::{CascadeResolver, Resolution};
pub use session::{GameSession, SessionConfig};
