//! Engine constants and runtime configuration defaults

/// Minimum sub-cell group size that qualifies for removal
///
/// At sub-cell granularity a threshold of 2 keeps the effective full-cell
/// match length of the original rules; it is a tunable parameter, not a
/// derived constant.
pub const DEFAULT_MIN_MATCH_SIZE: usize = 2;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed board dimension
pub const MAX_BOARD_DIMENSION: usize = 1024;

// Default values for configurable parameters
/// Fixed seed for reproducible simulations
pub const DEFAULT_SEED: u64 = 42;

/// Default board width in cells
pub const DEFAULT_BOARD_WIDTH: usize = 10;

/// Default board height in cells
pub const DEFAULT_BOARD_HEIGHT: usize = 10;

/// Default number of simulated turns
pub const DEFAULT_TURNS: usize = 20;

/// Shapes dealt per simulated turn
pub const SHAPES_PER_TURN: usize = 3;

/// Cells left empty when populating a board at random
pub const DEFAULT_EMPTY_CELLS: usize = 4;

// Output settings
/// Pixels per sub-cell in exported snapshots
pub const SNAPSHOT_SCALE: u32 = 16;
