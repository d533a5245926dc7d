//! Cascade fixed-point loop: evaluate, remove, expand, repeat
//!
//! Each round removes every qualifying group, then lets surviving
//! composite blocks grow into their own vacated units. A round that makes
//! no expansion progress terminates the loop: material never relocates
//! across blocks, so without expansion no new matches can appear.

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::board::Board;
use crate::board::block::{Block, Color};
use crate::engine::matching::{self, MatchGroup};
use crate::engine::subgrid::to_cell_unit;
use crate::io::error::Result;

/// What happened to one unit during resolution
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventKind {
    /// The unit was part of a removal group
    Removed,
    /// The unit was refilled from a same-block neighbor
    Expanded,
}

/// One entry of the ordered resolution log, for presentation replay
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolutionEvent {
    /// Removal or expansion
    pub kind: EventKind,
    /// Board cell the unit belongs to
    pub cell: [usize; 2],
    /// Unit index within the cell's block
    pub unit: usize,
    /// Color removed from or copied into the unit
    pub color: Color,
}

/// Final accounting of one cascade run
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Total matched sub-cells removed across all rounds
    pub removed_units: usize,
    /// Total units refilled by expansion across all rounds
    pub expanded_units: usize,
    /// Number of evaluate-remove-expand rounds that removed material
    pub rounds: usize,
    /// Ordered removal and expansion log in production order
    pub events: Vec<ResolutionEvent>,
}

/// Source selector for the expansion pass
///
/// The uniform-random pick is a fairness choice, not a correctness
/// constraint; the deterministic mode takes the first qualifying neighbor
/// for reproducible tests.
pub struct NeighborPicker {
    mode: PickerMode,
}

enum PickerMode {
    Seeded(StdRng),
    Deterministic,
}

impl NeighborPicker {
    /// Uniform-random picker from an injected seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            mode: PickerMode::Seeded(StdRng::seed_from_u64(seed)),
        }
    }

    /// Fixed tie-break picker: always the first candidate
    pub const fn deterministic() -> Self {
        Self {
            mode: PickerMode::Deterministic,
        }
    }

    /// Pick one candidate, or `None` when there are none
    pub fn pick(&mut self, candidates: &[usize]) -> Option<usize> {
        match &mut self.mode {
            PickerMode::Deterministic => candidates.first().copied(),
            PickerMode::Seeded(rng) => {
                if candidates.is_empty() {
                    None
                } else {
                    candidates.get(rng.random_range(0..candidates.len())).copied()
                }
            }
        }
    }
}

/// Drives the repeated evaluate-remove-expand cycle to a fixed point
pub struct CascadeResolver {
    min_match_size: usize,
    picker: NeighborPicker,
}

impl CascadeResolver {
    /// Create a resolver with a match threshold and expansion picker
    pub const fn new(min_match_size: usize, picker: NeighborPicker) -> Self {
        Self {
            min_match_size,
            picker,
        }
    }

    /// Configured minimum group size
    pub const fn min_match_size(&self) -> usize {
        self.min_match_size
    }

    /// Resolve the board to a stable configuration
    ///
    /// Runs to completion synchronously; pacing and animation belong to
    /// callers replaying the returned event log. An already-stable board
    /// reports zero removals and zero rounds.
    ///
    /// # Errors
    ///
    /// Returns `InvalidExpansion` if block state becomes internally
    /// inconsistent during the expansion pass; this is a programming
    /// error, never a user-facing condition.
    pub fn resolve(&mut self, board: &mut Board) -> Result<Resolution> {
        let mut resolution = Resolution::default();

        loop {
            let groups = matching::evaluate(board, self.min_match_size);
            if groups.is_empty() {
                break;
            }
            resolution.rounds += 1;
            Self::remove_groups(board, &groups, &mut resolution);

            let expanded = self.expand_survivors(board, &mut resolution)?;
            if expanded == 0 {
                break;
            }
        }

        Ok(resolution)
    }

    // Every matched sub-cell counts as one removed unit. A simple block
    // detaches on the first of its four co-occurring sub-cells; the
    // remaining three map to the then-vacant cell and only count.
    fn remove_groups(board: &mut Board, groups: &[MatchGroup], resolution: &mut Resolution) {
        for group in groups {
            for &v in &group.members {
                let (cell, unit) = to_cell_unit(v);
                board.clear_unit(cell, unit);
                resolution.removed_units += 1;
                resolution.events.push(ResolutionEvent {
                    kind: EventKind::Removed,
                    cell,
                    unit,
                    color: group.color,
                });
            }
        }
    }

    // Same-block growth only: each inactive unit pulls from an active
    // neighbor per the fixed adjacency table. Units are processed in
    // ascending order against live block state, so a unit filled earlier
    // in the pass can source a later one. A unit with no active neighbor
    // stays empty this round; fully empty blocks were already detached.
    fn expand_survivors(&mut self, board: &mut Board, resolution: &mut Resolution) -> Result<usize> {
        let candidates: Vec<[usize; 2]> = board
            .cells()
            .filter(|(_, cell)| cell.block().is_some_and(Block::is_composite))
            .map(|(pos, _)| pos)
            .collect();

        let mut expanded = 0;
        for pos in candidates {
            let empty_units = board.block_at(pos).map_or_else(Vec::new, |block| block.empty_units());
            for unit in empty_units {
                let sources = board
                    .block_at(pos)
                    .map_or_else(Vec::new, |block| block.active_same_block_neighbors(unit));
                let Some(source) = self.picker.pick(&sources) else {
                    continue;
                };
                let color = board.expand_unit(pos, unit, source)?;
                expanded += 1;
                resolution.expanded_units += 1;
                resolution.events.push(ResolutionEvent {
                    kind: EventKind::Expanded,
                    cell: pos,
                    unit,
                    color,
                });
            }
        }

        Ok(expanded)
    }
}
