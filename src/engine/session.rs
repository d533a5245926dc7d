//! External boundary of the resolution engine
//!
//! A session owns one board and the resolver driving it. Presentation code
//! supplies templates and anchors and gets back the resolution accounting
//! plus an ordered event log to replay at whatever pace it chooses; the
//! engine itself returns final state instantly.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::board::block::Color;
use crate::board::grid::CellState;
use crate::board::shape::ShapeTemplate;
use crate::board::{Board, Cell};
use crate::engine::cascade::{CascadeResolver, NeighborPicker, Resolution};
use crate::io::configuration::{DEFAULT_MIN_MATCH_SIZE, DEFAULT_SEED};
use crate::io::error::{Result, invalid_parameter};

/// How the expansion pass breaks ties between candidate source units
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExpansionPolicy {
    /// Uniform-random pick from an injected seed
    Seeded(u64),
    /// Always the first qualifying neighbor, for reproducible tests
    Deterministic,
}

/// Tunable session parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Minimum sub-cell group size that qualifies for removal
    pub min_match_size: usize,
    /// Expansion tie-break policy
    pub expansion: ExpansionPolicy,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            min_match_size: DEFAULT_MIN_MATCH_SIZE,
            expansion: ExpansionPolicy::Seeded(DEFAULT_SEED),
        }
    }
}

/// One board plus its cascade resolver
pub struct GameSession {
    board: Board,
    resolver: CascadeResolver,
}

impl GameSession {
    /// Create a session over an empty board
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for a zero match threshold or for board
    /// dimensions rejected by [`Board::new`].
    pub fn new(width: usize, height: usize, config: SessionConfig) -> Result<Self> {
        if config.min_match_size == 0 {
            return Err(invalid_parameter(
                "min_match_size",
                &config.min_match_size,
                &"threshold must be at least 1",
            ));
        }
        let picker = match config.expansion {
            ExpansionPolicy::Seeded(seed) => NeighborPicker::seeded(seed),
            ExpansionPolicy::Deterministic => NeighborPicker::deterministic(),
        };
        Ok(Self {
            board: Board::new(width, height)?,
            resolver: CascadeResolver::new(config.min_match_size, picker),
        })
    }

    /// Read-only view of the board
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Whether a template fits at an anchor; no side effects
    pub fn can_place(&self, template: &ShapeTemplate, anchor: [i32; 2]) -> bool {
        self.board.can_place(template, anchor)
    }

    /// Commit a placement and cascade to a stable board
    ///
    /// The single externally callable validate-commit-cascade sequence.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPlacement` when the template does not fit (callers
    /// are expected to check [`GameSession::can_place`] first; the board is
    /// left unchanged), `InvalidTemplate` for a malformed template, or
    /// `InvalidExpansion` for an internal consistency violation.
    pub fn place_and_resolve(
        &mut self,
        template: &ShapeTemplate,
        anchor: [i32; 2],
    ) -> Result<Resolution> {
        self.board.place(template, anchor)?;
        self.resolver.resolve(&mut self.board)
    }

    /// Cascade the current board without placing anything
    ///
    /// Used after bulk population; an already-stable board reports zero
    /// removals and zero rounds.
    ///
    /// # Errors
    ///
    /// Returns `InvalidExpansion` for an internal consistency violation.
    pub fn resolve_existing(&mut self) -> Result<Resolution> {
        self.resolver.resolve(&mut self.board)
    }

    /// Presentation query for one cell, `None` when out of bounds
    pub fn cell_state(&self, x: i32, y: i32) -> Option<CellState> {
        self.board.cell(x, y).map(Cell::state)
    }

    /// Fill all but `empty_cells` cells with random-palette composite blocks
    ///
    /// Shuffles the full coordinate list and commits one compact composite
    /// square per chosen cell. Returns the number of cells filled. The
    /// board is left unresolved; follow with
    /// [`GameSession::resolve_existing`] to settle it.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPlacement` if a chosen cell is unexpectedly
    /// occupied; on a fresh board this cannot happen.
    pub fn populate_random(&mut self, rng: &mut StdRng, empty_cells: usize) -> Result<usize> {
        let mut coords: Vec<[i32; 2]> = (0..self.board.width() as i32)
            .flat_map(|x| (0..self.board.height() as i32).map(move |y| [x, y]))
            .collect();
        coords.shuffle(rng);

        let fill = coords.len().saturating_sub(empty_cells);
        for &anchor in coords.iter().take(fill) {
            let template = ShapeTemplate::composite_square(Color::random_palette(rng));
            self.board.place(&template, anchor)?;
        }
        Ok(fill)
    }
}
