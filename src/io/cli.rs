//! Command-line interface running seeded puzzle simulations

use crate::board::shape::{ShapeGenerator, ShapeTemplate};
use crate::engine::session::{ExpansionPolicy, GameSession, SessionConfig};
use crate::io::configuration::{
    DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, DEFAULT_EMPTY_CELLS, DEFAULT_MIN_MATCH_SIZE,
    DEFAULT_SEED, DEFAULT_TURNS, SHAPES_PER_TURN,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::progress::SimulationProgress;
use crate::io::snapshot::export_board_as_png;
use clap::Parser;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "jellyfield")]
#[command(
    author,
    version,
    about = "Simulate seeded block placements on a match-and-cascade board"
)]
/// Command-line arguments for the simulation tool
pub struct Cli {
    /// Board width in cells
    #[arg(short = 'W', long, default_value_t = DEFAULT_BOARD_WIDTH)]
    pub width: usize,

    /// Board height in cells
    #[arg(short = 'H', long, default_value_t = DEFAULT_BOARD_HEIGHT)]
    pub height: usize,

    /// Random seed for reproducible simulations
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of turns to simulate
    #[arg(short, long, default_value_t = DEFAULT_TURNS)]
    pub turns: usize,

    /// Minimum sub-cell group size that qualifies for removal
    #[arg(short, long, default_value_t = DEFAULT_MIN_MATCH_SIZE)]
    pub min_match_size: usize,

    /// Cells left empty when populating the starting board
    #[arg(short, long, default_value_t = DEFAULT_EMPTY_CELLS)]
    pub empty: usize,

    /// Optional PNG snapshot of the final board
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Running totals across a whole simulation
#[derive(Debug, Default, Clone, Copy)]
struct SimulationTotals {
    placements: usize,
    removed_units: usize,
    expanded_units: usize,
    rounds: usize,
}

/// Orchestrates a seeded simulation over one session
pub struct SimulationRunner {
    cli: Cli,
    progress: Option<SimulationProgress>,
}

impl SimulationRunner {
    /// Create a runner with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress = cli
            .should_show_progress()
            .then(|| SimulationProgress::new(cli.turns));
        Self { cli, progress }
    }

    /// Run the simulation to completion
    ///
    /// # Errors
    ///
    /// Returns an error if session construction, a placement, or the final
    /// snapshot export fails.
    pub fn run(&mut self) -> Result<()> {
        if self.cli.empty > self.cli.width * self.cli.height {
            return Err(invalid_parameter(
                "empty",
                &self.cli.empty,
                &"cannot exceed the number of board cells",
            ));
        }

        let config = SessionConfig {
            min_match_size: self.cli.min_match_size,
            expansion: ExpansionPolicy::Seeded(self.cli.seed),
        };
        let mut session = GameSession::new(self.cli.width, self.cli.height, config)?;
        let mut rng = StdRng::seed_from_u64(self.cli.seed);
        let mut generator = ShapeGenerator::new(self.cli.seed);
        let mut totals = SimulationTotals::default();

        // Settle the randomly populated starting board before any turn
        session.populate_random(&mut rng, self.cli.empty)?;
        let opening = session.resolve_existing()?;
        totals.removed_units += opening.removed_units;
        totals.expanded_units += opening.expanded_units;
        totals.rounds += opening.rounds;

        for turn in 1..=self.cli.turns {
            for template in generator.generate(SHAPES_PER_TURN) {
                let Some(anchor) = Self::random_anchor(&session, &template, &mut rng) else {
                    continue;
                };
                let outcome = session.place_and_resolve(&template, anchor)?;
                totals.placements += 1;
                totals.removed_units += outcome.removed_units;
                totals.expanded_units += outcome.expanded_units;
                totals.rounds += outcome.rounds;
            }
            if let Some(progress) = &self.progress {
                progress.update(turn, session.board().active_unit_count(), totals.removed_units);
            }
        }

        if let Some(progress) = &self.progress {
            progress.finish(totals.removed_units);
        }

        if let Some(output) = &self.cli.output {
            let path = output
                .to_str()
                .ok_or_else(|| invalid_parameter("output", &output.display(), &"invalid path"))?;
            export_board_as_png(session.board(), path)?;
        }

        self.report(&session, totals);
        Ok(())
    }

    // Uniform pick among every anchor the template fits at; None when the
    // shape fits nowhere this turn.
    fn random_anchor(
        session: &GameSession,
        template: &ShapeTemplate,
        rng: &mut StdRng,
    ) -> Option<[i32; 2]> {
        let mut anchors = Vec::new();
        for x in 0..session.board().width() as i32 {
            for y in 0..session.board().height() as i32 {
                if session.can_place(template, [x, y]) {
                    anchors.push([x, y]);
                }
            }
        }
        if anchors.is_empty() {
            return None;
        }
        anchors.get(rng.random_range(0..anchors.len())).copied()
    }

    // Allow print for the final user-facing summary
    #[allow(clippy::print_stdout)]
    fn report(&self, session: &GameSession, totals: SimulationTotals) {
        if self.cli.quiet {
            return;
        }
        println!(
            "{} placements, {} units removed over {} cascade rounds, {} units expanded, {} units left on board",
            totals.placements,
            totals.removed_units,
            totals.rounds,
            totals.expanded_units,
            session.board().active_unit_count()
        );
    }
}
