//! Immutable shape templates and the seeded shape generator
//!
//! A template describes a placeable multi-cell shape: relative offsets from
//! an anchor, a primary color, and an optional four-color palette applied
//! to any offset tagged composite. Whether an offset is composite is
//! decided at authoring time, never re-derived from geometry. Placing a
//! template never mutates it; the board instantiates fresh blocks.

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::board::block::{Color, UNIT_COUNT};
use crate::io::error::{Result, template_error};

/// How one template offset materializes on the board
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OffsetKind {
    /// Instantiates a single-color atomic block
    Simple,
    /// Instantiates a composite block from the template palette
    Composite,
}

/// One cell of a shape, relative to the template anchor
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShapeOffset {
    /// Relative cell coordinates from the anchor
    pub delta: [i32; 2],
    /// Explicit authoring-time tag for the instantiated block kind
    pub kind: OffsetKind,
}

impl ShapeOffset {
    /// A simple offset at the given delta
    pub const fn simple(dx: i32, dy: i32) -> Self {
        Self {
            delta: [dx, dy],
            kind: OffsetKind::Simple,
        }
    }

    /// A composite offset at the given delta
    pub const fn composite(dx: i32, dy: i32) -> Self {
        Self {
            delta: [dx, dy],
            kind: OffsetKind::Composite,
        }
    }
}

/// Immutable description of a placeable shape
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShapeTemplate {
    offsets: Vec<ShapeOffset>,
    color: Color,
    palette: Option<[Color; UNIT_COUNT]>,
}

impl ShapeTemplate {
    /// Build a template, validating the composite contract
    ///
    /// A template may mix simple and composite offsets, but any composite
    /// offset requires the full four-color palette.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTemplate` when an offset is tagged composite and no
    /// palette is supplied.
    pub fn new(
        offsets: Vec<ShapeOffset>,
        color: Color,
        palette: Option<[Color; UNIT_COUNT]>,
    ) -> Result<Self> {
        let needs_palette = offsets
            .iter()
            .any(|offset| offset.kind == OffsetKind::Composite);
        if needs_palette && palette.is_none() {
            return Err(template_error(
                "composite offsets require a four-color palette",
            ));
        }
        Ok(Self {
            offsets,
            color,
            palette,
        })
    }

    /// A single-color template over the given deltas
    pub fn simple(color: Color, deltas: &[[i32; 2]]) -> Self {
        Self {
            offsets: deltas
                .iter()
                .map(|&[dx, dy]| ShapeOffset::simple(dx, dy))
                .collect(),
            color,
            palette: None,
        }
    }

    /// The compact 2x2 square: one composite offset at the anchor
    pub fn composite_square(palette: [Color; UNIT_COUNT]) -> Self {
        Self {
            offsets: vec![ShapeOffset::composite(0, 0)],
            color: palette[0],
            palette: Some(palette),
        }
    }

    /// The template's offsets in authoring order
    pub fn offsets(&self) -> &[ShapeOffset] {
        &self.offsets
    }

    /// Primary color applied to simple offsets
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Palette applied to composite offsets, if any
    pub const fn palette(&self) -> Option<[Color; UNIT_COUNT]> {
        self.palette
    }
}

/// Relative offsets of the simple preset shapes dealt to the player
const SIMPLE_PRESETS: [&[[i32; 2]]; 5] = [
    &[[0, 0]],
    &[[0, 0], [1, 0]],
    &[[0, 0], [0, 1]],
    &[[0, 0], [1, 0], [2, 0]],
    &[[0, 0], [1, 0], [0, 1]],
];

/// Seeded random shape source
///
/// Draws from the preset list with a fresh random primary color per shape;
/// the compact 2x2 square additionally gets a random four-color palette.
/// Correctness of the engine never depends on any specific draw.
pub struct ShapeGenerator {
    rng: StdRng,
}

impl ShapeGenerator {
    /// Create a generator from a seed for reproducible deals
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw one shape template
    pub fn next_shape(&mut self) -> ShapeTemplate {
        let pick = self.rng.random_range(0..=SIMPLE_PRESETS.len());
        match SIMPLE_PRESETS.get(pick) {
            Some(deltas) => ShapeTemplate::simple(Color::random(&mut self.rng), deltas),
            None => ShapeTemplate::composite_square(Color::random_palette(&mut self.rng)),
        }
    }

    /// Draw a hand of shape templates
    pub fn generate(&mut self, count: usize) -> Vec<ShapeTemplate> {
        (0..count).map(|_| self.next_shape()).collect()
    }
}
