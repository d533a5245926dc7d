//! Block entities occupying board cells
//!
//! A block is either simple (one color filling its whole cell) or composite
//! (four independently destructible color units in a 2x2 sub-layout). The
//! board owns block placement lifetime; blocks own their unit state.

use rand::{Rng, rngs::StdRng};

use crate::io::error::{Result, expansion_error};

/// Number of color units in a composite block
pub const UNIT_COUNT: usize = 4;

/// Same-block unit adjacency used by the expansion pass
///
/// Unit indices occupy a fixed 2x2 sub-layout: 0 = low-x/low-y,
/// 1 = high-x/low-y, 2 = low-x/high-y, 3 = high-x/high-y. The diagonal
/// pairs (0,3) and (1,2) are intentionally absent: expansion only grows
/// across a touching edge, never across a corner.
pub const UNIT_NEIGHBORS: [[usize; 2]; UNIT_COUNT] = [[1, 2], [0, 3], [0, 3], [1, 2]];

/// Block colors available to the puzzle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    /// Soft red
    Red,
    /// Bright blue
    Blue,
    /// Pistachio green
    Green,
    /// Golden yellow
    Yellow,
    /// Light purple
    Purple,
}

impl Color {
    /// Every color, in declaration order
    pub const ALL: [Self; 5] = [
        Self::Red,
        Self::Blue,
        Self::Green,
        Self::Yellow,
        Self::Purple,
    ];

    /// RGBA value used for board snapshots
    pub const fn rgba(self) -> [u8; 4] {
        match self {
            Self::Red => [255, 102, 102, 255],
            Self::Blue => [51, 153, 255, 255],
            Self::Green => [102, 230, 102, 255],
            Self::Yellow => [255, 217, 77, 255],
            Self::Purple => [179, 102, 255, 255],
        }
    }

    /// Draw a uniformly random color from the injected generator
    pub fn random(rng: &mut StdRng) -> Self {
        let index = rng.random_range(0..Self::ALL.len());
        Self::ALL.get(index).copied().unwrap_or(Self::Red)
    }

    /// Draw four independent random colors for a composite palette
    pub fn random_palette(rng: &mut StdRng) -> [Self; 4] {
        std::array::from_fn(|_| Self::random(rng))
    }
}

/// The occupant of a board cell
///
/// Simple blocks are atomic: they carry one color and vanish as a whole.
/// Composite blocks subdivide their cell into [`UNIT_COUNT`] color units
/// that are destroyed and refilled individually.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Block {
    /// One color, one cell, no sub-units
    Simple(Color),
    /// Four color units in the fixed 2x2 sub-layout
    Composite {
        /// Color of each unit, meaningful while the unit is active
        units: [Color; UNIT_COUNT],
        /// Which units are currently present
        active: [bool; UNIT_COUNT],
    },
}

impl Block {
    /// Create a simple single-color block
    pub const fn simple(color: Color) -> Self {
        Self::Simple(color)
    }

    /// Create a composite block with all four units active
    pub const fn composite(units: [Color; UNIT_COUNT]) -> Self {
        Self::Composite {
            units,
            active: [true; UNIT_COUNT],
        }
    }

    /// Whether this block has independently destructible units
    pub const fn is_composite(&self) -> bool {
        matches!(self, Self::Composite { .. })
    }

    /// Primary color: the simple color, or the first unit as a reference
    pub const fn primary_color(&self) -> Color {
        match self {
            Self::Simple(color) => *color,
            Self::Composite { units, .. } => units[0],
        }
    }

    /// Color of one unit, if that unit is active
    ///
    /// A simple block behaves as if all four sub-cell positions carry its
    /// single color.
    pub fn unit_color(&self, unit: usize) -> Option<Color> {
        match self {
            Self::Simple(color) => (unit < UNIT_COUNT).then_some(*color),
            Self::Composite { units, active } => active
                .get(unit)
                .copied()
                .unwrap_or(false)
                .then(|| units.get(unit).copied())
                .flatten(),
        }
    }

    /// Whether one unit is currently present
    pub fn unit_is_active(&self, unit: usize) -> bool {
        match self {
            Self::Simple(_) => unit < UNIT_COUNT,
            Self::Composite { active, .. } => active.get(unit).copied().unwrap_or(false),
        }
    }

    /// Count of active units, with a simple block counting as four
    pub fn active_units(&self) -> usize {
        match self {
            Self::Simple(_) => UNIT_COUNT,
            Self::Composite { active, .. } => active.iter().filter(|&&a| a).count(),
        }
    }

    /// Indices of inactive units; always empty for simple blocks
    pub fn empty_units(&self) -> Vec<usize> {
        match self {
            Self::Simple(_) => Vec::new(),
            Self::Composite { active, .. } => active
                .iter()
                .enumerate()
                .filter(|&(_, &a)| !a)
                .map(|(unit, _)| unit)
                .collect(),
        }
    }

    /// True for a composite block with no active unit left
    ///
    /// Always false for simple blocks: they vanish atomically and never
    /// exist in a half-empty state.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Simple(_) => false,
            Self::Composite { active, .. } => !active.iter().any(|&a| a),
        }
    }

    /// Destroy one unit, returning true when the block must be detached
    ///
    /// A simple block is destroyed as a whole regardless of `unit`. For a
    /// composite block the unit is deactivated; destroying an already
    /// inactive unit is a no-op.
    pub fn destroy_unit(&mut self, unit: usize) -> bool {
        match self {
            Self::Simple(_) => true,
            Self::Composite { active, .. } => {
                if let Some(slot) = active.get_mut(unit) {
                    *slot = false;
                }
                !active.iter().any(|&a| a)
            }
        }
    }

    /// Active same-block neighbors of one unit per [`UNIT_NEIGHBORS`]
    ///
    /// Simple blocks have no units and therefore no expansion candidates.
    pub fn active_same_block_neighbors(&self, unit: usize) -> Vec<usize> {
        let Self::Composite { active, .. } = self else {
            return Vec::new();
        };
        UNIT_NEIGHBORS.get(unit).map_or_else(Vec::new, |neighbors| {
            neighbors
                .iter()
                .copied()
                .filter(|&n| active.get(n).copied().unwrap_or(false))
                .collect()
        })
    }

    /// Copy an active unit's color into an inactive unit and activate it
    ///
    /// # Errors
    ///
    /// Returns `InvalidExpansion` when called on a simple block, when the
    /// target unit is already active or out of range, or when the source
    /// unit is inactive.
    pub fn expand_into(&mut self, unit: usize, source: usize) -> Result<()> {
        let Self::Composite { units, active } = self else {
            return Err(expansion_error(
                unit,
                source,
                "simple blocks have no units to expand",
            ));
        };
        if active.get(unit).copied().unwrap_or(true) {
            return Err(expansion_error(
                unit,
                source,
                "target unit is out of range or already active",
            ));
        }
        if !active.get(source).copied().unwrap_or(false) {
            return Err(expansion_error(
                unit,
                source,
                "source unit is out of range or inactive",
            ));
        }
        let Some(&color) = units.get(source) else {
            return Err(expansion_error(unit, source, "source unit has no color"));
        };
        if let Some(slot) = units.get_mut(unit) {
            *slot = color;
        }
        if let Some(slot) = active.get_mut(unit) {
            *slot = true;
        }
        Ok(())
    }
}
