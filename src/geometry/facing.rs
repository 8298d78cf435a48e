// See LICENSE for the program's license.

//! Piece orientations and lobe geometry.
//!
//! Each piece is a ginkgo leaf with two lobes. Pointing the stem in a compass
//! direction fans the lobes across the two sides facing away from it: a piece
//! pointing north fills its southwest and southeast sides. Two adjacent
//! pieces overlap exactly when both project a lobe into the edge they share.

use serde::{Deserialize, Serialize};
use strum_macros::{EnumCount as EnumCountMacro, EnumIter};

use super::coord::Side;

/// The orientation of a placed piece: the compass direction its stem points.
///
/// The discriminant order is the order in which the search tries candidates;
/// checkpoints rely on it, so it must stay fixed.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumCountMacro,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[repr(u8)]
pub enum Facing {
    North,
    East,
    West,
    South,
}

/// Number of orientations a piece may take.
pub const NFACINGS: usize = <Facing as strum::EnumCount>::COUNT;

impl Facing {
    /// The two sides this orientation's lobes occupy.
    pub fn lobes(self) -> [Side; 2] {
        match self {
            Facing::North => [Side::Southwest, Side::Southeast],
            Facing::East => [Side::Northwest, Side::Southwest],
            Facing::West => [Side::Southeast, Side::Northeast],
            Facing::South => [Side::Northwest, Side::Northeast],
        }
    }

    /// Bitmask over `Side` discriminants of the sides carrying a lobe.
    pub fn lobe_mask(self) -> u8 {
        // NW = bit 0, SW = bit 1, SE = bit 2, NE = bit 3.
        match self {
            Facing::North => 0b0110,
            Facing::East => 0b0011,
            Facing::West => 0b1100,
            Facing::South => 0b1001,
        }
    }

    /// Whether this orientation puts a lobe on the given side.
    pub fn has_lobe(self, side: Side) -> bool {
        self.lobe_mask() & (1 << side.as_usize()) != 0
    }

    /// Whether a piece with this orientation overlaps the piece on the given
    /// side: both project a lobe into the shared edge.
    pub fn overlaps(self, side: Side, other: Facing) -> bool {
        self.has_lobe(side) && other.has_lobe(side.opposite())
    }
}

/// The two orientation patterns that lock a 2x2 block of pieces into a
/// mutual-dependency loop, one winding each way around the block.
///
/// Pieces are listed counterclockwise from the block's low corner:
/// (x, y), (x+1, y), (x+1, y+1), (x, y+1). Neither pattern overlaps
/// geometrically, which is what makes the loop rule a separate condition.
pub const LOOP_PATTERNS: [[Facing; 4]; 2] = [
    [Facing::North, Facing::West, Facing::South, Facing::East],
    [Facing::South, Facing::East, Facing::North, Facing::West],
];
