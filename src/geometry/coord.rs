// See LICENSE for the program's license.

//! Diagonal-grid coordinates and the four sides of a board space.
//!
//! The 25 spaces of the physical board fit into a diagonal two-dimensional
//! grid centered on the middle piece. The axes run diagonally relative to the
//! board: +Y is to the northeast of the center and +X is to the southeast.

use strum_macros::{EnumCount as EnumCountMacro, EnumIter};

/// A coordinate on the diagonal grid. The center space is (0, 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub x: i8,
    pub y: i8,
}

impl Coord {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// City-block distance from the center: which ring of the board this
    /// coordinate lies on.
    pub fn ring(self) -> u16 {
        u16::from(self.x.unsigned_abs()) + u16::from(self.y.unsigned_abs())
    }

    /// The coordinate one step away on the given side.
    pub fn step(self, side: Side) -> Self {
        let (dx, dy) = side.offset();
        Self::new(self.x + dx, self.y + dy)
    }
}

/// One of the four sides of a space, named by compass direction on the
/// physical board.
///
/// Because the grid axes are diagonal, the four grid neighbors of a space sit
/// to its northwest (-X), southwest (-Y), southeast (+X) and northeast (+Y).
/// The discriminants index lobe bitmasks, so the order is load-bearing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumCountMacro, EnumIter)]
#[repr(u8)]
pub enum Side {
    Northwest,
    Southwest,
    Southeast,
    Northeast,
}

impl Side {
    /// The same side as seen from the neighboring space: the edge between a
    /// space and its northwest neighbor is that neighbor's southeast edge.
    pub fn opposite(self) -> Self {
        match self {
            Side::Northwest => Side::Southeast,
            Side::Southwest => Side::Northeast,
            Side::Southeast => Side::Northwest,
            Side::Northeast => Side::Southwest,
        }
    }

    /// Grid offset of the neighbor on this side.
    pub(crate) fn offset(self) -> (i8, i8) {
        match self {
            Side::Northwest => (-1, 0),
            Side::Southwest => (0, -1),
            Side::Southeast => (1, 0),
            Side::Northeast => (0, 1),
        }
    }

    pub fn as_usize(self) -> usize {
        self as usize
    }
}
