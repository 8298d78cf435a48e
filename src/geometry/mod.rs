// See LICENSE for the program's license.

//! Geometric types for the puzzle board.
//!
//! This module contains the pure, stateless model of the physical puzzle:
//! - Coord: Diagonal-grid coordinates of board spaces
//! - Side: The four sides of a space
//! - Board: A fixed set of spaces with its adjacency relation
//! - Facing: Piece orientations and their lobe geometry
//! - PlacementOrder: The sequence in which the search fills spaces

pub mod board;
pub mod coord;
pub mod facing;
pub mod spiral;

// Re-export for convenience
pub use board::{Board, EdgeId, PosId};
pub use coord::{Coord, Side};
pub use facing::{Facing, LOOP_PATTERNS, NFACINGS};
pub use spiral::{outward_spiral, PlacementOrder};
