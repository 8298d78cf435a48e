// See LICENSE for the program's license.

//! Placement orders over a board.
//!
//! The default order lays pieces down in an outward spiral from the center,
//! one ring at a time. The count is order-independent; the spiral just keeps
//! each new piece adjacent to already-placed ones, which makes the overlap
//! pruning bite early. Tests exercise reversed and arbitrary orders to check
//! the independence.

use super::board::{Board, PosId};
use super::coord::Coord;

/// The coordinates within `radius` of the center, ring by ring, each ring
/// walked counterclockwise starting just south of due east.
pub fn outward_spiral(radius: u8) -> Vec<Coord> {
    let mut coords = vec![Coord::new(0, 0)];
    for ring in 1..=u16::from(radius) {
        let legs: [(i8, i8); 4] = [(1, 1), (-1, 1), (-1, -1), (1, -1)];
        let mut leg = 0;
        let mut cur = Coord::new(1, 1 - ring as i8);
        let steps = 4 * usize::from(ring);
        for step in 0..steps {
            coords.push(cur);
            if step + 1 == steps {
                break;
            }
            let mut next = Coord::new(cur.x + legs[leg].0, cur.y + legs[leg].1);
            if next.ring() > ring {
                // Corner of the ring; turn counterclockwise.
                leg += 1;
                next = Coord::new(cur.x + legs[leg].0, cur.y + legs[leg].1);
            }
            cur = next;
        }
    }
    coords
}

/// The sequence in which the search fills board positions: a permutation of
/// the board's positions, fixed for a whole run.
#[derive(Debug, Clone)]
pub struct PlacementOrder(Vec<PosId>);

impl PlacementOrder {
    /// The board's native numbering. For diamond boards this is the outward
    /// spiral, center first.
    pub fn board_order(board: &Board) -> Self {
        Self(board.positions().collect())
    }

    /// The board's native numbering walked backwards, rim first.
    pub fn reversed(board: &Board) -> Self {
        let mut positions: Vec<PosId> = board.positions().collect();
        positions.reverse();
        Self(positions)
    }

    /// An explicit order.
    ///
    /// # Panics
    ///
    /// Panics unless `positions` is a permutation of the board's positions.
    pub fn from_positions(board: &Board, positions: Vec<PosId>) -> Self {
        assert_eq!(positions.len(), board.len(), "order length mismatch");
        let mut seen = vec![false; board.len()];
        for &id in &positions {
            assert!(
                !std::mem::replace(&mut seen[id.as_usize()], true),
                "position {:?} appears twice",
                id
            );
        }
        Self(positions)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The position filled at the given depth.
    pub fn position(&self, depth: usize) -> PosId {
        self.0[depth]
    }

    pub fn iter(&self) -> impl Iterator<Item = PosId> + '_ {
        self.0.iter().copied()
    }
}
