// See LICENSE for the program's license.

//! Boards: which coordinates hold a piece, adjacency, and occupied regions.

use strum::IntoEnumIterator;

use super::coord::{Coord, Side};
use super::facing::Facing;

/// Identifier of a board position, in `0..board.len()`.
///
/// Positions are numbered in board order: the outward spiral for diamond
/// boards, insertion order for custom boards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PosId(u8);

impl PosId {
    pub fn new(value: u8) -> Self {
        Self(value)
    }

    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

/// A global edge identifier in doubled coordinates.
///
/// The edge on side `s` of the space at (x, y) has midpoint
/// (2x, 2y) + offset(s), which is shared with the neighbor on that side.
/// Border edges (no neighboring space) get ids the same way, so lobes
/// hanging off the rim of the board never collide with anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeId {
    x2: i16,
    y2: i16,
}

impl EdgeId {
    fn between(coord: Coord, side: Side) -> Self {
        let (dx, dy) = side.offset();
        Self {
            x2: 2 * i16::from(coord.x) + i16::from(dx),
            y2: 2 * i16::from(coord.y) + i16::from(dy),
        }
    }
}

/// An immutable set of board positions with its adjacency relation.
#[derive(Debug, Clone)]
pub struct Board {
    radius: u8,
    side_len: usize,
    grid: Vec<Option<PosId>>,
    coords: Vec<Coord>,
    diamond: bool,
}

impl Board {
    /// The standard board shape: every coordinate within `radius` city
    /// blocks of the center, numbered in outward-spiral order. The physical
    /// puzzle is radius 3 (25 spaces).
    pub fn diamond(radius: u8) -> Self {
        Self::from_parts(radius, super::spiral::outward_spiral(radius), true)
    }

    /// A board holding exactly the given coordinates, numbered in the order
    /// given. Used to cut the search space down for tests.
    ///
    /// # Panics
    ///
    /// Panics if `coords` is empty, contains duplicates, or has more than
    /// 255 positions.
    pub fn from_coords(coords: &[Coord]) -> Self {
        assert!(!coords.is_empty(), "a board needs at least one position");
        let radius = coords.iter().map(|c| c.ring()).max().unwrap_or(0) as u8;
        Self::from_parts(radius, coords.to_vec(), false)
    }

    fn from_parts(radius: u8, coords: Vec<Coord>, diamond: bool) -> Self {
        assert!(coords.len() <= u8::MAX as usize + 1, "too many positions");
        let side_len = 2 * radius as usize + 1;
        let mut grid = vec![None; side_len * side_len];
        let mut board = Self {
            radius,
            side_len,
            grid: Vec::new(),
            coords,
            diamond,
        };
        for (i, &coord) in board.coords.iter().enumerate() {
            let cell = &mut grid[board.grid_index(coord).expect("coord within radius")];
            assert!(cell.is_none(), "duplicate coordinate {:?}", coord);
            *cell = Some(PosId(i as u8));
        }
        board.grid = grid;
        board
    }

    fn grid_index(&self, coord: Coord) -> Option<usize> {
        let r = i16::from(self.radius);
        let (x, y) = (i16::from(coord.x), i16::from(coord.y));
        if x < -r || x > r || y < -r || y > r {
            return None;
        }
        Some((x + r) as usize * self.side_len + (y + r) as usize)
    }

    /// Number of positions on the board.
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Whether this board is a full diamond. The rotational cut is only
    /// sound on diamond boards, which have exact 4-fold symmetry.
    pub fn is_diamond(&self) -> bool {
        self.diamond
    }

    /// The position at a coordinate, if the coordinate is on the board.
    pub fn position(&self, coord: Coord) -> Option<PosId> {
        self.grid_index(coord).and_then(|i| self.grid[i])
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.position(coord).is_some()
    }

    /// The coordinate of a position.
    pub fn coord(&self, id: PosId) -> Coord {
        self.coords[id.as_usize()]
    }

    /// The center position, when the board has one.
    pub fn center(&self) -> Option<PosId> {
        self.position(Coord::new(0, 0))
    }

    pub fn positions(&self) -> impl Iterator<Item = PosId> + '_ {
        (0..self.coords.len()).map(|i| PosId(i as u8))
    }

    /// The neighbor of a position on the given side, if on the board.
    pub fn neighbor(&self, id: PosId, side: Side) -> Option<PosId> {
        self.position(self.coord(id).step(side))
    }

    /// All positions whose pieces can physically touch the piece at `id`.
    /// Adjacency is symmetric and fixed for the board's lifetime.
    pub fn neighbors(&self, id: PosId) -> impl Iterator<Item = PosId> + '_ {
        Side::iter().filter_map(move |side| self.neighbor(id, side))
    }

    /// The set of edges a piece at `id` with the given orientation occupies:
    /// one global edge per lobe. Two adjacent pieces overlap exactly when
    /// their occupied regions intersect.
    pub fn occupied_region(&self, id: PosId, facing: Facing) -> [EdgeId; 2] {
        let coord = self.coord(id);
        facing.lobes().map(|side| EdgeId::between(coord, side))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diamond_sizes() {
        assert_eq!(Board::diamond(0).len(), 1);
        assert_eq!(Board::diamond(1).len(), 5);
        assert_eq!(Board::diamond(2).len(), 13);
        assert_eq!(Board::diamond(3).len(), 25);
    }

    #[test]
    fn test_diamond_membership() {
        let board = Board::diamond(3);
        assert!(board.contains(Coord::new(0, 0)));
        assert!(board.contains(Coord::new(3, 0)));
        assert!(board.contains(Coord::new(1, -2)));
        assert!(!board.contains(Coord::new(2, 2)));
        assert!(!board.contains(Coord::new(4, 0)));
    }

    #[test]
    fn test_center_is_placed_first_on_diamonds() {
        let board = Board::diamond(3);
        assert_eq!(board.center(), Some(PosId::new(0)));
        assert_eq!(board.coord(PosId::new(0)), Coord::new(0, 0));
    }

    #[test]
    fn test_adjacency_is_symmetric() {
        let board = Board::diamond(2);
        for p in board.positions() {
            for q in board.neighbors(p) {
                assert!(board.neighbors(q).any(|r| r == p));
            }
        }
    }

    #[test]
    fn test_neighbor_counts_on_small_diamond() {
        let board = Board::diamond(1);
        let center = board.center().unwrap();
        assert_eq!(board.neighbors(center).count(), 4);
        for p in board.positions().filter(|&p| p != center) {
            assert_eq!(board.neighbors(p).count(), 1);
        }
    }

    #[test]
    fn test_occupied_regions_intersect_iff_lobes_clash() {
        let board = Board::diamond(1);
        let center = board.center().unwrap();
        for side in Side::iter() {
            let neighbor = board.neighbor(center, side).unwrap();
            for mine in Facing::iter() {
                for theirs in Facing::iter() {
                    let a = board.occupied_region(center, mine);
                    let b = board.occupied_region(neighbor, theirs);
                    let shared = a.iter().any(|edge| b.contains(edge));
                    assert_eq!(shared, mine.overlaps(side, theirs));
                }
            }
        }
    }

    #[test]
    #[should_panic(expected = "duplicate coordinate")]
    fn test_duplicate_coordinates_rejected() {
        Board::from_coords(&[Coord::new(0, 0), Coord::new(1, 0), Coord::new(0, 0)]);
    }
}
