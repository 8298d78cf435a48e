// See LICENSE for the program's license.

//! Precomputed lookup tables for one (board, placement order) pair.

use crate::geometry::{Board, PlacementOrder, PosId, Side};
use strum::IntoEnumIterator;

/// A 2x2 block of positions, listed counterclockwise from the low corner:
/// (x, y), (x+1, y), (x+1, y+1), (x, y+1). The member order matches
/// [`crate::geometry::LOOP_PATTERNS`], so pattern matching is a positional
/// comparison.
pub type Block = [PosId; 4];

/// Immutable search tables, built once per run and shared by every worker.
///
/// All per-node work during the search is table lookups:
///
/// - `earlier_neighbors(depth)`: the neighbors of the position placed at
///   `depth` that the order has already filled, with the side they sit on.
///   Overlap checking consults exactly these pairs, so each edge of the
///   board is checked once, from whichever endpoint is placed later.
/// - `closing_blocks(depth)`: the 2x2 blocks whose last member is the
///   position placed at `depth`, with that position's index within the
///   block. The loop rule only fires when a block closes, so blocks are
///   filed under the depth that closes them.
///
/// Indexing is by depth in the placement order, not by position id, because
/// the search walks depths.
#[derive(Debug)]
pub struct Tables {
    order: PlacementOrder,
    depth_of: Vec<usize>,
    earlier_neighbors: Vec<Vec<(Side, PosId)>>,
    closing_blocks: Vec<Vec<(Block, usize)>>,
    center_first: bool,
    diamond: bool,
}

impl Tables {
    /// Precompute the tables for a board walked in the given order.
    ///
    /// # Panics
    ///
    /// Panics if `order` is not an order over `board` (length mismatch).
    pub fn new(board: &Board, order: PlacementOrder) -> Self {
        assert_eq!(order.len(), board.len(), "order does not cover the board");

        let mut depth_of = vec![0usize; board.len()];
        for (depth, id) in order.iter().enumerate() {
            depth_of[id.as_usize()] = depth;
        }

        let mut earlier_neighbors = Vec::with_capacity(board.len());
        for depth in 0..order.len() {
            let id = order.position(depth);
            let earlier: Vec<(Side, PosId)> = Side::iter()
                .filter_map(|side| {
                    board
                        .neighbor(id, side)
                        .filter(|n| depth_of[n.as_usize()] < depth)
                        .map(|n| (side, n))
                })
                .collect();
            earlier_neighbors.push(earlier);
        }

        let mut closing_blocks = vec![Vec::new(); board.len()];
        for low in board.positions() {
            let block = [
                Some(low),
                board.neighbor(low, Side::Southeast),
                board
                    .neighbor(low, Side::Southeast)
                    .and_then(|p| board.neighbor(p, Side::Northeast)),
                board.neighbor(low, Side::Northeast),
            ];
            let Some(block) = collect_block(block) else {
                continue;
            };
            let closing_depth = block
                .iter()
                .map(|m| depth_of[m.as_usize()])
                .max()
                .unwrap_or(0);
            let closer = order.position(closing_depth);
            let index_in_block = block
                .iter()
                .position(|&m| m == closer)
                .unwrap_or_default();
            closing_blocks[closing_depth].push((block, index_in_block));
        }

        let center_first = board
            .center()
            .is_some_and(|c| order.position(0) == c);

        Self {
            order,
            depth_of,
            earlier_neighbors,
            closing_blocks,
            center_first,
            diamond: board.is_diamond(),
        }
    }

    /// Number of positions, which is also the depth of a full layout.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn order(&self) -> &PlacementOrder {
        &self.order
    }

    /// The position filled at the given depth.
    pub fn position_at(&self, depth: usize) -> PosId {
        self.order.position(depth)
    }

    /// The depth at which the given position is filled.
    pub fn depth_of(&self, id: PosId) -> usize {
        self.depth_of[id.as_usize()]
    }

    /// Already-placed neighbors of the position filled at `depth`.
    pub fn earlier_neighbors(&self, depth: usize) -> &[(Side, PosId)] {
        &self.earlier_neighbors[depth]
    }

    /// The 2x2 blocks completed by the placement at `depth`, each with the
    /// index of the placed position within the block.
    pub fn closing_blocks(&self, depth: usize) -> &[(Block, usize)] {
        &self.closing_blocks[depth]
    }

    /// Whether the rotational cut is sound here: a diamond board whose
    /// center is placed first.
    pub fn supports_rotational_cut(&self) -> bool {
        self.diamond && self.center_first
    }
}

fn collect_block(members: [Option<PosId>; 4]) -> Option<[PosId; 4]> {
    Some([members[0]?, members[1]?, members[2]?, members[3]?])
}
