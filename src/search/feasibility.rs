// See LICENSE for the program's license.

//! The feasibility checker: can a candidate orientation go at the next
//! position without breaking a placement rule?
//!
//! Both rules are local, so the check is constant time per candidate:
//! a fixed number of table lookups, no allocation, no scanning of the
//! partial layout beyond the looked-up positions.

use strum_macros::EnumCount as EnumCountMacro;

use crate::geometry::{Facing, LOOP_PATTERNS};
use crate::memo::Tables;

/// Why a candidate placement was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumCountMacro)]
#[repr(u8)]
pub enum Rejection {
    /// A lobe of the candidate collides with a lobe of a placed neighbor.
    Overlap,
    /// The candidate closes a 2x2 block in one of the two loop patterns.
    /// Only raised when the loop rule is switched on.
    Loop,
}

/// Check `candidate` at the position filled at `depth` against the placed
/// prefix in `facings` (indexed by position id, `None` when unplaced).
///
/// The caller guarantees that exactly the positions at depths `0..depth`
/// are placed; the tables then make every lookup a placed position.
pub fn check_placement(
    tables: &Tables,
    facings: &[Option<Facing>],
    depth: usize,
    candidate: Facing,
    exclude_loops: bool,
) -> Result<(), Rejection> {
    for &(side, neighbor) in tables.earlier_neighbors(depth) {
        if let Some(placed) = facings[neighbor.as_usize()] {
            if candidate.overlaps(side, placed) {
                return Err(Rejection::Overlap);
            }
        }
    }

    if exclude_loops {
        for &(block, index_in_block) in tables.closing_blocks(depth) {
            'patterns: for pattern in &LOOP_PATTERNS {
                if pattern[index_in_block] != candidate {
                    continue;
                }
                for (member_index, member) in block.iter().enumerate() {
                    if member_index == index_in_block {
                        continue;
                    }
                    if facings[member.as_usize()] != Some(pattern[member_index]) {
                        continue 'patterns;
                    }
                }
                return Err(Rejection::Loop);
            }
        }
    }

    Ok(())
}
