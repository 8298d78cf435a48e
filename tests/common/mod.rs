// See LICENSE for the program's license.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use std::collections::HashSet;

use itertools::Itertools;
use strum::IntoEnumIterator;

use ginkgo_search::geometry::LOOP_PATTERNS;
use ginkgo_search::{Board, Coord, Facing};

/// Whether a complete assignment is a valid layout, decided straight from
/// the geometry rather than through the search tables.
///
/// Overlap: each lobe occupies one global edge and an edge holds at most
/// one lobe, so a layout overlaps exactly when two pieces claim the same
/// edge. Loops: every 2x2 block is compared against the two loop patterns.
pub fn is_valid(board: &Board, facings: &[Facing], exclude_loops: bool) -> bool {
    let mut occupied = HashSet::new();
    for p in board.positions() {
        for edge in board.occupied_region(p, facings[p.as_usize()]) {
            if !occupied.insert(edge) {
                return false;
            }
        }
    }

    if exclude_loops {
        for p in board.positions() {
            let low = board.coord(p);
            let members = [
                Some(p),
                board.position(Coord::new(low.x + 1, low.y)),
                board.position(Coord::new(low.x + 1, low.y + 1)),
                board.position(Coord::new(low.x, low.y + 1)),
            ];
            let Some(members) = members
                .into_iter()
                .collect::<Option<Vec<_>>>()
            else {
                continue;
            };
            let block: Vec<Facing> = members.iter().map(|m| facings[m.as_usize()]).collect();
            if LOOP_PATTERNS.iter().any(|pattern| pattern[..] == block[..]) {
                return false;
            }
        }
    }

    true
}

/// Count valid layouts by trying every assignment. Only usable on boards
/// of ten or so positions, which is exactly what it is for.
pub fn brute_force_count(board: &Board, exclude_loops: bool) -> u64 {
    (0..board.len())
        .map(|_| Facing::iter())
        .multi_cartesian_product()
        .filter(|facings| is_valid(board, facings, exclude_loops))
        .count() as u64
}
