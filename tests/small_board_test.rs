// See LICENSE for the program's license.

//! Enumerator counts on boards small enough to verify independently.

mod common;

use common::brute_force_count;
use pretty_assertions::assert_eq;

use ginkgo_search::search::{Enumerator, Outcome, SearchOptions};
use ginkgo_search::{Board, Coord, PlacementOrder, Tables};

fn exhaustive_count(board: &Board, options: SearchOptions) -> u64 {
    let tables = Tables::new(board, PlacementOrder::board_order(board));
    let mut enumerator = Enumerator::new(&tables, options);
    match enumerator.run() {
        Outcome::Exhausted { valid } => valid,
        Outcome::Suspended(_) => panic!("suspended without a cancel flag"),
    }
}

fn loops_excluded() -> SearchOptions {
    SearchOptions {
        exclude_loops: true,
        ..SearchOptions::default()
    }
}

#[test]
fn test_single_space_counts_four() {
    let board = Board::diamond(0);
    assert_eq!(exhaustive_count(&board, SearchOptions::default()), 4);
    assert_eq!(exhaustive_count(&board, loops_excluded()), 4);
}

#[test]
fn test_radius_1_diamond() {
    // With the center fixed, the two arms it lobes into have 2 legal
    // facings each and the other two have 4: 2 * 2 * 4 * 4 = 64, times
    // four center facings. No 2x2 block fits, so the loop rule is idle.
    let board = Board::diamond(1);
    assert_eq!(exhaustive_count(&board, SearchOptions::default()), 256);
    assert_eq!(exhaustive_count(&board, loops_excluded()), 256);
    assert_eq!(brute_force_count(&board, false), 256);
}

#[test]
fn test_two_spaces() {
    // The pair overlaps only when the west piece lobes east (N or W) and
    // the east piece lobes west (E or S): 16 - 4 = 12.
    let board = Board::from_coords(&[Coord::new(0, 0), Coord::new(1, 0)]);
    assert_eq!(exhaustive_count(&board, SearchOptions::default()), 12);
    assert_eq!(brute_force_count(&board, false), 12);
}

#[test]
fn test_l_shape_matches_oracle() {
    let board = Board::from_coords(&[
        Coord::new(0, 0),
        Coord::new(1, 0),
        Coord::new(1, 1),
    ]);
    for exclude_loops in [false, true] {
        let options = SearchOptions {
            exclude_loops,
            ..SearchOptions::default()
        };
        assert_eq!(
            exhaustive_count(&board, options),
            brute_force_count(&board, exclude_loops)
        );
    }
}

#[test]
fn test_radius_1_matches_oracle_with_loops_excluded() {
    let board = Board::diamond(1);
    assert_eq!(
        exhaustive_count(&board, loops_excluded()),
        brute_force_count(&board, true)
    );
}

#[test]
fn test_runs_are_deterministic() {
    let board = Board::diamond(2);
    let first = exhaustive_count(&board, SearchOptions::default());
    let second = exhaustive_count(&board, SearchOptions::default());
    assert_eq!(first, second);
}

#[test]
fn test_rotational_cut_agrees_with_plain_search() {
    for radius in [1, 2] {
        let board = Board::diamond(radius);
        for exclude_loops in [false, true] {
            let plain = SearchOptions {
                exclude_loops,
                ..SearchOptions::default()
            };
            let cut = SearchOptions {
                exclude_loops,
                rotational_cut: true,
                ..SearchOptions::default()
            };
            assert_eq!(
                exhaustive_count(&board, cut),
                exhaustive_count(&board, plain),
                "radius {} exclude_loops {}",
                radius,
                exclude_loops
            );
        }
    }
}
