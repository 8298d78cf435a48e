// See LICENSE for the program's license.

//! The count must not depend on the order pieces are laid down.

mod common;

use pretty_assertions::assert_eq;

use ginkgo_search::search::{Enumerator, Outcome, SearchOptions};
use ginkgo_search::{Board, PlacementOrder, PosId, Tables};

fn count_with_order(board: &Board, order: PlacementOrder, exclude_loops: bool) -> u64 {
    let tables = Tables::new(board, order);
    let options = SearchOptions {
        exclude_loops,
        ..SearchOptions::default()
    };
    let mut enumerator = Enumerator::new(&tables, options);
    match enumerator.run() {
        Outcome::Exhausted { valid } => valid,
        Outcome::Suspended(_) => panic!("suspended without a cancel flag"),
    }
}

#[test]
fn test_reversed_order_counts_the_same() {
    let board = Board::diamond(2);
    for exclude_loops in [false, true] {
        let spiral = count_with_order(&board, PlacementOrder::board_order(&board), exclude_loops);
        let reversed = count_with_order(&board, PlacementOrder::reversed(&board), exclude_loops);
        assert_eq!(spiral, reversed, "exclude_loops {}", exclude_loops);
    }
}

#[test]
fn test_arbitrary_order_counts_the_same() {
    // A hand-shuffled order that is neither monotone in ring nor contiguous.
    let board = Board::diamond(1);
    let shuffled: Vec<PosId> = [2u8, 0, 4, 1, 3].iter().map(|&i| PosId::new(i)).collect();
    let order = PlacementOrder::from_positions(&board, shuffled);
    assert_eq!(
        count_with_order(&board, order, false),
        count_with_order(&board, PlacementOrder::board_order(&board), false)
    );
}

#[test]
fn test_common_oracle_agrees_on_diamond_1() {
    let board = Board::diamond(1);
    assert_eq!(
        count_with_order(&board, PlacementOrder::board_order(&board), false),
        common::brute_force_count(&board, false)
    );
}
