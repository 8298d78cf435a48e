// See LICENSE for the program's license.

//! Parallel driver: one worker per top-level orientation choice.
//!
//! The search tree under each first-candidate choice is independent, so the
//! split needs no locks: each worker owns a private enumerator and counter
//! set, and the only shared step is the final reduction. Parallel runs do
//! not poll the cancellation flag; pause/resume is a sequential-mode
//! feature.

use strum::IntoEnumIterator;

use crate::geometry::Facing;
use crate::memo::Tables;

use super::{Enumerator, SearchOptions, Statistics};

/// Enumerate the whole tree with four workers, returning the reported count
/// (rotational multiplier applied) and the merged statistics.
pub fn run_parallel(tables: &Tables, options: &SearchOptions) -> (u64, Statistics) {
    let seed: &[Facing] = if options.rotational_cut {
        &[Facing::North]
    } else {
        &[]
    };
    assert!(
        tables.len() > seed.len(),
        "board too small to split below the seed"
    );
    let worker_options = SearchOptions {
        progress_every: 0,
        ..options.clone()
    };

    let results: Vec<(u64, Statistics)> = std::thread::scope(|scope| {
        let handles: Vec<_> = Facing::iter()
            .map(|facing| {
                let mut prefix = seed.to_vec();
                prefix.push(facing);
                let worker_options = worker_options.clone();
                scope.spawn(move || {
                    let mut enumerator = Enumerator::new(tables, worker_options);
                    let subtotal = enumerator.count_with_prefix(&prefix);
                    (subtotal, enumerator.statistics().clone())
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("search worker panicked"))
            .collect()
    });

    let multiplier = if options.rotational_cut { 4 } else { 1 };
    let mut total = 0u64;
    let mut statistics = Statistics::new();
    for (subtotal, worker_stats) in &results {
        total += subtotal;
        statistics.merge(worker_stats);
    }
    (total * multiplier, statistics)
}
