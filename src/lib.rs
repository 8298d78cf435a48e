// See LICENSE for the program's license.

//! Exhaustive enumeration of valid Ginkgo puzzle layouts.
//!
//! The Ginkgo puzzle is a diamond board of 25 rotatable spaces, each holding
//! a two-lobed leaf piece that points north, east, west or south. A layout
//! is valid when no two adjacent pieces project a lobe into the same shared
//! edge, and, under the optional loop rule, when no 2x2 block of pieces
//! forms a mutual-dependency cycle. This crate counts every valid layout;
//! symmetric duplicates are distinct layouts and all count.
//!
//! # Architecture
//!
//! The implementation uses a two-tier memory model:
//!
//! ## Tier 1: MEMO Data (Immutable)
//!
//! Precomputed data that never changes during search:
//! - Board adjacency and the placement order
//! - Per-depth already-placed neighbor lists (overlap rule)
//! - Per-depth lists of 2x2 blocks closed at that depth (loop rule)
//!
//! ## Tier 2: DYNAMIC Data (Mutable)
//!
//! Search state owned by the enumerator:
//! - The partial assignment (one `Option<Facing>` per position)
//! - Statistics counters
//!
//! # Search Algorithm
//!
//! A depth-first walk over the placement order (an outward spiral from the
//! center). At each depth the four orientations are tried in a fixed order;
//! infeasible candidates are pruned by constant-time table lookups. Every
//! prefix on the stack is feasible, so reaching full depth counts one valid
//! layout with no final re-check. The count is traversal-order independent.
//!
//! # Parallelization
//!
//! The subtrees under the first placement are independent, so the parallel
//! driver runs one worker per top-level orientation with private counters
//! and a single final reduction. Sequential runs additionally support
//! suspend/resume through [`search::Checkpoint`].
//!
//! # Reference counts
//!
//! On the full radius-3 board:
//! - overlap rule only: 5,435,817,984 valid layouts
//! - overlap and loop rules: 3,625,093,120 valid layouts

pub mod geometry;
pub mod memo;
pub mod report;
pub mod search;

// Re-export commonly used types
pub use geometry::{Board, Coord, Facing, PlacementOrder, PosId, Side};
pub use memo::Tables;
pub use report::RunSummary;
pub use search::{
    run_parallel, Checkpoint, CheckpointError, Enumerator, Outcome, SearchOptions,
};
