// See LICENSE for the program's license.

//! Tier 1: MEMO data (immutable, precomputed).
//!
//! Everything the search consults per node is computed here, once, before
//! the first placement:
//! - Per-depth lists of already-placed neighbors (overlap rule)
//! - Per-depth lists of 2x2 blocks closed by that placement (loop rule)
//! - Depth of each position in the placement order
//!
//! The search itself (Tier 2, `crate::search`) never touches the board
//! geometry directly.

pub mod tables;

pub use tables::{Block, Tables};
