// See LICENSE for the program's license.

//! Tier 2: DYNAMIC search state and the backtracking enumerator.
//!
//! The enumerator walks the placement order depth-first, trying the four
//! orientations at each position and pruning with the feasibility checker.
//! Every complete assignment it reaches is valid by construction, so the
//! leaves are simply counted.
//!
//! # Suspension
//!
//! An external cancellation flag is polled at shallow depths (every node at
//! depth <= [`CANCEL_POLL_DEPTH`]), which bounds the latency of a pause to
//! one shallow subtree. On suspension the enumerator captures the placed
//! prefix and its counters as a [`Checkpoint`]; resuming fast-forwards the
//! candidate loops to that exact node and continues. An uninterrupted run
//! and a suspend-then-resume pair count exactly the same leaves.

pub mod checkpoint;
pub mod feasibility;
pub mod parallel;
pub mod statistics;

pub use checkpoint::{Checkpoint, CheckpointError};
pub use feasibility::{check_placement, Rejection};
pub use parallel::run_parallel;
pub use statistics::{Counters, Statistics};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use strum::IntoEnumIterator;

use crate::geometry::Facing;
use crate::memo::Tables;
use crate::report::Reporter;

/// Depth at or above which the cancellation flag is polled. Deeper nodes
/// never poll, keeping the hot path free of atomic loads.
pub const CANCEL_POLL_DEPTH: usize = 4;

/// Knobs for one enumeration run.
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// Reject layouts containing a 2x2 mutual-dependency loop.
    pub exclude_loops: bool,
    /// Fix the first piece (the center) to north and multiply the count by
    /// four. Sound only on center-first diamond boards, where rotation maps
    /// valid layouts to valid layouts and always moves the center's facing.
    pub rotational_cut: bool,
    /// Emit a progress line every this many valid layouts; 0 disables.
    pub progress_every: u64,
}

/// How a run ended.
#[derive(Debug)]
pub enum Outcome {
    /// The whole tree was walked; `valid` is the reported count, with the
    /// rotational multiplier already applied.
    Exhausted { valid: u64 },
    /// The cancellation flag was seen; the checkpoint resumes the run.
    Suspended(Box<Checkpoint>),
}

/// Control flow inside the recursion.
enum Flow {
    Continue,
    Suspend,
}

/// The depth-first enumerator over one set of tables.
///
/// Owns the partial assignment exclusively; the invariant is that at depth
/// `d`, exactly the positions at depths `0..d` are placed and every placed
/// prefix passed the feasibility check when it was placed.
pub struct Enumerator<'a> {
    tables: &'a Tables,
    options: SearchOptions,
    facings: Vec<Option<Facing>>,
    statistics: Statistics,
    reporter: Option<Reporter>,
    cancel: Option<Arc<AtomicBool>>,
}

impl<'a> Enumerator<'a> {
    /// # Panics
    ///
    /// Panics if `rotational_cut` is requested on a board/order pair that
    /// does not support it.
    pub fn new(tables: &'a Tables, options: SearchOptions) -> Self {
        assert!(
            !options.rotational_cut || tables.supports_rotational_cut(),
            "rotational cut needs a center-first diamond board"
        );
        let reporter = (options.progress_every > 0).then(|| Reporter::new(options.progress_every));
        let facings = vec![None; tables.len()];
        Self {
            tables,
            options,
            facings,
            statistics: Statistics::new(),
            reporter,
            cancel: None,
        }
    }

    /// Install the flag that suspends the run when set.
    pub fn set_cancel_flag(&mut self, flag: Arc<AtomicBool>) {
        self.cancel = Some(flag);
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Factor the reported count carries relative to the raw leaf count.
    pub fn multiplier(&self) -> u64 {
        if self.options.rotational_cut {
            4
        } else {
            1
        }
    }

    /// Walk the whole tree from the root.
    pub fn run(&mut self) -> Outcome {
        self.start(None)
    }

    /// Continue a suspended run.
    ///
    /// The checkpoint must come from a run over the same board size with the
    /// same rule options, and its prefix must be feasible under those rules;
    /// anything else is rejected as a mismatch. Valid-layout and placement
    /// counters are restored; rejection counters restart from zero.
    pub fn resume(&mut self, checkpoint: &Checkpoint) -> Result<Outcome, CheckpointError> {
        if checkpoint.positions != self.tables.len() {
            return Err(CheckpointError::Mismatch(format!(
                "board has {} positions, checkpoint has {}",
                self.tables.len(),
                checkpoint.positions
            )));
        }
        if checkpoint.exclude_loops != self.options.exclude_loops {
            return Err(CheckpointError::Mismatch(
                "loop rule setting differs".into(),
            ));
        }
        if checkpoint.rotational_cut != self.options.rotational_cut {
            return Err(CheckpointError::Mismatch(
                "rotational cut setting differs".into(),
            ));
        }
        if checkpoint.prefix.len() > checkpoint.positions {
            return Err(CheckpointError::Mismatch(
                "prefix longer than the board".into(),
            ));
        }
        self.validate_prefix(&checkpoint.prefix)?;
        let mut prefix = checkpoint.prefix.as_slice();
        if self.options.rotational_cut {
            match prefix.split_first() {
                Some((&Facing::North, rest)) => prefix = rest,
                _ => {
                    return Err(CheckpointError::Mismatch(
                        "rotational cut requires a north-facing center".into(),
                    ))
                }
            }
        }
        self.statistics.add(Counters::ValidLayouts, checkpoint.valid);
        self.statistics.add(Counters::Placements, checkpoint.placements);
        Ok(self.start((!prefix.is_empty()).then_some(prefix)))
    }

    /// Count the leaves under one placed prefix, ignoring the cancellation
    /// flag and the rotational multiplier. Returns 0 when the prefix itself
    /// is infeasible. This is the seam the parallel driver splits on.
    pub fn count_with_prefix(&mut self, prefix: &[Facing]) -> u64 {
        assert!(prefix.len() <= self.tables.len(), "prefix longer than board");
        self.facings.fill(None);
        for (depth, &facing) in prefix.iter().enumerate() {
            self.statistics.increment(Counters::Placements);
            if let Err(rejection) = check_placement(
                self.tables,
                &self.facings,
                depth,
                facing,
                self.options.exclude_loops,
            ) {
                self.statistics.record_rejection(rejection);
                return 0;
            }
            let id = self.tables.position_at(depth);
            self.facings[id.as_usize()] = Some(facing);
        }
        let before = self.statistics.get(Counters::ValidLayouts);
        let cancel = self.cancel.take();
        // Without a flag installed the walk cannot suspend.
        let _ = self.place(prefix.len(), None);
        self.cancel = cancel;
        self.statistics.get(Counters::ValidLayouts) - before
    }

    /// Re-check every prefix entry before fast-forwarding. The engine only
    /// captures feasible prefixes, but checkpoints arrive from disk and a
    /// hand-edited or corrupted prefix would otherwise be replayed unchecked
    /// and silently poison the count.
    fn validate_prefix(&mut self, prefix: &[Facing]) -> Result<(), CheckpointError> {
        self.facings.fill(None);
        for (depth, &facing) in prefix.iter().enumerate() {
            if check_placement(
                self.tables,
                &self.facings,
                depth,
                facing,
                self.options.exclude_loops,
            )
            .is_err()
            {
                return Err(CheckpointError::Mismatch(format!(
                    "prefix entry {:?} at depth {} is infeasible",
                    facing, depth
                )));
            }
            let id = self.tables.position_at(depth);
            self.facings[id.as_usize()] = Some(facing);
        }
        Ok(())
    }

    fn start(&mut self, resume: Option<&[Facing]>) -> Outcome {
        self.facings.fill(None);
        let flow = if self.options.rotational_cut {
            let center = self.tables.position_at(0);
            self.facings[center.as_usize()] = Some(Facing::North);
            self.place(1, resume)
        } else {
            self.place(0, resume)
        };
        match flow {
            Flow::Suspend => Outcome::Suspended(Box::new(self.capture())),
            Flow::Continue => Outcome::Exhausted {
                valid: self.statistics.get(Counters::ValidLayouts) * self.multiplier(),
            },
        }
    }

    /// Fill the position at `depth` and recurse.
    ///
    /// When `resume` is set, the run is fast-forwarding: candidates before
    /// the resumed one were finished before the suspension and are skipped,
    /// the resumed one is re-placed without recounting (it was counted when
    /// first placed, and re-validated by `validate_prefix`), and candidates
    /// after it get a fresh walk.
    fn place(&mut self, depth: usize, resume: Option<&[Facing]>) -> Flow {
        if depth == self.tables.len() {
            self.record_valid();
            return Flow::Continue;
        }
        if depth <= CANCEL_POLL_DEPTH && self.cancelled() {
            return Flow::Suspend;
        }
        let id = self.tables.position_at(depth);
        let resume_first = resume.map(|prefix| prefix[0]);
        for candidate in Facing::iter() {
            if resume_first.is_some_and(|first| candidate < first) {
                continue;
            }
            let resumed = resume_first == Some(candidate);
            if !resumed {
                self.statistics.increment(Counters::Placements);
                if let Err(rejection) = check_placement(
                    self.tables,
                    &self.facings,
                    depth,
                    candidate,
                    self.options.exclude_loops,
                ) {
                    self.statistics.record_rejection(rejection);
                    continue;
                }
            }
            self.facings[id.as_usize()] = Some(candidate);
            let deeper = if resumed {
                resume.and_then(|prefix| {
                    let rest = &prefix[1..];
                    (!rest.is_empty()).then_some(rest)
                })
            } else {
                None
            };
            if let Flow::Suspend = self.place(depth + 1, deeper) {
                // Leave the prefix placed so capture() can read it off.
                return Flow::Suspend;
            }
            self.facings[id.as_usize()] = None;
        }
        Flow::Continue
    }

    fn record_valid(&mut self) {
        self.statistics.increment(Counters::ValidLayouts);
        if let Some(reporter) = &mut self.reporter {
            reporter.tick(&self.statistics);
        }
    }

    fn cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    fn capture(&self) -> Checkpoint {
        let prefix: Vec<Facing> = self
            .tables
            .order()
            .iter()
            .map_while(|id| self.facings[id.as_usize()])
            .collect();
        Checkpoint {
            prefix,
            valid: self.statistics.get(Counters::ValidLayouts),
            placements: self.statistics.get(Counters::Placements),
            positions: self.tables.len(),
            exclude_loops: self.options.exclude_loops,
            rotational_cut: self.options.rotational_cut,
        }
    }
}
