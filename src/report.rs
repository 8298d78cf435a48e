// See LICENSE for the program's license.

//! Progress lines and the end-of-run summary.
//!
//! Progress goes to stderr so that stdout carries only the final count.

use std::io;
use std::path::Path;
use std::time::Instant;

use crate::search::{Counters, Rejection, Statistics};

/// Emits a progress line every `every` valid layouts.
#[derive(Debug)]
pub struct Reporter {
    start: Instant,
    every: u64,
}

impl Reporter {
    /// # Panics
    ///
    /// Panics if `every` is zero; a zero cadence means no reporter at all.
    pub fn new(every: u64) -> Self {
        assert!(every > 0, "progress cadence must be positive");
        Self {
            start: Instant::now(),
            every,
        }
    }

    pub(crate) fn tick(&mut self, statistics: &Statistics) {
        let valid = statistics.get(Counters::ValidLayouts);
        if valid % self.every == 0 {
            eprintln!(
                "[search] {:.1}s elapsed, {} placements tried, {} valid layouts",
                self.start.elapsed().as_secs_f64(),
                statistics.get(Counters::Placements),
                valid,
            );
        }
    }
}

/// The final figures of a run, renderable for the terminal or a results
/// file.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub valid: u64,
    pub placements: u64,
    pub overlap_rejections: u64,
    pub loop_rejections: u64,
    pub exclude_loops: bool,
    pub rotational_cut: bool,
    pub elapsed_secs: f64,
    pub completed: bool,
}

impl RunSummary {
    pub fn from_statistics(
        statistics: &Statistics,
        valid: u64,
        exclude_loops: bool,
        rotational_cut: bool,
        elapsed_secs: f64,
        completed: bool,
    ) -> Self {
        Self {
            valid,
            placements: statistics.get(Counters::Placements),
            overlap_rejections: statistics.rejections(Rejection::Overlap),
            loop_rejections: statistics.rejections(Rejection::Loop),
            exclude_loops,
            rotational_cut,
            elapsed_secs,
            completed,
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("validBoards = {}\n", self.valid));
        out.push_str(&format!("placements tried = {}\n", self.placements));
        out.push_str(&format!(
            "rejected for overlap = {}\n",
            self.overlap_rejections
        ));
        out.push_str(&format!("rejected for loops = {}\n", self.loop_rejections));
        out.push_str(&format!("loop rule = {}\n", self.exclude_loops));
        out.push_str(&format!("rotational cut = {}\n", self.rotational_cut));
        out.push_str(&format!("elapsed seconds = {:.1}\n", self.elapsed_secs));
        out.push_str(&format!(
            "status = {}\n",
            if self.completed { "complete" } else { "suspended" }
        ));
        out
    }

    /// Write the rendered summary to a results file.
    pub fn write(&self, path: &Path) -> io::Result<()> {
        std::fs::write(path, self.render())
    }
}
