// See LICENSE for the program's license.

//! Statistics
//!
//! Statistics are owned by the enumerator and incremented as it counts
//! layouts and rejects candidates. Parallel workers each keep their own and
//! merge at the end.

use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

use super::feasibility::Rejection;

#[derive(Debug, EnumCountMacro, Copy, Clone)]
#[repr(u8)]
pub enum Counters {
    /// Complete feasible layouts found.
    ValidLayouts,
    /// Candidate placements tried, feasible or not.
    Placements,
}

const COUNT: usize = Counters::COUNT + Rejection::COUNT;

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    stats: [u64; COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Add `amount` to the specified counter, for restoring from a
    /// checkpoint.
    pub(crate) fn add(&mut self, counter: Counters, amount: u64) {
        self.stats[counter as usize] += amount;
    }

    /// Count one rejected candidate, attributed to its reason.
    pub(crate) fn record_rejection(&mut self, rejection: Rejection) {
        self.stats[Counters::COUNT + rejection as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// Get the number of candidates rejected for the given reason.
    pub fn rejections(&self, rejection: Rejection) -> u64 {
        self.stats[Counters::COUNT + rejection as usize]
    }

    /// Fold another run's counters into this one.
    pub fn merge(&mut self, other: &Statistics) {
        for (mine, theirs) in self.stats.iter_mut().zip(other.stats.iter()) {
            *mine += theirs;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero() {
        let stats = Statistics::new();
        assert_eq!(stats.get(Counters::ValidLayouts), 0);
        assert_eq!(stats.get(Counters::Placements), 0);
        assert_eq!(stats.rejections(Rejection::Overlap), 0);
        assert_eq!(stats.rejections(Rejection::Loop), 0);
    }

    #[test]
    fn test_rejections_do_not_alias_counters() {
        let mut stats = Statistics::new();
        stats.increment(Counters::ValidLayouts);
        stats.record_rejection(Rejection::Overlap);
        stats.record_rejection(Rejection::Loop);
        stats.record_rejection(Rejection::Loop);
        assert_eq!(stats.get(Counters::ValidLayouts), 1);
        assert_eq!(stats.get(Counters::Placements), 0);
        assert_eq!(stats.rejections(Rejection::Overlap), 1);
        assert_eq!(stats.rejections(Rejection::Loop), 2);
    }

    #[test]
    fn test_merge_sums_counterwise() {
        let mut a = Statistics::new();
        a.add(Counters::Placements, 10);
        a.record_rejection(Rejection::Overlap);
        let mut b = Statistics::new();
        b.add(Counters::Placements, 5);
        b.increment(Counters::ValidLayouts);
        a.merge(&b);
        assert_eq!(a.get(Counters::Placements), 15);
        assert_eq!(a.get(Counters::ValidLayouts), 1);
        assert_eq!(a.rejections(Rejection::Overlap), 1);
    }
}
