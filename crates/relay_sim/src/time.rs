//! Simulated time as a monotonically non-decreasing tick count.
//!
//! [`SimTime`] is logical time: gate delays are tick offsets, and the
//! agenda advances its cursor to the time of whichever segment it pops
//! next. Nothing here relates to wall-clock time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A point in simulated time, measured in ticks from the start of the run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SimTime(u64);

impl SimTime {
    /// Time zero, where every simulation starts.
    pub const ZERO: SimTime = SimTime(0);

    /// Creates a time point from a raw tick count.
    pub fn from_ticks(ticks: u64) -> Self {
        Self(ticks)
    }

    /// Returns the raw tick count.
    pub fn ticks(self) -> u64 {
        self.0
    }

    /// Returns the time `delay` ticks after this one, saturating at `u64::MAX`.
    pub fn after(self, delay: u64) -> Self {
        Self(self.0.saturating_add(delay))
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} t", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero() {
        assert_eq!(SimTime::ZERO.ticks(), 0);
        assert_eq!(SimTime::default(), SimTime::ZERO);
    }

    #[test]
    fn from_ticks_roundtrip() {
        assert_eq!(SimTime::from_ticks(42).ticks(), 42);
    }

    #[test]
    fn after_adds_delay() {
        let t = SimTime::from_ticks(10);
        assert_eq!(t.after(5), SimTime::from_ticks(15));
        assert_eq!(t.after(0), t);
    }

    #[test]
    fn after_saturates() {
        let t = SimTime::from_ticks(u64::MAX);
        assert_eq!(t.after(1), t);
    }

    #[test]
    fn ordering_is_numeric() {
        assert!(SimTime::from_ticks(1) < SimTime::from_ticks(2));
        assert!(SimTime::from_ticks(100) > SimTime::ZERO);
    }

    #[test]
    fn display() {
        assert_eq!(SimTime::from_ticks(7).to_string(), "7 t");
        assert_eq!(SimTime::ZERO.to_string(), "0 t");
    }

    #[test]
    fn serde_roundtrip() {
        let t = SimTime::from_ticks(12345);
        let json = serde_json::to_string(&t).unwrap();
        let back: SimTime = serde_json::from_str(&json).unwrap();
        assert_eq!(t, back);
    }
}
