//! The agenda: a time-ordered schedule of pending actions.
//!
//! The agenda keeps one FIFO segment per distinct time value, sorted
//! strictly ascending, plus a current-time cursor. Popping the next action
//! advances the cursor to the earliest remaining segment; within a segment
//! actions come out in insertion order. This gives the engine its ordering
//! guarantee: earlier-time actions always run first, and same-time actions
//! run first-scheduled-first.
//!
//! The container is generic over the queued item so the ordering machinery
//! can be tested without involving the simulation kernel.

use std::collections::{BTreeMap, VecDeque};

use crate::error::SimError;
use crate::time::SimTime;

/// A time-ordered collection of pending actions with a current-time cursor.
///
/// Invariants: segment times are unique and strictly ascending (the map
/// enforces this), every segment's queue is non-empty (a drained segment
/// is removed immediately), and the cursor never moves backwards.
#[derive(Debug, Default)]
pub struct Agenda<T> {
    current_time: SimTime,
    segments: BTreeMap<SimTime, VecDeque<T>>,
}

impl<T> Agenda<T> {
    /// Creates an empty agenda with the cursor at time zero.
    pub fn new() -> Self {
        Self {
            current_time: SimTime::ZERO,
            segments: BTreeMap::new(),
        }
    }

    /// Returns the agenda's current time.
    pub fn current_time(&self) -> SimTime {
        self.current_time
    }

    /// Returns `true` if no actions are pending.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the total number of pending actions across all segments.
    pub fn len(&self) -> usize {
        self.segments.values().map(VecDeque::len).sum()
    }

    /// Schedules an item at an absolute time.
    ///
    /// Appends to the segment at `time`, creating the segment if absent.
    /// Scheduling before the current time is a contract violation.
    pub fn schedule(&mut self, time: SimTime, item: T) -> Result<(), SimError> {
        if time < self.current_time {
            return Err(SimError::ScheduleInPast {
                time,
                current: self.current_time,
            });
        }
        self.segments.entry(time).or_default().push_back(item);
        Ok(())
    }

    /// Schedules an item `delay` ticks after the current time.
    ///
    /// The delay is measured from the cursor at call time, which is how
    /// gate outputs acquire their propagation delay.
    pub fn schedule_after(&mut self, delay: u64, item: T) {
        let time = self.current_time.after(delay);
        // time >= current_time by construction
        self.segments.entry(time).or_default().push_back(item);
    }

    /// Removes and returns the next action in (time, insertion) order.
    ///
    /// Advances the current time to the earliest remaining segment's time.
    /// A segment whose queue drains is removed entirely.
    pub fn pop_next(&mut self) -> Result<T, SimError> {
        let mut entry = match self.segments.first_entry() {
            Some(entry) => entry,
            None => return Err(SimError::EmptyAgenda),
        };
        let time = *entry.key();
        let item = match entry.get_mut().pop_front() {
            Some(item) => item,
            None => return Err(SimError::EmptyQueue { time }),
        };
        if entry.get().is_empty() {
            entry.remove();
        }
        self.current_time = time;
        Ok(item)
    }
}
