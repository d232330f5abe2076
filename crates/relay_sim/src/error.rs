//! Error types for the discrete-event simulation engine.
//!
//! All conditions here are contract violations in the simulated circuit or
//! the driver logic, not transient faults. There is no retry policy; every
//! error propagates immediately to the caller that misused the API.

use std::io;

use relay_common::InvalidSignal;

use crate::time::SimTime;

/// Errors that can occur during circuit construction or simulation.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    /// A value outside {0, 1} was presented as a signal.
    #[error(transparent)]
    InvalidSignal(#[from] InvalidSignal),

    /// Attempted to pop an action from an empty agenda.
    #[error("agenda is empty")]
    EmptyAgenda,

    /// A time segment in the agenda had an empty action queue.
    ///
    /// Never observable through the public API as long as agenda
    /// invariants hold; a segment is removed the moment its queue drains.
    #[error("empty action queue in segment at {time}")]
    EmptyQueue {
        /// The time of the offending segment.
        time: SimTime,
    },

    /// Attempted to schedule an action before the agenda's current time.
    #[error("cannot schedule at {time}: current time is {current}")]
    ScheduleInPast {
        /// The requested time.
        time: SimTime,
        /// The agenda's current time.
        current: SimTime,
    },

    /// A gate was configured with a delay of zero.
    ///
    /// All gates must impose a delay of at least one tick; this is what
    /// guarantees that propagation terminates.
    #[error("{gate} gate delay must be at least 1 tick")]
    ZeroDelay {
        /// The gate kind whose delay was zero.
        gate: &'static str,
    },

    /// The propagation watchdog tripped, indicating a zero-delay cycle.
    #[error("action limit exceeded: executed {executed} actions (max {limit})")]
    ActionLimit {
        /// The number of actions executed in this propagation.
        executed: u64,
        /// The configured limit.
        limit: u64,
    },

    /// An I/O error occurred while recording signal changes.
    #[error("trace I/O error: {0}")]
    TraceIo(#[from] io::Error),
}
