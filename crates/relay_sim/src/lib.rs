//! Discrete-event simulation engine for combinational digital logic.
//!
//! The engine models circuits as wires carrying binary signals and gates
//! with fixed propagation delays. Two dispatch moments exist and are kept
//! apart: setting a wire's signal runs its registered dependents
//! synchronously in the same call stack, while a gate's recomputed output
//! is never written directly — it is scheduled into a time-ordered agenda
//! and applied when the propagation driver reaches that instant. The
//! result is a single deterministic timeline with strict (time, insertion)
//! ordering.
//!
//! # Usage
//!
//! ```
//! use relay_common::Bit;
//! use relay_sim::{Circuit, GateDelays};
//!
//! let mut circuit = Circuit::new(GateDelays::default());
//! let a = circuit.make_wire();
//! let b = circuit.make_wire();
//! let out = circuit.make_wire();
//! circuit.and_gate(a, b, out)?;
//! circuit.propagate()?; // settle initial outputs
//!
//! circuit.set_signal(a, Bit::One)?;
//! circuit.set_signal(b, Bit::One)?;
//! circuit.propagate()?;
//! assert_eq!(circuit.get_signal(out), Bit::One);
//! # Ok::<(), relay_sim::SimError>(())
//! ```
//!
//! # Modules
//!
//! - `error` — contract-violation error types
//! - `time` — simulated time in ticks
//! - `agenda` — the time-ordered pending-action schedule
//! - `wire` — wire state and the action type
//! - `kernel` — the circuit: gate constructors and the propagation driver
//! - `trace` — change recording for observability

#![warn(missing_docs)]

pub mod agenda;
pub mod error;
pub mod kernel;
pub mod time;
pub mod trace;
pub mod wire;

pub use agenda::Agenda;
pub use error::SimError;
pub use kernel::{Circuit, GateDelays, PropagateSummary, StepResult, DEFAULT_MAX_ACTIONS};
pub use time::SimTime;
pub use trace::{ChangeEvent, ChangeRecorder, VecRecorder, WriterRecorder};
pub use wire::{Action, WireId, WireState};
