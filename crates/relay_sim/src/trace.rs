//! Change recording for simulation observability.
//!
//! The [`ChangeRecorder`] trait abstracts over destinations for signal
//! change reports. [`VecRecorder`] collects events in memory for tests and
//! programmatic inspection; [`WriterRecorder`] prints a tabular dump of
//! probed (named) wires, the simulator's equivalent of attaching a logic
//! probe to a node.

use std::io::Write;

use relay_common::Bit;

use crate::error::SimError;
use crate::time::SimTime;
use crate::wire::WireId;

/// Trait for recording signal changes.
///
/// The circuit reports every accepted `set_signal` (no-op writes are
/// deduplicated before they reach the recorder). `name` is present only
/// for wires registered via [`Circuit::probe`](crate::Circuit::probe).
pub trait ChangeRecorder {
    /// Records a single signal change at the given time.
    fn record_change(
        &mut self,
        time: SimTime,
        wire: WireId,
        name: Option<&str>,
        value: Bit,
    ) -> Result<(), SimError>;

    /// Finalizes the output (flush, trailer, etc.).
    fn finalize(&mut self) -> Result<(), SimError>;
}

/// One recorded signal change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChangeEvent {
    /// When the change was applied.
    pub time: SimTime,
    /// Which wire changed.
    pub wire: WireId,
    /// The wire's probe name, if any.
    pub name: Option<String>,
    /// The new value.
    pub value: Bit,
}

/// Recorder that collects every change into a `Vec`.
#[derive(Debug, Default)]
pub struct VecRecorder {
    events: Vec<ChangeEvent>,
}

impl VecRecorder {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded events in order of occurrence.
    pub fn events(&self) -> &[ChangeEvent] {
        &self.events
    }

    /// Consumes the recorder and returns the recorded events.
    pub fn into_events(self) -> Vec<ChangeEvent> {
        self.events
    }
}

impl ChangeRecorder for VecRecorder {
    fn record_change(
        &mut self,
        time: SimTime,
        wire: WireId,
        name: Option<&str>,
        value: Bit,
    ) -> Result<(), SimError> {
        self.events.push(ChangeEvent {
            time,
            wire,
            name: name.map(str::to_owned),
            value,
        });
        Ok(())
    }

    fn finalize(&mut self) -> Result<(), SimError> {
        Ok(())
    }
}

/// Recorder that prints probed wire changes as text lines.
///
/// Unnamed wires are skipped; attaching a probe is what opts a wire into
/// the dump.
pub struct WriterRecorder<W: Write> {
    writer: W,
}

impl<W: Write> WriterRecorder<W> {
    /// Creates a recorder writing to the given output.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ChangeRecorder for WriterRecorder<W> {
    fn record_change(
        &mut self,
        time: SimTime,
        _wire: WireId,
        name: Option<&str>,
        value: Bit,
    ) -> Result<(), SimError> {
        if let Some(name) = name {
            writeln!(self.writer, "[{time}] {name} = {value}")?;
        }
        Ok(())
    }

    fn finalize(&mut self) -> Result<(), SimError> {
        self.writer.flush()?;
        Ok(())
    }
}
