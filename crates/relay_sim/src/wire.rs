//! Wire storage: binary signal carriers with change-triggered dependents.
//!
//! A wire is logically shared by every gate connected to it, so the
//! engine stores wire state in an arena owned by the [`Circuit`] and hands
//! out copyable [`WireId`] handles. Dependents are closures re-run on
//! every accepted signal change; they are stored behind `Rc` because a
//! single dependent fires once per change for the life of the circuit.

use std::rc::Rc;

use relay_common::{ArenaId, Bit};

use crate::error::SimError;
use crate::kernel::Circuit;

/// Opaque handle to a wire in a [`Circuit`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct WireId(u32);

impl ArenaId for WireId {
    fn from_raw(index: u32) -> Self {
        Self(index)
    }

    fn as_raw(self) -> u32 {
        self.0
    }
}

/// A unit of deferred computation.
///
/// Actions appear in two roles: as a wire dependent, fired synchronously
/// whenever the wire's signal changes, and as a scheduled entry in the
/// agenda, fired when its time arrives. Both receive the circuit so they
/// can read signals and schedule further work.
pub type Action = Rc<dyn Fn(&mut Circuit) -> Result<(), SimError>>;

/// The stored state of a single wire.
pub struct WireState {
    /// The current binary signal. Starts at zero.
    pub signal: Bit,
    /// Optional probe name, reported alongside recorded changes.
    pub name: Option<String>,
    /// Dependent actions in registration order. Never removed.
    pub dependents: Vec<Action>,
}

impl WireState {
    /// Creates a fresh wire state: signal zero, unnamed, no dependents.
    pub fn new() -> Self {
        Self {
            signal: Bit::Zero,
            name: None,
            dependents: Vec::new(),
        }
    }
}

impl Default for WireState {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for WireState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WireState")
            .field("signal", &self.signal)
            .field("name", &self.name)
            .field("dependents", &self.dependents.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_wire_state() {
        let state = WireState::new();
        assert_eq!(state.signal, Bit::Zero);
        assert!(state.name.is_none());
        assert!(state.dependents.is_empty());
    }

    #[test]
    fn wire_id_raw_roundtrip() {
        let id = WireId::from_raw(17);
        assert_eq!(id.as_raw(), 17);
    }

    #[test]
    fn debug_shows_dependent_count() {
        let mut state = WireState::new();
        state.dependents.push(Rc::new(|_| Ok(())));
        let rendered = format!("{state:?}");
        assert!(rendered.contains("dependents: 1"));
    }
}
