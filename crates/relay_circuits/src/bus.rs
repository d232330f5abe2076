//! Buses: ordered groups of wires marshalled to and from integers.

use relay_common::Bit;
use relay_sim::{Circuit, WireId};

use crate::error::CircuitError;

/// An ordered, LSB-first group of wires treated as an unsigned integer.
#[derive(Clone, Debug)]
pub struct Bus {
    wires: Vec<WireId>,
}

impl Bus {
    /// Allocates `width` fresh wires in the circuit.
    pub fn new(circuit: &mut Circuit, width: usize) -> Self {
        let wires = (0..width).map(|_| circuit.make_wire()).collect();
        Self { wires }
    }

    /// Wraps an existing LSB-first wire group.
    pub fn from_wires(wires: Vec<WireId>) -> Self {
        Self { wires }
    }

    /// Returns the bus width in bits.
    pub fn width(&self) -> usize {
        self.wires.len()
    }

    /// Returns the wire carrying bit `index` (0 = LSB).
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn wire(&self, index: usize) -> WireId {
        self.wires[index]
    }

    /// Returns all wires, LSB first.
    pub fn wires(&self) -> &[WireId] {
        &self.wires
    }

    /// Names every wire `<prefix><bit index>` for change recording.
    pub fn probe(&self, circuit: &mut Circuit, prefix: &str) {
        for (i, &wire) in self.wires.iter().enumerate() {
            circuit.probe(wire, format!("{prefix}{i}"));
        }
    }

    /// Drives the bus to `value`, bit by bit through `set_signal`.
    ///
    /// Unchanged bits are no-ops, so re-driving a bus only disturbs the
    /// fan-out of bits that actually flipped.
    pub fn set_u64(&self, circuit: &mut Circuit, value: u64) -> Result<(), CircuitError> {
        let width = self.width();
        if width < 64 && value >> width != 0 {
            return Err(CircuitError::ValueOutOfRange { value, width });
        }
        for (i, &wire) in self.wires.iter().enumerate() {
            let bit = Bit::from_bool(value >> i & 1 == 1);
            circuit.set_signal(wire, bit)?;
        }
        Ok(())
    }

    /// Samples the bus as an unsigned integer.
    pub fn read_u64(&self, circuit: &Circuit) -> u64 {
        self.wires
            .iter()
            .enumerate()
            .map(|(i, &wire)| circuit.get_signal(wire).as_u64() << i)
            .sum()
    }
}
