//! Adder networks built from the primitive gates.
//!
//! The half-adder uses the classic four-gate construction (OR, AND, NOT,
//! AND); the full-adder chains two half-adders through an OR; the
//! ripple-carry row chains full-adders across bit positions, feeding each
//! stage's carry into the next.

use relay_sim::{Circuit, WireId};

use crate::error::CircuitError;

/// Wires up a half-adder: `sum = a XOR b`, `carry = a AND b`.
pub fn half_adder(
    circuit: &mut Circuit,
    a: WireId,
    b: WireId,
    sum: WireId,
    carry: WireId,
) -> Result<(), CircuitError> {
    let d = circuit.make_wire();
    let e = circuit.make_wire();
    circuit.or_gate(a, b, d)?;
    circuit.and_gate(a, b, carry)?;
    circuit.inverter(carry, e)?;
    circuit.and_gate(d, e, sum)?;
    Ok(())
}

/// Wires up a full-adder: `(c_out, sum)` is the 2-bit sum `a + b + c_in`.
pub fn full_adder(
    circuit: &mut Circuit,
    a: WireId,
    b: WireId,
    c_in: WireId,
    sum: WireId,
    c_out: WireId,
) -> Result<(), CircuitError> {
    let s = circuit.make_wire();
    let c1 = circuit.make_wire();
    let c2 = circuit.make_wire();
    half_adder(circuit, b, c_in, s, c1)?;
    half_adder(circuit, a, s, sum, c2)?;
    circuit.or_gate(c1, c2, c_out)?;
    Ok(())
}

/// Wires up a ripple-carry adder row over LSB-first bit groups.
///
/// `sum_bits[i]` receives `a_bits[i] + b_bits[i]` plus the carry rippling
/// up from position `i - 1`; `c_in` seeds position 0 and `c_out` receives
/// the final carry. All three groups must have the same nonzero width.
pub fn ripple_carry_row(
    circuit: &mut Circuit,
    a_bits: &[WireId],
    b_bits: &[WireId],
    c_in: WireId,
    sum_bits: &[WireId],
    c_out: WireId,
) -> Result<(), CircuitError> {
    let width = a_bits.len();
    if width == 0 {
        return Err(CircuitError::EmptyRow);
    }
    if b_bits.len() != width {
        return Err(CircuitError::WidthMismatch {
            expected: width,
            actual: b_bits.len(),
        });
    }
    if sum_bits.len() != width {
        return Err(CircuitError::WidthMismatch {
            expected: width,
            actual: sum_bits.len(),
        });
    }

    let mut carry = c_in;
    for i in 0..width {
        let next_carry = if i == width - 1 {
            c_out
        } else {
            circuit.make_wire()
        };
        full_adder(circuit, a_bits[i], b_bits[i], carry, sum_bits[i], next_carry)?;
        carry = next_carry;
    }
    Ok(())
}
