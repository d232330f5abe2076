//! Shift-and-add array multiplier.
//!
//! Each bit of the second operand gates a shifted copy of the first
//! operand (the partial product), and a ripple-carry row folds that copy
//! into a running accumulator. The product bus has `a.width() + b.width()`
//! bits, so no partial sum can overflow and every row's carry-out stays
//! low.

use relay_sim::{Circuit, WireId};

use crate::adder::ripple_carry_row;
use crate::bus::Bus;
use crate::error::CircuitError;

/// Wires up an unsigned array multiplier and returns the product bus.
///
/// Accepts any operand widths; the canonical configuration is two 8-bit
/// buses producing a 16-bit product.
pub fn multiplier(circuit: &mut Circuit, a: &Bus, b: &Bus) -> Result<Bus, CircuitError> {
    if a.width() == 0 || b.width() == 0 {
        return Err(CircuitError::EmptyRow);
    }
    let out_width = a.width() + b.width();

    // The accumulator starts as undriven wires, which hold zero.
    let mut acc: Vec<WireId> = (0..out_width).map(|_| circuit.make_wire()).collect();

    for i in 0..b.width() {
        // Addend row: a shifted left by i and masked by b's bit i.
        let mut addend = Vec::with_capacity(out_width);
        for pos in 0..out_width {
            if pos >= i && pos - i < a.width() {
                let pp = circuit.make_wire();
                circuit.and_gate(a.wire(pos - i), b.wire(i), pp)?;
                addend.push(pp);
            } else {
                // outside the shifted window: constant zero
                addend.push(circuit.make_wire());
            }
        }

        let sum: Vec<WireId> = (0..out_width).map(|_| circuit.make_wire()).collect();
        let c_in = circuit.make_wire();
        let c_out = circuit.make_wire();
        ripple_carry_row(circuit, &acc, &addend, c_in, &sum, c_out)?;
        acc = sum;
    }

    Ok(Bus::from_wires(acc))
}
