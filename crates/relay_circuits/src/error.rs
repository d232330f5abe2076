//! Error types for circuit assembly.

use relay_sim::SimError;

/// Errors that can occur while assembling composite circuits.
#[derive(Debug, thiserror::Error)]
pub enum CircuitError {
    /// Two wire groups that must have equal widths do not.
    #[error("bus width mismatch: expected {expected} bits, got {actual}")]
    WidthMismatch {
        /// The width required by the other operand.
        expected: usize,
        /// The width actually supplied.
        actual: usize,
    },

    /// A ripple-carry row was requested with no bit positions.
    #[error("ripple-carry row must have at least one bit position")]
    EmptyRow,

    /// A value does not fit in the target bus.
    #[error("value {value} does not fit in {width} bits")]
    ValueOutOfRange {
        /// The value to marshal.
        value: u64,
        /// The bus width in bits.
        width: usize,
    },

    /// An underlying simulation error.
    #[error(transparent)]
    Sim(#[from] SimError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_mismatch_display() {
        let e = CircuitError::WidthMismatch {
            expected: 8,
            actual: 4,
        };
        assert_eq!(e.to_string(), "bus width mismatch: expected 8 bits, got 4");
    }

    #[test]
    fn empty_row_display() {
        assert_eq!(
            CircuitError::EmptyRow.to_string(),
            "ripple-carry row must have at least one bit position"
        );
    }

    #[test]
    fn value_out_of_range_display() {
        let e = CircuitError::ValueOutOfRange {
            value: 256,
            width: 8,
        };
        assert_eq!(e.to_string(), "value 256 does not fit in 8 bits");
    }

    #[test]
    fn sim_error_is_transparent() {
        let e = CircuitError::from(SimError::EmptyAgenda);
        assert_eq!(e.to_string(), "agenda is empty");
    }
}
