//! Composite circuit builders for the relay logic simulator.
//!
//! Everything here is pure composition over the engine's public
//! construction API: adders chain the primitive gates, the multiplier
//! chains adders, and [`Bus`] marshals integers to and from ordered wire
//! groups. No module in this crate adds engine mechanics.

#![warn(missing_docs)]

pub mod adder;
pub mod bus;
pub mod error;
pub mod multiplier;

pub use adder::{full_adder, half_adder, ripple_carry_row};
pub use bus::Bus;
pub use error::CircuitError;
pub use multiplier::multiplier;
