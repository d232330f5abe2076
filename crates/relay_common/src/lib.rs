//! Shared foundational types for the relay logic simulator.
//!
//! This crate provides the two-state [`Bit`] logic value with
//! truth-table-based operators, and the generic [`Arena`] used for dense,
//! ID-indexed storage of simulation entities.

#![warn(missing_docs)]

pub mod arena;
pub mod bit;

pub use arena::{Arena, ArenaId};
pub use bit::{Bit, InvalidSignal};
