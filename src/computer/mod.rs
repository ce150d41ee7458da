//! The computer opponent.
//!
//! `ComputerPolicy` chooses cards from a probabilistic memory of what has
//! been revealed. It never sees face-down symbols and never mutates the
//! round; the session feeds it events and turns its picks into taps.

pub mod memory;
pub mod policy;

pub use memory::CardMemory;
pub use policy::{ComputerPolicy, FirstPick};
