//! SizeLab Core — futures lot sizing from risk budget and stop distance.
//!
//! This crate is the whole calculation surface of SizeLab:
//! - Instrument registry (fixed table of contract economics)
//! - Sizing engine (pure text-in, counts-out computation)
//! - Sizing inputs with the half-risk / full-risk toggle
//!
//! Everything is synchronous and allocation-light; the TUI crate drives it
//! from its event handlers and owns no sizing logic of its own.

pub mod engine;
pub mod inputs;
pub mod instrument;

pub use engine::{compute, parse_amount, SizingResult};
pub use inputs::{RiskMode, SizingInputs};
pub use instrument::{lookup, InstrumentError, InstrumentSpec, INSTRUMENTS};
