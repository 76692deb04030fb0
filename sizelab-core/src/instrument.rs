//! Instrument registry — fixed contract economics for the supported futures.
//!
//! The registry is a const table built at compile time and never mutated.
//! Every entry pairs a CME contract code with the two numbers the sizing
//! math needs: the dollar value of one minimum price increment and how many
//! increments make up a whole point.

use serde::Serialize;
use thiserror::Error;

/// Contract economics for one futures instrument.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct InstrumentSpec {
    /// Exchange code, e.g. "NQ".
    pub code: &'static str,
    /// Human-readable contract name.
    pub name: &'static str,
    /// Dollar value of one minimum price increment.
    pub tick_value: f64,
    /// Minimum price increments per whole point.
    pub ticks_per_point: u32,
}

impl InstrumentSpec {
    /// Dollar risk of holding one contract through one full point of
    /// adverse movement.
    pub fn point_value(&self) -> f64 {
        self.tick_value * f64::from(self.ticks_per_point)
    }
}

/// The supported instruments, in display order. The first entry is the
/// default selection.
pub const INSTRUMENTS: &[InstrumentSpec] = &[
    InstrumentSpec { code: "NQ", name: "E-mini Nasdaq-100", tick_value: 5.0, ticks_per_point: 4 },
    InstrumentSpec {
        code: "MNQ",
        name: "Micro E-mini Nasdaq-100",
        tick_value: 0.5,
        ticks_per_point: 4,
    },
    InstrumentSpec { code: "ES", name: "E-mini S&P 500", tick_value: 12.5, ticks_per_point: 4 },
    InstrumentSpec {
        code: "MES",
        name: "Micro E-mini S&P 500",
        tick_value: 1.25,
        ticks_per_point: 4,
    },
    InstrumentSpec { code: "GC", name: "Gold", tick_value: 10.0, ticks_per_point: 10 },
    InstrumentSpec { code: "MGC", name: "Micro Gold", tick_value: 1.0, ticks_per_point: 10 },
];

/// Look up an instrument by its exchange code.
///
/// The set of codes is closed and fixed, so a miss is a caller bug rather
/// than user input to recover from; callers that obtained the code from
/// [`INSTRUMENTS`] can treat the `Ok` as guaranteed.
pub fn lookup(code: &str) -> Result<&'static InstrumentSpec, InstrumentError> {
    INSTRUMENTS
        .iter()
        .find(|spec| spec.code == code)
        .ok_or_else(|| InstrumentError::UnknownCode { code: code.to_string() })
}

#[derive(Debug, Error, PartialEq)]
pub enum InstrumentError {
    #[error("unknown instrument code {code:?}")]
    UnknownCode { code: String },
}
