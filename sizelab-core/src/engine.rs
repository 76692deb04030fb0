//! Sizing engine — risk budget and stop distance in, contract counts out.
//!
//! `compute` is a total function: any pair of input strings produces a
//! result, never an error. Unparsable text behaves as zero so an
//! in-progress edit (an emptied field, a lone ".") degrades to the
//! degenerate result instead of breaking the caller's render loop.

use serde::Serialize;

use crate::instrument::InstrumentSpec;

/// Everything derived from one (instrument, stop, risk) snapshot.
///
/// Recomputed from scratch on every input change; none of the fields are
/// ever patched in place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SizingResult {
    /// Exact, non-integer contract count implied by risk ÷ per-contract risk.
    pub raw_contracts: f64,
    /// `raw_contracts` rounded down to whole contracts. Whole-valued.
    pub floored_contracts: f64,
    /// Dollar risk actually consumed at the floored count.
    pub floored_risk: f64,
    /// `raw_contracts` rounded up to whole contracts. Whole-valued.
    pub ceiled_contracts: f64,
    /// Dollar risk actually consumed at the ceiled count.
    pub ceiled_risk: f64,
    /// Dollar risk of exactly one contract at the given stop distance.
    /// Stays meaningful even when the rest of the result is degenerate.
    pub risk_per_contract: f64,
}

/// Permissive numeric-field parse.
///
/// Whitespace is trimmed; anything `str::parse::<f64>` rejects counts as
/// zero, and a parsed NaN is folded to zero as well so downstream `<= 0`
/// comparisons see the same value an empty field would produce.
pub fn parse_amount(text: &str) -> f64 {
    let value: f64 = text.trim().parse().unwrap_or(0.0);
    if value.is_nan() {
        0.0
    } else {
        value
    }
}

/// Size a position from raw field text.
///
/// # Formula
/// ```text
/// risk_per_contract = stop_points * ticks_per_point * tick_value
/// raw_contracts     = risk_budget / risk_per_contract
/// ```
///
/// # Example
/// NQ ($5.00 per tick, 4 ticks per point), stop 10 points, budget $100:
/// one contract risks $200, so the exact count is 0.5 — zero contracts
/// rounding down, one contract ($200) rounding up.
///
/// Zero or negative stop/risk yields all-zero counts; only
/// `risk_per_contract` survives, so the caller can still show what the
/// smallest possible position would risk. Non-finite artifacts in the five
/// derived fields are folded to zero before returning.
pub fn compute(spec: &InstrumentSpec, stop_loss_text: &str, risk_budget_text: &str) -> SizingResult {
    let stop_points = parse_amount(stop_loss_text);
    let risk_budget = parse_amount(risk_budget_text);

    let risk_per_contract = if stop_points > 0.0 {
        stop_points * f64::from(spec.ticks_per_point) * spec.tick_value
    } else {
        0.0
    };

    // No recommendation for empty, zero, or negative inputs.
    if stop_points <= 0.0 || risk_budget <= 0.0 {
        return SizingResult {
            raw_contracts: 0.0,
            floored_contracts: 0.0,
            floored_risk: 0.0,
            ceiled_contracts: 0.0,
            ceiled_risk: 0.0,
            risk_per_contract,
        };
    }

    let raw = risk_budget / risk_per_contract;
    let floored = raw.floor();
    let ceiled = raw.ceil();

    SizingResult {
        raw_contracts: finite_or_zero(raw),
        floored_contracts: finite_or_zero(floored),
        floored_risk: finite_or_zero(floored * risk_per_contract),
        ceiled_contracts: finite_or_zero(ceiled),
        ceiled_risk: finite_or_zero(ceiled * risk_per_contract),
        risk_per_contract,
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}
