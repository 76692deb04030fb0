//! User-editable sizing inputs and the half-risk toggle.
//!
//! `SizingInputs` keeps the raw field text exactly as the user typed it;
//! parsing happens in the engine on every recompute. Fields are private so
//! the snapshot rule cannot be bypassed: `full_risk` tracks the risk field
//! only while the toggle is in `Full`, and is the sole source for the
//! restore transition.

use crate::engine::{self, SizingResult};
use crate::instrument::{self, InstrumentError, INSTRUMENTS};

/// Which half of the risk toggle is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskMode {
    /// Risk budget is the user's full figure.
    Full,
    /// Risk budget has been halved; the full figure is parked in the snapshot.
    Half,
}

/// The current input snapshot: selected instrument plus raw field text.
#[derive(Debug, Clone, PartialEq)]
pub struct SizingInputs {
    instrument: &'static str,
    stop_loss: String,
    risk_budget: String,
    mode: RiskMode,
    full_risk: String,
}

impl SizingInputs {
    /// Fresh session defaults: first registry instrument, 10-point stop,
    /// $100 budget at full risk.
    pub fn new() -> Self {
        Self {
            instrument: INSTRUMENTS[0].code,
            stop_loss: "10".to_string(),
            risk_budget: "100".to_string(),
            mode: RiskMode::Full,
            full_risk: "100".to_string(),
        }
    }

    pub fn instrument(&self) -> &'static str {
        self.instrument
    }

    pub fn stop_loss(&self) -> &str {
        &self.stop_loss
    }

    pub fn risk_budget(&self) -> &str {
        &self.risk_budget
    }

    pub fn mode(&self) -> RiskMode {
        self.mode
    }

    /// The risk text that a restore would bring back.
    pub fn full_risk_snapshot(&self) -> &str {
        &self.full_risk
    }

    pub fn set_instrument(&mut self, code: &'static str) {
        self.instrument = code;
    }

    pub fn set_stop_loss(&mut self, text: impl Into<String>) {
        self.stop_loss = text.into();
    }

    /// Update the risk field. While at full risk the snapshot follows the
    /// edit, so a later halve captures the latest figure; while halved the
    /// snapshot keeps the pre-halving baseline untouched.
    pub fn set_risk_budget(&mut self, text: impl Into<String>) {
        let text = text.into();
        if self.mode == RiskMode::Full {
            self.full_risk = text.clone();
        }
        self.risk_budget = text;
    }

    /// Full → Half: park the current risk text and replace it with half the
    /// parsed value. Ignored while already halved.
    pub fn halve_risk(&mut self) {
        if self.mode != RiskMode::Full {
            return;
        }
        self.full_risk = self.risk_budget.clone();
        let halved = engine::parse_amount(&self.risk_budget) / 2.0;
        self.risk_budget = format_amount(halved);
        self.mode = RiskMode::Half;
    }

    /// Half → Full: bring back the parked risk text. Ignored while already
    /// at full risk.
    pub fn restore_full_risk(&mut self) {
        if self.mode != RiskMode::Half {
            return;
        }
        self.risk_budget = self.full_risk.clone();
        self.mode = RiskMode::Full;
    }

    /// Resolve the selected instrument and size the position.
    ///
    /// `Err` means the stored code is not in the registry, which callers
    /// that only ever select from [`INSTRUMENTS`] can rule out.
    pub fn compute(&self) -> Result<SizingResult, InstrumentError> {
        let spec = instrument::lookup(self.instrument)?;
        Ok(engine::compute(spec, &self.stop_loss, &self.risk_budget))
    }
}

impl Default for SizingInputs {
    fn default() -> Self {
        Self::new()
    }
}

/// Textual round-trip for the halve transition: shortest `Display` form,
/// so "100" halves to "50" rather than "50.0".
fn format_amount(value: f64) -> String {
    format!("{value}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_session_start() {
        let inputs = SizingInputs::new();
        assert_eq!(inputs.instrument(), "NQ");
        assert_eq!(inputs.stop_loss(), "10");
        assert_eq!(inputs.risk_budget(), "100");
        assert_eq!(inputs.mode(), RiskMode::Full);
        assert_eq!(inputs.full_risk_snapshot(), "100");
    }

    #[test]
    fn halve_then_restore_round_trips() {
        let mut inputs = SizingInputs::new();

        inputs.halve_risk();
        assert_eq!(inputs.mode(), RiskMode::Half);
        assert_eq!(inputs.risk_budget(), "50");
        assert_eq!(inputs.full_risk_snapshot(), "100");

        inputs.restore_full_risk();
        assert_eq!(inputs.mode(), RiskMode::Full);
        assert_eq!(inputs.risk_budget(), "100");
    }

    #[test]
    fn halve_is_noop_while_halved() {
        let mut inputs = SizingInputs::new();
        inputs.halve_risk();
        inputs.halve_risk();
        assert_eq!(inputs.risk_budget(), "50");
        assert_eq!(inputs.full_risk_snapshot(), "100");
    }

    #[test]
    fn restore_is_noop_while_full() {
        let mut inputs = SizingInputs::new();
        inputs.set_risk_budget("250");
        inputs.restore_full_risk();
        assert_eq!(inputs.mode(), RiskMode::Full);
        assert_eq!(inputs.risk_budget(), "250");
        assert_eq!(inputs.full_risk_snapshot(), "250");
    }

    #[test]
    fn full_mode_edits_track_the_snapshot() {
        let mut inputs = SizingInputs::new();
        inputs.set_risk_budget("300");
        assert_eq!(inputs.full_risk_snapshot(), "300");

        inputs.halve_risk();
        assert_eq!(inputs.risk_budget(), "150");
        assert_eq!(inputs.full_risk_snapshot(), "300");
    }

    #[test]
    fn half_mode_edits_leave_the_snapshot_alone() {
        let mut inputs = SizingInputs::new();
        inputs.halve_risk();

        inputs.set_risk_budget("75");
        assert_eq!(inputs.risk_budget(), "75");
        assert_eq!(inputs.full_risk_snapshot(), "100");

        inputs.restore_full_risk();
        assert_eq!(inputs.risk_budget(), "100");
    }

    #[test]
    fn halving_uses_shortest_text_form() {
        let mut inputs = SizingInputs::new();
        inputs.set_risk_budget("0.1");
        inputs.halve_risk();
        assert_eq!(inputs.risk_budget(), "0.05");

        inputs.restore_full_risk();
        inputs.set_risk_budget("101");
        inputs.halve_risk();
        assert_eq!(inputs.risk_budget(), "50.5");
    }

    #[test]
    fn halving_empty_text_parks_it_and_shows_zero() {
        let mut inputs = SizingInputs::new();
        inputs.set_risk_budget("");
        inputs.halve_risk();
        assert_eq!(inputs.risk_budget(), "0");
        assert_eq!(inputs.full_risk_snapshot(), "");

        inputs.restore_full_risk();
        assert_eq!(inputs.risk_budget(), "");
    }

    #[test]
    fn compute_resolves_the_selected_instrument() {
        let mut inputs = SizingInputs::new();
        inputs.set_instrument("ES");
        inputs.set_stop_loss("4");
        inputs.set_risk_budget("500");
        let result = inputs.compute().unwrap();
        // 4 points * 4 ticks * $12.50 = $200 per contract.
        assert_eq!(result.risk_per_contract, 200.0);
        assert_eq!(result.floored_contracts, 2.0);
    }

    #[test]
    fn compute_rejects_codes_outside_the_registry() {
        let mut inputs = SizingInputs::new();
        inputs.set_instrument("ZZ");
        assert!(inputs.compute().is_err());
    }

    #[test]
    fn stop_loss_edits_have_no_toggle_side_effects() {
        let mut inputs = SizingInputs::new();
        inputs.halve_risk();
        inputs.set_stop_loss("25");
        assert_eq!(inputs.mode(), RiskMode::Half);
        assert_eq!(inputs.risk_budget(), "50");
        assert_eq!(inputs.full_risk_snapshot(), "100");
    }
}
