//! Application state — single-owner, main-thread only.
//!
//! All TUI state lives here. Everything on screen derives from
//! `SizingInputs`; the cached `SizingResult` is refreshed after every
//! accepted key event.

use sizelab_core::{lookup, InstrumentSpec, RiskMode, SizingInputs, SizingResult, INSTRUMENTS};

/// Which input row has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Instrument,
    StopLoss,
    RiskBudget,
}

impl Field {
    pub fn index(self) -> usize {
        match self {
            Field::Instrument => 0,
            Field::StopLoss => 1,
            Field::RiskBudget => 2,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        match i {
            0 => Some(Field::Instrument),
            1 => Some(Field::StopLoss),
            2 => Some(Field::RiskBudget),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Instrument => "Instrument",
            Field::StopLoss => "Stop Loss (points)",
            Field::RiskBudget => "Risk Budget ($)",
        }
    }

    pub fn next(self) -> Field {
        Field::from_index((self.index() + 1) % 3).unwrap()
    }

    pub fn prev(self) -> Field {
        Field::from_index((self.index() + 2) % 3).unwrap()
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
}

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Help,
}

/// Top-level application state.
pub struct AppState {
    pub inputs: SizingInputs,
    pub result: SizingResult,
    pub focus: Field,
    pub overlay: Overlay,
    pub status_message: Option<(String, StatusLevel)>,
    pub running: bool,
}

impl AppState {
    pub fn new() -> Self {
        let inputs = SizingInputs::new();
        let result = inputs
            .compute()
            .expect("default instrument must be registered");
        Self {
            inputs,
            result,
            focus: Field::Instrument,
            overlay: Overlay::None,
            status_message: None,
            running: true,
        }
    }

    /// Registry entry for the currently selected instrument.
    ///
    /// The selection only ever moves between registry codes, so a miss here
    /// is a programming error.
    pub fn selected_spec(&self) -> &'static InstrumentSpec {
        lookup(self.inputs.instrument()).expect("selected instrument must be registered")
    }

    /// Refresh the cached result from the current inputs.
    pub fn recompute(&mut self) {
        self.result = self
            .inputs
            .compute()
            .expect("selected instrument must be registered");
    }

    /// Step the instrument selection forward (`direction > 0`) or back,
    /// wrapping around the registry.
    pub fn cycle_instrument(&mut self, direction: i32) {
        let len = INSTRUMENTS.len();
        let current = INSTRUMENTS
            .iter()
            .position(|spec| spec.code == self.inputs.instrument())
            .expect("selected instrument must be registered");
        let next = if direction > 0 {
            (current + 1) % len
        } else {
            (current + len - 1) % len
        };
        self.inputs.set_instrument(INSTRUMENTS[next].code);
    }

    /// Append a character to the focused text field.
    pub fn push_char(&mut self, c: char) {
        match self.focus {
            Field::Instrument => {}
            Field::StopLoss => {
                let mut text = self.inputs.stop_loss().to_owned();
                text.push(c);
                self.inputs.set_stop_loss(text);
            }
            Field::RiskBudget => {
                let mut text = self.inputs.risk_budget().to_owned();
                text.push(c);
                self.inputs.set_risk_budget(text);
            }
        }
    }

    /// Delete the last character of the focused text field.
    pub fn pop_char(&mut self) {
        match self.focus {
            Field::Instrument => {}
            Field::StopLoss => {
                let mut text = self.inputs.stop_loss().to_owned();
                text.pop();
                self.inputs.set_stop_loss(text);
            }
            Field::RiskBudget => {
                let mut text = self.inputs.risk_budget().to_owned();
                text.pop();
                self.inputs.set_risk_budget(text);
            }
        }
    }

    /// Empty the focused text field.
    pub fn clear_field(&mut self) {
        match self.focus {
            Field::Instrument => {}
            Field::StopLoss => self.inputs.set_stop_loss(""),
            Field::RiskBudget => self.inputs.set_risk_budget(""),
        }
    }

    /// Park the full budget and drop to half risk. No-op while halved.
    pub fn halve_risk(&mut self) {
        if self.inputs.mode() == RiskMode::Half {
            return;
        }
        self.inputs.halve_risk();
        self.set_status(format!("Half risk: ${}", self.inputs.risk_budget()));
    }

    /// Bring back the parked full budget. No-op while already full.
    pub fn restore_full_risk(&mut self) {
        if self.inputs.mode() == RiskMode::Full {
            return;
        }
        self.inputs.restore_full_risk();
        self.set_status(format!("Full risk restored: ${}", self.inputs.risk_budget()));
    }

    /// Set an info status message.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    /// Set a warning status message.
    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_cycle() {
        assert_eq!(Field::Instrument.next(), Field::StopLoss);
        assert_eq!(Field::RiskBudget.next(), Field::Instrument);
        assert_eq!(Field::Instrument.prev(), Field::RiskBudget);
        assert_eq!(Field::StopLoss.prev(), Field::Instrument);
    }

    #[test]
    fn field_from_index() {
        for i in 0..3 {
            let f = Field::from_index(i).unwrap();
            assert_eq!(f.index(), i);
        }
        assert!(Field::from_index(3).is_none());
    }

    #[test]
    fn startup_result_matches_defaults() {
        let app = AppState::new();
        // NQ, 10 points, $100: half a contract.
        assert_eq!(app.result.risk_per_contract, 200.0);
        assert_eq!(app.result.raw_contracts, 0.5);
        assert_eq!(app.focus, Field::Instrument);
        assert_eq!(app.overlay, Overlay::None);
        assert!(app.running);
    }

    #[test]
    fn cycling_wraps_in_both_directions() {
        let mut app = AppState::new();
        app.cycle_instrument(-1);
        assert_eq!(app.inputs.instrument(), "MGC");
        app.cycle_instrument(1);
        assert_eq!(app.inputs.instrument(), "NQ");
        for _ in 0..INSTRUMENTS.len() {
            app.cycle_instrument(1);
        }
        assert_eq!(app.inputs.instrument(), "NQ");
    }

    #[test]
    fn cycling_changes_the_selected_spec() {
        let mut app = AppState::new();
        assert_eq!(app.selected_spec().code, "NQ");
        app.cycle_instrument(1);
        assert_eq!(app.selected_spec().code, "MNQ");
        app.recompute();
        assert_eq!(app.result.risk_per_contract, 20.0);
    }

    #[test]
    fn editing_targets_the_focused_field() {
        let mut app = AppState::new();
        app.focus = Field::StopLoss;
        app.push_char('2');
        assert_eq!(app.inputs.stop_loss(), "102");
        app.pop_char();
        assert_eq!(app.inputs.stop_loss(), "10");

        app.focus = Field::RiskBudget;
        app.clear_field();
        assert_eq!(app.inputs.risk_budget(), "");
        assert_eq!(app.inputs.stop_loss(), "10");
    }

    #[test]
    fn instrument_row_ignores_edits() {
        let mut app = AppState::new();
        app.push_char('7');
        app.pop_char();
        app.clear_field();
        assert_eq!(app.inputs.stop_loss(), "10");
        assert_eq!(app.inputs.risk_budget(), "100");
    }

    #[test]
    fn halve_sets_status_and_restore_round_trips() {
        let mut app = AppState::new();
        app.halve_risk();
        assert_eq!(app.inputs.risk_budget(), "50");
        assert_eq!(app.inputs.mode(), RiskMode::Half);
        assert!(matches!(
            app.status_message,
            Some((_, StatusLevel::Info))
        ));

        app.restore_full_risk();
        assert_eq!(app.inputs.risk_budget(), "100");
        assert_eq!(app.inputs.mode(), RiskMode::Full);
    }

    #[test]
    fn wrong_state_toggles_stay_silent() {
        let mut app = AppState::new();
        app.restore_full_risk();
        assert!(app.status_message.is_none());

        app.halve_risk();
        app.status_message = None;
        app.halve_risk();
        assert!(app.status_message.is_none());
        assert_eq!(app.inputs.risk_budget(), "50");
    }
}
