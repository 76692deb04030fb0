//! Neon theme tokens for the SizeLab TUI.
//!
//! High-contrast palette on a dark terminal background:
//! - **Accent**: electric cyan (focus, highlighted values)
//! - **Positive**: neon green (full risk, affordable sizes)
//! - **Warning**: neon orange (half risk, sub-contract budgets)
//! - **Neutral**: cool purple (secondary info)
//! - **Muted**: steel blue (labels, hints, disabled rows)

use ratatui::style::{Color, Modifier, Style};

use sizelab_core::RiskMode;

const ACCENT: Color = Color::Rgb(0, 255, 255);
const POSITIVE: Color = Color::Rgb(0, 255, 128);
const WARNING: Color = Color::Rgb(255, 140, 0);
const NEUTRAL: Color = Color::Rgb(147, 112, 219);
const MUTED: Color = Color::Rgb(100, 149, 237);
const TEXT: Color = Color::Rgb(170, 170, 170);

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn positive() -> Style {
    Style::default().fg(POSITIVE)
}

pub fn warning() -> Style {
    Style::default().fg(WARNING)
}

pub fn neutral() -> Style {
    Style::default().fg(NEUTRAL)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn text() -> Style {
    Style::default().fg(TEXT)
}

/// Border style for the main frame.
pub fn panel_border(active: bool) -> Style {
    if active {
        accent()
    } else {
        muted()
    }
}

/// Title style for the main frame.
pub fn panel_title(active: bool) -> Style {
    if active {
        accent_bold()
    } else {
        muted()
    }
}

/// Style for the full/half risk badge.
pub fn risk_mode(mode: RiskMode) -> Style {
    match mode {
        RiskMode::Full => positive(),
        RiskMode::Half => warning(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_mode_maps_to_distinct_styles() {
        assert_eq!(risk_mode(RiskMode::Full), positive());
        assert_eq!(risk_mode(RiskMode::Half), warning());
        assert_ne!(risk_mode(RiskMode::Full), risk_mode(RiskMode::Half));
    }

    #[test]
    fn border_dims_when_inactive() {
        assert_eq!(panel_border(true), accent());
        assert_eq!(panel_border(false), muted());
    }
}
