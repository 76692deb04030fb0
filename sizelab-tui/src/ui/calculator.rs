//! The calculator screen — input rows on top, derived sizes below.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use sizelab_core::{parse_amount, RiskMode, INSTRUMENTS};

use crate::app::{AppState, Field};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(
        "[j/k]field [h/l]instrument [x]half [r]restore [c]clear [?]help",
        theme::muted(),
    )));
    lines.push(Line::from(""));

    lines.push(instrument_row(app));
    lines.push(economics_row(app));
    lines.push(Line::from(""));
    lines.push(text_row(app, Field::StopLoss, app.inputs.stop_loss()));
    lines.push(risk_row(app));
    lines.push(Line::from(""));

    let r = &app.result;
    lines.push(Line::from(Span::styled(
        "Position Size",
        theme::accent_bold(),
    )));
    lines.push(money_row("Risk / contract", r.risk_per_contract));
    lines.push(Line::from(vec![
        Span::styled(format!("{:>18}: ", "Exact contracts"), theme::muted()),
        Span::styled(format!("{:.2}", r.raw_contracts), theme::text()),
    ]));
    lines.push(rounded_row("Round down", r.floored_contracts, r.floored_risk));
    lines.push(rounded_row("Round up", r.ceiled_contracts, r.ceiled_risk));

    let stop = parse_amount(app.inputs.stop_loss());
    let budget = parse_amount(app.inputs.risk_budget());
    lines.push(Line::from(""));
    if stop <= 0.0 || budget <= 0.0 {
        lines.push(Line::from(Span::styled(
            "Enter a positive stop and risk budget to size a position.",
            theme::muted(),
        )));
    } else if r.floored_contracts == 0.0 {
        lines.push(Line::from(Span::styled(
            "Risk budget does not cover one contract at this stop.",
            theme::warning(),
        )));
    }

    let para = Paragraph::new(lines);
    f.render_widget(para, area);
}

fn row_style(app: &AppState, field: Field) -> Style {
    if app.focus == field {
        theme::accent().add_modifier(Modifier::REVERSED)
    } else {
        theme::muted()
    }
}

fn instrument_row(app: &AppState) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!("{:>18}: ", Field::Instrument.label()),
        row_style(app, Field::Instrument),
    )];
    for spec in INSTRUMENTS {
        let selected = spec.code == app.inputs.instrument();
        let style = if selected && app.focus == Field::Instrument {
            theme::accent().add_modifier(Modifier::REVERSED)
        } else if selected {
            theme::accent_bold()
        } else {
            theme::muted()
        };
        spans.push(Span::styled(format!(" {} ", spec.code), style));
    }
    Line::from(spans)
}

fn economics_row(app: &AppState) -> Line<'static> {
    let spec = app.selected_spec();
    Line::from(vec![
        Span::raw(" ".repeat(20)),
        Span::styled(spec.name.to_string(), theme::neutral()),
        Span::styled(
            format!(
                "   ${:.2}/tick x {} ticks = ${:.2}/point",
                spec.tick_value,
                spec.ticks_per_point,
                spec.point_value()
            ),
            theme::muted(),
        ),
    ])
}

fn text_row(app: &AppState, field: Field, value: &str) -> Line<'static> {
    let style = row_style(app, field);
    Line::from(vec![
        Span::styled(format!("{:>18}: ", field.label()), style),
        Span::styled(value.to_owned(), style),
    ])
}

fn risk_row(app: &AppState) -> Line<'static> {
    let style = row_style(app, Field::RiskBudget);
    let mode = app.inputs.mode();
    let mut spans = vec![
        Span::styled(format!("{:>18}: ", Field::RiskBudget.label()), style),
        Span::styled(app.inputs.risk_budget().to_owned(), style),
        Span::styled(
            match mode {
                RiskMode::Full => "  [FULL]",
                RiskMode::Half => "  [HALF]",
            },
            theme::risk_mode(mode),
        ),
    ];
    if mode == RiskMode::Half {
        spans.push(Span::styled(
            format!("  (full: ${})", app.inputs.full_risk_snapshot()),
            theme::muted(),
        ));
    }
    Line::from(spans)
}

fn money_row(label: &str, value: f64) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:>18}: "), theme::muted()),
        Span::styled(format!("${value:.2}"), theme::text()),
    ])
}

fn rounded_row(label: &str, contracts: f64, risk: f64) -> Line<'static> {
    let count_style = if contracts > 0.0 {
        theme::positive()
    } else {
        theme::muted()
    };
    Line::from(vec![
        Span::styled(format!("{label:>18}: "), theme::muted()),
        Span::styled(format!("{contracts:.0}"), count_style),
        Span::styled(format!("   risking ${risk:.2}"), theme::text()),
    ])
}
