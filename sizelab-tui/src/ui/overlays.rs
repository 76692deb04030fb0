//! Overlay widgets — keyboard help.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::theme;
use crate::ui::centered_rect;

/// Keyboard help overlay.
pub fn render_help(f: &mut Frame, area: Rect) {
    let popup = centered_rect(60, 70, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Help [Esc]close ")
        .title_style(theme::accent_bold());

    let mut lines: Vec<Line> = Vec::new();

    section(&mut lines, "Navigation");
    key(&mut lines, "Tab / j / Down", "Next field");
    key(&mut lines, "Shift+Tab / k / Up", "Previous field");
    lines.push(Line::from(""));

    section(&mut lines, "Editing");
    key(&mut lines, "h / l", "Cycle instrument (instrument row)");
    key(&mut lines, "0-9 .", "Append to the focused field");
    key(&mut lines, "Backspace", "Delete the last character");
    key(&mut lines, "c", "Clear the focused field");
    lines.push(Line::from(""));

    section(&mut lines, "Risk Toggle");
    key(&mut lines, "x", "Halve the risk budget");
    key(&mut lines, "r", "Restore the full budget");
    lines.push(Line::from(""));

    section(&mut lines, "Session");
    key(&mut lines, "?", "Toggle this help");
    key(&mut lines, "q", "Quit");

    let para = Paragraph::new(lines).block(block);
    f.render_widget(para, popup);
}

fn section<'a>(lines: &mut Vec<Line<'a>>, title: &str) {
    lines.push(Line::from(Span::styled(
        title.to_string(),
        theme::accent_bold(),
    )));
}

fn key<'a>(lines: &mut Vec<Line<'a>>, keys: &str, desc: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {keys:>20}  "), theme::accent()),
        Span::styled(desc.to_string(), theme::muted()),
    ]));
}
