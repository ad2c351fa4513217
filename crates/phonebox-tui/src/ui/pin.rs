//! PIN entry screen.

use phonebox_core::auth::PIN_LENGTH;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::centered;
use crate::App;

const FILLED: &str = "●";
const EMPTY: &str = "○";

/// Render the PIN pad.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let error = app.pulses().pin_error;
    let border = if error { Color::Red } else { Color::Cyan };

    let mut lines = vec![
        Line::from(Span::styled("Enter PIN", Style::default().add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from(dots(app.auth().entered_len())),
    ];
    if error {
        lines.push(Line::from(Span::styled("Wrong PIN", Style::default().fg(Color::Red))));
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(border)));
    frame.render_widget(paragraph, centered(area, 24, 6));
}

/// One dot per PIN position, filled for entered digits.
fn dots(entered: usize) -> String {
    (0..PIN_LENGTH)
        .map(|i| if i < entered { FILLED } else { EMPTY })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dots_fill_from_left() {
        assert_eq!(dots(0), "○ ○ ○ ○");
        assert_eq!(dots(3), "● ● ● ○");
        assert_eq!(dots(PIN_LENGTH), "● ● ● ●");
    }
}
