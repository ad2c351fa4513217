//! Lock screen: clock, date and the newest notifications.

use phonebox_core::{format_time, status};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use crate::App;

/// Render the lock screen.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(5),
        ])
        .split(area);

    let [_, clock_area, date_area, _, preview_area] = chunks.as_ref() else {
        return;
    };

    let now = app.now();
    let clock = Paragraph::new(Line::from(Span::styled(
        status::clock_label(now),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(clock, *clock_area);

    let date = Paragraph::new(status::date_label(now))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray));
    frame.render_widget(date, *date_area);

    let items: Vec<ListItem> = app
        .notifications()
        .preview()
        .map(|n| {
            ListItem::new(Line::from(vec![
                Span::styled(n.title.clone(), Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(" "),
                Span::raw(n.message.clone()),
                Span::styled(format!("  {}", format_time(n.timestamp, now)), Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();

    if items.is_empty() {
        return;
    }
    let preview = List::new(items).block(Block::default().borders(Borders::TOP).title(" Notifications "));
    frame.render_widget(preview, *preview_area);
}
