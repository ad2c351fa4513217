//! Recently opened apps, newest first.

use phonebox_core::apps;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::App;

/// Render the recents list.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Recent apps ");

    let items: Vec<ListItem> =
        app.app_session().recents().map(|id| ListItem::new(apps::title_for(id))).collect();

    if items.is_empty() {
        let empty = Paragraph::new("No recent apps").style(Style::default().fg(Color::DarkGray)).block(block);
        frame.render_widget(empty, area);
        return;
    }

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ListState::default().with_selected(Some(app.selected()));
    frame.render_stateful_widget(list, area, &mut state);
}
