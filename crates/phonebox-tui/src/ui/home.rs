//! Home screen: search box and app grid.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::App;

const CELL_WIDTH: u16 = 14;

/// Render the search box and the matching apps.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let [search_area, grid_area] = chunks.as_ref() else {
        return;
    };

    let search = Paragraph::new(Line::from(vec![
        Span::styled("Search: ", Style::default().fg(Color::DarkGray)),
        Span::raw(app.search_query()),
        Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
    ]))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(search, *search_area);

    let apps = app.visible_apps();
    if apps.is_empty() {
        let empty = Paragraph::new(" No apps found").style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, *grid_area);
        return;
    }

    let columns = usize::from((grid_area.width / CELL_WIDTH).max(1));
    let lines: Vec<Line> = apps
        .chunks(columns)
        .enumerate()
        .map(|(row, infos)| {
            let spans = infos
                .iter()
                .enumerate()
                .map(|(col, info)| {
                    let style = if row * columns + col == app.selected() {
                        Style::default().add_modifier(Modifier::REVERSED)
                    } else {
                        Style::default()
                    };
                    Span::styled(format!(" {:<width$}", info.label, width = usize::from(CELL_WIDTH) - 1), style)
                })
                .collect::<Vec<_>>();
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), *grid_area);
}
