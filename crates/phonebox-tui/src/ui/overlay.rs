//! Panels and popups drawn over the active screen.

use phonebox_app::Panel;
use phonebox_core::format_time;
use phonebox_proto::Setting;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
};

use crate::App;

/// Render whatever sits on top of `area`: the open panel, else the popup.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    match app.panel() {
        Some(Panel::Notifications) => notifications(frame, app, area),
        Some(Panel::QuickSettings) => quick_settings(frame, app, area),
        None => popup(frame, app, area),
    }
}

fn notifications(frame: &mut Frame, app: &App, area: Rect) {
    let now = app.now();
    let items: Vec<ListItem> = app
        .notifications()
        .iter()
        .map(|n| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(n.title.clone(), Style::default().add_modifier(Modifier::BOLD)),
                    Span::styled(format!("  {}", format_time(n.timestamp, now)), Style::default().fg(Color::DarkGray)),
                ]),
                Line::from(format!("  {}", n.message)),
            ])
        })
        .collect();

    let block = Block::default().borders(Borders::ALL).title(" Notifications ").title_bottom(" c clear ");

    frame.render_widget(Clear, area);
    if items.is_empty() {
        let empty = Paragraph::new("No notifications").style(Style::default().fg(Color::DarkGray)).block(block);
        frame.render_widget(empty, area);
    } else {
        frame.render_widget(List::new(items).block(block), area);
    }
}

fn quick_settings(frame: &mut Frame, app: &App, area: Rect) {
    let height = (Setting::ALL.len() as u16 + 2).min(area.height);
    let panel = Rect { height, ..area };

    let lines: Vec<Line> = Setting::ALL
        .iter()
        .enumerate()
        .map(|(i, setting)| {
            let on = app.phone().get(*setting);
            let mark = if on { "[x]" } else { "[ ]" };
            let style = if on { Style::default().fg(Color::Green) } else { Style::default() };
            Line::from(Span::styled(format!("{mark} {} {}", i + 1, label(*setting)), style))
        })
        .collect();

    frame.render_widget(Clear, panel);
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Quick settings ")),
        panel,
    );
}

fn popup(frame: &mut Frame, app: &App, area: Rect) {
    let Some(notification) = app.popup() else {
        return;
    };
    let height = 3.min(area.height);
    let banner = Rect { height, ..area };

    let line = Line::from(vec![
        Span::styled(notification.title.clone(), Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("  "),
        Span::raw(notification.message.clone()),
    ]);

    frame.render_widget(Clear, banner);
    frame.render_widget(
        Paragraph::new(line).block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::Cyan))),
        banner,
    );
}

fn label(setting: Setting) -> &'static str {
    match setting {
        Setting::Wifi => "Wifi",
        Setting::Airplane => "Airplane",
        Setting::Silent => "Silent",
    }
}
