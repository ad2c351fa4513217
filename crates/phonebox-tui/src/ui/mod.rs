//! UI rendering
//!
//! Rendering functions that convert App state into terminal output using
//! ratatui widgets. All functions are pure (no I/O), taking state and
//! returning widget trees.

mod call;
mod foreground;
mod home;
mod lock;
mod overlay;
mod pin;
mod recents;
mod status;

use phonebox_core::ScreenId;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
};

use crate::App;

/// Render the entire UI.
pub fn render(frame: &mut Frame, app: &App) {
    const STATUS_HEIGHT: u16 = 1;
    const SCREEN_MIN_HEIGHT: u16 = 3;
    const HINT_HEIGHT: u16 = 1;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(STATUS_HEIGHT),
            Constraint::Min(SCREEN_MIN_HEIGHT),
            Constraint::Length(HINT_HEIGHT),
        ])
        .split(frame.area());

    let [status_area, screen_area, hint_area] = chunks.as_ref() else {
        return;
    };

    status::render(frame, app, *status_area);
    render_screen(frame, app, *screen_area);
    render_hint(frame, app, *hint_area);
    overlay::render(frame, app, *screen_area);
}

/// Render the active screen.
fn render_screen(frame: &mut Frame, app: &App, area: Rect) {
    match app.screen() {
        ScreenId::Lock => lock::render(frame, app, area),
        ScreenId::Pin => pin::render(frame, app, area),
        ScreenId::Home => home::render(frame, app, area),
        ScreenId::AppContainer => foreground::render(frame, app, area),
        ScreenId::CallIncoming | ScreenId::CallActive => call::render(frame, app, area),
        ScreenId::Recents => recents::render(frame, app, area),
    }
}

/// Key hints for the active screen.
fn hint(app: &App) -> &'static str {
    if app.panel().is_some() {
        return " Esc close  ^N notifications  ^S settings";
    }
    match app.screen() {
        ScreenId::Lock => " Enter unlock  c camera  d dialer  ^N notifications",
        ScreenId::Pin => " 0-9 digit  Bksp delete  r reset PIN  Esc back",
        ScreenId::Home => " type to search  Tab/arrows move  Enter open  ^R recents  ^L lock",
        ScreenId::AppContainer => " Esc close  ^R recents  ^L lock",
        ScreenId::CallIncoming => " a answer  d decline",
        ScreenId::CallActive => " e end call  Esc leave",
        ScreenId::Recents => " arrows move  Enter open  Bksp back",
    }
}

fn render_hint(frame: &mut Frame, app: &App, area: Rect) {
    let paragraph = Paragraph::new(Line::from(hint(app))).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}

/// Area of `width` x `height` centered in `area`, clipped to it.
pub(crate) fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
