//! Key bindings.
//!
//! Control shortcuts work on every screen. Other keys go to the open panel
//! if there is one, else to the active screen.
//!
//! | key      | action                         |
//! |----------|--------------------------------|
//! | Ctrl+C   | quit                           |
//! | Ctrl+Q   | ask the host to close the phone |
//! | Ctrl+L   | lock                           |
//! | Ctrl+N   | notification panel             |
//! | Ctrl+S   | quick settings panel           |
//! | Ctrl+R   | recent apps                    |
//! | Ctrl+O   | return to the current call     |
//! | Esc      | close panel, app, or go home   |

use phonebox_core::ScreenId;
use phonebox_proto::Setting;

use crate::{App, AppAction, KeyInput, Panel};

impl App {
    pub(crate) fn handle_key(&mut self, key: KeyInput) -> Vec<AppAction> {
        match key {
            KeyInput::Ctrl('c') => return self.quit(),
            KeyInput::Ctrl('q') => return self.close(),
            KeyInput::Ctrl('l') => return self.lock(),
            KeyInput::Ctrl('n') => return self.toggle_panel(Panel::Notifications),
            KeyInput::Ctrl('s') => return self.toggle_panel(Panel::QuickSettings),
            KeyInput::Ctrl('r') => return self.show_recents(),
            KeyInput::Ctrl('o') => return self.resume_call(),
            KeyInput::Ctrl(_) => return vec![],
            KeyInput::Esc if self.screen() == ScreenId::Pin && self.panel().is_none() => {
                return self.cancel_pin();
            },
            KeyInput::Esc => return self.escape(),
            _ => {},
        }

        if let Some(panel) = self.panel() {
            return self.panel_key(panel, key);
        }

        match self.screen() {
            ScreenId::Lock => match key {
                KeyInput::Enter | KeyInput::Char(' ') => self.unlock(),
                KeyInput::Char('c') => self.open_app("camera"),
                KeyInput::Char('d') => self.open_app("dialer"),
                _ => vec![],
            },
            ScreenId::Pin => match key {
                KeyInput::Char('r') => self.reset_pin(),
                KeyInput::Char(c) => self.enter_digit(c),
                KeyInput::Backspace => self.remove_digit(),
                _ => vec![],
            },
            ScreenId::Home => match key {
                KeyInput::Char(c) => {
                    let mut query = self.search_query().to_owned();
                    query.push(c);
                    self.set_search(query)
                },
                KeyInput::Backspace => {
                    let mut query = self.search_query().to_owned();
                    if query.pop().is_none() {
                        return vec![];
                    }
                    self.set_search(query)
                },
                KeyInput::Enter => self.open_selected(),
                _ => self.move_selection(key),
            },
            ScreenId::AppContainer => match key {
                KeyInput::Backspace => self.go_back(),
                _ => vec![],
            },
            ScreenId::CallIncoming => match key {
                KeyInput::Enter | KeyInput::Char('a') => self.answer_call(),
                KeyInput::Backspace | KeyInput::Char('d') => self.decline_call(),
                _ => vec![],
            },
            ScreenId::CallActive => match key {
                KeyInput::Enter | KeyInput::Char('e') => self.end_call(),
                _ => vec![],
            },
            ScreenId::Recents => match key {
                KeyInput::Enter => self.open_selected(),
                KeyInput::Backspace => self.go_back(),
                _ => self.move_selection(key),
            },
        }
    }

    fn panel_key(&mut self, panel: Panel, key: KeyInput) -> Vec<AppAction> {
        match (panel, key) {
            (Panel::Notifications, KeyInput::Char('c')) => self.clear_notifications(),
            (Panel::QuickSettings, KeyInput::Char('1')) => self.toggle_setting(Setting::Wifi),
            (Panel::QuickSettings, KeyInput::Char('2')) => self.toggle_setting(Setting::Airplane),
            (Panel::QuickSettings, KeyInput::Char('3')) => self.toggle_setting(Setting::Silent),
            _ => vec![],
        }
    }

    fn move_selection(&mut self, key: KeyInput) -> Vec<AppAction> {
        match key {
            KeyInput::Tab | KeyInput::Right | KeyInput::Down => self.select_next(),
            KeyInput::Left | KeyInput::Up => self.select_prev(),
            _ => vec![],
        }
    }
}
