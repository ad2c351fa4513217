//! Status bar
//!
//! Clock on the left; signal, radio flags and battery on the right.

use phonebox_core::{BatteryLevel, StatusBar};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::App;

const SIGNAL_BARS: [&str; 4] = ["▂", "▄", "▆", "█"];
const NO_BAR: &str = "·";

/// Render the status bar.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let bar = app.status_bar();
    let style = Style::default().bg(Color::DarkGray).fg(Color::White);

    let clock = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled(bar.clock.clone(), Style::default().add_modifier(Modifier::BOLD)),
    ]))
    .style(style);
    frame.render_widget(clock, area);

    let indicators = Paragraph::new(indicators(&bar)).alignment(Alignment::Right).style(style);
    frame.render_widget(indicators, area);
}

/// Right-hand indicators.
fn indicators(bar: &StatusBar) -> Line<'static> {
    let mut spans = Vec::new();

    if bar.airplane {
        spans.push(Span::raw("airplane"));
    } else {
        let signal: String = SIGNAL_BARS
            .iter()
            .enumerate()
            .map(|(i, glyph)| if i < usize::from(bar.signal) { *glyph } else { NO_BAR })
            .collect();
        spans.push(Span::raw(signal));
        if bar.wifi {
            spans.push(Span::raw("  wifi"));
        }
    }
    if bar.silent {
        spans.push(Span::raw("  silent"));
    }

    let battery_color = match bar.battery_level {
        BatteryLevel::Full | BatteryLevel::Standard => Color::Green,
        BatteryLevel::Low => Color::Yellow,
        BatteryLevel::Alert => Color::Red,
    };
    spans.push(Span::raw("  "));
    spans.push(Span::styled(format!("{}% ", bar.battery), Style::default().fg(battery_color)));

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar() -> StatusBar {
        StatusBar {
            clock: "09:05".into(),
            battery: 100,
            battery_level: BatteryLevel::Full,
            signal: 4,
            wifi: true,
            airplane: false,
            silent: false,
        }
    }

    #[test]
    fn full_signal_with_wifi() {
        assert_eq!(indicators(&bar()).to_string(), "▂▄▆█  wifi  100% ");
    }

    #[test]
    fn weak_signal_silent_low_battery() {
        let bar = StatusBar {
            battery: 20,
            battery_level: BatteryLevel::Alert,
            signal: 1,
            wifi: false,
            silent: true,
            ..bar()
        };
        assert_eq!(indicators(&bar).to_string(), "▂···  silent  20% ");
    }

    #[test]
    fn airplane_hides_radios() {
        let bar = StatusBar { airplane: true, ..bar() };
        assert_eq!(indicators(&bar).to_string(), "airplane  100% ");
    }
}
