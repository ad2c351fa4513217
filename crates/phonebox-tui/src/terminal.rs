//! Terminal driver for the TUI.
//!
//! Implements the [`Driver`] trait for terminal I/O using crossterm for
//! keyboard events and ratatui for rendering. Host requests go out over
//! HTTP, host pushes arrive on a TCP listener, and each timer is a tokio task.

use std::{
    collections::HashMap,
    io::{self, Stdout, stdout},
};

use crossterm::{
    ExecutableCommand,
    event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use phonebox_app::{App, AppEvent, Driver, DriverEvent, KeyInput};
use phonebox_core::{TimerCommand, TimerHandle};
use phonebox_host::{HostListener, HttpHost, TransportError};
use phonebox_proto::HostRequest;
use ratatui::{Terminal, backend::CrosstermBackend};
use thiserror::Error;
use tokio::{
    sync::mpsc,
    task::JoinHandle,
    time::{self, Instant, MissedTickBehavior},
};

use crate::{RuntimeConfig, ui};

/// Buffered host messages before the listener applies backpressure.
const INBOUND_CAPACITY: usize = 64;

/// Terminal driver errors.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// I/O error from terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Transport error.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
}

/// Convert a crossterm key event to [`KeyInput`].
///
/// Control chords become [`KeyInput::Ctrl`] with the lowercase letter.
pub fn convert_key(key: KeyEvent) -> Option<KeyInput> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char(c) => Some(KeyInput::Ctrl(c.to_ascii_lowercase())),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char(c) => Some(KeyInput::Char(c)),
        KeyCode::Enter => Some(KeyInput::Enter),
        KeyCode::Backspace => Some(KeyInput::Backspace),
        KeyCode::Tab => Some(KeyInput::Tab),
        KeyCode::Esc => Some(KeyInput::Esc),
        KeyCode::Left => Some(KeyInput::Left),
        KeyCode::Right => Some(KeyInput::Right),
        KeyCode::Up => Some(KeyInput::Up),
        KeyCode::Down => Some(KeyInput::Down),
        _ => None,
    }
}

/// One item from the crossterm event stream, as seen by the driver.
#[derive(Debug, PartialEq)]
enum TerminalInput {
    /// An event, or `None` for input the phone ignores.
    Event(Option<DriverEvent>),
    /// The stream ended (stdin closed). It must not be polled again.
    Closed,
}

fn translate(item: Option<io::Result<Event>>) -> Result<TerminalInput, TerminalError> {
    let event = match item {
        None => return Ok(TerminalInput::Closed),
        Some(item) => item?,
    };

    let event = match event {
        Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
            convert_key(key_event).map(|key| DriverEvent::Input(AppEvent::Key(key)))
        },
        Event::Resize(cols, rows) => Some(DriverEvent::Input(AppEvent::Resize(cols, rows))),
        _ => None,
    };
    Ok(TerminalInput::Event(event))
}

/// Terminal driver implementing the [`Driver`] trait.
///
/// Handles terminal I/O (crossterm), rendering (ratatui), the host transport
/// (reqwest out, TCP in) and timers (tokio tasks).
pub struct TerminalDriver {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    event_stream: EventStream,
    input_closed: bool,
    host: HttpHost,
    inbound: mpsc::Receiver<Vec<u8>>,
    listener: JoinHandle<()>,
    timer_tx: mpsc::UnboundedSender<TimerHandle>,
    timer_rx: mpsc::UnboundedReceiver<TimerHandle>,
    timers: HashMap<TimerHandle, JoinHandle<()>>,
}

impl TerminalDriver {
    /// Bind the host listener and take over the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if the config is invalid, the listen address cannot
    /// be bound, or the terminal cannot be switched to raw mode.
    pub async fn new(config: &RuntimeConfig) -> Result<Self, TerminalError> {
        let host = HttpHost::new(config.host.clone())?;

        let (inbound_tx, inbound) = mpsc::channel(INBOUND_CAPACITY);
        let listener = HostListener::bind(&config.listen).await?.spawn(inbound_tx);
        let (timer_tx, timer_rx) = mpsc::unbounded_channel();

        enable_raw_mode()?;
        stdout().execute(EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend)?;
        let event_stream = EventStream::new();

        Ok(Self {
            terminal,
            event_stream,
            input_closed: false,
            host,
            inbound,
            listener,
            timer_tx,
            timer_rx,
            timers: HashMap::new(),
        })
    }

    fn start_timer(&mut self, timer: TimerHandle, period: std::time::Duration, repeat: bool) {
        self.timers.retain(|_, task| !task.is_finished());

        let tx = self.timer_tx.clone();
        let task = tokio::spawn(async move {
            let mut ticks = time::interval_at(Instant::now() + period, period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticks.tick().await;
                if tx.send(timer).is_err() || !repeat {
                    break;
                }
            }
        });

        if let Some(previous) = self.timers.insert(timer, task) {
            previous.abort();
        }
    }
}

impl Driver for TerminalDriver {
    type Error = TerminalError;

    async fn poll_event(&mut self) -> Result<Option<DriverEvent>, Self::Error> {
        tokio::select! {
            biased;

            // Terminal events, until stdin closes
            item = self.event_stream.next(), if !self.input_closed => {
                match translate(item)? {
                    TerminalInput::Event(event) => Ok(event),
                    TerminalInput::Closed => {
                        tracing::warn!("terminal input closed");
                        self.input_closed = true;
                        Ok(None)
                    },
                }
            }

            // Timer fires
            Some(timer) = self.timer_rx.recv() => Ok(Some(DriverEvent::Timer(timer))),

            // Host pushes
            Some(raw) = self.inbound.recv() => Ok(Some(DriverEvent::Host(raw))),
        }
    }

    fn send_request(&mut self, request: HostRequest) -> Result<(), Self::Error> {
        self.host.send(request).map_err(TerminalError::from)
    }

    fn schedule(&mut self, command: TimerCommand) -> Result<(), Self::Error> {
        match command {
            TimerCommand::Start { timer, period, repeat } => self.start_timer(timer, period, repeat),
            TimerCommand::Cancel(timer) => {
                if let Some(task) = self.timers.remove(&timer) {
                    task.abort();
                }
            },
        }
        Ok(())
    }

    fn render(&mut self, app: &App) -> Result<(), Self::Error> {
        self.terminal.draw(|frame| ui::render(frame, app))?;
        Ok(())
    }

    fn stop(&mut self) {
        for (_, task) in self.timers.drain() {
            task.abort();
        }
        self.listener.abort();
        self.inbound.close();
    }
}

impl Drop for TerminalDriver {
    fn drop(&mut self) {
        self.stop();
        let _ = disable_raw_mode();
        let _ = stdout().execute(LeaveAlternateScreen);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn plain_characters_pass_through() {
        assert_eq!(convert_key(key(KeyCode::Char('7'), KeyModifiers::NONE)), Some(KeyInput::Char('7')));
        assert_eq!(convert_key(key(KeyCode::Char('M'), KeyModifiers::SHIFT)), Some(KeyInput::Char('M')));
    }

    #[test]
    fn control_chords_are_lowercased() {
        assert_eq!(convert_key(key(KeyCode::Char('n'), KeyModifiers::CONTROL)), Some(KeyInput::Ctrl('n')));
        assert_eq!(
            convert_key(key(KeyCode::Char('L'), KeyModifiers::CONTROL | KeyModifiers::SHIFT)),
            Some(KeyInput::Ctrl('l'))
        );
        assert_eq!(convert_key(key(KeyCode::Enter, KeyModifiers::CONTROL)), None);
    }

    #[test]
    fn stream_end_is_reported_once_as_closed() {
        assert_eq!(translate(None).unwrap(), TerminalInput::Closed);
    }

    #[test]
    fn key_releases_and_focus_are_ignored() {
        let mut release = key(KeyCode::Char('a'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;

        assert_eq!(translate(Some(Ok(Event::Key(release)))).unwrap(), TerminalInput::Event(None));
        assert_eq!(translate(Some(Ok(Event::FocusGained))).unwrap(), TerminalInput::Event(None));
        assert_eq!(
            translate(Some(Ok(Event::Resize(40, 12)))).unwrap(),
            TerminalInput::Event(Some(DriverEvent::Input(AppEvent::Resize(40, 12))))
        );
    }

    #[test]
    fn stream_errors_propagate() {
        let item = Some(Err(io::Error::other("tty gone")));
        assert!(matches!(translate(item), Err(TerminalError::Io(_))));
    }

    #[test]
    fn navigation_keys_map() {
        assert_eq!(convert_key(key(KeyCode::Esc, KeyModifiers::NONE)), Some(KeyInput::Esc));
        assert_eq!(convert_key(key(KeyCode::Tab, KeyModifiers::NONE)), Some(KeyInput::Tab));
        assert_eq!(convert_key(key(KeyCode::Down, KeyModifiers::NONE)), Some(KeyInput::Down));
        assert_eq!(convert_key(key(KeyCode::F(1), KeyModifiers::NONE)), None);
    }
}
