//! Event loop shared by the terminal binary and the simulation harness.
//!
//! Each step pulls one input from the driver and routes it through:
//! - [`App`]: phone state machine
//! - [`Bridge`]: host protocol translation
//! - [`Driver`]: platform-specific I/O

use phonebox_core::{Environment, TimerConfig};

use crate::{App, AppAction, AppEvent, Bridge, Driver, DriverEvent};

/// Owns the phone and feeds it driver input until it asks to quit.
///
/// # Type Parameters
///
/// - `D`: Platform-specific I/O driver
/// - `E`: Environment providing wall-clock time
pub struct Runtime<D, E>
where
    D: Driver,
    E: Environment,
{
    driver: D,
    app: App,
    bridge: Bridge<E>,
}

impl<D, E> Runtime<D, E>
where
    D: Driver,
    E: Environment,
{
    /// Create a new runtime with the given driver and environment.
    pub fn new(driver: D, env: E, timers: TimerConfig) -> Self {
        let app = App::new(timers, env.now());
        let bridge = Bridge::new(env);
        Self { driver, app, bridge }
    }

    /// Run the main event loop until the App asks to quit.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver encounters an I/O error.
    pub async fn run(mut self) -> Result<(), D::Error> {
        if !self.start()? {
            loop {
                if self.step().await? {
                    break;
                }
            }
        }

        self.driver.stop();
        Ok(())
    }

    /// Execute the startup actions.
    ///
    /// Returns `true` if the application should quit.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver encounters an I/O error.
    pub fn start(&mut self) -> Result<bool, D::Error> {
        let actions = self.app.start();
        self.process_actions(actions)
    }

    /// Process one driver event.
    ///
    /// Returns `true` if the application should quit.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver encounters an I/O error.
    pub async fn step(&mut self) -> Result<bool, D::Error> {
        let events = match self.driver.poll_event().await? {
            None => return Ok(false),
            Some(DriverEvent::Input(event)) => vec![event],
            Some(DriverEvent::Host(bytes)) => self.bridge.handle_raw(&bytes),
            Some(DriverEvent::Timer(timer)) => self.bridge.handle_timer(timer),
        };
        self.process_events(events)
    }

    /// Feed events to the App and execute the resulting actions.
    fn process_events(&mut self, events: Vec<AppEvent>) -> Result<bool, D::Error> {
        for event in events {
            let actions = self.app.handle(event);
            if self.process_actions(actions)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Execute actions returned by the App.
    ///
    /// Returns `true` if should quit.
    fn process_actions(&mut self, actions: Vec<AppAction>) -> Result<bool, D::Error> {
        let mut quit = false;
        let mut render = false;

        for action in actions {
            match action {
                AppAction::Render => render = true,
                AppAction::Quit => quit = true,
                AppAction::Host(_) | AppAction::Timer(_) => self.bridge.process_app_action(action),
            }
        }

        // Timers first so a cancel reaches the driver before any render
        for command in self.bridge.take_timer_commands() {
            self.driver.schedule(command)?;
        }
        for request in self.bridge.take_outgoing() {
            self.driver.send_request(request)?;
        }

        if quit {
            return Ok(true);
        }
        if render {
            self.driver.render(&self.app)?;
        }
        Ok(false)
    }

    /// Get a reference to the App
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the App
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }

    /// Get a reference to the Driver
    pub fn driver(&self) -> &D {
        &self.driver
    }
}
