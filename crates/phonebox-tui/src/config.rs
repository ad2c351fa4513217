//! Runtime configuration.

use phonebox_core::TimerConfig;
use phonebox_host::HttpHostConfig;

/// Default address the host pushes messages to.
pub const DEFAULT_LISTEN: &str = "127.0.0.1:30121";

/// Everything the binary needs to start the phone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Where outbound requests go.
    pub host: HttpHostConfig,
    /// Address for inbound host messages.
    pub listen: String,
    /// Timer periods.
    pub timers: TimerConfig,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            host: HttpHostConfig::default(),
            listen: DEFAULT_LISTEN.to_owned(),
            timers: TimerConfig::default(),
        }
    }
}
