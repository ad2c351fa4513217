//! Host-owned device data.
//!
//! The host pushes partial updates; every present field overwrites the local
//! value. Numeric inputs are clamped into range on the way in, so readers
//! never see an out-of-range battery or signal value.

use std::collections::BTreeMap;

use phonebox_proto::{PhoneDataPatch, Setting};
use serde_json::Value;

/// Maximum battery percentage.
pub const MAX_BATTERY: u8 = 100;

/// Maximum signal bars.
pub const MAX_SIGNAL: u8 = 4;

/// Device data mirrored from the host.
#[derive(Debug, Clone, PartialEq)]
pub struct PhoneState {
    battery: u8,
    signal: u8,
    wifi: bool,
    airplane: bool,
    silent: bool,
    pin_code: Option<String>,
    extra: BTreeMap<String, Value>,
}

impl Default for PhoneState {
    fn default() -> Self {
        Self {
            battery: MAX_BATTERY,
            signal: MAX_SIGNAL,
            wifi: true,
            airplane: false,
            silent: false,
            pin_code: None,
            extra: BTreeMap::new(),
        }
    }
}

impl PhoneState {
    /// Battery percentage in `0..=100`.
    pub fn battery(&self) -> u8 {
        self.battery
    }

    /// Signal bars in `0..=4`.
    pub fn signal(&self) -> u8 {
        self.signal
    }

    /// Configured unlock code. Empty codes are reported as `None`.
    pub fn pin_code(&self) -> Option<&str> {
        self.pin_code.as_deref().filter(|p| !p.is_empty())
    }

    /// Host fields not modelled here (contacts, messages, ...).
    pub fn extra(&self) -> &BTreeMap<String, Value> {
        &self.extra
    }

    /// Current value of a quick setting.
    pub fn get(&self, setting: Setting) -> bool {
        match setting {
            Setting::Wifi => self.wifi,
            Setting::Airplane => self.airplane,
            Setting::Silent => self.silent,
        }
    }

    /// Shallow merge of a host push. Host values win.
    pub fn merge(&mut self, patch: PhoneDataPatch) {
        if let Some(battery) = patch.battery {
            self.set_battery(battery);
        }
        if let Some(signal) = patch.signal {
            self.signal = clamp(signal, MAX_SIGNAL);
        }
        if let Some(wifi) = patch.wifi {
            self.wifi = wifi;
        }
        if let Some(airplane) = patch.airplane {
            self.airplane = airplane;
        }
        if let Some(silent) = patch.silent {
            self.silent = silent;
        }
        if let Some(pin) = patch.pin_code {
            self.pin_code = Some(pin);
        }
        self.extra.extend(patch.extra);
    }

    /// Set the battery level, clamped to `0..=100`.
    pub fn set_battery(&mut self, battery: f64) {
        self.battery = clamp(battery, MAX_BATTERY);
    }

    /// Flip a quick setting. Returns the new value.
    pub fn toggle(&mut self, setting: Setting) -> bool {
        let flag = match setting {
            Setting::Wifi => &mut self.wifi,
            Setting::Airplane => &mut self.airplane,
            Setting::Silent => &mut self.silent,
        };
        *flag = !*flag;
        *flag
    }
}

/// Round and clamp a host number into `0..=max`. NaN maps to 0.
fn clamp(value: f64, max: u8) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, f64::from(max)) as u8
}
