//! Status bar and lock-screen labels derived from phone state.

use crate::{env::WallTime, phone::PhoneState};

/// Battery icon bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatteryLevel {
    /// Above 75%.
    Full,
    /// Above 50%.
    Standard,
    /// Above 25%.
    Low,
    /// 25% or less.
    Alert,
}

impl BatteryLevel {
    /// Bucket for a battery percentage.
    pub fn from_percent(percent: u8) -> Self {
        match percent {
            76.. => Self::Full,
            51..=75 => Self::Standard,
            26..=50 => Self::Low,
            _ => Self::Alert,
        }
    }

    /// Material icon name.
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Full => "battery_full",
            Self::Standard => "battery_std",
            Self::Low => "battery_low",
            Self::Alert => "battery_alert",
        }
    }
}

/// Everything the status bar shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBar {
    /// Clock as `HH:MM`.
    pub clock: String,
    /// Battery percentage.
    pub battery: u8,
    /// Battery icon bucket.
    pub battery_level: BatteryLevel,
    /// Signal bars.
    pub signal: u8,
    /// Whether the wifi indicator is shown.
    pub wifi: bool,
    /// Whether the airplane indicator is shown.
    pub airplane: bool,
    /// Whether the silent indicator is shown.
    pub silent: bool,
}

impl StatusBar {
    /// Derive the status bar for `phone` at `now`.
    pub fn derive(phone: &PhoneState, now: WallTime) -> Self {
        use phonebox_proto::Setting;

        Self {
            clock: clock_label(now),
            battery: phone.battery(),
            battery_level: BatteryLevel::from_percent(phone.battery()),
            signal: phone.signal(),
            wifi: phone.get(Setting::Wifi),
            airplane: phone.get(Setting::Airplane),
            silent: phone.get(Setting::Silent),
        }
    }
}

/// 24-hour clock, `HH:MM`.
pub fn clock_label(now: WallTime) -> String {
    now.format("%H:%M").to_string()
}

/// Lock-screen date, e.g. `Saturday, March 7`.
pub fn date_label(now: WallTime) -> String {
    now.format("%A, %B %-d").to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{FixedOffset, TimeZone};
    use phonebox_proto::PhoneDataPatch;

    use super::*;

    fn now() -> WallTime {
        FixedOffset::east_opt(3600).unwrap().with_ymd_and_hms(2026, 3, 7, 9, 5, 0).unwrap()
    }

    #[test]
    fn battery_buckets() {
        assert_eq!(BatteryLevel::from_percent(100), BatteryLevel::Full);
        assert_eq!(BatteryLevel::from_percent(76), BatteryLevel::Full);
        assert_eq!(BatteryLevel::from_percent(75), BatteryLevel::Standard);
        assert_eq!(BatteryLevel::from_percent(51), BatteryLevel::Standard);
        assert_eq!(BatteryLevel::from_percent(50), BatteryLevel::Low);
        assert_eq!(BatteryLevel::from_percent(26), BatteryLevel::Low);
        assert_eq!(BatteryLevel::from_percent(25), BatteryLevel::Alert);
        assert_eq!(BatteryLevel::from_percent(0), BatteryLevel::Alert);
    }

    #[test]
    fn labels() {
        insta::assert_snapshot!(clock_label(now()), @"09:05");
        insta::assert_snapshot!(date_label(now()), @"Saturday, March 7");
    }

    #[test]
    fn derives_from_phone() {
        let mut phone = PhoneState::default();
        phone.merge(PhoneDataPatch {
            battery: Some(30.0),
            signal: Some(1.0),
            wifi: Some(false),
            ..Default::default()
        });

        let bar = StatusBar::derive(&phone, now());
        assert_eq!(bar.battery_level, BatteryLevel::Low);
        assert_eq!(bar.battery_level.icon(), "battery_low");
        assert_eq!(bar.signal, 1);
        assert!(!bar.wifi);
        assert_eq!(bar.clock, "09:05");
    }
}
