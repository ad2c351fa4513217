//! Payload types shared by inbound and outbound messages.

use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Host-assigned call identifier.
///
/// Hosts use either numeric or string ids, so both are accepted and echoed
/// back exactly as received.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CallId {
    /// Numeric id.
    Number(u64),
    /// String id.
    Text(String),
}

impl fmt::Display for CallId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for CallId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<u64> for CallId {
    fn from(value: u64) -> Self {
        Self::Number(value)
    }
}

/// Caller details pushed with an incoming call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallerData {
    /// Host call id. Echoed in answer/decline requests.
    pub id: CallId,
    /// Display name. `None` renders as "Unknown".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Caller number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    /// Avatar image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Partial phone data pushed by the host.
///
/// Every field is optional: absent fields leave the local value untouched.
/// Numeric fields arrive as JSON numbers of any kind and are clamped by the
/// consumer. Fields this crate does not model (contacts, message threads,
/// photos, ...) are kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneDataPatch {
    /// Battery percentage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub battery: Option<f64>,
    /// Signal strength in bars.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signal: Option<f64>,
    /// Wifi enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wifi: Option<bool>,
    /// Airplane mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub airplane: Option<bool>,
    /// Silent mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub silent: Option<bool>,
    /// Unlock code. An empty string removes the lock.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pin_code: Option<String>,
    /// Unmodelled host fields.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Notification pushed by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPayload {
    /// Icon name. Defaults to a generic bell when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Title line.
    #[serde(default)]
    pub title: String,
    /// Body text.
    #[serde(default)]
    pub message: String,
    /// Event time in Unix milliseconds. The phone stamps arrival time when
    /// absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

/// Quick setting that can be toggled from the phone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Setting {
    /// Wifi radio.
    Wifi,
    /// Airplane mode.
    Airplane,
    /// Silent mode.
    Silent,
}

impl Setting {
    /// All settings, in quick-settings panel order.
    pub const ALL: [Self; 3] = [Self::Wifi, Self::Airplane, Self::Silent];

    /// Wire name of the setting.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Wifi => "wifi",
            Self::Airplane => "airplane",
            Self::Silent => "silent",
        }
    }
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
