//! Inbound messages pushed by the host.
//!
//! Messages are JSON objects tagged by an `action` field. Decoding is a two
//! step process: the tag is checked against the closed set in
//! [`HostMessage::TAGS`] first, so unknown tags are skipped without touching
//! their payload, then the object is decoded into the matching variant.

use serde::Deserialize;
use serde_json::Value;

use crate::{
    errors::{ProtocolError, Result},
    payloads::{CallerData, NotificationPayload, PhoneDataPatch},
};

/// Messages the host can push to the phone.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum HostMessage {
    /// Make the overlay visible.
    Show,
    /// Hide the overlay.
    Hide,
    /// Merge phone data into local state.
    UpdatePhoneData {
        /// Fields to merge. Host values win.
        #[serde(rename = "phoneData")]
        phone_data: PhoneDataPatch,
    },
    /// A call is ringing.
    ReceiveCall {
        /// Caller details.
        #[serde(rename = "callData")]
        call_data: CallerData,
    },
    /// The host ended the current call.
    EndCall,
    /// New notification.
    AddNotification {
        /// Notification contents.
        notification: NotificationPayload,
    },
    /// Content for an app previously requested with `phone:loadApp`.
    LoadAppContent {
        /// App the content belongs to.
        #[serde(rename = "appName")]
        app_name: String,
        /// Opaque content (markup) to show in the app container.
        #[serde(default)]
        content: String,
    },
    /// Battery level changed.
    UpdateBattery {
        /// Battery percentage.
        battery: f64,
    },
}

impl HostMessage {
    /// The closed set of recognised action tags.
    pub const TAGS: [&'static str; 8] = [
        "show",
        "hide",
        "updatePhoneData",
        "receiveCall",
        "endCall",
        "addNotification",
        "loadAppContent",
        "updateBattery",
    ];

    /// Action tag of this message.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Show => "show",
            Self::Hide => "hide",
            Self::UpdatePhoneData { .. } => "updatePhoneData",
            Self::ReceiveCall { .. } => "receiveCall",
            Self::EndCall => "endCall",
            Self::AddNotification { .. } => "addNotification",
            Self::LoadAppContent { .. } => "loadAppContent",
            Self::UpdateBattery { .. } => "updateBattery",
        }
    }
}

/// Decode one inbound message.
///
/// Returns `Ok(None)` for well-formed messages with an unrecognised tag.
///
/// # Errors
///
/// - `ProtocolError::Json` if the bytes are not JSON
/// - `ProtocolError::MissingAction` if there is no string `action` field
/// - `ProtocolError::InvalidPayload` if a known tag carries a bad payload
pub fn decode(bytes: &[u8]) -> Result<Option<HostMessage>> {
    let value: Value = serde_json::from_slice(bytes)?;
    let Some(tag) = value.get("action").and_then(Value::as_str) else {
        return Err(ProtocolError::MissingAction);
    };

    if !HostMessage::TAGS.contains(&tag) {
        return Ok(None);
    }

    let action = tag.to_owned();
    serde_json::from_value(value)
        .map(Some)
        .map_err(|e| ProtocolError::InvalidPayload { action, reason: e.to_string() })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::CallId;

    #[test]
    fn decodes_unit_tags() {
        assert_eq!(decode(br#"{"action":"show"}"#).unwrap(), Some(HostMessage::Show));
        assert_eq!(decode(br#"{"action":"hide"}"#).unwrap(), Some(HostMessage::Hide));
        assert_eq!(decode(br#"{"action":"endCall"}"#).unwrap(), Some(HostMessage::EndCall));
    }

    #[test]
    fn decodes_receive_call() {
        let msg = decode(br#"{"action":"receiveCall","callData":{"id":"c1","name":"Alice"}}"#)
            .unwrap()
            .unwrap();

        let HostMessage::ReceiveCall { call_data } = msg else {
            panic!("expected ReceiveCall, got {msg:?}");
        };
        assert_eq!(call_data.id, CallId::Text("c1".into()));
        assert_eq!(call_data.name.as_deref(), Some("Alice"));
        assert!(call_data.number.is_none());
    }

    #[test]
    fn decodes_app_content() {
        let msg = decode(
            br#"{"action":"loadAppContent","appName":"dialer","content":"<div>keypad</div>"}"#,
        )
        .unwrap();

        assert_eq!(
            msg,
            Some(HostMessage::LoadAppContent {
                app_name: "dialer".into(),
                content: "<div>keypad</div>".into(),
            })
        );
    }

    #[test]
    fn decodes_battery() {
        let msg = decode(br#"{"action":"updateBattery","battery":42}"#).unwrap();
        assert_eq!(msg, Some(HostMessage::UpdateBattery { battery: 42.0 }));
    }

    #[test]
    fn unknown_tag_is_ignored() {
        assert_eq!(decode(br#"{"action":"vibrate","pattern":[1,2]}"#).unwrap(), None);
    }

    #[test]
    fn missing_tag_is_an_error() {
        assert!(matches!(decode(br#"{"battery":1}"#), Err(ProtocolError::MissingAction)));
        assert!(matches!(decode(br#"{"action":5}"#), Err(ProtocolError::MissingAction)));
    }

    #[test]
    fn bad_payload_names_the_action() {
        let err = decode(br#"{"action":"receiveCall","callData":{"name":"x"}}"#).unwrap_err();
        assert!(
            matches!(&err, ProtocolError::InvalidPayload { action, .. } if action == "receiveCall")
        );
    }

    #[test]
    fn not_json_is_an_error() {
        assert!(matches!(decode(b"not json"), Err(ProtocolError::Json(_))));
    }

    #[test]
    fn tag_table_matches_variants() {
        let samples = [
            HostMessage::Show,
            HostMessage::Hide,
            HostMessage::UpdatePhoneData { phone_data: PhoneDataPatch::default() },
            HostMessage::ReceiveCall {
                call_data: CallerData { id: 1u64.into(), name: None, number: None, avatar: None },
            },
            HostMessage::EndCall,
            HostMessage::AddNotification { notification: NotificationPayload::default() },
            HostMessage::LoadAppContent { app_name: "x".into(), content: String::new() },
            HostMessage::UpdateBattery { battery: 1.0 },
        ];
        let tags: Vec<_> = samples.iter().map(HostMessage::tag).collect();
        assert_eq!(tags, HostMessage::TAGS);
    }
}
