//! Outbound requests from the phone to its host.
//!
//! Each request is a named action plus a JSON body. The transport posts the
//! body to `{endpoint}/{action}` and ignores the response.

use serde_json::{Value, json};

use crate::{
    errors::Result,
    payloads::{CallId, Setting},
};

/// Requests sent to the host.
///
/// # Invariants
///
/// Each variant maps to exactly one action name (enforced by match
/// exhaustiveness in [`HostRequest::action`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostRequest {
    /// Phone was locked.
    Lock,
    /// User asked the host to reset the unlock code.
    ResetPin,
    /// An app was foregrounded.
    OpenApp {
        /// App id.
        app: String,
    },
    /// Request content for an app.
    LoadApp {
        /// App id.
        app: String,
    },
    /// Incoming call answered.
    AnswerCall {
        /// Host call id.
        call_id: CallId,
    },
    /// Incoming call declined (or rejected while busy).
    DeclineCall {
        /// Host call id.
        call_id: CallId,
    },
    /// Active call hung up by the user.
    EndCall,
    /// Quick setting toggled.
    ToggleSetting {
        /// Toggled setting.
        setting: Setting,
        /// New value after the toggle.
        value: bool,
    },
    /// Notification list cleared.
    ClearNotifications,
    /// Ask the host to push the full phone data.
    RequestData,
    /// User dismissed the overlay.
    Close,
}

impl HostRequest {
    /// Every action name, in declaration order.
    pub const ACTIONS: [&'static str; 11] = [
        "phone:lock",
        "phone:resetPin",
        "phone:openApp",
        "phone:loadApp",
        "phone:answerCall",
        "phone:declineCall",
        "phone:endCall",
        "phone:toggleSetting",
        "phone:clearNotifications",
        "phone:requestData",
        "phone:close",
    ];

    /// Action name used as the final path segment of the request URL.
    #[must_use]
    pub const fn action(&self) -> &'static str {
        match self {
            Self::Lock => "phone:lock",
            Self::ResetPin => "phone:resetPin",
            Self::OpenApp { .. } => "phone:openApp",
            Self::LoadApp { .. } => "phone:loadApp",
            Self::AnswerCall { .. } => "phone:answerCall",
            Self::DeclineCall { .. } => "phone:declineCall",
            Self::EndCall => "phone:endCall",
            Self::ToggleSetting { .. } => "phone:toggleSetting",
            Self::ClearNotifications => "phone:clearNotifications",
            Self::RequestData => "phone:requestData",
            Self::Close => "phone:close",
        }
    }

    /// JSON body. Actions without a payload send an empty object.
    #[must_use]
    pub fn body(&self) -> Value {
        match self {
            Self::OpenApp { app } | Self::LoadApp { app } => json!({ "app": app }),
            Self::AnswerCall { call_id } | Self::DeclineCall { call_id } => {
                json!({ "callId": call_id })
            },
            Self::ToggleSetting { setting, value } => {
                json!({ "setting": setting, "value": value })
            },
            Self::Lock
            | Self::ResetPin
            | Self::EndCall
            | Self::ClearNotifications
            | Self::RequestData
            | Self::Close => json!({}),
        }
    }

    /// Serialize the body to bytes.
    pub fn encode_body(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(&self.body())?)
    }
}
