//! App registry and the foreground app session.
//!
//! The registry is a fixed table; per-app behaviour lives with the host,
//! which serves each app's content on request. The phone only tracks which
//! app is foregrounded, the content loaded for it, and the recents list.

use std::collections::VecDeque;

/// Apps that can be opened while the phone is locked.
pub const LOCK_BYPASS: [&str; 2] = ["camera", "dialer"];

/// Maximum number of entries kept in the recents list.
pub const RECENTS_CAPACITY: usize = 6;

/// Title shown for app ids outside the registry.
pub const FALLBACK_TITLE: &str = "App";

/// Static description of an installed app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppInfo {
    /// Id sent to the host.
    pub id: &'static str,
    /// Label under the home-screen icon.
    pub label: &'static str,
    /// Title shown in the app container header.
    pub title: &'static str,
    /// Material icon name.
    pub icon: &'static str,
    /// Icon background as `0xRRGGBB`.
    pub color: u32,
}

const fn app(
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    color: u32,
) -> AppInfo {
    AppInfo { id, label, title: label, icon, color }
}

/// Every installed app, in home-screen order.
pub const REGISTRY: [AppInfo; 27] = [
    app("dialer", "Phone", "phone", 0x4CAF50),
    app("messages", "Messages", "message", 0x2196F3),
    app("contacts", "Contacts", "contacts", 0xFF9800),
    app("camera", "Camera", "camera_alt", 0x9C27B0),
    app("gallery", "Gallery", "photo_library", 0xE91E63),
    app("settings", "Settings", "settings", 0x607D8B),
    app("calculator", "Calculator", "calculate", 0x795548),
    app("notepad", "Notepad", "note_add", 0xFFEB3B),
    app("music", "Music", "music_note", 0xFF5722),
    app("banking", "Bank", "account_balance", 0x4CAF50),
    app("mail", "Mail", "mail", 0x2196F3),
    app("maps", "Maps", "map", 0x4CAF50),
    app("birdy", "Birdy", "flutter_dash", 0x1DA1F2),
    app("instapic", "Instapic", "photo_camera", 0xE4405F),
    app("trendy", "Trendy", "videocam", 0x000000),
    AppInfo {
        id: "yellowpages",
        label: "YellowPages",
        title: "Yellow Pages",
        icon: "business",
        color: 0xFFEB3B,
    },
    app("garage", "Garage", "directions_car", 0x9E9E9E),
    app("crypto", "Crypto", "currency_bitcoin", 0xFF9800),
    app("racing", "Racing", "sports_motorsports", 0xF44336),
    app("services", "Services", "build", 0x607D8B),
    app("houses", "Houses", "home", 0x795548),
    app("meos", "MEOS", "security", 0x3F51B5),
    app("employment", "Employment", "work", 0x009688),
    app("invoices", "Invoices", "receipt", 0xFF5722),
    app("wenmo", "Wenmo", "payments", 0x4CAF50),
    app("news", "News", "newspaper", 0x607D8B),
    app("casino", "Casino", "casino", 0xF44336),
];

/// Find an app by id.
pub fn lookup(id: &str) -> Option<&'static AppInfo> {
    REGISTRY.iter().find(|app| app.id == id)
}

/// Header title for an app id.
pub fn title_for(id: &str) -> &'static str {
    lookup(id).map_or(FALLBACK_TITLE, |app| app.title)
}

/// Whether the app may be opened while locked.
pub fn bypasses_lock(id: &str) -> bool {
    LOCK_BYPASS.contains(&id)
}

/// Apps whose label contains `query`, ignoring case. An empty query matches
/// everything.
pub fn search(query: &str) -> impl Iterator<Item = &'static AppInfo> + use<> {
    let needle = query.trim().to_lowercase();
    REGISTRY.iter().filter(move |app| app.label.to_lowercase().contains(&needle))
}

/// Foreground app, its content, and recently opened apps.
#[derive(Debug, Clone, Default)]
pub struct AppSession {
    current: Option<String>,
    content: Option<String>,
    recents: VecDeque<String>,
}

impl AppSession {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Foreground app id.
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Content loaded for the foreground app, if it has arrived.
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Recently opened apps, most recent first.
    pub fn recents(&self) -> impl Iterator<Item = &str> {
        self.recents.iter().map(String::as_str)
    }

    /// Foreground `app`, discarding content of the previous one.
    pub fn open(&mut self, app: &str) {
        self.current = Some(app.to_owned());
        self.content = None;

        self.recents.retain(|id| id != app);
        self.recents.push_front(app.to_owned());
        self.recents.truncate(RECENTS_CAPACITY);
    }

    /// Clear the foreground app. Returns the app that was closed.
    pub fn close(&mut self) -> Option<String> {
        self.content = None;
        self.current.take()
    }

    /// Store content for `app`. Content for any other app is dropped and
    /// `false` returned.
    pub fn load_content(&mut self, app: &str, content: String) -> bool {
        if self.current.as_deref() != Some(app) {
            return false;
        }
        self.content = Some(content);
        true
    }
}
