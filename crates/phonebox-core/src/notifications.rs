//! Notification queue.
//!
//! Notifications are immutable once queued and kept newest-first. The lock
//! screen shows a preview: the first [`PREVIEW_LEN`] entries of the same
//! queue, never a separate copy.

use std::collections::VecDeque;

use chrono::{DateTime, TimeDelta};
use phonebox_proto::NotificationPayload;

use crate::env::WallTime;

/// Number of notifications shown on the lock screen.
pub const PREVIEW_LEN: usize = 3;

/// Icon used when the host does not name one.
pub const DEFAULT_ICON: &str = "notifications";

/// A queued notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Arrival order, starting at 0.
    pub seq: u64,
    /// Material icon name.
    pub icon: String,
    /// Title line.
    pub title: String,
    /// Body text.
    pub message: String,
    /// Event time.
    pub timestamp: WallTime,
}

/// Newest-first notification list.
#[derive(Debug, Clone, Default)]
pub struct NotificationQueue {
    items: VecDeque<Notification>,
    next_seq: u64,
}

impl NotificationQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a host notification, returning the stored entry.
    ///
    /// A missing or out-of-range timestamp is replaced by `now`.
    pub fn add(&mut self, payload: NotificationPayload, now: WallTime) -> &Notification {
        let timestamp = payload
            .timestamp
            .and_then(DateTime::from_timestamp_millis)
            .map_or(now, |t| t.with_timezone(now.offset()));

        let notification = Notification {
            seq: self.next_seq,
            icon: payload.icon.filter(|i| !i.is_empty()).unwrap_or_else(|| DEFAULT_ICON.into()),
            title: payload.title,
            message: payload.message,
            timestamp,
        };
        self.next_seq += 1;
        self.items.push_front(notification);
        &self.items[0]
    }

    /// Remove everything. Returns how many notifications were dropped.
    pub fn clear(&mut self) -> usize {
        let dropped = self.items.len();
        self.items.clear();
        dropped
    }

    /// Full list, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    /// Lock-screen preview: the first `min(3, len)` entries.
    pub fn preview(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter().take(PREVIEW_LEN)
    }

    /// Most recent notification.
    pub fn latest(&self) -> Option<&Notification> {
        self.items.front()
    }

    /// Number of queued notifications.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Relative label for a notification time.
///
/// Under a minute is "just now", under an hour "{n}m ago", under a day
/// "{n}h ago", anything older the date as `M/D/YYYY` in `now`'s offset.
/// Timestamps in the future count as "just now".
pub fn format_time(timestamp: WallTime, now: WallTime) -> String {
    let elapsed = now.signed_duration_since(timestamp);
    let minutes = elapsed.num_minutes();

    if elapsed < TimeDelta::minutes(1) {
        "just now".to_owned()
    } else if minutes < 60 {
        format!("{minutes}m ago")
    } else if minutes < 1440 {
        format!("{}h ago", elapsed.num_hours())
    } else {
        timestamp.with_timezone(now.offset()).format("%-m/%-d/%Y").to_string()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{FixedOffset, TimeZone};

    use super::*;

    fn at(h: u32, m: u32, s: u32) -> WallTime {
        FixedOffset::east_opt(0).unwrap().with_ymd_and_hms(2026, 3, 7, h, m, s).unwrap()
    }

    fn payload(title: &str) -> NotificationPayload {
        NotificationPayload { title: title.into(), ..Default::default() }
    }

    #[test]
    fn newest_first_with_sequence() {
        let mut queue = NotificationQueue::new();
        queue.add(payload("a"), at(10, 0, 0));
        queue.add(payload("b"), at(10, 0, 0));

        let titles: Vec<_> = queue.iter().map(|n| (n.seq, n.title.as_str())).collect();
        assert_eq!(titles, [(1, "b"), (0, "a")]);
    }

    #[test]
    fn preview_is_prefix() {
        let mut queue = NotificationQueue::new();
        for i in 0..5 {
            queue.add(payload(&i.to_string()), at(10, 0, 0));
        }

        let preview: Vec<_> = queue.preview().map(|n| n.title.as_str()).collect();
        assert_eq!(preview, ["4", "3", "2"]);
        assert_eq!(queue.len(), 5);
    }

    #[test]
    fn defaults_icon_and_timestamp() {
        let mut queue = NotificationQueue::new();
        let n = queue.add(payload("x"), at(9, 30, 0));

        assert_eq!(n.icon, DEFAULT_ICON);
        assert_eq!(n.timestamp, at(9, 30, 0));
    }

    #[test]
    fn host_timestamp_is_kept() {
        let mut queue = NotificationQueue::new();
        let sent = at(8, 0, 0);
        let p = NotificationPayload {
            timestamp: Some(sent.timestamp_millis()),
            icon: Some("mail".into()),
            ..payload("x")
        };

        let n = queue.add(p, at(9, 0, 0));
        assert_eq!(n.timestamp, sent);
        assert_eq!(n.icon, "mail");
    }

    #[test]
    fn clear_reports_count() {
        let mut queue = NotificationQueue::new();
        queue.add(payload("a"), at(10, 0, 0));
        queue.add(payload("b"), at(10, 0, 0));

        assert_eq!(queue.clear(), 2);
        assert!(queue.is_empty());
        assert_eq!(queue.preview().count(), 0);
    }

    #[test]
    fn time_thresholds() {
        let now = at(12, 0, 0);
        assert_eq!(format_time(at(11, 59, 1), now), "just now");
        assert_eq!(format_time(at(11, 59, 0), now), "1m ago");
        assert_eq!(format_time(at(11, 1, 0), now), "59m ago");
        assert_eq!(format_time(at(11, 0, 0), now), "1h ago");
        assert_eq!(format_time(at(0, 0, 0), now), "12h ago");
        assert_eq!(format_time(at(12, 0, 30), now), "just now");

        let yesterday = now - TimeDelta::minutes(1440);
        insta::assert_snapshot!(format_time(yesterday, now), @"3/6/2026");
    }
}
