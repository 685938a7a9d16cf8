//! FILENAME: core/bridge/src/events.rs
// PURPOSE: Events the bridge emits to the front end.

use serde::{Deserialize, Serialize};

/// Name of the event the front end listens on for notifications.
pub const NOTIFICATION_EVENT: &str = "notification";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPayload {
    pub title: String,
    pub body: String,
}

impl NotificationPayload {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        NotificationPayload {
            title: title.into(),
            body: body.into(),
        }
    }
}
