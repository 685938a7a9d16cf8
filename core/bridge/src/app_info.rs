//! FILENAME: core/bridge/src/app_info.rs
// PURPOSE: Static application information returned to the front end.

use serde::{Deserialize, Serialize};

pub const APP_NAME: &str = "Desktop App";
pub const APP_VERSION: &str = "0.1.0";
pub const APP_PLATFORM: &str = "desktop";

/// Serializes as a flat `{"name", "version", "platform"}` string map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppInfo {
    pub name: String,
    pub version: String,
    pub platform: String,
}

impl AppInfo {
    pub fn current() -> Self {
        AppInfo {
            name: APP_NAME.to_string(),
            version: APP_VERSION.to_string(),
            platform: APP_PLATFORM.to_string(),
        }
    }
}

impl Default for AppInfo {
    fn default() -> Self {
        Self::current()
    }
}
