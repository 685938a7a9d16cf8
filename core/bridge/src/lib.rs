//! FILENAME: core/bridge/src/lib.rs
//! PURPOSE: Main library entry point for the front-end bridge.
//! CONTEXT: Host-agnostic. The Tauri shell wraps its app handle in a
//!          `HostContext` and drives the lifecycle hooks on `Bridge`.

pub mod app_info;
pub mod bridge;
pub mod context;
pub mod error;
pub mod events;

pub use app_info::{AppInfo, APP_NAME, APP_PLATFORM, APP_VERSION};
pub use bridge::{greet, Bridge};
pub use context::HostContext;
pub use error::BridgeError;
pub use events::{NotificationPayload, NOTIFICATION_EVENT};
