//! FILENAME: app/src-tauri/src/commands.rs
// PURPOSE: Commands exposed to the front end.
// CONTEXT: Thin wrappers over the managed `Bridge`; errors cross the IPC boundary as strings.

use bridge::AppInfo;
use tauri::State;

use crate::logging::{log_enter, log_exit, log_warn};
use crate::AppState;

#[tauri::command]
pub fn greet(state: State<AppState>, name: String) -> String {
    state.bridge.greet(&name)
}

#[tauri::command]
pub fn get_app_info(state: State<AppState>) -> AppInfo {
    state.bridge.get_app_info()
}

#[tauri::command]
pub fn show_notification(
    state: State<AppState>,
    title: String,
    body: String,
) -> Result<(), String> {
    notify(&state, &title, &body)
}

/// Emit a `notification` event through the bridge held in `state`.
pub fn notify(state: &AppState, title: &str, body: &str) -> Result<(), String> {
    log_enter!("CMD", "show_notification", "title={:?}", title);

    let result = state.bridge.show_notification(title, body).map_err(|e| {
        log_warn!("CMD", "show_notification failed: {}", e);
        e.to_string()
    });

    log_exit!("CMD", "show_notification", "ok={}", result.is_ok());
    result
}
