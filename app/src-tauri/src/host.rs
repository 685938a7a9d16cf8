//! FILENAME: app/src-tauri/src/host.rs
// PURPOSE: Tauri's app handle as the bridge's execution context.

use bridge::HostContext;
use serde_json::Value;
use tauri::{AppHandle, Emitter, Runtime, Wry};

/// Runtime-erased context stored by the managed bridge.
pub type DynContext = Box<dyn HostContext>;

/// Wraps the `AppHandle` Tauri hands out at setup. Events are emitted to
/// every webview of the app.
pub struct TauriContext<R: Runtime = Wry> {
    handle: AppHandle<R>,
}

impl<R: Runtime> TauriContext<R> {
    pub fn new(handle: AppHandle<R>) -> Self {
        TauriContext { handle }
    }

    pub fn boxed(handle: AppHandle<R>) -> DynContext {
        Box::new(Self::new(handle))
    }
}

impl<R: Runtime> HostContext for TauriContext<R> {
    fn emit(&self, event: &str, payload: Value) -> Result<(), String> {
        self.handle.emit(event, payload).map_err(|e| e.to_string())
    }
}
