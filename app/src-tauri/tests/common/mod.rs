//! FILENAME: tests/common/mod.rs
//! Test harness for Desktop App backend integration tests.

use app_lib::{configure, create_app_state, AppState};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use tauri::ipc::{CallbackFn, InvokeBody};
use tauri::test::{get_ipc_response, mock_builder, mock_context, noop_assets, MockRuntime, INVOKE_KEY};
use tauri::webview::InvokeRequest;
use tauri::{App, Listener, Manager, WebviewWindow, WebviewWindowBuilder};

/// Test harness wrapping a fresh `AppState`, outside of any Tauri app.
pub struct TestHarness {
    pub state: AppState,
}

impl TestHarness {
    /// Create a new test harness. The bridge has not been started.
    pub fn new() -> Self {
        TestHarness {
            state: create_app_state(),
        }
    }

    pub fn is_started(&self) -> bool {
        self.state.bridge.is_started()
    }
}

/// A mock-runtime app built through the same `configure` as the real shell.
/// `setup` has run, so the bridge holds the app handle.
pub struct MockShell {
    pub app: App<MockRuntime>,
    pub window: WebviewWindow<MockRuntime>,
}

impl MockShell {
    pub fn new() -> Self {
        let app = configure(mock_builder())
            .build(mock_context(noop_assets()))
            .expect("failed to build mock app");
        let window = WebviewWindowBuilder::new(&app, "main", Default::default())
            .build()
            .expect("failed to build mock window");
        MockShell { app, window }
    }

    pub fn state(&self) -> tauri::State<'_, AppState> {
        self.app.state::<AppState>()
    }

    /// Collect the JSON payload of every `event` emitted from now on.
    pub fn record(&self, event: &str) -> Arc<Mutex<Vec<Value>>> {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        self.app.listen(event, move |e| {
            let payload: Value = serde_json::from_str(e.payload()).expect("payload is JSON");
            sink.lock().unwrap().push(payload);
        });
        seen
    }

    /// Invoke `cmd` over IPC the way the front end does.
    pub fn invoke<T: serde::de::DeserializeOwned>(&self, cmd: &str, args: Value) -> Result<T, Value> {
        get_ipc_response(
            &self.window,
            InvokeRequest {
                cmd: cmd.into(),
                callback: CallbackFn(0),
                error: CallbackFn(1),
                url: "http://tauri.localhost".parse().unwrap(),
                body: InvokeBody::Json(args),
                headers: Default::default(),
                invoke_key: INVOKE_KEY.to_string(),
            },
        )
        .map(|body| body.deserialize::<T>().expect("response deserializes"))
    }
}
