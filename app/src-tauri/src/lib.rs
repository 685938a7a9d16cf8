//! FILENAME: app/src-tauri/src/lib.rs
// PURPOSE: Main library entry point (Tauri Bridge).
// CONTEXT: Owns the single `Bridge` instance and wires its lifecycle hooks
//          into Tauri's builder callbacks.

use bridge::Bridge;
use tauri::webview::PageLoadEvent;
use tauri::{AppHandle, Manager, RunEvent, Runtime, WindowEvent};

pub mod commands;
pub mod host;
pub mod logging;

pub use bridge::{AppInfo, BridgeError, NotificationPayload, NOTIFICATION_EVENT};
pub use host::{DynContext, TauriContext};
pub use logging::{init_log_file, get_log_path, next_seq, write_log};


// ============================================================================
// APPLICATION STATE
// ============================================================================

pub struct AppState {
    /// The one bridge the front end talks to. Its context is set in `setup`.
    pub bridge: Bridge<DynContext>,
}

pub fn create_app_state() -> AppState {
    log_info!("SYS", "Creating AppState");
    AppState {
        bridge: Bridge::new(),
    }
}

// ============================================================================
// TAURI APP ENTRY
// ============================================================================

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    match init_log_file() {
        Ok(path) => {
            eprintln!("[LOG_INIT] SUCCESS - Log file: {:?}", path);
            log_info!("SYS", "Tauri backend starting, log={}", path.display());
        }
        Err(e) => {
            eprintln!("[LOG_INIT] FAILED: {}", e);
            eprintln!("[LOG_INIT] Continuing with console-only logging");
        }
    }

    if let Err(e) = logging::install_log_bridge(log::LevelFilter::Debug) {
        log_warn!("SYS", "log facade already installed: {}", e);
    }

    if let Err(e) = build_and_run() {
        log_error!("SYS", "Application failed to start: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn build_and_run() -> Result<(), tauri::Error> {
    let app = configure(tauri::Builder::default()).build(tauri::generate_context!())?;

    app.run(|handle, event| match event {
        RunEvent::ExitRequested { api, .. } => {
            if close_vetoed(handle) {
                log_info!("SYS", "Exit vetoed");
                api.prevent_exit();
            }
        }
        RunEvent::Exit => {
            let state = handle.state::<AppState>();
            state.bridge.on_shutdown(&TauriContext::boxed(handle.clone()));
        }
        _ => {}
    });

    Ok(())
}

/// Register managed state, lifecycle hooks and commands on `builder`.
pub fn configure<R: Runtime>(builder: tauri::Builder<R>) -> tauri::Builder<R> {
    builder
        .manage(create_app_state())
        .setup(|app| {
            let state = app.state::<AppState>();
            state.bridge.on_startup(TauriContext::boxed(app.handle().clone()));
            Ok(())
        })
        .on_page_load(|webview, payload| {
            if matches!(payload.event(), PageLoadEvent::Finished) {
                let state = webview.state::<AppState>();
                state
                    .bridge
                    .on_dom_ready(&TauriContext::boxed(webview.app_handle().clone()));
            }
        })
        .on_window_event(|window, event| {
            if let WindowEvent::CloseRequested { api, .. } = event {
                if close_vetoed(window.app_handle()) {
                    log_info!("SYS", "Close of window '{}' vetoed", window.label());
                    api.prevent_close();
                }
            }
        })
        .invoke_handler(tauri::generate_handler![
            // Bridge commands
            commands::greet,
            commands::get_app_info,
            commands::show_notification,
            // Logging commands
            logging::get_next_seq,
            logging::log_frontend_atomic,
        ])
}

/// Ask the bridge whether a pending window close or app exit should be cancelled.
pub fn close_vetoed<R: Runtime>(handle: &AppHandle<R>) -> bool {
    let state = handle.state::<AppState>();
    state.bridge.on_before_close(&TauriContext::boxed(handle.clone()))
}
