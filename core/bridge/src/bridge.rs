//! FILENAME: core/bridge/src/bridge.rs
//! PURPOSE: The process-wide bridge object exposed to the front end.
//! CONTEXT: The host runtime calls the four lifecycle hooks in order
//!          (startup, DOM ready, before close, shutdown). The exposed methods
//!          may be called at any time after startup.

use once_cell::sync::OnceCell;

use crate::app_info::AppInfo;
use crate::context::HostContext;
use crate::error::BridgeError;
use crate::events::{NotificationPayload, NOTIFICATION_EVENT};

/// Format the greeting for `name`. `name` is inserted verbatim.
pub fn greet(name: &str) -> String {
    format!("Hello, {}!", name)
}

pub struct Bridge<C: HostContext> {
    /// Written once by `on_startup`, read by everything after it.
    ctx: OnceCell<C>,
}

impl<C: HostContext> Bridge<C> {
    pub fn new() -> Self {
        Bridge {
            ctx: OnceCell::new(),
        }
    }

    // ========================================================================
    // LIFECYCLE HOOKS
    // ========================================================================

    /// Store the execution context. Later calls keep the first context.
    pub fn on_startup(&self, ctx: C) {
        if self.ctx.set(ctx).is_err() {
            log::warn!("on_startup called more than once; keeping the first context");
            return;
        }
        log::info!("Bridge started");
    }

    pub fn on_dom_ready(&self, _ctx: &C) {
        log::debug!("Front end finished loading");
    }

    /// Returns `true` to veto the pending close. This shell never vetoes.
    pub fn on_before_close(&self, _ctx: &C) -> bool {
        log::debug!("Close requested, not vetoing");
        false
    }

    pub fn on_shutdown(&self, _ctx: &C) {
        log::info!("Bridge shutting down");
    }

    // ========================================================================
    // EXPOSED METHODS
    // ========================================================================

    pub fn greet(&self, name: &str) -> String {
        greet(name)
    }

    pub fn get_app_info(&self) -> AppInfo {
        AppInfo::current()
    }

    /// Emit a `notification` event carrying `{title, body}`.
    ///
    /// Fails with [`BridgeError::NotStarted`] when called before `on_startup`;
    /// nothing is emitted in that case.
    pub fn show_notification(&self, title: &str, body: &str) -> Result<(), BridgeError> {
        let ctx = self.ctx.get().ok_or(BridgeError::NotStarted)?;
        let payload = serde_json::to_value(NotificationPayload::new(title, body))
            .map_err(|e| BridgeError::Emit(e.to_string()))?;
        ctx.emit(NOTIFICATION_EVENT, payload)
            .map_err(BridgeError::Emit)
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn is_started(&self) -> bool {
        self.ctx.get().is_some()
    }

    pub fn context(&self) -> Option<&C> {
        self.ctx.get()
    }
}

impl<C: HostContext> Default for Bridge<C> {
    fn default() -> Self {
        Self::new()
    }
}
