//! FILENAME: core/bridge/src/context.rs
// PURPOSE: The execution-context seam between the bridge and its host runtime.

use serde_json::Value;

/// Opaque handle issued by the host runtime at startup.
///
/// The bridge never inspects it; it only stores it and hands it back when it
/// needs the host to do something on its behalf. Implementations must be
/// `Send + Sync` because the host keeps the bridge in shared managed state.
pub trait HostContext: Send + Sync {
    /// Emit a named event to the front end with a JSON payload.
    fn emit(&self, event: &str, payload: Value) -> Result<(), String>;
}

impl<T: HostContext + ?Sized> HostContext for Box<T> {
    fn emit(&self, event: &str, payload: Value) -> Result<(), String> {
        (**self).emit(event, payload)
    }
}
