//! Mock environment with no enforcement.
//!
//! Every probe is permitted. Used to verify the runner reports a missing
//! restriction instead of silently passing.

use super::{
    AccessPath, BarAccess, BlockedEvent, ChromeBar, DocumentMethod, DocumentProperty,
    HistoryMethod, HistoryProperty, ProbeError, RegistrationMechanism, WebEnv, WindowMethod,
};

/// Environment that allows every probed access.
#[derive(Debug, Clone, Copy, Default)]
pub struct PermissiveEnv;

impl PermissiveEnv {
    pub fn new() -> Self {
        Self
    }
}

impl WebEnv for PermissiveEnv {
    fn document_call(&self, _method: DocumentMethod) -> Result<(), ProbeError> {
        Ok(())
    }

    fn document_read(&self, _property: DocumentProperty) -> Result<(), ProbeError> {
        Ok(())
    }

    fn history_call(&self, _method: HistoryMethod) -> Result<(), ProbeError> {
        Ok(())
    }

    fn history_read(&self, _property: HistoryProperty) -> Result<(), ProbeError> {
        Ok(())
    }

    fn window_call(&self, _method: WindowMethod, _path: AccessPath) -> Result<(), ProbeError> {
        Ok(())
    }

    fn bar_visible(&self, _bar: ChromeBar, _access: BarAccess) -> Result<(), ProbeError> {
        Ok(())
    }

    fn register_event(
        &self,
        _event: BlockedEvent,
        _mechanism: RegistrationMechanism,
        _handler: &mut dyn FnMut(),
    ) -> Result<(), ProbeError> {
        // Registration succeeds; nothing dispatches the event here.
        Ok(())
    }

    fn open_xhr(&self, _method: &str, _url: &str, _synchronous: bool) -> Result<(), ProbeError> {
        Ok(())
    }
}
