//! Reference restricted environment.
//!
//! Every restricted surface reports the blocked error a packaged
//! application context surfaces. This is a test double for the platform,
//! not an enforcement implementation: it holds no state, so probes are
//! idempotent by construction.

use super::{
    AccessPath, BarAccess, BlockedEvent, ChromeBar, DocumentMethod, DocumentProperty,
    HistoryMethod, HistoryProperty, ProbeError, RegistrationMechanism, WebEnv, WindowMethod,
};

/// DOM exception raised for synchronous network requests.
const SYNC_XHR_EXCEPTION_NAME: &str = "INVALID_ACCESS_ERR";
const SYNC_XHR_EXCEPTION_CODE: u16 = 15;

/// Stateless environment where every restricted API is blocked.
#[derive(Debug, Clone, Copy, Default)]
pub struct PackagedStubEnv;

impl PackagedStubEnv {
    pub fn new() -> Self {
        Self
    }
}

impl WebEnv for PackagedStubEnv {
    fn document_call(&self, method: DocumentMethod) -> Result<(), ProbeError> {
        Err(ProbeError::unavailable(method.api_name()))
    }

    fn document_read(&self, property: DocumentProperty) -> Result<(), ProbeError> {
        Err(ProbeError::unavailable(property.api_name()))
    }

    fn history_call(&self, method: HistoryMethod) -> Result<(), ProbeError> {
        Err(ProbeError::unavailable(method.api_name()))
    }

    fn history_read(&self, property: HistoryProperty) -> Result<(), ProbeError> {
        Err(ProbeError::unavailable(property.api_name()))
    }

    fn window_call(&self, method: WindowMethod, _path: AccessPath) -> Result<(), ProbeError> {
        // The restriction holds regardless of how the method was reached.
        Err(ProbeError::unavailable(method.api_name()))
    }

    fn bar_visible(&self, bar: ChromeBar, _access: BarAccess) -> Result<(), ProbeError> {
        Err(ProbeError::unavailable(bar.api_name()))
    }

    fn register_event(
        &self,
        event: BlockedEvent,
        mechanism: RegistrationMechanism,
        _handler: &mut dyn FnMut(),
    ) -> Result<(), ProbeError> {
        // The handler is never invoked: registration is rejected outright.
        let api = match mechanism {
            RegistrationMechanism::HandlerProperty => format!("window.on{}", event.name()),
            RegistrationMechanism::AddEventListener | RegistrationMechanism::PrototypeApply => {
                format!("addEventListener(\"{}\")", event.name())
            }
        };
        Err(ProbeError::Unavailable { api })
    }

    fn open_xhr(&self, _method: &str, _url: &str, synchronous: bool) -> Result<(), ProbeError> {
        if synchronous {
            Err(ProbeError::DomException {
                name: SYNC_XHR_EXCEPTION_NAME.to_string(),
                code: SYNC_XHR_EXCEPTION_CODE,
            })
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocked_messages_carry_the_unavailable_marker() {
        let env = PackagedStubEnv::new();
        let err = env.document_call(DocumentMethod::Write).unwrap_err();
        assert_eq!(
            err.message(),
            "document.write() is not available in packaged apps"
        );
    }

    #[test]
    fn sync_xhr_raises_exact_dom_exception() {
        let env = PackagedStubEnv::new();
        let err = env.open_xhr("GET", "data:should not load", true).unwrap_err();
        assert_eq!(err.message(), "INVALID_ACCESS_ERR: DOM Exception 15");
    }

    #[test]
    fn async_xhr_is_permitted() {
        let env = PackagedStubEnv::new();
        assert!(env.open_xhr("GET", "data:ok", false).is_ok());
    }

    #[test]
    fn event_registration_never_invokes_handler() {
        let env = PackagedStubEnv::new();
        let mut invoked = false;
        let mut handler = || invoked = true;
        for event in BlockedEvent::ALL {
            for mechanism in RegistrationMechanism::ALL {
                assert!(env.register_event(event, mechanism, &mut handler).is_err());
            }
        }
        assert!(!invoked);
    }
}
