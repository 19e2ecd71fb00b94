//! Capability environment interface for restriction probing.
//!
//! The ambient globals of the probed platform (`window`, `document`,
//! `history`) are modeled as an injected [`WebEnv`] rather than global
//! state, so the runner can execute against mock environments.
//!
//! Every probe entry point returns `Err(ProbeError)` when the platform
//! blocks the access; `Ok(())` means the access was permitted.

mod permissive;
mod stub;

pub use permissive::PermissiveEnv;
pub use stub::PackagedStubEnv;

use thiserror::Error;

/// The value "thrown" by a blocked probe.
///
/// Variants with a structured message (`Unavailable`, `DomException`)
/// and the stringified `Opaque` fallback all surface through
/// [`ProbeError::message`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeError {
    /// API disabled in the packaged application context.
    #[error("{api} is not available in packaged apps")]
    Unavailable { api: String },

    /// A DOM exception raised by the platform.
    #[error("{name}: DOM Exception {code}")]
    DomException { name: String, code: u16 },

    /// A raised value with no message field, stringified.
    #[error("{0}")]
    Opaque(String),
}

impl ProbeError {
    /// The message used for assertion matching.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Convenience constructor for the blocked-API error.
    pub fn unavailable(api: impl Into<String>) -> Self {
        Self::Unavailable { api: api.into() }
    }
}

/// Document mutation methods disabled in packaged apps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentMethod {
    Open,
    Clear,
    Close,
    Write,
    Writeln,
}

impl DocumentMethod {
    pub const ALL: [Self; 5] = [Self::Open, Self::Clear, Self::Close, Self::Write, Self::Writeln];

    pub fn api_name(&self) -> &'static str {
        match self {
            Self::Open => "document.open()",
            Self::Clear => "document.clear()",
            Self::Close => "document.close()",
            Self::Write => "document.write()",
            Self::Writeln => "document.writeln()",
        }
    }
}

/// Legacy document properties disabled in packaged apps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentProperty {
    All,
    BgColor,
    FgColor,
    AlinkColor,
    LinkColor,
    VlinkColor,
}

impl DocumentProperty {
    pub const ALL: [Self; 6] = [
        Self::All,
        Self::BgColor,
        Self::FgColor,
        Self::AlinkColor,
        Self::LinkColor,
        Self::VlinkColor,
    ];

    pub fn api_name(&self) -> &'static str {
        match self {
            Self::All => "document.all",
            Self::BgColor => "document.bgColor",
            Self::FgColor => "document.fgColor",
            Self::AlinkColor => "document.alinkColor",
            Self::LinkColor => "document.linkColor",
            Self::VlinkColor => "document.vlinkColor",
        }
    }
}

/// History navigation methods disabled in packaged apps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryMethod {
    Back,
    Forward,
    PushState,
    ReplaceState,
}

impl HistoryMethod {
    pub const ALL: [Self; 4] = [Self::Back, Self::Forward, Self::PushState, Self::ReplaceState];

    pub fn api_name(&self) -> &'static str {
        match self {
            Self::Back => "history.back()",
            Self::Forward => "history.forward()",
            Self::PushState => "history.pushState()",
            Self::ReplaceState => "history.replaceState()",
        }
    }
}

/// History properties disabled in packaged apps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryProperty {
    Length,
    State,
}

impl HistoryProperty {
    pub const ALL: [Self; 2] = [Self::Length, Self::State];

    pub fn api_name(&self) -> &'static str {
        match self {
            Self::Length => "history.length",
            Self::State => "history.state",
        }
    }
}

/// Window methods disabled in packaged apps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowMethod {
    Find,
    Alert,
    Confirm,
    Prompt,
}

impl WindowMethod {
    pub const ALL: [Self; 4] = [Self::Find, Self::Alert, Self::Confirm, Self::Prompt];

    pub fn api_name(&self) -> &'static str {
        match self {
            Self::Find => "window.find()",
            Self::Alert => "window.alert()",
            Self::Confirm => "window.confirm()",
            Self::Prompt => "window.prompt()",
        }
    }
}

/// Syntactic access path for a window method.
///
/// Each capability is reachable through the shared prototype method with
/// no bound receiver, the live global-object method, and the bare global
/// identifier. A restriction must hold at every entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessPath {
    PrototypeUnbound,
    InstanceBound,
    BareIdentifier,
}

impl AccessPath {
    pub const ALL: [Self; 3] = [Self::PrototypeUnbound, Self::InstanceBound, Self::BareIdentifier];
}

/// Browser chrome bars whose `visible` property is disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChromeBar {
    Locationbar,
    Menubar,
    Personalbar,
    Scrollbars,
    Statusbar,
    Toolbar,
}

impl ChromeBar {
    pub const ALL: [Self; 6] = [
        Self::Locationbar,
        Self::Menubar,
        Self::Personalbar,
        Self::Scrollbars,
        Self::Statusbar,
        Self::Toolbar,
    ];

    pub fn api_name(&self) -> &'static str {
        match self {
            Self::Locationbar => "locationbar.visible",
            Self::Menubar => "menubar.visible",
            Self::Personalbar => "personalbar.visible",
            Self::Scrollbars => "scrollbars.visible",
            Self::Statusbar => "statusbar.visible",
            Self::Toolbar => "toolbar.visible",
        }
    }
}

/// Access form for a chrome-bar visibility read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarAccess {
    Implicit,
    WindowQualified,
}

impl BarAccess {
    pub const ALL: [Self; 2] = [Self::Implicit, Self::WindowQualified];
}

/// Lifecycle events whose registration is rejected in packaged apps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockedEvent {
    Unload,
    BeforeUnload,
}

impl BlockedEvent {
    pub const ALL: [Self; 2] = [Self::Unload, Self::BeforeUnload];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Unload => "unload",
            Self::BeforeUnload => "beforeunload",
        }
    }
}

/// Mechanism used to register an event handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationMechanism {
    /// Assignment to the `on<event>` handler property.
    HandlerProperty,
    /// `addEventListener` on the live global object.
    AddEventListener,
    /// The prototype method invoked via explicit application.
    PrototypeApply,
}

impl RegistrationMechanism {
    pub const ALL: [Self; 3] =
        [Self::HandlerProperty, Self::AddEventListener, Self::PrototypeApply];
}

/// Probed surfaces of the restricted platform.
///
/// Object-safe so environments can be passed as `&dyn WebEnv`. A
/// conforming restricted environment never invokes the handler passed to
/// [`WebEnv::register_event`].
pub trait WebEnv: Send + Sync {
    /// Invoke a document mutation method.
    fn document_call(&self, method: DocumentMethod) -> Result<(), ProbeError>;

    /// Read a legacy document property.
    fn document_read(&self, property: DocumentProperty) -> Result<(), ProbeError>;

    /// Invoke a history navigation method.
    fn history_call(&self, method: HistoryMethod) -> Result<(), ProbeError>;

    /// Read a history property.
    fn history_read(&self, property: HistoryProperty) -> Result<(), ProbeError>;

    /// Invoke a window method through the given access path.
    fn window_call(&self, method: WindowMethod, path: AccessPath) -> Result<(), ProbeError>;

    /// Read a chrome bar's `visible` property.
    fn bar_visible(&self, bar: ChromeBar, access: BarAccess) -> Result<(), ProbeError>;

    /// Register a handler for a lifecycle event.
    fn register_event(
        &self,
        event: BlockedEvent,
        mechanism: RegistrationMechanism,
        handler: &mut dyn FnMut(),
    ) -> Result<(), ProbeError>;

    /// Open a network request. `synchronous = true` requests the
    /// synchronous mode that packaged apps must reject.
    fn open_xhr(&self, method: &str, url: &str, synchronous: bool) -> Result<(), ProbeError>;
}
