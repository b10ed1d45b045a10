// Alert modal core
// Rendering, trigger extraction and the controller state machine. Nothing in
// here depends on a browser; see `crate::web` for the web_sys bindings.

pub mod config;
pub mod controller;
pub mod csrf;
pub mod dispatch;
pub mod dom;
pub mod error;
pub mod events;
pub mod icon;
pub mod render;
pub mod style;
pub mod trigger;

#[cfg(test)]
pub(crate) mod fake;

pub use config::{ModalConfig, ModalSize};
pub use controller::{AlertModal, AttachedModal, ModalRuntimeState, Visibility};
pub use csrf::{discover_csrf_token, CsrfToken};
pub use dispatch::{plan_dispatch, Dispatch};
pub use dom::{ModalContent, ModalDom, Page, PendingAction, PostForm};
pub use error::{ModalError, ModalResult};
pub use events::{EventHandler, EventResponse, EventSource, PageEvent};
pub use icon::IconType;
pub use render::{render_modal, RenderedModal};
pub use style::stylesheet;
pub use trigger::{extract_trigger_request, TriggerElement, TriggerRequest};
