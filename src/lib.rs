//! Reusable confirmation modal for web pages
//!
//! Elements matching a trigger selector open the modal; their data attributes
//! override the configured text, icon and button. Confirming either navigates
//! to the trigger's target or submits a hidden POST form with the page's CSRF
//! token and any extra parameters.

// Modules
pub mod components;
pub mod modal;
pub mod utils;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use components::AlertModalWidget;
pub use modal::{
    render_modal, AlertModal, Dispatch, IconType, ModalConfig, ModalError, ModalResult, ModalSize,
    PendingAction, RenderedModal,
};
