//! Browser bindings for the alert modal
//!
//! `web_sys` implementations of the controller's DOM, page and event seams,
//! plus `mount` to wire a rendered modal to its controller.

pub mod dom;
pub mod events;
pub mod page;

use crate::modal::config::ModalConfig;
use crate::modal::controller::{AlertModal, AttachedModal};
use crate::modal::error::{ModalError, ModalResult};

pub use dom::WebModalDom;
pub use events::{DocumentEvents, DocumentListeners};
pub use page::WebPage;

/// A controller bound to the live document
pub type MountedModal = AttachedModal<WebModalDom, WebPage, DocumentListeners>;

/// Attach a controller to the modal rendered under `modal_id`
///
/// Call once the markup is in the document. The listeners stay registered
/// until the returned handle is dropped.
pub fn mount(config: ModalConfig, modal_id: &str) -> ModalResult<MountedModal> {
    config.validate()?;

    let window = web_sys::window().ok_or_else(|| ModalError::Dom("No window".to_string()))?;
    let document = window
        .document()
        .ok_or_else(|| ModalError::Dom("No document".to_string()))?;

    let dom = WebModalDom::find(&document, modal_id)?;
    let events = DocumentEvents::new(document.clone(), dom.root().clone().into());
    let page = WebPage::new(window, document);

    let mounted = AlertModal::new(config, dom, page).attach(&events)?;
    log::info!("Alert modal {} mounted", modal_id);
    Ok(mounted)
}
