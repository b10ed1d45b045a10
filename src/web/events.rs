//! Document-level delegated listeners
//!
//! Each modal gets its own capture-phase click listener and keydown listener
//! on the document. Closures are kept in the subscription and removed when it
//! is dropped, never leaked with `Closure::forget()`.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, KeyboardEvent, Node};

use crate::modal::error::ModalResult;
use crate::modal::events::{EventHandler, EventResponse, EventSource, PageEvent};

/// Event source for one modal rooted at `modal_root`
pub struct DocumentEvents {
    document: Document,
    modal_root: Element,
}

impl DocumentEvents {
    pub fn new(document: Document, modal_root: Element) -> Self {
        Self { document, modal_root }
    }
}

/// Work out what a click means for the modal rooted at `root`
fn resolve_click(root: &Element, target: &Element, trigger_selector: &str) -> Option<PageEvent<Element>> {
    let root_node: &Node = root;
    let target_node: &Node = target;
    if target_node.is_same_node(Some(root_node)) {
        return Some(PageEvent::OverlayClick);
    }

    if root_node.contains(Some(target_node)) {
        let within = |selector: &str| {
            target
                .closest(selector)
                .ok()
                .flatten()
                .filter(|el| {
                    let node: &Node = el;
                    root_node.contains(Some(node))
                })
                .is_some()
        };
        if within(".alert-modal-btn-cancel") {
            return Some(PageEvent::CancelClick);
        }
        if within(".alert-modal-confirm") {
            return Some(PageEvent::ConfirmClick);
        }
        return None;
    }

    match target.closest(trigger_selector) {
        Ok(trigger) => trigger.map(PageEvent::TriggerClick),
        Err(e) => {
            log::error!("Invalid trigger selector '{}': {:?}", trigger_selector, e);
            None
        }
    }
}

/// Live listeners of one modal; dropping removes them from the document
pub struct DocumentListeners {
    document: Document,
    on_click: Closure<dyn FnMut(Event)>,
    on_keydown: Closure<dyn FnMut(Event)>,
}

impl Drop for DocumentListeners {
    fn drop(&mut self) {
        self.document
            .remove_event_listener_with_callback_and_bool("click", self.on_click.as_ref().unchecked_ref(), true)
            .ok();
        self.document
            .remove_event_listener_with_callback("keydown", self.on_keydown.as_ref().unchecked_ref())
            .ok();
        log::debug!("Alert modal listeners removed");
    }
}

impl EventSource for DocumentEvents {
    type Element = Element;
    type Subscription = DocumentListeners;

    fn subscribe(
        &self,
        trigger_selector: &str,
        handler: EventHandler<Element>,
    ) -> ModalResult<DocumentListeners> {
        let handler = Rc::new(RefCell::new(handler));

        let click_handler = Rc::clone(&handler);
        let root = self.modal_root.clone();
        let selector = trigger_selector.to_string();
        let on_click = Closure::wrap(Box::new(move |event: Event| {
            let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };
            let Some(page_event) = resolve_click(&root, &target, &selector) else {
                return;
            };

            let response = (&mut *click_handler.borrow_mut())(page_event);
            if response == EventResponse::Consume {
                event.prevent_default();
                event.stop_propagation();
            }
        }) as Box<dyn FnMut(Event)>);

        let key_handler = Rc::clone(&handler);
        let on_keydown = Closure::wrap(Box::new(move |event: Event| {
            if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                (&mut *key_handler.borrow_mut())(PageEvent::KeyDown(event.key()));
            }
        }) as Box<dyn FnMut(Event)>);

        // Capture phase so triggers are seen before page handlers run
        self.document
            .add_event_listener_with_callback_and_bool("click", on_click.as_ref().unchecked_ref(), true)?;
        self.document
            .add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref())?;

        Ok(DocumentListeners {
            document: self.document.clone(),
            on_click,
            on_keydown,
        })
    }
}
