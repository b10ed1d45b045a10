//! `ModalDom` over the rendered modal subtree

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::modal::dom::{ModalDom, PendingAction};
use crate::modal::error::{ModalError, ModalResult};
use crate::modal::trigger::{parse_params, TriggerElement, ATTR_DATA_HREF, ATTR_METHOD, ATTR_PARAMS};

impl TriggerElement for Element {
    fn attribute(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }
}

pub struct WebModalDom {
    document: Document,
    root: HtmlElement,
    title: Option<Element>,
    body: Option<Element>,
    confirm: Element,
    icon: Option<HtmlElement>,
}

impl WebModalDom {
    /// Look up the modal rendered under `modal_id`
    pub fn find(document: &Document, modal_id: &str) -> ModalResult<Self> {
        let root = document
            .get_element_by_id(modal_id)
            .ok_or_else(|| ModalError::ElementNotFound(format!("#{}", modal_id)))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| ModalError::Dom(format!("#{} is not an HTML element", modal_id)))?;

        let confirm = root
            .query_selector(".alert-modal-confirm")?
            .ok_or_else(|| ModalError::ElementNotFound(format!("#{} .alert-modal-confirm", modal_id)))?;

        let icon = root
            .query_selector(".alert-modal-icon-container .alert-modal-icon")?
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());

        Ok(Self {
            document: document.clone(),
            title: root.query_selector(".alert-modal-title")?,
            body: root.query_selector(".alert-modal-body-text")?,
            confirm,
            icon,
            root,
        })
    }

    /// Overlay element of the modal
    pub fn root(&self) -> &HtmlElement {
        &self.root
    }
}

impl ModalDom for WebModalDom {
    fn set_title(&mut self, title: &str) {
        if let Some(el) = &self.title {
            el.set_text_content(Some(title));
        }
    }

    fn set_body(&mut self, body: &str) {
        if let Some(el) = &self.body {
            el.set_text_content(Some(body));
        }
    }

    fn set_confirm_label(&mut self, label: &str) {
        self.confirm.set_text_content(Some(label));
    }

    fn set_confirm_class(&mut self, class: &str) {
        self.confirm.set_class_name(class);
    }

    fn set_icon_class(&mut self, class: &str) {
        if let Some(icon) = &self.icon {
            icon.set_class_name(class);
        }
    }

    fn set_icon_color(&mut self, color: &str) {
        if let Some(icon) = &self.icon {
            icon.style().set_property("color", color).ok();
        }
    }

    fn set_pending_action(&mut self, action: &PendingAction) {
        self.confirm.set_attribute(ATTR_DATA_HREF, &action.target).ok();
        self.confirm.set_attribute(ATTR_METHOD, &action.method).ok();
        match action.params_json() {
            Some(json) => self.confirm.set_attribute(ATTR_PARAMS, &json).ok(),
            None => self.confirm.remove_attribute(ATTR_PARAMS).ok(),
        };
    }

    fn pending_action(&self) -> PendingAction {
        PendingAction {
            target: self.confirm.get_attribute(ATTR_DATA_HREF).unwrap_or_default(),
            method: self.confirm.get_attribute(ATTR_METHOD).unwrap_or_default(),
            params: parse_params(self.confirm.get_attribute(ATTR_PARAMS).as_deref()),
        }
    }

    fn set_visible(&mut self, visible: bool) {
        let display = if visible { "flex" } else { "none" };
        self.root.style().set_property("display", display).ok();

        // Lock page scrolling while the modal is open
        if let Some(body) = self.document.body() {
            if visible {
                body.style().set_property("overflow", "hidden").ok();
            } else {
                body.style().remove_property("overflow").ok();
            }
        }
    }
}
