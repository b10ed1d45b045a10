//! `Page` over the browser document and location

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlFormElement, HtmlInputElement, Window};

use crate::modal::dom::{Page, PostForm};
use crate::modal::error::{ModalError, ModalResult};

pub struct WebPage {
    window: Window,
    document: Document,
}

impl WebPage {
    pub fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }

    fn hidden_input(&self, name: &str, value: &str) -> ModalResult<HtmlInputElement> {
        let input = self
            .document
            .create_element("input")?
            .dyn_into::<HtmlInputElement>()
            .map_err(|_| ModalError::Dom("Failed to create input".to_string()))?;
        input.set_type("hidden");
        input.set_name(name);
        input.set_value(value);
        Ok(input)
    }
}

impl Page for WebPage {
    fn meta_content(&self, name: &str) -> Option<String> {
        self.document
            .query_selector(&format!(r#"meta[name="{}"]"#, name))
            .ok()
            .flatten()
            .and_then(|meta| meta.get_attribute("content"))
    }

    fn input_value(&self, name: &str) -> Option<String> {
        self.document
            .query_selector(&format!(r#"input[name="{}"]"#, name))
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            .map(|input| input.value())
    }

    fn navigate(&mut self, url: &str) -> ModalResult<()> {
        self.window
            .location()
            .set_href(url)
            .map_err(|e| ModalError::Navigation(format!("{:?}", e)))
    }

    fn submit_form(&mut self, form: &PostForm) -> ModalResult<()> {
        let body = self
            .document
            .body()
            .ok_or_else(|| ModalError::ElementNotFound("body".to_string()))?;

        let element = self
            .document
            .create_element("form")?
            .dyn_into::<HtmlFormElement>()
            .map_err(|_| ModalError::Dom("Failed to create form".to_string()))?;
        element.set_method("POST");
        element.set_action(&form.action);
        element.style().set_property("display", "none")?;

        for (name, value) in &form.fields {
            element.append_child(&self.hidden_input(name, value)?)?;
        }

        body.append_child(&element)?;
        log::debug!("Submitting form: {}", element.outer_html());

        element
            .submit()
            .map_err(|e| ModalError::Navigation(format!("{:?}", e)))
    }
}
