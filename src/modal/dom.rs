//! DOM seam of the modal controller
//!
//! The controller never touches `web_sys` directly. It talks to a `ModalDom`
//! (the modal's own subtree) and a `Page` (document-wide capabilities), so the
//! whole state machine runs against in-memory fakes in unit tests.

use serde_json::Value;

use super::error::ModalResult;
use super::icon::IconType;

/// Classes always present on the confirm button
pub const CONFIRM_BASE_CLASSES: &str = "alert-modal-btn-confirm alert-modal-confirm";
/// Class always present on the cancel button
pub const CANCEL_BASE_CLASS: &str = "alert-modal-btn-cancel";

/// Targets that mean "nothing to do"
pub const PLACEHOLDER_TARGETS: [&str; 3] = ["#", "javascript:void(0)", "javascript:void(0);"];

/// The action the confirm button will execute
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct PendingAction {
    pub target: String,
    pub method: String,
    /// Extra form fields, in the order they were declared
    pub params: Vec<(String, String)>,
}

impl PendingAction {
    /// Neutral action the confirm button starts with
    pub fn placeholder() -> Self {
        Self {
            target: "#".to_string(),
            method: String::new(),
            params: Vec::new(),
        }
    }

    pub fn new(target: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            method: method.into(),
            params: Vec::new(),
        }
    }

    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((name.into(), value.into()));
        self
    }

    /// True when the target is missing or a no-op link
    pub fn is_placeholder(&self) -> bool {
        let target = self.target.trim();
        target.is_empty() || PLACEHOLDER_TARGETS.contains(&target)
    }

    pub fn is_post(&self) -> bool {
        self.method.trim().eq_ignore_ascii_case("post")
    }

    /// JSON object stored in the confirm button's `data-params`
    pub fn params_json(&self) -> Option<String> {
        if self.params.is_empty() {
            return None;
        }
        let map: serde_json::Map<String, Value> = self
            .params
            .iter()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect();
        Some(Value::Object(map).to_string())
    }
}

/// Content currently shown by the modal
#[derive(Clone, Debug, PartialEq)]
pub struct ModalContent {
    pub title: String,
    pub body: String,
    pub confirm_label: String,
    pub confirm_class: String,
    pub icon: Option<IconType>,
    pub icon_color: Option<String>,
    pub action: PendingAction,
}

/// Mutable view of one rendered modal subtree
pub trait ModalDom {
    fn set_title(&mut self, title: &str);
    fn set_body(&mut self, body: &str);
    fn set_confirm_label(&mut self, label: &str);
    /// Replace the full class attribute of the confirm button
    fn set_confirm_class(&mut self, class: &str);
    /// Replace the icon's class; no-op when the modal has no icon block
    fn set_icon_class(&mut self, class: &str);
    /// Replace the icon's inline color; no-op when the modal has no icon block
    fn set_icon_color(&mut self, color: &str);

    /// Write the pending action onto the confirm button
    fn set_pending_action(&mut self, action: &PendingAction);
    /// Read the pending action back from the confirm button
    fn pending_action(&self) -> PendingAction;

    fn set_visible(&mut self, visible: bool);
}

/// Hidden POST form built by a confirmed action
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostForm {
    pub action: String,
    /// Hidden fields, CSRF first when present
    pub fields: Vec<(String, String)>,
}

impl PostForm {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Page-wide capabilities used by the confirm action
pub trait Page {
    /// `content` of `meta[name="{name}"]`
    fn meta_content(&self, name: &str) -> Option<String>;
    /// `value` of `input[name="{name}"]`
    fn input_value(&self, name: &str) -> Option<String>;
    /// Full-page GET navigation
    fn navigate(&mut self, url: &str) -> ModalResult<()>;
    /// Append a hidden POST form and submit it
    fn submit_form(&mut self, form: &PostForm) -> ModalResult<()>;
}
