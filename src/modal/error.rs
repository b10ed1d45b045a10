//! Error types for the alert modal
//!
//! Most failure paths of the modal are soft (bad trigger data, missing CSRF
//! token) and only get logged. The errors here cover the hard ones: a mount
//! that cannot find its DOM, an invalid configuration, or a browser call that
//! refused to navigate.

use std::fmt;

/// Alert modal error type
#[derive(Debug, Clone, PartialEq)]
pub enum ModalError {
    /// A required element was not found (selector or id)
    ElementNotFound(String),
    /// A DOM call failed
    Dom(String),
    /// The configuration could not be used
    InvalidConfig(String),
    /// Navigation or form submission was rejected by the page
    Navigation(String),
}

impl fmt::Display for ModalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ElementNotFound(what) => write!(f, "Element not found: {}", what),
            Self::Dom(msg) => write!(f, "DOM error: {}", msg),
            Self::InvalidConfig(msg) => write!(f, "Invalid modal configuration: {}", msg),
            Self::Navigation(msg) => write!(f, "Navigation failed: {}", msg),
        }
    }
}

impl std::error::Error for ModalError {}

impl From<serde_json::Error> for ModalError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidConfig(err.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for ModalError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Dom(format!("{:?}", value))
    }
}

/// Result type alias for modal operations
pub type ModalResult<T> = Result<T, ModalError>;
