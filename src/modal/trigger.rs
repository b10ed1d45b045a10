//! Trigger data extraction
//!
//! A trigger is any page element matching the configured selector. Its
//! attributes override the configured modal content for one opening. Older
//! markup used `data-confirm` / `data-confirm-label`; those aliases are folded
//! into the same precedence chain as the `data-alert-modal-*` attributes.

use serde_json::Value;

use crate::utils::{decode_url, non_empty};

use super::config::ModalConfig;
use super::dom::PendingAction;
use super::icon::IconType;

pub const ATTR_HREF: &str = "href";
pub const ATTR_DATA_HREF: &str = "data-href";
pub const ATTR_TITLE: &str = "data-alert-modal-title";
pub const ATTR_BODY: &str = "data-alert-modal-body";
pub const ATTR_LEGACY_BODY: &str = "data-confirm";
pub const ATTR_CONFIRM_LABEL: &str = "data-alert-modal-confirm-label";
pub const ATTR_LEGACY_CONFIRM_LABEL: &str = "data-confirm-label";
pub const ATTR_CONFIRM_CLASS: &str = "data-alert-modal-confirm-class";
pub const ATTR_ICON: &str = "data-alert-modal-icon";
pub const ATTR_ICON_COLOR: &str = "data-alert-modal-icon-color";
pub const ATTR_METHOD: &str = "data-method";
pub const ATTR_PARAMS: &str = "data-params";

/// Read access to a clicked trigger element
pub trait TriggerElement {
    fn attribute(&self, name: &str) -> Option<String>;
}

/// Content update derived from a trigger; `None` fields keep the current DOM
#[derive(Clone, Debug, PartialEq, Default)]
pub struct TriggerRequest {
    pub title: Option<String>,
    pub body: Option<String>,
    pub confirm_label: Option<String>,
    pub confirm_class: Option<String>,
    pub icon: Option<IconType>,
    pub icon_color: Option<String>,
    /// `None` resets the confirm button to the placeholder action
    pub action: Option<PendingAction>,
}

/// First non-empty attribute among `names`
fn first_attribute<E: TriggerElement + ?Sized>(element: &E, names: &[&str]) -> Option<String> {
    names
        .iter()
        .find_map(|name| non_empty(element.attribute(name)))
}

/// Resolve the trigger's target URL (`href`, then `data-href`)
pub fn trigger_target<E: TriggerElement + ?Sized>(element: &E) -> Option<String> {
    let href = non_empty(element.attribute(ATTR_HREF)).filter(|h| h.trim() != "#");
    href.or_else(|| non_empty(element.attribute(ATTR_DATA_HREF)))
        .map(|raw| decode_url(raw.trim()))
}

/// Parse the JSON object of extra form fields
///
/// Missing or malformed input yields no parameters; it never aborts the
/// handler.
pub fn parse_params(raw: Option<&str>) -> Vec<(String, String)> {
    let raw = match raw.map(str::trim) {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Vec::new(),
    };

    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => map
            .into_iter()
            .map(|(key, value)| (key, param_value(value)))
            .collect(),
        Ok(other) => {
            log::warn!("Ignoring data-params that is not a JSON object: {}", other);
            Vec::new()
        }
        Err(e) => {
            log::warn!("Failed to parse data-params: {}", e);
            Vec::new()
        }
    }
}

/// Form value of a JSON parameter
fn param_value(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        nested => nested.to_string(),
    }
}

/// Build the request for a clicked trigger, falling back to `config`
pub fn extract_trigger_request<E: TriggerElement + ?Sized>(
    element: &E,
    config: &ModalConfig,
) -> TriggerRequest {
    let title = first_attribute(element, &[ATTR_TITLE]).unwrap_or_else(|| config.title.clone());
    let body = first_attribute(element, &[ATTR_BODY, ATTR_LEGACY_BODY])
        .unwrap_or_else(|| config.body.clone());
    let confirm_label = first_attribute(element, &[ATTR_CONFIRM_LABEL, ATTR_LEGACY_CONFIRM_LABEL])
        .unwrap_or_else(|| config.confirm_button_label.clone());
    let confirm_class = first_attribute(element, &[ATTR_CONFIRM_CLASS])
        .unwrap_or_else(|| config.confirm_button_class.clone());

    let icon = first_attribute(element, &[ATTR_ICON])
        .map(|token| IconType::parse(&token))
        .or(config.icon);
    // Falls back to the widget's default color, not the swapped icon's
    let icon_color = first_attribute(element, &[ATTR_ICON_COLOR])
        .or_else(|| icon.map(|_| config.resolved_icon_color()));

    let action = match trigger_target(element) {
        Some(target) => Some(PendingAction {
            target,
            method: non_empty(element.attribute(ATTR_METHOD))
                .map(|m| m.trim().to_string())
                .unwrap_or_default(),
            params: parse_params(element.attribute(ATTR_PARAMS).as_deref()),
        }),
        None => {
            log::warn!("No valid href found for modal trigger");
            None
        }
    };

    TriggerRequest {
        title: Some(title),
        body: Some(body),
        confirm_label: Some(confirm_label),
        confirm_class: Some(confirm_class),
        icon,
        icon_color,
        action,
    }
}
