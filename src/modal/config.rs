/// Per-instance modal configuration
///
/// Field names follow the widget's public properties so a host page can hand
/// over the same JSON it would have written for the template layer.
use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::{ModalError, ModalResult};
use super::icon::IconType;

pub const DEFAULT_TITLE: &str = "Confirmation";
pub const DEFAULT_BODY: &str = "Are you sure you want to proceed?";
pub const DEFAULT_CONFIRM_LABEL: &str = "Confirm";
pub const DEFAULT_CONFIRM_CLASS: &str = "alert-modal-btn-confirm";
pub const DEFAULT_CANCEL_LABEL: &str = "Cancel";
pub const DEFAULT_CANCEL_CLASS: &str = "alert-modal-btn-cancel";

/// Container width class
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ModalSize {
    Small,
    #[default]
    Medium,
    Large,
    ExtraLarge,
}

impl ModalSize {
    pub fn as_class(&self) -> &'static str {
        match self {
            ModalSize::Small => "modal-sm",
            ModalSize::Medium => "modal-md",
            ModalSize::Large => "modal-lg",
            ModalSize::ExtraLarge => "modal-xl",
        }
    }

    /// Accepts `modal-lg` and `lg` forms; unknown sizes become `Medium`
    pub fn parse(s: &str) -> Self {
        let token = s.trim().to_ascii_lowercase();
        match token.strip_prefix("modal-").unwrap_or(&token) {
            "sm" | "small" => ModalSize::Small,
            "md" | "medium" => ModalSize::Medium,
            "lg" | "large" => ModalSize::Large,
            "xl" | "extra-large" => ModalSize::ExtraLarge,
            _ => ModalSize::Medium,
        }
    }
}

impl Serialize for ModalSize {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_class())
    }
}

impl<'de> Deserialize<'de> for ModalSize {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(ModalSize::parse(&s))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModalConfig {
    /// CSS selector of the elements that open this modal
    pub trigger_selector: String,
    pub title: String,
    pub body: String,
    /// `None` renders the modal without an icon block
    #[serde(rename = "iconType")]
    pub icon: Option<IconType>,
    /// Explicit icon color, otherwise the catalog color of `icon`
    pub icon_color: Option<String>,
    pub confirm_button_label: String,
    pub confirm_button_class: String,
    pub cancel_button_label: String,
    pub cancel_button_class: String,
    pub modal_size: ModalSize,
    /// Extra HTML attributes for the overlay element
    pub modal_options: BTreeMap<String, String>,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            trigger_selector: String::new(),
            title: DEFAULT_TITLE.to_string(),
            body: DEFAULT_BODY.to_string(),
            icon: Some(IconType::Question),
            icon_color: None,
            confirm_button_label: DEFAULT_CONFIRM_LABEL.to_string(),
            confirm_button_class: DEFAULT_CONFIRM_CLASS.to_string(),
            cancel_button_label: DEFAULT_CANCEL_LABEL.to_string(),
            cancel_button_class: DEFAULT_CANCEL_CLASS.to_string(),
            modal_size: ModalSize::Medium,
            modal_options: BTreeMap::new(),
        }
    }
}

impl ModalConfig {
    pub fn new(trigger_selector: impl Into<String>) -> Self {
        Self {
            trigger_selector: trigger_selector.into(),
            ..Self::default()
        }
    }

    /// Parse a JSON configuration and validate it
    pub fn from_json(json: &str) -> ModalResult<Self> {
        let config: ModalConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ModalResult<()> {
        if self.trigger_selector.trim().is_empty() {
            return Err(ModalError::InvalidConfig("empty trigger selector".to_string()));
        }
        Ok(())
    }

    /// Icon color after applying the catalog default
    pub fn resolved_icon_color(&self) -> String {
        match (&self.icon_color, self.icon) {
            (Some(color), _) if !color.trim().is_empty() => color.clone(),
            (_, Some(icon)) => icon.default_color().to_string(),
            (_, None) => IconType::Question.default_color().to_string(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn with_icon(mut self, icon: Option<IconType>) -> Self {
        self.icon = icon;
        self
    }

    pub fn with_icon_color(mut self, color: impl Into<String>) -> Self {
        self.icon_color = Some(color.into());
        self
    }

    pub fn with_confirm_button(mut self, label: impl Into<String>, class: impl Into<String>) -> Self {
        self.confirm_button_label = label.into();
        self.confirm_button_class = class.into();
        self
    }

    pub fn with_cancel_button(mut self, label: impl Into<String>, class: impl Into<String>) -> Self {
        self.cancel_button_label = label.into();
        self.cancel_button_class = class.into();
        self
    }

    pub fn with_size(mut self, size: ModalSize) -> Self {
        self.modal_size = size;
        self
    }

    pub fn with_option(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.modal_options.insert(name.into(), value.into());
        self
    }
}
