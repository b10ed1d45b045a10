//! Icon catalog
//!
//! Maps each icon type to its Font Awesome class and its default color. The
//! same table is used when the markup is rendered and when a trigger swaps the
//! icon at runtime.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Icon shown above the modal title
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum IconType {
    #[default]
    Question,
    Warning,
    Success,
    Error,
    Info,
}

impl IconType {
    pub const ALL: [IconType; 5] = [
        IconType::Question,
        IconType::Warning,
        IconType::Success,
        IconType::Error,
        IconType::Info,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IconType::Question => "question",
            IconType::Warning => "warning",
            IconType::Success => "success",
            IconType::Error => "error",
            IconType::Info => "info",
        }
    }

    /// Parse an icon token; anything unknown falls back to `Question`
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "question" => IconType::Question,
            "warning" => IconType::Warning,
            "success" => IconType::Success,
            "error" => IconType::Error,
            "info" => IconType::Info,
            other => {
                log::debug!("Unknown icon type '{}', using question", other);
                IconType::Question
            }
        }
    }

    /// Font Awesome class list for this icon
    pub fn css_class(&self) -> &'static str {
        match self {
            IconType::Question => "fas fa-question-circle",
            IconType::Warning => "fas fa-exclamation-triangle",
            IconType::Success => "fas fa-check-circle",
            IconType::Error => "fas fa-times-circle",
            IconType::Info => "fas fa-info-circle",
        }
    }

    /// Color used when no explicit icon color is configured
    pub fn default_color(&self) -> &'static str {
        match self {
            IconType::Question => "#87adbd",
            IconType::Warning => "#f8bb86",
            IconType::Success => "#a5dc86",
            IconType::Error => "#f27474",
            IconType::Info => "#3fc3ee",
        }
    }

    /// Full class attribute of the `<i>` icon element
    pub fn element_class(&self) -> String {
        format!("{} alert-modal-icon", self.css_class())
    }
}

impl Serialize for IconType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for IconType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(IconType::parse(&s))
    }
}
