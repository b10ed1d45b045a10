/// HTML helpers for the modal markup
///
/// Every piece of user-supplied text goes through `encode` before it reaches
/// the markup. Escaping is delegated to ammonia's text cleaner, which also
/// neutralizes quotes so the result is safe inside attribute values.

/// Escape text for use in element content or a quoted attribute value
pub fn encode(text: &str) -> String {
    ammonia::clean_text(text)
}

/// Join class names, skipping empty entries and duplicates
pub fn class_list<'a>(classes: impl IntoIterator<Item = &'a str>) -> String {
    let mut seen: Vec<&str> = Vec::new();
    for class in classes.into_iter().flat_map(str::split_whitespace) {
        if !seen.contains(&class) {
            seen.push(class);
        }
    }
    seen.join(" ")
}

/// Render a single ` name="value"` attribute with an escaped value
pub fn attribute(name: &str, value: &str) -> String {
    format!(r#" {}="{}""#, name, encode(value))
}

/// Attribute names we accept from configuration
pub fn is_valid_attribute_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == ':')
}
