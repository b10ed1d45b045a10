/// Modal markup rendering
///
/// Produces the server-side markup for one modal instance. The instance id is
/// supplied by the host so several modals can live on the same page without
/// colliding ids or style keys.
use crate::utils::html::{attribute, class_list, encode, is_valid_attribute_name};

use super::config::ModalConfig;
use super::dom::{PendingAction, CANCEL_BASE_CLASS, CONFIRM_BASE_CLASSES};
use super::style::stylesheet;

/// Markup and stylesheet for one modal instance
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedModal {
    /// Id of the overlay element
    pub modal_id: String,
    /// Key under which the host registers `css`
    pub style_key: String,
    pub html: String,
    pub css: &'static str,
}

pub fn modal_id(instance_id: &str) -> String {
    format!("alert-modal-{}", instance_id)
}

pub fn style_key(instance_id: &str) -> String {
    format!("alert-modal-styles-{}", instance_id)
}

/// Class attribute of the confirm button for a configured extra class
pub fn confirm_button_class(extra: &str) -> String {
    class_list([CONFIRM_BASE_CLASSES, extra])
}

pub fn cancel_button_class(extra: &str) -> String {
    class_list([CANCEL_BASE_CLASS, extra])
}

/// Render the modal markup for `config`
pub fn render_modal(config: &ModalConfig, instance_id: &str) -> RenderedModal {
    let modal_id = modal_id(instance_id);
    let mut html = String::new();

    // Overlay, hidden until a trigger is clicked
    let mut overlay_class = String::from("alert-modal-overlay");
    let mut extra_attributes = String::new();
    for (name, value) in &config.modal_options {
        match name.as_str() {
            "class" => overlay_class = class_list([overlay_class.as_str(), value.as_str()]),
            "id" | "style" => log::debug!("Ignoring reserved modal option '{}'", name),
            _ if is_valid_attribute_name(name) => extra_attributes.push_str(&attribute(name, value)),
            _ => log::warn!("Skipping invalid modal option name '{}'", name),
        }
    }

    html.push_str(&format!(
        r#"<div{}{} style="display: none;"{}>"#,
        attribute("id", &modal_id),
        attribute("class", &overlay_class),
        extra_attributes
    ));
    html.push_str(&format!(
        r#"<div{}>"#,
        attribute("class", &class_list(["alert-modal-container", config.modal_size.as_class()]))
    ));
    html.push_str(r#"<div class="alert-modal-content">"#);

    if let Some(icon) = config.icon {
        html.push_str(&format!(
            r#"<div class="alert-modal-icon-container"><i{}{}></i></div>"#,
            attribute("class", &icon.element_class()),
            attribute("style", &format!("color: {};", config.resolved_icon_color()))
        ));
    }

    html.push_str(&format!(r#"<h4 class="alert-modal-title">{}</h4>"#, encode(&config.title)));
    html.push_str(&format!(
        r#"<div class="alert-modal-body"><p class="alert-modal-body-text">{}</p></div>"#,
        encode(&config.body)
    ));

    // Footer: cancel first, confirm carries the placeholder action
    let placeholder = PendingAction::placeholder();
    html.push_str(r#"<div class="alert-modal-footer">"#);
    html.push_str(&format!(
        r#"<button type="button"{} data-dismiss="modal">{}</button>"#,
        attribute("class", &cancel_button_class(&config.cancel_button_class)),
        encode(&config.cancel_button_label)
    ));
    html.push_str(&format!(
        r#"<button type="button"{}{}{}>{}</button>"#,
        attribute("class", &confirm_button_class(&config.confirm_button_class)),
        attribute("data-href", &placeholder.target),
        attribute("data-method", &placeholder.method),
        encode(&config.confirm_button_label)
    ));
    html.push_str("</div>");

    html.push_str("</div></div></div>");

    RenderedModal {
        modal_id,
        style_key: style_key(instance_id),
        html,
        css: stylesheet(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modal::config::ModalSize;
    use crate::modal::icon::IconType;

    fn config() -> ModalConfig {
        ModalConfig::new(".delete-link")
    }

    #[test]
    fn test_ids_are_keyed_by_instance() {
        let rendered = render_modal(&config(), "w0");
        assert_eq!(rendered.modal_id, "alert-modal-w0");
        assert_eq!(rendered.style_key, "alert-modal-styles-w0");
        assert!(rendered.html.starts_with(r#"<div id="alert-modal-w0" class="alert-modal-overlay" style="display: none;">"#));
        assert!(rendered.css.contains(".alert-modal-overlay"));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let config = config()
            .with_title("<script>alert(1)</script>")
            .with_body("Delete <b>all</b> & everything?")
            .with_confirm_button("<i>Yes</i>", "btn-danger")
            .with_cancel_button("No\"><img src=x>", "");
        let rendered = render_modal(&config, "w1");

        assert!(!rendered.html.contains("<script>"));
        assert!(!rendered.html.contains("<b>"));
        assert!(!rendered.html.contains("<i>Yes"));
        assert!(!rendered.html.contains("<img"));
        assert!(rendered.html.contains("&lt;script&gt;"));
        assert!(rendered.html.contains("&amp;"));
    }

    #[test]
    fn test_icon_uses_catalog_class_and_color() {
        for icon in IconType::ALL {
            let rendered = render_modal(&config().with_icon(Some(icon)), "w2");
            assert!(rendered.html.contains(&encode(&icon.element_class())));
            assert!(rendered.html.contains(&encode(&format!("color: {};", icon.default_color()))));
        }
    }

    #[test]
    fn test_explicit_icon_color_wins() {
        let config = config().with_icon(Some(IconType::Success)).with_icon_color("#000000");
        let rendered = render_modal(&config, "w3");
        assert!(rendered.html.contains(&encode("color: #000000;")));
        assert!(!rendered.html.contains(&encode(IconType::Success.default_color())));
    }

    #[test]
    fn test_no_icon_block_without_icon() {
        let rendered = render_modal(&config().with_icon(None), "w4");
        assert!(!rendered.html.contains("alert-modal-icon-container"));
    }

    #[test]
    fn test_size_class() {
        let rendered = render_modal(&config().with_size(ModalSize::ExtraLarge), "w5");
        assert!(rendered.html.contains(&encode("alert-modal-container modal-xl")));

        let fallback = ModalConfig { modal_size: ModalSize::parse("gigantic"), ..config() };
        let rendered = render_modal(&fallback, "w5");
        assert!(rendered.html.contains(&encode("alert-modal-container modal-md")));
    }

    #[test]
    fn test_confirm_button_starts_with_placeholder_action() {
        let rendered = render_modal(&config(), "w6");
        assert!(rendered.html.contains(r##"data-href="#" data-method="""##));
    }

    #[test]
    fn test_button_classes_keep_base_classes() {
        let config = config()
            .with_confirm_button("Delete", "btn-danger")
            .with_cancel_button("Keep", "btn-light");
        let rendered = render_modal(&config, "w7");
        assert!(rendered.html.contains(&encode("alert-modal-btn-confirm alert-modal-confirm btn-danger")));
        assert!(rendered.html.contains(&encode("alert-modal-btn-cancel btn-light")));
    }

    #[test]
    fn test_modal_options() {
        let config = config()
            .with_option("data-role", "confirm\"dialog")
            .with_option("class", "my-modal")
            .with_option("id", "hijack")
            .with_option("onclick=\"x\"", "y");
        let rendered = render_modal(&config, "w8");
        assert!(rendered.html.contains(&format!(r#"data-role="{}""#, encode("confirm\"dialog"))));
        assert!(rendered.html.contains(&encode("alert-modal-overlay my-modal")));
        assert!(!rendered.html.contains("hijack"));
        assert!(!rendered.html.contains("onclick"));
    }
}
