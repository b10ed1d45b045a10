use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::modal::config::ModalConfig;
use crate::modal::render::render_modal;

#[cfg(target_arch = "wasm32")]
type Mounted = crate::web::MountedModal;
#[cfg(not(target_arch = "wasm32"))]
type Mounted = ();

/// Confirmation modal opened by page elements matching `config.trigger_selector`
///
/// Renders the modal markup and its stylesheet, then mounts the controller
/// once the markup is in the document. The configuration is read once; later
/// prop changes do not re-render a mounted modal.
#[component]
pub fn AlertModalWidget(
    /// Modal configuration
    config: ModalConfig,
    /// Instance id; a random one is generated when omitted
    id: Option<String>,
) -> Element {
    let instance_id = use_hook(|| {
        id.clone()
            .unwrap_or_else(|| uuid::Uuid::new_v4().simple().to_string())
    });
    let rendered = use_hook(|| render_modal(&config, &instance_id));

    // Controller handle, dropped (and its listeners removed) on unmount
    let mounted = use_hook(|| Rc::new(RefCell::new(None::<Mounted>)));

    #[cfg_attr(not(target_arch = "wasm32"), allow(unused_variables))]
    let mounted_for_effect = mounted.clone();
    #[cfg_attr(not(target_arch = "wasm32"), allow(unused_variables))]
    let modal_id = rendered.modal_id.clone();
    #[cfg_attr(not(target_arch = "wasm32"), allow(unused_variables))]
    let config_for_effect = config.clone();

    use_effect(move || {
        #[cfg(target_arch = "wasm32")]
        {
            if mounted_for_effect.borrow().is_some() {
                return;
            }
            match crate::web::mount(config_for_effect.clone(), &modal_id) {
                Ok(handle) => *mounted_for_effect.borrow_mut() = Some(handle),
                Err(e) => log::error!("Failed to mount alert modal {}: {}", modal_id, e),
            }
        }
    });

    use_drop(move || {
        if mounted.borrow_mut().take().is_some() {
            log::debug!("Alert modal unmounted");
        }
    });

    rsx! {
        style {
            id: "{rendered.style_key}",
            {rendered.css}
        }
        div {
            class: "alert-modal-host",
            dangerous_inner_html: "{rendered.html}",
        }
    }
}
