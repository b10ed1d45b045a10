#![allow(non_snake_case)]

use alert_modal::{AlertModalWidget, IconType, ModalConfig, ModalSize};
use dioxus::prelude::*;

fn main() {
    // Initialize panic hook for better error messages in browser console
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    }

    log::info!("Starting alert modal demo");

    // Launch the Dioxus web app
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let delete_config = ModalConfig::new(".js-confirm-delete")
        .with_title("Delete item?")
        .with_body("This cannot be undone.")
        .with_icon(Some(IconType::Warning))
        .with_confirm_button("Delete", "btn-danger")
        .with_option("data-role", "delete-confirmation");

    let archive_config = ModalConfig::new(".js-confirm-archive")
        .with_title("Archive item?")
        .with_icon(Some(IconType::Info))
        .with_confirm_button("Archive", "btn-primary")
        .with_size(ModalSize::Small);

    rsx! {
        document::Meta { name: "csrf-param", content: "_csrf" }
        document::Meta { name: "csrf-token", content: "demo-csrf-token" }
        document::Link {
            rel: "stylesheet",
            href: "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css",
        }

        main {
            h1 { "Alert modal demo" }

            ul {
                li {
                    a {
                        class: "js-confirm-delete",
                        href: "/items/5/delete",
                        "data-method": "post",
                        "data-params": r#"{{"reason":"spam"}}"#,
                        "data-alert-modal-body": "Delete item 5 and all of its comments?",
                        "Delete item 5 (POST)"
                    }
                }
                li {
                    a {
                        class: "js-confirm-delete",
                        href: "#",
                        "data-href": "/items/6/delete",
                        "data-confirm": "Legacy confirm text for item 6",
                        "data-confirm-label": "Remove",
                        "data-method": "post",
                        "Delete item 6 (legacy attributes)"
                    }
                }
                li {
                    button {
                        class: "js-confirm-archive",
                        "data-href": "/items/5/archive",
                        "data-alert-modal-icon": "success",
                        "data-alert-modal-confirm-class": "btn-success",
                        span { "Archive item 5 (GET)" }
                    }
                }
            }
        }

        AlertModalWidget { config: delete_config }
        AlertModalWidget { config: archive_config, id: "archive".to_string() }
    }
}
