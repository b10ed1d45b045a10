// UI Components
// Dioxus hosts for the alert modal

pub mod alert_modal_widget;

pub use alert_modal_widget::AlertModalWidget;
