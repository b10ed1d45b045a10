//! Modal controller
//!
//! One controller per rendered modal. It owns the show/hide state, turns
//! trigger clicks into content updates, and carries out the confirmed action.
//!
//! ```text
//!            trigger click
//!   Hidden ─────────────────▶ Visible
//!     ▲                          │
//!     └──────────────────────────┘
//!      overlay / cancel / Escape / confirm
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use super::config::ModalConfig;
use super::dispatch::{plan_dispatch, Dispatch};
use super::dom::{ModalContent, ModalDom, Page, PendingAction};
use super::error::ModalResult;
use super::events::{EventResponse, EventSource, PageEvent};
use super::render::confirm_button_class;
use super::trigger::{extract_trigger_request, TriggerElement, TriggerRequest};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

/// Visibility plus the content currently on screen
#[derive(Clone, Debug, PartialEq)]
pub struct ModalRuntimeState {
    pub visibility: Visibility,
    pub content: ModalContent,
}

impl ModalRuntimeState {
    /// State of a freshly rendered modal
    pub fn initial(config: &ModalConfig) -> Self {
        Self {
            visibility: Visibility::Hidden,
            content: ModalContent {
                title: config.title.clone(),
                body: config.body.clone(),
                confirm_label: config.confirm_button_label.clone(),
                confirm_class: config.confirm_button_class.clone(),
                icon: config.icon,
                icon_color: config.icon.map(|_| config.resolved_icon_color()),
                action: PendingAction::placeholder(),
            },
        }
    }
}

pub struct AlertModal<D, P> {
    config: ModalConfig,
    dom: D,
    page: P,
    state: ModalRuntimeState,
}

impl<D: ModalDom, P: Page> AlertModal<D, P> {
    /// Bind a controller to an already rendered modal
    pub fn new(config: ModalConfig, dom: D, page: P) -> Self {
        let state = ModalRuntimeState::initial(&config);
        Self { config, dom, page, state }
    }

    pub fn config(&self) -> &ModalConfig {
        &self.config
    }

    pub fn state(&self) -> &ModalRuntimeState {
        &self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state.visibility == Visibility::Visible
    }

    pub fn show(&mut self) {
        self.state.visibility = Visibility::Visible;
        self.dom.set_visible(true);
    }

    pub fn hide(&mut self) {
        self.state.visibility = Visibility::Hidden;
        self.dom.set_visible(false);
    }

    /// Apply a content update; absent display fields are left as they are
    pub fn apply_content(&mut self, request: &TriggerRequest) {
        let content = &mut self.state.content;

        if let Some(title) = &request.title {
            self.dom.set_title(title);
            content.title = title.clone();
        }
        if let Some(body) = &request.body {
            self.dom.set_body(body);
            content.body = body.clone();
        }
        if let Some(label) = &request.confirm_label {
            self.dom.set_confirm_label(label);
            content.confirm_label = label.clone();
        }
        if let Some(class) = &request.confirm_class {
            self.dom.set_confirm_class(&confirm_button_class(class));
            content.confirm_class = class.clone();
        }

        // Only a modal rendered with an icon block can swap it
        if self.config.icon.is_some() {
            if let Some(icon) = request.icon {
                self.dom.set_icon_class(&icon.element_class());
                content.icon = Some(icon);
            }
            if let Some(color) = &request.icon_color {
                self.dom.set_icon_color(color);
                content.icon_color = Some(color.clone());
            }
        }

        // The pending action is always replaced so no earlier action survives
        let action = request
            .action
            .clone()
            .unwrap_or_else(PendingAction::placeholder);
        self.dom.set_pending_action(&action);
        content.action = action;
    }

    /// Hidden → Visible for a clicked trigger
    pub fn open_from_trigger<E: TriggerElement + ?Sized>(&mut self, trigger: &E) {
        let request = extract_trigger_request(trigger, &self.config);
        log::debug!("Modal trigger clicked: {:?}", request);
        self.apply_content(&request);
        self.show();
    }

    /// Carry out the confirm button's pending action
    ///
    /// The modal is hidden before the page navigates or submits.
    pub fn confirm(&mut self) -> Dispatch {
        let action = self.dom.pending_action();
        let dispatch = plan_dispatch(&action, &self.page);

        self.hide();

        let result = match &dispatch {
            Dispatch::Dismiss => Ok(()),
            Dispatch::Navigate(url) => {
                log::info!("Navigating via GET to: {}", url);
                self.page.navigate(url)
            }
            Dispatch::Submit(form) => {
                log::info!("Submitting POST request to: {}", form.action);
                self.page.submit_form(form)
            }
        };
        if let Err(e) = result {
            log::error!("Failed to dispatch confirm action: {}", e);
        }

        dispatch
    }

    /// Route one page event through the state machine
    pub fn handle_event<E: TriggerElement>(&mut self, event: PageEvent<E>) -> EventResponse {
        match event {
            PageEvent::TriggerClick(trigger) => {
                self.open_from_trigger(&trigger);
                EventResponse::Consume
            }
            PageEvent::OverlayClick | PageEvent::CancelClick => {
                if self.is_visible() {
                    self.hide();
                }
                EventResponse::Propagate
            }
            PageEvent::ConfirmClick => {
                self.confirm();
                EventResponse::Consume
            }
            PageEvent::KeyDown(key) => {
                if key == "Escape" && self.is_visible() {
                    self.hide();
                }
                EventResponse::Propagate
            }
        }
    }
}

impl<D: ModalDom + 'static, P: Page + 'static> AlertModal<D, P> {
    /// Subscribe the controller to `events`
    ///
    /// The controller moves behind `Rc<RefCell<_>>`; the returned handle keeps
    /// the listeners alive until it is dropped.
    pub fn attach<S: EventSource>(self, events: &S) -> ModalResult<AttachedModal<D, P, S::Subscription>> {
        let selector = self.config.trigger_selector.clone();
        let modal = Rc::new(RefCell::new(self));

        let handler_modal = Rc::clone(&modal);
        let subscription = events.subscribe(
            &selector,
            Box::new(move |event| match handler_modal.try_borrow_mut() {
                Ok(mut modal) => modal.handle_event(event),
                Err(_) => {
                    log::warn!("Alert modal busy, dropping re-entrant event");
                    EventResponse::Propagate
                }
            }),
        )?;

        log::debug!("Alert modal attached to '{}'", selector);
        Ok(AttachedModal { modal, subscription })
    }
}

/// A controller wired to its event source
pub struct AttachedModal<D, P, S> {
    modal: Rc<RefCell<AlertModal<D, P>>>,
    subscription: S,
}

impl<D, P, S> AttachedModal<D, P, S> {
    pub fn modal(&self) -> Rc<RefCell<AlertModal<D, P>>> {
        Rc::clone(&self.modal)
    }

    pub fn subscription(&self) -> &S {
        &self.subscription
    }
}
