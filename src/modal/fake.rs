//! In-memory DOM, page and event bus for controller tests

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use super::config::ModalConfig;
use super::dom::{ModalDom, Page, PendingAction, PostForm};
use super::error::{ModalError, ModalResult};
use super::events::{EventHandler, EventResponse, EventSource, PageEvent};
use super::render::confirm_button_class;
use super::trigger::{parse_params, TriggerElement};

/// Page element with classes, attributes and an optional parent
#[derive(Clone, Debug, PartialEq)]
pub struct FakeElement {
    tag: String,
    classes: Vec<String>,
    attrs: Vec<(String, String)>,
    parent: Option<Rc<FakeElement>>,
}

impl FakeElement {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            classes: Vec::new(),
            attrs: Vec::new(),
            parent: None,
        }
    }

    pub fn class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.push((name.to_string(), value.to_string()));
        self
    }

    pub fn child_of(mut self, parent: &FakeElement) -> Self {
        self.parent = Some(Rc::new(parent.clone()));
        self
    }

    /// Supports `.class`, `[attr]` and `tag`, comma separated
    pub fn matches(&self, selector: &str) -> bool {
        selector.split(',').map(str::trim).any(|part| {
            if let Some(class) = part.strip_prefix('.') {
                self.classes.iter().any(|c| c == class)
            } else if let Some(attr) = part.strip_prefix('[').and_then(|p| p.strip_suffix(']')) {
                self.attrs.iter().any(|(name, _)| name == attr)
            } else {
                !part.is_empty() && self.tag == part
            }
        })
    }

    pub fn closest(&self, selector: &str) -> Option<FakeElement> {
        if self.matches(selector) {
            return Some(self.clone());
        }
        self.parent.as_ref().and_then(|parent| parent.closest(selector))
    }
}

impl TriggerElement for FakeElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.attrs
            .iter()
            .rev()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.clone())
    }
}

/// Everything a rendered modal shows, as plain strings
#[derive(Clone, Debug, PartialEq, Default)]
pub struct FakeModalState {
    pub title: String,
    pub body: String,
    pub confirm_label: String,
    pub confirm_class: String,
    pub icon_class: Option<String>,
    pub icon_color: Option<String>,
    pub data_href: String,
    pub data_method: String,
    pub data_params: Option<String>,
    pub visible: bool,
    pub writes: usize,
    pub visibility_changes: usize,
}

/// Shared handle so tests can inspect a DOM the controller owns
#[derive(Clone, Debug, Default)]
pub struct FakeModalDom {
    state: Rc<RefCell<FakeModalState>>,
}

impl FakeModalDom {
    /// DOM as the renderer would produce it for `config`
    pub fn from_config(config: &ModalConfig) -> Self {
        let placeholder = PendingAction::placeholder();
        let state = FakeModalState {
            title: config.title.clone(),
            body: config.body.clone(),
            confirm_label: config.confirm_button_label.clone(),
            confirm_class: confirm_button_class(&config.confirm_button_class),
            icon_class: config.icon.map(|icon| icon.element_class()),
            icon_color: config.icon.map(|_| config.resolved_icon_color()),
            data_href: placeholder.target,
            data_method: placeholder.method,
            data_params: None,
            ..FakeModalState::default()
        };
        Self {
            state: Rc::new(RefCell::new(state)),
        }
    }

    pub fn snapshot(&self) -> FakeModalState {
        self.state.borrow().clone()
    }

    pub fn visible(&self) -> bool {
        self.state.borrow().visible
    }

    pub fn title(&self) -> String {
        self.state.borrow().title.clone()
    }

    pub fn body(&self) -> String {
        self.state.borrow().body.clone()
    }

    pub fn confirm_class(&self) -> String {
        self.state.borrow().confirm_class.clone()
    }

    pub fn icon_class(&self) -> Option<String> {
        self.state.borrow().icon_class.clone()
    }

    pub fn icon_color(&self) -> Option<String> {
        self.state.borrow().icon_color.clone()
    }

    pub fn data_params(&self) -> Option<String> {
        self.state.borrow().data_params.clone()
    }

    pub fn writes(&self) -> usize {
        self.state.borrow().writes
    }

    pub fn visibility_changes(&self) -> usize {
        self.state.borrow().visibility_changes
    }

    /// Change the title behind the controller's back
    pub fn set_title_directly(&self, title: &str) {
        self.state.borrow_mut().title = title.to_string();
    }

    /// Rewrite the confirm button attributes behind the controller's back
    pub fn set_pending_action_directly(&self, action: PendingAction) {
        let mut state = self.state.borrow_mut();
        state.data_href = action.target.clone();
        state.data_method = action.method.clone();
        state.data_params = action.params_json();
    }

    fn write(&self, f: impl FnOnce(&mut FakeModalState)) {
        let mut state = self.state.borrow_mut();
        f(&mut state);
        state.writes += 1;
    }
}

impl ModalDom for FakeModalDom {
    fn set_title(&mut self, title: &str) {
        self.write(|s| s.title = title.to_string());
    }

    fn set_body(&mut self, body: &str) {
        self.write(|s| s.body = body.to_string());
    }

    fn set_confirm_label(&mut self, label: &str) {
        self.write(|s| s.confirm_label = label.to_string());
    }

    fn set_confirm_class(&mut self, class: &str) {
        self.write(|s| s.confirm_class = class.to_string());
    }

    fn set_icon_class(&mut self, class: &str) {
        self.write(|s| {
            if s.icon_class.is_some() {
                s.icon_class = Some(class.to_string());
            }
        });
    }

    fn set_icon_color(&mut self, color: &str) {
        self.write(|s| {
            if s.icon_class.is_some() {
                s.icon_color = Some(color.to_string());
            }
        });
    }

    fn set_pending_action(&mut self, action: &PendingAction) {
        self.write(|s| {
            s.data_href = action.target.clone();
            s.data_method = action.method.clone();
            s.data_params = action.params_json();
        });
    }

    fn pending_action(&self) -> PendingAction {
        let state = self.state.borrow();
        PendingAction {
            target: state.data_href.clone(),
            method: state.data_method.clone(),
            params: parse_params(state.data_params.as_deref()),
        }
    }

    fn set_visible(&mut self, visible: bool) {
        self.write(|s| {
            s.visible = visible;
            s.visibility_changes += 1;
        });
    }
}

/// Side effect requested from the page, with the modal's visibility at that moment
#[derive(Clone, Debug, PartialEq)]
pub enum PageCall {
    Navigate { url: String, modal_visible: Option<bool> },
    Submit { form: PostForm, modal_visible: Option<bool> },
}

#[derive(Clone, Debug, Default)]
pub struct FakePage {
    metas: HashMap<String, String>,
    inputs: HashMap<String, String>,
    calls: Rc<RefCell<Vec<PageCall>>>,
    observed: Option<FakeModalDom>,
    failing: bool,
}

impl FakePage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn meta(mut self, name: &str, content: &str) -> Self {
        self.metas.insert(name.to_string(), content.to_string());
        self
    }

    pub fn input(mut self, name: &str, value: &str) -> Self {
        self.inputs.insert(name.to_string(), value.to_string());
        self
    }

    /// Record the visibility of `dom` whenever a side effect happens
    pub fn observe(mut self, dom: &FakeModalDom) -> Self {
        self.observed = Some(dom.clone());
        self
    }

    /// Reject every navigation and submission
    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    pub fn calls(&self) -> Vec<PageCall> {
        self.calls.borrow().clone()
    }

    fn modal_visible(&self) -> Option<bool> {
        self.observed.as_ref().map(FakeModalDom::visible)
    }
}

impl Page for FakePage {
    fn meta_content(&self, name: &str) -> Option<String> {
        self.metas.get(name).cloned()
    }

    fn input_value(&self, name: &str) -> Option<String> {
        self.inputs.get(name).cloned()
    }

    fn navigate(&mut self, url: &str) -> ModalResult<()> {
        if self.failing {
            return Err(ModalError::Navigation(format!("blocked: {}", url)));
        }
        let modal_visible = self.modal_visible();
        self.calls.borrow_mut().push(PageCall::Navigate {
            url: url.to_string(),
            modal_visible,
        });
        Ok(())
    }

    fn submit_form(&mut self, form: &PostForm) -> ModalResult<()> {
        if self.failing {
            return Err(ModalError::Navigation(format!("blocked: {}", form.action)));
        }
        let modal_visible = self.modal_visible();
        self.calls.borrow_mut().push(PageCall::Submit {
            form: form.clone(),
            modal_visible,
        });
        Ok(())
    }
}

struct Listener {
    id: usize,
    selector: String,
    handler: EventHandler<FakeElement>,
}

/// Document-level event bus shared by every modal under test
#[derive(Clone, Default)]
pub struct FakeEventBus {
    listeners: Rc<RefCell<Vec<Listener>>>,
    next_id: Rc<Cell<usize>>,
}

pub struct FakeSubscription {
    id: usize,
    listeners: Weak<RefCell<Vec<Listener>>>,
}

impl FakeSubscription {
    pub fn id(&self) -> usize {
        self.id
    }
}

impl Drop for FakeSubscription {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners.borrow_mut().retain(|l| l.id != self.id);
        }
    }
}

impl FakeEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Delegated click: every listener whose selector matches the target or
    /// one of its ancestors gets a trigger click
    pub fn click(&self, target: &FakeElement) -> Vec<EventResponse> {
        let mut responses = Vec::new();
        for listener in self.listeners.borrow_mut().iter_mut() {
            if let Some(trigger) = target.closest(&listener.selector) {
                responses.push((listener.handler)(PageEvent::TriggerClick(trigger)));
            }
        }
        responses
    }

    pub fn key_down(&self, key: &str) -> Vec<EventResponse> {
        self.listeners
            .borrow_mut()
            .iter_mut()
            .map(|listener| (listener.handler)(PageEvent::KeyDown(key.to_string())))
            .collect()
    }

    pub fn overlay(&self, id: usize) -> Option<EventResponse> {
        self.emit_to(id, PageEvent::OverlayClick)
    }

    pub fn cancel(&self, id: usize) -> Option<EventResponse> {
        self.emit_to(id, PageEvent::CancelClick)
    }

    pub fn confirm(&self, id: usize) -> Option<EventResponse> {
        self.emit_to(id, PageEvent::ConfirmClick)
    }

    fn emit_to(&self, id: usize, event: PageEvent<FakeElement>) -> Option<EventResponse> {
        self.listeners
            .borrow_mut()
            .iter_mut()
            .find(|l| l.id == id)
            .map(|listener| (listener.handler)(event))
    }
}

impl EventSource for FakeEventBus {
    type Element = FakeElement;
    type Subscription = FakeSubscription;

    fn subscribe(
        &self,
        trigger_selector: &str,
        handler: EventHandler<FakeElement>,
    ) -> ModalResult<FakeSubscription> {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.listeners.borrow_mut().push(Listener {
            id,
            selector: trigger_selector.to_string(),
            handler,
        });
        Ok(FakeSubscription {
            id,
            listeners: Rc::downgrade(&self.listeners),
        })
    }
}
