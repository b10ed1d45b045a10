//! Event source seam
//!
//! The page grants each controller a stream of events already resolved for
//! that instance. In the browser this is a document-level delegated listener;
//! in tests it is an in-memory bus.

use super::error::ModalResult;
use super::trigger::TriggerElement;

/// A page event as seen by one modal instance
#[derive(Clone, Debug, PartialEq)]
pub enum PageEvent<E> {
    /// Click on (or inside) an element matching the trigger selector
    TriggerClick(E),
    /// Click on the overlay itself, outside the container
    OverlayClick,
    CancelClick,
    ConfirmClick,
    /// Document keydown, with the `KeyboardEvent.key` value
    KeyDown(String),
}

/// What the source should do with the native event afterwards
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventResponse {
    /// Let the event continue normally
    Propagate,
    /// Prevent the default action and stop propagation
    Consume,
}

pub type EventHandler<E> = Box<dyn FnMut(PageEvent<E>) -> EventResponse>;

/// Capability to listen for page events on behalf of one modal
pub trait EventSource {
    type Element: TriggerElement + 'static;
    /// Keeps the listeners alive; dropping it detaches them
    type Subscription;

    fn subscribe(
        &self,
        trigger_selector: &str,
        handler: EventHandler<Self::Element>,
    ) -> ModalResult<Self::Subscription>;
}
