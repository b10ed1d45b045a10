/// Confirm action planning
///
/// Turns the confirm button's pending action into what the page should do.
/// Planning is pure; the controller hides the modal before carrying out the
/// plan.
use super::csrf::discover_csrf_token;
use super::dom::{Page, PendingAction, PostForm};

/// What a confirmed action resolves to
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// Placeholder target: only close the modal
    Dismiss,
    /// GET navigation to the target
    Navigate(String),
    /// Hidden POST form submission
    Submit(PostForm),
}

/// Plan the confirmed action against the page's CSRF data
pub fn plan_dispatch<P: Page + ?Sized>(action: &PendingAction, page: &P) -> Dispatch {
    if action.is_placeholder() {
        log::debug!("No valid href on confirm button, closing modal");
        return Dispatch::Dismiss;
    }

    let target = action.target.trim().to_string();
    if !action.is_post() {
        return Dispatch::Navigate(target);
    }

    let mut fields = Vec::with_capacity(action.params.len() + 1);
    match discover_csrf_token(page) {
        Some(token) => fields.push((token.param, token.value)),
        None => log::warn!("No CSRF token found! POST request to {} may fail.", target),
    }
    fields.extend(action.params.iter().cloned());

    Dispatch::Submit(PostForm { action: target, fields })
}
