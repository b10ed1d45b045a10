/// CSRF token discovery for POST confirmations
///
/// Looks in three places, first hit wins:
/// 1. the `csrf-param` + `csrf-token` meta pair (parameter name and value)
/// 2. a hidden `_csrf` input
/// 3. a lone `csrf-token` meta tag
use crate::utils::non_empty;

use super::dom::Page;

pub const DEFAULT_CSRF_PARAM: &str = "_csrf";
pub const META_CSRF_PARAM: &str = "csrf-param";
pub const META_CSRF_TOKEN: &str = "csrf-token";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CsrfToken {
    pub param: String,
    pub value: String,
}

/// Find the page's anti-forgery token, if it publishes one
pub fn discover_csrf_token<P: Page + ?Sized>(page: &P) -> Option<CsrfToken> {
    let mut param = DEFAULT_CSRF_PARAM.to_string();
    let mut token = None;

    let meta_param = non_empty(page.meta_content(META_CSRF_PARAM));
    let meta_token = page.meta_content(META_CSRF_TOKEN);
    if let (Some(name), Some(value)) = (meta_param, meta_token.clone()) {
        param = name.trim().to_string();
        token = non_empty(Some(value));
    }

    if token.is_none() {
        token = non_empty(page.input_value(DEFAULT_CSRF_PARAM));
    }

    if token.is_none() {
        token = non_empty(meta_token);
    }

    token.map(|value| CsrfToken { param, value })
}
