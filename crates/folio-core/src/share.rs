//! Share buttons.
//!
//! A share button carries optional `data-share-url`, `data-share-title` and
//! `data-share-text` attributes. Missing or empty ones fall back to the page
//! location and title. The host shares natively when the platform offers it,
//! otherwise it copies the link and confirms with a toast.

use crate::toast::{ToastKind, ToastQueue};

/// Confirmation shown after the clipboard fallback succeeds.
pub const COPIED_MESSAGE: &str = "Link copied to clipboard!";

/// What gets shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRequest {
    pub url: String,
    pub title: String,
    pub text: String,
}

impl ShareRequest {
    /// Build from a button's data attributes, falling back to the page's
    /// location and title. The text has no fallback.
    pub fn from_attributes(
        url: Option<&str>,
        title: Option<&str>,
        text: Option<&str>,
        page_url: &str,
        page_title: &str,
    ) -> Self {
        fn or<'a>(attr: Option<&'a str>, fallback: &'a str) -> &'a str {
            attr.filter(|v| !v.is_empty()).unwrap_or(fallback)
        }
        Self {
            url: or(url, page_url).to_string(),
            title: or(title, page_title).to_string(),
            text: or(text, "").to_string(),
        }
    }
}

/// The step the host performs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareAction {
    /// Hand the whole request to the platform share sheet.
    Native(ShareRequest),
    /// Write this URL to the clipboard.
    Clipboard { url: String },
}

/// Pick native sharing when `native_available`, else the clipboard.
pub fn share(request: ShareRequest, native_available: bool) -> ShareAction {
    if native_available {
        tracing::debug!(url = %request.url, "share: native");
        ShareAction::Native(request)
    } else {
        tracing::debug!(url = %request.url, "share: clipboard");
        ShareAction::Clipboard { url: request.url }
    }
}

impl ShareAction {
    /// Report that the host finished the action. A completed clipboard copy
    /// shows the success toast and returns its id. A native share shows
    /// nothing, and a failed one is only logged.
    pub fn completed(&self, result: Result<(), String>, toasts: &mut ToastQueue) -> Option<u64> {
        match (self, result) {
            (ShareAction::Clipboard { .. }, Ok(())) => {
                Some(toasts.show(COPIED_MESSAGE, ToastKind::Success))
            }
            (ShareAction::Native(_), Ok(())) => None,
            (action, Err(e)) => {
                tracing::warn!(?action, error = %e, "share failed");
                None
            }
        }
    }
}
