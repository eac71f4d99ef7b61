//! Keyboard accessibility helpers: modal focus trap and the skip link.

/// What the host should do with a Tab keypress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabAction {
    /// Let the platform move focus as usual.
    Default,
    /// Suppress the default and focus this element instead.
    FocusElement(usize),
}

/// Keeps Tab / Shift+Tab cycling inside a modal's focusable elements
/// (links, enabled form controls, non-negative tabindex), in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusTrap {
    focusable: usize,
}

impl FocusTrap {
    pub fn new(focusable: usize) -> Self {
        Self { focusable }
    }

    /// `active` is the index of the focused element within the modal, if
    /// focus is inside it at all.
    pub fn on_tab(&self, active: Option<usize>, shift: bool) -> TabAction {
        if self.focusable == 0 {
            return TabAction::Default;
        }
        let last = self.focusable - 1;
        match (active, shift) {
            (Some(0), true) => TabAction::FocusElement(last),
            (Some(i), false) if i == last => TabAction::FocusElement(0),
            _ => TabAction::Default,
        }
    }
}

/// Tab without Shift while nothing is focused jumps to the skip link.
pub fn focuses_skip_link(shift: bool, nothing_focused: bool, has_skip_link: bool) -> bool {
    !shift && nothing_focused && has_skip_link
}
