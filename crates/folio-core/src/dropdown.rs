//! Search dropdown: suggestion list state machine with keyboard traversal.
//!
//! [`DropdownController`] owns the dropdown state and translates input,
//! keyboard and pointer events into calls on two injected collaborators:
//!
//! - a [`Renderer`] that draws (or clears) the suggestion rows and moves the
//!   visual focus, and
//! - a [`Navigator`] that changes the current location.
//!
//! Neither collaborator can fail, and no operation here can either: an empty
//! result set is a valid state rendered as a placeholder row.
//!
//! # Blur handling
//!
//! Losing focus on the input does not close the list immediately, because a
//! click on a row arrives *after* the blur. [`DropdownController::on_blur_input`]
//! instead arms a pending close and hands back a [`CloseToken`]. The host fires
//! it after its grace delay with [`DropdownController::fire_pending_close`];
//! activating a row, clicking inside the container or focusing the input again
//! cancels it first, so the outcome does not depend on timing.

use crate::{
    search::{self, SearchIndex, DISPLAY_LIMIT, MIN_QUERY_CHARS},
    types::{NavTarget, SearchEntry},
};

/// Label of the single row rendered when nothing matches.
pub const NO_MATCHES_LABEL: &str = "No matches found";
/// Secondary text of the placeholder row.
pub const NO_MATCHES_HINT: &str = "Try searching for: skills, projects, blog, contact";

// ---------------------------------------------------------------------------
// Collaborators
// ---------------------------------------------------------------------------

/// Where keyboard focus sits inside the search container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    Row(usize),
}

/// What the renderer is asked to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownView<'a> {
    /// Up to [`DISPLAY_LIMIT`] focusable, clickable rows.
    Results(&'a [SearchEntry]),
    /// One non-focusable "No matches found" row.
    NoMatches,
}

/// Draws the suggestion list. Implemented by the DOM binding in a browser and
/// by the terminal shell in `folio-tui`.
pub trait Renderer {
    /// Replace the visible list. `query` is the text that produced it.
    fn render(&mut self, view: DropdownView<'_>, query: &str);
    /// Move keyboard focus to the input or to a rendered row.
    fn focus(&mut self, focus: Focus);
    /// Remove all rendered rows and hide the container.
    fn clear(&mut self);
}

/// Changes the current location.
pub trait Navigator {
    fn navigate(&mut self, target: NavTarget);
}

impl<T: Renderer + ?Sized> Renderer for &mut T {
    fn render(&mut self, view: DropdownView<'_>, query: &str) {
        (**self).render(view, query)
    }
    fn focus(&mut self, focus: Focus) {
        (**self).focus(focus)
    }
    fn clear(&mut self) {
        (**self).clear()
    }
}

impl<T: Navigator + ?Sized> Navigator for &mut T {
    fn navigate(&mut self, target: NavTarget) {
        (**self).navigate(target)
    }
}

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// Observable dropdown state.
///
/// `focused` is `None` or a valid index into `results`; it is reset to
/// `None` every time the list is re-rendered.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DropdownState {
    #[default]
    Closed,
    Open {
        /// Rendered rows (already truncated). Empty means the placeholder
        /// row is showing.
        results: Vec<SearchEntry>,
        focused: Option<usize>,
    },
}

/// Identifies one armed close-on-blur. Only the most recent token can fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CloseToken(u64);

/// Tunables, normally taken from the `[search]` config section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownSettings {
    pub min_query_chars: usize,
    pub max_suggestions: usize,
    /// Path of the server-side full-text search used when nothing matches.
    pub fallback_path: String,
}

impl Default for DropdownSettings {
    fn default() -> Self {
        Self {
            min_query_chars: MIN_QUERY_CHARS,
            max_suggestions: DISPLAY_LIMIT,
            fallback_path: "/search".to_string(),
        }
    }
}

impl DropdownSettings {
    /// Pull the tunables back into the range the dropdown guarantees: at
    /// least [`MIN_QUERY_CHARS`] characters before opening and between one
    /// and [`DISPLAY_LIMIT`] rendered rows.
    pub fn clamped(self) -> Self {
        let min_query_chars = self.min_query_chars.max(MIN_QUERY_CHARS);
        let max_suggestions = self.max_suggestions.clamp(1, DISPLAY_LIMIT);
        if min_query_chars != self.min_query_chars || max_suggestions != self.max_suggestions {
            tracing::warn!(
                min_query_chars = self.min_query_chars,
                max_suggestions = self.max_suggestions,
                "dropdown settings out of range, clamped"
            );
        }
        Self { min_query_chars, max_suggestions, ..self }
    }
}

// ---------------------------------------------------------------------------
// Controller
// ---------------------------------------------------------------------------

pub struct DropdownController<R, N> {
    index: SearchIndex,
    settings: DropdownSettings,
    query: String,
    state: DropdownState,
    pending_close: Option<CloseToken>,
    next_token: u64,
    renderer: R,
    navigator: N,
}

impl<R: Renderer, N: Navigator> DropdownController<R, N> {
    pub fn new(index: SearchIndex, renderer: R, navigator: N) -> Self {
        Self::with_settings(index, DropdownSettings::default(), renderer, navigator)
    }

    pub fn with_settings(
        index: SearchIndex,
        settings: DropdownSettings,
        renderer: R,
        navigator: N,
    ) -> Self {
        Self {
            index,
            settings: settings.clamped(),
            query: String::new(),
            state: DropdownState::Closed,
            pending_close: None,
            next_token: 0,
            renderer,
            navigator,
        }
    }

    // -- accessors ----------------------------------------------------------

    pub fn state(&self) -> &DropdownState {
        &self.state
    }

    /// Last observed input text.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, DropdownState::Open { .. })
    }

    /// Rendered rows; empty when closed or when the placeholder is showing.
    pub fn results(&self) -> &[SearchEntry] {
        match &self.state {
            DropdownState::Open { results, .. } => results,
            DropdownState::Closed => &[],
        }
    }

    /// Focused row index, `None` when focus is on the input or the list is
    /// closed.
    pub fn focused(&self) -> Option<usize> {
        match self.state {
            DropdownState::Open { focused, .. } => focused,
            DropdownState::Closed => None,
        }
    }

    pub fn index(&self) -> &SearchIndex {
        &self.index
    }

    pub fn pending_close(&self) -> Option<CloseToken> {
        self.pending_close
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut N {
        &mut self.navigator
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    // -- input events -------------------------------------------------------

    /// The input text changed.
    pub fn on_input(&mut self, text: &str) {
        self.query = text.to_string();
        self.refresh();
    }

    /// The input regained focus: reopen for a retained query that is long
    /// enough, otherwise stay closed.
    pub fn on_focus_gained(&mut self) {
        self.cancel_pending_close();
        if self.long_enough(&self.query) {
            self.refresh();
        }
    }

    /// Escape pressed while the input has focus.
    pub fn on_escape_in_input(&mut self) {
        self.close();
    }

    /// Escape pressed while a result row has focus. Focus goes back to the
    /// input.
    pub fn on_escape_in_row(&mut self) {
        self.close();
        self.renderer.focus(Focus::Input);
    }

    /// The input lost focus. Returns the token to fire once the host's grace
    /// delay has elapsed.
    pub fn on_blur_input(&mut self) -> CloseToken {
        let token = CloseToken(self.next_token);
        self.next_token += 1;
        self.pending_close = Some(token);
        tracing::debug!(token = token.0, "dropdown: close pending");
        token
    }

    /// Fire a pending close. Returns `true` if the list was closed; a stale or
    /// cancelled token is ignored.
    pub fn fire_pending_close(&mut self, token: CloseToken) -> bool {
        if self.pending_close != Some(token) {
            tracing::debug!(token = token.0, "dropdown: stale close token ignored");
            return false;
        }
        self.pending_close = None;
        self.close();
        true
    }

    /// Drop any armed close-on-blur.
    pub fn cancel_pending_close(&mut self) {
        if let Some(token) = self.pending_close.take() {
            tracing::debug!(token = token.0, "dropdown: pending close cancelled");
        }
    }

    /// Pointer press inside the search container.
    pub fn on_inside_click(&mut self) {
        self.cancel_pending_close();
    }

    /// Pointer press outside the search container.
    pub fn on_outside_click(&mut self) {
        self.cancel_pending_close();
        self.close();
    }

    /// Enter pressed in the input.
    pub fn on_enter_in_input(&mut self) {
        let query = self.query.clone();
        self.commit(&query);
    }

    /// ArrowDown in the input moves focus to the first real row.
    pub fn on_arrow_down_in_input(&mut self) {
        if !self.results().is_empty() {
            self.focus_row(0);
        }
    }

    /// ArrowDown on row `i` wraps to the next row.
    pub fn on_arrow_down_in_row(&mut self, i: usize) {
        let count = self.results().len();
        if i >= count {
            return;
        }
        self.focus_row((i + 1) % count);
    }

    /// ArrowUp on row `i`: row 0 hands focus back to the input.
    pub fn on_arrow_up_in_row(&mut self, i: usize) {
        if i >= self.results().len() {
            return;
        }
        if i == 0 {
            self.focus_input();
        } else {
            self.focus_row(i - 1);
        }
    }

    /// Click on row `i`, or Enter while it has focus.
    pub fn on_activate_result_row(&mut self, i: usize) {
        self.cancel_pending_close();
        let Some(entry) = self.results().get(i) else {
            return;
        };
        let target = NavTarget::Fragment(entry.url.clone());
        tracing::debug!(row = i, target = %target, "dropdown: row activated");
        self.navigator.navigate(target);
        self.close();
    }

    // -- focus-relative dispatch -------------------------------------------
    //
    // Hosts that track focus through the controller (the terminal shell) use
    // these instead of the row-indexed variants.

    pub fn handle_arrow_down(&mut self) {
        match self.focused() {
            Some(i) => self.on_arrow_down_in_row(i),
            None => self.on_arrow_down_in_input(),
        }
    }

    pub fn handle_arrow_up(&mut self) {
        if let Some(i) = self.focused() {
            self.on_arrow_up_in_row(i);
        }
    }

    pub fn handle_enter(&mut self) {
        match self.focused() {
            Some(i) => self.on_activate_result_row(i),
            None => self.on_enter_in_input(),
        }
    }

    pub fn handle_escape(&mut self) {
        match self.focused() {
            Some(_) => self.on_escape_in_row(),
            None => self.on_escape_in_input(),
        }
    }

    // -- commit ---------------------------------------------------------------

    /// Jump to the first match for `query`, or to the full-text search when
    /// nothing matches. Blank queries do nothing.
    pub fn commit(&mut self, query: &str) {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return;
        }
        let target = match self.index.filter(trimmed).first() {
            Some(first) => NavTarget::Fragment(first.url.clone()),
            None => search::full_text_target(&self.settings.fallback_path, trimmed),
        };
        tracing::debug!(query = %trimmed, target = %target, "dropdown: commit");
        self.navigator.navigate(target);
        self.close();
    }

    // -- internals ----------------------------------------------------------

    fn long_enough(&self, text: &str) -> bool {
        text.chars().count() >= self.settings.min_query_chars
    }

    fn refresh(&mut self) {
        if !self.long_enough(&self.query) {
            self.close();
            return;
        }
        let results: Vec<SearchEntry> = self
            .index
            .suggestions(&self.query, self.settings.max_suggestions)
            .into_iter()
            .cloned()
            .collect();
        let view = if results.is_empty() {
            DropdownView::NoMatches
        } else {
            DropdownView::Results(&results)
        };
        self.renderer.render(view, &self.query);
        tracing::debug!(query = %self.query, rows = results.len(), "dropdown: open");
        self.state = DropdownState::Open { results, focused: None };
    }

    fn close(&mut self) {
        if self.is_open() {
            tracing::debug!("dropdown: closed");
        }
        self.state = DropdownState::Closed;
        self.renderer.clear();
    }

    fn focus_row(&mut self, i: usize) {
        if let DropdownState::Open { focused, .. } = &mut self.state {
            *focused = Some(i);
            self.pending_close = None;
            self.renderer.focus(Focus::Row(i));
            tracing::debug!(row = i, "dropdown: focus row");
        }
    }

    fn focus_input(&mut self) {
        if let DropdownState::Open { focused, .. } = &mut self.state {
            *focused = None;
            self.renderer.focus(Focus::Input);
            tracing::debug!("dropdown: focus input");
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
