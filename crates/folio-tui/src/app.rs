//! Top-level application state and the main event loop.
//!
//! [`App::run`] sets up the terminal, drives the crossterm event loop, and
//! tears everything down cleanly on exit or panic. Everything between a key
//! press and the next frame goes through [`App::handle`] and [`App::tick`],
//! which never touch the terminal and are driven directly by the tests.

use crate::{
    commands::{Command, ThemeArg},
    event::{self, AppEvent, Direction},
    theme::Theme,
    widgets::{
        command_bar::{CommandBar, CommandBarExit, CommandBarState},
        contains,
        help::HelpPopup,
        search_bar::{SearchBar, SearchBarState},
        section_view::{SectionNavigator, SectionView},
        suggestions::{SuggestionList, Suggestions},
        toasts::ToastOverlay,
    },
};
use crossterm::{
    event::{self as ct_event, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use folio_core::{
    config::{Config, KeybindingsConfig},
    dropdown::{CloseToken, DropdownController},
    forms::{FormKind, NewsletterForm, SubmitOutcome},
    preference::{PreferenceStore, ThemeMode, ThemePreference},
    toast::{ToastKind, ToastQueue},
    Focus as RowFocus, SearchIndex,
};
use folio_transport::SiteClient;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    Frame, Terminal,
};
use std::{
    io,
    time::{Duration, Instant},
};

pub type SearchController = DropdownController<SuggestionList, SectionNavigator>;

// ---------------------------------------------------------------------------
// Focus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Nothing focused; single-key shortcuts are live.
    Page,
    /// The search bar, or one of its suggestion rows.
    Search,
    /// Vim-style `:` command line is active.
    Command,
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    pub focus: Focus,
    /// Focus state before entering command mode, restored on exit.
    pub prev_focus: Focus,
    pub search: SearchBarState,
    pub dropdown: SearchController,
    /// Armed close-on-blur and the instant it fires.
    pub pending_close: Option<(CloseToken, Instant)>,
    pub toasts: ToastQueue,
    pub preference: ThemePreference,
    pub theme: Theme,
    pub config: Config,
    pub show_help: bool,
    pub command_bar: CommandBarState,
    /// Terminal area of the last drawn frame, for mouse hit-testing.
    pub screen: Rect,
    pub quit: bool,
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    state: AppState,
    prefs: Box<dyn PreferenceStore>,
    site: Option<SiteClient>,
    runtime: tokio::runtime::Runtime,
}

impl App {
    pub fn new(config: Config, prefs: Box<dyn PreferenceStore>) -> anyhow::Result<Self> {
        let preference = ThemePreference::load(prefs.as_ref());
        let theme = Theme::for_mode(preference.mode());

        let dropdown = DropdownController::with_settings(
            SearchIndex::portfolio(),
            config.search.dropdown_settings(),
            SuggestionList::default(),
            SectionNavigator::default(),
        );

        let site = match SiteClient::new(&config.site.base_url) {
            Ok(c) => Some(c),
            Err(e) => {
                tracing::warn!(error = %e, "site client disabled");
                None
            }
        };

        let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;

        let toasts = ToastQueue::new(config.ui.toast_duration());

        let state = AppState {
            focus: Focus::Page,
            prev_focus: Focus::Page,
            search: SearchBarState::default(),
            dropdown,
            pending_close: None,
            toasts,
            preference,
            theme,
            config,
            show_help: false,
            command_bar: CommandBarState::default(),
            screen: Rect::default(),
            quit: false,
        };

        Ok(App { state, prefs, site, runtime })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Set up the terminal, run the event loop, and restore the terminal on exit.
    pub fn run(mut self) -> anyhow::Result<()> {
        install_panic_hook();

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        // Always restore terminal, even if the loop returned an error
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
        let _ = terminal.show_cursor();

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            let screen = {
                let s = &self.state;
                terminal.draw(|frame| draw(frame, s))?.area
            };
            self.state.screen = screen;

            if self.state.quit {
                break;
            }

            if ct_event::poll(Duration::from_millis(16))? {
                let raw = ct_event::read()?;
                if let Event::Key(key) = &raw {
                    if key.kind != ct_event::KeyEventKind::Press {
                        continue;
                    }
                }
                // Use insert-mode mapping when a text widget is focused
                let app_event = if is_insert_mode(self.state.focus) {
                    event::to_app_event_insert(raw)
                } else {
                    event::to_app_event(raw)
                };
                if let Some(ev) = app_event {
                    tracing::debug!(focus = ?self.state.focus, event = ?ev, "app event");
                    self.handle(ev);
                }
            }

            self.tick(Instant::now());
        }
        Ok(())
    }

    /// Timers: fire an expired close-on-blur and drop expired toasts.
    pub fn tick(&mut self, now: Instant) {
        let s = &mut self.state;
        if let Some((token, deadline)) = s.pending_close {
            if now >= deadline {
                s.pending_close = None;
                s.dropdown.fire_pending_close(token);
            }
        }
        let gone = s.toasts.expire(chrono::Utc::now());
        if gone > 0 {
            tracing::debug!(gone, "toasts expired");
        }
    }

    pub fn handle(&mut self, event: AppEvent) {
        // Help popup intercepts all events; only close keys pass through.
        if self.state.show_help {
            let help = KeybindingsConfig::key(&self.state.config.keybindings.help);
            match event {
                AppEvent::Char(c) if Some(c) == help => self.state.show_help = false,
                AppEvent::Escape | AppEvent::Quit => self.state.show_help = false,
                _ => {}
            }
            if !self.state.show_help {
                tracing::debug!("help popup closed");
            }
            return;
        }

        match (self.state.focus, event) {
            (_, AppEvent::Quit) => {
                tracing::debug!("quit");
                self.state.quit = true;
            }

            // Terminal resize is handled automatically by ratatui
            (_, AppEvent::Resize(_, _)) => {}

            (Focus::Command, ev) => match self.state.command_bar.handle(&ev) {
                Some(CommandBarExit::Run(cmd)) => {
                    self.state.focus = self.state.prev_focus;
                    tracing::debug!(command = ?cmd, "executing command");
                    self.execute_command(cmd);
                }
                Some(CommandBarExit::Cancelled) => self.state.focus = self.state.prev_focus,
                None => {}
            },

            (_, AppEvent::Click(col, row)) => self.click(col, row),

            (Focus::Search, ev) => self.handle_search(ev),

            (Focus::Page, AppEvent::FocusNext) => self.focus_search(),
            (Focus::Page, AppEvent::Char(c)) => self.shortcut(c),
            (Focus::Page, _) => {}
        }
    }

    fn shortcut(&mut self, c: char) {
        let keys = &self.state.config.keybindings;
        let is = |binding: &str| KeybindingsConfig::key(binding) == Some(c);

        if is(&keys.search_focus) {
            self.focus_search();
        } else if is(&keys.command) {
            tracing::debug!(prev_focus = ?self.state.focus, "entering command mode");
            self.state.prev_focus = self.state.focus;
            self.state.command_bar.clear();
            self.state.focus = Focus::Command;
        } else if is(&keys.help) {
            tracing::debug!("help popup opened");
            self.state.show_help = true;
        } else if is(&keys.toggle_theme) {
            self.toggle_theme();
        }
    }

    fn handle_search(&mut self, event: AppEvent) {
        match event {
            AppEvent::Escape if !self.state.dropdown.is_open() => self.blur_search(),
            AppEvent::Escape => self.state.dropdown.handle_escape(),
            AppEvent::FocusNext => self.blur_search(),
            AppEvent::Nav(Direction::Down) => self.state.dropdown.handle_arrow_down(),
            AppEvent::Nav(Direction::Up) => self.state.dropdown.handle_arrow_up(),
            AppEvent::Enter => {
                let before = self.state.dropdown.navigator().history().len();
                self.state.dropdown.handle_enter();
                if self.state.dropdown.navigator().history().len() > before {
                    self.state.focus = Focus::Page;
                }
            }
            ev => {
                if self.state.search.handle(&ev) {
                    self.state.dropdown.on_input(&self.state.search.input);
                }
            }
        }
    }

    fn focus_search(&mut self) {
        tracing::debug!("focus -> Search");
        self.state.focus = Focus::Search;
        self.state.pending_close = None;
        self.state.dropdown.on_focus_gained();
    }

    fn blur_search(&mut self) {
        let grace = Duration::from_millis(self.state.config.search.blur_grace_ms);
        let token = self.state.dropdown.on_blur_input();
        self.state.pending_close = Some((token, Instant::now() + grace));
        self.state.focus = Focus::Page;
        tracing::debug!(grace_ms = grace.as_millis() as u64, "focus: Search -> Page");
    }

    fn click(&mut self, col: u16, row: u16) {
        let areas = Areas::new(self.state.screen);
        let list = self.state.dropdown.renderer();
        let list_area = areas.dropdown(list.height());
        let in_list = list.is_visible() && contains(list_area, col, row);
        let hit = if in_list { list.row_at(list_area, col, row) } else { None };

        if let Some(i) = hit {
            self.state.dropdown.on_activate_result_row(i);
            self.state.focus = Focus::Page;
        } else if in_list {
            self.state.dropdown.on_inside_click();
        } else if contains(areas.search, col, row) {
            self.state.dropdown.on_inside_click();
            if self.state.focus != Focus::Search {
                self.focus_search();
            }
        } else {
            self.state.dropdown.on_outside_click();
            self.state.pending_close = None;
            if self.state.focus == Focus::Search {
                self.state.focus = Focus::Page;
            }
        }
    }

    /// Execute a parsed [`Command`] against the application state.
    fn execute_command(&mut self, cmd: Command) {
        match cmd {
            Command::Quit => self.state.quit = true,
            Command::Help => self.state.show_help = !self.state.show_help,
            Command::Theme(ThemeArg::Toggle) => self.toggle_theme(),
            Command::Theme(ThemeArg::Set(mode)) => self.set_theme(mode),
            Command::Subscribe(email) => self.subscribe(&email),
        }
    }

    fn toggle_theme(&mut self) {
        let mode = self.state.preference.toggle();
        self.apply_theme(mode);
    }

    fn set_theme(&mut self, mode: ThemeMode) {
        self.state.preference.set(mode);
        self.apply_theme(mode);
    }

    /// Restyle and persist; a failed save only logs.
    fn apply_theme(&mut self, mode: ThemeMode) {
        self.state.theme = Theme::for_mode(mode);
        tracing::debug!(%mode, "theme applied");
        if let Err(e) = self.state.preference.persist(self.prefs.as_mut()) {
            tracing::warn!(error = %e, "theme preference not saved");
        }
    }

    fn subscribe(&mut self, email: &str) {
        let form = NewsletterForm::new(email);
        if let Err(e) = form.validate() {
            self.state.toasts.show(e.to_string(), ToastKind::Error);
            return;
        }
        let result = match &self.site {
            Some(client) => self.runtime.block_on(client.subscribe(&form)),
            None => {
                let outcome = SubmitOutcome::classify(
                    FormKind::Newsletter,
                    Err::<folio_core::forms::SubmitResponse, _>("site client unavailable"),
                );
                outcome.notify(&mut self.state.toasts);
                return;
            }
        };
        SubmitOutcome::classify(FormKind::Newsletter, result).notify(&mut self.state.toasts);
    }
}

/// Returns true when the current focus is on a text-input widget, meaning
/// alphabetic keys should produce characters rather than trigger shortcuts.
fn is_insert_mode(focus: Focus) -> bool {
    matches!(focus, Focus::Search | Focus::Command)
}

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

struct Areas {
    search: Rect,
    body: Rect,
}

impl Areas {
    /// 3-line search bar on top, section pane below.
    fn new(area: Rect) -> Self {
        let vert = Layout::default()
            .direction(LayoutDir::Vertical)
            .constraints([Constraint::Length(3), Constraint::Fill(1)])
            .split(area);
        Self { search: vert[0], body: vert[1] }
    }

    /// The dropdown hangs under the search bar, over the section pane.
    fn dropdown(&self, height: u16) -> Rect {
        Rect { y: self.body.y, height: height.min(self.body.height), ..self.search }
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let areas = Areas::new(area);
    let keys = &state.config.keybindings;

    frame.render_widget(
        SearchBar::new(&state.search, state.focus == Focus::Search, &state.theme, &keys.search_focus),
        areas.search,
    );
    frame.render_widget(SectionView::new(state.dropdown.navigator(), &state.theme), areas.body);

    let list = state.dropdown.renderer();
    if list.is_visible() {
        frame.render_widget(Suggestions::new(list, &state.theme), areas.dropdown(list.height()));
    }

    frame.render_widget(ToastOverlay::new(&state.toasts, &state.theme), areas.body);

    if state.show_help {
        frame.render_widget(HelpPopup::new(&state.theme, keys), area);
    }

    // Command bar overlays the bottom row of the screen
    if state.focus == Focus::Command {
        let cmd_area = Rect { y: area.bottom().saturating_sub(1), height: 1, ..area };
        frame.render_widget(CommandBar::new(&state.command_bar, &state.theme), cmd_area);
        let col = state.command_bar.cursor_col(cmd_area);
        frame.set_cursor_position((col, cmd_area.y));
        return;
    }

    // Text cursor only while the input itself has focus, not a row
    if state.focus == Focus::Search && list.focus == RowFocus::Input {
        let bar = SearchBar::new(&state.search, true, &state.theme, &keys.search_focus);
        frame.set_cursor_position(bar.cursor_position(areas.search));
    }
}

// ---------------------------------------------------------------------------
// Terminal helpers
// ---------------------------------------------------------------------------

fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
        original(info);
    }));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
