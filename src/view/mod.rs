//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod help;
pub mod layout;
pub mod pagination;
mod results;
pub mod sanitize;
mod search_input;
pub mod styles;
pub mod suggestions;

pub use help::render_help_overlay;
pub use layout::{calculate_areas, render_layout, ScreenAreas};
pub use pagination::{control_at_column, page_bar_text, page_segments, PageSegment};
pub use search_input::SearchInput;
pub use styles::{ColorConfig, Palette};

use crate::client::Dispatcher;
use crate::config::KeyBindings;
use crate::model::Command;
use crate::state::{handle_action, handle_char, AppState};
use constants::TICK_INTERVAL_MS;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Position,
    Terminal,
};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// How long the event loop may block before the next debounce deadline or
/// completion check.
pub fn poll_timeout(now: Instant, deadline: Option<Instant>) -> Duration {
    let tick = Duration::from_millis(TICK_INTERVAL_MS);
    match deadline {
        Some(deadline) => tick.min(deadline.saturating_duration_since(now)),
        None => tick,
    }
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    dispatcher: Dispatcher,
    colors: ColorConfig,
    /// Regions of the last drawn frame (for mouse hit-testing)
    last_areas: ScreenAreas,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen and mouse capture
    pub fn new(
        app_state: AppState,
        dispatcher: Dispatcher,
        colors: ColorConfig,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(EnableMouseCapture)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        Ok(Self::with_terminal(terminal, app_state, dispatcher, colors))
    }

    /// Run the main event loop
    ///
    /// Returns when the user quits (Ctrl+C). Blocks in `event::poll` until
    /// input arrives, the debounce deadline passes, or the tick elapses so
    /// finished requests get drained.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            let timeout = poll_timeout(Instant::now(), self.app_state.next_deadline());

            let mut dirty = false;
            if event::poll(timeout)? {
                let event = event::read()?;
                dirty |= self.handle_event(event, Instant::now());
            }
            dirty |= self.pump(Instant::now());

            if self.app_state.should_quit() {
                info!("quit requested");
                return Ok(());
            }
            if dirty {
                self.draw()?;
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: Backend,
{
    /// Wrap an already initialized terminal.
    pub fn with_terminal(
        terminal: Terminal<B>,
        app_state: AppState,
        dispatcher: Dispatcher,
        colors: ColorConfig,
    ) -> Self {
        Self {
            terminal,
            app_state,
            key_bindings: KeyBindings::default(),
            dispatcher,
            colors,
            last_areas: ScreenAreas::default(),
        }
    }

    /// Application state.
    pub fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Terminal, for inspecting the rendered buffer.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Search for `query` right away, e.g. from the command line.
    pub fn search_for(&mut self, query: &str) {
        let command = self.app_state.search_for(query);
        self.dispatch(command);
    }

    /// Apply one terminal event. Returns true if the screen needs a redraw.
    pub fn handle_event(&mut self, event: Event, now: Instant) -> bool {
        match event {
            Event::Key(key) => {
                self.handle_key(key, now);
                true
            }
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(..) => true,
            _ => false,
        }
    }

    /// Fire a due debounce timer and apply finished requests.
    ///
    /// Returns true if anything changed.
    pub fn pump(&mut self, now: Instant) -> bool {
        let mut changed = false;

        if let Some(command) = self.app_state.tick(now) {
            self.dispatcher.dispatch(command);
            changed = true;
        }

        for completion in self.dispatcher.drain() {
            if self.app_state.apply_completion(completion) {
                changed = true;
            } else {
                debug!("stale completion dropped");
            }
        }

        changed
    }

    /// Render one frame and remember its regions.
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let state = &self.app_state;
        let palette = Palette::new(state.theme(), self.colors);
        let mut areas = ScreenAreas::default();

        self.terminal
            .draw(|frame| areas = render_layout(frame, state, &palette))?;

        self.last_areas = areas;
        Ok(())
    }

    fn dispatch(&mut self, command: Option<Command>) {
        if let Some(command) = command {
            self.dispatcher.dispatch(command);
        }
    }

    fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.kind == KeyEventKind::Release {
            return;
        }

        let command = if let Some(action) = self.key_bindings.get(key) {
            handle_action(&mut self.app_state, action, now)
        } else {
            match key.code {
                KeyCode::Char(ch)
                    if key.modifiers == KeyModifiers::NONE
                        || key.modifiers == KeyModifiers::SHIFT =>
                {
                    handle_char(&mut self.app_state, ch, now);
                }
                _ => {}
            }
            None
        };

        self.dispatch(command);
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> bool {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let command = self.handle_click(mouse.column, mouse.row);
                self.dispatch(command);
                true
            }
            MouseEventKind::ScrollDown => {
                self.app_state.scroll_results_down();
                true
            }
            MouseEventKind::ScrollUp => {
                self.app_state.scroll_results_up();
                true
            }
            _ => false,
        }
    }

    fn handle_click(&mut self, column: u16, row: u16) -> Option<Command> {
        if self.app_state.help_visible() {
            self.app_state.toggle_help();
            return None;
        }

        let position = Position::new(column, row);

        if let Some((area, content)) = &self.last_areas.dropdown {
            if area.contains(position) {
                let index = suggestions::item_at_row(*area, content, row)?;
                return self.app_state.commit_suggestion(index);
            }
        }

        if !self.last_areas.input.contains(position) {
            self.app_state.click_outside();
        }

        if let Some(area) = self.last_areas.pagination.filter(|a| a.contains(position)) {
            let target = self.app_state.session().pagination().and_then(|pagination| {
                control_at_column(area, &pagination.controls(), column)
                    .and_then(|control| control.target(pagination.current_page()))
            });
            if let Some(page) = target {
                self.app_state.go_to_page(page);
            }
        }

        None
    }
}

/// Initialize and run the TUI application
///
/// Handles terminal setup, runs the event loop, and ensures cleanup on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run(
    app_state: AppState,
    dispatcher: Dispatcher,
    colors: ColorConfig,
    initial_query: Option<&str>,
) -> Result<(), TuiError> {
    let mut app = TuiApp::new(app_state, dispatcher, colors)?;

    if let Some(query) = initial_query {
        app.search_for(query);
    }

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
