//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Effects
//!
//! `update()` returns an `Effect`; this module runs it on a tokio task and
//! sends the completion back as an `Action` over an mpsc channel. The loop
//! drains that channel between frames, so results land in arrival order.
//! Nothing is cancelled: a slow search that finishes after a newer one
//! still overwrites the list.
//!
//! ## Redraw Strategy
//!
//! - **Animating** (full load, search or page append in flight): draws every
//!   ~80ms so the spinners move.
//! - **Idle**: sleeps up to 500ms, only redraws on events, channel messages
//!   or terminal resize.
//!
//! ## Infinite scroll
//!
//! After each draw the list reports whether its last card was on screen.
//! If so, and no append is pending, the loop dispatches `Action::LoadMore`.
//! The reducer ignores it in search mode or when everything is shown.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::countries::{CountrySource, RestCountriesSource};
use crate::tui::component::EventHandler;
use crate::tui::components::{
    CountryListState, DetailEvent, DetailState, ListEvent, edit_query,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub country_list: CountryListState,
    // Detail overlay (None = hidden)
    pub detail: Option<DetailState>,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            country_list: CountryListState::new(),
            detail: None,
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,                        // Cursor lives in the search box
            SetCursorStyle::SteadyBlock, // Blinking resets on every draw
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste, Hide);
    }
}

/// Where an effect's completion goes, plus what it needs to run.
#[derive(Clone)]
struct EffectRunner {
    source: Arc<dyn CountrySource>,
    load_more_delay: Duration,
    tx: mpsc::Sender<Action>,
}

impl EffectRunner {
    /// Spawns the I/O for `effect`. Returns true if the loop should quit.
    fn spawn(&self, effect: Effect) -> bool {
        match effect {
            Effect::None => false,
            Effect::Quit => true,
            Effect::FetchAll => {
                let source = self.source.clone();
                let tx = self.tx.clone();
                info!("Spawning full load from {}", source.name());
                tokio::spawn(async move {
                    let result = source.fetch_all().await;
                    if tx.send(Action::AllLoaded(result)).is_err() {
                        warn!("Failed to deliver full load result: receiver dropped");
                    }
                });
                false
            }
            Effect::SearchByName { query, generation } => {
                let source = self.source.clone();
                let tx = self.tx.clone();
                info!("Spawning search #{} for {:?}", generation, query);
                tokio::spawn(async move {
                    let result = source.search_by_name(&query).await;
                    if tx
                        .send(Action::SearchFinished { generation, result })
                        .is_err()
                    {
                        warn!("Failed to deliver search #{}: receiver dropped", generation);
                    }
                });
                false
            }
            Effect::ScheduleLoadMore => {
                let delay = self.load_more_delay;
                let tx = self.tx.clone();
                tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    if tx.send(Action::LoadMoreElapsed).is_err() {
                        warn!("Failed to deliver page append: receiver dropped");
                    }
                });
                false
            }
        }
    }

    fn dispatch(&self, app: &mut App, action: Action) -> bool {
        let effect = update(app, action);
        self.spawn(effect)
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let source = RestCountriesSource::new(Some(config.base_url.clone()), config.request_timeout)
        .map_err(std::io::Error::other)?;
    info!("Using country source at {}", source.base_url());

    let mut app = App::new();
    let mut tui = TuiState::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();
    let runner = EffectRunner {
        source: Arc::new(source),
        load_more_delay: config.load_more_delay,
        tx,
    };

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Mount: start the first full load
    runner.dispatch(&mut app, Action::LoadAll);

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame
    let mut should_quit = false;

    while !should_quit {
        let animating = app.loading || app.loading_more;
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            tui.country_list.sync(&app.displayed);
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;

            if tui.country_list.sentinel_visible && !app.loading_more {
                debug!("Sentinel on screen, requesting next page");
                runner.dispatch(&mut app, Action::LoadMore);
            }
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if handle_event(&event, &mut app, &mut tui, &runner) {
                should_quit = true;
                break;
            }
        }

        // Handle completions from background tasks
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            if runner.dispatch(&mut app, action) {
                should_quit = true;
            }
        }
    }

    ratatui::restore();
    Ok(())
}

/// Routes one terminal event. Returns true if the app should quit.
fn handle_event(event: &TuiEvent, app: &mut App, tui: &mut TuiState, runner: &EffectRunner) -> bool {
    match event {
        // Resize just needs a redraw (already flagged)
        TuiEvent::Resize => return false,
        // ForceQuit (Ctrl+C / Ctrl+Q) always quits
        TuiEvent::ForceQuit => return runner.dispatch(app, Action::Quit),
        _ => {}
    }

    // When the detail overlay is open, route all events to it
    if let Some(detail) = tui.detail.as_mut() {
        if let Some(DetailEvent::Close) = detail.handle_event(event) {
            tui.detail = None;
        }
        return false;
    }

    match event {
        TuiEvent::Retry => {
            if app.error.is_some() && !app.loading {
                return runner.dispatch(app, Action::Retry);
            }
        }
        TuiEvent::Escape => {
            if !app.search_query.is_empty() {
                return runner.dispatch(app, Action::Search(String::new()));
            }
        }
        TuiEvent::Submit => {
            if let Some(ListEvent::Open(index)) = tui.country_list.handle_event(event)
                && let Some(country) = app.displayed.get(index)
            {
                debug!("Opening detail for {}", country.cca3);
                tui.detail = Some(DetailState::new(country.clone()));
            }
        }
        _ => {
            if tui.country_list.navigate(event, &app.displayed) {
                return false;
            }
            if let Some(query) = edit_query(&app.search_query, event) {
                return runner.dispatch(app, Action::Search(query));
            }
        }
    }
    false
}
