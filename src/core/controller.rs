//! # Controller
//!
//! Drives `update()` against a real `CountrySource`, awaiting each effect
//! inline. This is the imperative face of the core: `load_all`, `load_more`,
//! `search`, `retry`, plus `state()` for a read-only snapshot.
//!
//! The TUI does not use this type; it spawns effects on tokio instead so the
//! event loop keeps drawing while requests are in flight. Both paths share
//! the same reducer.

use std::sync::Arc;
use std::time::Duration;

use log::debug;

use crate::core::action::{Action, Effect, update};
use crate::core::state::App;
use crate::countries::CountrySource;

/// Minimum time a page append stays in the `loading_more` state.
pub const DEFAULT_LOAD_MORE_DELAY: Duration = Duration::from_millis(300);

pub struct Controller {
    app: App,
    source: Arc<dyn CountrySource>,
    load_more_delay: Duration,
}

impl Controller {
    pub fn new(source: Arc<dyn CountrySource>, load_more_delay: Duration) -> Self {
        Self {
            app: App::new(),
            source,
            load_more_delay,
        }
    }

    /// Read-only snapshot of the current state.
    pub fn state(&self) -> &App {
        &self.app
    }

    pub async fn load_all(&mut self) {
        self.dispatch(Action::LoadAll).await;
    }

    pub async fn retry(&mut self) {
        self.dispatch(Action::Retry).await;
    }

    pub async fn load_more(&mut self) {
        self.dispatch(Action::LoadMore).await;
    }

    pub async fn search(&mut self, query: &str) {
        self.dispatch(Action::Search(query.to_string())).await;
    }

    /// Applies `action` and keeps running effects until the state settles.
    pub async fn dispatch(&mut self, action: Action) {
        let mut next = Some(action);
        while let Some(action) = next.take() {
            let effect = update(&mut self.app, action);
            next = self.run_effect(effect).await;
        }
    }

    async fn run_effect(&self, effect: Effect) -> Option<Action> {
        match effect {
            Effect::None | Effect::Quit => None,
            Effect::FetchAll => {
                debug!("Controller fetching all via {}", self.source.name());
                Some(Action::AllLoaded(self.source.fetch_all().await))
            }
            Effect::SearchByName { query, generation } => {
                let result = self.source.search_by_name(&query).await;
                Some(Action::SearchFinished { generation, result })
            }
            Effect::ScheduleLoadMore => {
                if !self.load_more_delay.is_zero() {
                    tokio::time::sleep(self.load_more_delay).await;
                }
                Some(Action::LoadMoreElapsed)
            }
        }
    }
}
