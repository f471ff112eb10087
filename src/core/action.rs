//! # Actions
//!
//! Everything that can happen in Atlas becomes an `Action`.
//! User types in the search box? That's `Action::Search(query)`.
//! The dataset arrives? That's `Action::AllLoaded(result)`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` describing the I/O the driver should
//! perform next. No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Completions of effects come back as actions (`AllLoaded`,
//! `SearchFinished`, `LoadMoreElapsed`). They are applied in arrival order:
//! a late search response overwrites whatever is on screen.

use std::collections::HashSet;

use log::{debug, info, warn};

use crate::core::ordering::normalize;
use crate::core::state::{App, EMPTY_DATASET_ERROR, LOAD_FAILED_ERROR, PAGE_SIZE};
use crate::countries::{Country, SourceError};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Fetch the full dataset (session start).
    LoadAll,
    /// Same as `LoadAll`, issued from the error view.
    Retry,
    /// Reveal the next browse page.
    LoadMore,
    /// The search box now reads this text.
    Search(String),
    AllLoaded(Result<Vec<Country>, SourceError>),
    SearchFinished {
        generation: u64,
        result: Result<Vec<Country>, SourceError>,
    },
    LoadMoreElapsed,
    Quit,
}

impl Action {
    fn kind(&self) -> &'static str {
        match self {
            Action::LoadAll => "LoadAll",
            Action::Retry => "Retry",
            Action::LoadMore => "LoadMore",
            Action::Search(_) => "Search",
            Action::AllLoaded(_) => "AllLoaded",
            Action::SearchFinished { .. } => "SearchFinished",
            Action::LoadMoreElapsed => "LoadMoreElapsed",
            Action::Quit => "Quit",
        }
    }
}

/// I/O requested by `update()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Call `CountrySource::fetch_all`, then dispatch `AllLoaded`.
    FetchAll,
    /// Call `CountrySource::search_by_name`, then dispatch `SearchFinished`.
    SearchByName { query: String, generation: u64 },
    /// Wait the configured load-more delay, then dispatch `LoadMoreElapsed`.
    ScheduleLoadMore,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {}", action.kind());
    match action {
        Action::LoadAll | Action::Retry => begin_load_all(app),
        Action::AllLoaded(result) => {
            finish_load_all(app, result);
            Effect::None
        }
        Action::LoadMore => {
            if app.loading_more || !app.has_more || app.is_searching {
                return Effect::None;
            }
            app.loading_more = true;
            Effect::ScheduleLoadMore
        }
        Action::LoadMoreElapsed => {
            append_next_page(app);
            Effect::None
        }
        Action::Search(query) => begin_search(app, query),
        Action::SearchFinished { generation, result } => {
            finish_search(app, generation, result);
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

fn begin_load_all(app: &mut App) -> Effect {
    app.loading = true;
    app.error = None;
    app.is_searching = false;
    Effect::FetchAll
}

fn finish_load_all(app: &mut App, result: Result<Vec<Country>, SourceError>) {
    match result {
        Ok(countries) if countries.is_empty() => {
            warn!("Full load returned no countries");
            app.error = Some(EMPTY_DATASET_ERROR.to_string());
            app.displayed.clear();
        }
        Ok(countries) => {
            app.all_countries = normalize(countries);
            app.show_first_page();
            info!(
                "Loaded {} countries, showing {}",
                app.all_countries.len(),
                app.displayed.len()
            );
        }
        Err(e) => {
            warn!("Error loading countries: {}", e);
            app.error = Some(LOAD_FAILED_ERROR.to_string());
            app.displayed.clear();
        }
    }
    app.loading = false;
}

fn append_next_page(app: &mut App) {
    let next_page = app.current_page + 1;
    let start = (next_page - 1) * PAGE_SIZE;
    let end = start + PAGE_SIZE;
    let total = app.all_countries.len();

    if start < total {
        // A late page can land on search results that already hold some of it
        let shown: HashSet<String> = app.displayed.iter().map(|c| c.cca3.clone()).collect();
        let fresh: Vec<Country> = app.all_countries[start..end.min(total)]
            .iter()
            .filter(|c| !shown.contains(&c.cca3))
            .cloned()
            .collect();
        app.displayed.extend(fresh);
        app.current_page = next_page;
        app.has_more = end < total;
        debug!(
            "Revealed page {} ({} shown, has_more={})",
            next_page,
            app.displayed.len(),
            app.has_more
        );
    } else {
        app.has_more = false;
    }
    app.loading_more = false;
}

fn begin_search(app: &mut App, query: String) -> Effect {
    app.search_query = query;

    if app.search_query.trim().is_empty() {
        app.is_searching = false;
        app.error = None;
        app.loading = false;
        if app.all_countries.is_empty() {
            info!("Search cleared before the dataset loaded, reloading");
            return begin_load_all(app);
        }
        app.show_first_page();
        return Effect::None;
    }

    app.loading = true;
    app.is_searching = true;
    app.error = None;
    app.search_generation += 1;
    Effect::SearchByName {
        query: app.search_query.clone(),
        generation: app.search_generation,
    }
}

fn finish_search(app: &mut App, generation: u64, result: Result<Vec<Country>, SourceError>) {
    if generation != app.search_generation {
        debug!(
            "Applying search response {} while latest is {}",
            generation, app.search_generation
        );
    }
    match result {
        Ok(countries) => {
            app.displayed = normalize(countries);
        }
        Err(e) => {
            warn!("Error searching countries: {}", e);
            app.displayed.clear();
        }
    }
    app.has_more = false;
    app.loading = false;
}
