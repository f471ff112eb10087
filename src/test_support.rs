//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::core::action::{Action, update};
use crate::core::state::App;
use crate::countries::{Country, CountryName, CountrySource, Flags, SourceError};

/// A minimal country record with the given common name and `cca3` code.
pub fn country(name: &str, cca3: &str) -> Country {
    Country {
        name: CountryName {
            common: name.to_string(),
            official: format!("Republic of {name}"),
        },
        capital: Some(vec![format!("{name} City")]),
        population: 1_000,
        languages: None,
        timezones: Vec::new(),
        currencies: Default::default(),
        flags: Flags {
            png: format!("https://flags.test/{cca3}.png"),
            svg: format!("https://flags.test/{cca3}.svg"),
            alt: None,
        },
        cca2: cca3[..2.min(cca3.len())].to_string(),
        cca3: cca3.to_string(),
        region: "Testland".to_string(),
        subregion: None,
        area: 1_000.0,
        borders: None,
        continents: Vec::new(),
    }
}

/// `n` countries named "Country 01", "Country 02", ... (already sorted).
pub fn numbered_countries(n: usize) -> Vec<Country> {
    (1..=n)
        .map(|i| country(&format!("Country {i:02}"), &format!("N{i:02}")))
        .collect()
}

/// An `App` after a successful full load of `n` numbered countries.
pub fn loaded_app(n: usize) -> App {
    let mut app = App::new();
    update(&mut app, Action::LoadAll);
    update(&mut app, Action::AllLoaded(Ok(numbered_countries(n))));
    app
}

/// An in-memory source. `fetch_all` returns the scripted dataset; search
/// filters it by case-insensitive substring unless a search error is set.
pub struct ScriptedSource {
    dataset: Mutex<Result<Vec<Country>, SourceError>>,
    search_error: Mutex<Option<SourceError>>,
    fetch_calls: AtomicUsize,
    search_calls: AtomicUsize,
}

impl ScriptedSource {
    pub fn new(dataset: Result<Vec<Country>, SourceError>) -> Self {
        Self {
            dataset: Mutex::new(dataset),
            search_error: Mutex::new(None),
            fetch_calls: AtomicUsize::new(0),
            search_calls: AtomicUsize::new(0),
        }
    }

    pub fn set_dataset(&self, dataset: Result<Vec<Country>, SourceError>) {
        *self.dataset.lock().unwrap() = dataset;
    }

    pub fn fail_searches(&self, error: SourceError) {
        *self.search_error.lock().unwrap() = Some(error);
    }

    pub fn fetches(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    pub fn searches(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CountrySource for ScriptedSource {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn fetch_all(&self) -> Result<Vec<Country>, SourceError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        self.dataset.lock().unwrap().clone()
    }

    async fn search_by_name(&self, query: &str) -> Result<Vec<Country>, SourceError> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.search_error.lock().unwrap().clone() {
            return Err(err);
        }
        let needle = query.to_lowercase();
        let dataset = self.dataset.lock().unwrap().clone().unwrap_or_default();
        Ok(dataset
            .into_iter()
            .filter(|c| c.name.common.to_lowercase().contains(&needle))
            .collect())
    }
}
