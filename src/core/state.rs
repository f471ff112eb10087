//! # Application State
//!
//! Core browse/search state for Atlas. Domain logic only: no TUI types
//! and no I/O. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── all_countries: Vec<Country>   // full sorted dataset, replaced per load
//! ├── displayed: Vec<Country>       // browse prefix or search results
//! ├── current_page: usize           // 1-based page into all_countries
//! ├── has_more: bool                // more browse pages to reveal
//! ├── is_searching: bool            // search mode (no paging)
//! ├── loading: bool                 // full load or search in flight
//! ├── loading_more: bool            // page append pending
//! ├── error: Option<String>         // last full load failed
//! ├── search_query: String          // mirrors the search box
//! └── search_generation: u64        // bumped per issued search
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::countries::Country;

/// Number of countries revealed per browse page.
pub const PAGE_SIZE: usize = 20;

pub const EMPTY_DATASET_ERROR: &str = "No countries found. Please try again.";
pub const LOAD_FAILED_ERROR: &str = "Failed to load countries. Please try again.";

#[derive(Debug, Clone, PartialEq)]
pub struct App {
    pub all_countries: Vec<Country>,
    pub displayed: Vec<Country>,
    pub current_page: usize,
    pub has_more: bool,
    pub is_searching: bool,
    pub loading: bool,
    pub loading_more: bool,
    pub error: Option<String>,
    pub search_query: String,
    /// Generation of the most recently issued search. Responses carry the
    /// generation they were issued under.
    pub search_generation: u64,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// A freshly mounted session: the first full load is about to start.
    pub fn new() -> Self {
        Self {
            all_countries: Vec::new(),
            displayed: Vec::new(),
            current_page: 1,
            has_more: true,
            is_searching: false,
            loading: true,
            loading_more: false,
            error: None,
            search_query: String::new(),
            search_generation: 0,
        }
    }

    /// Resets the visible window to the first browse page of `all_countries`.
    pub(crate) fn show_first_page(&mut self) {
        let end = self.all_countries.len().min(PAGE_SIZE);
        self.displayed = self.all_countries[..end].to_vec();
        self.current_page = 1;
        self.has_more = self.all_countries.len() > PAGE_SIZE;
    }

    /// Status line text for the list header.
    pub fn summary(&self) -> String {
        let count = self.displayed.len();
        if !self.search_query.is_empty() {
            let noun = if count == 1 { "country" } else { "countries" };
            format!("Showing {count} {noun} for \"{}\"", self.search_query)
        } else if self.has_more {
            format!("Showing {count} countries (loading more as you scroll)")
        } else {
            format!("Showing {count} countries")
        }
    }
}
