//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as parameters:
//! - `TitleBar`: Top bar with title, mode and status
//! - `SearchBar`: The query box (text lives in the core, not here)
//! - `LoadingView` / `ErrorView`: Full-area placeholders
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `CountryList`: Card list with selection and the load-more sentinel
//! - `CountryDetail`: Scrollable overlay for one country
//!
//! ### Props-Based Data Flow
//!
//! Components receive external data as "props" (struct fields), not by
//! reaching into global state:
//!
//! ```rust,ignore
//! // Good: Dependencies are explicit
//! SearchBar { query: &app.search_query, searching: app.is_searching }.render(frame, area);
//!
//! // Bad: Hidden dependency on global state
//! search_bar.render(frame, area); // reads from global App
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs             (this file)
//! ├── title_bar.rs       (Top bar)
//! ├── search_bar.rs      (Query input)
//! ├── country_list.rs    (Cards + sentinel)
//! ├── country_detail.rs  (Detail overlay)
//! └── status_view.rs     (Loading / error placeholders)
//! ```

pub mod country_detail;
pub mod country_list;
pub mod search_bar;
pub mod status_view;
mod title_bar;

pub use country_detail::{CountryDetail, DetailEvent, DetailState};
pub use country_list::{CountryList, CountryListState, ListEvent};
pub use search_bar::{SearchBar, edit_query};
pub use status_view::{ErrorView, LoadingView};
pub use title_bar::TitleBar;

/// Braille spinner frames shared by the loading indicators.
pub const SPINNER: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
