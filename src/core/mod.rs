//! # Core Application Logic
//!
//! This module contains Atlas's browse/search logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (App)          │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O in update().    │
//!                    └───────────┬─────────────┘
//!                                │
//!                 ┌──────────────┴──────────────┐
//!                 ▼                             ▼
//!          ┌────────────┐                ┌────────────┐
//!          │    TUI     │                │ Controller │
//!          │  Adapter   │                │ (--print,  │
//!          │ (ratatui)  │                │   tests)   │
//!          └────────────┘                └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all browse/search state in one place
//! - [`action`]: The `Action` enum and `update()` reducer
//! - [`controller`]: Awaits effects inline against a `CountrySource`
//! - [`config`]: Layered configuration
//! - [`ordering`]: Name collation and `cca3` de-duplication
//! - [`format`]: Population and area formatting

pub mod action;
pub mod config;
pub mod controller;
pub mod format;
pub mod ordering;
pub mod state;
