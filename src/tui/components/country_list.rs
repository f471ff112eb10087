//! # Country List Component
//!
//! Scrollable column of country cards with an infinite-scroll sentinel.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `CountryListState` lives in `TuiState` (selection, sentinel flag)
//! - `CountryList` is created each frame with borrowed state and props
//!
//! ## Selection identity
//!
//! The selection is remembered by `cca3`, not by index. When the visible
//! list changes (page appended, search results swapped in) `sync()` finds the
//! same country again, or falls back to the top of the list.
//!
//! ## Sentinel
//!
//! While more pages exist, a footer row sits below the last card. If the
//! last card is on screen after a render, `sentinel_visible` is set and the
//! event loop asks the core for the next page.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, ListState, Paragraph};
use unicode_width::UnicodeWidthStr;

use super::SPINNER;
use crate::core::format::format_population;
use crate::countries::Country;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Lines per card (name, capital/population, region).
pub const CARD_HEIGHT: u16 = 3;

/// Events emitted by the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEvent {
    /// Open the detail view for the card at this index.
    Open(usize),
}

#[derive(Default)]
pub struct CountryListState {
    pub list_state: ListState,
    selected_code: Option<String>,
    len: usize,
    /// Cards that fit in the last rendered viewport.
    page_rows: usize,
    /// True if the last render showed the final card while more pages exist.
    pub sentinel_visible: bool,
}

impl CountryListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Re-anchors the selection on the current list contents.
    pub fn sync(&mut self, countries: &[Country]) {
        self.len = countries.len();
        if countries.is_empty() {
            self.list_state.select(None);
            self.selected_code = None;
            return;
        }

        let index = self
            .selected_code
            .as_deref()
            .and_then(|code| countries.iter().position(|c| c.cca3 == code));

        match index {
            Some(i) => self.list_state.select(Some(i)),
            None => {
                self.list_state.select(Some(0));
                *self.list_state.offset_mut() = 0;
                self.selected_code = Some(countries[0].cca3.clone());
            }
        }
    }

    fn move_to(&mut self, index: usize, code: Option<&str>) {
        self.list_state.select(Some(index));
        self.selected_code = code.map(str::to_string);
    }

    fn step(&self, delta: isize) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        let current = self.list_state.selected().unwrap_or(0) as isize;
        let max = self.len as isize - 1;
        Some((current + delta).clamp(0, max) as usize)
    }

    /// Moves the selection and records the `cca3` at the new position.
    pub fn navigate(&mut self, event: &TuiEvent, countries: &[Country]) -> bool {
        let page = self.page_rows.max(1) as isize;
        let target = match event {
            TuiEvent::CursorUp => self.step(-1),
            TuiEvent::CursorDown => self.step(1),
            TuiEvent::PageUp => self.step(-page),
            TuiEvent::PageDown => self.step(page),
            TuiEvent::Home => self.step(-(self.len as isize)),
            TuiEvent::End => self.step(self.len as isize),
            _ => return false,
        };
        if let Some(index) = target {
            let code = countries.get(index).map(|c| c.cca3.as_str());
            self.move_to(index, code);
        }
        true
    }
}

impl EventHandler for CountryListState {
    type Event = ListEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<ListEvent> {
        match event {
            TuiEvent::Submit => self.list_state.selected().map(ListEvent::Open),
            _ => None,
        }
    }
}

/// Transient render wrapper for the card list.
pub struct CountryList<'a> {
    pub state: &'a mut CountryListState,
    pub countries: &'a [Country],
    pub has_more: bool,
    pub loading_more: bool,
    pub spinner_frame: usize,
}

impl Component for CountryList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.sentinel_visible = false;

        if self.countries.is_empty() {
            render_empty(frame, area);
            return;
        }

        let footer_height = if self.has_more { 1 } else { 0 };
        let [list_area, footer_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(footer_height)]).areas(area);

        let selected = self.state.list_state.selected();
        let items: Vec<ListItem> = self
            .countries
            .iter()
            .enumerate()
            .map(|(i, c)| card(c, selected == Some(i), list_area.width))
            .collect();

        frame.render_stateful_widget(List::new(items), list_area, &mut self.state.list_state);

        let rows = (list_area.height / CARD_HEIGHT) as usize;
        self.state.page_rows = rows;
        let first_visible = self.state.list_state.offset();
        let last_on_screen = first_visible + rows >= self.countries.len();

        if self.has_more {
            self.state.sentinel_visible = last_on_screen;
            let footer = if self.loading_more {
                let spinner = SPINNER[self.spinner_frame % SPINNER.len()];
                Line::from(Span::styled(
                    format!("{spinner} Loading more countries..."),
                    Style::default().fg(Color::Blue),
                ))
            } else {
                Line::from(Span::styled(
                    "↓ Scroll for more countries",
                    Style::default().fg(Color::DarkGray),
                ))
            };
            frame.render_widget(
                Paragraph::new(footer).alignment(Alignment::Center),
                footer_area,
            );
        }
    }
}

fn card(country: &Country, selected: bool, width: u16) -> ListItem<'static> {
    let (marker, name_style) = if selected {
        (
            "▌ ",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        )
    } else {
        ("  ", Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
    };
    let max_name = (width as usize).saturating_sub(4);

    let capital = country.primary_capital().unwrap_or("No capital").to_string();
    let lines = vec![
        Line::from(vec![
            Span::styled(marker, Style::default().fg(Color::Cyan)),
            Span::styled(truncate_str(&country.name.common, max_name), name_style),
        ]),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(capital, Style::default().fg(Color::Blue)),
            Span::styled("  ·  ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format_population(country.population),
                Style::default().fg(Color::Green),
            ),
        ]),
        Line::from(Span::styled(
            format!("  {}", country.region_line()),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    ListItem::new(lines)
}

fn render_empty(frame: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "No countries found matching your search.",
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            "Try searching for a different country name.",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::default()),
        area,
    );
}

/// Truncate a string to fit within `max_width` columns, adding "..." if needed.
fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > max_width - 3 {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str("...");
    out
}
