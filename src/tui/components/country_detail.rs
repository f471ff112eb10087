//! # Country Detail Component
//!
//! Full-screen overlay with everything known about one country. Opened with
//! Enter on a card, closed with Esc or Enter.
//!
//! `DetailState` keeps its own copy of the country, so the overlay stays put
//! even if a late search response swaps the list underneath it.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};

use crate::core::format::{format_area, format_count};
use crate::countries::Country;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Timezones listed before collapsing the rest into "+N more".
const MAX_TIMEZONES: usize = 3;

pub struct DetailState {
    pub country: Country,
    pub scroll: u16,
}

/// Events emitted by the detail overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailEvent {
    Close,
}

impl DetailState {
    pub fn new(country: Country) -> Self {
        Self { country, scroll: 0 }
    }
}

impl EventHandler for DetailState {
    type Event = DetailEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<DetailEvent> {
        match event {
            TuiEvent::Escape | TuiEvent::Submit => Some(DetailEvent::Close),
            TuiEvent::CursorUp => {
                self.scroll = self.scroll.saturating_sub(1);
                None
            }
            TuiEvent::CursorDown => {
                self.scroll = self.scroll.saturating_add(1);
                None
            }
            TuiEvent::PageUp => {
                self.scroll = self.scroll.saturating_sub(10);
                None
            }
            TuiEvent::PageDown => {
                self.scroll = self.scroll.saturating_add(10);
                None
            }
            TuiEvent::Home => {
                self.scroll = 0;
                None
            }
            _ => None,
        }
    }
}

/// Transient render wrapper for the detail overlay.
pub struct CountryDetail<'a> {
    pub state: &'a mut DetailState,
}

impl Component for CountryDetail<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(80, 85, area);
        frame.render_widget(Clear, overlay);

        let country = &self.state.country;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Span::styled(
                format!(" {} ", country.name.common),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .title_bottom(Line::from(" ↑↓ Scroll  Esc Close ").centered())
            .padding(Padding::horizontal(1));

        let lines = detail_lines(country);
        // Keep at least one line on screen
        let max_scroll = (lines.len() as u16).saturating_sub(1);
        self.state.scroll = self.state.scroll.min(max_scroll);

        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((self.state.scroll, 0));
        frame.render_widget(paragraph, overlay);
    }
}

fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ))
}

fn field(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<15}"), Style::default().fg(Color::DarkGray)),
        Span::raw(value),
    ])
}

fn chips(values: Vec<String>, color: Color) -> Line<'static> {
    let mut spans = Vec::with_capacity(values.len() * 2);
    for (i, value) in values.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(format!("[{value}]"), Style::default().fg(color)));
    }
    Line::from(spans)
}

/// Builds the overlay body. Sections with no data are left out, except
/// timezones which always render.
pub fn detail_lines(country: &Country) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            country.flag_description(),
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
        )),
        Line::from(Span::styled(
            country.flags.svg.clone(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        heading("Basic Information"),
        field(
            "Capital",
            country.primary_capital().unwrap_or("No capital").to_string(),
        ),
        field("Population", format_count(country.population)),
        field("Region", country.region.clone()),
        field("Area", format_area(country.area)),
    ];

    let languages: Vec<String> = country
        .language_names()
        .into_iter()
        .map(str::to_string)
        .collect();
    if !languages.is_empty() {
        lines.push(Line::from(""));
        lines.push(heading("Languages"));
        lines.push(chips(languages, Color::Magenta));
    }

    let currencies: Vec<String> = country
        .currencies
        .values()
        .map(|c| format!("{} ({})", c.name, c.symbol))
        .collect();
    if !currencies.is_empty() {
        lines.push(Line::from(""));
        lines.push(heading("Currency"));
        lines.push(chips(currencies, Color::Green));
    }

    lines.push(Line::from(""));
    lines.push(heading("Timezones"));
    let zones: Vec<String> = country
        .timezones
        .iter()
        .take(MAX_TIMEZONES)
        .cloned()
        .collect();
    let hidden = country.timezones.len().saturating_sub(MAX_TIMEZONES);
    let mut zone_line = chips(zones, Color::Yellow);
    if hidden > 0 {
        zone_line.spans.push(Span::styled(
            format!("  +{hidden} more"),
            Style::default().fg(Color::DarkGray),
        ));
    }
    lines.push(zone_line);

    lines.push(Line::from(""));
    lines.push(heading("Additional Info"));
    lines.push(field("Official Name", country.name.official.clone()));
    lines.push(field(
        "Country Code",
        format!("{} / {}", country.cca2, country.cca3),
    ));
    if let Some(sub) = country.subregion.as_deref().filter(|s| !s.is_empty()) {
        lines.push(field("Subregion", sub.to_string()));
    }
    lines.push(field("Continents", country.continents.join(", ")));
    let borders = country.border_codes();
    if !borders.is_empty() {
        lines.push(field("Borders", borders.join(", ")));
    }

    lines
}

/// Compute a centered rect using percentage of the outer rect.
fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
