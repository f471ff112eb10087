use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{
    CountryDetail, CountryList, ErrorView, LoadingView, SearchBar, TitleBar,
};

pub const KEY_HINTS: &str = "↑↓ Browse  Enter Details  Esc Clear  Ctrl+C Quit";
pub const FOOTER_TEXT: &str = "Data provided by REST Countries API (restcountries.com)";

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Length(3), Length(1), Min(0), Length(1)]);
    let [title_area, search_area, status_area, main_area, footer_area] =
        layout.areas(frame.area());

    TitleBar::new(KEY_HINTS.to_string(), app.is_searching).render(frame, title_area);

    SearchBar {
        query: &app.search_query,
        searching: app.is_searching,
    }
    .render(frame, search_area);

    // The sentinel only counts when the list is actually on screen
    tui.country_list.sentinel_visible = false;

    if app.loading {
        let label = if app.is_searching {
            "Searching countries..."
        } else {
            "Loading countries..."
        };
        LoadingView {
            label,
            spinner_frame,
        }
        .render(frame, main_area);
    } else if let Some(message) = app.error.as_deref() {
        ErrorView { message }.render(frame, main_area);
    } else {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                app.summary(),
                Style::default().fg(Color::Gray),
            )))
            .alignment(Alignment::Center),
            status_area,
        );
        CountryList {
            state: &mut tui.country_list,
            countries: &app.displayed,
            has_more: app.has_more,
            loading_more: app.loading_more,
            spinner_frame,
        }
        .render(frame, main_area);
    }

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            FOOTER_TEXT,
            Style::default().fg(Color::DarkGray),
        )))
        .alignment(Alignment::Center),
        footer_area,
    );

    if let Some(detail) = tui.detail.as_mut() {
        CountryDetail { state: detail }.render(frame, frame.area());
    }
}
