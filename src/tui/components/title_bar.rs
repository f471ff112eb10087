//! # TitleBar Component
//!
//! Top bar showing the app title, a search-mode marker and a trailing hint
//! line. The main screen passes the key hints (`ui::KEY_HINTS`).
//!
//! TitleBar is purely presentational: it receives all data as props and has
//! no internal state.
//!
//! ```rust,ignore
//! TitleBar::new(KEY_HINTS.to_string(), app.is_searching).render(frame, area);
//! ```
//!
//! Renders `"Countries Explorer [search] | <hints>"`, dropping the marker
//! outside search mode and the `" | <hints>"` part when the hints are empty.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub const APP_TITLE: &str = "Countries Explorer";

/// Top status bar component.
///
/// # Props
///
/// - `status_message`: Text after the title, e.g. the key hints
/// - `searching`: Whether the core is in search mode
pub struct TitleBar {
    pub status_message: String,
    pub searching: bool,
}

impl TitleBar {
    pub fn new(status_message: String, searching: bool) -> Self {
        Self {
            status_message,
            searching,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(
            APP_TITLE,
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )];
        if self.searching {
            spans.push(Span::styled(" [search]", Style::default().fg(Color::Cyan)));
        }
        if !self.status_message.is_empty() {
            spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
            spans.push(Span::raw(self.status_message.clone()));
        }

        frame.render_widget(Line::from(spans), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
            })
            .unwrap();

        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_title_bar_with_hints() {
        let text = rendered(&mut TitleBar::new("Enter Details".to_string(), false));
        assert!(text.contains(APP_TITLE));
        assert!(text.contains("Enter Details"));
        assert!(!text.contains("[search]"));
    }

    #[test]
    fn test_title_bar_in_search_mode() {
        let text = rendered(&mut TitleBar::new("Searching...".to_string(), true));
        assert!(text.contains("[search]"));
        assert!(text.contains("Searching..."));
    }

    #[test]
    fn test_title_bar_default_no_status() {
        let text = rendered(&mut TitleBar::new(String::new(), false));
        assert!(text.contains(APP_TITLE));
        assert!(!text.contains('|'));
    }
}
