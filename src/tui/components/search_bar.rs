//! # Search Bar Component
//!
//! Single-line input bound to `App::search_query`. The bar keeps no text of
//! its own: every edit produces the next query string, the caller dispatches
//! it as `Action::Search`, and the next frame renders whatever the core now
//! holds. The box therefore always shows the latest keystroke, whatever the
//! state of the request behind it.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;
use crate::tui::event::TuiEvent;

pub const PLACEHOLDER: &str = "Search for any country...";

/// Applies an editing event to `current`, returning the new query if the
/// event edits text. Navigation events return `None`.
pub fn edit_query(current: &str, event: &TuiEvent) -> Option<String> {
    match event {
        TuiEvent::InputChar(c) => {
            let mut next = current.to_string();
            next.push(*c);
            Some(next)
        }
        TuiEvent::Paste(text) => {
            // Single-line box: newlines become spaces
            let pasted: String = text
                .chars()
                .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
                .collect();
            Some(format!("{current}{pasted}"))
        }
        TuiEvent::Backspace => {
            if current.is_empty() {
                return None;
            }
            let mut next = current.to_string();
            next.pop();
            Some(next)
        }
        TuiEvent::ClearInput if !current.is_empty() => Some(String::new()),
        _ => None,
    }
}

pub struct SearchBar<'a> {
    pub query: &'a str,
    pub searching: bool,
}

impl Component for SearchBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.searching {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .title(" Search ")
            .border_style(border_style);

        let line = if self.query.is_empty() {
            Line::from(Span::styled(
                PLACEHOLDER,
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ))
        } else {
            Line::from(vec![
                Span::styled("/ ", Style::default().fg(Color::DarkGray)),
                Span::raw(self.query),
            ])
        };

        let inner = block.inner(area);
        frame.render_widget(Paragraph::new(line).block(block), area);

        if inner.width > 0 && inner.height > 0 {
            let typed = if self.query.is_empty() {
                0
            } else {
                2 + self.query.width() as u16
            };
            let x = inner.x + typed.min(inner.width.saturating_sub(1));
            frame.set_cursor_position(Position::new(x, inner.y));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_typing_appends() {
        assert_eq!(edit_query("fr", &TuiEvent::InputChar('a')), Some("fra".to_string()));
    }

    #[test]
    fn test_backspace_on_empty_is_ignored() {
        assert_eq!(edit_query("", &TuiEvent::Backspace), None);
        assert_eq!(edit_query("ab", &TuiEvent::Backspace), Some("a".to_string()));
        assert_eq!(edit_query("ñ", &TuiEvent::Backspace), Some(String::new()));
    }

    #[test]
    fn test_paste_flattens_newlines() {
        assert_eq!(
            edit_query("new", &TuiEvent::Paste(" zea\nland".to_string())),
            Some("new zea land".to_string())
        );
    }

    #[test]
    fn test_clear_and_navigation() {
        assert_eq!(edit_query("peru", &TuiEvent::ClearInput), Some(String::new()));
        assert_eq!(edit_query("", &TuiEvent::ClearInput), None);
        assert_eq!(edit_query("peru", &TuiEvent::CursorDown), None);
    }

    #[test]
    fn test_renders_placeholder_when_empty() {
        let backend = TestBackend::new(40, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                SearchBar {
                    query: "",
                    searching: false,
                }
                .render(f, f.area())
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        let row: String = (0..40).map(|x| buffer[(x, 1)].symbol().to_string()).collect();
        assert!(row.contains("Search for any country..."));
    }
}
