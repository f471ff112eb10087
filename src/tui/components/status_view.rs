//! Full-area placeholder views: the loading spinner and the error screen.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use super::SPINNER;
use crate::tui::component::Component;

pub struct LoadingView {
    pub label: &'static str,
    pub spinner_frame: usize,
}

impl Component for LoadingView {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let spinner = SPINNER[self.spinner_frame % SPINNER.len()];
        let line = Line::from(Span::styled(
            format!("{spinner} {}", self.label),
            Style::default().fg(Color::Blue),
        ));
        let [center] = Layout::vertical([Constraint::Length(1)])
            .flex(Flex::Center)
            .areas(area);
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), center);
    }
}

/// Error screen with a retry hint. Only full-load failures end up here.
pub struct ErrorView<'a> {
    pub message: &'a str,
}

impl Component for ErrorView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                "⚠",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Something went wrong",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                self.message.to_string(),
                Style::default().fg(Color::Gray),
            )),
            Line::from(""),
            Line::from(vec![
                Span::raw("Press "),
                Span::styled("Ctrl+R", Style::default().fg(Color::Blue)),
                Span::raw(" to try again"),
            ]),
        ];
        let height = lines.len() as u16;
        let [center] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(area);
        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            center,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn text_of(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_error_view_shows_message_and_retry_hint() {
        let mut terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();
        terminal
            .draw(|f| {
                ErrorView {
                    message: "Failed to load countries. Please try again.",
                }
                .render(f, f.area())
            })
            .unwrap();
        let text = text_of(&terminal);
        assert!(text.contains("Something went wrong"));
        assert!(text.contains("Failed to load countries."));
        assert!(text.contains("Ctrl+R"));
    }

    #[test]
    fn test_loading_view_label() {
        let mut terminal = Terminal::new(TestBackend::new(40, 5)).unwrap();
        terminal
            .draw(|f| {
                LoadingView {
                    label: "Loading countries...",
                    spinner_frame: 3,
                }
                .render(f, f.area())
            })
            .unwrap();
        assert!(text_of(&terminal).contains("Loading countries..."));
    }
}
