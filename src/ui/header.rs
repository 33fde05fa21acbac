use crate::feed::FeedState;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, PORTAL_GREEN};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub const PAGE_TITLE: &str = "Home";

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, state: &FeedState) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled(
                PAGE_TITLE,
                Style::default().fg(PORTAL_GREEN).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("{} characters", state.items.len()), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("next page {}", state.page), text_style),
        ];
        if state.is_loading {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled("loading", Style::default().fg(PORTAL_GREEN)));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
