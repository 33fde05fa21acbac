use crate::feed::{FeedErrorKind, FeedState};
use crate::ui::theme::{ERROR_BORDER, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const KEY_HINTS: &str = " ↑↓/jk: Scroll │ PgUp/PgDn: Page │ Home/End │ r: Reload │ q: Quit";

pub const END_OF_FEED: &str = "end of feed";
pub const PAUSED: &str = "paused, r to retry";

/// Pagination status shown next to the version, if any.
pub fn feed_status(state: &FeedState, not_found_message: &str) -> Option<Span<'static>> {
    match state.error_kind(not_found_message)? {
        FeedErrorKind::NotFound => Some(Span::styled(END_OF_FEED, Style::default().fg(MUTED_TEXT))),
        FeedErrorKind::Failure => Some(Span::styled(PAUSED, Style::default().fg(ERROR_BORDER))),
    }
}

/// Key hints on the left; feed status and version on the right.
pub fn render_footer(frame: &mut Frame<'_>, area: Rect, state: &FeedState, not_found_message: &str) {
    let dim = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut right = Vec::new();
    if let Some(status) = feed_status(state, not_found_message) {
        right.push(status);
        right.push(Span::styled(" │ ", dim));
    }
    right.push(Span::styled(format!("v{VERSION} "), dim));

    let right = Line::from(right);
    let right_width = u16::try_from(right.width()).unwrap_or(u16::MAX);
    let [hints_area, status_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(right_width)]).areas(inner);

    frame.render_widget(Paragraph::new(Line::styled(KEY_HINTS, dim)), hints_area);
    frame.render_widget(Paragraph::new(right.right_aligned()), status_area);
}
