//! Feed body: character cards, loading indicator and error affordances.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::feed::{FeedErrorKind, FeedState};
use crate::query::Character;
use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{
    status_color, ERROR_BORDER, HEADER_TEXT, MUTED_TEXT, PORTAL_GREEN,
};

/// Rows taken by one card, separator included.
pub const CARD_HEIGHT: u32 = 4;
pub const LOADING_TEXT: &str = "Loading...";
pub const NOTHING_TO_SHOW: &str = "Nothing to Show";
pub const FAILURE_TITLE: &str = "Something Wrong";
pub const FAILURE_MESSAGE: &str = "We are working to fix this problem, try again later.";

const FAILURE_PANEL_WIDTH: u16 = 60;
const FAILURE_PANEL_HEIGHT: u16 = 5;

/// What the body shows for a given state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedBody<'a> {
    /// Generic failure panel; list and loading indicator suppressed.
    Failure,
    Cards {
        items: &'a [Character],
        loading: bool,
        nothing_to_show: bool,
    },
}

impl<'a> FeedBody<'a> {
    pub fn from_state(state: &'a FeedState, not_found_message: &str) -> Self {
        match state.error_kind(not_found_message) {
            Some(FeedErrorKind::Failure) => FeedBody::Failure,
            kind => FeedBody::Cards {
                items: &state.items,
                loading: state.is_loading,
                nothing_to_show: kind == Some(FeedErrorKind::NotFound),
            },
        }
    }
}

pub fn card_lines(character: &Character) -> Vec<Line<'static>> {
    vec![
        Line::from(vec![
            Span::styled(format!(" #{:<5}", character.id), Style::default().fg(MUTED_TEXT)),
            Span::styled(
                character.name.clone(),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw("       "),
            Span::styled(
                format!("● {}", character.status),
                Style::default().fg(status_color(&character.status)),
            ),
        ]),
        Line::from(vec![
            Span::raw("       "),
            Span::styled(character.image_url.clone(), Style::default().fg(MUTED_TEXT)),
        ]),
        Line::from(""),
    ]
}

/// Every line of the scrollable list, in document order.
pub fn feed_lines(state: &FeedState, not_found_message: &str) -> Vec<Line<'static>> {
    let FeedBody::Cards {
        items,
        loading,
        nothing_to_show,
    } = FeedBody::from_state(state, not_found_message)
    else {
        return Vec::new();
    };

    let mut lines: Vec<Line<'static>> = items.iter().flat_map(card_lines).collect();
    if loading {
        lines.push(Line::from(Span::styled(
            format!(" {LOADING_TEXT}"),
            Style::default().fg(PORTAL_GREEN),
        )));
    }
    if nothing_to_show {
        lines.push(Line::from(Span::styled(
            format!(" {NOTHING_TO_SHOW}"),
            Style::default().fg(MUTED_TEXT),
        )));
    }
    lines
}

/// Document height in rows, used for scroll-bottom detection.
pub fn content_height(state: &FeedState, not_found_message: &str) -> u32 {
    match FeedBody::from_state(state, not_found_message) {
        FeedBody::Failure => 0,
        FeedBody::Cards {
            items,
            loading,
            nothing_to_show,
        } => {
            let cards = u32::try_from(items.len())
                .unwrap_or(u32::MAX)
                .saturating_mul(CARD_HEIGHT);
            cards + u32::from(loading) + u32::from(nothing_to_show)
        }
    }
}

pub fn render_feed(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &FeedState,
    not_found_message: &str,
    scroll_offset: u32,
) {
    frame.render_widget(Clear, area);
    if FeedBody::from_state(state, not_found_message) == FeedBody::Failure {
        render_failure(frame, area);
        return;
    }

    let offset = u16::try_from(scroll_offset).unwrap_or(u16::MAX);
    let widget = Paragraph::new(feed_lines(state, not_found_message)).scroll((offset, 0));
    frame.render_widget(widget, area);
}

fn render_failure(frame: &mut Frame<'_>, area: Rect) {
    let panel = centered_rect_by_size(area, FAILURE_PANEL_WIDTH, FAILURE_PANEL_HEIGHT);
    let block = Block::default()
        .title(Span::styled(
            FAILURE_TITLE,
            Style::default().fg(ERROR_BORDER).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ERROR_BORDER));
    let widget = Paragraph::new(vec![Line::from(""), Line::from(FAILURE_MESSAGE)])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(widget, panel);
}
