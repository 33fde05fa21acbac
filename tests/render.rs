//! Rendering and scroll behaviour of the terminal view.

mod common;

use charfeed::config::Config;
use charfeed::feed::{FeedState, Viewport};
use charfeed::ui::app::App;
use charfeed::ui::cards::{FAILURE_MESSAGE, FAILURE_TITLE, LOADING_TEXT, NOTHING_TO_SHOW};
use charfeed::ui::footer::{END_OF_FEED, PAUSED};
use charfeed::ui::input::handle_key;
use charfeed::ui::render::draw;
use common::*;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

const COLS: u16 = 80;
const ROWS: u16 = 24;

fn make_app(state: FeedState) -> App {
    let config = Config::default();
    let mut app = App::new(&config);
    app.reset(&config, state);
    app.on_resize(COLS, ROWS);
    app
}

fn render(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(COLS, ROWS)).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..ROWS {
        for x in 0..COLS {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn loading_state_shows_indicator() {
    let screen = render(&make_app(FeedState::mounted(1)));
    assert!(screen.contains(LOADING_TEXT));
    assert!(screen.contains("Home"));
}

#[test]
fn cards_show_id_name_status_and_image() {
    let state = FeedState {
        page: 2,
        items: vec![rick()],
        is_loading: false,
        error: None,
    };
    let screen = render(&make_app(state));
    assert!(screen.contains("#1"));
    assert!(screen.contains("Rick"));
    assert!(screen.contains("Alive"));
    assert!(screen.contains("u1"));
    assert!(!screen.contains(LOADING_TEXT));
}

#[test]
fn not_found_on_first_page_shows_nothing_to_show() {
    let state = FeedState {
        page: 1,
        items: Vec::new(),
        is_loading: false,
        error: Some(NOT_FOUND.to_string()),
    };
    let screen = render(&make_app(state));
    assert!(screen.contains(NOTHING_TO_SHOW));
    assert!(!screen.contains(FAILURE_TITLE));
}

#[test]
fn not_found_after_cards_keeps_cards() {
    let state = FeedState {
        page: 2,
        items: vec![rick()],
        is_loading: false,
        error: Some(NOT_FOUND.to_string()),
    };
    let screen = render(&make_app(state));
    assert!(screen.contains("Rick"));
    assert!(screen.contains(NOTHING_TO_SHOW));
    assert!(!screen.contains(FAILURE_TITLE));
}

#[test]
fn generic_error_replaces_list_with_failure_panel() {
    let state = FeedState {
        page: 2,
        items: vec![rick()],
        is_loading: true,
        error: Some("Network error: connection refused".to_string()),
    };
    let screen = render(&make_app(state));
    assert!(screen.contains(FAILURE_TITLE));
    assert!(screen.contains("We are working to fix this problem"));
    assert!(!screen.contains("Rick"));
    assert!(!screen.contains(LOADING_TEXT));
    assert!(!screen.contains(NOTHING_TO_SHOW));
    assert!(FAILURE_MESSAGE.starts_with("We are working"));
}

#[test]
fn scrolling_publishes_viewport() {
    let state = FeedState {
        page: 2,
        items: page_of(1, 20),
        is_loading: false,
        error: None,
    };
    let mut app = make_app(state);
    let body_height = 18;

    handle_key(&mut app, press(KeyCode::Down));
    assert_eq!(app.take_viewport(), Some(Viewport::new(3, body_height, 80)));
    assert_eq!(app.take_viewport(), None);

    handle_key(&mut app, press(KeyCode::End));
    let viewport = app.take_viewport().unwrap();
    assert_eq!(viewport.offset, 80 - body_height);
    assert!(viewport.is_at_bottom());

    handle_key(&mut app, press(KeyCode::Home));
    assert_eq!(app.scroll_offset(), 0);
    assert!(!app.take_viewport().unwrap().is_at_bottom());
}

#[test]
fn short_page_reports_viewport_when_it_lands() {
    let mut app = make_app(FeedState::mounted(1));
    assert_eq!(app.take_viewport(), None);

    app.on_feed_update(FeedState {
        page: 2,
        items: vec![rick()],
        is_loading: false,
        error: None,
    });

    let viewport = app.take_viewport().expect("new page should report viewport");
    assert!(viewport.is_at_bottom());
}

#[test]
fn quit_and_reload_keys() {
    let mut app = make_app(FeedState::mounted(1));
    handle_key(&mut app, press(KeyCode::Char('r')));
    assert!(app.take_remount_request());
    assert!(!app.take_remount_request());

    assert!(!app.should_quit());
    handle_key(&mut app, press(KeyCode::Char('q')));
    assert!(app.should_quit());
}

#[test]
fn footer_reports_pagination_status() {
    let loaded = FeedState {
        page: 2,
        items: vec![rick()],
        is_loading: false,
        error: None,
    };
    let screen = render(&make_app(loaded.clone()));
    assert!(!screen.contains(END_OF_FEED));
    assert!(!screen.contains(PAUSED));
    assert!(screen.contains(env!("CARGO_PKG_VERSION")));

    let exhausted = FeedState {
        error: Some(NOT_FOUND.to_string()),
        ..loaded.clone()
    };
    let screen = render(&make_app(exhausted));
    assert!(screen.contains(END_OF_FEED));
    assert!(!screen.contains(PAUSED));

    let failed = FeedState {
        error: Some("Network error: connection refused".to_string()),
        ..loaded
    };
    let screen = render(&make_app(failed));
    assert!(screen.contains(PAUSED));
    assert!(!screen.contains(END_OF_FEED));
}
