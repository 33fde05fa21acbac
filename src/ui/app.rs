use crate::config::Config;
use crate::feed::{FeedState, Viewport};
use crate::ui::cards::content_height;
use crate::ui::layout::body_rect;
use ratatui::layout::Rect;

/// Terminal-side view state: the latest feed snapshot plus scroll position.
///
/// Holds no tasks or channels; the runtime drains [`App::take_viewport`] and
/// [`App::take_remount_request`] after each event.
pub struct App {
    should_quit: bool,
    remount_requested: bool,
    feed: FeedState,
    not_found_message: String,
    scroll_step: u32,
    scroll_offset: u32,
    body_height: u32,
    pending_viewport: Option<Viewport>,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            should_quit: false,
            remount_requested: false,
            feed: FeedState::mounted(config.feed.start_page),
            not_found_message: config.feed.not_found_message.clone(),
            scroll_step: u32::from(config.ui.scroll_step.max(1)),
            scroll_offset: 0,
            body_height: 0,
            pending_viewport: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn request_remount(&mut self) {
        self.remount_requested = true;
    }

    pub fn take_remount_request(&mut self) -> bool {
        std::mem::take(&mut self.remount_requested)
    }

    /// Start over with a freshly mounted feed.
    pub fn reset(&mut self, config: &Config, state: FeedState) {
        self.not_found_message = config.feed.not_found_message.clone();
        self.scroll_step = u32::from(config.ui.scroll_step.max(1));
        self.feed = state;
        self.scroll_offset = 0;
        self.pending_viewport = None;
    }

    pub fn feed(&self) -> &FeedState {
        &self.feed
    }

    pub fn not_found_message(&self) -> &str {
        &self.not_found_message
    }

    pub fn scroll_offset(&self) -> u32 {
        self.scroll_offset
    }

    pub fn content_height(&self) -> u32 {
        content_height(&self.feed, &self.not_found_message)
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.scroll_offset, self.body_height, self.content_height())
    }

    /// Terminal resized to `cols`×`rows`.
    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        let body = body_rect(Rect::new(0, 0, cols, rows));
        self.body_height = u32::from(body.height);
        self.clamp_offset();
    }

    pub fn on_feed_update(&mut self, state: FeedState) {
        let page_advanced = state.page > self.feed.page;
        self.feed = state;
        self.clamp_offset();
        // A page that doesn't fill the screen leaves the viewport at the
        // bottom with nothing left to scroll, so report it once here.
        if page_advanced && !self.feed.is_loading {
            self.pending_viewport = Some(self.viewport());
        }
    }

    pub fn scroll_down(&mut self, rows: u32) {
        self.scroll_offset = self.scroll_offset.saturating_add(rows).min(self.max_offset());
        self.pending_viewport = Some(self.viewport());
    }

    pub fn scroll_up(&mut self, rows: u32) {
        self.scroll_offset = self.scroll_offset.saturating_sub(rows);
        self.pending_viewport = Some(self.viewport());
    }

    pub fn step_down(&mut self) {
        self.scroll_down(self.scroll_step);
    }

    pub fn step_up(&mut self) {
        self.scroll_up(self.scroll_step);
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.body_height.max(1));
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.body_height.max(1));
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_up(self.scroll_offset);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_down(self.max_offset());
    }

    /// Viewport produced by the last scroll, if not yet published.
    pub fn take_viewport(&mut self) -> Option<Viewport> {
        self.pending_viewport.take()
    }

    fn max_offset(&self) -> u32 {
        self.content_height().saturating_sub(self.body_height)
    }

    fn clamp_offset(&mut self) {
        self.scroll_offset = self.scroll_offset.min(self.max_offset());
    }
}
