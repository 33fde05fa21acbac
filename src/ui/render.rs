use crate::ui::app::App;
use crate::ui::cards::render_feed;
use crate::ui::footer::render_footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app.feed()), header);
    render_feed(
        frame,
        body,
        app.feed(),
        app.not_found_message(),
        app.scroll_offset(),
    );
    render_footer(frame, footer, app.feed(), app.not_found_message());
}
