//! Headless mode: load pages sequentially and print one line per card.

use std::io::Write;
use std::process::ExitCode;
use std::sync::Arc;

use crate::config::FeedConfig;
use crate::feed::{FeedErrorKind, PagedFeedController};
use crate::query::{Character, QueryClient};
use crate::ui::cards::{FAILURE_MESSAGE, FAILURE_TITLE, NOTHING_TO_SHOW};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DumpOutcome {
    /// Every requested page loaded.
    Completed,
    /// Stopped at the not-found sentinel.
    Exhausted,
    /// Stopped at any other failure.
    Failed(String),
}

impl DumpOutcome {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            DumpOutcome::Completed | DumpOutcome::Exhausted => ExitCode::SUCCESS,
            DumpOutcome::Failed(_) => ExitCode::from(1),
        }
    }
}

pub fn format_card(character: &Character) -> String {
    format!(
        "#{}\t{}\t{}\t{}",
        character.id, character.name, character.status, character.image_url
    )
}

/// Load up to `pages` pages, writing cards to `out` as they arrive.
///
/// Stops early on the first failure, like the scroll trigger does.
pub async fn run_dump<W: Write>(
    client: Arc<dyn QueryClient>,
    feed: &FeedConfig,
    pages: u32,
    out: &mut W,
) -> std::io::Result<DumpOutcome> {
    let controller = PagedFeedController::new(client, feed.start_page);
    let mut printed = 0;

    for _ in 0..pages {
        controller.load_next_page().await;
        let state = controller.state();
        for character in &state.items[printed..] {
            writeln!(out, "{}", format_card(character))?;
        }
        printed = state.items.len();
        if state.error.is_some() {
            break;
        }
    }

    let state = controller.state();
    controller.tear_down();

    let outcome = match (state.error_kind(&feed.not_found_message), state.error) {
        (Some(FeedErrorKind::NotFound), _) => {
            writeln!(out, "{NOTHING_TO_SHOW}")?;
            DumpOutcome::Exhausted
        }
        (Some(FeedErrorKind::Failure), Some(message)) => {
            tracing::error!(error = %message, "Feed load failed");
            writeln!(out, "{FAILURE_TITLE}: {FAILURE_MESSAGE}")?;
            DumpOutcome::Failed(message)
        }
        _ => DumpOutcome::Completed,
    };
    out.flush()?;
    Ok(outcome)
}
