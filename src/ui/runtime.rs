use std::sync::mpsc;
use std::sync::Arc;

use anyhow::Context;
use tokio::runtime::Runtime;
use tokio::task::JoinHandle;

use crate::config::{Config, ConfigStore};
use crate::feed::{FeedView, ScrollEvents};
use crate::query::GraphQlClient;
use crate::shutdown::ShutdownHandle;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// A mounted feed view plus the task relaying its state changes to the UI.
struct MountedFeed {
    view: FeedView,
    forwarder: JoinHandle<()>,
}

impl MountedFeed {
    fn mount(
        config: &Config,
        scroll: &ScrollEvents,
        events: mpsc::Sender<AppEvent>,
    ) -> anyhow::Result<Self> {
        let client = GraphQlClient::new(&config.api).context("Failed to build query client")?;
        let view = FeedView::mount(Arc::new(client), scroll, &config.feed);

        let mut updates = view.subscribe();
        let forwarder = tokio::spawn(async move {
            while updates.changed().await.is_ok() {
                if events.send(AppEvent::FeedUpdated).is_err() {
                    break;
                }
            }
        });

        Ok(Self { view, forwarder })
    }
}

impl Drop for MountedFeed {
    fn drop(&mut self) {
        self.forwarder.abort();
    }
}

/// Run the interactive feed until the user quits or shutdown is signalled.
///
/// `overrides` is re-applied every time the config is reloaded from disk.
pub fn run<F>(
    runtime: &Runtime,
    config: ConfigStore,
    overrides: F,
    shutdown: ShutdownHandle,
) -> anyhow::Result<()>
where
    F: Fn(&mut Config),
{
    let _enter = runtime.enter();
    let (mut terminal, guard) = setup_terminal().context("Failed to set up terminal")?;

    let initial = config.get();
    let tick_rate = initial.ui.tick_rate();
    let events = EventHandler::new(tick_rate, shutdown.clone());
    let scroll = ScrollEvents::new();

    let mut app = App::new(&initial);
    let mut mounted = MountedFeed::mount(&initial, &scroll, events.sender())?;
    app.reset(&initial, mounted.view.state());
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() || shutdown.is_shutting_down() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Mouse(mouse)) => handle_mouse(&mut app, mouse),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::Tick) => {}
            Ok(AppEvent::FeedUpdated) => app.on_feed_update(mounted.view.state()),
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }

        if let Some(viewport) = app.take_viewport() {
            scroll.publish(viewport);
        }

        if app.take_remount_request() {
            match config.reload_with(&overrides) {
                Ok(()) => tracing::info!(path = %config.path().display(), "Config reloaded"),
                Err(err) => tracing::warn!(
                    path = %config.path().display(),
                    error = %err,
                    "Config reload failed, keeping previous config"
                ),
            }
            let current = config.get();
            // Tear the old view down before the new one subscribes.
            drop(mounted);
            mounted = MountedFeed::mount(&current, &scroll, events.sender())?;
            app.reset(&current, mounted.view.state());
        }
    }

    drop(mounted);
    shutdown.signal();
    drop(guard);
    Ok(())
}
