use crate::search::{SearchController, SearchState};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::{RecvTimeoutError, Sender};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::watch;

/// Run the interactive screens until the user quits.
///
/// Blocks the calling thread; searches run on `runtime`.
pub fn run(
    controller: Arc<SearchController>,
    runtime: Handle,
    tick_rate: Duration,
) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate);
    forward_search_updates(&runtime, controller.subscribe(), events.sender());
    let mut app = App::new(controller, runtime);
    tracing::info!("Interactive session started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Input(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::SearchUpdated) => app.sync_search(),
            Ok(AppEvent::Redraw) => {}
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    tracing::info!("Interactive session ended");
    Ok(())
}

/// Wake the UI loop whenever the controller publishes.
fn forward_search_updates(
    runtime: &Handle,
    mut updates: watch::Receiver<SearchState>,
    tx: Sender<AppEvent>,
) {
    runtime.spawn(async move {
        while updates.changed().await.is_ok() {
            if tx.send(AppEvent::SearchUpdated).is_err() {
                break;
            }
        }
    });
}
