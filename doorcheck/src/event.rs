//! Terminal event plumbing
//!
//! An async task polls crossterm and forwards raw events over a channel;
//! the main loop turns them into [`EventKind`]s for components.

use std::time::Duration;

use crossterm::event::{self, KeyEvent, MouseEvent};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Raw event from crossterm before processing
#[derive(Debug)]
pub enum RawEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
}

/// The event payload components consume
#[derive(Debug, Clone)]
pub enum EventKind {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
}

/// Spawn the event polling task with cancellation support
///
/// Polls crossterm for events and sends them through `tx` until the token
/// is cancelled or the channel closes.
pub fn spawn_event_poller(
    tx: mpsc::UnboundedSender<RawEvent>,
    poll_timeout: Duration,
    loop_sleep: Duration,
    cancel_token: CancellationToken,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        const MAX_EVENTS_PER_BATCH: usize = 20;

        loop {
            tokio::select! {
                _ = cancel_token.cancelled() => {
                    info!("event poller cancelled, draining buffer");
                    // leave nothing queued in crossterm's buffer
                    while event::poll(Duration::ZERO).unwrap_or(false) {
                        let _ = event::read();
                    }
                    break;
                }
                _ = tokio::time::sleep(loop_sleep) => {
                    let mut events_processed = 0;
                    while events_processed < MAX_EVENTS_PER_BATCH
                        && event::poll(poll_timeout).unwrap_or(false)
                    {
                        events_processed += 1;
                        let raw = match event::read() {
                            Ok(event::Event::Key(key)) => RawEvent::Key(key),
                            Ok(event::Event::Mouse(mouse)) => RawEvent::Mouse(mouse),
                            Ok(event::Event::Resize(w, h)) => RawEvent::Resize(w, h),
                            _ => continue,
                        };
                        if tx.send(raw).is_err() {
                            debug!("event channel closed, stopping poller");
                            return;
                        }
                    }
                }
            }
        }
    })
}

/// Process a raw event into an [`EventKind`]
pub fn process_raw_event(raw: RawEvent) -> EventKind {
    match raw {
        RawEvent::Key(key) => EventKind::Key(key),
        RawEvent::Mouse(mouse) => EventKind::Mouse(mouse),
        RawEvent::Resize(w, h) => EventKind::Resize(w, h),
    }
}
