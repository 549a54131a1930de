//! Terminal event abstraction.
//!
//! Wraps crossterm events into a simpler enum and runs a background task that
//! forwards them over a channel so the main loop stays non-blocking.  The
//! dashboard clock timer shares the same channel.

use std::time::Duration;

use crossterm::event::{self, Event as CtEvent, KeyEvent, KeyEventKind};
use tokio::sync::mpsc;

/// High-level events consumed by the application.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    /// Bracketed paste into the focused input.
    Paste(String),
    Resize(u16, u16),
    Tick,
    /// Periodic wall-clock refresh from the dashboard timer.
    ClockTick,
}

/// Spawns a background task that polls the terminal for events and sends them
/// through `tx`.
pub fn spawn_event_reader(tick_rate: Duration, tx: mpsc::UnboundedSender<AppEvent>) {
    tokio::spawn(async move {
        loop {
            // Use crossterm's poll with the tick rate so we can send Tick
            // events even when nothing is happening.
            let has_event = event::poll(tick_rate).unwrap_or(false);
            if has_event {
                if let Ok(ev) = event::read() {
                    let app_event = match ev {
                        // Windows reports releases too; only presses edit text.
                        CtEvent::Key(k) if k.kind != KeyEventKind::Release => AppEvent::Key(k),
                        CtEvent::Paste(text) => AppEvent::Paste(text),
                        CtEvent::Resize(w, h) => AppEvent::Resize(w, h),
                        _ => continue,
                    };
                    if tx.send(app_event).is_err() {
                        break; // receiver dropped
                    }
                }
            } else {
                // No event within tick_rate — send a tick.
                if tx.send(AppEvent::Tick).is_err() {
                    break;
                }
            }
        }
    });
}
