//! Dashboard clock timer.
//!
//! The timer lives exactly as long as the dashboard is on screen: it is
//! started on entry and the task is aborted when the handle is dropped.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use super::event::AppEvent;
use crate::core::dashboard::Screen;

/// Handle to a running clock task.  Dropping it stops the task.
#[derive(Debug)]
pub struct ClockTimer {
    handle: JoinHandle<()>,
}

impl ClockTimer {
    /// Spawn a task that sends [`AppEvent::ClockTick`] every `period`.  The
    /// first tick fires immediately so the clock is fresh on entry.
    pub fn start(period: Duration, tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if tx.send(AppEvent::ClockTick).is_err() {
                    break;
                }
            }
        });
        tracing::debug!("clock timer started ({period:?})");
        Self { handle }
    }

    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }
}

impl Drop for ClockTimer {
    fn drop(&mut self) {
        self.handle.abort();
        tracing::debug!("clock timer stopped");
    }
}

/// Start or stop the timer so that it runs only while `screen` is the
/// dashboard.
pub fn sync_clock(
    clock: &mut Option<ClockTimer>,
    screen: Screen,
    period: Duration,
    tx: &mpsc::UnboundedSender<AppEvent>,
) {
    match (screen, clock.is_some()) {
        (Screen::Dashboard, false) => *clock = Some(ClockTimer::start(period, tx.clone())),
        (Screen::DiffViewer, true) => *clock = None,
        _ => {}
    }
}
