//! Deferred opponent moves.
//!
//! The opponent never moves inside the handler that made it due. Instead a
//! timer task is spawned that posts [`ControlEvent::OpponentDue`] back to the
//! UI loop once the delay elapses.

use std::time::Duration;
use tictactoe_core::OpponentTrigger;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, instrument};

/// Events posted back to the UI loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
    /// A scheduled opponent move is ready to run.
    OpponentDue(OpponentTrigger),
}

/// Owns at most one pending opponent timer.
#[derive(Debug)]
pub struct OpponentScheduler {
    tx: mpsc::UnboundedSender<ControlEvent>,
    pending: Option<JoinHandle<()>>,
}

impl OpponentScheduler {
    /// Creates a scheduler that posts to `tx`.
    pub fn new(tx: mpsc::UnboundedSender<ControlEvent>) -> Self {
        Self { tx, pending: None }
    }

    /// Schedules an opponent move after `delay`, replacing any pending one.
    ///
    /// Must be called from within a tokio runtime.
    #[instrument(skip(self))]
    pub fn schedule(&mut self, trigger: OpponentTrigger, delay: Duration) {
        self.cancel();
        let tx = self.tx.clone();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(ControlEvent::OpponentDue(trigger)).is_err() {
                debug!("UI loop gone, dropping opponent event");
            }
        }));
        debug!("Opponent move scheduled");
    }

    /// Aborts the pending timer, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            if !handle.is_finished() {
                debug!("Pending opponent move cancelled");
            }
            handle.abort();
        }
    }

    /// Whether a timer is still counting down.
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for OpponentScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}
