//! Cancellable timers for delayed session transitions.
//!
//! A [`ScheduledTask`] sleeps on its own tokio task and then sends
//! [`Command::TimerFired`] back to the session worker. Dropping the task
//! aborts it. Each task carries a ticket; firings whose ticket no longer
//! matches the pending timer are stale and ignored.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::trace;

use super::session::Command;
use crate::session::TimerKind;

/// Spawned sleep that reports back with its ticket. Aborts on drop.
pub struct ScheduledTask {
    ticket: u64,
    kind: TimerKind,
    handle: JoinHandle<()>,
}

impl ScheduledTask {
    pub fn spawn(
        ticket: u64,
        kind: TimerKind,
        delay: Duration,
        timer_tx: mpsc::UnboundedSender<Command>,
    ) -> Self {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if timer_tx.send(Command::TimerFired { ticket }).is_err() {
                trace!(ticket, "Timer fired after session worker stopped");
            }
        });

        Self {
            ticket,
            kind,
            handle,
        }
    }

    pub fn ticket(&self) -> u64 {
        self.ticket
    }

    pub fn kind(&self) -> TimerKind {
        self.kind
    }
}

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Holds at most one pending timer and hands out tickets.
pub struct Scheduler {
    next_ticket: u64,
    pending: Option<ScheduledTask>,
    timer_tx: mpsc::UnboundedSender<Command>,
}

impl Scheduler {
    pub fn new(timer_tx: mpsc::UnboundedSender<Command>) -> Self {
        Self {
            next_ticket: 0,
            pending: None,
            timer_tx,
        }
    }

    /// Schedules `kind` after `delay`, cancelling whatever was pending.
    pub fn schedule(&mut self, kind: TimerKind, delay: Duration) -> u64 {
        self.next_ticket = self.next_ticket.wrapping_add(1);
        let ticket = self.next_ticket;
        self.pending = Some(ScheduledTask::spawn(
            ticket,
            kind,
            delay,
            self.timer_tx.clone(),
        ));
        ticket
    }

    /// Drops the pending timer, if any.
    pub fn cancel(&mut self) -> Option<TimerKind> {
        self.pending.take().map(|task| task.kind())
    }

    pub fn pending(&self) -> Option<TimerKind> {
        self.pending.as_ref().map(ScheduledTask::kind)
    }

    /// Claims the pending timer if `ticket` is current.
    pub fn fire(&mut self, ticket: u64) -> Option<TimerKind> {
        let current = self
            .pending
            .as_ref()
            .is_some_and(|task| task.ticket() == ticket);
        if current { self.cancel() } else { None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn timer_reports_its_ticket() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = Scheduler::new(tx);

        let ticket = scheduler.schedule(TimerKind::WheelLanding, Duration::from_millis(4000));
        assert_eq!(scheduler.pending(), Some(TimerKind::WheelLanding));

        let Some(Command::TimerFired { ticket: fired }) = rx.recv().await else {
            panic!("expected a timer firing");
        };
        assert_eq!(fired, ticket);
        assert_eq!(scheduler.fire(fired), Some(TimerKind::WheelLanding));
        assert_eq!(scheduler.pending(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_timer_never_fires() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = Scheduler::new(tx);

        scheduler.schedule(TimerKind::BattleAdvance, Duration::from_millis(1500));
        assert_eq!(scheduler.cancel(), Some(TimerKind::BattleAdvance));

        tokio::time::sleep(Duration::from_millis(5000)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn stale_ticket_is_ignored() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut scheduler = Scheduler::new(tx);

        let first = scheduler.schedule(TimerKind::WheelLanding, Duration::from_millis(10));
        let second = scheduler.schedule(TimerKind::BattleAdvance, Duration::from_millis(10));

        assert_ne!(first, second);
        assert_eq!(scheduler.fire(first), None);
        assert_eq!(scheduler.fire(second), Some(TimerKind::BattleAdvance));
    }
}
