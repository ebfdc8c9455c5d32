//! Cancellable retry timer.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::controller::ControllerEvent;
use crate::domain::RetryTicket;

/// Posts `RetryElapsed` back to the controller after a delay.
///
/// Holds at most one timer. Scheduling a new ticket or cancelling the current
/// one aborts the previous task, so a superseded timer never fires.
#[derive(Debug)]
pub struct RetryScheduler {
    tx: mpsc::UnboundedSender<ControllerEvent>,
    pending: Option<(RetryTicket, JoinHandle<()>)>,
}

impl RetryScheduler {
    pub fn new(tx: mpsc::UnboundedSender<ControllerEvent>) -> Self {
        Self { tx, pending: None }
    }

    pub fn schedule(&mut self, ticket: RetryTicket, delay: Duration) {
        self.abort_pending();
        debug!(%ticket, delay_ms = delay.as_millis() as u64, "Retry scheduled");

        let tx = self.tx.clone();
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(ControllerEvent::RetryElapsed { ticket });
        });
        self.pending = Some((ticket, task));
    }

    /// Abort the timer for `ticket`. Other tickets are left alone.
    pub fn cancel(&mut self, ticket: RetryTicket) {
        if self.pending_ticket() == Some(ticket) {
            debug!(%ticket, "Retry cancelled");
            self.abort_pending();
        }
    }

    /// Ticket of a timer that has not fired yet.
    pub fn pending_ticket(&self) -> Option<RetryTicket> {
        self.pending
            .as_ref()
            .filter(|(_, task)| !task.is_finished())
            .map(|(ticket, _)| *ticket)
    }

    pub fn abort_pending(&mut self) {
        if let Some((_, task)) = self.pending.take() {
            task.abort();
        }
    }
}

impl Drop for RetryScheduler {
    fn drop(&mut self) {
        self.abort_pending();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_fires_after_delay() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = RetryScheduler::new(tx);
        let ticket = RetryTicket::new(1, 1);

        scheduler.schedule(ticket, Duration::from_millis(2000));
        tokio::time::sleep(Duration::from_millis(1999)).await;
        assert!(rx.try_recv().is_err());

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(
            rx.recv().await,
            Some(ControllerEvent::RetryElapsed { ticket })
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_prevents_firing() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = RetryScheduler::new(tx);
        let ticket = RetryTicket::new(1, 1);

        scheduler.schedule(ticket, Duration::from_millis(100));
        scheduler.cancel(ticket);
        assert_eq!(scheduler.pending_ticket(), None);

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_ignores_other_ticket() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut scheduler = RetryScheduler::new(tx);
        let ticket = RetryTicket::new(2, 1);

        scheduler.schedule(ticket, Duration::from_millis(100));
        scheduler.cancel(RetryTicket::new(1, 1));
        assert_eq!(scheduler.pending_ticket(), Some(ticket));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reschedule_supersedes() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = RetryScheduler::new(tx);
        let old = RetryTicket::new(1, 1);
        let new = RetryTicket::new(2, 2);

        scheduler.schedule(old, Duration::from_millis(100));
        scheduler.schedule(new, Duration::from_millis(300));
        tokio::time::sleep(Duration::from_millis(500)).await;

        assert_eq!(
            rx.try_recv().ok(),
            Some(ControllerEvent::RetryElapsed { ticket: new })
        );
        assert!(rx.try_recv().is_err());
    }
}
