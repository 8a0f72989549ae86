//! One-shot reveal timer.
//!
//! After the last round the front end shows "Calculating Results..." and
//! schedules the summary. The timer runs on a worker thread and posts a
//! `Ticket` back over a channel for the UI side to poll.
//!
//! A ticket is honored only if it is the one most recently scheduled and
//! its epoch still matches the engine's. Anything else (a cancelled timer,
//! a timer from before a rematch or reset) is dropped.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::sync::Arc;
use std::time::Duration;

use log::debug;

/// Delivery notice from a fired timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket {
    /// Session epoch the timer was scheduled for.
    pub epoch: u64,
    id: u64,
}

#[derive(Debug)]
struct Pending {
    id: u64,
    cancelled: Arc<AtomicBool>,
}

/// Schedules and receives reveal tickets.
#[derive(Debug)]
pub struct RevealTimer {
    delay: Duration,
    sender: mpsc::Sender<Ticket>,
    receiver: mpsc::Receiver<Ticket>,
    pending: Option<Pending>,
    next_id: u64,
}

impl RevealTimer {
    /// Create a timer that fires `delay` after each `schedule`.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            delay,
            sender,
            receiver,
            pending: None,
            next_id: 0,
        }
    }

    /// The configured delay.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Start a timer for session `epoch`, replacing any pending one.
    pub fn schedule(&mut self, epoch: u64) -> Ticket {
        self.cancel();

        self.next_id += 1;
        let ticket = Ticket {
            epoch,
            id: self.next_id,
        };
        let cancelled = Arc::new(AtomicBool::new(false));
        self.pending = Some(Pending {
            id: ticket.id,
            cancelled: Arc::clone(&cancelled),
        });

        let sender = self.sender.clone();
        let delay = self.delay;
        std::thread::spawn(move || {
            std::thread::sleep(delay);
            if !cancelled.load(Ordering::Acquire) {
                // The receiver may be gone if the front end shut down first
                let _ = sender.send(ticket);
            }
        });

        debug!("reveal scheduled in {:?} (epoch {})", self.delay, epoch);
        ticket
    }

    /// Cancel the pending timer, if any.
    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.cancelled.store(true, Ordering::Release);
            debug!("reveal {} cancelled", pending.id);
        }
    }

    /// Check if a timer is scheduled and not yet accepted.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Take a delivered ticket without waiting.
    pub fn try_recv(&self) -> Option<Ticket> {
        self.receiver.try_recv().ok()
    }

    /// Wait up to `timeout` for a delivered ticket.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<Ticket> {
        self.receiver.recv_timeout(timeout).ok()
    }

    /// Decide whether `ticket` should trigger the reveal.
    ///
    /// Accepting clears the pending timer.
    pub fn accept(&mut self, ticket: Ticket, current_epoch: u64) -> bool {
        let current = matches!(&self.pending, Some(p) if p.id == ticket.id)
            && ticket.epoch == current_epoch;

        if current {
            self.pending = None;
        } else {
            debug!(
                "ignored stale reveal {} (epoch {}, now {})",
                ticket.id, ticket.epoch, current_epoch
            );
        }
        current
    }
}

impl Drop for RevealTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHORT: Duration = Duration::from_millis(10);
    const PATIENCE: Duration = Duration::from_secs(2);

    #[test]
    fn test_fires_once() {
        let mut timer = RevealTimer::new(SHORT);
        let scheduled = timer.schedule(1);

        let ticket = timer.recv_timeout(PATIENCE).unwrap();
        assert_eq!(ticket, scheduled);
        assert!(timer.accept(ticket, 1));
        assert!(!timer.is_pending());

        // Nothing else arrives
        assert!(timer.recv_timeout(SHORT * 5).is_none());
    }

    #[test]
    fn test_stale_epoch_rejected() {
        let mut timer = RevealTimer::new(SHORT);
        timer.schedule(1);

        let ticket = timer.recv_timeout(PATIENCE).unwrap();
        assert!(!timer.accept(ticket, 2));
    }

    #[test]
    fn test_cancelled_timer_never_delivers() {
        let mut timer = RevealTimer::new(SHORT);
        timer.schedule(1);
        timer.cancel();

        assert!(!timer.is_pending());
        assert!(timer.recv_timeout(SHORT * 10).is_none());
    }

    #[test]
    fn test_reschedule_supersedes() {
        let mut timer = RevealTimer::new(SHORT);
        let first = timer.schedule(1);
        let second = timer.schedule(1);
        assert_ne!(first, second);

        // Only the replacement fires
        let ticket = timer.recv_timeout(PATIENCE).unwrap();
        assert_eq!(ticket, second);
        assert!(timer.accept(ticket, 1));
        assert!(timer.recv_timeout(SHORT * 5).is_none());
    }
}
