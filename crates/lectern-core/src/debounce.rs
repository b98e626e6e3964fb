//! Debounced, cancellable request scheduling.
//!
//! Search-as-you-type must not run a query per keystroke. A [`Debouncer`]
//! holds at most one pending request; every new submission replaces it and
//! bumps a generation counter. Results produced for an older generation are
//! rejected by [`Debouncer::accept`], so a late answer to a superseded query
//! can never overwrite a newer one.
//!
//! Time is always passed in by the caller, which keeps the type usable from
//! any event loop and fully deterministic under test.
//!
//! ```rust
//! use lectern_core::Debouncer;
//! use std::time::{Duration, Instant};
//!
//! let mut debouncer = Debouncer::new(Duration::from_millis(150));
//! let t0 = Instant::now();
//!
//! debouncer.submit("to", t0);
//! debouncer.submit("topic", t0 + Duration::from_millis(100));
//!
//! assert!(debouncer.take_due(t0 + Duration::from_millis(200)).is_none());
//! let (ticket, query) = debouncer.take_due(t0 + Duration::from_millis(250)).unwrap();
//! assert_eq!(query, "topic");
//! assert!(debouncer.is_current(ticket));
//! ```

use std::time::{Duration, Instant};

/// Identifies one submission. Only the most recent ticket is current.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ticket(u64);

impl Ticket {
    /// Generation this ticket was issued for.
    pub const fn generation(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone)]
struct Pending<T> {
    ticket: Ticket,
    value: T,
    due: Instant,
}

/// Single-slot debouncer with generation-based cancellation.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    generation: u64,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    /// A debouncer that waits `delay` after the last submission.
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: 0,
            pending: None,
        }
    }

    /// Configured quiet period.
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule `value`, replacing whatever was pending.
    pub fn submit(&mut self, value: T, now: Instant) -> Ticket {
        self.generation += 1;
        let ticket = Ticket(self.generation);
        self.pending = Some(Pending {
            ticket,
            value,
            due: now + self.delay,
        });
        ticket
    }

    /// Hand out the pending value once its delay has elapsed.
    pub fn take_due(&mut self, now: Instant) -> Option<(Ticket, T)> {
        if self.pending.as_ref().is_some_and(|p| p.due <= now) {
            self.pending.take().map(|p| (p.ticket, p.value))
        } else {
            None
        }
    }

    /// When the pending value becomes due, if anything is pending.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.due)
    }

    /// Whether a submission is waiting for its deadline.
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop the pending value and invalidate every outstanding ticket.
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.pending = None;
    }

    /// Whether `ticket` belongs to the latest submission and was not cancelled.
    pub const fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.generation
    }

    /// Pass `output` through only if `ticket` is still current.
    pub fn accept<R>(&self, ticket: Ticket, output: R) -> Option<R> {
        self.is_current(ticket).then_some(output)
    }
}
