//! Counting semaphore backed by a fixed-capacity blocking channel.
//!
//! Holding a permit is modeled as occupying one slot of a bounded channel:
//! `acquire` sends a unit into the channel (blocking while it is full) and
//! `release` takes one back out. The semaphore owns both channel ends, so
//! the slot pool can never disconnect underneath a caller.

use crossbeam_channel::{bounded, select, Receiver, Sender};

/// Failure modes of [`Semaphore::acquire_or_cancel`].
#[derive(Debug, PartialEq, Eq)]
pub enum AcquireError {
    /// The cancellation channel fired (or disconnected) before a slot came
    /// free. No permit was acquired.
    Cancelled,
}

impl core::fmt::Display for AcquireError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AcquireError::Cancelled => f.write_str("semaphore acquire cancelled"),
        }
    }
}

impl std::error::Error for AcquireError {}

/// Counting semaphore with a capacity fixed at construction.
///
/// Permits are plain counters, not RAII guards: every successful acquire
/// must be paired with exactly one [`release`](Semaphore::release).
pub struct Semaphore {
    slots: Sender<()>,
    returns: Receiver<()>,
    capacity: usize,
}

impl Semaphore {
    /// Create a semaphore with `permits` slots.
    ///
    /// # Panics
    /// Panics if `permits` is zero; a zero-capacity pool could never grant
    /// a permit.
    pub fn new(permits: usize) -> Self {
        assert!(permits > 0, "semaphore capacity must be at least 1");
        let (slots, returns) = bounded(permits);
        Self {
            slots,
            returns,
            capacity: permits,
        }
    }

    /// Acquire one permit, blocking until a slot is free.
    pub fn acquire(&self) {
        self.slots
            .send(())
            .expect("slot pool receiver is owned by this semaphore");
    }

    /// Acquire one permit, blocking until a slot is free or `cancel`
    /// delivers a message (or disconnects). On cancellation nothing is
    /// acquired and the error is returned to the caller to propagate.
    pub fn acquire_or_cancel(&self, cancel: &Receiver<()>) -> Result<(), AcquireError> {
        select! {
            send(self.slots, ()) -> res => {
                res.expect("slot pool receiver is owned by this semaphore");
                Ok(())
            }
            recv(cancel) -> _ => Err(AcquireError::Cancelled),
        }
    }

    /// Acquire one permit without blocking. Returns `false` when no slot is
    /// free.
    pub fn try_acquire(&self) -> bool {
        self.slots.try_send(()).is_ok()
    }

    /// Return one permit to the pool.
    ///
    /// # Panics
    /// Panics when called without a matching acquire; an unbalanced release
    /// indicates a bookkeeping bug in the caller.
    pub fn release(&self) {
        self.returns
            .try_recv()
            .expect("release called without a matching acquire");
    }

    /// Total number of slots.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Permits currently held.
    pub fn in_use(&self) -> usize {
        self.slots.len()
    }

    /// Permits currently free.
    pub fn available(&self) -> usize {
        self.capacity - self.slots.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Invariant: counters track acquire/release exactly up to capacity.
    #[test]
    fn counters_track_usage() {
        let s = Semaphore::new(2);
        assert_eq!(s.capacity(), 2);
        assert_eq!(s.in_use(), 0);
        assert_eq!(s.available(), 2);

        s.acquire();
        assert_eq!(s.in_use(), 1);
        assert!(s.try_acquire());
        assert_eq!(s.available(), 0);

        // Pool exhausted: non-blocking acquire must fail.
        assert!(!s.try_acquire());

        s.release();
        assert_eq!(s.available(), 1);
        s.release();
        assert_eq!(s.in_use(), 0);
    }

    /// Invariant: cancellation surfaces as an error and acquires nothing.
    #[test]
    fn cancel_while_full() {
        let s = Semaphore::new(1);
        s.acquire();

        let (cancel_tx, cancel_rx) = crossbeam_channel::bounded(1);
        cancel_tx.send(()).unwrap();
        assert_eq!(s.acquire_or_cancel(&cancel_rx), Err(AcquireError::Cancelled));
        assert_eq!(s.in_use(), 1, "failed acquire must not consume a slot");

        s.release();
    }

    /// Invariant: with a free slot, acquire_or_cancel succeeds even if the
    /// cancellation channel is already fired.
    #[test]
    fn acquire_succeeds_when_slot_free() {
        let s = Semaphore::new(1);
        let (_cancel_tx, cancel_rx) = crossbeam_channel::bounded::<()>(1);
        assert_eq!(s.acquire_or_cancel(&cancel_rx), Ok(()));
        assert_eq!(s.in_use(), 1);
        s.release();
    }

    /// Invariant: unbalanced release is a caller bug and panics.
    #[test]
    #[should_panic(expected = "without a matching acquire")]
    fn release_without_acquire_panics() {
        let s = Semaphore::new(1);
        s.release();
    }

    /// Invariant: zero capacity is rejected at construction.
    #[test]
    #[should_panic(expected = "at least 1")]
    fn zero_capacity_rejected() {
        let _ = Semaphore::new(0);
    }
}
