//! Const-generic, statically-allocated circular queue of note pairs.
//!
//! `NoteQueue<N>` stores up to `N` [`NotePair`]s without heap allocation.
//! It has one producer (the foreground code adding notes) and one consumer
//! at a time (whichever channel's expiry interrupt fetches the next pair).
//!
//! # Empty vs. full
//!
//! `head == tail` holds both when the queue is empty and when it is full, so
//! the two states are tracked with explicit `empty`/`full` flags. At most one
//! of them is set; both clear means "partially filled".
//!
//! # Constraints
//!
//! - No resizing. A push into a full queue is dropped and reported.
//! - This type is **not** interrupt-safe by itself. Access from interrupt
//!   context goes through [`SharedPlayer`](crate::shared::SharedPlayer), which
//!   wraps every operation in a critical section.

use platform::config::NOTE_QUEUE_CAPACITY;

use crate::note::NotePair;

/// Returned by [`NoteQueue::try_push`] when the queue has no free slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct QueueFull(pub NotePair);

impl core::fmt::Display for QueueFull {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "note queue full, note pair dropped")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for QueueFull {}

/// A fixed-capacity FIFO of note pairs.
///
/// Capacity is set at compile time via the const generic `N` (default 256).
pub struct NoteQueue<const N: usize = NOTE_QUEUE_CAPACITY> {
    buf: [NotePair; N],
    /// Index of the next slot to write to.
    head: usize,
    /// Index of the next slot to read from.
    tail: usize,
    empty: bool,
    full: bool,
}

impl<const N: usize> NoteQueue<N> {
    /// Create a new, empty queue.
    ///
    /// This function is `const` so that the queue may live in a `static`
    /// without a runtime initialiser.
    pub const fn new() -> Self {
        Self {
            buf: [NotePair::SILENT; N],
            head: 0,
            tail: 0,
            empty: true,
            full: false,
        }
    }

    /// Append a pair at the back of the queue.
    ///
    /// # Errors
    ///
    /// Returns [`QueueFull`] carrying the rejected pair if no slot is free.
    /// The queue is left unchanged.
    #[allow(clippy::arithmetic_side_effects)] // Safety: head < N (checked by get_mut above), so N > 0 and head + 1 cannot overflow
    pub fn try_push(&mut self, pair: NotePair) -> Result<(), QueueFull> {
        if self.full {
            return Err(QueueFull(pair));
        }
        let Some(slot) = self.buf.get_mut(self.head) else {
            return Err(QueueFull(pair));
        };
        *slot = pair;
        self.head = (self.head + 1) % N;
        self.full = self.head == self.tail;
        self.empty = false;
        Ok(())
    }

    /// Append a pair, returning `false` if it was dropped because the queue
    /// is full.
    pub fn push(&mut self, pair: NotePair) -> bool {
        self.try_push(pair).is_ok()
    }

    /// Remove and return the pair at the front of the queue.
    ///
    /// Callers check [`is_empty`](Self::is_empty) first; pulling from an
    /// empty queue returns `None` and changes nothing.
    #[allow(clippy::arithmetic_side_effects)] // Safety: tail < N, so tail + 1 cannot overflow; N > 0 whenever the queue is non-empty
    pub fn pull(&mut self) -> Option<NotePair> {
        if self.empty {
            return None;
        }
        let pair = *self.buf.get(self.tail)?;
        self.tail = (self.tail + 1) % N;
        self.empty = self.tail == self.head;
        self.full = false;
        Some(pair)
    }

    /// The pair [`pull`](Self::pull) would return next, without removing it.
    pub fn peek(&self) -> Option<&NotePair> {
        if self.empty {
            return None;
        }
        self.buf.get(self.tail)
    }

    /// Discard all queued pairs.
    ///
    /// Resets both indices and the flags. Stored entries are not zeroed.
    pub fn clear(&mut self) {
        self.head = 0;
        self.tail = 0;
        self.empty = true;
        self.full = false;
    }

    /// Number of pairs currently queued.
    #[allow(clippy::arithmetic_side_effects)] // Safety: head, tail < N so head + N - tail < 2N; N > 0 when not full
    pub fn len(&self) -> usize {
        if self.full {
            N
        } else if self.empty {
            0
        } else {
            (self.head + N - self.tail) % N
        }
    }

    /// Maximum number of pairs the queue can hold.
    pub const fn capacity(&self) -> usize {
        N
    }

    /// `true` when no pairs are queued.
    pub fn is_empty(&self) -> bool {
        self.empty
    }

    /// `true` when every slot is occupied.
    pub fn is_full(&self) -> bool {
        self.full
    }
}

impl<const N: usize> Default for NoteQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}
