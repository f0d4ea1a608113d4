use thiserror::Error;

/// Errors that occur during queue operations.
///
/// Every error leaves the queue in a well-defined, still-usable state.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FifoError {
    /// The requested capacity was zero. The backing store always keeps one
    /// spare slot, so a queue must be able to hold at least one element.
    #[error("capacity must be a positive number of elements")]
    InvalidCapacity,

    /// An absent value was offered to [`insert`](crate::UnboundedFifo::insert).
    /// Empty slots are marked with `None` internally, so `None` cannot also
    /// stand for a live element.
    #[error("cannot insert an absent value into the queue")]
    NilElement,

    /// [`peek`](crate::UnboundedFifo::peek) or
    /// [`poll`](crate::UnboundedFifo::poll) was called on an empty queue.
    #[error("the queue is already empty")]
    Underflow,

    /// [`Cursor::remove`](crate::Cursor::remove) was called with no element
    /// pending removal: either [`next`](crate::Cursor::next) has not yielded
    /// anything yet, or the yielded element was already removed.
    #[error("no element pending removal")]
    NoPendingRemoval,
}
