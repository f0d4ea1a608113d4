//! A growable FIFO queue backed by a circular buffer.
//!
//! [`UnboundedFifo<T>`] stores its elements in a ring of slots addressed by
//! wrapping `head`/`tail` indices. Removal never shifts elements, and when
//! the ring fills up it is transparently replaced by one roughly twice the
//! size with the live elements compacted to the front, so logical capacity
//! is unbounded while [`insert`](UnboundedFifo::insert) stays amortized
//! constant time.
//!
//! # Key features
//!
//! - **FIFO order** - elements come out in exactly the order they went in,
//!   across any number of grows
//! - **O(1) core operations** - `poll`, `peek`, `len` and `is_empty` are
//!   constant time; `insert` is amortized constant time
//! - **Removal during iteration** - a [`Cursor`] walks the queue and can
//!   remove the element it last yielded, without breaking the ring
//!   invariants or the iteration itself
//!
//! # Example
//!
//! ```
//! use ringfifo::UnboundedFifo;
//!
//! let mut fifo = UnboundedFifo::with_capacity(2)?;
//! fifo.insert("a")?;
//! fifo.insert("b")?;
//! fifo.insert("c")?; // grows transparently
//!
//! assert_eq!(fifo.poll()?, "a");
//! assert_eq!(fifo.poll()?, "b");
//! assert_eq!(fifo.poll()?, "c");
//! assert!(fifo.is_empty());
//! # Ok::<(), ringfifo::FifoError>(())
//! ```
//!
//! # When NOT to use
//!
//! - Concurrent producers or consumers: nothing here is synchronized. Wrap
//!   the queue in a lock, or reach for a channel instead.
//! - Double-ended access: this is a queue, not a deque. `VecDeque` covers
//!   that ground.
//!
//! Fallible operations return [`FifoError`]; every error leaves the queue
//! in a well-defined, still-usable state.

pub mod error;
pub mod fifo;
mod hints;

pub use error::FifoError;
pub use fifo::{Cursor, IntoIter, Iter, UnboundedFifo, DEFAULT_CAPACITY};
