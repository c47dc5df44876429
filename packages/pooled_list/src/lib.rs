//! A doubly linked list over a pooled node chain, with a sliding window that
//! recycles spare capacity for amortized O(1) end operations.
//!
//! This crate provides [`PooledList`], a positional sequence built for heavy
//! insertion and removal at both ends - the shape of workload a stack (LIFO)
//! or queue (FIFO) adapter produces. Its distinguishing design is a node
//! *pool* with a sliding logical *window*: the list pre-allocates a chain of
//! linked nodes and tracks the client-visible sub-chain within it. Growing
//! the window consumes pooled capacity before any allocation is needed, and
//! shrinking it returns nodes to the pool instead of freeing them, so the
//! allocation cost of repeated grow/shrink cycles is amortized away.
//!
//! # Key features
//!
//! - **Pooled capacity**: end-wise removals never deallocate; the pool
//!   records the high-water mark of usage and later insertions reuse it.
//! - **One allocation per growth step**: a window that fills the entire pool
//!   grows it by exactly one node; nothing ever grows implicitly beyond that.
//! - **Bidirectional indexed access**: lookups walk from whichever end of
//!   the window is nearer - O(1) at the ends, half the naive walk on average
//!   in the interior.
//! - **Recoverable errors**: out-of-range indexes and empty-list removals
//!   are reported as [`Error`] values and leave the list unchanged.
//! - **Diagnostic layout view**: [`PooledList::layout()`] renders the pool
//!   and window boundaries as text, for the caller to route to any sink.
//!
//! # Example
//!
//! ```rust
//! use pooled_list::PooledList;
//!
//! // Pre-size the pool so the first four insertions never allocate.
//! let mut list = PooledList::with_capacity(4);
//!
//! list.push_back("b");
//! list.push_back("c");
//! list.push_front("a");
//!
//! assert!(list.iter().eq(&["a", "b", "c"]));
//!
//! // Removals at the ends return their nodes to the pool...
//! assert_eq!(list.remove_last(), Ok("c"));
//! assert_eq!(list.remove_first(), Ok("a"));
//!
//! // ...so this reuses pooled capacity instead of allocating.
//! list.push_back("d");
//! assert_eq!(list.capacity(), 4);
//! ```
//!
//! # What this crate is not
//!
//! The list is a positional sequence only - no sorted or keyed access - and
//! it is single-threaded by design: callers needing concurrent access
//! serialize all mutation with external locking. Stack and queue wrappers
//! are deliberately left to consumers; the operation set here
//! ([`push_back()`][PooledList::push_back] /
//! [`remove_last()`][PooledList::remove_last] /
//! [`remove_first()`][PooledList::remove_first] and friends) is their
//! complete foundation.

mod builder;
mod chain;
mod error;
mod iter;
mod layout;
mod list;

pub use builder::PooledListBuilder;
pub use error::{Error, Result};
pub use iter::{IntoIter, Iter};
pub use layout::ChainLayout;
pub use list::PooledList;
