use std::cmp::Ordering;
use std::num::NonZero;

use new_zealand::nz;

use crate::chain::{NodeChain, NodeIndex};
use crate::{ChainLayout, Error, Iter, PooledListBuilder, Result};

/// A doubly linked list over a pooled node chain, optimized for amortized
/// O(1) insertion and removal at both ends.
///
/// The list pre-allocates a chain of linked nodes (the *pool*) and tracks a
/// smaller or equal-sized *active window* within it - the sequence visible to
/// callers. Growing the window consumes pooled spare capacity before any
/// allocation happens; shrinking it returns nodes to the pool instead of
/// freeing them, so repeated grow/shrink cycles at the ends do not touch the
/// allocator at all. This makes the list a natural base for stack (LIFO) and
/// queue (FIFO) usage patterns.
///
/// # Capacity
///
/// The pool always holds at least one node, even when the list is logically
/// empty, and it records the high-water mark of usage: end-wise removals
/// never release capacity. The one exception is [`remove_at()`][1] on an
/// interior index, which must excise the node from the chain to keep spare
/// capacity at the ends, permanently forfeiting that node's capacity.
///
/// # Indexed access
///
/// [`get()`][2] locates an index by walking from whichever end is nearer,
/// which is O(1) at either end and averages half the walk of a naive
/// head-only traversal in the interior. The list is a positional sequence
/// only; there is no keyed or sorted access.
///
/// # Thread safety
///
/// The list is single-threaded by design: no operation blocks, suspends, or
/// yields, and concurrent mutation requires external locking such as a
/// [`Mutex`][std::sync::Mutex].
///
/// # Example
///
/// ```rust
/// use pooled_list::PooledList;
///
/// let mut list = PooledList::with_capacity(4);
///
/// list.push_back('b');
/// list.push_back('c');
/// list.push_front('a');
///
/// assert_eq!(list.len(), 3);
/// assert_eq!(list.first(), Some(&'a'));
/// assert_eq!(list.last(), Some(&'c'));
///
/// // End-wise removal returns the node to the pool as spare capacity.
/// assert_eq!(list.remove_last(), Ok('c'));
/// assert_eq!(list.capacity(), 4);
/// ```
///
/// [1]: Self::remove_at
/// [2]: Self::get
#[derive(Debug)]
pub struct PooledList<T> {
    chain: NodeChain<T>,

    /// First node of the active window. When the list is empty, this names
    /// the same spare node as `list_end`.
    list_start: NodeIndex,

    /// Last node of the active window.
    list_end: NodeIndex,

    /// Number of active elements, `0 <= len <= capacity`.
    len: usize,
}

impl<T> PooledList<T> {
    /// Creates an empty list with a pool of a single node.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pooled_list::PooledList;
    ///
    /// let list = PooledList::<u32>::new();
    ///
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.capacity(), 1);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::new_inner(nz!(1))
    }

    /// Creates an empty list with `hint` pre-allocated pooled nodes, linked
    /// in a single allocation pass.
    ///
    /// A hint of zero is treated as one - the pool always holds at least one
    /// node. Pre-sizing the pool means the first `hint` end-wise insertions
    /// never touch the allocator.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pooled_list::PooledList;
    ///
    /// let mut list = PooledList::with_capacity(8);
    ///
    /// for value in 0..8 {
    ///     list.push_back(value);
    /// }
    ///
    /// // The pool was consumed without growing.
    /// assert_eq!(list.capacity(), 8);
    /// ```
    #[must_use]
    pub fn with_capacity(hint: usize) -> Self {
        Self::new_inner(NonZero::new(hint).unwrap_or(nz!(1)))
    }

    /// Starts building a new [`PooledList`].
    ///
    /// Use this when you want to customize the list configuration beyond the
    /// defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pooled_list::PooledList;
    ///
    /// let list = PooledList::<u32>::builder().capacity_hint(16).build();
    ///
    /// assert_eq!(list.capacity(), 16);
    /// ```
    pub fn builder() -> PooledListBuilder<T> {
        PooledListBuilder::new()
    }

    #[must_use]
    pub(crate) fn new_inner(capacity_hint: NonZero<usize>) -> Self {
        let chain = NodeChain::new(capacity_hint);
        let front = chain.front();

        Self {
            chain,
            list_start: front,
            list_end: front,
            len: 0,
        }
    }

    /// The number of active elements in the list. O(1).
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list holds no active elements.
    ///
    /// An empty list still holds pooled capacity.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of pooled nodes, active or spare. Always at least one and
    /// never less than [`len()`][Self::len].
    ///
    /// Capacity only grows, reflecting the high-water mark of usage, except
    /// when an interior [`remove_at()`][Self::remove_at] forfeits one node.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.chain.node_count().get()
    }

    /// Returns a reference to the element at `index` in window order
    /// (index 0 is the start of the window).
    ///
    /// The lookup is O(1) at either end and walks from the nearer end
    /// otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] when `index >= len`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pooled_list::{Error, PooledList};
    ///
    /// let mut list = PooledList::new();
    /// list.push_back("a");
    /// list.push_back("b");
    ///
    /// assert_eq!(list.get(1), Ok(&"b"));
    /// assert_eq!(list.get(2), Err(Error::IndexOutOfRange { index: 2, len: 2 }));
    /// ```
    pub fn get(&self, index: usize) -> Result<&T> {
        if index >= self.len {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.len,
            });
        }

        let node = self.node_at(index);

        Ok(self
            .chain
            .value(node)
            .expect("active window nodes always hold a value"))
    }

    /// Returns an exclusive reference to the element at `index` in window
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] when `index >= len`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        if index >= self.len {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.len,
            });
        }

        let node = self.node_at(index);

        Ok(self
            .chain
            .value_mut(node)
            .expect("active window nodes always hold a value"))
    }

    /// Returns a reference to the first element, or `None` when the list is
    /// empty. Unlike [`get()`][Self::get], this never reports an error -
    /// absence is an expected answer, not a failure.
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        if self.len == 0 {
            return None;
        }

        self.chain.value(self.list_start)
    }

    /// Returns a reference to the last element, or `None` when the list is
    /// empty.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        if self.len == 0 {
            return None;
        }

        self.chain.value(self.list_end)
    }

    /// Returns an exclusive reference to the first element, or `None` when
    /// the list is empty.
    #[must_use]
    pub fn first_mut(&mut self) -> Option<&mut T> {
        if self.len == 0 {
            return None;
        }

        self.chain.value_mut(self.list_start)
    }

    /// Returns an exclusive reference to the last element, or `None` when
    /// the list is empty.
    #[must_use]
    pub fn last_mut(&mut self) -> Option<&mut T> {
        if self.len == 0 {
            return None;
        }

        self.chain.value_mut(self.list_end)
    }

    /// Overwrites the element at `index`, returning the previous element, or
    /// appends when `index == len`.
    ///
    /// This is the one indexed operation that permits the one-past-end index:
    /// `set(len, value)` behaves exactly as [`push_back()`][Self::push_back]
    /// and returns `Ok(None)`. For `index < len` the element is replaced in
    /// place and the list structure is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] when `index > len`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pooled_list::PooledList;
    ///
    /// let mut list = PooledList::new();
    ///
    /// assert_eq!(list.set(0, "a"), Ok(None)); // Appends.
    /// assert_eq!(list.set(0, "b"), Ok(Some("a"))); // Overwrites.
    /// assert_eq!(list.len(), 1);
    /// ```
    pub fn set(&mut self, index: usize, value: T) -> Result<Option<T>> {
        match index.cmp(&self.len) {
            Ordering::Greater => Err(Error::IndexOutOfRange {
                index,
                len: self.len,
            }),
            Ordering::Equal => {
                self.push_back(value);
                Ok(None)
            }
            Ordering::Less => {
                let node = self.node_at(index);

                Ok(Some(
                    self.chain
                        .store(node, value)
                        .expect("active window nodes always hold a value"),
                ))
            }
        }
    }

    /// Appends an element at the end of the window. Amortized O(1).
    ///
    /// Pooled spare capacity is consumed before any allocation: a spare node
    /// after the window end is reused directly; spare capacity stranded at
    /// the far end of the chain is relinked over; only a window that fills
    /// the entire pool allocates, and then exactly one node.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pooled_list::PooledList;
    ///
    /// let mut list = PooledList::with_capacity(2);
    ///
    /// list.push_back(1);
    /// list.push_back(2);
    /// assert_eq!(list.capacity(), 2);
    ///
    /// // The pool is full, so this grows it by one node.
    /// list.push_back(3);
    /// assert_eq!(list.capacity(), 3);
    /// ```
    pub fn push_back(&mut self, value: T) {
        if self.len == 0 {
            // The window markers already name a spare node - reuse it.
            let previous = self.chain.store(self.list_start, value);
            debug_assert!(previous.is_none(), "an empty list has no active nodes");
        } else if let Some(next) = self.chain.next_of(self.list_end) {
            let previous = self.chain.store(next, value);
            debug_assert!(previous.is_none(), "nodes after the window end are spare");

            self.list_end = next;
        } else if self.chain.front() != self.list_start {
            // All spare capacity sits before the window. Bring one node over
            // rather than allocating alongside idle capacity.
            let node = self.chain.rotate_front_to_tail();
            _ = self.chain.store(node, value);

            self.list_end = node;
        } else {
            // The window fills the entire pool. Grow it by exactly one node.
            let node = self.chain.grow_tail();
            _ = self.chain.store(node, value);

            self.list_end = node;
        }

        self.increment_len();
    }

    /// Prepends an element at the start of the window. Amortized O(1).
    ///
    /// Mirror image of [`push_back()`][Self::push_back].
    pub fn push_front(&mut self, value: T) {
        if self.len == 0 {
            let previous = self.chain.store(self.list_start, value);
            debug_assert!(previous.is_none(), "an empty list has no active nodes");
        } else if let Some(prev) = self.chain.prev_of(self.list_start) {
            let previous = self.chain.store(prev, value);
            debug_assert!(previous.is_none(), "nodes before the window start are spare");

            self.list_start = prev;
        } else if self.chain.tail() != self.list_end {
            let node = self.chain.rotate_tail_to_front();
            _ = self.chain.store(node, value);

            self.list_start = node;
        } else {
            let node = self.chain.grow_front();
            _ = self.chain.store(node, value);

            self.list_start = node;
        }

        self.increment_len();
    }

    /// Removes and returns the last element. The vacated node stays in the
    /// pool as spare capacity - no deallocation takes place.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] when the list holds no elements.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pooled_list::{Error, PooledList};
    ///
    /// let mut list = PooledList::new();
    /// list.push_back(1);
    ///
    /// assert_eq!(list.remove_last(), Ok(1));
    /// assert_eq!(list.remove_last(), Err(Error::Empty));
    ///
    /// // The node the element occupied remains pooled.
    /// assert_eq!(list.capacity(), 1);
    /// ```
    pub fn remove_last(&mut self) -> Result<T> {
        if self.len == 0 {
            return Err(Error::Empty);
        }

        let value = self
            .chain
            .take(self.list_end)
            .expect("active window nodes always hold a value");

        if self.len > 1 {
            self.list_end = self
                .chain
                .prev_of(self.list_end)
                .expect("a window of more than one node has a predecessor for its end");
        }
        // When the list becomes empty, both markers stay on the vacated node.

        self.decrement_len();

        Ok(value)
    }

    /// Removes and returns the first element. Mirror image of
    /// [`remove_last()`][Self::remove_last].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] when the list holds no elements.
    pub fn remove_first(&mut self) -> Result<T> {
        if self.len == 0 {
            return Err(Error::Empty);
        }

        let value = self
            .chain
            .take(self.list_start)
            .expect("active window nodes always hold a value");

        if self.len > 1 {
            self.list_start = self
                .chain
                .next_of(self.list_start)
                .expect("a window of more than one node has a successor for its start");
        }

        self.decrement_len();

        Ok(value)
    }

    /// Removes and returns the element at `index` in window order.
    ///
    /// End indices delegate to the end removals and retain the vacated node
    /// as spare capacity. An interior index is different: spare capacity only
    /// ever sits at the chain ends, so the excised node cannot be retained -
    /// it is spliced out of the chain and its capacity is forfeited
    /// (capacity decreases by exactly one).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] when `index >= len`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pooled_list::PooledList;
    ///
    /// let mut list: PooledList<u32> = (0..5).collect();
    /// assert_eq!(list.capacity(), 5);
    ///
    /// assert_eq!(list.remove_at(2), Ok(2));
    ///
    /// let remaining: Vec<u32> = list.iter().copied().collect();
    /// assert_eq!(remaining, [0, 1, 3, 4]);
    /// assert_eq!(list.capacity(), 4);
    /// ```
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        if index >= self.len {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.len,
            });
        }

        if index == 0 {
            return self.remove_first();
        }

        let last_index = self
            .len
            .checked_sub(1)
            .expect("the bounds check above guarantees a non-empty list");

        if index == last_index {
            return self.remove_last();
        }

        let node = self.node_at(index);

        let value = self
            .chain
            .excise(node)
            .expect("active window nodes always hold a value");

        self.decrement_len();

        Ok(value)
    }

    /// Removes every element, keeping all pooled capacity for reuse.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pooled_list::PooledList;
    ///
    /// let mut list: PooledList<u32> = (0..4).collect();
    ///
    /// list.clear();
    ///
    /// assert!(list.is_empty());
    /// assert_eq!(list.capacity(), 4);
    /// ```
    pub fn clear(&mut self) {
        let mut cursor = Some(self.list_start);

        for _ in 0..self.len {
            let node = cursor.expect("the window holds exactly len linked nodes");
            _ = self.chain.take(node);
            cursor = self.chain.next_of(node);
        }

        self.list_start = self.chain.front();
        self.list_end = self.list_start;
        self.len = 0;
    }

    /// Returns a double-ended iterator over the elements in window order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pooled_list::PooledList;
    ///
    /// let list: PooledList<u32> = (0..3).collect();
    ///
    /// assert!(list.iter().eq(&[0, 1, 2]));
    /// assert!(list.iter().rev().eq(&[2, 1, 0]));
    /// ```
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Returns a diagnostic view of the pool that renders the chain
    /// boundaries and per-node roles when formatted.
    ///
    /// This is a side channel for debugging and logging - the list itself
    /// performs no I/O, and nothing about the view is required for
    /// correctness. See [`ChainLayout`].
    #[must_use]
    pub fn layout(&self) -> ChainLayout<'_, T> {
        ChainLayout::new(self)
    }

    /// Locates the node holding the element at `index`, walking from
    /// whichever end of the window is nearer.
    ///
    /// O(1) for the first and last index, worst case O(n), average n/4.
    fn node_at(&self, index: usize) -> NodeIndex {
        debug_assert!(index < self.len, "callers bounds-check before searching");

        let last_index = self
            .len
            .checked_sub(1)
            .expect("callers bounds-check, so the list is not empty");

        if index == 0 {
            return self.list_start;
        }

        if index == last_index {
            return self.list_end;
        }

        let steps_from_back = last_index
            .checked_sub(index)
            .expect("index is below the last index in this branch");

        if index <= steps_from_back {
            let mut node = self.list_start;

            for _ in 0..index {
                node = self
                    .chain
                    .next_of(node)
                    .expect("window traversal never walks past the window end");
            }

            node
        } else {
            let mut node = self.list_end;

            for _ in 0..steps_from_back {
                node = self
                    .chain
                    .prev_of(node)
                    .expect("window traversal never walks past the window start");
            }

            node
        }
    }

    fn increment_len(&mut self) {
        self.len = self
            .len
            .checked_add(1)
            .expect("a list this large could not fit in memory in the first place");
    }

    fn decrement_len(&mut self) {
        self.len = self
            .len
            .checked_sub(1)
            .expect("removal operations verify the list is non-empty first");
    }

    pub(crate) fn chain(&self) -> &NodeChain<T> {
        &self.chain
    }

    pub(crate) fn list_start(&self) -> NodeIndex {
        self.list_start
    }

    pub(crate) fn list_end(&self) -> NodeIndex {
        self.list_end
    }

    #[cfg_attr(test, mutants::skip)] // This is essentially test logic, mutation is meaningless.
    #[cfg(debug_assertions)]
    pub(crate) fn integrity_check(&self) {
        self.chain.integrity_check();

        assert!(
            self.len <= self.capacity(),
            "the window cannot hold more nodes than the pool"
        );

        if self.len == 0 {
            assert!(
                self.list_start == self.list_end,
                "an empty window collapses to a single designated node"
            );
        }

        // The window is a contiguous sub-chain of exactly len active nodes;
        // everything outside it is spare.
        let mut active: usize = 0;
        let mut in_window = false;
        let mut cursor = Some(self.chain.front());

        while let Some(index) = cursor {
            if self.len > 0 && index == self.list_start {
                in_window = true;
            }

            if in_window {
                assert!(
                    self.chain.value(index).is_some(),
                    "window node {index} does not hold a value"
                );
                active = active
                    .checked_add(1)
                    .expect("guarded by the chain being finite");
            } else {
                assert!(
                    self.chain.value(index).is_none(),
                    "spare node {index} unexpectedly holds a value"
                );
            }

            if self.len > 0 && index == self.list_end {
                in_window = false;
            }

            cursor = self.chain.next_of(index);
        }

        assert!(
            active == self.len,
            "walked {active} active nodes but the list claims {}",
            self.len
        );
    }
}

impl<T> Default for PooledList<T> {
    /// Creates an empty list with a pool of a single node.
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for PooledList<T> {
    /// Builds a list whose pool is pre-sized from the iterator's size hint.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();

        let mut list = Self::with_capacity(lower);

        for value in iter {
            list.push_back(value);
        }

        list
    }
}

impl<T> Extend<T> for PooledList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}
