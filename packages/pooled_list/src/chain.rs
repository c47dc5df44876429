use std::num::NonZero;

/// Identifies a node in a [`NodeChain`]. Stable for the lifetime of the node.
pub(crate) type NodeIndex = usize;

/// The backing storage of a `PooledList`: a doubly linked chain of nodes held
/// in a growable arena, with links expressed as arena indices rather than
/// pointers so that the chain invariants are enforced by construction.
///
/// The chain always contains at least one node. Nodes are only ever added at
/// the two ends (`grow_front`/`grow_tail`) or relinked from one end to the
/// other (`rotate_*`); the single exception is [`excise()`][Self::excise],
/// which splices an interior node out and recycles its arena slot through an
/// intrusive free list, the same slot-reuse scheme a slab allocator uses.
///
/// The chain does not know about the active window - that bookkeeping lives
/// in `PooledList`. From the chain's perspective every node simply has an
/// optional value slot: `Some` for an active node, `None` for spare capacity.
#[derive(Debug)]
pub(crate) struct NodeChain<T> {
    slots: Vec<Slot<T>>,

    /// Index of the most recently vacated arena slot, if any. Think of this as
    /// a stack of recycled slots, with the stack entries stored in the vacant
    /// slots themselves. Also known as an intrusive free list.
    next_free_slot: Option<usize>,

    /// First node of the chain. `node(front).prev` is always `None`.
    front: NodeIndex,

    /// Last node of the chain. `node(tail).next` is always `None`.
    tail: NodeIndex,

    /// Number of nodes currently in the chain. Always at least one, and always
    /// equal to the number of occupied arena slots.
    node_count: NonZero<usize>,
}

#[derive(Debug)]
struct Node<T> {
    value: Option<T>,
    prev: Option<NodeIndex>,
    next: Option<NodeIndex>,
}

#[derive(Debug)]
enum Slot<T> {
    Occupied(Node<T>),

    Vacant { next_free_slot: Option<usize> },
}

impl<T> NodeChain<T> {
    /// Creates a chain of `node_count` spare nodes, linked in arena order,
    /// in a single allocation pass.
    #[must_use]
    pub(crate) fn new(node_count: NonZero<usize>) -> Self {
        let count = node_count.get();
        let mut slots = Vec::with_capacity(count);

        for index in 0..count {
            let successor = index
                .checked_add(1)
                .expect("index is below the node count, so incrementing cannot overflow");
            let next = (successor < count).then_some(successor);

            slots.push(Slot::Occupied(Node {
                value: None,
                prev: index.checked_sub(1),
                next,
            }));
        }

        Self {
            slots,
            next_free_slot: None,
            front: 0,
            tail: count
                .checked_sub(1)
                .expect("the node count is non-zero, so the last index is representable"),
            node_count,
        }
    }

    #[must_use]
    pub(crate) fn front(&self) -> NodeIndex {
        self.front
    }

    #[must_use]
    pub(crate) fn tail(&self) -> NodeIndex {
        self.tail
    }

    #[must_use]
    pub(crate) fn node_count(&self) -> NonZero<usize> {
        self.node_count
    }

    #[must_use]
    pub(crate) fn next_of(&self, index: NodeIndex) -> Option<NodeIndex> {
        self.node(index).next
    }

    #[must_use]
    pub(crate) fn prev_of(&self, index: NodeIndex) -> Option<NodeIndex> {
        self.node(index).prev
    }

    #[must_use]
    pub(crate) fn value(&self, index: NodeIndex) -> Option<&T> {
        self.node(index).value.as_ref()
    }

    #[must_use]
    pub(crate) fn value_mut(&mut self, index: NodeIndex) -> Option<&mut T> {
        self.node_mut(index).value.as_mut()
    }

    /// Stores a value in the node, returning the previously stored value
    /// if the node was active.
    pub(crate) fn store(&mut self, index: NodeIndex, value: T) -> Option<T> {
        self.node_mut(index).value.replace(value)
    }

    /// Takes the value out of the node, leaving it as spare capacity.
    pub(crate) fn take(&mut self, index: NodeIndex) -> Option<T> {
        self.node_mut(index).value.take()
    }

    /// Adds one spare node after the current tail. This is the only way the
    /// chain grows at the high end, and it grows by exactly one node.
    pub(crate) fn grow_tail(&mut self) -> NodeIndex {
        let old_tail = self.tail;

        let index = self.allocate_slot(Node {
            value: None,
            prev: Some(old_tail),
            next: None,
        });

        self.node_mut(old_tail).next = Some(index);
        self.tail = index;
        self.increment_node_count();

        index
    }

    /// Adds one spare node before the current front. Mirror of
    /// [`grow_tail()`][Self::grow_tail].
    pub(crate) fn grow_front(&mut self) -> NodeIndex {
        let old_front = self.front;

        let index = self.allocate_slot(Node {
            value: None,
            prev: None,
            next: Some(old_front),
        });

        self.node_mut(old_front).prev = Some(index);
        self.front = index;
        self.increment_node_count();

        index
    }

    /// Relinks the front node to become the new tail. The caller must ensure
    /// the front node is spare - this is how spare capacity stranded at the
    /// wrong end of the chain is brought to where it is needed, without
    /// touching the allocator.
    ///
    /// # Panics
    ///
    /// Panics if the chain has only one node or if the front node is active.
    pub(crate) fn rotate_front_to_tail(&mut self) -> NodeIndex {
        let index = self.front;

        assert!(
            self.node(index).value.is_none(),
            "only spare nodes may be rotated to the other end of the chain"
        );

        let new_front = self
            .node(index)
            .next
            .expect("rotation requires a chain of at least two nodes");

        self.node_mut(new_front).prev = None;
        self.front = new_front;

        let old_tail = self.tail;

        {
            let node = self.node_mut(index);
            node.prev = Some(old_tail);
            node.next = None;
        }

        self.node_mut(old_tail).next = Some(index);
        self.tail = index;

        index
    }

    /// Relinks the tail node to become the new front. Mirror of
    /// [`rotate_front_to_tail()`][Self::rotate_front_to_tail].
    ///
    /// # Panics
    ///
    /// Panics if the chain has only one node or if the tail node is active.
    pub(crate) fn rotate_tail_to_front(&mut self) -> NodeIndex {
        let index = self.tail;

        assert!(
            self.node(index).value.is_none(),
            "only spare nodes may be rotated to the other end of the chain"
        );

        let new_tail = self
            .node(index)
            .prev
            .expect("rotation requires a chain of at least two nodes");

        self.node_mut(new_tail).next = None;
        self.tail = new_tail;

        let old_front = self.front;

        {
            let node = self.node_mut(index);
            node.next = Some(old_front);
            node.prev = None;
        }

        self.node_mut(old_front).prev = Some(index);
        self.front = index;

        index
    }

    /// Splices an interior node out of the chain entirely, returning its
    /// value and recycling its arena slot. The node count decreases by one -
    /// the sole way the chain ever shrinks.
    ///
    /// # Panics
    ///
    /// Panics if the node is the front or tail of the chain.
    pub(crate) fn excise(&mut self, index: NodeIndex) -> Option<T> {
        let (value, prev, next) = {
            let node = self.node_mut(index);
            (node.value.take(), node.prev, node.next)
        };

        let prev = prev.expect("excised nodes are interior to the chain, so a predecessor exists");
        let next = next.expect("excised nodes are interior to the chain, so a successor exists");

        self.node_mut(prev).next = Some(next);
        self.node_mut(next).prev = Some(prev);

        self.release_slot(index);

        self.node_count = NonZero::new(
            self.node_count
                .get()
                .checked_sub(1)
                .expect("the chain held at least three nodes, one of which we just removed"),
        )
        .expect("an interior node implies at least three nodes, so at least two remain");

        value
    }

    fn node(&self, index: NodeIndex) -> &Node<T> {
        match self.slots.get(index) {
            Some(Slot::Occupied(node)) => node,
            _ => panic!("node index {index} does not refer to a chain node"),
        }
    }

    fn node_mut(&mut self, index: NodeIndex) -> &mut Node<T> {
        match self.slots.get_mut(index) {
            Some(Slot::Occupied(node)) => node,
            _ => panic!("node index {index} does not refer to a chain node"),
        }
    }

    fn allocate_slot(&mut self, node: Node<T>) -> usize {
        if let Some(index) = self.next_free_slot {
            let slot = self
                .slots
                .get_mut(index)
                .expect("free list entries always refer to existing arena slots");

            let Slot::Vacant { next_free_slot } = slot else {
                panic!("free list entry {index} refers to an occupied arena slot");
            };

            self.next_free_slot = *next_free_slot;
            *slot = Slot::Occupied(node);

            index
        } else {
            self.slots.push(Slot::Occupied(node));

            self.slots
                .len()
                .checked_sub(1)
                .expect("we just pushed a slot, so the collection is not empty")
        }
    }

    fn release_slot(&mut self, index: usize) {
        let slot = self
            .slots
            .get_mut(index)
            .expect("released slots always refer to existing arena slots");

        *slot = Slot::Vacant {
            next_free_slot: self.next_free_slot,
        };

        self.next_free_slot = Some(index);
    }

    fn increment_node_count(&mut self) {
        self.node_count = self
            .node_count
            .checked_add(1)
            .expect("a chain this large could not fit in memory in the first place");
    }

    #[cfg_attr(test, mutants::skip)] // This is essentially test logic, mutation is meaningless.
    #[cfg(debug_assertions)]
    pub(crate) fn integrity_check(&self) {
        assert!(
            self.node(self.front).prev.is_none(),
            "the front node must not have a predecessor"
        );
        assert!(
            self.node(self.tail).next.is_none(),
            "the tail node must not have a successor"
        );

        let mut observed_count: usize = 0;
        let mut cursor = Some(self.front);

        while let Some(index) = cursor {
            observed_count = observed_count
                .checked_add(1)
                .expect("guarded by the chain being finite and acyclic");

            let next = self.node(index).next;

            if let Some(next) = next {
                assert!(
                    self.node(next).prev == Some(index),
                    "node {next} does not link back to its predecessor {index}"
                );
            } else {
                assert!(
                    index == self.tail,
                    "node {index} has no successor but is not the tail"
                );
            }

            cursor = next;
        }

        assert!(
            observed_count == self.node_count.get(),
            "walked {observed_count} nodes from the front but the chain claims {}",
            self.node_count
        );

        let occupied_slots = self
            .slots
            .iter()
            .filter(|slot| matches!(slot, Slot::Occupied(_)))
            .count();

        assert!(
            occupied_slots == self.node_count.get(),
            "{occupied_slots} occupied arena slots do not match the node count {}",
            self.node_count
        );

        let mut free_cursor = self.next_free_slot;

        while let Some(index) = free_cursor {
            match self.slots.get(index) {
                Some(Slot::Vacant { next_free_slot }) => free_cursor = *next_free_slot,
                _ => panic!("free list entry {index} does not refer to a vacant slot"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use new_zealand::nz;

    use super::*;

    #[test]
    fn new_chain_is_linked_in_arena_order() {
        let chain = NodeChain::<u32>::new(nz!(3));

        assert_eq!(chain.node_count().get(), 3);
        assert_eq!(chain.front(), 0);
        assert_eq!(chain.tail(), 2);

        assert_eq!(chain.prev_of(0), None);
        assert_eq!(chain.next_of(0), Some(1));
        assert_eq!(chain.prev_of(1), Some(0));
        assert_eq!(chain.next_of(1), Some(2));
        assert_eq!(chain.prev_of(2), Some(1));
        assert_eq!(chain.next_of(2), None);

        for index in 0..3 {
            assert!(chain.value(index).is_none());
        }

        chain.integrity_check();
    }

    #[test]
    fn single_node_chain() {
        let chain = NodeChain::<u32>::new(nz!(1));

        assert_eq!(chain.front(), chain.tail());
        assert_eq!(chain.next_of(chain.front()), None);
        assert_eq!(chain.prev_of(chain.front()), None);

        chain.integrity_check();
    }

    #[test]
    fn store_and_take_round_trip() {
        let mut chain = NodeChain::<&str>::new(nz!(2));

        assert!(chain.store(0, "a").is_none());
        assert_eq!(chain.store(0, "b"), Some("a"));
        assert_eq!(chain.value(0), Some(&"b"));
        assert_eq!(chain.take(0), Some("b"));
        assert!(chain.take(0).is_none());
    }

    #[test]
    fn grow_tail_appends_one_node() {
        let mut chain = NodeChain::<u32>::new(nz!(1));

        let index = chain.grow_tail();

        assert_eq!(chain.node_count().get(), 2);
        assert_eq!(chain.tail(), index);
        assert_eq!(chain.prev_of(index), Some(chain.front()));
        assert_eq!(chain.next_of(chain.front()), Some(index));

        chain.integrity_check();
    }

    #[test]
    fn grow_front_prepends_one_node() {
        let mut chain = NodeChain::<u32>::new(nz!(1));

        let old_front = chain.front();
        let index = chain.grow_front();

        assert_eq!(chain.node_count().get(), 2);
        assert_eq!(chain.front(), index);
        assert_eq!(chain.next_of(index), Some(old_front));
        assert_eq!(chain.prev_of(old_front), Some(index));

        chain.integrity_check();
    }

    #[test]
    fn rotate_front_to_tail_preserves_node_count() {
        let mut chain = NodeChain::<u32>::new(nz!(3));

        let rotated = chain.rotate_front_to_tail();

        assert_eq!(rotated, 0);
        assert_eq!(chain.front(), 1);
        assert_eq!(chain.tail(), 0);
        assert_eq!(chain.node_count().get(), 3);
        assert_eq!(chain.next_of(2), Some(0));
        assert_eq!(chain.prev_of(0), Some(2));
        assert_eq!(chain.next_of(0), None);

        chain.integrity_check();
    }

    #[test]
    fn rotate_tail_to_front_preserves_node_count() {
        let mut chain = NodeChain::<u32>::new(nz!(3));

        let rotated = chain.rotate_tail_to_front();

        assert_eq!(rotated, 2);
        assert_eq!(chain.front(), 2);
        assert_eq!(chain.tail(), 1);
        assert_eq!(chain.node_count().get(), 3);
        assert_eq!(chain.next_of(2), Some(0));
        assert_eq!(chain.prev_of(0), Some(2));

        chain.integrity_check();
    }

    #[test]
    #[should_panic]
    fn rotate_active_node_panics() {
        let mut chain = NodeChain::<u32>::new(nz!(2));

        _ = chain.store(chain.front(), 42);
        _ = chain.rotate_front_to_tail();
    }

    #[test]
    fn excise_splices_neighbors_and_recycles_slot() {
        let mut chain = NodeChain::<u32>::new(nz!(3));

        _ = chain.store(1, 42);

        assert_eq!(chain.excise(1), Some(42));
        assert_eq!(chain.node_count().get(), 2);
        assert_eq!(chain.next_of(0), Some(2));
        assert_eq!(chain.prev_of(2), Some(0));
        chain.integrity_check();

        // The vacated arena slot is reused by the next growth step.
        let index = chain.grow_tail();
        assert_eq!(index, 1);
        assert_eq!(chain.node_count().get(), 3);
        chain.integrity_check();
    }

    #[test]
    #[should_panic]
    fn excise_front_panics() {
        let mut chain = NodeChain::<u32>::new(nz!(3));

        _ = chain.excise(chain.front());
    }

    #[test]
    #[should_panic]
    fn excise_tail_panics() {
        let mut chain = NodeChain::<u32>::new(nz!(3));

        _ = chain.excise(chain.tail());
    }

    #[test]
    #[should_panic]
    fn accessing_vacant_slot_panics() {
        let mut chain = NodeChain::<u32>::new(nz!(3));

        _ = chain.excise(1);
        _ = chain.value(1);
    }

    #[test]
    fn calls_drop_on_chain_drop() {
        use std::cell::Cell;
        use std::rc::Rc;

        struct Droppable {
            dropped: Rc<Cell<bool>>,
        }

        impl Drop for Droppable {
            fn drop(&mut self) {
                self.dropped.set(true);
            }
        }

        let dropped = Rc::new(Cell::new(false));

        {
            let mut chain = NodeChain::<Droppable>::new(nz!(1));
            _ = chain.store(
                0,
                Droppable {
                    dropped: Rc::clone(&dropped),
                },
            );
        }

        assert!(dropped.get());
    }
}
