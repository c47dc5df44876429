use std::marker::PhantomData;
use std::num::NonZero;

use new_zealand::nz;

use crate::PooledList;

/// Builder for creating an instance of [`PooledList`].
///
/// The builder exists for the sake of pre-sizing the pool; when a
/// single-node pool is acceptable, [`PooledList::new()`][1] gets you there
/// without the ceremony.
///
/// # Examples
///
/// ```
/// use pooled_list::PooledList;
///
/// let list = PooledList::<u32>::builder().capacity_hint(32).build();
///
/// assert_eq!(list.capacity(), 32);
/// ```
///
/// [1]: PooledList::new
#[must_use]
pub struct PooledListBuilder<T> {
    capacity_hint: NonZero<usize>,

    _item: PhantomData<T>,
}

impl<T> std::fmt::Debug for PooledListBuilder<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PooledListBuilder")
            .field(
                "item_type",
                &std::format_args!("{}", std::any::type_name::<T>()),
            )
            .field("capacity_hint", &self.capacity_hint)
            .finish()
    }
}

impl<T> PooledListBuilder<T> {
    pub(crate) fn new() -> Self {
        Self {
            capacity_hint: nz!(1),
            _item: PhantomData,
        }
    }

    /// Sets the number of pooled nodes to pre-allocate. A hint of zero is
    /// treated as one - the pool always holds at least one node.
    ///
    /// # Examples
    ///
    /// ```
    /// use pooled_list::PooledList;
    ///
    /// let list = PooledList::<u32>::builder().capacity_hint(0).build();
    ///
    /// assert_eq!(list.capacity(), 1);
    /// ```
    pub fn capacity_hint(mut self, hint: usize) -> Self {
        self.capacity_hint = NonZero::new(hint).unwrap_or(nz!(1));
        self
    }

    /// Consumes the builder and creates the list, pre-allocating its pool
    /// of linked nodes in one pass.
    ///
    /// # Examples
    ///
    /// ```
    /// use pooled_list::PooledList;
    ///
    /// let list = PooledList::<u32>::builder().build();
    /// ```
    #[must_use]
    pub fn build(self) -> PooledList<T> {
        PooledList::new_inner(self.capacity_hint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_hint_is_one_node() {
        let list = PooledListBuilder::<u32>::new().build();

        assert_eq!(list.capacity(), 1);
    }

    #[test]
    fn debug_output_names_the_item_type() {
        let builder = PooledList::<String>::builder();

        let output = format!("{builder:?}");

        assert!(output.contains("String"));
        assert!(output.contains("capacity_hint"));
    }
}
