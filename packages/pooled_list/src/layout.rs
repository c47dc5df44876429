use std::fmt;

use crate::PooledList;

/// A diagnostic view of a [`PooledList`]'s pool, created by
/// [`PooledList::layout()`].
///
/// Formatting the view with [`Display`][fmt::Display] renders the whole node
/// chain with per-node role labels (`item` for active nodes, `spare` for
/// pooled capacity) and the four boundary markers (`front`, `start`, `end`,
/// `tail`):
///
/// ```text
/// NULL <- [item|front|start] <-> [item|end] <-> [spare|tail] -> NULL
/// ```
///
/// The view is a side channel for callers to route wherever they log or
/// debug - the list performs no I/O itself and nothing here is part of the
/// functional contract.
///
/// # Example
///
/// ```rust
/// use pooled_list::PooledList;
///
/// let mut list = PooledList::with_capacity(3);
/// list.push_back("a");
///
/// eprintln!("{}", list.layout());
/// ```
#[must_use]
pub struct ChainLayout<'a, T> {
    list: &'a PooledList<T>,
}

impl<'a, T> ChainLayout<'a, T> {
    pub(crate) fn new(list: &'a PooledList<T>) -> Self {
        Self { list }
    }
}

impl<T> fmt::Display for ChainLayout<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let chain = self.list.chain();

        write!(f, "NULL <- ")?;

        let mut cursor = Some(chain.front());
        let mut first = true;

        while let Some(index) = cursor {
            if !first {
                write!(f, " <-> ")?;
            }
            first = false;

            let role = if chain.value(index).is_some() {
                "item"
            } else {
                "spare"
            };

            write!(f, "[{role}")?;

            if index == chain.front() {
                write!(f, "|front")?;
            }
            if index == self.list.list_start() {
                write!(f, "|start")?;
            }
            if index == self.list.list_end() {
                write!(f, "|end")?;
            }
            if index == chain.tail() {
                write!(f, "|tail")?;
            }

            write!(f, "]")?;

            cursor = chain.next_of(index);
        }

        write!(f, " -> NULL")
    }
}

impl<T> fmt::Debug for ChainLayout<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainLayout")
            .field("capacity", &self.list.capacity())
            .field("len", &self.list.len())
            .field("rendered", &format_args!("{self}"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_single_node_pool() {
        let list = PooledList::<u32>::new();

        assert_eq!(
            list.layout().to_string(),
            "NULL <- [spare|front|start|end|tail] -> NULL"
        );
    }

    #[test]
    fn window_with_trailing_spare_capacity() {
        let mut list = PooledList::with_capacity(3);

        list.push_back("a");
        list.push_back("b");

        assert_eq!(
            list.layout().to_string(),
            "NULL <- [item|front|start] <-> [item|end] <-> [spare|tail] -> NULL"
        );
    }

    #[test]
    fn window_with_leading_spare_capacity() {
        let mut list = PooledList::with_capacity(3);

        list.push_back(1);
        list.push_back(2);
        list.push_back(3);

        _ = list.remove_first().unwrap();

        assert_eq!(
            list.layout().to_string(),
            "NULL <- [spare|front] <-> [item|start] <-> [item|end|tail] -> NULL"
        );
    }

    #[test]
    fn marker_count_matches_capacity() {
        let mut list: PooledList<u32> = (0..5).collect();

        _ = list.remove_last().unwrap();

        let rendered = list.layout().to_string();

        assert_eq!(rendered.matches('[').count(), list.capacity());
        assert_eq!(rendered.matches("item").count(), list.len());
    }

    #[test]
    fn debug_output_summarizes_the_pool() {
        let list: PooledList<u32> = (0..2).collect();

        let output = format!("{:?}", list.layout());

        assert!(output.contains("capacity"));
        assert!(output.contains("len"));
    }
}
