//! Example that demonstrates the exact usage shown in the README.md file.
//!
//! This shows how `PooledList` recycles pooled capacity across end
//! operations.

use pooled_list::PooledList;

fn main() {
    println!("=== Pooled List README Example ===");

    // Pre-size the pool so the first four insertions never allocate.
    let mut list = PooledList::with_capacity(4);

    list.push_back("b");
    list.push_back("c");
    list.push_front("a");

    assert!(list.iter().eq(&["a", "b", "c"]));

    // Removals at the ends return their nodes to the pool...
    assert_eq!(list.remove_last(), Ok("c"));
    assert_eq!(list.remove_first(), Ok("a"));

    // ...so this reuses pooled capacity instead of allocating.
    list.push_back("d");
    assert_eq!(list.capacity(), 4);

    println!("README example completed successfully!");
}
