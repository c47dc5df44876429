//! Basic usage of the `pooled_list` crate:
//!
//! * Creating a pre-sized list.
//! * Adding elements at both ends.
//! * Indexed access.
//! * Removing elements and reusing pooled capacity.

use pooled_list::PooledList;

fn main() {
    let mut list = PooledList::with_capacity(4);

    list.push_back("Bob".to_string());
    list.push_back("Charlie".to_string());
    list.push_front("Alice".to_string());

    println!(
        "List contains {} elements in a pool of {} nodes",
        list.len(),
        list.capacity()
    );

    // Indexed access walks from whichever end of the list is nearer.
    let second = list.get(1).expect("we just inserted three elements");
    println!("Element at index 1: {second}");

    // Removing from the ends keeps the vacated nodes pooled for reuse.
    let last = list.remove_last().expect("the list is not empty");
    println!("Removed last element: {last}");
    println!(
        "Capacity is still {} - the node went back to the pool",
        list.capacity()
    );

    // The diagnostic layout view renders pool and window boundaries.
    println!("Pool layout: {}", list.layout());
}
