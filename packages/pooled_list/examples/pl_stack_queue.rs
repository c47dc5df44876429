//! `PooledList` as the base for stack (LIFO) and queue (FIFO) adapters.
//!
//! The list itself ships no wrappers - this shows how thin they are to build
//! on top of the end operations, and how both reuse pooled capacity across
//! repeated push/pop cycles.

use pooled_list::PooledList;

/// Last in, first out.
#[derive(Debug, Default)]
struct Stack<T> {
    list: PooledList<T>,
}

impl<T> Stack<T> {
    fn push(&mut self, value: T) {
        self.list.push_back(value);
    }

    fn pop(&mut self) -> Option<T> {
        self.list.remove_last().ok()
    }

    fn peek(&self) -> Option<&T> {
        self.list.last()
    }
}

/// First in, first out.
#[derive(Debug, Default)]
struct Queue<T> {
    list: PooledList<T>,
}

impl<T> Queue<T> {
    fn enqueue(&mut self, value: T) {
        self.list.push_back(value);
    }

    fn dequeue(&mut self) -> Option<T> {
        self.list.remove_first().ok()
    }
}

fn main() {
    let mut stack = Stack::default();

    stack.push(1);
    stack.push(2);
    stack.push(3);

    println!("Top of stack: {:?}", stack.peek());

    while let Some(value) = stack.pop() {
        println!("Popped {value}");
    }

    let mut queue = Queue::default();

    for ticket in ["first", "second", "third"] {
        queue.enqueue(ticket);
    }

    while let Some(ticket) = queue.dequeue() {
        println!("Serving {ticket}");
    }

    // Every push/pop cycle above reused pooled nodes; the queue's pool
    // peaked at three nodes and stayed there.
    println!("Queue pool capacity: {}", queue.list.capacity());
}
