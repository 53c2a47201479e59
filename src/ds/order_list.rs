//! Doubly linked ordering list backed by [`SlotArena`].
//!
//! The shared ordering primitive under all four ARC lists. Nodes live in
//! the arena and link by `SlotId`, giving stable handles and O(1) detach,
//! reattach, and removal without pointer chasing.
//!
//! ```text
//!   arena (SlotArena<Node<T>>)
//!   ┌────────┬────────────────────────────────────────────┐
//!   │ SlotId │ Node { value, prev, next }                 │
//!   ├────────┼────────────────────────────────────────────┤
//!   │ id_1   │ { value: A, prev: None, next: Some(id_2) } │
//!   │ id_2   │ { value: B, prev: id_1, next: Some(id_3) } │
//!   │ id_3   │ { value: C, prev: id_2, next: None }       │
//!   └────────┴────────────────────────────────────────────┘
//!
//!   head ─► [id_1] ◄──► [id_2] ◄──► [id_3] ◄── tail
//!          (newest/MRU)                 (oldest/LRU)
//! ```
//!
//! Every operation except `iter` is O(1).

use crate::ds::slot_arena::{SlotArena, SlotId};

#[derive(Debug)]
struct Node<T> {
    value: T,
    prev: Option<SlotId>,
    next: Option<SlotId>,
}

/// Arena-backed doubly linked list, head = newest, tail = oldest.
#[derive(Debug)]
pub struct OrderList<T> {
    arena: SlotArena<Node<T>>,
    head: Option<SlotId>,
    tail: Option<SlotId>,
}

impl<T> OrderList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            arena: SlotArena::new(),
            head: None,
            tail: None,
        }
    }

    /// Creates an empty list with reserved node capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: SlotArena::with_capacity(capacity),
            head: None,
            tail: None,
        }
    }

    /// Returns the number of nodes.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Returns `true` if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Returns the value at the tail (oldest), if any.
    pub fn back(&self) -> Option<&T> {
        self.tail.and_then(|id| self.get(id))
    }

    /// Returns the value at the head (newest), if any.
    pub fn front(&self) -> Option<&T> {
        self.head.and_then(|id| self.get(id))
    }

    /// Returns the value for a node id, if present.
    pub fn get(&self, id: SlotId) -> Option<&T> {
        self.arena.get(id).map(|node| &node.value)
    }

    /// Inserts a new node at the head and returns its id.
    pub fn push_front(&mut self, value: T) -> SlotId {
        let id = self.arena.insert(Node {
            value,
            prev: None,
            next: self.head,
        });
        match self.head {
            Some(old) => self.arena.get_mut(old).expect("head node missing").prev = Some(id),
            None => self.tail = Some(id),
        }
        self.head = Some(id);
        id
    }

    /// Removes and returns the tail (oldest) value.
    pub fn pop_back(&mut self) -> Option<T> {
        let id = self.tail?;
        self.remove(id)
    }

    /// Removes the node `id` and returns its value, if present.
    pub fn remove(&mut self, id: SlotId) -> Option<T> {
        let (prev, next) = {
            let node = self.arena.get(id)?;
            (node.prev, node.next)
        };
        match prev {
            Some(p) => self.arena.get_mut(p).expect("prev node missing").next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.arena.get_mut(n).expect("next node missing").prev = prev,
            None => self.tail = prev,
        }
        self.arena.remove(id).map(|node| node.value)
    }

    /// Moves an existing node to the head; returns `false` if not present.
    pub fn move_to_front(&mut self, id: SlotId) -> bool {
        if !self.arena.contains(id) {
            return false;
        }
        if self.head == Some(id) {
            return true;
        }
        // Detach, then relink at head.
        let (prev, next) = {
            let node = self.arena.get(id).expect("checked above");
            (node.prev, node.next)
        };
        match prev {
            Some(p) => self.arena.get_mut(p).expect("prev node missing").next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.arena.get_mut(n).expect("next node missing").prev = prev,
            None => self.tail = prev,
        }

        let old_head = self.head;
        {
            let node = self.arena.get_mut(id).expect("checked above");
            node.prev = None;
            node.next = old_head;
        }
        match old_head {
            Some(h) => self.arena.get_mut(h).expect("head node missing").prev = Some(id),
            None => self.tail = Some(id),
        }
        self.head = Some(id);
        true
    }

    /// Clears the list and frees all nodes.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = None;
        self.tail = None;
    }

    /// Returns an iterator from head (newest) to tail (oldest).
    pub fn iter(&self) -> OrderListIter<'_, T> {
        OrderListIter {
            list: self,
            current: self.head,
        }
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        if self.head.is_none() || self.tail.is_none() {
            assert!(self.head.is_none());
            assert!(self.tail.is_none());
            assert_eq!(self.len(), 0);
            return;
        }

        let mut count = 0usize;
        let mut prev = None;
        let mut current = self.head;
        while let Some(id) = current {
            let node = self.arena.get(id).expect("linked node missing from arena");
            assert_eq!(node.prev, prev);
            prev = Some(id);
            current = node.next;
            count += 1;
            assert!(count <= self.len(), "cycle detected");
        }
        assert_eq!(self.tail, prev);
        assert_eq!(count, self.len());
    }
}

impl<T> Default for OrderList<T> {
    fn default() -> Self {
        Self::new()
    }
}

pub struct OrderListIter<'a, T> {
    list: &'a OrderList<T>,
    current: Option<SlotId>,
}

impl<'a, T> Iterator for OrderListIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        let node = self.list.arena.get(id)?;
        self.current = node.next;
        Some(&node.value)
    }
}
