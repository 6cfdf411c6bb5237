//! An index-addressed arena for trie nodes.
//!
//! Nodes refer to each other by [`NodeId`] rather than by reference, so the
//! arena can grow and hand out mutable access without any unsafe code.

use std::ops::{Index, IndexMut};

/// The position of a node within a [`NodeArena`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Returns the raw index.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// An append-only arena. Nodes are never freed individually.
#[derive(Clone, Debug)]
pub(crate) struct NodeArena<T> {
    nodes: Vec<T>,
}

impl<T> NodeArena<T> {
    /// Creates an empty arena.
    pub fn new() -> Self {
        NodeArena { nodes: Vec::new() }
    }

    /// Stores a value and returns its id.
    pub fn alloc(&mut self, value: T) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(value);
        id
    }

    /// Returns the value for `id`, if `id` came from this arena.
    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.nodes.get(id.0)
    }

    /// Returns the number of values allocated in this arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
}

impl<T> Index<NodeId> for NodeArena<T> {
    type Output = T;

    #[inline]
    fn index(&self, id: NodeId) -> &T {
        &self.nodes[id.0]
    }
}

impl<T> IndexMut<NodeId> for NodeArena<T> {
    #[inline]
    fn index_mut(&mut self, id: NodeId) -> &mut T {
        &mut self.nodes[id.0]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn ids_are_sequential() {
        let mut arena = NodeArena::new();
        let a = arena.alloc('a');
        let b = arena.alloc('b');
        assert_eq!(a.index(), 0);
        assert_eq!(b.index(), 1);
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn index_and_mutate() {
        let mut arena = NodeArena::new();
        let id = arena.alloc(1);
        arena[id] += 41;
        assert_eq!(arena[id], 42);
        assert_eq!(arena.get(id), Some(&42));
        assert_eq!(arena.get(NodeId(7)), None);
    }
}
