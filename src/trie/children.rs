use super::arena::NodeId;
use super::char_trait::TrieChar;

/// A compact, sorted representation of a path node's outgoing edges that
/// doesn't allocate until there are at least three children.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Children<C: TrieChar> {
    /// No children.
    None,
    /// Exactly one child (letter, node).
    One((C, NodeId)),
    /// Exactly two children (letter1, node1, letter2, node2), `letter1 < letter2`.
    Two((C, NodeId, C, NodeId)),
    /// Three or more children, sorted by letter.
    Many(Vec<(C, NodeId)>),
}

impl<C: TrieChar> Children<C> {
    /// Returns the node that `letter`'s edge leads to.
    #[inline]
    pub fn get(&self, letter: C) -> Option<NodeId> {
        match self {
            Children::None => None,
            Children::One((ch, node)) => (*ch == letter).then_some(*node),
            Children::Two((c1, n1, c2, n2)) => {
                if letter == *c1 {
                    Some(*n1)
                } else if letter == *c2 {
                    Some(*n2)
                } else {
                    None
                }
            }
            Children::Many(children) => children
                .binary_search_by_key(&letter, |&(c, _)| c)
                .ok()
                .map(|i| children[i].1),
        }
    }

    /// Gets the child at the specified index.
    ///
    /// Returns `None` if the index is out of bounds.
    #[inline]
    pub fn get_index(&self, index: usize) -> Option<(C, NodeId)> {
        match self {
            Children::None => None,
            Children::One(child) => (index == 0).then_some(*child),
            Children::Two((c1, n1, c2, n2)) => match index {
                0 => Some((*c1, *n1)),
                1 => Some((*c2, *n2)),
                _ => None,
            },
            Children::Many(children) => children.get(index).copied(),
        }
    }

    /// Returns the number of children.
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Children::None => 0,
            Children::One(_) => 1,
            Children::Two(_) => 2,
            Children::Many(children) => children.len(),
        }
    }

    /// True if there are no children.
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Children::None)
    }

    /// Inserts an edge in sorted position.
    pub(crate) fn insert(&mut self, letter: C, child: NodeId) {
        debug_assert!(self.get(letter).is_none(), "insert: letter already exists");
        let edge = (letter, child);
        *self = match std::mem::replace(self, Children::None) {
            Children::None => Children::One(edge),
            Children::One((c1, n1)) => {
                if letter < c1 {
                    Children::Two((letter, child, c1, n1))
                } else {
                    Children::Two((c1, n1, letter, child))
                }
            }
            Children::Two((c1, n1, c2, n2)) => {
                let mut v = vec![(c1, n1), (c2, n2), edge];
                v.sort_by_key(|&(c, _)| c);
                Children::Many(v)
            }
            Children::Many(mut children) => {
                let pos = children.partition_point(|&(c, _)| c < letter);
                children.insert(pos, edge);
                Children::Many(children)
            }
        };
    }

    /// Returns an iterator over the edges in letter order.
    #[inline]
    pub fn iter(&self) -> ChildIter<'_, C> {
        ChildIter {
            children: self,
            index: 0,
        }
    }
}

/// An iterator over the edges of a [`Children`] set.
#[derive(Clone)]
pub struct ChildIter<'a, C: TrieChar> {
    children: &'a Children<C>,
    index: usize,
}

impl<C: TrieChar> Iterator for ChildIter<'_, C> {
    type Item = (C, NodeId);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let next_child = self.children.get_index(self.index)?;
        self.index += 1;
        Some(next_child)
    }

    /// Since we know the exact size, we can do better than the default implementation.
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.children.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<C: TrieChar> ExactSizeIterator for ChildIter<'_, C> {}
