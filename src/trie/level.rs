use hashbrown::hash_map::Entry;
use hashbrown::HashMap;
use itertools::Itertools;

use super::char_trait::TrieChar;
use super::node::DepthNode;
use super::pairs::Next;

/// Every distinct unit seen at one depth, keyed by the unit.
#[derive(Clone, Debug)]
pub struct Level<C: TrieChar> {
    nodes: HashMap<C, DepthNode<C>>,
}

impl<C: TrieChar> Level<C> {
    /// Creates an empty level.
    pub fn new() -> Self {
        Level {
            nodes: HashMap::new(),
        }
    }

    /// Returns the node for `ch`, if `ch` has been seen at this depth.
    #[inline]
    pub fn get(&self, ch: C) -> Option<&DepthNode<C>> {
        self.nodes.get(&ch)
    }

    /// True if `ch` has been seen at this depth.
    #[inline]
    pub fn contains(&self, ch: C) -> bool {
        self.nodes.contains_key(&ch)
    }

    /// Returns the number of distinct units at this depth.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if no unit has been recorded at this depth.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns an iterator over the nodes, in no particular order.
    pub fn nodes(&self) -> impl Iterator<Item = &DepthNode<C>> + '_ {
        self.nodes.values()
    }

    /// Returns the nodes ordered by unit.
    pub fn sorted_nodes(&self) -> impl Iterator<Item = &DepthNode<C>> + '_ {
        self.nodes.values().sorted()
    }

    /// True if any node at this depth ends a word.
    pub fn has_word_end(&self) -> bool {
        self.nodes.values().any(DepthNode::is_word_end)
    }

    /// Records one `(unit, next)` pair at this depth, creating the node on
    /// first sight and updating it in place otherwise.
    ///
    /// Returns true if a new node was created.
    pub(crate) fn record(&mut self, ch: C, next: Next<C>) -> bool {
        match self.nodes.entry(ch) {
            Entry::Occupied(mut entry) => {
                entry.get_mut().record(next);
                false
            }
            Entry::Vacant(entry) => {
                entry.insert(DepthNode::from_pair(ch, next));
                true
            }
        }
    }
}

impl<C: TrieChar> Default for Level<C> {
    fn default() -> Self {
        Level::new()
    }
}

// Structural equality: same units, and each unit's node has the same state.
impl<C: TrieChar> PartialEq for Level<C> {
    fn eq(&self, rhs: &Self) -> bool {
        self.len() == rhs.len()
            && self
                .nodes
                .iter()
                .all(|(ch, node)| rhs.get(*ch).is_some_and(|other| node.same_state(other)))
    }
}

impl<C: TrieChar> Eq for Level<C> {}
