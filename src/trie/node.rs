use std::cmp::Ordering;
use std::hash;

use hashbrown::HashSet;

use super::char_trait::TrieChar;
use super::pairs::Next;

/// The record kept for one unit at one depth of a [`DepthIndexedTrie`](super::depth::DepthIndexedTrie).
///
/// Nodes only ever grow: followers are added, never removed, and once a node
/// is marked as a word end it stays one.
#[derive(Clone, Debug)]
pub struct DepthNode<C: TrieChar> {
    ch: C,
    followers: HashSet<C>,
    word_end: bool,
}

impl<C: TrieChar> DepthNode<C> {
    /// Creates a node with no followers that does not end a word.
    pub fn new(ch: C) -> Self {
        DepthNode {
            ch,
            followers: HashSet::new(),
            word_end: false,
        }
    }

    /// Creates a node with a single follower.
    pub fn with_follower(ch: C, next: C) -> Self {
        let mut node = DepthNode::new(ch);
        node.followers.insert(next);
        node
    }

    /// Creates a node that ends a word and has no followers.
    pub fn terminal(ch: C) -> Self {
        DepthNode {
            word_end: true,
            ..DepthNode::new(ch)
        }
    }

    /// Creates the node for the first sighting of a `(unit, next)` pair.
    pub(crate) fn from_pair(ch: C, next: Next<C>) -> Self {
        match next {
            Next::Unit(n) => DepthNode::with_follower(ch, n),
            Next::EndOfWord => DepthNode::terminal(ch),
        }
    }

    /// The unit this node stands for.
    #[inline]
    pub fn ch(&self) -> C {
        self.ch
    }

    /// True if at least one inserted word ends with this unit at this depth.
    #[inline]
    pub fn is_word_end(&self) -> bool {
        self.word_end
    }

    /// True if `next` has been seen immediately after this unit at this depth.
    #[inline]
    pub fn has_follower(&self, next: C) -> bool {
        self.followers.contains(&next)
    }

    /// Returns an iterator over the followers, in no particular order.
    pub fn followers(&self) -> impl Iterator<Item = C> + '_ {
        self.followers.iter().copied()
    }

    /// Returns the number of distinct followers.
    #[inline]
    pub fn follower_count(&self) -> usize {
        self.followers.len()
    }

    /// Adds a follower. Returns true if it was not already present.
    pub(crate) fn add_follower(&mut self, next: C) -> bool {
        self.followers.insert(next)
    }

    /// Marks this node as the end of a word.
    pub(crate) fn mark_word_end(&mut self) {
        self.word_end = true;
    }

    /// Applies one observed pair to an existing node.
    ///
    /// The end-of-word marker never becomes a follower.
    pub(crate) fn record(&mut self, next: Next<C>) {
        match next {
            Next::Unit(n) => {
                self.add_follower(n);
            }
            Next::EndOfWord => self.mark_word_end(),
        }
    }

    /// True if the followers and word-end flag match `other` as well as the unit.
    pub fn same_state(&self, other: &Self) -> bool {
        self.ch == other.ch && self.word_end == other.word_end && self.followers == other.followers
    }
}

// Identity within a level is the unit alone; followers and the word-end flag
// are state, not identity.
impl<C: TrieChar> PartialEq for DepthNode<C> {
    fn eq(&self, rhs: &Self) -> bool {
        self.ch == rhs.ch
    }
}

impl<C: TrieChar> Eq for DepthNode<C> {}

impl<C: TrieChar> hash::Hash for DepthNode<C> {
    fn hash<H>(&self, state: &mut H)
    where
        H: hash::Hasher,
    {
        self.ch.hash(state);
    }
}

impl<C: TrieChar> Ord for DepthNode<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ch.cmp(&other.ch)
    }
}

impl<C: TrieChar> PartialOrd for DepthNode<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
