use tracing::debug;

use super::arena::{NodeArena, NodeId};
use super::char_trait::TrieChar;
use super::children::{ChildIter, Children};
use super::word::IntoWord;

/// A node in a [`PathTrie`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathNode<C: TrieChar> {
    children: Children<C>,
    word: bool,
}

impl<C: TrieChar> PathNode<C> {
    fn new() -> Self {
        PathNode {
            children: Children::None,
            word: false,
        }
    }

    /// Returns the child that `letter`'s edge leads to.
    #[inline]
    pub fn get(&self, letter: C) -> Option<NodeId> {
        self.children.get(letter)
    }

    /// True if the path to this node spells an inserted word.
    #[inline]
    pub fn is_word(&self) -> bool {
        self.word
    }

    /// Returns an iterator over all children of this node, in letter order.
    #[inline]
    pub fn children(&self) -> ChildIter<'_, C> {
        self.children.iter()
    }

    /// Returns the number of children.
    #[inline]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }
}

/// A classical prefix tree with exact membership.
///
/// Every node is reached by exactly one path from the root, so unlike
/// [`DepthIndexedTrie`](super::depth::DepthIndexedTrie) a word is only found
/// if it was inserted.
///
/// # Examples
///
/// ```
/// use depthtrie::trie::path::PathTrie;
///
/// let mut trie: PathTrie<char> = ["abc", "xbd"].into_iter().collect();
/// assert!(trie.search("abc"));
/// assert!(!trie.search("abd"));
///
/// assert!(trie.insert("abd"));
/// assert!(!trie.insert("abd")); // already present
/// assert_eq!(trie.len(), 3);
/// ```
#[derive(Clone)]
pub struct PathTrie<C: TrieChar> {
    arena: NodeArena<PathNode<C>>,
    root: NodeId,
    len: usize,
}

impl<C: TrieChar> PathTrie<C> {
    /// Creates an empty trie holding only the root node.
    pub fn new() -> Self {
        let mut arena = NodeArena::new();
        let root = arena.alloc(PathNode::new());
        PathTrie {
            arena,
            root,
            len: 0,
        }
    }

    /// Returns the id of the root node.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Returns the node for `id`.
    pub fn node(&self, id: NodeId) -> Option<&PathNode<C>> {
        self.arena.get(id)
    }

    /// Inserts a word.
    ///
    /// Returns `true` if the word was added, `false` if it was already present
    /// or empty.
    pub fn insert(&mut self, word: impl IntoWord<C>) -> bool {
        let word = word.collect_word();
        if word.is_empty() {
            return false;
        }

        let mut current = self.root;
        for &ch in word.iter() {
            current = match self.arena[current].get(ch) {
                Some(child) => child,
                None => {
                    let child = self.arena.alloc(PathNode::new());
                    self.arena[current].children.insert(ch, child);
                    child
                }
            };
        }

        let terminal = &mut self.arena[current];
        if terminal.word {
            return false;
        }
        terminal.word = true;
        self.len += 1;
        true
    }

    fn walk(&self, word: &[C]) -> Option<&PathNode<C>> {
        word.iter()
            .try_fold(&self.arena[self.root], |node, &ch| {
                node.get(ch).map(|id| &self.arena[id])
            })
    }

    /// Returns true if the word was inserted.
    pub fn search(&self, word: impl IntoWord<C>) -> bool {
        let word = word.collect_word();
        self.walk(&word).is_some_and(PathNode::is_word)
    }

    /// Returns true if any inserted word starts with `prefix`.
    ///
    /// The empty prefix is accepted when the trie holds at least one word.
    pub fn has_prefix(&self, prefix: impl IntoWord<C>) -> bool {
        let prefix = prefix.collect_word();
        !self.is_empty() && self.walk(&prefix).is_some()
    }

    /// Returns the number of distinct words.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if no word has been inserted.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of nodes, including the root.
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// Returns all words in sorted order.
    pub fn words(&self) -> Vec<Vec<C>> {
        let mut words = Vec::with_capacity(self.len);
        let mut prefix = Vec::new();
        self.collect_words(self.root, &mut prefix, &mut words);
        words
    }

    fn collect_words(&self, id: NodeId, prefix: &mut Vec<C>, words: &mut Vec<Vec<C>>) {
        let node = &self.arena[id];
        if node.is_word() {
            words.push(prefix.clone());
        }
        for (ch, child) in node.children() {
            prefix.push(ch);
            self.collect_words(child, prefix, words);
            prefix.pop();
        }
    }
}

impl<C: TrieChar> Default for PathTrie<C> {
    fn default() -> Self {
        PathTrie::new()
    }
}

impl<C: TrieChar> std::fmt::Debug for PathTrie<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PathTrie")
            .field("len", &self.len)
            .field("node_count", &self.node_count())
            .finish()
    }
}

impl<C: TrieChar, W: IntoWord<C>> Extend<W> for PathTrie<C> {
    fn extend<I: IntoIterator<Item = W>>(&mut self, words: I) {
        for word in words {
            self.insert(word);
        }
    }
}

impl<C: TrieChar, W: IntoWord<C>> FromIterator<W> for PathTrie<C> {
    fn from_iter<I: IntoIterator<Item = W>>(words: I) -> Self {
        let mut trie = PathTrie::new();
        trie.extend(words);
        debug!(words = trie.len(), nodes = trie.node_count(), "built path trie");
        trie
    }
}
