use tracing::{debug, trace};

use super::char_trait::TrieChar;
use super::config::TrieConfig;
use super::error::{Result, TrieError};
use super::level::Level;
use super::node::DepthNode;
use super::pairs::{pairwise, Next};
use super::word::IntoWord;

/// A depth-sliced index of unit adjacencies.
///
/// Level `d` holds one [`DepthNode`] for every distinct unit ever seen at
/// position `d` of an inserted word, regardless of which units came before
/// it. Two words that share a unit at the same depth share (and both update)
/// the same node, so this is an adjacency index rather than a prefix tree.
///
/// [`search`](DepthIndexedTrie::search) re-derives membership from the
/// adjacencies and therefore never misses an inserted word, but can accept
/// words that were never inserted when their pairs were contributed by
/// different words. Use [`PathTrie`](super::path::PathTrie) when exact
/// membership is required.
///
/// # Examples
///
/// ```
/// use depthtrie::trie::depth::DepthIndexedTrie;
///
/// let mut trie = DepthIndexedTrie::<char>::new();
/// trie.insert("abc");
/// trie.insert("xbd");
///
/// assert!(trie.search("abc"));
/// assert!(!trie.search("ab"));
/// // Every pair of "abd" was contributed by one of the two words.
/// assert!(trie.search("abd"));
/// ```
#[derive(Clone)]
pub struct DepthIndexedTrie<C: TrieChar> {
    levels: Vec<Level<C>>,
    config: TrieConfig,
}

impl<C: TrieChar> DepthIndexedTrie<C> {
    /// Creates an empty trie with the default configuration.
    pub fn new() -> Self {
        DepthIndexedTrie::with_config(TrieConfig::default())
    }

    /// Creates an empty trie with the given configuration.
    pub fn with_config(config: TrieConfig) -> Self {
        DepthIndexedTrie {
            levels: Vec::new(),
            config,
        }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &TrieConfig {
        &self.config
    }

    /// Inserts a word.
    ///
    /// Every input is accepted. The empty word leaves the trie unchanged, and
    /// inserting a word again leaves the trie in the same state.
    pub fn insert(&mut self, word: impl IntoWord<C>) {
        let word = word.collect_word();
        self.insert_slice(&word);
    }

    /// Inserts a word if it fits within the configured maximum depth.
    ///
    /// # Errors
    ///
    /// Returns [`TrieError::WordTooLong`] without modifying the trie if the word
    /// is longer than [`TrieConfig::max_depth`].
    pub fn try_insert(&mut self, word: impl IntoWord<C>) -> Result<()> {
        let word = word.collect_word();
        if !self.config.accepts(word.len()) {
            return Err(TrieError::WordTooLong {
                len: word.len(),
                max_depth: self.config.max_depth.unwrap_or(usize::MAX),
            });
        }
        self.insert_slice(&word);
        Ok(())
    }

    fn insert_slice(&mut self, word: &[C]) {
        for (depth, (ch, next)) in pairwise(word).enumerate() {
            if depth == self.levels.len() {
                trace!(depth, "appending level");
                self.levels.push(Level::new());
            }
            if self.levels[depth].record(ch, next) {
                trace!(depth, ch = ?ch, end = next.is_end(), "created node");
            }
        }
    }

    /// Returns true if the word can be re-derived from the recorded adjacencies.
    ///
    /// Walking the word depth by depth, each unit must have a node at its depth;
    /// every unit but the last must list the following unit as a follower, and
    /// the last unit's node must end a word. The empty word is never found.
    pub fn search(&self, word: impl IntoWord<C>) -> bool {
        let word = word.collect_word();
        !word.is_empty()
            && pairwise(&word).enumerate().all(|(depth, (ch, next))| {
                self.node(depth, ch).is_some_and(|node| match next {
                    Next::Unit(n) => node.has_follower(n),
                    Next::EndOfWord => node.is_word_end(),
                })
            })
    }

    /// Returns true if the prefix can be re-derived from the recorded adjacencies.
    ///
    /// Same walk as [`search`](DepthIndexedTrie::search) without requiring the
    /// last unit to end a word. The empty prefix is accepted when the trie
    /// holds at least one word.
    pub fn has_prefix(&self, prefix: impl IntoWord<C>) -> bool {
        let prefix = prefix.collect_word();
        if prefix.is_empty() {
            return !self.is_empty();
        }
        pairwise(&prefix).enumerate().all(|(depth, (ch, next))| {
            self.node(depth, ch)
                .is_some_and(|node| next.unit().map_or(true, |n| node.has_follower(n)))
        })
    }

    /// Returns all levels, shallowest first.
    pub fn levels(&self) -> &[Level<C>] {
        &self.levels
    }

    /// Returns the level at `depth`.
    pub fn level(&self, depth: usize) -> Option<&Level<C>> {
        self.levels.get(depth)
    }

    /// Returns the number of levels, which is the length of the longest inserted word.
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    /// Returns the node for `ch` at `depth`.
    #[inline]
    pub fn node(&self, depth: usize, ch: C) -> Option<&DepthNode<C>> {
        self.levels.get(depth)?.get(ch)
    }

    /// Returns the total number of nodes over all levels.
    pub fn node_count(&self) -> usize {
        self.levels.iter().map(Level::len).sum()
    }

    /// True if no word has been inserted.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

impl DepthIndexedTrie<char> {
    /// Decodes `bytes` as UTF-8 and inserts the result as a word of `char`s.
    ///
    /// # Errors
    ///
    /// Returns [`TrieError::InvalidInput`] if `bytes` is not valid UTF-8, or
    /// [`TrieError::WordTooLong`] as for [`try_insert`](DepthIndexedTrie::try_insert).
    pub fn try_insert_utf8(&mut self, bytes: &[u8]) -> Result<()> {
        let word = std::str::from_utf8(bytes)?;
        self.try_insert(word)
    }
}

impl<C: TrieChar> Default for DepthIndexedTrie<C> {
    fn default() -> Self {
        DepthIndexedTrie::new()
    }
}

impl<C: TrieChar> PartialEq for DepthIndexedTrie<C> {
    fn eq(&self, rhs: &Self) -> bool {
        self.levels == rhs.levels
    }
}

impl<C: TrieChar> Eq for DepthIndexedTrie<C> {}

impl<C: TrieChar> std::fmt::Debug for DepthIndexedTrie<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DepthIndexedTrie")
            .field("depth", &self.depth())
            .field("node_count", &self.node_count())
            .finish()
    }
}

impl<C: TrieChar, W: IntoWord<C>> Extend<W> for DepthIndexedTrie<C> {
    fn extend<I: IntoIterator<Item = W>>(&mut self, words: I) {
        for word in words {
            self.insert(word);
        }
    }
}

impl<C: TrieChar, W: IntoWord<C>> FromIterator<W> for DepthIndexedTrie<C> {
    fn from_iter<I: IntoIterator<Item = W>>(words: I) -> Self {
        let mut trie = DepthIndexedTrie::new();
        trie.extend(words);
        trie
    }
}

/// Builds a depth-indexed trie from an iterator of words.
///
/// Words may arrive in any order and may repeat.
///
/// ```
/// use depthtrie::trie::depth::{build_depth_trie, DepthIndexedTrie};
///
/// let trie: DepthIndexedTrie<char> = build_depth_trie(["CHERRY", "APPLE", "BANANA", "APPLE"]);
/// assert!(trie.search("BANANA"));
/// assert_eq!(trie.depth(), 6);
/// ```
pub fn build_depth_trie<C, W>(words: impl IntoIterator<Item = W>) -> DepthIndexedTrie<C>
where
    C: TrieChar,
    W: IntoWord<C>,
{
    let trie: DepthIndexedTrie<C> = words.into_iter().collect();
    debug!(
        depth = trie.depth(),
        nodes = trie.node_count(),
        "built depth-indexed trie"
    );
    trie
}
