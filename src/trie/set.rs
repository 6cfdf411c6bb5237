use super::char_trait::TrieChar;
use super::depth::DepthIndexedTrie;
use super::path::PathTrie;

/// A structure that stores words and answers membership queries.
pub trait WordSet<C: TrieChar> {
    /// Stores a word. The empty word is ignored.
    fn insert_word(&mut self, word: &[C]);

    /// Returns true if the structure reports `word` as present.
    fn contains_word(&self, word: &[C]) -> bool;
}

impl<C: TrieChar> WordSet<C> for DepthIndexedTrie<C> {
    fn insert_word(&mut self, word: &[C]) {
        self.insert(word);
    }

    fn contains_word(&self, word: &[C]) -> bool {
        self.search(word)
    }
}

impl<C: TrieChar> WordSet<C> for PathTrie<C> {
    fn insert_word(&mut self, word: &[C]) {
        self.insert(word);
    }

    fn contains_word(&self, word: &[C]) -> bool {
        self.search(word)
    }
}
