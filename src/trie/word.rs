use smallvec::SmallVec;

use super::char_trait::TrieChar;

/// Inline capacity of a collected word before it spills to the heap.
pub const WORD_INLINE: usize = 32;

/// A word collected into a small inline buffer.
pub type WordBuf<C> = SmallVec<[C; WORD_INLINE]>;

/// Trait for types that can be used as a word when inserting into or searching a trie.
///
/// Implemented for common string and sequence types so that
/// [`DepthIndexedTrie::insert`](super::depth::DepthIndexedTrie::insert) and friends
/// accept them directly without manual conversion.
pub trait IntoWord<C: TrieChar> {
    /// Collects this word into a unit buffer.
    fn collect_word(self) -> WordBuf<C>;
}

// String types → char

impl IntoWord<char> for &str {
    fn collect_word(self) -> WordBuf<char> {
        self.chars().collect()
    }
}

impl IntoWord<char> for &&str {
    fn collect_word(self) -> WordBuf<char> {
        self.chars().collect()
    }
}

impl IntoWord<char> for String {
    fn collect_word(self) -> WordBuf<char> {
        self.chars().collect()
    }
}

impl IntoWord<char> for &String {
    fn collect_word(self) -> WordBuf<char> {
        self.chars().collect()
    }
}

// Generic sequence types → C

impl<C: TrieChar> IntoWord<C> for &[C] {
    fn collect_word(self) -> WordBuf<C> {
        self.iter().copied().collect()
    }
}

impl<C: TrieChar> IntoWord<C> for Vec<C> {
    fn collect_word(self) -> WordBuf<C> {
        self.into_iter().collect()
    }
}

impl<C: TrieChar> IntoWord<C> for &Vec<C> {
    fn collect_word(self) -> WordBuf<C> {
        self.iter().copied().collect()
    }
}

impl<C: TrieChar, const N: usize> IntoWord<C> for [C; N] {
    fn collect_word(self) -> WordBuf<C> {
        self.into_iter().collect()
    }
}

impl<C: TrieChar, const N: usize> IntoWord<C> for &[C; N] {
    fn collect_word(self) -> WordBuf<C> {
        self.iter().copied().collect()
    }
}
