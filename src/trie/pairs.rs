//! Pairwise traversal of a word.
//!
//! `"hello"` yields `('h', 'e'), ('e', 'l'), ('l', 'l'), ('l', 'o'), ('o', <end>)`.

use std::iter::FusedIterator;

use super::char_trait::TrieChar;

/// The unit that follows another unit in a word, or the end of the word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Next<C: TrieChar> {
    /// Another unit follows.
    Unit(C),
    /// No unit follows; the word ends here.
    EndOfWord,
}

impl<C: TrieChar> Next<C> {
    /// Returns the following unit, if any.
    #[inline]
    pub fn unit(self) -> Option<C> {
        match self {
            Next::Unit(c) => Some(c),
            Next::EndOfWord => None,
        }
    }

    /// True if this marks the end of the word.
    #[inline]
    pub fn is_end(self) -> bool {
        matches!(self, Next::EndOfWord)
    }
}

impl<C: TrieChar> From<Option<C>> for Next<C> {
    fn from(next: Option<C>) -> Self {
        next.map_or(Next::EndOfWord, Next::Unit)
    }
}

/// A lazy iterator over the adjacent unit pairs of a word.
///
/// A word of length `L` produces exactly `L` pairs. Cloning the iterator, or
/// calling [`pairwise`] again, starts an independent traversal.
#[derive(Clone, Debug)]
pub struct Pairwise<'a, C: TrieChar> {
    word: &'a [C],
    index: usize,
}

/// Returns a pairwise iterator over `word`.
///
/// ```
/// use depthtrie::trie::pairs::{pairwise, Next};
///
/// let word: Vec<char> = "hi".chars().collect();
/// let pairs: Vec<_> = pairwise(&word).collect();
/// assert_eq!(pairs, [('h', Next::Unit('i')), ('i', Next::EndOfWord)]);
/// ```
pub fn pairwise<C: TrieChar>(word: &[C]) -> Pairwise<'_, C> {
    Pairwise { word, index: 0 }
}

impl<C: TrieChar> Iterator for Pairwise<'_, C> {
    type Item = (C, Next<C>);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let current = *self.word.get(self.index)?;
        self.index += 1;
        let next = self.word.get(self.index).copied().into();
        Some((current, next))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.word.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<C: TrieChar> ExactSizeIterator for Pairwise<'_, C> {}

impl<C: TrieChar> FusedIterator for Pairwise<'_, C> {}

#[cfg(test)]
mod test {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn hello_pairs() {
        let word = chars("hello");
        let pairs: Vec<_> = pairwise(&word).collect();
        assert_eq!(
            pairs,
            [
                ('h', Next::Unit('e')),
                ('e', Next::Unit('l')),
                ('l', Next::Unit('l')),
                ('l', Next::Unit('o')),
                ('o', Next::EndOfWord),
            ]
        );
    }

    #[test]
    fn single_unit() {
        let pairs: Vec<_> = pairwise(&['a']).collect();
        assert_eq!(pairs, [('a', Next::EndOfWord)]);
    }

    #[test]
    fn empty_word_yields_nothing() {
        let empty: [char; 0] = [];
        assert_eq!(pairwise(&empty).next(), None);
        assert_eq!(pairwise(&empty).len(), 0);
    }

    #[test]
    fn exact_length() {
        let word = chars("abcdef");
        let mut it = pairwise(&word);
        assert_eq!(it.len(), 6);
        it.next();
        assert_eq!(it.len(), 5);
        assert_eq!(it.count(), 5);
    }

    #[test]
    fn restartable() {
        let word = chars("abc");
        let mut first = pairwise(&word);
        first.next();
        let resumed = first.clone();
        assert_eq!(first.collect::<Vec<_>>(), resumed.collect::<Vec<_>>());
        assert_eq!(pairwise(&word).count(), 3);
    }

    #[test]
    fn fused_after_end() {
        let word = chars("a");
        let mut it = pairwise(&word);
        assert!(it.next().is_some());
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn zero_byte_is_an_ordinary_unit() {
        let word = [0u8, 0];
        let pairs: Vec<_> = pairwise(&word).collect();
        assert_eq!(pairs, [(0, Next::Unit(0)), (0, Next::EndOfWord)]);
    }

    #[test]
    fn next_accessors() {
        assert_eq!(Next::Unit('x').unit(), Some('x'));
        assert_eq!(Next::<char>::EndOfWord.unit(), None);
        assert!(Next::<char>::EndOfWord.is_end());
        assert!(!Next::Unit('x').is_end());
        assert_eq!(Next::from(None::<u8>), Next::EndOfWord);
    }
}
