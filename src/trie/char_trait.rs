use std::fmt::Debug;
use std::hash::Hash;

/// Trait for types that can serve as text units in a trie.
///
/// This trait is automatically implemented for any type satisfying all the
/// required bounds (`char`, `u8`, `u16`, `u32`, etc.).
///
/// - `Copy`: nodes and follower sets store units by value
/// - `Eq + Ord`: comparing units and producing sorted output
/// - `Hash`: keyed lookup of nodes within a level
/// - `Debug`: debug printing of nodes
///
/// No value of the type is reserved as an end-of-word marker; word ends are
/// signalled out of band with [`Next::EndOfWord`](super::pairs::Next::EndOfWord).
pub trait TrieChar: Copy + Eq + Ord + Hash + Debug {}

impl<T: Copy + Eq + Ord + Hash + Debug> TrieChar for T {}
