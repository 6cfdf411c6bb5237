//! # depthtrie
//!
//! In-memory word sets for membership and prefix tests.
//!
//! The main structure, [`DepthIndexedTrie`](trie::DepthIndexedTrie), keeps one
//! level per character position. Level `d` holds a node for every distinct unit
//! seen at position `d`, recording which units were seen right after it and
//! whether some word ended there. Nodes are keyed by `(depth, unit)` alone, so
//! words that share a unit at the same depth share a node even when their
//! earlier units differ.
//!
//! [`PathTrie`](trie::PathTrie) is the classical prefix tree, for when exact
//! membership matters more than the compactness of the depth index.
//!
//! ## Features
//!
//! - **Generic over unit type**: works with `char`, `u8`, `u16`, or any type implementing
//!   [`TrieChar`](trie::TrieChar)
//! - **No in-band sentinel**: word ends are an explicit [`Next::EndOfWord`](trie::Next)
//!   marker, so every unit value (including `0`) is an ordinary character
//! - **Total insertion**: every word is accepted, and inserting a word twice is a no-op
//!
//! ## Quick Start
//!
//! ```
//! use depthtrie::trie::DepthIndexedTrie;
//!
//! let mut trie = DepthIndexedTrie::<char>::new();
//! trie.insert("hello");
//!
//! assert!(trie.search("hello"));
//! assert!(trie.has_prefix("hel"));
//! assert!(!trie.search("hell"));
//!
//! let h = trie.node(0, 'h').unwrap();
//! assert!(h.has_follower('e'));
//! assert!(trie.node(4, 'o').unwrap().is_word_end());
//! ```
//!
//! ## Depth index versus path trie
//!
//! ```
//! use depthtrie::trie::{DepthIndexedTrie, PathTrie};
//!
//! let words = ["abc", "xbd"];
//! let depth: DepthIndexedTrie<char> = words.into_iter().collect();
//! let path: PathTrie<char> = words.into_iter().collect();
//!
//! // Both pairs of "abd" were seen, in different words.
//! assert!(depth.search("abd"));
//! assert!(!path.search("abd"));
//! ```

#![warn(missing_docs)]

/// Word structures: the depth index, the path trie and their building blocks.
pub mod trie;

pub use trie::{DepthIndexedTrie, PathTrie, TrieError};
