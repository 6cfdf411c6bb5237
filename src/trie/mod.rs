/// Index-addressed node storage for the path trie.
pub mod arena;
/// Trait for types that can serve as text units.
pub mod char_trait;
/// Compact sorted child edges of a path trie node.
pub mod children;
/// Settings for checked insertion.
pub mod config;
/// The depth-sliced adjacency index.
pub mod depth;
/// Errors returned by checked insertion.
pub mod error;
/// One depth's collection of nodes.
pub mod level;
/// Per-unit, per-depth node records.
pub mod node;
/// Pairwise traversal of a word with an explicit end marker.
pub mod pairs;
/// Classical prefix tree with exact membership.
pub mod path;
/// Common interface over both word structures.
pub mod set;
/// Conversion of strings and sequences into words.
pub mod word;

pub use char_trait::TrieChar;
pub use config::TrieConfig;
pub use depth::{build_depth_trie, DepthIndexedTrie};
pub use error::{Result, TrieError};
pub use level::Level;
pub use node::DepthNode;
pub use pairs::{pairwise, Next, Pairwise};
pub use path::{PathNode, PathTrie};
pub use set::WordSet;
pub use word::IntoWord;
