//! Example: comparing the depth index with the path trie.
//!
//! Builds both structures from the same words, then shows lookups, prefix
//! checks, the per-depth layout of the index, and the words the depth index
//! accepts without ever having seen them.
//!
//! Run with: cargo run --example wordlist

use depthtrie::trie::{DepthIndexedTrie, PathTrie};

fn main() {
    let words = ["BAKE", "BAKED", "BAKER", "CAKE", "CAKED", "FAKE", "LAKE"];
    let depth: DepthIndexedTrie<char> = words.into_iter().collect();
    let path: PathTrie<char> = words.into_iter().collect();

    // Word lookup
    println!("Word lookup (depth / path):");
    for word in ["BAKE", "BAKER", "BAKES", "CAKER", "LAKED", "MAKE"] {
        let yes_no = |found: bool| if found { "yes" } else { "no" };
        println!("  {word}: {} / {}", yes_no(depth.search(word)), yes_no(path.search(word)));
    }

    // Prefix checking
    println!("\nPrefix checking:");
    for prefix in ["BA", "CAK", "MA", "FAK"] {
        println!("  {prefix}*: {}", if depth.has_prefix(prefix) { "yes" } else { "no" });
    }

    // Per-depth layout
    println!("\nLevels:");
    for (d, level) in depth.levels().iter().enumerate() {
        let nodes: Vec<String> = level
            .sorted_nodes()
            .map(|node| {
                let mut followers: Vec<char> = node.followers().collect();
                followers.sort_unstable();
                let end = if node.is_word_end() { "$" } else { "" };
                format!("{}{end}->{}", node.ch(), followers.into_iter().collect::<String>())
            })
            .collect();
        println!("  {d}: {}", nodes.join(" "));
    }

    println!("\nAll words: {:?}", path.words().iter().map(|w| w.iter().collect::<String>()).collect::<Vec<_>>());
    println!("{depth:?}\n{path:?}");
}
