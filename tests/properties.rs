use depthtrie::trie::{build_depth_trie, DepthIndexedTrie, PathTrie, WordSet};
use itertools::Itertools;
use proptest::collection::vec;
use proptest::prelude::*;

fn word_lists() -> impl Strategy<Value = Vec<String>> {
    vec("[a-e]{0,6}", 0..12)
}

proptest! {
    #[test]
    fn inserting_twice_matches_inserting_once(words in word_lists()) {
        let once: DepthIndexedTrie<char> = build_depth_trie(&words);
        let twice: DepthIndexedTrie<char> = build_depth_trie(words.iter().chain(&words));
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn depth_is_longest_word(words in word_lists()) {
        let trie: DepthIndexedTrie<char> = build_depth_trie(&words);
        let longest = words.iter().map(|w| w.chars().count()).max().unwrap_or(0);
        prop_assert_eq!(trie.depth(), longest);
    }

    #[test]
    fn depth_never_shrinks(words in word_lists()) {
        let mut trie = DepthIndexedTrie::<char>::new();
        let mut last = 0;
        for word in &words {
            trie.insert(word);
            prop_assert!(trie.depth() >= last);
            last = trie.depth();
        }
    }

    #[test]
    fn no_false_negatives(words in word_lists()) {
        let trie: DepthIndexedTrie<char> = build_depth_trie(&words);
        for word in words.iter().filter(|w| !w.is_empty()) {
            prop_assert!(trie.search(word), "{} not found", word);
            prop_assert!(trie.has_prefix(word));
        }
    }

    #[test]
    fn depth_index_accepts_everything_the_path_trie_accepts(
        words in word_lists(),
        probes in vec("[a-e]{0,6}", 0..24),
    ) {
        let depth: DepthIndexedTrie<char> = build_depth_trie(&words);
        let path: PathTrie<char> = words.iter().collect();
        for probe in &probes {
            let probe: Vec<char> = probe.chars().collect();
            if path.contains_word(&probe) {
                prop_assert!(depth.contains_word(&probe));
            }
        }
    }

    #[test]
    fn path_trie_is_exact(words in word_lists(), probe in "[a-e]{0,6}") {
        let path: PathTrie<char> = words.iter().collect();
        let expected = !probe.is_empty() && words.contains(&probe);
        prop_assert_eq!(path.search(&probe), expected);
    }

    #[test]
    fn path_trie_lists_distinct_sorted_words(words in word_lists()) {
        let path: PathTrie<char> = words.iter().collect();
        let listed: Vec<String> = path.words().into_iter().map(|w| w.into_iter().collect()).collect();
        let expected: Vec<String> = words.iter().filter(|w| !w.is_empty()).cloned().sorted().dedup().collect();
        prop_assert_eq!(path.len(), expected.len());
        prop_assert_eq!(listed, expected);
    }

    #[test]
    fn follower_sets_are_unions(words in word_lists()) {
        let trie: DepthIndexedTrie<char> = build_depth_trie(&words);
        for word in &words {
            let units: Vec<char> = word.chars().collect();
            for (depth, pair) in units.windows(2).enumerate() {
                let node = trie.node(depth, pair[0]).unwrap();
                prop_assert!(node.has_follower(pair[1]));
            }
            if let Some(&last) = units.last() {
                prop_assert!(trie.node(units.len() - 1, last).unwrap().is_word_end());
            }
        }
    }
}

#[test]
fn insertion_order_does_not_matter() {
    let words = ["cat", "cot", "car", "ca", "dog"];
    let reference: DepthIndexedTrie<char> = build_depth_trie(words);
    for permutation in words.iter().permutations(words.len()) {
        assert_eq!(build_depth_trie(permutation), reference);
    }
}

#[test]
fn every_level_has_a_word_end_only_where_a_word_ends() {
    let trie: DepthIndexedTrie<char> = build_depth_trie(["abc", "de"]);
    let ends: Vec<bool> = trie.levels().iter().map(|level| level.has_word_end()).collect();
    assert_eq!(ends, [false, true, true]);
}
