/// Settings for a [`DepthIndexedTrie`](super::depth::DepthIndexedTrie).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TrieConfig {
    /// Longest word accepted by [`try_insert`](super::depth::DepthIndexedTrie::try_insert).
    ///
    /// `None` means unbounded. Plain `insert` ignores this limit.
    pub max_depth: Option<usize>,
}

impl TrieConfig {
    /// Returns an unbounded configuration.
    pub fn new() -> Self {
        TrieConfig::default()
    }

    /// Limits checked insertion to words of at most `max_depth` units.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// True if a word of `len` units fits within the configured depth.
    pub fn accepts(&self, len: usize) -> bool {
        self.max_depth.map_or(true, |max| len <= max)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_is_unbounded() {
        let config = TrieConfig::default();
        assert_eq!(config.max_depth, None);
        assert!(config.accepts(usize::MAX));
    }

    #[test]
    fn max_depth_is_inclusive() {
        let config = TrieConfig::new().with_max_depth(3);
        assert!(config.accepts(0));
        assert!(config.accepts(3));
        assert!(!config.accepts(4));
    }
}
