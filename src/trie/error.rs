use thiserror::Error;

/// Errors returned by the checked insertion methods.
///
/// Plain [`insert`](super::depth::DepthIndexedTrie::insert) accepts every word
/// and never fails.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TrieError {
    /// The word is longer than the configured maximum depth.
    #[error("word of {len} units exceeds maximum depth {max_depth}")]
    WordTooLong {
        /// Length of the rejected word.
        len: usize,
        /// Configured maximum depth.
        max_depth: usize,
    },

    /// The input could not be decoded into text units.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl From<std::str::Utf8Error> for TrieError {
    fn from(err: std::str::Utf8Error) -> Self {
        TrieError::InvalidInput(err.to_string())
    }
}

/// Result type for checked trie operations.
pub type Result<T> = std::result::Result<T, TrieError>;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display() {
        let err = TrieError::WordTooLong {
            len: 7,
            max_depth: 5,
        };
        assert_eq!(err.to_string(), "word of 7 units exceeds maximum depth 5");
    }

    #[test]
    fn from_utf8_error() {
        let bytes = [0x66, 0xff];
        let err: TrieError = std::str::from_utf8(&bytes).unwrap_err().into();
        assert!(matches!(err, TrieError::InvalidInput(_)));
        assert!(err.to_string().starts_with("invalid input: "));
    }
}
