//! Unicode word splitter

use unicode_segmentation::UnicodeSegmentation;

use crate::error::Result;

use super::Splitter;

/// Splits text on Unicode word boundaries (UAX #29)
///
/// Punctuation and whitespace segments are not emitted, so consecutive
/// separators never produce empty tokens. Case is preserved.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordSplitter;

impl Splitter for WordSplitter {
    fn split(&self, texts: &[&str]) -> Result<Vec<Vec<String>>> {
        Ok(texts.iter().map(|t| split_words(t)).collect())
    }

    fn name(&self) -> &'static str {
        "words"
    }
}

/// Word segmentation shared by the word, n-gram, and markup splitters
pub(crate) fn split_words(text: &str) -> Vec<String> {
    text.unicode_words().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_words() {
        let splitter = WordSplitter;
        let lists = splitter.split(&["Hello world"]).unwrap();
        assert_eq!(lists, vec![vec!["Hello".to_string(), "world".to_string()]]);
    }

    #[test]
    fn test_punctuation_filtered() {
        assert_eq!(split_words("Hello, world!"), vec!["Hello", "world"]);
    }

    #[test]
    fn test_no_empty_token_between_spaces() {
        assert_eq!(split_words("a  b"), vec!["a", "b"]);
    }

    #[test]
    fn test_preserves_case() {
        assert_eq!(split_words("AB CD"), vec!["AB", "CD"]);
    }

    #[test]
    fn test_one_list_per_input() {
        let splitter = WordSplitter;
        let lists = splitter.split(&["one", "", "two three"]).unwrap();
        assert_eq!(lists.len(), 3);
        assert!(lists[1].is_empty());
        assert_eq!(lists[2].len(), 2);
    }
}
