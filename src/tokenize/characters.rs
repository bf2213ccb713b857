//! Per-character splitter

use crate::error::Result;

use super::Splitter;

/// Splits text into one token per alphanumeric character
///
/// Whitespace and punctuation characters are not emitted. Case is
/// preserved.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharacterSplitter;

impl Splitter for CharacterSplitter {
    fn split(&self, texts: &[&str]) -> Result<Vec<Vec<String>>> {
        Ok(texts
            .iter()
            .map(|t| {
                t.chars()
                    .filter(|c| c.is_alphanumeric())
                    .map(|c| c.to_string())
                    .collect()
            })
            .collect())
    }

    fn name(&self) -> &'static str {
        "characters"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_characters() {
        let splitter = CharacterSplitter;
        let lists = splitter.split(&["ab c"]).unwrap();
        assert_eq!(lists, vec![vec!["a".to_string(), "b".into(), "c".into()]]);
    }

    #[test]
    fn test_punctuation_skipped() {
        let splitter = CharacterSplitter;
        let lists = splitter.split(&["a-b!"]).unwrap();
        assert_eq!(lists[0], vec!["a".to_string(), "b".into()]);
    }

    #[test]
    fn test_empty_text() {
        let splitter = CharacterSplitter;
        let lists = splitter.split(&[""]).unwrap();
        assert!(lists[0].is_empty());
    }
}
