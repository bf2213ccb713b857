//! Split-on-pattern splitter

use regex::Regex;

use crate::error::Result;

use super::Splitter;

/// Splits text on a regex separator
///
/// The pattern marks token boundaries; tokens are the text between
/// matches. Adjacent matches produce empty tokens, which the
/// post-processing step elides.
#[derive(Debug, Clone)]
pub struct RegexSplitter {
    pattern: Regex,
}

impl RegexSplitter {
    /// Create a splitter for the given separator pattern
    pub fn new(pattern: &str) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }

    /// The separator pattern
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Splitter for RegexSplitter {
    fn split(&self, texts: &[&str]) -> Result<Vec<Vec<String>>> {
        Ok(texts
            .iter()
            .map(|t| self.pattern.split(t).map(str::to_string).collect())
            .collect())
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_on_separator() {
        let splitter = RegexSplitter::new(r",\s*").unwrap();
        let lists = splitter.split(&["a, b,c"]).unwrap();
        assert_eq!(lists[0], vec!["a".to_string(), "b".into(), "c".into()]);
    }

    #[test]
    fn test_adjacent_separators_yield_empty_tokens() {
        let splitter = RegexSplitter::new(",").unwrap();
        let lists = splitter.split(&["a,,b"]).unwrap();
        assert_eq!(lists[0], vec!["a".to_string(), "".into(), "b".into()]);
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(RegexSplitter::new("(unclosed").is_err());
    }
}
