//! Word n-gram and skip-gram splitters

use crate::error::{Error, Result};

use super::words::split_words;
use super::Splitter;

/// Generates n-grams of consecutive words, joined by a single space
///
/// A text with fewer than `n` words yields no tokens. Word boundaries are
/// computed on the original casing; any lower-casing happens downstream.
#[derive(Debug, Clone)]
pub struct NgramSplitter {
    n: usize,
}

impl NgramSplitter {
    /// Create an n-gram splitter over `n` consecutive words
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(Error::invalid_input("ngrams requires n >= 1"));
        }
        Ok(Self { n })
    }
}

impl Splitter for NgramSplitter {
    fn split(&self, texts: &[&str]) -> Result<Vec<Vec<String>>> {
        Ok(texts
            .iter()
            .map(|t| {
                let words = split_words(t);
                words.windows(self.n).map(|w| w.join(" ")).collect()
            })
            .collect())
    }

    fn name(&self) -> &'static str {
        "ngrams"
    }
}

/// Generates skip-grams: n-word subsequences whose consecutive picks are at
/// most `k` positions apart in the source text
///
/// `k = 0` degenerates to plain n-grams. Output is ordered by start
/// position, then by gap pattern.
#[derive(Debug, Clone)]
pub struct SkipGramSplitter {
    n: usize,
    k: usize,
}

impl SkipGramSplitter {
    /// Create a skip-gram splitter over `n` words with up to `k` skips
    /// between consecutive words
    pub fn new(n: usize, k: usize) -> Result<Self> {
        if n == 0 {
            return Err(Error::invalid_input("skip_ngrams requires n >= 1"));
        }
        Ok(Self { n, k })
    }

    fn grams_for(&self, words: &[String]) -> Vec<String> {
        let mut out = Vec::new();
        for start in 0..words.len() {
            let mut picked = vec![start];
            collect_grams(words, self.n, self.k, &mut picked, &mut out);
        }
        out
    }
}

fn collect_grams(
    words: &[String],
    n: usize,
    k: usize,
    picked: &mut Vec<usize>,
    out: &mut Vec<String>,
) {
    if picked.len() == n {
        let gram: Vec<&str> = picked.iter().map(|&i| words[i].as_str()).collect();
        out.push(gram.join(" "));
        return;
    }
    let last = picked[picked.len() - 1];
    for next in (last + 1)..=(last + 1 + k).min(words.len().saturating_sub(1)) {
        picked.push(next);
        collect_grams(words, n, k, picked, out);
        picked.pop();
    }
}

impl Splitter for SkipGramSplitter {
    fn split(&self, texts: &[&str]) -> Result<Vec<Vec<String>>> {
        Ok(texts
            .iter()
            .map(|t| self.grams_for(&split_words(t)))
            .collect())
    }

    fn name(&self) -> &'static str {
        "skip_ngrams"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ngram_creation() {
        assert!(NgramSplitter::new(2).is_ok());
        assert!(NgramSplitter::new(0).is_err());
    }

    #[test]
    fn test_bigrams() {
        let splitter = NgramSplitter::new(2).unwrap();
        let lists = splitter.split(&["one two three"]).unwrap();
        assert_eq!(lists[0], vec!["one two".to_string(), "two three".into()]);
    }

    #[test]
    fn test_short_text_yields_nothing() {
        let splitter = NgramSplitter::new(3).unwrap();
        let lists = splitter.split(&["only two"]).unwrap();
        assert!(lists[0].is_empty());
    }

    #[test]
    fn test_case_preserved_in_grams() {
        let splitter = NgramSplitter::new(2).unwrap();
        let lists = splitter.split(&["AB CD"]).unwrap();
        assert_eq!(lists[0], vec!["AB CD".to_string()]);
    }

    #[test]
    fn test_skip_grams() {
        let splitter = SkipGramSplitter::new(2, 1).unwrap();
        let lists = splitter.split(&["a b c"]).unwrap();
        // From "a": (a b), (a c); from "b": (b c)
        assert_eq!(
            lists[0],
            vec!["a b".to_string(), "a c".into(), "b c".into()]
        );
    }

    #[test]
    fn test_skip_gram_zero_k_matches_ngrams() {
        let skip = SkipGramSplitter::new(2, 0).unwrap();
        let ngram = NgramSplitter::new(2).unwrap();
        let text = ["one two three four"];
        assert_eq!(skip.split(&text).unwrap(), ngram.split(&text).unwrap());
    }

    #[test]
    fn test_skip_gram_unigrams() {
        let splitter = SkipGramSplitter::new(1, 2).unwrap();
        let lists = splitter.split(&["a b"]).unwrap();
        assert_eq!(lists[0], vec!["a".to_string(), "b".into()]);
    }
}
