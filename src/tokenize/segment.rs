//! Line and paragraph splitters

use regex::Regex;

use crate::error::Result;

use super::Splitter;

/// Splits text on newlines
///
/// `\r\n` line endings are tolerated. Blank lines become empty tokens,
/// which the post-processing step elides.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineSplitter;

impl Splitter for LineSplitter {
    fn split(&self, texts: &[&str]) -> Result<Vec<Vec<String>>> {
        Ok(texts
            .iter()
            .map(|t| t.lines().map(str::to_string).collect())
            .collect())
    }

    fn name(&self) -> &'static str {
        "lines"
    }
}

/// Splits text on blank-line separators
///
/// A paragraph break is a newline followed by optional horizontal
/// whitespace and another newline. Paragraphs are trimmed; internal single
/// newlines are kept.
#[derive(Debug, Clone)]
pub struct ParagraphSplitter {
    break_pattern: Regex,
}

impl ParagraphSplitter {
    /// Create a new paragraph splitter
    pub fn new() -> Result<Self> {
        Ok(Self {
            break_pattern: Regex::new(r"\n[ \t]*\n+")?,
        })
    }
}

impl Splitter for ParagraphSplitter {
    fn split(&self, texts: &[&str]) -> Result<Vec<Vec<String>>> {
        Ok(texts
            .iter()
            .map(|t| {
                self.break_pattern
                    .split(t)
                    .map(|p| p.trim().to_string())
                    .filter(|p| !p.is_empty())
                    .collect()
            })
            .collect())
    }

    fn name(&self) -> &'static str {
        "paragraphs"
    }
}
