//! Splitters that turn a column of text into a column of token lists

mod characters;
mod markup;
mod ngram;
mod regex;
mod segment;
mod sentence;
mod words;

use crate::error::{Error, Result};

pub use self::regex::RegexSplitter;
pub use characters::CharacterSplitter;
pub use markup::MarkupSplitter;
pub use ngram::{NgramSplitter, SkipGramSplitter};
pub use segment::{LineSplitter, ParagraphSplitter};
pub use sentence::SentenceSplitter;
pub use words::WordSplitter;

/// Trait for splitters that tokenize a whole text column at once
///
/// A splitter receives the column as an ordered slice of N strings and must
/// return exactly N token lists, where `out[i]` holds the tokens of
/// `texts[i]` in order. Token lists may be empty. The expander checks the
/// length contract; splitters are not trusted to uphold it.
pub trait Splitter: std::fmt::Debug {
    /// Tokenize the given column of texts
    fn split(&self, texts: &[&str]) -> Result<Vec<Vec<String>>>;

    /// Get the name of this splitter (for error messages and debugging)
    fn name(&self) -> &'static str;
}

/// How to split text into tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenUnit {
    Words,
    Characters,
    Ngrams { n: usize },
    SkipNgrams { n: usize, k: usize },
    Sentences,
    Lines,
    Paragraphs,
    Regex { pattern: String },
}

impl TokenUnit {
    /// Build a unit from a name plus its optional parameters
    ///
    /// Unknown names fail with `UnknownTokenUnit`; parameterized units with
    /// a missing parameter fail with `InvalidInput`.
    pub fn from_name(
        name: &str,
        n: Option<usize>,
        k: Option<usize>,
        pattern: Option<&str>,
    ) -> Result<Self> {
        match name {
            "words" => Ok(TokenUnit::Words),
            "characters" => Ok(TokenUnit::Characters),
            "ngrams" => {
                let n = n.ok_or_else(|| Error::invalid_input("unit `ngrams` requires `n`"))?;
                Ok(TokenUnit::Ngrams { n })
            }
            "skip_ngrams" => {
                let n = n.ok_or_else(|| Error::invalid_input("unit `skip_ngrams` requires `n`"))?;
                let k = k.ok_or_else(|| Error::invalid_input("unit `skip_ngrams` requires `k`"))?;
                Ok(TokenUnit::SkipNgrams { n, k })
            }
            "sentences" => Ok(TokenUnit::Sentences),
            "lines" => Ok(TokenUnit::Lines),
            "paragraphs" => Ok(TokenUnit::Paragraphs),
            "regex" => {
                let pattern = pattern
                    .ok_or_else(|| Error::invalid_input("unit `regex` requires `pattern`"))?;
                Ok(TokenUnit::Regex {
                    pattern: pattern.to_string(),
                })
            }
            other => Err(Error::UnknownTokenUnit(other.to_string())),
        }
    }

    /// The unit's name
    pub fn name(&self) -> &'static str {
        match self {
            TokenUnit::Words => "words",
            TokenUnit::Characters => "characters",
            TokenUnit::Ngrams { .. } => "ngrams",
            TokenUnit::SkipNgrams { .. } => "skip_ngrams",
            TokenUnit::Sentences => "sentences",
            TokenUnit::Lines => "lines",
            TokenUnit::Paragraphs => "paragraphs",
            TokenUnit::Regex { .. } => "regex",
        }
    }

    /// Whether rows should be regrouped into whole texts before splitting
    /// when the caller did not say either way
    ///
    /// True for the units whose token boundaries can span what were
    /// originally multiple rows.
    pub fn collapses_by_default(&self) -> bool {
        matches!(
            self,
            TokenUnit::Ngrams { .. }
                | TokenUnit::SkipNgrams { .. }
                | TokenUnit::Sentences
                | TokenUnit::Lines
                | TokenUnit::Paragraphs
                | TokenUnit::Regex { .. }
        )
    }
}

impl Default for TokenUnit {
    fn default() -> Self {
        TokenUnit::Words
    }
}

/// Input text format
///
/// Any format other than `Text` forces the markup-aware word splitter and
/// is only compatible with the `words` unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Text,
    Man,
    Latex,
    Html,
    Xml,
}

impl Format {
    /// The format's name
    pub fn name(&self) -> &'static str {
        match self {
            Format::Text => "text",
            Format::Man => "man",
            Format::Latex => "latex",
            Format::Html => "html",
            Format::Xml => "xml",
        }
    }
}

impl std::str::FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Format::Text),
            "man" => Ok(Format::Man),
            "latex" => Ok(Format::Latex),
            "html" => Ok(Format::Html),
            "xml" => Ok(Format::Xml),
            other => Err(Error::invalid_input(format!("unknown format `{other}`"))),
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Resolve a unit and format to a concrete splitter
///
/// Markup formats bind the markup-aware word splitter and reject every
/// other unit with `UnsupportedCombination`.
pub fn resolve(unit: &TokenUnit, format: Format) -> Result<Box<dyn Splitter>> {
    if format != Format::Text {
        if *unit != TokenUnit::Words {
            return Err(Error::UnsupportedCombination {
                unit: unit.name().to_string(),
                format: format.name().to_string(),
            });
        }
        return Ok(Box::new(MarkupSplitter::new(format)?));
    }

    match unit {
        TokenUnit::Words => Ok(Box::new(WordSplitter)),
        TokenUnit::Characters => Ok(Box::new(CharacterSplitter)),
        TokenUnit::Ngrams { n } => Ok(Box::new(NgramSplitter::new(*n)?)),
        TokenUnit::SkipNgrams { n, k } => Ok(Box::new(SkipGramSplitter::new(*n, *k)?)),
        TokenUnit::Sentences => Ok(Box::new(SentenceSplitter::new())),
        TokenUnit::Lines => Ok(Box::new(LineSplitter)),
        TokenUnit::Paragraphs => Ok(Box::new(ParagraphSplitter::new()?)),
        TokenUnit::Regex { pattern } => Ok(Box::new(RegexSplitter::new(pattern)?)),
    }
}
