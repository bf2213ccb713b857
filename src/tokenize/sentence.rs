//! Rule-based sentence splitter

use crate::error::Result;

use super::Splitter;

/// Abbreviations whose trailing period does not end a sentence
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "etc", "inc", "ltd", "dept", "vol",
    "no", "fig", "pp", "e.g", "i.e", "cf", "al",
];

/// Splits text into sentences on `.`/`?`/`!` boundaries
///
/// A candidate boundary is accepted when the punctuation is followed by
/// whitespace and an upper-case letter, or ends the text. Periods after
/// common abbreviations are ignored.
#[derive(Debug, Clone, Default)]
pub struct SentenceSplitter;

impl SentenceSplitter {
    /// Create a new sentence splitter
    pub fn new() -> Self {
        SentenceSplitter
    }

    fn split_text(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }

        let chars: Vec<char> = text.chars().collect();
        let mut sentences = Vec::new();
        let mut current = String::new();

        for (i, &c) in chars.iter().enumerate() {
            current.push(c);

            if c != '.' && c != '?' && c != '!' {
                continue;
            }

            let at_boundary = match chars.get(i + 1) {
                None => true,
                Some(next) if next.is_whitespace() => {
                    // Scan past the whitespace run to the next visible char
                    let mut j = i + 2;
                    while j < chars.len() && chars[j].is_whitespace() {
                        j += 1;
                    }
                    j >= chars.len() || chars[j].is_uppercase()
                }
                Some(_) => false,
            };

            if at_boundary && !(c == '.' && ends_with_abbreviation(&current)) {
                let trimmed = current.trim();
                if !trimmed.is_empty() {
                    sentences.push(trimmed.to_string());
                }
                current.clear();
            }
        }

        let trimmed = current.trim();
        if !trimmed.is_empty() {
            sentences.push(trimmed.to_string());
        }

        sentences
    }
}

fn ends_with_abbreviation(text: &str) -> bool {
    let text = text.trim_end_matches('.');
    let last_word = text.split_whitespace().last().unwrap_or("");
    let lower = last_word.to_lowercase();
    ABBREVIATIONS.contains(&lower.as_str())
}

impl Splitter for SentenceSplitter {
    fn split(&self, texts: &[&str]) -> Result<Vec<Vec<String>>> {
        Ok(texts.iter().map(|t| self.split_text(t)).collect())
    }

    fn name(&self) -> &'static str {
        "sentences"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_sentences() {
        let splitter = SentenceSplitter::new();
        let lists = splitter
            .split(&["Hello world. How are you? Fine!"])
            .unwrap();
        assert_eq!(
            lists[0],
            vec![
                "Hello world.".to_string(),
                "How are you?".into(),
                "Fine!".into()
            ]
        );
    }

    #[test]
    fn test_abbreviation_not_a_boundary() {
        let splitter = SentenceSplitter::new();
        let lists = splitter.split(&["Dr. Smith arrived. He sat down."]).unwrap();
        assert_eq!(
            lists[0],
            vec!["Dr. Smith arrived.".to_string(), "He sat down.".into()]
        );
    }

    #[test]
    fn test_lowercase_continuation_not_a_boundary() {
        let splitter = SentenceSplitter::new();
        let lists = splitter.split(&["It cost 3. dollars were short."]).unwrap();
        assert_eq!(lists[0].len(), 1);
    }

    #[test]
    fn test_empty_text() {
        let splitter = SentenceSplitter::new();
        let lists = splitter.split(&[""]).unwrap();
        assert!(lists[0].is_empty());
    }
}
