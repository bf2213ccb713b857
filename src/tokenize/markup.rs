//! Markup-aware word splitter for man, LaTeX, HTML, and XML input

use regex::Regex;

use crate::error::{Error, Result};

use super::words::split_words;
use super::{Format, Splitter};

/// Strips the markup of a given format, then splits the remaining prose on
/// Unicode word boundaries
///
/// Bound by the resolver whenever the input format is not plain text; only
/// the `words` unit is compatible with it. Unit parameters are ignored.
#[derive(Debug)]
pub struct MarkupSplitter {
    format: Format,
    rules: StripRules,
}

#[derive(Debug)]
enum StripRules {
    Html {
        comment: Regex,
        container: Regex,
        tag: Regex,
    },
    Xml {
        comment: Regex,
        tag: Regex,
    },
    Latex {
        comment: Regex,
        command: Regex,
        residue: Regex,
    },
    Man {
        comment: Regex,
        request: Regex,
        font: Regex,
    },
}

impl MarkupSplitter {
    /// Create a splitter for the given markup format
    pub fn new(format: Format) -> Result<Self> {
        let rules = match format {
            Format::Text => {
                return Err(Error::invalid_input(
                    "markup splitter requires a markup format",
                ))
            }
            Format::Html => StripRules::Html {
                comment: Regex::new(r"(?s)<!--.*?-->")?,
                container: Regex::new(r"(?si)<script\b[^>]*>.*?</script>|<style\b[^>]*>.*?</style>")?,
                tag: Regex::new(r"<[^>]*>")?,
            },
            Format::Xml => StripRules::Xml {
                comment: Regex::new(r"(?s)<!--.*?-->|<!\[CDATA\[|\]\]>|<\?.*?\?>")?,
                tag: Regex::new(r"<[^>]*>")?,
            },
            Format::Latex => StripRules::Latex {
                comment: Regex::new(r"(?m)%.*$")?,
                command: Regex::new(r"\\[a-zA-Z]+\*?(\[[^\]]*\])?")?,
                residue: Regex::new(r"[{}$]|\\[^a-zA-Z]")?,
            },
            Format::Man => StripRules::Man {
                comment: Regex::new(r#"(?m)^[.']\\".*$"#)?,
                request: Regex::new(r"(?m)^[.'][A-Za-z]{1,4}\b")?,
                font: Regex::new(r"\\f(\([A-Za-z]{2}|[A-Z])|\\[&%|]")?,
            },
        };
        Ok(Self { format, rules })
    }

    fn strip(&self, text: &str) -> String {
        match &self.rules {
            StripRules::Html {
                comment,
                container,
                tag,
            } => {
                let text = comment.replace_all(text, " ");
                let text = container.replace_all(&text, " ");
                let text = tag.replace_all(&text, " ");
                decode_entities(&text)
            }
            StripRules::Xml { comment, tag } => {
                let text = comment.replace_all(text, " ");
                let text = tag.replace_all(&text, " ");
                decode_entities(&text)
            }
            StripRules::Latex {
                comment,
                command,
                residue,
            } => {
                let text = comment.replace_all(text, " ");
                let text = command.replace_all(&text, " ");
                residue.replace_all(&text, " ").into_owned()
            }
            StripRules::Man {
                comment,
                request,
                font,
            } => {
                let text = comment.replace_all(text, " ");
                let text = request.replace_all(&text, " ");
                let text = font.replace_all(&text, "");
                text.replace(r"\-", "-")
            }
        }
    }
}

/// Decode the handful of entities that survive tag stripping
fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}

impl Splitter for MarkupSplitter {
    fn split(&self, texts: &[&str]) -> Result<Vec<Vec<String>>> {
        Ok(texts
            .iter()
            .map(|t| split_words(&self.strip(t)))
            .collect())
    }

    fn name(&self) -> &'static str {
        match self.format {
            Format::Man => "man_words",
            Format::Latex => "latex_words",
            Format::Html => "html_words",
            Format::Xml => "xml_words",
            Format::Text => "words",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_tags_stripped() {
        let splitter = MarkupSplitter::new(Format::Html).unwrap();
        let lists = splitter
            .split(&["<p>Hello <b>world</b></p><!-- note -->"])
            .unwrap();
        assert_eq!(lists[0], vec!["Hello".to_string(), "world".into()]);
    }

    #[test]
    fn test_html_script_content_dropped() {
        let splitter = MarkupSplitter::new(Format::Html).unwrap();
        let lists = splitter
            .split(&["<script>var x = 1;</script>visible"])
            .unwrap();
        assert_eq!(lists[0], vec!["visible".to_string()]);
    }

    #[test]
    fn test_html_entities_decoded() {
        let splitter = MarkupSplitter::new(Format::Html).unwrap();
        let lists = splitter.split(&["fish &amp; chips"]).unwrap();
        assert_eq!(
            lists[0],
            vec!["fish".to_string(), "chips".into()]
        );
    }

    #[test]
    fn test_xml() {
        let splitter = MarkupSplitter::new(Format::Xml).unwrap();
        let lists = splitter
            .split(&["<?xml version=\"1.0\"?><a>alpha <b>beta</b></a>"])
            .unwrap();
        assert_eq!(lists[0], vec!["alpha".to_string(), "beta".into()]);
    }

    #[test]
    fn test_latex_commands_stripped() {
        let splitter = MarkupSplitter::new(Format::Latex).unwrap();
        let lists = splitter
            .split(&["\\section{Intro} Some \\textbf{bold} text % comment"])
            .unwrap();
        assert_eq!(
            lists[0],
            vec![
                "Intro".to_string(),
                "Some".into(),
                "bold".into(),
                "text".into()
            ]
        );
    }

    #[test]
    fn test_man_requests_stripped() {
        let splitter = MarkupSplitter::new(Format::Man).unwrap();
        let lists = splitter
            .split(&[".SH NAME\nls \\- list \\fBdirectory\\fR contents"])
            .unwrap();
        assert_eq!(
            lists[0],
            vec![
                "NAME".to_string(),
                "ls".into(),
                "list".into(),
                "directory".into(),
                "contents".into()
            ]
        );
    }

    #[test]
    fn test_text_format_rejected() {
        assert!(MarkupSplitter::new(Format::Text).is_err());
    }
}
