//! Configuration handling for tokenframe

use crate::tokenize::{Format, TokenUnit};

/// Output format for rendered tables
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Csv,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "terminal" => Ok(OutputFormat::Terminal),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

/// Configuration for the tokenize-and-expand transformation
#[derive(Debug, Clone)]
pub struct TransformConfig {
    /// Name of the column holding the text to tokenize
    pub input: String,
    /// Name of the column to hold one token per row
    pub output: String,
    /// How to split the text
    pub unit: TokenUnit,
    /// Input text format; markup formats force the markup-aware splitter
    pub format: Format,
    /// Lower-case tokens after extraction
    pub to_lower: bool,
    /// Remove the input column from the result
    pub drop: bool,
    /// Regroup rows into whole texts before splitting; `None` uses the
    /// unit-dependent default
    pub collapse: Option<bool>,
}

impl TransformConfig {
    /// Create a new config for the given input and output column names
    pub fn new(input: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            unit: TokenUnit::default(),
            format: Format::default(),
            to_lower: true,
            drop: true,
            collapse: None,
        }
    }

    /// Set the token unit
    pub fn with_unit(mut self, unit: TokenUnit) -> Self {
        self.unit = unit;
        self
    }

    /// Set the input format
    pub fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    /// Enable or disable lower-casing of tokens
    pub fn with_to_lower(mut self, to_lower: bool) -> Self {
        self.to_lower = to_lower;
        self
    }

    /// Enable or disable dropping the input column
    pub fn with_drop(mut self, drop: bool) -> Self {
        self.drop = drop;
        self
    }

    /// Force collapse on or off instead of the unit-dependent default
    pub fn with_collapse(mut self, collapse: bool) -> Self {
        self.collapse = Some(collapse);
        self
    }
}
