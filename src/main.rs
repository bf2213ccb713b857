//! tokenframe - Tokenize text columns of tabular data

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use tokenframe::config::{OutputFormat, TransformConfig};
use tokenframe::output::render_to_stdout;
use tokenframe::parser::ParserFactory;
use tokenframe::tokenize::{Format, TokenUnit};
use tokenframe::transform::unnest_tokens;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliOutputFormat {
    Terminal,
    Csv,
    Json,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(f: CliOutputFormat) -> Self {
        match f {
            CliOutputFormat::Terminal => OutputFormat::Terminal,
            CliOutputFormat::Csv => OutputFormat::Csv,
            CliOutputFormat::Json => OutputFormat::Json,
        }
    }
}

/// Tokenize a text column into one token per row (CSV, JSON)
#[derive(Parser, Debug)]
#[command(name = "tokenframe")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input file to tokenize
    file: PathBuf,

    /// Column holding the text to tokenize
    #[arg(short, long, default_value = "text")]
    column: String,

    /// Name of the token column in the output
    #[arg(short, long, default_value = "word")]
    output_column: String,

    /// Token unit: words, characters, ngrams, skip_ngrams, sentences,
    /// lines, paragraphs, regex
    #[arg(short, long, default_value = "words")]
    unit: String,

    /// N-gram size (required for ngrams and skip_ngrams)
    #[arg(long)]
    n: Option<usize>,

    /// Maximum skip distance (required for skip_ngrams)
    #[arg(long)]
    k: Option<usize>,

    /// Separator pattern (required for the regex unit)
    #[arg(long)]
    pattern: Option<String>,

    /// Input text format: text, man, latex, html, xml
    #[arg(long, default_value = "text")]
    format: String,

    /// Keep the original text column in the output
    #[arg(long)]
    keep_original: bool,

    /// Do not lower-case tokens
    #[arg(long)]
    no_lower: bool,

    /// Join grouped rows into whole texts before splitting
    #[arg(long, conflicts_with = "no_collapse")]
    collapse: bool,

    /// Never join rows before splitting
    #[arg(long)]
    no_collapse: bool,

    /// Attach a metadata entry to the input table (key=value, repeatable)
    #[arg(long = "tag", value_name = "KEY=VALUE")]
    tags: Vec<String>,

    /// Output format
    #[arg(short = 'f', long = "output-format", value_enum, default_value = "terminal")]
    output_format: CliOutputFormat,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let unit = TokenUnit::from_name(
        &cli.unit,
        cli.n,
        cli.k,
        cli.pattern.as_deref(),
    )?;
    let format: Format = cli.format.parse()?;

    let mut config = TransformConfig::new(&cli.column, &cli.output_column)
        .with_unit(unit)
        .with_format(format)
        .with_to_lower(!cli.no_lower)
        .with_drop(!cli.keep_original);
    if cli.collapse {
        config = config.with_collapse(true);
    } else if cli.no_collapse {
        config = config.with_collapse(false);
    }

    let factory = ParserFactory::new();
    let mut table = factory
        .parse(&cli.file)
        .with_context(|| format!("Failed to parse input file: {}", cli.file.display()))?;

    for tag in &cli.tags {
        let (key, value) = tag
            .split_once('=')
            .with_context(|| format!("Invalid tag (expected key=value): {tag}"))?;
        table.set_metadata(key, serde_json::Value::String(value.to_string()));
    }

    let result = unnest_tokens(&table, &config)
        .with_context(|| format!("Failed to tokenize column `{}`", cli.column))?;

    render_to_stdout(&result, cli.output_format.into())?;

    Ok(())
}
