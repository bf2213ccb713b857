//! The tokenize-and-expand transformation

mod collapse;
mod expand;
mod finalize;

use crate::config::TransformConfig;
use crate::error::{Error, Result};
use crate::model::Table;
use crate::tokenize::{self, Splitter};

pub use collapse::collapse_rows;
pub use expand::expand_rows;

/// Convert a table holding one text string per row into a table holding one
/// token per row, replicating all other column values across the new rows
///
/// Resolves the splitter from the configured unit and format, optionally
/// collapses grouped rows into whole texts first (by default only for units
/// whose boundaries can span rows), expands each row into one row per
/// token, then applies the post-processing steps. The input table is never
/// mutated; its metadata is carried onto the result.
///
/// Rows whose text yields no tokens contribute no output rows, and tokens
/// that are empty after lower-casing are removed; a text with nothing to
/// say simply leaves no trace in the output.
pub fn unnest_tokens(table: &Table, config: &TransformConfig) -> Result<Table> {
    validate(table)?;
    let splitter = tokenize::resolve(&config.unit, config.format)?;
    let collapse = config
        .collapse
        .unwrap_or_else(|| config.unit.collapses_by_default());
    run(table, splitter.as_ref(), collapse, config)
}

/// Like [`unnest_tokens`], but with a caller-supplied splitter
///
/// The splitter must uphold the one-token-list-per-input-row contract; a
/// wrong-length result fails with `TokenizerContractViolation`. Collapse
/// defaults to false for custom splitters.
pub fn unnest_with_splitter(
    table: &Table,
    splitter: &dyn Splitter,
    config: &TransformConfig,
) -> Result<Table> {
    validate(table)?;
    let collapse = config.collapse.unwrap_or(false);
    run(table, splitter, collapse, config)
}

fn run(
    table: &Table,
    splitter: &dyn Splitter,
    collapse: bool,
    config: &TransformConfig,
) -> Result<Table> {
    let collapsed;
    let working: &Table = if collapse {
        collapsed = collapse_rows(table, &config.input)?;
        &collapsed
    } else {
        table
    };

    let (expanded, out_idx) =
        expand_rows(working, &config.input, &config.output, splitter)?;
    finalize::finalize(expanded, out_idx, table, config)
}

/// Fail fast on tables the transformation cannot process: ragged rows or
/// nested (list-valued) cells
fn validate(table: &Table) -> Result<()> {
    let width = table.column_count();
    for row in &table.rows {
        if row.cells.len() != width {
            return Err(Error::invalid_input(format!(
                "row from line {} has {} cells, expected {}",
                row.source_line,
                row.cells.len(),
                width
            )));
        }
        for (i, cell) in row.cells.iter().enumerate() {
            if !cell.is_scalar() {
                let name = table
                    .columns
                    .get(i)
                    .map(|c| c.name.as_str())
                    .unwrap_or("?");
                return Err(Error::invalid_input(format!(
                    "column `{name}` holds non-scalar values"
                )));
            }
        }
    }
    Ok(())
}
