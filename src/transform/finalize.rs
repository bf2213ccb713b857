//! Post-processing of the expanded table

use std::borrow::Cow;

use crate::config::TransformConfig;
use crate::error::Result;
use crate::model::{CellValue, Table};

/// Finalize the expanded table
///
/// Lower-cases the output column when requested, removes rows whose output
/// value is the empty string (after lower-casing), drops the input column
/// when `drop` is set and the input and output names differ, and reattaches
/// the source table's metadata.
pub fn finalize(
    mut table: Table,
    out_idx: usize,
    source: &Table,
    config: &TransformConfig,
) -> Result<Table> {
    if config.to_lower {
        for row in &mut table.rows {
            if let CellValue::String(s) = &mut row.cells[out_idx] {
                *s = Cow::Owned(s.to_lowercase());
            }
        }
    }

    table
        .rows
        .retain(|row| !matches!(&row.cells[out_idx], CellValue::String(s) if s.is_empty()));

    if config.drop && config.input != config.output {
        if let Some(input_idx) = table.column_index(&config.input) {
            table.remove_column(input_idx);
        }
    }

    table.metadata = source.metadata.clone();

    Ok(table)
}
