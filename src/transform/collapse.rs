//! Regrouping of rows into whole texts before splitting

use indexmap::map::Entry;
use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

use crate::error::{Error, Result};
use crate::model::{CellType, CellValue, Column, Table};

/// Collapse multi-row grouped text into one row per group
///
/// Rows are grouped by the full tuple of values of every column except the
/// input column, in order of first appearance; within a group the input
/// texts are concatenated with `\n` in row order. The result carries the
/// group columns in their original order followed by the input column. A
/// table whose only column is the input column collapses to a single row;
/// an empty table collapses to an empty table with the grouped schema.
pub fn collapse_rows(table: &Table, input: &str) -> Result<Table> {
    let text_idx = table
        .column_index(input)
        .ok_or_else(|| Error::invalid_input(format!("no column named `{input}`")))?;

    let group_indices: Vec<usize> = (0..table.column_count())
        .filter(|&i| i != text_idx)
        .collect();

    // First appearance order of each distinct group tuple, with the first
    // row's source line kept as the group's provenance
    let mut groups: IndexMap<Vec<CellValue>, (String, usize), FxBuildHasher> =
        IndexMap::default();

    for row in &table.rows {
        let key: Vec<CellValue> = group_indices
            .iter()
            .map(|&i| row.cells[i].clone())
            .collect();
        let text = row.cells[text_idx].as_text();

        match groups.entry(key) {
            Entry::Occupied(mut entry) => {
                let (joined, _) = entry.get_mut();
                joined.push('\n');
                joined.push_str(&text);
            }
            Entry::Vacant(entry) => {
                entry.insert((text.into_owned(), row.source_line));
            }
        }
    }

    let mut columns: Vec<Column> = group_indices
        .iter()
        .enumerate()
        .map(|(new_idx, &i)| {
            let col = &table.columns[i];
            Column::with_type(col.name.clone(), new_idx, col.inferred_type)
        })
        .collect();
    columns.push(Column::with_type(input, columns.len(), CellType::String));

    let mut out = Table::new(columns);
    for (key, (text, source_line)) in groups {
        let mut cells = key;
        cells.push(CellValue::from(text));
        out.add_row(cells, source_line);
    }

    Ok(out)
}
