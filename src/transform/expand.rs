//! Row expansion: one output row per token

use crate::error::{Error, Result};
use crate::model::{CellType, CellValue, Column, Table};
use crate::tokenize::Splitter;

/// Expand each row into one row per token
///
/// The splitter is invoked exactly once over the whole text column and must
/// return one token list per input row; a wrong-length result fails with
/// `TokenizerContractViolation`. Rows whose text yields no tokens produce
/// no output rows. When `output == input` the tokens replace the input
/// column in place; otherwise a new output column is appended. Returns the
/// expanded table and the index of the output column.
pub fn expand_rows(
    table: &Table,
    input: &str,
    output: &str,
    splitter: &dyn Splitter,
) -> Result<(Table, usize)> {
    let text_idx = table
        .column_index(input)
        .ok_or_else(|| Error::invalid_input(format!("no column named `{input}`")))?;

    if input != output && table.column_index(output).is_some() {
        return Err(Error::invalid_input(format!(
            "output column `{output}` already exists"
        )));
    }

    let texts: Vec<std::borrow::Cow<'_, str>> = table
        .rows
        .iter()
        .map(|row| row.cells[text_idx].as_text())
        .collect();
    let text_refs: Vec<&str> = texts.iter().map(|t| t.as_ref()).collect();

    let lists = splitter.split(&text_refs)?;
    if lists.len() != text_refs.len() {
        return Err(Error::TokenizerContractViolation {
            expected: text_refs.len(),
            actual: lists.len(),
        });
    }

    let replace_in_place = input == output;
    let mut columns = table.columns.clone();
    let out_idx = if replace_in_place {
        columns[text_idx].inferred_type = CellType::String;
        text_idx
    } else {
        columns.push(Column::with_type(output, columns.len(), CellType::String));
        columns.len() - 1
    };

    let mut out = Table::new(columns);
    for (row, tokens) in table.rows.iter().zip(lists) {
        for token in tokens {
            let mut cells = row.cells.clone();
            if replace_in_place {
                cells[text_idx] = CellValue::from(token);
            } else {
                cells.push(CellValue::from(token));
            }
            out.add_row(cells, row.source_line);
        }
    }

    Ok((out, out_idx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize::WordSplitter;

    /// Splitter that ignores its input and returns a fixed column
    #[derive(Debug)]
    struct FixedSplitter(Vec<Vec<String>>);

    impl Splitter for FixedSplitter {
        fn split(&self, _texts: &[&str]) -> Result<Vec<Vec<String>>> {
            Ok(self.0.clone())
        }

        fn name(&self) -> &'static str {
            "fixed"
        }
    }

    fn sample() -> Table {
        let columns = vec![Column::new("id", 0), Column::new("text", 1)];
        let mut table = Table::new(columns);
        table.add_row(vec![CellValue::Int(1), CellValue::from("one two")], 2);
        table.add_row(vec![CellValue::Int(2), CellValue::from("three")], 3);
        table
    }

    #[test]
    fn test_expansion_replicates_other_columns() {
        let table = sample();
        let (out, out_idx) = expand_rows(&table, "text", "word", &WordSplitter).unwrap();

        assert_eq!(out.row_count(), 3);
        assert_eq!(out_idx, 2);
        assert_eq!(out.rows[0].cells[0], CellValue::Int(1));
        assert_eq!(out.rows[0].cells[2], CellValue::from("one"));
        assert_eq!(out.rows[1].cells[0], CellValue::Int(1));
        assert_eq!(out.rows[1].cells[2], CellValue::from("two"));
        assert_eq!(out.rows[2].cells[0], CellValue::Int(2));
        assert_eq!(out.rows[2].cells[2], CellValue::from("three"));
    }

    #[test]
    fn test_token_order_within_row_block() {
        let table = sample();
        let splitter = FixedSplitter(vec![
            vec!["b".into(), "a".into()],
            vec!["c".into()],
        ]);
        let (out, out_idx) = expand_rows(&table, "text", "tok", &splitter).unwrap();

        let tokens: Vec<_> = out
            .rows
            .iter()
            .map(|r| r.cells[out_idx].as_text().into_owned())
            .collect();
        assert_eq!(tokens, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_zero_token_row_vanishes() {
        let table = sample();
        let splitter = FixedSplitter(vec![vec![], vec!["x".into()]]);
        let (out, _) = expand_rows(&table, "text", "tok", &splitter).unwrap();

        assert_eq!(out.row_count(), 1);
        assert_eq!(out.rows[0].cells[0], CellValue::Int(2));
    }

    #[test]
    fn test_contract_violation() {
        let table = sample();
        let splitter = FixedSplitter(vec![vec!["only".into()]]);
        let err = expand_rows(&table, "text", "tok", &splitter).unwrap_err();

        assert!(matches!(
            err,
            Error::TokenizerContractViolation {
                expected: 2,
                actual: 1
            }
        ));
    }

    #[test]
    fn test_same_name_replaces_in_place() {
        let table = sample();
        let (out, out_idx) = expand_rows(&table, "text", "text", &WordSplitter).unwrap();

        assert_eq!(out.column_count(), 2);
        assert_eq!(out_idx, 1);
        assert_eq!(out.rows[0].cells[1], CellValue::from("one"));
    }

    #[test]
    fn test_output_name_collision() {
        let table = sample();
        let err = expand_rows(&table, "text", "id", &WordSplitter).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_null_text_yields_no_rows() {
        let columns = vec![Column::new("text", 0)];
        let mut table = Table::new(columns);
        table.add_row(vec![CellValue::Null], 1);

        let (out, _) = expand_rows(&table, "text", "word", &WordSplitter).unwrap();
        assert_eq!(out.row_count(), 0);
    }
}
