//! JSON array parser

use std::borrow::Cow;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{bail, Context, Result};
use indexmap::IndexSet;
use serde_json::Value;

use crate::model::{CellValue, Column, Table};

use super::Parser;

/// Parser for JSON array files
pub struct JsonParser;

impl Parser for JsonParser {
    fn parse(&self, path: &Path) -> Result<Table> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open JSON file: {}", path.display()))?;
        let reader = BufReader::new(file);

        let value: Value = serde_json::from_reader(reader).context("Failed to parse JSON file")?;

        // Handle both arrays and single objects
        let array = match value {
            Value::Array(arr) => arr,
            Value::Object(_) => vec![value],
            _ => bail!("JSON must be an array or object"),
        };

        if array.is_empty() {
            bail!("JSON array is empty");
        }

        // Collect all unique keys across all objects to build column list
        let mut column_names: IndexSet<String> = IndexSet::new();
        for item in &array {
            if let Value::Object(obj) = item {
                for key in obj.keys() {
                    column_names.insert(key.clone());
                }
            }
        }

        let columns: Vec<Column> = column_names
            .iter()
            .enumerate()
            .map(|(i, name)| Column::new(name.clone(), i))
            .collect();

        let mut table = Table::new(columns);

        // Convert each object to a row
        for (line_num, item) in array.iter().enumerate() {
            let cells = match item {
                Value::Object(obj) => column_names
                    .iter()
                    .map(|key| json_value_to_cell(obj.get(key)))
                    .collect(),
                _ => {
                    // Non-object item in array: put in first column
                    let mut cells = vec![json_value_to_cell(Some(item))];
                    cells.resize(column_names.len(), CellValue::Null);
                    cells
                }
            };

            table.add_row(cells, line_num + 1);
        }

        Ok(table)
    }

    fn supports_extension(&self, ext: &str) -> bool {
        matches!(ext.to_lowercase().as_str(), "json")
    }
}

fn json_value_to_cell(value: Option<&Value>) -> CellValue {
    match value {
        None | Some(Value::Null) => CellValue::Null,
        Some(Value::Bool(b)) => CellValue::Bool(*b),
        Some(Value::Number(n)) => {
            if let Some(i) = n.as_i64() {
                CellValue::Int(i)
            } else if let Some(f) = n.as_f64() {
                CellValue::Float(f)
            } else {
                CellValue::String(Cow::Owned(n.to_string()))
            }
        }
        Some(Value::String(s)) => CellValue::String(Cow::Owned(s.clone())),
        // Nested values stay nested; the transformation rejects them with
        // a scalar-column error instead of silently flattening
        Some(Value::Array(arr)) => {
            CellValue::List(arr.iter().map(|v| json_value_to_cell(Some(v))).collect())
        }
        Some(Value::Object(obj)) => CellValue::List(
            obj.values()
                .map(|v| json_value_to_cell(Some(v)))
                .collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_scalars() {
        assert_eq!(json_value_to_cell(None), CellValue::Null);
        assert_eq!(
            json_value_to_cell(Some(&Value::Bool(true))),
            CellValue::Bool(true)
        );
        assert_eq!(
            json_value_to_cell(Some(&serde_json::json!(7))),
            CellValue::Int(7)
        );
    }

    #[test]
    fn test_json_array_becomes_list_cell() {
        let value = serde_json::json!(["a", "b"]);
        let cell = json_value_to_cell(Some(&value));
        assert!(!cell.is_scalar());
    }
}
