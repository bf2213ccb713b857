//! JSON output format

use std::io::Write;

use anyhow::Result;
use serde_json::{json, Map, Value};

use crate::model::{CellValue, Table};

use super::OutputFormatter;

/// JSON output formatter
///
/// Emits an object with the table's metadata and an array of row objects
/// keyed by column name.
pub struct JsonOutput {
    pretty: bool,
}

impl JsonOutput {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    pub fn compact() -> Self {
        Self { pretty: false }
    }
}

impl Default for JsonOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for JsonOutput {
    fn render(&self, table: &Table, writer: &mut dyn Write) -> Result<()> {
        let rows: Vec<Value> = table
            .rows
            .iter()
            .map(|row| {
                let mut obj = Map::new();
                for (col, cell) in table.columns.iter().zip(&row.cells) {
                    obj.insert(col.name.clone(), cell_to_json(cell));
                }
                Value::Object(obj)
            })
            .collect();

        let metadata: Map<String, Value> = table
            .metadata
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        let doc = json!({
            "metadata": Value::Object(metadata),
            "rows": rows,
        });

        if self.pretty {
            serde_json::to_writer_pretty(&mut *writer, &doc)?;
        } else {
            serde_json::to_writer(&mut *writer, &doc)?;
        }
        writeln!(writer)?;
        Ok(())
    }
}

fn cell_to_json(cell: &CellValue) -> Value {
    match cell {
        CellValue::Null => Value::Null,
        CellValue::Bool(b) => Value::Bool(*b),
        CellValue::Int(i) => json!(i),
        CellValue::Float(f) => {
            // NaN and infinities have no JSON representation
            serde_json::Number::from_f64(*f).map_or(Value::Null, Value::Number)
        }
        CellValue::String(s) => Value::String(s.to_string()),
        CellValue::Date(d) => Value::String(d.to_string()),
        CellValue::DateTime(dt) => Value::String(dt.to_string()),
        CellValue::List(items) => Value::Array(items.iter().map(cell_to_json).collect()),
    }
}
