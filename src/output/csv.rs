//! CSV output format

use std::io::Write;

use anyhow::Result;

use crate::model::{CellValue, Table};

use super::OutputFormatter;

/// CSV output formatter
///
/// Nulls are written as empty fields; everything else uses its display
/// form.
pub struct CsvOutput;

impl OutputFormatter for CsvOutput {
    fn render(&self, table: &Table, writer: &mut dyn Write) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        let headers: Vec<&str> = table.columns.iter().map(|c| c.name.as_str()).collect();
        csv_writer.write_record(&headers)?;

        for row in &table.rows {
            let fields: Vec<String> = row.cells.iter().map(csv_field).collect();
            csv_writer.write_record(&fields)?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}

fn csv_field(cell: &CellValue) -> String {
    match cell {
        CellValue::Null => String::new(),
        other => other.display().into_owned(),
    }
}
