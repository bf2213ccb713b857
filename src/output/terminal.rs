//! Aligned terminal output

use std::io::Write;

use anyhow::Result;
use tabled::builder::Builder;
use tabled::settings::Style;
use termcolor::{Ansi, Color, ColorChoice, ColorSpec, WriteColor};

use crate::model::Table;

use super::OutputFormatter;

/// Terminal output with an aligned table and a colored header
pub struct TerminalOutput {
    color_choice: ColorChoice,
}

impl TerminalOutput {
    pub fn new() -> Self {
        Self {
            color_choice: ColorChoice::Auto,
        }
    }

    pub fn with_color_choice(color_choice: ColorChoice) -> Self {
        Self { color_choice }
    }

    fn write_header(&self, table: &Table, writer: &mut dyn Write) -> Result<()> {
        let summary = format!(
            "tokenframe: {} rows × {} columns",
            table.row_count(),
            table.column_count()
        );

        if self.color_choice == ColorChoice::Never {
            writeln!(writer, "{}", summary)?;
        } else {
            let mut ansi = Ansi::new(&mut *writer);
            ansi.set_color(ColorSpec::new().set_bold(true).set_fg(Some(Color::Cyan)))?;
            write!(ansi, "{}", summary)?;
            ansi.reset()?;
            writeln!(writer)?;
        }

        for (key, value) in &table.metadata {
            writeln!(writer, "  {} = {}", key, value)?;
        }
        writeln!(writer)?;
        Ok(())
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for TerminalOutput {
    fn render(&self, table: &Table, writer: &mut dyn Write) -> Result<()> {
        self.write_header(table, writer)?;

        if table.row_count() == 0 {
            writeln!(writer, "(no rows)")?;
            return Ok(());
        }

        let mut builder = Builder::default();
        builder.push_record(table.columns.iter().map(|c| c.name.clone()));
        for row in &table.rows {
            builder.push_record(row.cells.iter().map(|c| c.display().into_owned()));
        }

        let mut display = builder.build();
        display.with(Style::sharp());
        writeln!(writer, "{}", display)?;
        Ok(())
    }
}
