// ============================================================
// Layer 4 — CSV Writer
// ============================================================
// Writes a Table to disk as CSV: header row first, then one
// line per row. Quoting is the csv crate's default (only
// cells containing a comma, quote or newline are quoted).
//
// The parent directory is created first, like `mkdir -p`.
// There is no atomic-rename step: a failed write can leave a
// partial file behind.
//
// Reference: csv crate documentation (Writer)

use std::{fs, path::PathBuf};

use crate::domain::error::{PrepError, PrepResult};
use crate::domain::table::Table;
use crate::domain::traits::TableSink;

pub struct CsvWriter {
    path: PathBuf,
}

impl CsvWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn write_error(&self, source: csv::Error) -> PrepError {
        PrepError::Write { path: self.path.clone(), source }
    }
}

impl TableSink for CsvWriter {
    fn write(&self, table: &Table) -> PrepResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.write_error(e.into()))?;
        }

        let mut writer = csv::Writer::from_path(&self.path).map_err(|e| self.write_error(e))?;

        writer
            .write_record(table.headers())
            .map_err(|e| self.write_error(e))?;
        for row in table.rows() {
            writer.write_record(row).map_err(|e| self.write_error(e))?;
        }
        writer.flush().map_err(|e| self.write_error(e.into()))?;

        tracing::debug!("Wrote {} rows to '{}'", table.len(), self.path.display());
        Ok(())
    }
}
