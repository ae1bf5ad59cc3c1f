// ============================================================
// Layer 4 — File Loader
// ============================================================
// Reads input files from disk:
//
//   CsvLoader       → a header row + records, as a Table
//   read_text_lossy → a whole text file as one String
//
// Both decode UTF-8 leniently: a malformed byte sequence is
// replaced with U+FFFD instead of failing the whole file.
//
// A missing file is reported as PrepError::MissingInput so the
// caller can tell it apart from any other read failure.
//
// CSV shape follows pandas read_csv:
//   short row        → padded with empty cells
//   long row         → PrepError::RaggedRow
//   repeated header  → renamed "name.1", "name.2", ...
//
// Reference: csv crate documentation (ByteRecord)
//            Rust Book §9 (Error Handling)

use std::{
    collections::{HashMap, HashSet},
    fs::{self, File},
    io,
    path::{Path, PathBuf},
};

use crate::domain::error::{PrepError, PrepResult};
use crate::domain::table::Table;
use crate::domain::traits::TableSource;

/// Loads one CSV file with a header row.
/// Implements the TableSource trait from Layer 3.
pub struct CsvLoader {
    path: PathBuf,
}

impl CsvLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TableSource for CsvLoader {
    fn load(&self) -> PrepResult<Table> {
        let file = File::open(&self.path).map_err(|e| open_error(&self.path, e))?;

        // Records are read as raw bytes and decoded per cell, so a bad
        // byte only damages the cell it sits in.
        let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(file);

        let raw: Vec<String> = reader
            .byte_headers()
            .map_err(|e| parse_error(&self.path, e))?
            .iter()
            .enumerate()
            .map(|(i, h)| {
                let h = String::from_utf8_lossy(h);
                if i == 0 {
                    h.trim_start_matches('\u{feff}').to_string()
                } else {
                    h.into_owned()
                }
            })
            .collect();
        let headers = dedupe_headers(raw);

        if headers.is_empty() {
            return Err(PrepError::EmptyInput(format!(
                "{} has no header row",
                self.path.display()
            )));
        }

        let width = headers.len();
        let mut table = Table::new(headers);
        for record in reader.byte_records() {
            let record = record.map_err(|e| parse_error(&self.path, e))?;
            if record.len() > width {
                return Err(PrepError::RaggedRow {
                    path:     self.path.clone(),
                    line:     record.position().map_or(0, |p| p.line()),
                    expected: width,
                    found:    record.len(),
                });
            }
            table.push_row(
                record
                    .iter()
                    .map(|cell| String::from_utf8_lossy(cell).into_owned())
                    .collect(),
            );
        }

        tracing::debug!(
            "Loaded '{}' ({} rows, {} columns)",
            self.path.display(),
            table.len(),
            table.headers().len()
        );
        Ok(table)
    }
}

/// Rename repeated header names to `name.1`, `name.2`, ... skipping
/// any name already taken, so every column keeps its own data.
pub fn dedupe_headers(headers: Vec<String>) -> Vec<String> {
    let mut taken: HashSet<String> = HashSet::new();
    let mut next: HashMap<String, usize> = HashMap::new();
    let mut out = Vec::with_capacity(headers.len());
    for name in headers {
        let col = if taken.contains(&name) {
            let n = next.entry(name.clone()).or_insert(1);
            loop {
                let candidate = format!("{name}.{n}");
                *n += 1;
                if !taken.contains(&candidate) {
                    break candidate;
                }
            }
        } else {
            name
        };
        taken.insert(col.clone());
        out.push(col);
    }
    out
}

/// Read a whole text file, replacing malformed UTF-8 with U+FFFD.
pub fn read_text_lossy(path: &Path) -> PrepResult<String> {
    let bytes = fs::read(path).map_err(|e| open_error(path, e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn open_error(path: &Path, err: io::Error) -> PrepError {
    if err.kind() == io::ErrorKind::NotFound {
        PrepError::MissingInput { path: path.to_path_buf() }
    } else {
        PrepError::Read { path: path.to_path_buf(), source: err }
    }
}

fn parse_error(path: &Path, err: csv::Error) -> PrepError {
    PrepError::Parse { path: path.to_path_buf(), source: err }
}
