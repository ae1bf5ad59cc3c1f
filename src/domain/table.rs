// ============================================================
// Layer 3 — Table Domain Type
// ============================================================
// An in-memory CSV: one header row plus any number of rows.
// Every row has exactly as many cells as the header.
//
// Cells stay as the text that was read. A value like
// "0.4500" is written back out as "0.4500", not "0.45".
//
// Reference: Rust Book §8 (Vectors, Strings)

use crate::domain::error::{PrepError, PrepResult};
use crate::domain::labeled_record::{Label, LabeledRecord};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows:    Vec<Vec<String>>,
}

impl Table {
    /// Create an empty table with the given header row
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows:    Vec::new(),
        }
    }

    /// Build the two-column (text, label) table used for quote records.
    pub fn from_records(text_header: &str, label_header: &str, records: &[LabeledRecord]) -> Self {
        let mut table = Self::new([text_header, label_header]);
        for r in records {
            table.rows.push(vec![r.text.clone(), r.label.as_cell().to_string()]);
        }
        table
    }

    /// Append a row. Short rows are padded with empty cells, long rows truncated.
    pub fn push_row(&mut self, mut row: Vec<String>) {
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Like `column_index`, but a missing column is an error.
    pub fn require_column(&self, name: &str) -> PrepResult<usize> {
        self.column_index(name)
            .ok_or_else(|| PrepError::MissingColumn(name.to_string()))
    }

    /// Set every row's `name` cell to `label`.
    /// An existing column is overwritten in place; otherwise it is appended.
    pub fn set_label_column(&mut self, name: &str, label: Label) {
        let idx = match self.column_index(name) {
            Some(i) => i,
            None => {
                self.headers.push(name.to_string());
                self.headers.len() - 1
            }
        };
        let width = self.headers.len();
        for row in &mut self.rows {
            row.resize(width, String::new());
            row[idx] = label.as_cell().to_string();
        }
    }

    /// Keep only the named columns, in the given order.
    pub fn select(&self, columns: &[&str]) -> PrepResult<Table> {
        let indices = columns
            .iter()
            .map(|c| self.require_column(c))
            .collect::<PrepResult<Vec<_>>>()?;

        let rows = self
            .rows
            .iter()
            .map(|row| indices.iter().map(|&i| row[i].clone()).collect())
            .collect();

        Ok(Table {
            headers: columns.iter().map(|c| c.to_string()).collect(),
            rows,
        })
    }

    /// A new table holding the rows at `indices`, in that order.
    pub fn take_rows(&self, indices: &[usize]) -> Table {
        Table {
            headers: self.headers.clone(),
            rows:    indices.iter().map(|&i| self.rows[i].clone()).collect(),
        }
    }

    /// Keep only the rows for which `keep` returns true.
    pub fn retain_rows<F>(&mut self, mut keep: F)
    where
        F: FnMut(&[String]) -> bool,
    {
        self.rows.retain(|row| keep(row.as_slice()));
    }

    /// Set the `name` column to `values`, one per row.
    /// An existing column is overwritten in place; otherwise it is appended.
    pub fn set_column(&mut self, name: &str, values: Vec<String>) {
        let idx = match self.column_index(name) {
            Some(i) => i,
            None => {
                self.headers.push(name.to_string());
                self.headers.len() - 1
            }
        };
        let width = self.headers.len();
        for (row, value) in self.rows.iter_mut().zip(values) {
            row.resize(width, String::new());
            row[idx] = value;
        }
    }

    /// Row-wise concatenation.
    ///
    /// The result's header is the union of all headers in order of first
    /// appearance; cells for columns a table lacks are left empty.
    pub fn concat(tables: Vec<Table>) -> PrepResult<Table> {
        if tables.is_empty() {
            return Err(PrepError::EmptyInput("no tables to concatenate".into()));
        }

        let mut headers: Vec<String> = Vec::new();
        for t in &tables {
            for h in &t.headers {
                if !headers.contains(h) {
                    headers.push(h.clone());
                }
            }
        }

        let mut merged = Table::new(headers.clone());
        for t in tables {
            // Map each output column to the column in `t`, if it has one
            let mapping: Vec<Option<usize>> = headers.iter().map(|h| t.column_index(h)).collect();
            for row in t.rows {
                let out = mapping
                    .iter()
                    .map(|m| m.map(|i| row[i].clone()).unwrap_or_default())
                    .collect();
                merged.rows.push(out);
            }
        }
        Ok(merged)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str], rows: &[&[&str]]) -> Table {
        let mut t = Table::new(headers.iter().copied());
        for r in rows {
            t.push_row(r.iter().map(|s| s.to_string()).collect());
        }
        t
    }

    #[test]
    fn test_set_label_column_appends() {
        let mut t = table(&["Text"], &[&["a"], &["b"]]);
        t.set_label_column("Memorable", Label::Memorable);
        assert_eq!(t.headers(), &["Text", "Memorable"]);
        assert!(t.rows().iter().all(|r| r[1] == "1"));
    }

    #[test]
    fn test_set_label_column_overwrites() {
        let mut t = table(&["Memorable", "Text"], &[&["1", "a"]]);
        t.set_label_column("Memorable", Label::NonMemorable);
        assert_eq!(t.headers(), &["Memorable", "Text"]);
        assert_eq!(t.rows()[0], vec!["0", "a"]);
    }

    #[test]
    fn test_set_column_overwrites_existing() {
        let mut t = table(&["word", "Memorable"], &[&["a", "0"], &["b", "1"]]);
        t.set_column("Memorable", vec!["1".into(), "0".into()]);
        assert_eq!(t.headers(), &["word", "Memorable"]);
        assert_eq!(t.rows()[0], vec!["a", "1"]);
        assert_eq!(t.rows()[1], vec!["b", "0"]);
    }

    #[test]
    fn test_set_column_appends_new() {
        let mut t = table(&["word"], &[&["a"]]);
        t.set_column("Memorable", vec!["1".into()]);
        assert_eq!(t.headers(), &["word", "Memorable"]);
        assert_eq!(t.rows()[0], vec!["a", "1"]);
    }

    #[test]
    fn test_select_reorders_and_checks() {
        let t = table(&["a", "b", "c"], &[&["1", "2", "3"]]);
        let s = t.select(&["c", "a"]).unwrap();
        assert_eq!(s.headers(), &["c", "a"]);
        assert_eq!(s.rows()[0], vec!["3", "1"]);
        assert!(matches!(t.select(&["zzz"]), Err(PrepError::MissingColumn(c)) if c == "zzz"));
    }

    #[test]
    fn test_concat_unions_headers() {
        let a = table(&["x", "y"], &[&["1", "2"]]);
        let b = table(&["y", "z"], &[&["3", "4"], &["5", "6"]]);
        let m = Table::concat(vec![a, b]).unwrap();
        assert_eq!(m.headers(), &["x", "y", "z"]);
        assert_eq!(m.len(), 3);
        assert_eq!(m.rows()[0], vec!["1", "2", ""]);
        assert_eq!(m.rows()[1], vec!["", "3", "4"]);
    }

    #[test]
    fn test_concat_empty_is_error() {
        assert!(matches!(Table::concat(Vec::new()), Err(PrepError::EmptyInput(_))));
    }

    #[test]
    fn test_push_row_pads() {
        let t = table(&["a", "b"], &[&["1"]]);
        assert_eq!(t.rows()[0], vec!["1", ""]);
    }

    #[test]
    fn test_from_records() {
        let recs = vec![LabeledRecord::memorable("hi"), LabeledRecord::non_memorable("bye")];
        let t = Table::from_records("Quote", "Memorable", &recs);
        assert_eq!(t.headers(), &["Quote", "Memorable"]);
        assert_eq!(t.rows()[1], vec!["bye", "0"]);
    }
}
