// ============================================================
// Layer 4 — Median Recall Labeler
// ============================================================
// Converts the continuous pRecall score of the word-memorability
// study into a binary label:
//
//   1. Drop rows whose pRecall cell is missing ("", "NA", "#N/A", ...)
//      or parses to NaN in any spelling ("NAN", "+nan", ...)
//   2. threshold = median of the remaining values
//   3. Memorable = 1 if pRecall >= threshold, else 0
//
// The threshold is inclusive: a word sitting exactly on the
// median is labeled memorable.
//
// Reference: Rust Book §13 (Iterators), f64::total_cmp

use crate::domain::error::{PrepError, PrepResult};
use crate::domain::labeled_record::Label;
use crate::domain::table::Table;

/// Cell spellings treated as a missing value (the pandas `read_csv` defaults).
pub const MISSING_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

pub fn is_missing(cell: &str) -> bool {
    MISSING_MARKERS.contains(&cell.trim())
}

/// Median of a non-empty slice. For an even count, the mean of the middle pair.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

pub struct MedianLabeler {
    score_column: String,
    label_column: String,
}

impl MedianLabeler {
    pub fn new(score_column: impl Into<String>, label_column: impl Into<String>) -> Self {
        Self {
            score_column: score_column.into(),
            label_column: label_column.into(),
        }
    }

    /// `None` for a missing or NaN score, an error for anything else unparsable.
    fn score(&self, row: usize, cell: &str) -> PrepResult<Option<f64>> {
        if is_missing(cell) {
            return Ok(None);
        }
        let value = cell.trim().parse::<f64>().map_err(|_| PrepError::InvalidNumber {
            column: self.score_column.clone(),
            row,
            value:  cell.to_string(),
        })?;
        Ok((!value.is_nan()).then_some(value))
    }

    /// Drop rows with a missing score and set the label column,
    /// overwriting one the input already has.
    /// Returns the labeled table and the threshold that was used.
    pub fn label(&self, mut table: Table) -> PrepResult<(Table, f64)> {
        let col = table.require_column(&self.score_column)?;

        let before = table.len();
        let parsed = table
            .rows()
            .iter()
            .enumerate()
            .map(|(i, row)| self.score(i, &row[col]))
            .collect::<PrepResult<Vec<Option<f64>>>>()?;

        let mut keep = parsed.iter();
        table.retain_rows(|_| matches!(keep.next(), Some(Some(_))));
        let scores: Vec<f64> = parsed.into_iter().flatten().collect();

        let dropped = before - table.len();
        if dropped > 0 {
            tracing::info!("Dropped {} rows with missing {}", dropped, self.score_column);
        }

        let threshold = median(&scores).ok_or_else(|| {
            PrepError::EmptyInput(format!("no rows with a {} value", self.score_column))
        })?;

        let labels = scores
            .iter()
            .map(|&s| {
                let label = if s >= threshold { Label::Memorable } else { Label::NonMemorable };
                label.as_cell().to_string()
            })
            .collect();
        table.set_column(&self.label_column, labels);

        Ok((table, threshold))
    }
}
