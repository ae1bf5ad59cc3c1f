// ============================================================
// Layer 3 — Label and LabeledRecord
// ============================================================
// Every step in this crate ends up producing rows shaped like
//   (text, label)
// where label is 1 for "memorable" and 0 for "non-memorable".
//
// On disk the label is always the bare integer, both in CSV
// cells and in the JSON config (e.g. `"label": 1`).
//
// Reference: Rust Book §6 (Enums), serde attributes docs

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::error::PrepError;

/// Binary memorability label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Label {
    NonMemorable,
    Memorable,
}

impl Label {
    /// The CSV cell value for this label ("1" or "0")
    pub fn as_cell(self) -> &'static str {
        match self {
            Label::Memorable    => "1",
            Label::NonMemorable => "0",
        }
    }
}

impl From<Label> for u8 {
    fn from(label: Label) -> Self {
        match label {
            Label::Memorable    => 1,
            Label::NonMemorable => 0,
        }
    }
}

impl TryFrom<u8> for Label {
    type Error = PrepError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Label::Memorable),
            0 => Ok(Label::NonMemorable),
            other => Err(PrepError::InvalidLabel(other.to_string())),
        }
    }
}

impl std::str::FromStr for Label {
    type Err = PrepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Label::Memorable),
            "0" => Ok(Label::NonMemorable),
            other => Err(PrepError::InvalidLabel(other.to_string())),
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_cell())
    }
}

/// A piece of text with its memorability label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledRecord {
    pub text:  String,
    pub label: Label,
}

impl LabeledRecord {
    pub fn new(text: impl Into<String>, label: Label) -> Self {
        Self { text: text.into(), label }
    }

    pub fn memorable(text: impl Into<String>) -> Self {
        Self::new(text, Label::Memorable)
    }

    pub fn non_memorable(text: impl Into<String>) -> Self {
        Self::new(text, Label::NonMemorable)
    }
}
