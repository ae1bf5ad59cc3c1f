// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything that touches rows, lines, and files.
//
//   CsvLoader / read_text_lossy → raw input
//       │
//       ├── Preprocessor + QuoteParser → quote-pair records
//       ├── merge_labeled              → one stamped table
//       ├── MedianLabeler              → pRecall → Memorable
//       └── Splitter                   → train / val / test
//       │
//       ▼
//   CsvWriter → output CSV
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Reads CSV tables and text files, decoding UTF-8 leniently
pub mod loader;

/// Writes tables as CSV
pub mod writer;

/// Trims lines and drops the blank ones
pub mod preprocessor;

/// Groups lines into 4-line quote-pair records
pub mod quote_parser;

/// Stamps fragments with a constant label and stacks them
pub mod merger;

/// Median-threshold binary labeling
pub mod labeler;

/// Seeded train/validation/test splitting
pub mod splitter;
