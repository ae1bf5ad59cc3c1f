// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs, enums, and traits that define what the
// data-preparation steps work with:
//
//   Label / LabeledRecord → a (text, 0|1) pair
//   Table                 → an in-memory CSV (header + rows)
//   PrepError             → the one error type every step returns
//   ErrorPolicy           → abort on the first error, or log and continue
//
// Rules for this layer:
//   - NO file I/O (that's Layer 4)
//   - NO CLI types (that's Layer 1)
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// The memorable / non-memorable label and the record that carries it
pub mod labeled_record;

// Header + rows, kept as text cells
pub mod table;

// Typed errors and the error policy
pub mod error;

// Core abstractions (traits) that other layers implement
pub mod traits;
