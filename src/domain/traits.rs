// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The application layer reads and writes tables through these
// traits, not through the csv crate directly:
//   - CsvLoader implements TableSource
//   - CsvWriter implements TableSink
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use crate::domain::error::PrepResult;
use crate::domain::table::Table;

// ─── TableSource ──────────────────────────────────────────────────────────────
/// Anything that can produce one table.
pub trait TableSource {
    fn load(&self) -> PrepResult<Table>;
}

// ─── TableSink ────────────────────────────────────────────────────────────────
/// Anything that can store one table.
pub trait TableSink {
    fn write(&self, table: &Table) -> PrepResult<()>;
}
