// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting concerns that don't belong to any one step:
//
//   config_store.rs — Saves and loads the PipelineConfig as
//                     JSON, so a full run (every path, the
//                     seed, the split ratios, the error
//                     policy) can be described in one file.
//
// Reference: Rust Book §7 (Modules)
//            serde / serde_json documentation

/// PipelineConfig JSON persistence
pub mod config_store;
