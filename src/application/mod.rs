// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// One use case per data-preparation step, plus one that runs
// them all in order:
//
//   MergeUseCase    → stamp labeled fragments and stack them
//   QuotesUseCase   → 4-line quote pairs → labeled CSV
//   WordsUseCase    → pRecall → binary Memorable label
//   SplitUseCase    → 70/15/15 train/validation/test CSVs
//   PipelineUseCase → all four, merge → quotes → words → split
//
// Each use case owns a serialisable config struct whose
// Default holds the relative paths the scripts always used.
// No printing here (that's Layer 1); progress goes to tracing.
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

pub mod merge_use_case;

pub mod quotes_use_case;

pub mod words_use_case;

pub mod split_use_case;

pub mod pipeline_use_case;
