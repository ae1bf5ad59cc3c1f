// ============================================================
// Layer 4 — Quote-Pair Parser
// ============================================================
// The movie-quote file lists pairs as fixed-stride records of
// four non-blank lines:
//
//   line 0: index line              (ignored)
//   line 1: the memorable quote     → (quote, 1)
//   line 2: index line              (ignored)
//   line 3: "<n> non-memorable quote" → (quote without <n>, 0)
//
// Example block:
//   12
//   Here's looking at you, kid.
//   12
//   12 I'm looking at you.
//
// produces ("Here's looking at you, kid.", 1) and
//          ("I'm looking at you.", 0).
//
// A trailing partial block (line count not a multiple of 4) is
// handed to the ErrorPolicy: dropped with a warning, or rejected.
//
// Reference: Rust Book §8 (Slices), slice::chunks_exact

use crate::domain::error::{ErrorPolicy, PrepError, PrepResult};
use crate::domain::labeled_record::LabeledRecord;

/// Number of non-blank lines per quote-pair block.
pub const BLOCK_STRIDE: usize = 4;

pub struct QuoteParser {
    policy: ErrorPolicy,
}

impl QuoteParser {
    pub fn new(policy: ErrorPolicy) -> Self {
        Self { policy }
    }

    /// Parse cleaned, non-blank lines into labeled records.
    /// Each block yields its memorable record followed by its non-memorable one.
    pub fn parse(&self, lines: &[String]) -> PrepResult<Vec<LabeledRecord>> {
        let blocks   = lines.chunks_exact(BLOCK_STRIDE);
        let leftover = blocks.remainder().len();

        if leftover != 0 {
            self.policy.handle(PrepError::MalformedRecord {
                line_count: lines.len(),
                stride:     BLOCK_STRIDE,
                leftover,
            })?;
        }

        let mut records = Vec::with_capacity(lines.len() / BLOCK_STRIDE * 2);
        for block in blocks {
            records.push(LabeledRecord::memorable(block[1].clone()));
            records.push(LabeledRecord::non_memorable(strip_leading_token(&block[3])));
        }
        Ok(records)
    }
}

/// Drop the first whitespace-separated token and re-join the rest with single spaces.
pub fn strip_leading_token(line: &str) -> String {
    line.split_whitespace().skip(1).collect::<Vec<_>>().join(" ")
}
