// ============================================================
// Layer 4 — Train/Validation/Test Splitter
// ============================================================
// Splits a table into three disjoint partitions in two steps,
// each a seeded shuffle-then-cut:
//
//   all rows ──split(holdout = val+test)──► train | holdout
//   holdout  ──split(test / (val+test))───► val   | test
//
// With the default 0.70 / 0.15 / 0.15 ratios and 100 rows:
//   step 1 → 70 train, 30 holdout
//   step 2 → 15 val,   15 test
//
// Each step builds a fresh StdRng from the same seed, so the
// same input and seed always produce the same partitions.
// Rows are not stratified by label.
//
// Uses Fisher-Yates shuffle via rand::seq::SliceRandom.
//
// Reference: Rust Book §8 (Vectors)
//            rand crate documentation (SeedableRng)

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::domain::error::{PrepError, PrepResult};
use crate::domain::table::Table;

const RATIO_TOLERANCE: f64 = 1e-6;

/// Fractions of the input assigned to each partition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SplitRatios {
    pub train:      f64,
    pub validation: f64,
    pub test:       f64,
}

impl Default for SplitRatios {
    fn default() -> Self {
        Self { train: 0.70, validation: 0.15, test: 0.15 }
    }
}

impl SplitRatios {
    /// Each ratio must lie in (0, 1) and together they must sum to 1.
    pub fn validate(&self) -> PrepResult<()> {
        for (name, r) in [("train", self.train), ("validation", self.validation), ("test", self.test)] {
            if !(r > 0.0 && r < 1.0) {
                return Err(PrepError::InvalidSplit(format!(
                    "{name} ratio must be between 0 and 1, got {r}"
                )));
            }
        }
        let sum = self.train + self.validation + self.test;
        if (sum - 1.0).abs() > RATIO_TOLERANCE {
            return Err(PrepError::InvalidSplit(format!("ratios must sum to 1, got {sum}")));
        }
        Ok(())
    }

    /// Share of all rows held out from training in the first split.
    fn holdout(&self) -> f64 {
        self.validation + self.test
    }

    /// Share of the holdout that goes to test in the second split.
    fn test_within_holdout(&self) -> f64 {
        self.test / self.holdout()
    }
}

/// The three partitions of one table.
#[derive(Debug, Clone)]
pub struct DatasetSplit {
    pub train:      Table,
    pub validation: Table,
    pub test:       Table,
}

/// Seeded shuffle of `items`, then cut into (kept, held_out).
///
/// `held_out` gets `ceil(n * test_fraction)` items, taken from the
/// front of the shuffled order; `kept` gets the rest.
pub fn train_test_split<T>(mut items: Vec<T>, test_fraction: f64, seed: u64) -> (Vec<T>, Vec<T>) {
    let mut rng = StdRng::seed_from_u64(seed);
    items.shuffle(&mut rng);

    let total  = items.len();
    let n_test = held_out_count(total, test_fraction);

    // split_off(n) leaves [0..n] in `items` and returns [n..total]
    let kept = items.split_off(n_test);

    tracing::debug!("Split {} items: {} kept, {} held out", total, kept.len(), items.len());
    (kept, items)
}

/// ceil(n * fraction), ignoring float noise such as 0.3 * 100 = 30.000000000000004.
fn held_out_count(total: usize, fraction: f64) -> usize {
    let exact = total as f64 * fraction;
    let n = (exact - 1e-9).ceil().max(0.0) as usize;
    n.min(total)
}

pub struct Splitter {
    ratios: SplitRatios,
    seed:   u64,
}

impl Splitter {
    pub fn new(ratios: SplitRatios, seed: u64) -> PrepResult<Self> {
        ratios.validate()?;
        Ok(Self { ratios, seed })
    }

    pub fn split(&self, table: &Table) -> PrepResult<DatasetSplit> {
        let indices: Vec<usize> = (0..table.len()).collect();

        let (train_idx, holdout_idx) = train_test_split(indices, self.ratios.holdout(), self.seed);
        let (val_idx, test_idx) =
            train_test_split(holdout_idx, self.ratios.test_within_holdout(), self.seed);

        if train_idx.is_empty() || val_idx.is_empty() || test_idx.is_empty() {
            return Err(PrepError::InvalidSplit(format!(
                "{} rows is too few for a {}/{}/{} split",
                table.len(),
                self.ratios.train,
                self.ratios.validation,
                self.ratios.test
            )));
        }

        Ok(DatasetSplit {
            train:      table.take_rows(&train_idx),
            validation: table.take_rows(&val_idx),
            test:       table.take_rows(&test_idx),
        })
    }
}
