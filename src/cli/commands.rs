// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// One subcommand per data-preparation step, plus `pipeline`
// (all four from a JSON config) and `init-config`.
//
// Path flags are optional: a flag left out keeps the path the
// step has always used (see each use case's Default config).
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::application::{
    merge_use_case::{LabeledSource, MergeConfig},
    quotes_use_case::QuotesConfig,
    split_use_case::SplitConfig,
    words_use_case::WordsConfig,
};
use crate::data::splitter::SplitRatios;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Merge labeled CSV fragments into one dataset
    Merge(MergeArgs),

    /// Convert the 4-line quote-pair text file into a labeled CSV
    Quotes(QuotesArgs),

    /// Label words as memorable by thresholding pRecall at its median
    Words(WordsArgs),

    /// Split a labeled CSV into train / validation / test CSVs
    Split(SplitArgs),

    /// Run merge, quotes, words and split in order
    Pipeline(PipelineArgs),

    /// Write the default pipeline config as JSON
    InitConfig(InitConfigArgs),
}

// ─── merge ────────────────────────────────────────────────────────────────────
#[derive(Args, Debug)]
pub struct MergeArgs {
    /// Input fragment and its label, as PATH=LABEL (label 0 or 1).
    /// Repeat for each fragment. Defaults to the five generated datasets.
    #[arg(long = "source", value_name = "PATH=LABEL", value_parser = parse_source)]
    pub sources: Vec<LabeledSource>,

    /// Where to write the merged CSV
    #[arg(long)]
    pub output: Option<PathBuf>,
}

impl From<MergeArgs> for MergeConfig {
    fn from(a: MergeArgs) -> Self {
        let mut cfg = MergeConfig::default();
        if !a.sources.is_empty() {
            cfg.sources = a.sources;
        }
        if let Some(output) = a.output {
            cfg.output = output;
        }
        cfg
    }
}

/// Parse "some/file.csv=1" into a LabeledSource.
/// Splits on the last '=' so paths may contain '='.
fn parse_source(s: &str) -> Result<LabeledSource, String> {
    let (path, label) = s
        .rsplit_once('=')
        .ok_or_else(|| format!("expected PATH=LABEL, got '{s}'"))?;
    if path.is_empty() {
        return Err(format!("missing path in '{s}'"));
    }
    let label = label.parse().map_err(|e| format!("{e}"))?;
    Ok(LabeledSource::new(path, label))
}

// ─── quotes ───────────────────────────────────────────────────────────────────
#[derive(Args, Debug)]
pub struct QuotesArgs {
    /// Quote-pair text file (4 non-blank lines per pair)
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Where to write the Quote,Memorable CSV
    #[arg(long)]
    pub output: Option<PathBuf>,
}

impl From<QuotesArgs> for QuotesConfig {
    fn from(a: QuotesArgs) -> Self {
        let d = QuotesConfig::default();
        QuotesConfig {
            input:  a.input.unwrap_or(d.input),
            output: a.output.unwrap_or(d.output),
            ..QuotesConfig::default()
        }
    }
}

// ─── words ────────────────────────────────────────────────────────────────────
#[derive(Args, Debug)]
pub struct WordsArgs {
    /// Word-memorability CSV with a pRecall column
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Where to write the processed CSV
    #[arg(long)]
    pub output: Option<PathBuf>,
}

impl From<WordsArgs> for WordsConfig {
    fn from(a: WordsArgs) -> Self {
        let d = WordsConfig::default();
        WordsConfig {
            input:  a.input.unwrap_or(d.input),
            output: a.output.unwrap_or(d.output),
            ..WordsConfig::default()
        }
    }
}

// ─── split ────────────────────────────────────────────────────────────────────
#[derive(Args, Debug)]
pub struct SplitArgs {
    /// Labeled CSV to split
    #[arg(long)]
    pub input: Option<PathBuf>,

    #[arg(long)]
    pub train_output: Option<PathBuf>,

    #[arg(long)]
    pub val_output: Option<PathBuf>,

    #[arg(long)]
    pub test_output: Option<PathBuf>,

    /// Seed for both shuffles; the same seed always gives the same split
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    #[arg(long, default_value_t = 0.70)]
    pub train_ratio: f64,

    #[arg(long, default_value_t = 0.15)]
    pub val_ratio: f64,

    #[arg(long, default_value_t = 0.15)]
    pub test_ratio: f64,
}

impl From<SplitArgs> for SplitConfig {
    fn from(a: SplitArgs) -> Self {
        let d = SplitConfig::default();
        SplitConfig {
            input:             a.input.unwrap_or(d.input),
            train_output:      a.train_output.unwrap_or(d.train_output),
            validation_output: a.val_output.unwrap_or(d.validation_output),
            test_output:       a.test_output.unwrap_or(d.test_output),
            seed:              a.seed,
            ratios: SplitRatios {
                train:      a.train_ratio,
                validation: a.val_ratio,
                test:       a.test_ratio,
            },
            label_column: d.label_column,
        }
    }
}

// ─── pipeline / init-config ───────────────────────────────────────────────────
#[derive(Args, Debug)]
pub struct PipelineArgs {
    /// JSON config file; defaults are used when omitted
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct InitConfigArgs {
    /// Where to write the config
    #[arg(long, default_value = "pipeline.json")]
    pub output: PathBuf,

    /// Overwrite the file if it already exists
    #[arg(long)]
    pub force: bool,
}
