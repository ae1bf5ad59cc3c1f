// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses the command line with clap and hands each subcommand
// to its use case in Layer 2. Results are printed here; the
// use cases themselves only log.
//
//   merge | quotes | words | split → one step
//   pipeline                       → all four, from a JSON config
//   init-config                    → write the default JSON config
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::{bail, Context, Result};
use clap::Parser;
use commands::{Commands, InitConfigArgs, PipelineArgs};

use crate::application::{
    merge_use_case::MergeUseCase,
    pipeline_use_case::{PipelineConfig, PipelineUseCase},
    quotes_use_case::QuotesUseCase,
    split_use_case::SplitUseCase,
    words_use_case::WordsUseCase,
};
use crate::domain::error::ErrorPolicy;
use crate::infra::config_store::ConfigStore;

#[derive(Parser, Debug)]
#[command(
    name = "memorability-prep",
    version,
    about = "Prepare text-memorability datasets: merge, convert, label and split CSVs."
)]
pub struct Cli {
    /// Stop at the first file-level error instead of logging it and continuing
    #[arg(long, global = true)]
    pub fail_fast: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    fn policy(&self) -> ErrorPolicy {
        if self.fail_fast {
            ErrorPolicy::AbortOnFirst
        } else {
            ErrorPolicy::CollectAndContinue
        }
    }

    pub fn run(self) -> Result<()> {
        let policy = self.policy();
        match self.command {
            Commands::Merge(args) => {
                let report = MergeUseCase::new(args.into(), policy)
                    .execute()
                    .context("merge failed")?;
                println!(
                    "Merged {} rows from {} sources ({} skipped).",
                    report.rows,
                    report.loaded,
                    report.skipped.len()
                );
                if !report.written {
                    println!("Merged dataset was not written.");
                }
            }
            Commands::Quotes(args) => {
                let report = QuotesUseCase::new(args.into(), policy)
                    .execute()
                    .context("quote conversion failed")?;
                if report.written {
                    println!("Wrote {} quote records.", report.records);
                } else {
                    println!("No quote records written.");
                }
            }
            Commands::Words(args) => {
                let report = WordsUseCase::new(args.into())
                    .execute()
                    .context("word labeling failed")?;
                println!("Labeled {} words (median pRecall {}).", report.rows, report.threshold);
            }
            Commands::Split(args) => {
                let report = SplitUseCase::new(args.into())
                    .execute()
                    .context("dataset split failed")?;
                println!(
                    "Datasets saved: {} train, {} validation, {} test.",
                    report.train, report.validation, report.test
                );
            }
            Commands::Pipeline(args) => run_pipeline(args, self.fail_fast)?,
            Commands::InitConfig(args) => init_config(args)?,
        }
        Ok(())
    }
}

/// Load the config (or take defaults), apply --fail-fast, run every step.
fn run_pipeline(args: PipelineArgs, fail_fast: bool) -> Result<()> {
    let mut cfg = match &args.config {
        Some(path) => ConfigStore::new(path)
            .load()
            .with_context(|| format!("cannot load pipeline config '{}'", path.display()))?,
        None => PipelineConfig::default(),
    };
    if fail_fast {
        cfg.error_policy = ErrorPolicy::AbortOnFirst;
    }

    let report = PipelineUseCase::new(cfg).execute().context("pipeline failed")?;
    if !report.is_success() {
        let names: Vec<&str> = report.failed.iter().map(|(name, _)| *name).collect();
        bail!("pipeline finished with failed steps: {}", names.join(", "));
    }
    println!("Pipeline complete: {}.", report.completed.join(", "));
    Ok(())
}

fn init_config(args: InitConfigArgs) -> Result<()> {
    if args.output.exists() && !args.force {
        bail!("'{}' already exists (use --force to overwrite)", args.output.display());
    }
    ConfigStore::new(&args.output).save(&PipelineConfig::default())?;
    println!("Wrote default config to '{}'.", args.output.display());
    Ok(())
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_merge_sources_and_global_flag() {
        let cli = Cli::try_parse_from([
            "memorability-prep",
            "merge",
            "--source",
            "a.csv=1",
            "--source",
            "b.csv=0",
            "--fail-fast",
        ])
        .unwrap();
        assert_eq!(cli.policy(), ErrorPolicy::AbortOnFirst);
        match cli.command {
            Commands::Merge(args) => assert_eq!(args.sources.len(), 2),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_split_defaults() {
        let cli = Cli::try_parse_from(["memorability-prep", "split"]).unwrap();
        assert_eq!(cli.policy(), ErrorPolicy::CollectAndContinue);
        match cli.command {
            Commands::Split(args) => {
                assert_eq!(args.seed, 42);
                assert_eq!(args.train_ratio, 0.70);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_init_config_refuses_to_overwrite() {
        let dir  = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("pipeline.json");
        std::fs::write(&path, "{}").unwrap();

        let err = init_config(InitConfigArgs { output: path.clone(), force: false }).unwrap_err();
        assert!(err.to_string().contains("already exists"));

        init_config(InitConfigArgs { output: path.clone(), force: true }).unwrap();
        assert!(ConfigStore::new(&path).load().is_ok());
    }
}
