use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, error::ErrorKind};

use crate::config::SplitConfig;
use crate::constants::splits::ALL_SPLITS;
use crate::corpus::{CorpusReader, FileSentences};
use crate::errors::SplitError;
use crate::report::{SplitSummary, split_summary};
use crate::splits::{SplitLabel, SplitRatios, partition};
use crate::writer::{output_file_size, write_sentences};

#[derive(Debug, Parser)]
#[command(
    name = "split_corpus",
    disable_help_subcommand = true,
    about = "Split CoNLL-U corpus files into train/dev/test partitions",
    long_about = "Read every CoNLL-U file directly under the input directory, shuffle the aggregated sentences with a fixed-seed generator, and write one file per partition.",
    after_help = "Defaults reproduce the batch layout: scan raw/diachron, write diachron-ud-{train,dev,test}.conllu into the current directory with seed 42 and 0.8,0.1,0.1 ratios."
)]
struct SplitCorpusCli {
    #[arg(
        long = "input-dir",
        value_name = "DIR",
        help = "Directory scanned for corpus files"
    )]
    input_dir: Option<PathBuf>,
    #[arg(
        long = "output-dir",
        value_name = "DIR",
        help = "Directory that receives the partition files"
    )]
    output_dir: Option<PathBuf>,
    #[arg(
        long,
        value_name = "EXT",
        help = "Extension (without dot) that marks corpus files"
    )]
    extension: Option<String>,
    #[arg(long, help = "Optional deterministic seed override")]
    seed: Option<u64>,
    #[arg(
        long = "split-ratios",
        value_name = "TRAIN,DEV,TEST",
        value_parser = parse_split_ratios_arg,
        help = "Comma-separated split ratios that must sum to 1.0"
    )]
    ratios: Option<SplitRatios>,
    #[arg(
        long = "summary-json",
        help = "Emit the run summary as JSON instead of the text report"
    )]
    summary_json: bool,
}

/// Everything a completed run produced, for reporting and tests.
#[derive(Clone, Debug)]
pub struct SplitOutcome {
    /// Per-file sentence counts in discovery order.
    pub files: Vec<FileSentences>,
    /// Aggregate sizing summary.
    pub summary: SplitSummary,
    /// Output path and bytes written per split, in canonical order.
    pub outputs: Vec<(SplitLabel, PathBuf, u64)>,
}

/// Run the full read → shuffle → slice → write pipeline for `config`.
///
/// This is the testable core behind the CLI: every knob arrives through
/// [`SplitConfig`] and all results come back in the [`SplitOutcome`].
/// Nothing is written when reading or validation fails.
pub fn run_split_pipeline(config: &SplitConfig) -> Result<SplitOutcome, SplitError> {
    let ratios = config.ratios.normalized()?;
    let corpus = CorpusReader::new(&config.input_dir)
        .with_extension(&config.extension)
        .read()?;
    let files = corpus.files.clone();
    let summary = split_summary(files.len(), corpus.len(), ratios).ok_or_else(|| {
        SplitError::EmptyCorpus {
            dir: config.input_dir.clone(),
        }
    })?;

    let partitions = partition(corpus.sentences, ratios, config.seed)?;
    let mut outputs = Vec::with_capacity(ALL_SPLITS.len());
    for label in ALL_SPLITS {
        let path = config.output_path(label);
        let bytes = write_sentences(partitions.get(label), &path)?;
        outputs.push((label, path, bytes));
    }

    Ok(SplitOutcome {
        files,
        summary,
        outputs,
    })
}

/// Run the splitter CLI over `args_iter` (program name excluded).
///
/// Terminal-but-expected conditions (no matching input files, an input
/// directory with only empty files) are reported on stderr and end the
/// run without writing anything; real failures propagate as errors.
pub fn run_split_corpus<I>(args_iter: I) -> Result<(), Box<dyn Error>>
where
    I: Iterator<Item = String>,
{
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let Some(cli) = parse_cli::<SplitCorpusCli, _>(
        std::iter::once("split_corpus".to_string()).chain(args_iter),
    )?
    else {
        return Ok(());
    };

    let mut config = SplitConfig::default();
    if let Some(input_dir) = cli.input_dir {
        config.input_dir = input_dir;
    }
    if let Some(output_dir) = cli.output_dir {
        config.output_dir = output_dir;
    }
    if let Some(extension) = cli.extension {
        config.extension = extension;
    }
    config.seed = cli.seed.unwrap_or(config.seed);
    config.ratios = cli.ratios.unwrap_or(config.ratios);

    match run_split_pipeline(&config) {
        Ok(outcome) => {
            if cli.summary_json {
                println!("{}", serde_json::to_string_pretty(&outcome.summary)?);
            } else {
                print_outcome(&config, &outcome);
            }
            Ok(())
        }
        Err(err @ (SplitError::NoInputFiles { .. } | SplitError::EmptyCorpus { .. })) => {
            eprintln!("{err}. Nothing was written.");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

fn print_outcome(config: &SplitConfig, outcome: &SplitOutcome) {
    println!("=== corpus split ===");
    println!("input dir : {}", config.input_dir.display());
    println!("output dir: {}", config.output_dir.display());
    println!("seed      : {}", config.seed);
    println!();

    println!("[INPUT FILES]");
    for file in &outcome.files {
        println!("  {} => {} sentences", file.path.display(), file.sentences);
    }
    println!();

    let summary = &outcome.summary;
    println!("[SPLIT SIZES]");
    println!(
        "  total: {} sentences from {} files",
        summary.total, summary.files
    );
    println!(
        "  train: {} sentences ({:.1}%)",
        summary.train,
        summary.train_share * 100.0
    );
    println!(
        "  dev  : {} sentences ({:.1}%)",
        summary.dev,
        summary.dev_share * 100.0
    );
    println!(
        "  test : {} sentences ({:.1}%)",
        summary.test,
        summary.test_share * 100.0
    );
    println!();

    println!("[OUTPUT FILES]");
    for (_, path, _) in &outcome.outputs {
        match output_file_size(path) {
            Some(size) => println!("  ✓ {}: {} bytes", path.display(), size),
            None => println!("  ✗ {}: file not created", path.display()),
        }
    }
}

fn parse_cli<T, I>(args: I) -> Result<Option<T>, Box<dyn Error>>
where
    T: Parser,
    I: IntoIterator,
    I::Item: Into<std::ffi::OsString> + Clone,
{
    match T::try_parse_from(args) {
        Ok(cli) => Ok(Some(cli)),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                err.print()?;
                Ok(None)
            }
            _ => Err(err.into()),
        },
    }
}

fn parse_split_ratios_arg(raw: &str) -> Result<SplitRatios, String> {
    let parts: Vec<&str> = raw.split(',').collect();
    if parts.len() != 3 {
        return Err("--split-ratios expects exactly 3 comma-separated values".to_string());
    }
    let train = parts[0]
        .trim()
        .parse::<f32>()
        .map_err(|_| format!("invalid train ratio '{}': must be a float", parts[0].trim()))?;
    let dev = parts[1]
        .trim()
        .parse::<f32>()
        .map_err(|_| format!("invalid dev ratio '{}': must be a float", parts[1].trim()))?;
    let test = parts[2]
        .trim()
        .parse::<f32>()
        .map_err(|_| format!("invalid test ratio '{}': must be a float", parts[2].trim()))?;
    SplitRatios { train, dev, test }
        .normalized()
        .map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_arg_accepts_valid_triples() {
        let ratios = parse_split_ratios_arg("0.7, 0.2, 0.1").unwrap();
        assert!((ratios.train - 0.7).abs() < 1e-6);
        assert!((ratios.dev - 0.2).abs() < 1e-6);
        assert!((ratios.test - 0.1).abs() < 1e-6);
    }

    #[test]
    fn ratio_arg_rejects_wrong_arity_and_bad_floats() {
        assert!(parse_split_ratios_arg("0.8,0.2").is_err());
        assert!(parse_split_ratios_arg("0.8,0.1,abc").is_err());
    }

    #[test]
    fn ratio_arg_rejects_non_unit_sums() {
        let err = parse_split_ratios_arg("0.8,0.1,0.2").unwrap_err();
        assert!(err.contains("sum to 1.0"));
    }

    #[test]
    fn cli_overrides_merge_into_defaults() {
        let cli = SplitCorpusCli::try_parse_from([
            "split_corpus",
            "--input-dir",
            "corpora/uk",
            "--seed",
            "7",
            "--split-ratios",
            "0.5,0.25,0.25",
        ])
        .unwrap();
        assert_eq!(cli.input_dir, Some(PathBuf::from("corpora/uk")));
        assert_eq!(cli.output_dir, None);
        assert_eq!(cli.seed, Some(7));
        let ratios = cli.ratios.unwrap();
        assert!((ratios.train - 0.5).abs() < 1e-6);
        assert!(!cli.summary_json);
    }

    #[test]
    fn cli_rejects_malformed_ratio_values() {
        let parsed =
            SplitCorpusCli::try_parse_from(["split_corpus", "--split-ratios", "0.9,0.2,0.1"]);
        assert!(parsed.is_err());
    }
}
