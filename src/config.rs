use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::corpus::{CONLLU_EXTENSION, DEFAULT_INPUT_DIR};
use crate::constants::splits::{DEFAULT_OUTPUT_DIR, DEFAULT_SEED};
use crate::splits::{SplitLabel, SplitRatios};

/// Top-level split pipeline configuration.
///
/// Every knob the pipeline consults arrives through this struct; the
/// defaults reproduce the historical batch layout (scan `raw/diachron`,
/// write into the current directory, seed 42, 80/10/10 ratios).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SplitConfig {
    /// Directory scanned for corpus files.
    pub input_dir: PathBuf,
    /// Directory that receives the three partition files.
    pub output_dir: PathBuf,
    /// Extension (without dot) that marks corpus input files.
    pub extension: String,
    /// Ratios used to size the train/dev/test partitions.
    pub ratios: SplitRatios,
    /// RNG seed that controls the deterministic permutation.
    pub seed: u64,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            extension: CONLLU_EXTENSION.to_string(),
            ratios: SplitRatios::default(),
            seed: DEFAULT_SEED,
        }
    }
}

impl SplitConfig {
    /// Output path for `label` inside the configured output directory.
    pub fn output_path(&self, label: SplitLabel) -> PathBuf {
        self.output_dir.join(label.filename())
    }
}
