/// Constants used by corpus discovery and parsing.
pub mod corpus {
    /// File extension (without dot) that marks corpus input files.
    pub const CONLLU_EXTENSION: &str = "conllu";
    /// Default directory scanned for corpus files.
    pub const DEFAULT_INPUT_DIR: &str = "raw/diachron";
}

/// Constants used by split sizing and output naming.
pub mod splits {
    use crate::splits::SplitLabel;

    /// Default seed for the corpus permutation, so reruns produce identical partitions.
    pub const DEFAULT_SEED: u64 = 42;
    /// Default directory that receives the three partition files.
    pub const DEFAULT_OUTPUT_DIR: &str = ".";
    /// Output filename for the train partition.
    pub const TRAIN_FILENAME: &str = "diachron-ud-train.conllu";
    /// Output filename for the dev partition.
    pub const DEV_FILENAME: &str = "diachron-ud-dev.conllu";
    /// Output filename for the test partition.
    pub const TEST_FILENAME: &str = "diachron-ud-test.conllu";
    /// Canonical split iteration order used for writing and reporting.
    pub const ALL_SPLITS: [SplitLabel; 3] = [SplitLabel::Train, SplitLabel::Dev, SplitLabel::Test];
}
