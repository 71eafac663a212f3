#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// CLI runner and pipeline orchestration.
pub mod app;
/// Split pipeline configuration.
pub mod config;
/// Centralized constants used across reader, partitioner, and writer.
pub mod constants;
/// Sentence/corpus types and the directory reader.
pub mod corpus;
/// Run summary helpers for operator reporting.
pub mod report;
/// Split labels, ratios, and the seeded partitioner.
pub mod splits;
/// Shared type aliases.
pub mod types;
/// Partition serialization back to the on-disk format.
pub mod writer;

mod errors;

pub use app::{SplitOutcome, run_split_corpus, run_split_pipeline};
pub use config::SplitConfig;
pub use corpus::{Corpus, CorpusReader, FileSentences, Sentence, parse_sentences};
pub use errors::SplitError;
pub use report::{SplitSummary, split_summary};
pub use splits::{Partitions, SplitLabel, SplitRatios, partition, split_counts_for_total};
pub use types::Line;
pub use writer::{output_file_size, write_sentences};
