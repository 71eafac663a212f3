use serde::{Deserialize, Serialize};

use crate::splits::{SplitRatios, split_counts_for_total};

/// Aggregate sizing summary for one split run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SplitSummary {
    pub files: usize,
    pub total: usize,
    pub train: usize,
    pub dev: usize,
    pub test: usize,
    pub train_share: f64,
    pub dev_share: f64,
    pub test_share: f64,
}

/// Compute the summary for `total` sentences read from `files` inputs.
/// Returns `None` for an empty corpus, which the pipeline treats as a
/// terminal condition before anything is written.
pub fn split_summary(files: usize, total: usize, ratios: SplitRatios) -> Option<SplitSummary> {
    if total == 0 {
        return None;
    }
    let (train, dev, test) = split_counts_for_total(total, ratios);
    Some(SplitSummary {
        files,
        total,
        train,
        dev,
        test,
        train_share: train as f64 / total as f64,
        dev_share: dev as f64 / total as f64,
        test_share: test as f64 / total as f64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_reports_counts_and_shares() {
        let summary = split_summary(3, 10, SplitRatios::default()).expect("summary");
        assert_eq!(summary.files, 3);
        assert_eq!(summary.total, 10);
        assert_eq!(summary.train, 8);
        assert_eq!(summary.dev, 1);
        assert_eq!(summary.test, 1);
        assert!((summary.train_share - 0.8).abs() < 1e-9);
        assert!((summary.dev_share - 0.1).abs() < 1e-9);
        assert!((summary.test_share - 0.1).abs() < 1e-9);
    }

    #[test]
    fn summary_gives_remainder_to_test() {
        let summary = split_summary(1, 7, SplitRatios::default()).expect("summary");
        assert_eq!(summary.train, 5);
        assert_eq!(summary.dev, 0);
        assert_eq!(summary.test, 2);
        assert!((summary.train_share + summary.dev_share + summary.test_share - 1.0).abs() < 1e-9);
    }

    #[test]
    fn summary_is_none_for_an_empty_corpus() {
        assert_eq!(split_summary(2, 0, SplitRatios::default()), None);
    }
}
