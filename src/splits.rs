use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::constants::splits::{DEV_FILENAME, TEST_FILENAME, TRAIN_FILENAME};
use crate::corpus::Sentence;
use crate::errors::SplitError;

/// Logical dataset partitions produced by one run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SplitLabel {
    /// Training split.
    Train,
    /// Development split.
    Dev,
    /// Test split.
    Test,
}

impl SplitLabel {
    /// Canonical output filename for this split.
    pub fn filename(self) -> &'static str {
        match self {
            SplitLabel::Train => TRAIN_FILENAME,
            SplitLabel::Dev => DEV_FILENAME,
            SplitLabel::Test => TEST_FILENAME,
        }
    }
}

/// Ratio configuration for train/dev/test sizing.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SplitRatios {
    /// Fraction assigned to train.
    pub train: f32,
    /// Fraction assigned to dev.
    pub dev: f32,
    /// Fraction assigned to test.
    pub test: f32,
}

impl Default for SplitRatios {
    fn default() -> Self {
        Self {
            train: 0.8,
            dev: 0.1,
            test: 0.1,
        }
    }
}

impl SplitRatios {
    /// Validate that ratios are non-negative and sum to `1.0` (within epsilon).
    pub fn normalized(self) -> Result<Self, SplitError> {
        if self.train < 0.0 || self.dev < 0.0 || self.test < 0.0 {
            return Err(SplitError::Configuration(
                "split ratios must be non-negative".to_string(),
            ));
        }
        let sum = self.train + self.dev + self.test;
        if (sum - 1.0).abs() > 1e-6 {
            return Err(SplitError::Configuration(
                "split ratios must sum to 1.0".to_string(),
            ));
        }
        Ok(self)
    }
}

/// Partition sizes for `total` sentences.
///
/// Train and dev round down; test absorbs the remainder, so the three
/// counts always sum to `total`. Tiny corpora may legitimately produce
/// zero-sized train or dev partitions.
pub fn split_counts_for_total(total: usize, ratios: SplitRatios) -> (usize, usize, usize) {
    let train = ((total as f64) * f64::from(ratios.train)).floor() as usize;
    let dev = ((total as f64) * f64::from(ratios.dev)).floor() as usize;
    let assigned = train.saturating_add(dev);
    let test = total.saturating_sub(assigned);
    (train, dev, test)
}

#[derive(Debug, Clone)]
/// Small deterministic RNG driving the reproducible corpus permutation.
struct DeterministicRng {
    state: u64,
}

impl DeterministicRng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u64_internal(&mut self) -> u64 {
        let mut z = self.state.wrapping_add(0x9E3779B97F4A7C15);
        self.state = z;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
        z ^ (z >> 31)
    }
}

impl rand::RngCore for DeterministicRng {
    fn next_u32(&mut self) -> u32 {
        self.next_u64_internal() as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.next_u64_internal()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let mut offset = 0;
        while offset < dest.len() {
            let value = self.next_u64_internal();
            let bytes = value.to_le_bytes();
            let remaining = dest.len() - offset;
            let copy_len = remaining.min(bytes.len());
            dest[offset..offset + copy_len].copy_from_slice(&bytes[..copy_len]);
            offset += copy_len;
        }
    }
}

/// Disjoint train/dev/test partitions covering one corpus exactly.
#[derive(Clone, Debug, Default)]
pub struct Partitions {
    /// Sentences assigned to train.
    pub train: Vec<Sentence>,
    /// Sentences assigned to dev.
    pub dev: Vec<Sentence>,
    /// Sentences assigned to test.
    pub test: Vec<Sentence>,
}

impl Partitions {
    /// Total sentences across the three partitions.
    pub fn total(&self) -> usize {
        self.train.len() + self.dev.len() + self.test.len()
    }

    /// Sentences assigned to `label`.
    pub fn get(&self, label: SplitLabel) -> &[Sentence] {
        match label {
            SplitLabel::Train => &self.train,
            SplitLabel::Dev => &self.dev,
            SplitLabel::Test => &self.test,
        }
    }
}

/// Permute `sentences` with a generator seeded by `seed` and slice the
/// result into contiguous train/dev/test runs.
///
/// The shuffle covers the whole aggregated corpus in one pass: reruns over
/// identical input produce identical partitions, while any change to the
/// aggregated order reshuffles everything.
pub fn partition(
    sentences: Vec<Sentence>,
    ratios: SplitRatios,
    seed: u64,
) -> Result<Partitions, SplitError> {
    let ratios = ratios.normalized()?;
    let mut shuffled = sentences;
    let mut rng = DeterministicRng::new(seed);
    shuffled.shuffle(&mut rng);

    let (train_size, dev_size, _) = split_counts_for_total(shuffled.len(), ratios);
    let mut rest = shuffled.split_off(train_size);
    let test = rest.split_off(dev_size.min(rest.len()));
    Ok(Partitions {
        train: shuffled,
        dev: rest,
        test,
    })
}
