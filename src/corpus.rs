use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::constants::corpus::CONLLU_EXTENSION;
use crate::errors::SplitError;
use crate::types::Line;

/// One sentence: an ordered, non-empty run of raw lines between blank-line boundaries.
///
/// Lines are opaque payload. Comment lines stay interleaved exactly where
/// they appeared in the source file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sentence {
    /// Raw lines in original order.
    pub lines: Vec<Line>,
}

impl Sentence {
    /// Number of raw lines in this sentence.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True when the sentence holds no lines. The reader never produces one.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Per-file sentence count captured while reading.
#[derive(Clone, Debug)]
pub struct FileSentences {
    /// Path of the source file.
    pub path: PathBuf,
    /// Number of sentences the file contributed.
    pub sentences: usize,
}

/// All sentences aggregated across discovered files.
///
/// Order is discovery order (sorted file paths), then in-file order.
#[derive(Clone, Debug, Default)]
pub struct Corpus {
    /// Sentences across all files.
    pub sentences: Vec<Sentence>,
    /// Per-file contribution counts for reporting.
    pub files: Vec<FileSentences>,
}

impl Corpus {
    /// Total number of sentences across all files.
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// True when no sentences were read.
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

/// Split raw file text into sentences.
///
/// An empty line (after the terminator is stripped) closes the current
/// sentence; any other line, including whitespace-only lines, is content.
/// A non-empty accumulator at end of input is flushed as a final sentence,
/// so files without a trailing blank line lose nothing.
pub fn parse_sentences(text: &str) -> Vec<Sentence> {
    let mut sentences = Vec::new();
    let mut current: Vec<Line> = Vec::new();
    for line in text.lines() {
        if line.is_empty() {
            if !current.is_empty() {
                sentences.push(Sentence {
                    lines: std::mem::take(&mut current),
                });
            }
        } else {
            current.push(line.to_string());
        }
    }
    if !current.is_empty() {
        sentences.push(Sentence { lines: current });
    }
    sentences
}

/// Reads corpus files directly under a root directory into a [`Corpus`].
pub struct CorpusReader {
    root: PathBuf,
    extension: String,
    follow_links: bool,
}

impl CorpusReader {
    /// Create a reader rooted at `root` matching the default extension.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extension: CONLLU_EXTENSION.to_string(),
            follow_links: false,
        }
    }

    /// Override the extension (without dot) that marks corpus files.
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Control whether symlinks are followed during discovery.
    pub fn with_follow_links(mut self, follow_links: bool) -> Self {
        self.follow_links = follow_links;
        self
    }

    /// Enumerate matching files directly under the root, sorted by path.
    ///
    /// Sorting keeps discovery order independent of filesystem iteration
    /// order; the seeded permutation downstream depends on it.
    pub fn discover(&self) -> Result<Vec<PathBuf>, SplitError> {
        let mut candidates: Vec<PathBuf> = Vec::new();
        let mut walker = WalkDir::new(&self.root).max_depth(1);
        if self.follow_links {
            walker = walker.follow_links(true);
        }
        for entry in walker {
            let entry = entry.map_err(io::Error::from)?;
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path().to_path_buf();
            if self.matches_extension(&path) {
                candidates.push(path);
            }
        }
        candidates.sort();
        if candidates.is_empty() {
            return Err(SplitError::NoInputFiles {
                dir: self.root.clone(),
                extension: self.extension.clone(),
            });
        }
        Ok(candidates)
    }

    /// Read every discovered file into one aggregated corpus.
    ///
    /// The sentence accumulator resets per file; a sentence never spans
    /// two files.
    pub fn read(&self) -> Result<Corpus, SplitError> {
        let mut corpus = Corpus::default();
        for path in self.discover()? {
            let text = fs::read_to_string(&path)?;
            let sentences = parse_sentences(&text);
            debug!(
                path = %path.display(),
                sentences = sentences.len(),
                "read corpus file"
            );
            corpus.files.push(FileSentences {
                path,
                sentences: sentences.len(),
            });
            corpus.sentences.extend(sentences);
        }
        Ok(corpus)
    }

    fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case(&self.extension))
            .unwrap_or(false)
    }
}
