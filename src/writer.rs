use std::fs;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::corpus::Sentence;
use crate::errors::SplitError;

/// Serialize `sentences` to `path` in the blank-line-delimited format.
///
/// Each line is written verbatim followed by a single `\n`. Exactly one
/// blank line separates consecutive sentences and none follows the last,
/// so a written partition re-parses to the identical sentence sequence.
/// Creates or overwrites the target file. Returns the bytes written.
pub fn write_sentences(sentences: &[Sentence], path: &Path) -> Result<u64, SplitError> {
    let mut writer = BufWriter::new(File::create(path)?);
    let mut bytes: u64 = 0;
    for (idx, sentence) in sentences.iter().enumerate() {
        for line in &sentence.lines {
            writer.write_all(line.as_bytes())?;
            writer.write_all(b"\n")?;
            bytes += line.len() as u64 + 1;
        }
        if idx + 1 < sentences.len() {
            writer.write_all(b"\n")?;
            bytes += 1;
        }
    }
    writer.flush()?;
    debug!(
        path = %path.display(),
        bytes,
        sentences = sentences.len(),
        "wrote split file"
    );
    Ok(bytes)
}

/// Best-effort size of a written output file, for the verification pass.
pub fn output_file_size(path: &Path) -> Option<u64> {
    fs::metadata(path).ok().map(|meta| meta.len())
}
