use std::io::Write;

use anyhow::{Context, Result};

/// Writes one `"<outer> <inner> <score>"` line per scored pair.
///
/// Every line is flushed as soon as it is written, so the lines
/// emitted before an abnormal end of a run still form a valid prefix
/// of the full result set.
pub struct PairWriter<W: Write> {
    writer: W,
}

impl<W: Write> PairWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_pair(&mut self, outer: usize, inner: usize, score: i32) -> Result<()> {
        writeln!(self.writer, "{} {} {}", outer, inner, score)
            .context("failed to write pair score")?;

        self.writer
            .flush()
            .context("failed to flush pair score")?;

        Ok(())
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }
}
