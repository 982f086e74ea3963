use std::io::Write;

use super::encoder::{Encoder, Entry};
use super::writer::{LineWriter, Writer};
use crate::error::{ErrorKind, Result};

/// Encoders run in order; each non-empty rendering becomes its own
/// delimited chunk in the output.
pub struct Output<W> {
    writer: LineWriter<W>,
    encoders: Vec<Box<dyn Encoder>>,
}

impl<W: Write> Output<W> {
    pub fn new(writer: LineWriter<W>, encoders: Vec<Box<dyn Encoder>>) -> Self {
        Self { writer, encoders }
    }

    pub fn write(&mut self, entry: &Entry) -> Result<()> {
        // Nothing is written unless every encoder succeeds.
        let bufs = self
            .encoders
            .iter()
            .map(|encoder| encoder.encode(entry))
            .collect::<Result<Vec<_>>>()?;

        for buf in bufs.iter().filter(|buf| !buf.is_empty()) {
            self.writer
                .write(buf)
                .map_err(|e| (ErrorKind::Output, "writer failed", e))?;
        }

        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        Ok(self
            .writer
            .flush()
            .map_err(|e| (ErrorKind::Output, "flushing output failed", e))?)
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}
