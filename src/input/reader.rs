use std::io::Read;
use std::iter::FusedIterator;

use serde_json::de::IoRead;
use serde_json::value::RawValue;
use serde_json::{Deserializer, StreamDeserializer};

use super::record::Record;
use crate::error::{ErrorKind, Result};

type RawStream<R> = StreamDeserializer<'static, IoRead<R>, Box<RawValue>>;

/// Splits a byte stream of back-to-back JSON values into records.
///
/// Values need no separator between them: `{"b":[..]}{"b":[..]}` is as good
/// as one record per line. Each value is first framed as raw JSON text and
/// only then mapped onto a `Record`, so a value with the wrong shape costs
/// just that one record, while broken framing ends the stream.
pub struct RecordReader<R: Read> {
    inner: RawStream<R>,
    count: usize,
    done: bool,
}

impl<R: Read> RecordReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner: Deserializer::from_reader(inner).into_iter(),
            count: 0,
            done: false,
        }
    }

    /// Number of records framed so far. The n-th record yielded is #n.
    /// Values that frame as JSON but fail the record shape check still
    /// advance it, so numbering follows positions in the input.
    #[inline]
    pub fn records_read(&self) -> usize {
        self.count
    }
}

impl<R: Read> std::iter::Iterator for RecordReader<R> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.inner.next() {
            None => {
                self.done = true;
                None // EOF
            }
            Some(Err(e)) => {
                // There is no way to resync after a syntax error.
                self.done = true;
                Some(Err((ErrorKind::Stream, "malformed JSON in record stream", e).into()))
            }
            Some(Ok(raw)) => {
                self.count += 1;
                Some(Record::from_json(raw.get()))
            }
        }
    }
}

impl<R: Read> FusedIterator for RecordReader<R> {}
