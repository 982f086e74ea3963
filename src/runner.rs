use std::io::{Read, Write};

use log::debug;

use crate::error::{ErrorKind, Result};
use crate::input::{decoder, Record, RecordReader};
use crate::model::Document;
use crate::output::{encoder::Entry, Output};

// Reader  == input bytes              ->  Iterator<Result<Record>>
// Decoder == Record                   ->  Result<WriteRequest>
// Reshape == WriteRequest             ->  Document
// Output  == (index, Document)        ->  encoders -> output bytes
//
// Per-record failures end up as one line in the report sink and the run
// goes on. Only a failing output (or report) sink aborts the run.

pub struct Runner<R: Read, W, D> {
    reader: RecordReader<R>,
    output: Output<W>,
    report: D,
    processed: usize,
}

impl<R: Read, W: Write, D: Write> Runner<R, W, D> {
    pub fn new(reader: RecordReader<R>, output: Output<W>, report: D) -> Self {
        Self {
            reader,
            output,
            report,
            processed: 0,
        }
    }

    /// Drains the input and returns the number of records written out.
    pub fn run(&mut self) -> Result<usize> {
        while let Some(next) = self.reader.next() {
            let index = match &next {
                // The record that failed to frame was never counted.
                Err(e) if e.kind() == ErrorKind::Stream => self.reader.records_read() + 1,
                _ => self.reader.records_read(),
            };

            match next.and_then(|record| self.process(index, &record)) {
                Ok(()) => self.processed += 1,
                Err(e) if e.kind().is_fatal() => return Err(e),
                Err(e) => {
                    let what = match e.kind() {
                        ErrorKind::Stream => "parsing",
                        _ => "decoding",
                    };
                    debug!("record #{} skipped ({})", index, e.kind());
                    self.report_line(&format!("Error {} record #{}: {}", what, index, e))?;
                }
            }
        }

        self.report_line(&format!(
            "Successfully processed {} records",
            self.processed
        ))?;

        Ok(self.processed)
    }

    #[inline]
    pub fn processed(&self) -> usize {
        self.processed
    }

    pub fn into_inner(self) -> (W, D) {
        (self.output.into_inner(), self.report)
    }

    fn process(&mut self, index: usize, record: &Record) -> Result<()> {
        debug!("record #{}: {} byte payload", index, record.payload().len());

        let document = Document::from(decoder::decode(record)?);
        self.output.write(&Entry::new(index, &document))
    }

    fn report_line(&mut self, line: &str) -> Result<()> {
        // Report and output may share a terminal; keep them in order.
        self.output.flush()?;
        writeln!(self.report, "{}", line)
            .and_then(|_| self.report.flush())
            .map_err(|e| (ErrorKind::Output, "report writer failed", e).into())
    }
}

#[cfg(test)]
mod tests {
    use prost::Message;

    use super::*;
    use crate::model::prompb::{Label, Sample, TimeSeries, WriteRequest};
    use crate::output::{encoder::JSONEncoder, writer::LineWriter};

    fn record_json(wreq: &WriteRequest) -> String {
        let payload = snap::raw::Encoder::new()
            .compress_vec(&wreq.encode_to_vec())
            .unwrap();
        serde_json::json!({ "b": payload }).to_string()
    }

    fn write_request(name: &str, ts: i64, value: f64) -> WriteRequest {
        WriteRequest {
            timeseries: vec![TimeSeries {
                labels: vec![Label::new("__name__", name)],
                samples: vec![Sample::new(ts, value)],
            }],
        }
    }

    fn run(input: &str) -> (usize, String, String) {
        let mut runner = Runner::new(
            RecordReader::new(input.as_bytes()),
            Output::new(
                LineWriter::new(Vec::new()),
                vec![Box::new(JSONEncoder::new(false))],
            ),
            Vec::new(),
        );

        let processed = runner.run().unwrap();
        assert_eq!(processed, runner.processed());

        let (output, report) = runner.into_inner();
        (
            processed,
            String::from_utf8(output).unwrap(),
            String::from_utf8(report).unwrap(),
        )
    }

    #[test]
    fn test_empty_input() {
        let (processed, output, report) = run("");
        assert_eq!(processed, 0);
        assert_eq!(output, "");
        assert_eq!(report, "Successfully processed 0 records\n");
    }

    #[test]
    fn test_corrupted_payload_is_skipped() {
        let input = format!(
            "{}{}",
            record_json(&write_request("up", 1000, 1.0)),
            r#"{"b":[255,255,255,255,255,255]}"#,
        );

        let (processed, output, report) = run(&input);

        assert_eq!(processed, 1);
        assert_eq!(
            output,
            "# Record 1\n\
             {\"timeseries\":[{\"labels\":{\"__name__\":\"up\"},\"timestamps\":[1000],\"values\":[1.0]}]}\n"
        );

        let lines: Vec<_> = report.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Error decoding record #2: decompression error"));
        assert_eq!(lines[1], "Successfully processed 1 records");
    }

    #[test]
    fn test_every_failure_kind_is_local() {
        let bad_protobuf = snap::raw::Encoder::new()
            .compress_vec(&[0x0a, 0x05, 0x01])
            .unwrap();

        let input = [
            record_json(&write_request("a", 1, 1.0)),
            serde_json::json!({ "b": bad_protobuf }).to_string(),
            r#"{"nope":1}"#.to_owned(),
            record_json(&write_request("b", 2, 2.0)),
            r#"{"b":[9,9,9,"#.to_owned(),
        ]
        .join("\n");

        let (processed, output, report) = run(&input);

        assert_eq!(processed, 2);
        assert!(output.contains("# Record 1\n"));
        assert!(output.contains("# Record 4\n"));
        assert!(!output.contains("# Record 2\n"));

        let lines: Vec<_> = report.lines().collect();
        assert_eq!(lines.len(), 4, "{}", report);
        assert!(lines[0].starts_with("Error decoding record #2: deserialization error"));
        assert!(lines[1].starts_with("Error decoding record #3: invalid record"));
        assert!(lines[2].starts_with("Error parsing record #5: stream read error"));
        assert_eq!(lines[3], "Successfully processed 2 records");
    }

    #[test]
    fn test_output_failure_is_fatal() {
        struct BrokenPipe;

        impl Write for BrokenPipe {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::ErrorKind::BrokenPipe.into())
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let input = record_json(&write_request("up", 0, 0.0));
        let mut runner = Runner::new(
            RecordReader::new(input.as_bytes()),
            Output::new(
                LineWriter::new(BrokenPipe),
                vec![Box::new(JSONEncoder::new(true))],
            ),
            Vec::new(),
        );

        let err = runner.run().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Output);
        assert_eq!(runner.processed(), 0);
    }
}
