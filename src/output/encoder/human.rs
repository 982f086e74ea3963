use std::fmt::Display;

use chrono::TimeZone;

use super::encoder::{Encoder, Entry};
use crate::error::Result;
use crate::utils::time::human_readable_time;

// # Record 1: human-readable timestamps for series 0:
// #   Sample 0: 2023-11-14T22:13:20.123000000Z
// #   Sample 1: 2023-11-14T22:13:35.123000000Z
pub struct HumanTimeEncoder<Tz> {
    tz: Tz,
}

impl<Tz: TimeZone> HumanTimeEncoder<Tz> {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }
}

impl<Tz> Encoder for HumanTimeEncoder<Tz>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    fn encode(&self, entry: &Entry) -> Result<Vec<u8>> {
        let mut lines = vec![];

        for (i, series) in entry.document.series().iter().enumerate() {
            lines.push(format!(
                "# Record {}: human-readable timestamps for series {}:",
                entry.index, i
            ));
            for (j, ts) in series.timestamps.iter().enumerate() {
                lines.push(format!(
                    "#   Sample {}: {}",
                    j,
                    human_readable_time(*ts, &self.tz)?
                ));
            }
        }

        Ok(String::into_bytes(lines.join("\n")))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, Utc};

    use super::*;
    use crate::error::ErrorKind;
    use crate::model::{Document, Series};

    fn series(timestamps: Vec<i64>) -> Series {
        Series {
            labels: Default::default(),
            values: vec![0.0; timestamps.len()],
            timestamps,
        }
    }

    #[test]
    fn test_encode() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let doc = Document {
            timeseries: vec![
                series(vec![1700000000123, 1700000015123]),
                series(vec![]),
                series(vec![0]),
            ],
        };

        let buf = HumanTimeEncoder::new(Utc).encode(&Entry::new(7, &doc))?;
        let expected = "\
# Record 7: human-readable timestamps for series 0:
#   Sample 0: 2023-11-14T22:13:20.123000000Z
#   Sample 1: 2023-11-14T22:13:35.123000000Z
# Record 7: human-readable timestamps for series 1:
# Record 7: human-readable timestamps for series 2:
#   Sample 0: 1970-01-01T00:00:00.000000000Z";
        assert_eq!(String::from_utf8(buf)?, expected);

        let buf = HumanTimeEncoder::new(FixedOffset::east_opt(3600).unwrap())
            .encode(&Entry::new(1, &Document { timeseries: vec![series(vec![0])] }))?;
        assert_eq!(
            String::from_utf8(buf)?,
            "# Record 1: human-readable timestamps for series 0:\n\
             #   Sample 0: 1970-01-01T01:00:00.000000000+01:00"
        );

        Ok(())
    }

    #[test]
    fn test_encode_empty_document() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let doc = Document { timeseries: vec![] };
        assert!(HumanTimeEncoder::new(Utc).encode(&Entry::new(1, &doc))?.is_empty());
        Ok(())
    }

    #[test]
    fn test_encode_out_of_range() {
        let doc = Document {
            timeseries: vec![series(vec![i64::MAX])],
        };
        let err = HumanTimeEncoder::new(Utc)
            .encode(&Entry::new(1, &doc))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Encoding);
    }
}
