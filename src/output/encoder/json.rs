use serde_json;

use super::encoder::{Encoder, Entry};
use crate::error::{ErrorKind, Result};

// # Record 1
// {
//   "timeseries": [
//     {
//       "labels": {
//         "__name__": "up"
//       },
//       "timestamps": [
//         1700000000123
//       ],
//       "values": [
//         1.0
//       ]
//     }
//   ]
// }
pub struct JSONEncoder {
    pretty: bool,
}

impl JSONEncoder {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl Encoder for JSONEncoder {
    fn encode(&self, entry: &Entry) -> Result<Vec<u8>> {
        let mut buf = format!("# Record {}\n", entry.index).into_bytes();

        if self.pretty {
            serde_json::to_writer_pretty(&mut buf, entry.document)
        } else {
            serde_json::to_writer(&mut buf, entry.document)
        }
        .map_err(|e| (ErrorKind::Encoding, "JSON serialization failed", e))?;

        Ok(buf)
    }
}
