use prost::Message;

use super::record::Record;
use crate::error::{ErrorKind, Result};
use crate::model::prompb::WriteRequest;

/// Snappy block format, not the framed stream format.
pub fn decompress(payload: &[u8]) -> Result<Vec<u8>> {
    Ok(snap::raw::Decoder::new()
        .decompress_vec(payload)
        .map_err(|e| (ErrorKind::Decompression, "snappy decoding failed", e))?)
}

pub fn deserialize(buf: &[u8]) -> Result<WriteRequest> {
    Ok(WriteRequest::decode(buf)
        .map_err(|e| (ErrorKind::Deserialization, "protobuf decoding failed", e))?)
}

pub fn decode(record: &Record) -> Result<WriteRequest> {
    let buf = decompress(record.payload())?;
    deserialize(&buf)
}
