use std::fmt;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::Deserialize;

use crate::error::{Error, ErrorKind, Result};

// A persisted remote-write record, as shipped through the delivery stream:
//
//   {"b": [31, 0, 10, 29, ...]}
//
// The payload is the snappy-compressed protobuf WriteRequest. Some
// producers serialize byte fields as base64, so the string form
// {"b": "HwAKHQ..."} is accepted too.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Record {
    #[serde(rename = "b", deserialize_with = "deserialize_payload")]
    payload: Vec<u8>,
}

impl Record {
    pub fn new(payload: Vec<u8>) -> Self {
        Self { payload }
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let record: Record = serde_json::from_str(text)
            .map_err(|e| (ErrorKind::Record, "record has unexpected shape", e))?;

        if record.payload.is_empty() {
            return Err(Error::with_kind(ErrorKind::Record, "record payload is empty"));
        }
        Ok(record)
    }

    #[inline]
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }
}

fn deserialize_payload<'de, D>(deserializer: D) -> std::result::Result<Vec<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(PayloadVisitor)
}

struct PayloadVisitor;

impl<'de> Visitor<'de> for PayloadVisitor {
    type Value = Vec<u8>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an array of bytes or a base64 string")
    }

    fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut payload = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(byte) = seq.next_element::<u8>()? {
            payload.push(byte);
        }
        Ok(payload)
    }

    fn visit_str<E>(self, v: &str) -> std::result::Result<Self::Value, E>
    where
        E: de::Error,
    {
        STANDARD
            .decode(v)
            .map_err(|e| E::custom(format!("invalid base64 payload: {}", e)))
    }
}
