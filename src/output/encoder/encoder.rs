use crate::error::Result;
use crate::model::Document;

/// One decoded record on its way out, tagged with its position in the
/// input stream.
pub struct Entry<'a> {
    pub index: usize,
    pub document: &'a Document,
}

impl<'a> Entry<'a> {
    pub fn new(index: usize, document: &'a Document) -> Self {
        Self { index, document }
    }
}

/// Renders an entry. An empty buffer means there is nothing to write.
pub trait Encoder {
    fn encode(&self, entry: &Entry) -> Result<Vec<u8>>;
}
