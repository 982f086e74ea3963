pub mod decoder;
mod reader;
mod record;

pub use reader::RecordReader;
pub use record::Record;
