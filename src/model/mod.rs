mod document;
pub mod prompb;
mod types;

pub use document::*;
pub use types::*;
