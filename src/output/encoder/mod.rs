mod encoder;
mod human;
mod json;

pub use encoder::{Encoder, Entry};
pub use human::HumanTimeEncoder;
pub use json::JSONEncoder;
