use std::fmt::Display;

use chrono::{LocalResult, SecondsFormat, TimeZone};

use crate::error::{Error, ErrorKind, Result};
use crate::model::Timestamp;

/// Renders a millisecond timestamp as RFC 3339 with nanosecond precision
/// in the given time zone, e.g. `2023-11-14T22:13:20.123000000Z`.
pub fn human_readable_time<Tz>(timestamp: Timestamp, tz: &Tz) -> Result<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let secs = timestamp.div_euclid(1000);
    let nanos = (timestamp.rem_euclid(1000) * 1_000_000) as u32;

    match tz.timestamp_opt(secs, nanos) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => {
            Ok(dt.to_rfc3339_opts(SecondsFormat::Nanos, true))
        }
        LocalResult::None => Err(Error::with_kind(
            ErrorKind::Encoding,
            &format!("timestamp {} is out of range", timestamp),
        )),
    }
}
