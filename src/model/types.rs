use std::collections::BTreeMap;

pub type LabelName = String;

pub type LabelValue = String;

// Sorted by name so that rendered documents are stable.
pub type Labels = BTreeMap<LabelName, LabelValue>;

pub type SampleValue = f64;

// Unix timestamp in milliseconds.
pub type Timestamp = i64;
