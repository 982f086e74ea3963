use serde::ser::{SerializeSeq, Serializer};
use serde::Serialize;

use super::prompb::{TimeSeries, WriteRequest};
use super::types::{Labels, SampleValue, Timestamp};

// {
//   "timeseries": [
//     {
//       "labels": {"__name__": "up", "job": "api"},
//       "timestamps": [1700000000123, 1700000015123],
//       "values": [1.0, 0.0]
//     }
//   ]
// }
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    pub timeseries: Vec<Series>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub labels: Labels,
    pub timestamps: Vec<Timestamp>,
    #[serde(serialize_with = "serialize_values")]
    pub values: Vec<SampleValue>,
}

impl Document {
    pub fn series(&self) -> &[Series] {
        &self.timeseries
    }
}

impl From<WriteRequest> for Document {
    fn from(wreq: WriteRequest) -> Self {
        reshape(wreq)
    }
}

impl From<TimeSeries> for Series {
    fn from(ts: TimeSeries) -> Self {
        // A repeated label name overwrites the earlier one.
        let labels = ts
            .labels
            .into_iter()
            .map(|label| (label.name, label.value))
            .collect();

        let (timestamps, values) = ts
            .samples
            .iter()
            .map(|sample| (sample.timestamp, sample.value))
            .unzip();

        Self {
            labels,
            timestamps,
            values,
        }
    }
}

// JSON has no NaN or infinities. They are written the way the Prometheus
// HTTP API writes them, so a stale marker (NaN) stays distinguishable.
fn serialize_values<S: Serializer>(
    values: &[SampleValue],
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    let mut seq = serializer.serialize_seq(Some(values.len()))?;
    for value in values {
        seq.serialize_element(&ValueRepr(*value))?;
    }
    seq.end()
}

struct ValueRepr(SampleValue);

impl Serialize for ValueRepr {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self.0 {
            v if v.is_nan() => serializer.serialize_str("NaN"),
            v if v == SampleValue::INFINITY => serializer.serialize_str("+Inf"),
            v if v == SampleValue::NEG_INFINITY => serializer.serialize_str("-Inf"),
            v => serializer.serialize_f64(v),
        }
    }
}

/// Turns a decoded write request into its display form. Series and
/// samples keep their original order.
pub fn reshape(wreq: WriteRequest) -> Document {
    Document {
        timeseries: wreq.timeseries.into_iter().map(Series::from).collect(),
    }
}
