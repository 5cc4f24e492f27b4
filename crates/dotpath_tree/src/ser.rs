//! Hand-written serialization for [`Arg`] values.
//!
//! Scalars serialize as primitives, sequences as sequences, mappings as
//! maps in insertion order — the same shape the formatter renders as text.
//! Enabled by the `serde` feature.

use serde_core::ser::{SerializeMap, SerializeSeq};
use serde_core::{Serialize, Serializer};

use crate::args::Arg;

impl Serialize for Arg {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Arg::Str(value) => serializer.serialize_str(value),
            Arg::Int(value) => serializer.serialize_i64(*value),
            Arg::UInt(value) => serializer.serialize_u64(*value),
            Arg::Float(value) => serializer.serialize_f64(*value),
            Arg::Bool(value) => serializer.serialize_bool(*value),
            Arg::Seq(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Arg::Map(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(&**key, value)?;
                }
                map.end()
            }
        }
    }
}
