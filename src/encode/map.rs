use std::io::Write;

use crate::error::Error;
use crate::head::{self, Major};
use crate::value::Value;

/// Encodes a map (major type 5) using the definite-length form, emitting
/// entries in the order `Value::Map` stores them; no canonical key
/// ordering is enforced.
pub(crate) fn encode_map<W: Write>(sink: &mut W, pairs: &[(Value, Value)]) -> Result<(), Error> {
    head::encode_head(sink, Major::Map, pairs.len() as u64)?;
    for (key, value) in pairs {
        super::encode_to_sink(key, sink)?;
        super::encode_to_sink(value, sink)?;
    }
    Ok(())
}
