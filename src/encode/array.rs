use std::io::Write;

use crate::error::Error;
use crate::head::{self, Major};
use crate::value::Value;

/// Encodes an array (major type 4) using the definite-length form.
pub(crate) fn encode_array<W: Write>(sink: &mut W, items: &[Value]) -> Result<(), Error> {
    head::encode_head(sink, Major::Array, items.len() as u64)?;
    for item in items {
        super::encode_to_sink(item, sink)?;
    }
    Ok(())
}
