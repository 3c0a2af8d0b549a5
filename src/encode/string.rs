use std::io::Write;

use crate::error::Error;
use crate::head::{self, Major};

/// Encodes a byte string (major type 2) using the definite-length form —
/// this encoder never emits indefinite-length strings, though the decoder
/// accepts them per RFC 8949 §3.2.3.
pub(crate) fn encode_bytes<W: Write>(sink: &mut W, bytes: &[u8]) -> Result<(), Error> {
    head::encode_head(sink, Major::Bytes, bytes.len() as u64)?;
    sink.write_all(bytes).map_err(Error::Io)
}

/// Encodes a text string (major type 3). The host `&str` is already valid
/// UTF-8, so no validation is needed on the encode side.
pub(crate) fn encode_text<W: Write>(sink: &mut W, text: &str) -> Result<(), Error> {
    let bytes = text.as_bytes();
    head::encode_head(sink, Major::Text, bytes.len() as u64)?;
    sink.write_all(bytes).map_err(Error::Io)
}
