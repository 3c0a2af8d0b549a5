//! The recursive encoder: turns a [`Value`] tree into CBOR bytes written to
//! a [`std::io::Write`] sink.

mod array;
mod map;
mod number;
mod string;

use std::io::Write;

use crate::error::Error;
use crate::head;
use crate::value::Value;

/// Encodes one `Value` (and everything it contains) to a freshly allocated
/// byte vector.
pub fn encode_to_bytes(value: &Value) -> Result<Vec<u8>, Error> {
    let mut out = Vec::new();
    encode_to_sink(value, &mut out)?;
    Ok(out)
}

/// Encodes one `Value` to any [`std::io::Write`] sink. The encoder never
/// buffers the whole tree: each primitive is written as soon as it is
/// reached during the recursive walk.
pub fn encode_to_sink<W: Write>(value: &Value, sink: &mut W) -> Result<(), Error> {
    encode_value(sink, value)
}

fn encode_value<W: Write>(sink: &mut W, value: &Value) -> Result<(), Error> {
    match value {
        Value::Integer(n) => number::encode_integer(sink, *n),
        Value::ByteString(bytes) => string::encode_bytes(sink, bytes),
        Value::TextString(text) => string::encode_text(sink, text),
        Value::Array(items) => array::encode_array(sink, items),
        Value::Map(pairs) => map::encode_map(sink, pairs),
        Value::Tag(tag_number, inner) => {
            head::encode_head(sink, head::Major::Tag, *tag_number)?;
            encode_value(sink, inner)
        }
        Value::Float(f) => number::encode_float(sink, *f),
        Value::Bool(b) => head::encode_bool(sink, *b),
        Value::Null => head::encode_null(sink),
        Value::Undefined => head::encode_undefined(sink),
        Value::Simple(n) => head::encode_simple(sink, *n),
    }
}
