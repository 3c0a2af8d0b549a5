//! The recursive decoder: turns bytes from a [`crate::reader::ByteSource`]
//! into a [`Value`] tree.

mod array;
mod map;
mod number;
mod string;

use std::io::Read;

use crate::error::Error;
use crate::head::{self, Major};
use crate::reader::{ByteSource, IoSource, SliceSource};
use crate::value::Value;

/// Tuning knobs for a [`Decoder`]. Currently just the recursion depth
/// guard, which is load-bearing: an attacker can otherwise craft a few
/// hundred bytes of deeply nested arrays that blow the host stack.
#[derive(Debug, Clone, Copy)]
pub struct DecoderOptions {
    max_depth: usize,
}

impl Default for DecoderOptions {
    fn default() -> Self {
        // Matches `_MAX_DEPTH` in `examples/original_source/cbor/cbor.py`.
        DecoderOptions { max_depth: 100 }
    }
}

impl DecoderOptions {
    /// Starts from the default options (`max_depth` 100).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum nesting depth a decoded item may have.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Decodes CBOR items from a [`ByteSource`].
///
/// Most callers want the free functions [`decode_from_bytes`],
/// [`decode_from_bytes_partial`], or [`decode_from_source`]. `Decoder`
/// itself is exposed for callers who need to read several concatenated
/// top-level items from the same source (RFC 8949 allows a byte stream to
/// hold back-to-back items with no framing between them) by calling
/// [`Decoder::decode_value`] repeatedly.
pub struct Decoder<S> {
    source: S,
    options: DecoderOptions,
}

impl<S: ByteSource> Decoder<S> {
    fn with_options(source: S, options: DecoderOptions) -> Self {
        Decoder { source, options }
    }

    /// Decodes the next top-level item. Fails with
    /// [`Error::InvalidInput`] if the source is already exhausted.
    pub fn decode_value(&mut self) -> Result<Value, Error> {
        if self.source.at_eof()? {
            return Err(Error::InvalidInput("empty input".into()));
        }
        decode_item(self, 0)
    }

    /// Reports whether the source has no more top-level items to offer.
    pub fn is_at_end(&mut self) -> Result<bool, Error> {
        self.source.at_eof()
    }
}

impl<'a> Decoder<SliceSource<'a>> {
    /// Builds a decoder reading from an in-memory slice, with default
    /// options.
    pub fn from_slice(bytes: &'a [u8]) -> Self {
        Decoder::with_options(SliceSource::new(bytes), DecoderOptions::default())
    }

    /// Builds a decoder reading from an in-memory slice, with custom
    /// options.
    pub fn from_slice_with_options(bytes: &'a [u8], options: DecoderOptions) -> Self {
        Decoder::with_options(SliceSource::new(bytes), options)
    }

    /// Byte offset into the original slice consumed so far.
    pub fn position(&self) -> usize {
        self.source.position()
    }
}

impl<R: Read> Decoder<IoSource<R>> {
    /// Builds a decoder reading from any [`std::io::Read`], with default
    /// options.
    pub fn from_reader(reader: R) -> Self {
        Decoder::with_options(IoSource::new(reader), DecoderOptions::default())
    }

    /// Builds a decoder reading from any [`std::io::Read`], with custom
    /// options.
    pub fn from_reader_with_options(reader: R, options: DecoderOptions) -> Self {
        Decoder::with_options(IoSource::new(reader), options)
    }
}

fn check_depth<S>(dec: &Decoder<S>, depth: usize) -> Result<(), Error> {
    if depth > dec.options.max_depth {
        Err(Error::DepthExceeded {
            max: dec.options.max_depth,
        })
    } else {
        Ok(())
    }
}

/// Reads one item at `depth`, or `None` if the next thing on the wire is a
/// break byte (the indefinite-length-container terminator). Used by
/// indefinite-length array/map loops, which need to distinguish "another
/// element" from "the container just ended" *before* committing to a full
/// recursive decode.
fn decode_next_or_break<S: ByteSource>(
    dec: &mut Decoder<S>,
    depth: usize,
) -> Result<Option<Value>, Error> {
    check_depth(dec, depth)?;
    let (major, arg) = head::decode_head(&mut dec.source)?;
    if head::is_break(major, &arg) {
        Ok(None)
    } else {
        decode_body(dec, major, arg, depth).map(Some)
    }
}

/// Decodes one full item at `depth`. A break byte here is always an error:
/// every position that legitimately accepts a break (container-loop
/// boundaries) goes through [`decode_next_or_break`] instead, so a break
/// reaching this function means it occurred somewhere it isn't allowed —
/// for example immediately between a map's key and value.
fn decode_item<S: ByteSource>(dec: &mut Decoder<S>, depth: usize) -> Result<Value, Error> {
    match decode_next_or_break(dec, depth)? {
        Some(value) => Ok(value),
        None => Err(Error::Malformed(
            "unexpected break outside an indefinite-length container".into(),
        )),
    }
}

fn decode_body<S: ByteSource>(
    dec: &mut Decoder<S>,
    major: Major,
    arg: head::RawArg,
    depth: usize,
) -> Result<Value, Error> {
    match major {
        Major::Uint => {
            let n = arg
                .numeric()
                .ok_or_else(|| Error::Malformed("indefinite length is not valid for an unsigned integer".into()))?;
            Ok(Value::Integer(n as i128))
        }
        Major::Negint => {
            let n = arg
                .numeric()
                .ok_or_else(|| Error::Malformed("indefinite length is not valid for a negative integer".into()))?;
            Ok(Value::Integer(-1i128 - n as i128))
        }
        Major::Bytes => string::decode_bytes_body(&mut dec.source, arg).map(Value::ByteString),
        Major::Text => string::decode_text_body(&mut dec.source, arg).map(Value::TextString),
        Major::Array => array::decode_array_body(dec, arg, depth).map(Value::Array),
        Major::Map => map::decode_map_body(dec, arg, depth).map(Value::Map),
        Major::Tag => {
            let tag_number = arg
                .numeric()
                .ok_or_else(|| Error::Malformed("indefinite length is not valid for a tag".into()))?;
            let inner = decode_item(dec, depth + 1)?;
            Ok(number::fold_bignum(tag_number, inner))
        }
        Major::Other => number::decode_other(arg),
    }
}

/// Decodes exactly one CBOR item from `bytes`, failing with
/// [`Error::InvalidInput`] if any bytes are left over afterwards. This is
/// usually what you want for a self-contained message.
pub fn decode_from_bytes(bytes: &[u8]) -> Result<Value, Error> {
    let (value, consumed) = decode_from_bytes_partial(bytes)?;
    if consumed != bytes.len() {
        return Err(Error::InvalidInput(format!(
            "{} trailing byte(s) after the decoded item",
            bytes.len() - consumed
        )));
    }
    Ok(value)
}

/// Decodes one CBOR item from the start of `bytes`, returning it along
/// with the number of bytes it occupied. Unlike [`decode_from_bytes`],
/// trailing bytes are not an error — repeated calls over the remaining
/// slice walk a sequence of concatenated top-level items.
pub fn decode_from_bytes_partial(bytes: &[u8]) -> Result<(Value, usize), Error> {
    let mut decoder = Decoder::from_slice(bytes);
    let value = decoder.decode_value()?;
    Ok((value, decoder.position()))
}

/// Decodes exactly one CBOR item from a [`std::io::Read`]. To decode a
/// sequence of concatenated items from the same source, build a
/// [`Decoder::from_reader`] once and call [`Decoder::decode_value`]
/// repeatedly instead.
pub fn decode_from_source<R: Read>(reader: R) -> Result<Value, Error> {
    Decoder::from_reader(reader).decode_value()
}
