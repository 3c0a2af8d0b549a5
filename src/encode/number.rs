use std::io::Write;

use crate::error::Error;
use crate::head::{self, Major};

/// Encodes an integer, using the plain uint/negint head forms when `n` fits
/// in `u64`/`i64`+`u64` and falling back to a tag-2/tag-3 bignum otherwise
/// (mirrors the exact cutoffs `fold_bignum` folds back on decode).
pub(crate) fn encode_integer<W: Write>(sink: &mut W, n: i128) -> Result<(), Error> {
    if n >= 0 {
        if n <= u64::MAX as i128 {
            head::encode_head(sink, Major::Uint, n as u64)
        } else {
            encode_bignum(sink, 2, n as u128)
        }
    } else {
        // RFC 8949 §3.1: a negative integer n is encoded as -1 - n.
        let arg = -1i128 - n;
        if arg <= u64::MAX as i128 {
            head::encode_head(sink, Major::Negint, arg as u64)
        } else {
            encode_bignum(sink, 3, arg as u128)
        }
    }
}

fn encode_bignum<W: Write>(sink: &mut W, tag_number: u64, magnitude: u128) -> Result<(), Error> {
    head::encode_head(sink, Major::Tag, tag_number)?;
    let bytes = minimal_be_bytes(magnitude);
    head::encode_head(sink, Major::Bytes, bytes.len() as u64)?;
    sink.write_all(&bytes).map_err(Error::Io)
}

fn minimal_be_bytes(value: u128) -> Vec<u8> {
    let full = value.to_be_bytes();
    let first_nonzero = full.iter().position(|&b| b != 0).unwrap_or(full.len() - 1);
    full[first_nonzero..].to_vec()
}

/// Encodes a float using the always-8-byte (double precision) form; no
/// speculative down-conversion to float16/float32 is attempted.
pub(crate) fn encode_float<W: Write>(sink: &mut W, f: f64) -> Result<(), Error> {
    head::encode_float(sink, f)
}
