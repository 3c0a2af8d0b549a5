use crate::decode::{decode_item, decode_next_or_break, Decoder};
use crate::error::Error;
use crate::head::RawArg;
use crate::reader::ByteSource;
use crate::value::Value;

/// Decodes an array body (major type 4), following a head already read by
/// the caller. Each element (definite or indefinite form) recurses through
/// [`decode_item`] at `depth + 1`.
pub(crate) fn decode_array_body<S: ByteSource>(
    dec: &mut Decoder<S>,
    arg: RawArg,
    depth: usize,
) -> Result<Vec<Value>, Error> {
    match arg.numeric() {
        Some(len) => {
            let len = usize::try_from(len)
                .map_err(|_| Error::Malformed("array length too large for this platform".into()))?;
            let mut items = Vec::with_capacity(len.min(4096));
            for _ in 0..len {
                items.push(decode_item(dec, depth + 1)?);
            }
            Ok(items)
        }
        None => {
            let mut items = Vec::new();
            while let Some(value) = decode_next_or_break(dec, depth + 1)? {
                items.push(value);
            }
            Ok(items)
        }
    }
}
