use crate::decode::{decode_item, decode_next_or_break, Decoder};
use crate::error::Error;
use crate::head::RawArg;
use crate::reader::ByteSource;
use crate::value::Value;

/// Decodes a map body (major type 5), following a head already read by the
/// caller. For the indefinite form, a break is only legal where a key would
/// otherwise start — a break between a key and its value instead surfaces
/// as an ordinary "unexpected break" error from the value-position
/// [`decode_item`] call, since only key positions are checked for the
/// terminator here.
pub(crate) fn decode_map_body<S: ByteSource>(
    dec: &mut Decoder<S>,
    arg: RawArg,
    depth: usize,
) -> Result<Vec<(Value, Value)>, Error> {
    match arg.numeric() {
        Some(len) => {
            let len = usize::try_from(len)
                .map_err(|_| Error::Malformed("map length too large for this platform".into()))?;
            let mut pairs = Vec::with_capacity(len.min(4096));
            for _ in 0..len {
                let key = decode_item(dec, depth + 1)?;
                let value = decode_item(dec, depth + 1)?;
                pairs.push((key, value));
            }
            Ok(pairs)
        }
        None => {
            let mut pairs = Vec::new();
            while let Some(key) = decode_next_or_break(dec, depth + 1)? {
                let value = decode_item(dec, depth + 1)?;
                pairs.push((key, value));
            }
            Ok(pairs)
        }
    }
}
