use crate::error::Error;
use crate::head::{self, Major, RawArg};
use crate::reader::ByteSource;

fn definite_len(arg: RawArg) -> Result<Option<usize>, Error> {
    match arg.numeric() {
        Some(n) => usize::try_from(n)
            .map(Some)
            .map_err(|_| Error::Malformed("string length too large for this platform".into())),
        None => Ok(None),
    }
}

/// Decodes a byte string body (major type 2), following a head already read
/// by the caller. Handles both the definite-length form and the
/// indefinite-length form, whose segments must themselves be definite-length
/// byte strings (RFC 8949 §3.2.3).
pub(crate) fn decode_bytes_body<S: ByteSource>(
    dec_source: &mut S,
    arg: RawArg,
) -> Result<Vec<u8>, Error> {
    match definite_len(arg)? {
        Some(len) => dec_source.pull(len),
        None => {
            let mut out = Vec::new();
            loop {
                let (major, seg_arg) = head::decode_head(dec_source)?;
                if head::is_break(major, &seg_arg) {
                    break;
                }
                if major != Major::Bytes {
                    return Err(Error::Malformed(
                        "indefinite-length byte string segment must itself be a definite-length byte string".into(),
                    ));
                }
                let len = definite_len(seg_arg)?.ok_or_else(|| {
                    Error::Malformed(
                        "nested indefinite-length byte string segment is forbidden".into(),
                    )
                })?;
                out.extend(dec_source.pull(len)?);
            }
            Ok(out)
        }
    }
}

/// Decodes a text string body (major type 3). Segments of an
/// indefinite-length text string must themselves be definite-length text
/// strings; the reassembled bytes are validated as UTF-8 only once, at the
/// end, so a multi-byte UTF-8 sequence may legally straddle a segment
/// boundary.
pub(crate) fn decode_text_body<S: ByteSource>(
    dec_source: &mut S,
    arg: RawArg,
) -> Result<String, Error> {
    let bytes = match definite_len(arg)? {
        Some(len) => dec_source.pull(len)?,
        None => {
            let mut out = Vec::new();
            loop {
                let (major, seg_arg) = head::decode_head(dec_source)?;
                if head::is_break(major, &seg_arg) {
                    break;
                }
                if major != Major::Text {
                    return Err(Error::Malformed(
                        "indefinite-length text string segment must itself be a definite-length text string".into(),
                    ));
                }
                let len = definite_len(seg_arg)?.ok_or_else(|| {
                    Error::Malformed(
                        "nested indefinite-length text string segment is forbidden".into(),
                    )
                })?;
                out.extend(dec_source.pull(len)?);
            }
            out
        }
    };
    String::from_utf8(bytes).map_err(|e| Error::Malformed(format!("invalid utf-8: {}", e)))
}
