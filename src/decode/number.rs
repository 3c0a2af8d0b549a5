use crate::error::Error;
use crate::head::RawArg;
use crate::value::Value;

/// Interprets the additional-information field of a major-type-7 head,
/// per RFC 8949 §3.3: the fixed bool/null/undefined values, a passed-through
/// simple value, or a widened half/single/double-precision float.
pub(crate) fn decode_other(arg: RawArg) -> Result<Value, Error> {
    match arg {
        RawArg::Inline(n) => match n {
            20 => Ok(Value::Bool(false)),
            21 => Ok(Value::Bool(true)),
            22 => Ok(Value::Null),
            23 => Ok(Value::Undefined),
            _ => Ok(Value::Simple(n)),
        },
        RawArg::One(n) => Ok(Value::Simple(n)),
        RawArg::Two(bits) => Ok(Value::Float(half::f16::from_bits(bits).to_f64())),
        RawArg::Four(bits) => Ok(Value::Float(f32::from_bits(bits) as f64)),
        RawArg::Eight(bits) => Ok(Value::Float(f64::from_bits(bits))),
        RawArg::Indefinite => Err(Error::Malformed(
            "unexpected break outside an indefinite-length container".into(),
        )),
    }
}

/// Folds a tag-2 (positive bignum) or tag-3 (negative bignum) value into a
/// plain `Value::Integer` when its magnitude fits in `i128`; otherwise the
/// tag is preserved as-is.
pub(crate) fn fold_bignum(tag_number: u64, inner: Value) -> Value {
    if tag_number == 2 || tag_number == 3 {
        if let Value::ByteString(bytes) = &inner {
            if let Some(magnitude) = bytes_to_u128(bytes) {
                let folded = if tag_number == 2 {
                    i128::try_from(magnitude).ok()
                } else {
                    i128::try_from(magnitude).ok().map(|m| -1i128 - m)
                };
                if let Some(n) = folded {
                    return Value::Integer(n);
                }
            }
        }
    }
    Value::Tag(tag_number, Box::new(inner))
}

fn bytes_to_u128(bytes: &[u8]) -> Option<u128> {
    if bytes.len() > 16 {
        return None;
    }
    let mut buf = [0u8; 16];
    buf[16 - bytes.len()..].copy_from_slice(bytes);
    Some(u128::from_be_bytes(buf))
}
