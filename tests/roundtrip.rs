//! Property-based round-trip tests: `decode(encode(v)) == v` for every
//! `Value` shape, and the encoder always emits the minimal-width integer
//! head.

use proptest::prelude::*;

use cbor_codec::value::Value;
use cbor_codec::{decode_from_bytes, encode_to_bytes};

fn arb_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(|n| Value::Integer(n as i128)),
        any::<Vec<u8>>().prop_map(Value::ByteString),
        ".*".prop_map(Value::TextString),
        any::<bool>().prop_map(Value::Bool),
        Just(Value::Null),
        Just(Value::Undefined),
        any::<f64>().prop_filter("NaN bit patterns are not unique", |f| !f.is_nan()).prop_map(Value::Float),
    ]
}

fn arb_value() -> impl Strategy<Value = Value> {
    arb_leaf().prop_recursive(4, 64, 8, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..8).prop_map(Value::Array),
            prop::collection::vec((inner.clone(), inner.clone()), 0..8).prop_map(Value::Map),
            // Tags 2/3 wrapping a byte string fold into `Value::Integer` on
            // decode (bignums); excluded here since that's a deliberate
            // non-identity, not a round-trip bug.
            (4u64..1000, inner).prop_map(|(t, v)| Value::Tag(t, Box::new(v))),
        ]
    })
}

proptest! {
    #[test]
    fn decode_of_encode_is_identity(value in arb_value()) {
        let bytes = encode_to_bytes(&value).unwrap();
        let decoded = decode_from_bytes(&bytes).unwrap();
        prop_assert_eq!(decoded, value);
    }

    #[test]
    fn integer_head_uses_minimal_width(n in any::<i64>()) {
        let bytes = encode_to_bytes(&Value::Integer(n as i128)).unwrap();
        let arg = if n >= 0 { n as u64 } else { (-1i64 - n) as u64 };
        let expected_len = if arg <= 23 {
            1
        } else if arg <= u8::MAX as u64 {
            2
        } else if arg <= u16::MAX as u64 {
            3
        } else if arg <= u32::MAX as u64 {
            5
        } else {
            9
        };
        prop_assert_eq!(bytes.len(), expected_len);
    }

    #[test]
    fn byte_string_wire_length_matches_formula(bytes in prop::collection::vec(any::<u8>(), 0..300)) {
        let len = bytes.len();
        let encoded = encode_to_bytes(&Value::ByteString(bytes)).unwrap();
        let head_len = encoded.len() - len;
        prop_assert!(matches!(head_len, 1 | 2 | 3 | 5 | 9));
    }

}

#[test]
fn nan_round_trips_as_nan() {
    let value = Value::Float(f64::NAN);
    let bytes = encode_to_bytes(&value).unwrap();
    match decode_from_bytes(&bytes).unwrap() {
        Value::Float(f) => assert!(f.is_nan()),
        other => panic!("expected a float, got {:?}", other),
    }
}
