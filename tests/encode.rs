//! Concrete scenario tests, `Value` <-> hex bytes, mirroring `tests/decode.rs`
//! but exercising the encoder.

use cbor_codec::value::Value;
use cbor_codec::{decode_from_bytes, encode_to_bytes};

fn int(n: i128) -> Value {
    Value::Integer(n)
}

#[test]
fn small_unsigned_ints_use_minimal_width() {
    assert_eq!(encode_to_bytes(&int(0)).unwrap(), vec![0x00]);
    assert_eq!(encode_to_bytes(&int(23)).unwrap(), vec![0x17]);
    assert_eq!(encode_to_bytes(&int(24)).unwrap(), vec![0x18, 0x18]);
    assert_eq!(encode_to_bytes(&int(255)).unwrap(), vec![0x18, 0xff]);
    assert_eq!(encode_to_bytes(&int(256)).unwrap(), vec![0x19, 0x01, 0x00]);
    assert_eq!(
        encode_to_bytes(&int(65535)).unwrap(),
        vec![0x19, 0xff, 0xff]
    );
    assert_eq!(
        encode_to_bytes(&int(65536)).unwrap(),
        vec![0x1a, 0x00, 0x01, 0x00, 0x00]
    );
    assert_eq!(
        encode_to_bytes(&int(0xFFFFFFFF)).unwrap(),
        vec![0x1a, 0xff, 0xff, 0xff, 0xff]
    );
    assert_eq!(
        encode_to_bytes(&int(0x100000000)).unwrap(),
        vec![0x1b, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00]
    );
}

#[test]
fn negative_ints_use_minimal_width() {
    assert_eq!(encode_to_bytes(&int(-1)).unwrap(), vec![0x20]);
    assert_eq!(encode_to_bytes(&int(-24)).unwrap(), vec![0x37]);
    assert_eq!(encode_to_bytes(&int(-25)).unwrap(), vec![0x38, 0x18]);
}

#[test]
fn u64_max_round_trips_without_a_bignum_tag() {
    let value = int(u64::MAX as i128);
    let bytes = encode_to_bytes(&value).unwrap();
    assert_eq!(bytes[0], 0x1b);
    assert_eq!(decode_from_bytes(&bytes).unwrap(), value);
}

#[test]
fn beyond_u64_encodes_as_a_bignum_tag() {
    let value = int(1i128 << 64);
    let bytes = encode_to_bytes(&value).unwrap();
    assert_eq!(
        bytes,
        vec![0xc2, 0x49, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]
    );
    assert_eq!(decode_from_bytes(&bytes).unwrap(), value);
}

#[test]
fn negative_beyond_u64_encodes_as_a_negative_bignum_tag() {
    let value = int(-(1i128 << 64) - 1);
    let bytes = encode_to_bytes(&value).unwrap();
    assert_eq!(bytes[0], 0xc3);
    assert_eq!(decode_from_bytes(&bytes).unwrap(), value);
}

#[test]
fn byte_string_head_length_matches_spec_formula() {
    // |encode(s)| = |s| + head_len(|s|), head_len in {1,2,3,5,9}.
    for len in [0usize, 23, 24, 255, 256, 65535, 65536] {
        let s = vec![0u8; len];
        let bytes = encode_to_bytes(&Value::ByteString(s)).unwrap();
        let head_len = bytes.len() - len;
        assert!(matches!(head_len, 1 | 2 | 3 | 5 | 9), "len={len}");
    }
}

#[test]
fn empty_containers() {
    assert_eq!(
        encode_to_bytes(&Value::ByteString(vec![])).unwrap(),
        vec![0x40]
    );
    assert_eq!(
        encode_to_bytes(&Value::TextString(String::new())).unwrap(),
        vec![0x60]
    );
    assert_eq!(encode_to_bytes(&Value::Array(vec![])).unwrap(), vec![0x80]);
    assert_eq!(encode_to_bytes(&Value::Map(vec![])).unwrap(), vec![0xa0]);
}

#[test]
fn tag_wraps_exactly_one_inner_item() {
    let value = Value::Tag(42, Box::new(int(7)));
    let bytes = encode_to_bytes(&value).unwrap();
    assert_eq!(bytes, vec![0xd8, 0x2a, 0x07]);
    assert_eq!(decode_from_bytes(&bytes).unwrap(), value);
}

#[test]
fn float_always_encodes_as_float64() {
    let bytes = encode_to_bytes(&Value::Float(std::f64::consts::PI)).unwrap();
    assert_eq!(
        bytes,
        vec![0xfb, 0x40, 0x09, 0x21, 0xfb, 0x54, 0x44, 0x2d, 0x18]
    );
}

#[test]
fn simple_values_round_trip() {
    for value in [Value::Bool(false), Value::Bool(true), Value::Null, Value::Undefined] {
        let bytes = encode_to_bytes(&value).unwrap();
        assert_eq!(decode_from_bytes(&bytes).unwrap(), value);
    }
}

#[test]
fn map_preserves_stored_order_on_encode() {
    let value = Value::Map(vec![
        (Value::TextString("a".into()), int(1)),
        (Value::TextString("b".into()), int(2)),
    ]);
    assert_eq!(
        encode_to_bytes(&value).unwrap(),
        vec![0xa2, 0x61, 0x61, 0x01, 0x61, 0x62, 0x02]
    );
}

#[test]
fn encode_to_sink_streams_without_buffering_whole_tree() {
    let mut sink = Vec::new();
    cbor_codec::encode_to_sink(&Value::Array(vec![int(1), int(2), int(3)]), &mut sink).unwrap();
    assert_eq!(sink, vec![0x83, 0x01, 0x02, 0x03]);
}
