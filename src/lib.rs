//! A CBOR (RFC 7049 / RFC 8949) encoder and decoder.
//!
//! The crate converts between [`Value`], an owned tree covering CBOR's full
//! data model, and CBOR byte streams. The codec itself
//! (`encode`/`decode`/`head`/`reader`) has no notion of tags beyond wrapping
//! and unwrapping them; application-level `tag_number <-> type` translation
//! is layered on top by [`tag_mapper`].
//!
//! ```
//! use cbor_codec::value::Value;
//! use cbor_codec::{decode_from_bytes, encode_to_bytes};
//!
//! let value = Value::Array(vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)]);
//! let bytes = encode_to_bytes(&value).unwrap();
//! assert_eq!(bytes, vec![0x83, 0x01, 0x02, 0x03]);
//! assert_eq!(decode_from_bytes(&bytes).unwrap(), value);
//! ```

pub mod decode;
pub mod encode;
mod error;
mod head;
mod reader;
pub mod tag_mapper;
pub mod value;

pub use decode::{
    decode_from_bytes, decode_from_bytes_partial, decode_from_source, Decoder, DecoderOptions,
};
pub use encode::{encode_to_bytes, encode_to_sink};
pub use error::Error;
pub use value::Value;
