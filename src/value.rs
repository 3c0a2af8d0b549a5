/// A decoded or to-be-encoded CBOR item.
///
/// `Value` is an owned tree: decoding never borrows from the input, so a
/// `Value` produced by [`crate::decode::decode_from_source`] outlives the
/// reader it came from. A streaming source has no stable backing buffer to
/// borrow from, so the tree owns its data uniformly rather than maintaining
/// a separate borrowed variant for the slice case.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// A major-type-0 (unsigned) or major-type-1 (negative) integer, or a
    /// tag-2/tag-3 bignum whose magnitude fits in `i128`.
    Integer(i128),
    /// A major-type-2 byte string.
    ByteString(Vec<u8>),
    /// A major-type-3 UTF-8 text string.
    TextString(String),
    /// A major-type-4 array, definite or indefinite length.
    Array(Vec<Value>),
    /// A major-type-5 map, definite or indefinite length. Kept as an
    /// ordered list of pairs, not a `HashMap`/`BTreeMap`: CBOR map keys
    /// need not be hashable or orderable in Rust's sense, and decode order
    /// is preserved rather than collapsed.
    Map(Vec<(Value, Value)>),
    /// A major-type-6 semantic tag wrapping another value. Bignum tags
    /// (2/3) that fit in `i128` are folded into `Integer` instead of
    /// appearing here; every other tag number is preserved as-is.
    Tag(u64, Box<Value>),
    /// A major-type-7 half/single/double precision float, always widened
    /// to `f64` on decode (encode always emits the 8-byte form).
    Float(f64),
    /// A major-type-7 boolean (additional info 20/21).
    Bool(bool),
    /// A major-type-7 null (additional info 22).
    Null,
    /// A major-type-7 undefined (additional info 23).
    Undefined,
    /// A major-type-7 simple value read from the one-byte form (additional
    /// info 24) or an unassigned inline value (additional info 0..=19),
    /// passed through opaquely.
    Simple(u8),
}

impl Value {
    /// Returns the integer this value holds, if it is one.
    pub fn as_integer(&self) -> Option<i128> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the byte string this value holds, if it is one.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::ByteString(b) => Some(b),
            _ => None,
        }
    }

    /// Returns the text string this value holds, if it is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::TextString(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the array this value holds, if it is one.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the map entries this value holds, if it is one.
    pub fn as_map(&self) -> Option<&[(Value, Value)]> {
        match self {
            Value::Map(pairs) => Some(pairs),
            _ => None,
        }
    }

    /// Returns the tag number and wrapped value, if this is a tagged value.
    pub fn as_tag(&self) -> Option<(u64, &Value)> {
        match self {
            Value::Tag(n, inner) => Some((*n, inner)),
            _ => None,
        }
    }

    /// Returns the float this value holds, if it is one.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns the bool this value holds, if it is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Convenience constructor for a map value built from an iterator of
    /// pairs, preserving iteration order.
    pub fn map_from(entries: impl IntoIterator<Item = (Value, Value)>) -> Value {
        Value::Map(entries.into_iter().collect())
    }
}

impl From<i128> for Value {
    fn from(n: i128) -> Self {
        Value::Integer(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n as i128)
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Integer(n as i128)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::TextString(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::TextString(s.to_owned())
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Value::ByteString(b)
    }
}
