use thiserror::Error;

/// The error type produced by every fallible operation in this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// The top-level entry point was given input it cannot make sense of
    /// independent of any single CBOR item: an empty buffer, or trailing
    /// bytes left over after a complete item was decoded.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The bytes decoded so far violate the CBOR data model (a reserved
    /// additional-information value, a string segment of the wrong major
    /// type inside an indefinite-length string, invalid UTF-8, an orphan
    /// break byte, and so on).
    #[error("malformed CBOR: {0}")]
    Malformed(String),

    /// The byte source ran out of data in the middle of an item.
    #[error("unexpected end of input")]
    UnexpectedEof,

    /// Decoding a nested item would exceed the configured recursion depth.
    #[error("recursion depth exceeded (max {max})")]
    DepthExceeded {
        /// The configured maximum nesting depth.
        max: usize,
    },

    /// A `Value` has no CBOR wire representation (used by optional
    /// conveniences layered on top of the core codec, such as the
    /// date-time tag helpers).
    #[error("value has no CBOR representation: {0}")]
    UnsupportedValue(String),

    /// A [`TagMapper`](crate::tag_mapper::TagMapper) configured with
    /// `raise_on_unknown_tag` encountered a tag number with no registered
    /// [`ClassTag`](crate::tag_mapper::ClassTag).
    #[error("unknown tag {0}")]
    UnknownTag(u64),

    /// The underlying byte sink or source failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
