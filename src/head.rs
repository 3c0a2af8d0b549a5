use std::io::Write;

use byteorder::{BigEndian, ByteOrder};

use crate::error::Error;
use crate::reader::ByteSource;

/// The CBOR major type, the top 3 bits of a head byte.
///
/// Grounded on the `CBOR_UINT`/`CBOR_NEGINT`/.../`CBOR_7` constants in
/// `examples/original_source/cbor/cbor.py`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Major {
    Uint = 0,
    Negint = 1,
    Bytes = 2,
    Text = 3,
    Array = 4,
    Map = 5,
    Tag = 6,
    Other = 7,
}

impl Major {
    fn from_raw(byte: u8) -> Major {
        match byte >> 5 {
            0 => Major::Uint,
            1 => Major::Negint,
            2 => Major::Bytes,
            3 => Major::Text,
            4 => Major::Array,
            5 => Major::Map,
            6 => Major::Tag,
            7 => Major::Other,
            _ => unreachable!("byte >> 5 is at most 7"),
        }
    }
}

/// The additional-information field of a head byte, already widened to its
/// full value where one follows inline.
#[derive(Debug, Clone, Copy)]
pub(crate) enum RawArg {
    /// Additional info 0..=23: the value *is* the additional info.
    Inline(u8),
    /// Additional info 24: one extra byte follows.
    One(u8),
    /// Additional info 25: two extra bytes follow.
    Two(u16),
    /// Additional info 26: four extra bytes follow.
    Four(u32),
    /// Additional info 27: eight extra bytes follow.
    Eight(u64),
    /// Additional info 31: indefinite length, or (on major type 7) break.
    Indefinite,
}

impl RawArg {
    /// The widened numeric value, or `None` for the indefinite-length
    /// marker (which has no numeric value).
    pub(crate) fn numeric(self) -> Option<u64> {
        match self {
            RawArg::Inline(n) => Some(n as u64),
            RawArg::One(n) => Some(n as u64),
            RawArg::Two(n) => Some(n as u64),
            RawArg::Four(n) => Some(n as u64),
            RawArg::Eight(n) => Some(n),
            RawArg::Indefinite => None,
        }
    }
}

/// True if `(major, arg)` is the single-byte break marker (`0xFF`), which is
/// structurally indistinguishable from "major 7, indefinite" because that's
/// exactly what it is on the wire.
pub(crate) fn is_break(major: Major, arg: &RawArg) -> bool {
    major == Major::Other && matches!(arg, RawArg::Indefinite)
}

/// Reads one head: the initial byte plus whatever argument bytes its
/// additional-information field calls for.
pub(crate) fn decode_head<S: ByteSource>(source: &mut S) -> Result<(Major, RawArg), Error> {
    let byte = source.pull(1)?[0];
    let major = Major::from_raw(byte);
    let info = byte & 0x1F;
    let arg = match info {
        0..=23 => RawArg::Inline(info),
        24 => RawArg::One(source.pull(1)?[0]),
        25 => RawArg::Two(BigEndian::read_u16(&source.pull(2)?)),
        26 => RawArg::Four(BigEndian::read_u32(&source.pull(4)?)),
        27 => RawArg::Eight(BigEndian::read_u64(&source.pull(8)?)),
        28..=30 => {
            return Err(Error::Malformed(format!(
                "reserved additional information {} in head byte",
                info
            )))
        }
        31 => RawArg::Indefinite,
        _ => unreachable!("additional info is masked to 5 bits"),
    };
    Ok((major, arg))
}

fn write_raw<W: Write>(sink: &mut W, bytes: &[u8]) -> Result<(), Error> {
    sink.write_all(bytes).map_err(Error::Io)
}

/// Writes a head with the minimal-width argument encoding for `arg`, for
/// the major types whose additional-information field is a plain number
/// (uint, negint, byte/text string length, array/map length, tag number).
pub(crate) fn encode_head<W: Write>(sink: &mut W, major: Major, arg: u64) -> Result<(), Error> {
    let top = (major as u8) << 5;
    if arg <= 23 {
        write_raw(sink, &[top | arg as u8])
    } else if arg <= u8::MAX as u64 {
        write_raw(sink, &[top | 24, arg as u8])
    } else if arg <= u16::MAX as u64 {
        let mut buf = [0u8; 2];
        BigEndian::write_u16(&mut buf, arg as u16);
        write_raw(sink, &[top | 25])?;
        write_raw(sink, &buf)
    } else if arg <= u32::MAX as u64 {
        let mut buf = [0u8; 4];
        BigEndian::write_u32(&mut buf, arg as u32);
        write_raw(sink, &[top | 26])?;
        write_raw(sink, &buf)
    } else {
        let mut buf = [0u8; 8];
        BigEndian::write_u64(&mut buf, arg);
        write_raw(sink, &[top | 27])?;
        write_raw(sink, &buf)
    }
}

/// Writes an indefinite-length head (`major | 31`) for byte/text strings,
/// arrays, or maps.
pub(crate) fn encode_indefinite_head<W: Write>(sink: &mut W, major: Major) -> Result<(), Error> {
    write_raw(sink, &[((major as u8) << 5) | 31])
}

/// Writes the `0xFF` break byte terminating an indefinite-length item.
pub(crate) fn encode_break<W: Write>(sink: &mut W) -> Result<(), Error> {
    write_raw(sink, &[0xFF])
}

const OTHER_TOP: u8 = (Major::Other as u8) << 5;

pub(crate) fn encode_bool<W: Write>(sink: &mut W, b: bool) -> Result<(), Error> {
    write_raw(sink, &[OTHER_TOP | if b { 21 } else { 20 }])
}

pub(crate) fn encode_null<W: Write>(sink: &mut W) -> Result<(), Error> {
    write_raw(sink, &[OTHER_TOP | 22])
}

pub(crate) fn encode_undefined<W: Write>(sink: &mut W) -> Result<(), Error> {
    write_raw(sink, &[OTHER_TOP | 23])
}

/// Writes a simple value using the one-byte form (additional info 24),
/// regardless of whether `n` would also fit the inline form — this mirrors
/// exactly what the decoder produces for `Value::Simple`, so re-encoding a
/// decoded value round-trips to an equal `Value`.
pub(crate) fn encode_simple<W: Write>(sink: &mut W, n: u8) -> Result<(), Error> {
    write_raw(sink, &[OTHER_TOP | 24, n])
}

/// Writes a float using the 8-byte (double precision) form; this crate
/// never speculatively down-converts to float16/float32 on encode.
pub(crate) fn encode_float<W: Write>(sink: &mut W, f: f64) -> Result<(), Error> {
    let mut buf = [0u8; 8];
    BigEndian::write_f64(&mut buf, f);
    write_raw(sink, &[OTHER_TOP | 27])?;
    write_raw(sink, &buf)
}
