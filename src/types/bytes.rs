//! Key codec implementations for byte payloads.
//!
//! Byte fields are variable length, so they carry their own termination
//! instead of a length prefix (a length prefix would dominate the sort
//! order). The escape scheme:
//!
//! ```text
//! 0x00       -> 0x00 0xFF   (escaped payload zero)
//! other byte -> itself
//! terminator -> 0x00 0x00
//! ```
//!
//! The escaped zero (0x00 0xFF) always compares above the terminator
//! (0x00 0x00) and below any other payload byte, so lexicographic order of
//! payloads is preserved, prefixes sort first, and fields can be
//! concatenated without ambiguity. Descending variants complement every
//! output byte, terminator and escapes included; the escape logic operates
//! on the pre-complement values.

use crate::{order::Order, util::at_least, EncodeSize, Error, Read, Write};
use bytes::{Buf, BufMut, Bytes};

const ESCAPE: u8 = 0x00;
const TERMINATOR: u8 = 0x00;
const ESCAPED_ZERO: u8 = 0xFF;

/// Writes one escaped, terminated field of raw payload bytes.
pub(crate) fn write_escaped<O: Order, B: BufMut>(payload: &[u8], buf: &mut B) {
    for &b in payload {
        if b == ESCAPE {
            buf.put_u8(O::byte(ESCAPE));
            buf.put_u8(O::byte(ESCAPED_ZERO));
        } else {
            buf.put_u8(O::byte(b));
        }
    }
    buf.put_u8(O::byte(ESCAPE));
    buf.put_u8(O::byte(TERMINATOR));
}

/// Exact encoded length of one escaped, terminated field.
pub(crate) fn escaped_size(payload: &[u8]) -> usize {
    payload.len() + payload.iter().filter(|&&b| b == ESCAPE).count() + 2
}

/// Reads one escaped field, consuming bytes up to and including the
/// terminator.
pub(crate) fn read_escaped<O: Order, B: Buf>(buf: &mut B) -> Result<Vec<u8>, Error> {
    let mut payload = Vec::new();
    loop {
        at_least(buf, 1)?;
        let b = O::byte(buf.get_u8());
        if b != ESCAPE {
            payload.push(b);
            continue;
        }
        at_least(buf, 1)?;
        match O::byte(buf.get_u8()) {
            TERMINATOR => return Ok(payload),
            ESCAPED_ZERO => payload.push(0x00),
            other => return Err(Error::InvalidEscape(other)),
        }
    }
}

impl Write for &[u8] {
    #[inline]
    fn write<O: Order>(&self, buf: &mut impl BufMut) {
        write_escaped::<O, _>(self, buf);
    }
}

impl EncodeSize for &[u8] {
    #[inline]
    fn encode_size(&self) -> usize {
        escaped_size(self)
    }
}

impl Write for Vec<u8> {
    #[inline]
    fn write<O: Order>(&self, buf: &mut impl BufMut) {
        write_escaped::<O, _>(self, buf);
    }
}

impl EncodeSize for Vec<u8> {
    #[inline]
    fn encode_size(&self) -> usize {
        escaped_size(self)
    }
}

impl Read for Vec<u8> {
    #[inline]
    fn read<O: Order>(buf: &mut impl Buf) -> Result<Self, Error> {
        read_escaped::<O, _>(buf)
    }
}

impl Write for Bytes {
    #[inline]
    fn write<O: Order>(&self, buf: &mut impl BufMut) {
        write_escaped::<O, _>(self, buf);
    }
}

impl EncodeSize for Bytes {
    #[inline]
    fn encode_size(&self) -> usize {
        escaped_size(self)
    }
}

impl Read for Bytes {
    #[inline]
    fn read<O: Order>(buf: &mut impl Buf) -> Result<Self, Error> {
        read_escaped::<O, _>(buf).map(Bytes::from)
    }
}
