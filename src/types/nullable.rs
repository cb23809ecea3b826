//! Nullable columns via `Option<T>`.
//!
//! One marker byte precedes the value: 0x00 for null (nothing follows),
//! 0x01 for a present value followed by its encoding. The null marker is
//! below every present marker, so null sorts below all values ascending;
//! the descending complement puts it above all values instead.

use crate::{order::Order, util::at_least, EncodeSize, Error, Read, Write};
use bytes::{Buf, BufMut};

const NONE: u8 = 0x00;
const SOME: u8 = 0x01;

impl<T: Write> Write for Option<T> {
    #[inline]
    fn write<O: Order>(&self, buf: &mut impl BufMut) {
        match self {
            None => buf.put_u8(O::byte(NONE)),
            Some(inner) => {
                buf.put_u8(O::byte(SOME));
                inner.write::<O>(buf);
            }
        }
    }
}

impl<T: EncodeSize> EncodeSize for Option<T> {
    #[inline]
    fn encode_size(&self) -> usize {
        match self {
            None => 1,
            Some(inner) => 1 + inner.encode_size(),
        }
    }
}

impl<T: Read> Read for Option<T> {
    #[inline]
    fn read<O: Order>(buf: &mut impl Buf) -> Result<Self, Error> {
        at_least(buf, 1)?;
        match O::byte(buf.get_u8()) {
            NONE => Ok(None),
            SOME => Ok(Some(T::read::<O>(buf)?)),
            marker => Err(Error::InvalidMarker(marker)),
        }
    }
}
