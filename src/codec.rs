//! Core key codec traits

use crate::{error::Error, order::Order};
use bytes::{Buf, BufMut, BytesMut};

/// Trait for types that can be written (encoded) to a buffer as a key field.
pub trait Write {
    /// Encodes this value by writing to a buffer with direction `O`.
    ///
    /// Implementations panic if the buffer doesn't have enough capacity,
    /// per the `BufMut` contract. Callers size buffers with
    /// [`EncodeSize::encode_size`].
    fn write<O: Order>(&self, buf: &mut impl BufMut);
}

/// Trait for types that know the exact length of their encoding.
pub trait EncodeSize {
    /// Returns the encoded length of this value.
    ///
    /// This MUST return the exact number of bytes written by
    /// [`Write::write`]. The length is the same for both directions: the
    /// descending transform complements bytes, it never adds any.
    fn encode_size(&self) -> usize;
}

/// Trait for types with a known, fixed encoded length.
pub trait FixedSize {
    /// The length of the encoded value.
    const SIZE: usize;
}

/// Trait for types that can be encoded to a buffer.
pub trait Encode: Write + EncodeSize {
    /// Encodes a value to a `BytesMut` buffer sized by `encode_size()`.
    ///
    /// Panics if the `write` implementation does not write the expected
    /// number of bytes.
    ///
    /// (Provided method).
    fn encode<O: Order>(&self) -> BytesMut {
        let size = self.encode_size();
        let mut buf = BytesMut::with_capacity(size);
        self.write::<O>(&mut buf);
        assert_eq!(buf.len(), size, "write() did not write expected bytes");
        buf
    }
}

// Automatically implement `Encode` for types that implement `Write` and
// `EncodeSize`.
impl<T: Write + EncodeSize> Encode for T {}

/// Trait for types that can be read/decoded from a buffer.
pub trait Read: Sized {
    /// Reads a value from the buffer with direction `O`, consuming exactly
    /// the bytes of one encoded field. The buffer cursor advance is the
    /// bytes-consumed count.
    ///
    /// Returns an error if decoding fails (e.g., malformed data, not enough
    /// bytes).
    fn read<O: Order>(buf: &mut impl Buf) -> Result<Self, Error>;
}

/// Trait for types that can be decoded from a buffer, ensuring the entire
/// buffer is consumed.
pub trait Decode: Read {
    /// Decodes a value from a buffer, ensuring the buffer is fully consumed.
    ///
    /// (Provided method).
    fn decode<O: Order>(mut buf: impl Buf) -> Result<Self, Error> {
        let result = Self::read::<O>(&mut buf)?;
        let remaining = buf.remaining();
        if remaining > 0 {
            return Err(Error::ExtraData(remaining));
        }
        Ok(result)
    }
}

// Automatically implement `Decode` for types that implement `Read`.
impl<T: Read> Decode for T {}

/// Trait for types that can be encoded and decoded.
pub trait Codec: Encode + Decode {}

// Automatically implement `Codec` for types that implement `Encode` and
// `Decode`.
impl<T: Encode + Decode> Codec for T {}
