//! Shared internal helpers

use crate::Error;
use bytes::Buf;

/// Returns an error if the buffer has fewer than `len` bytes remaining.
#[inline]
pub(crate) fn at_least(buf: &impl Buf, len: usize) -> Result<(), Error> {
    if buf.remaining() < len {
        return Err(Error::EndOfBuffer);
    }
    Ok(())
}
