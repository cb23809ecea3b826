//! Sort direction markers.
//!
//! Every encode/decode operation is parameterized by an [`Order`]: either
//! [`Ascending`] or [`Descending`]. Ascending is the base format; descending
//! complements every emitted byte, which exactly reverses unsigned
//! lexicographic order. The transform is an involution, so decoding applies
//! the same mask.

/// Sort direction of an encoded key.
///
/// Sealed: the only implementors are [`Ascending`] and [`Descending`]. The
/// direction is baked into the bytes, not tagged, so a column must be decoded
/// with the same direction it was encoded with.
pub trait Order: sealed::Sealed + 'static {
    /// XOR mask applied to every encoded byte (0x00 ascending, 0xFF
    /// descending).
    const MASK: u8;

    /// Applies the direction transform to a single byte.
    #[inline]
    fn byte(b: u8) -> u8 {
        b ^ Self::MASK
    }
}

/// Sorted byte order matches natural value order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Ascending;

/// Sorted byte order is the exact reverse of natural value order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Descending;

impl Order for Ascending {
    const MASK: u8 = 0x00;
}

impl Order for Descending {
    const MASK: u8 = 0xFF;
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Ascending {}
    impl Sealed for super::Descending {}
}
