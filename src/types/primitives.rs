//! Key codec implementations for Rust primitive types.
//!
//! # Order transforms
//!
//! All fixed-width values are written big-endian so the most significant
//! byte compares first. On top of that:
//!
//! - Unsigned integers need no further transform.
//! - Signed integers have the sign bit flipped, mapping the two's-complement
//!   range onto `0x00.. = MIN` through `0xFF.. = MAX`.
//! - Floats reinterpret the IEEE-754 bits: negative values have all bits
//!   complemented, non-negative values have the sign bit set. The result is
//!   the IEEE total order (`f64::total_cmp`): negative NaNs below `-inf`,
//!   positive NaNs above `+inf`, `-0.0` strictly below `0.0`. NaN payload
//!   bits survive the round trip unchanged.
//! - `char` is its code point as a `u32`; natural `char` order is code-point
//!   order.
//! - `[u8; N]` is already in key order and passes through.
//!
//! Descending variants XOR every output byte with 0xFF.

use crate::{order::Order, util::at_least, EncodeSize, Error, FixedSize, Read, Write};
use bytes::{Buf, BufMut};

// Repeats the direction mask across every byte of the word.
macro_rules! wide_mask {
    ($ut:ty, $order:ty) => {
        <$ut>::from(<$order>::MASK) * (<$ut>::MAX / 0xFF)
    };
}

// Integer implementation. `$sign` is the XOR applied before the direction
// mask: the sign bit for signed types, zero for unsigned types.
macro_rules! impl_int {
    ($type:ty, $unsigned:ty, $read_method:ident, $write_method:ident, $sign:expr) => {
        impl Write for $type {
            #[inline]
            fn write<O: Order>(&self, buf: &mut impl BufMut) {
                let bits = (*self as $unsigned) ^ $sign;
                buf.$write_method(bits ^ wide_mask!($unsigned, O));
            }
        }

        impl Read for $type {
            #[inline]
            fn read<O: Order>(buf: &mut impl Buf) -> Result<Self, Error> {
                at_least(buf, std::mem::size_of::<$type>())?;
                let bits = buf.$read_method() ^ wide_mask!($unsigned, O);
                Ok((bits ^ $sign) as $type)
            }
        }

        impl FixedSize for $type {
            const SIZE: usize = std::mem::size_of::<$type>();
        }

        impl EncodeSize for $type {
            #[inline]
            fn encode_size(&self) -> usize {
                Self::SIZE
            }
        }
    };
}

macro_rules! sign_bit {
    ($unsigned:ty) => {
        (<$unsigned>::MAX >> 1) + 1
    };
}

impl_int!(u8, u8, get_u8, put_u8, 0);
impl_int!(u16, u16, get_u16, put_u16, 0);
impl_int!(u32, u32, get_u32, put_u32, 0);
impl_int!(u64, u64, get_u64, put_u64, 0);
impl_int!(u128, u128, get_u128, put_u128, 0);
impl_int!(i8, u8, get_u8, put_u8, sign_bit!(u8));
impl_int!(i16, u16, get_u16, put_u16, sign_bit!(u16));
impl_int!(i32, u32, get_u32, put_u32, sign_bit!(u32));
impl_int!(i64, u64, get_u64, put_u64, sign_bit!(u64));
impl_int!(i128, u128, get_u128, put_u128, sign_bit!(u128));

// Float implementation
macro_rules! impl_float {
    ($type:ty, $unsigned:ty, $read_method:ident, $write_method:ident) => {
        impl Write for $type {
            #[inline]
            fn write<O: Order>(&self, buf: &mut impl BufMut) {
                const SIGN: $unsigned = sign_bit!($unsigned);
                let bits = self.to_bits();
                let ordered = if bits & SIGN != 0 { !bits } else { bits | SIGN };
                buf.$write_method(ordered ^ wide_mask!($unsigned, O));
            }
        }

        impl Read for $type {
            #[inline]
            fn read<O: Order>(buf: &mut impl Buf) -> Result<Self, Error> {
                at_least(buf, std::mem::size_of::<$type>())?;
                const SIGN: $unsigned = sign_bit!($unsigned);
                let ordered = buf.$read_method() ^ wide_mask!($unsigned, O);
                let bits = if ordered & SIGN != 0 {
                    ordered ^ SIGN
                } else {
                    !ordered
                };
                Ok(<$type>::from_bits(bits))
            }
        }

        impl FixedSize for $type {
            const SIZE: usize = std::mem::size_of::<$type>();
        }

        impl EncodeSize for $type {
            #[inline]
            fn encode_size(&self) -> usize {
                Self::SIZE
            }
        }
    };
}

impl_float!(f32, u32, get_u32, put_u32);
impl_float!(f64, u64, get_u64, put_u64);

// Bool implementation
impl Write for bool {
    #[inline]
    fn write<O: Order>(&self, buf: &mut impl BufMut) {
        buf.put_u8(O::byte(u8::from(*self)));
    }
}

impl Read for bool {
    #[inline]
    fn read<O: Order>(buf: &mut impl Buf) -> Result<Self, Error> {
        at_least(buf, 1)?;
        match O::byte(buf.get_u8()) {
            0 => Ok(false),
            1 => Ok(true),
            b => Err(Error::InvalidBool(b)),
        }
    }
}

impl FixedSize for bool {
    const SIZE: usize = 1;
}

impl EncodeSize for bool {
    #[inline]
    fn encode_size(&self) -> usize {
        Self::SIZE
    }
}

// Char implementation
impl Write for char {
    #[inline]
    fn write<O: Order>(&self, buf: &mut impl BufMut) {
        buf.put_u32((*self as u32) ^ wide_mask!(u32, O));
    }
}

impl Read for char {
    #[inline]
    fn read<O: Order>(buf: &mut impl Buf) -> Result<Self, Error> {
        at_least(buf, 4)?;
        let bits = buf.get_u32() ^ wide_mask!(u32, O);
        char::from_u32(bits).ok_or(Error::InvalidChar(bits))
    }
}

impl FixedSize for char {
    const SIZE: usize = 4;
}

impl EncodeSize for char {
    #[inline]
    fn encode_size(&self) -> usize {
        Self::SIZE
    }
}

// Constant-size array implementation. Arrays compare lexicographically, which
// is already byte order, so only the direction mask applies.
impl<const N: usize> Write for [u8; N] {
    #[inline]
    fn write<O: Order>(&self, buf: &mut impl BufMut) {
        for &b in self {
            buf.put_u8(O::byte(b));
        }
    }
}

impl<const N: usize> Read for [u8; N] {
    #[inline]
    fn read<O: Order>(buf: &mut impl Buf) -> Result<Self, Error> {
        at_least(buf, N)?;
        let mut dst = [0u8; N];
        buf.copy_to_slice(&mut dst);
        for b in &mut dst {
            *b = O::byte(*b);
        }
        Ok(dst)
    }
}

impl<const N: usize> FixedSize for [u8; N] {
    const SIZE: usize = N;
}

impl<const N: usize> EncodeSize for [u8; N] {
    #[inline]
    fn encode_size(&self) -> usize {
        N
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Ascending, Decode, Descending, Encode, EncodeSize};
    use paste::paste;

    // Round-trip and order-preservation tests per numeric type.
    macro_rules! impl_num_test {
        ($type:ty) => {
            paste! {
                #[test]
                fn [<test_ $type>]() {
                    let expected_len = std::mem::size_of::<$type>();
                    let values: [$type; 5] =
                        [0 as $type, 1 as $type, 42 as $type, <$type>::MAX, <$type>::MIN];
                    for value in values.iter() {
                        let encoded = value.encode::<Ascending>();
                        assert_eq!(encoded.len(), expected_len);
                        assert_eq!(value.encode_size(), expected_len);
                        let decoded = <$type>::decode::<Ascending>(encoded).unwrap();
                        assert_eq!(*value, decoded);

                        let encoded = value.encode::<Descending>();
                        let decoded = <$type>::decode::<Descending>(encoded).unwrap();
                        assert_eq!(*value, decoded);
                    }

                    // Pairwise order preservation, both directions.
                    let mut sorted = values;
                    sorted.sort();
                    for a in sorted.iter() {
                        for b in sorted.iter() {
                            let (ea, eb) =
                                (a.encode::<Ascending>(), b.encode::<Ascending>());
                            assert_eq!(ea.cmp(&eb), a.cmp(b), "{} vs {}", a, b);
                            let (da, db) =
                                (a.encode::<Descending>(), b.encode::<Descending>());
                            assert_eq!(da.cmp(&db), b.cmp(a), "{} vs {} desc", a, b);
                        }
                    }
                }
            }
        };
    }
    impl_num_test!(u8);
    impl_num_test!(u16);
    impl_num_test!(u32);
    impl_num_test!(u64);
    impl_num_test!(u128);
    impl_num_test!(i8);
    impl_num_test!(i16);
    impl_num_test!(i32);
    impl_num_test!(i64);
    impl_num_test!(i128);

    #[test]
    fn test_signed_sequence_orders() {
        // -5, 0, 5 must decode back in order and their encodings must sort
        // the same way under plain byte comparison.
        let values = [-5i64, 0, 5];
        let encoded: Vec<_> = values.iter().map(|v| v.encode::<Ascending>()).collect();
        assert!(encoded[0] < encoded[1]);
        assert!(encoded[1] < encoded[2]);
        let decoded: Vec<i64> = encoded
            .into_iter()
            .map(|e| i64::decode::<Ascending>(e).unwrap())
            .collect();
        assert_eq!(decoded, values);

        let encoded: Vec<_> = values.iter().map(|v| v.encode::<Descending>()).collect();
        assert!(encoded[0] > encoded[1]);
        assert!(encoded[1] > encoded[2]);
    }

    #[test]
    fn test_bool() {
        assert!(false.encode::<Ascending>() < true.encode::<Ascending>());
        assert!(false.encode::<Descending>() > true.encode::<Descending>());
        for value in [true, false] {
            let encoded = value.encode::<Ascending>();
            assert_eq!(encoded.len(), 1);
            assert_eq!(bool::decode::<Ascending>(encoded).unwrap(), value);
            let encoded = value.encode::<Descending>();
            assert_eq!(bool::decode::<Descending>(encoded).unwrap(), value);
        }
        let bad = bool::decode::<Ascending>(&[0x02][..]);
        assert!(matches!(bad, Err(Error::InvalidBool(0x02))));
    }

    #[test]
    fn test_char() {
        let values = ['\0', 'A', 'é', 'あ', '\u{10FFFF}'];
        for window in values.windows(2) {
            assert!(window[0].encode::<Ascending>() < window[1].encode::<Ascending>());
            assert!(window[0].encode::<Descending>() > window[1].encode::<Descending>());
        }
        for value in values {
            assert_eq!(
                char::decode::<Ascending>(value.encode::<Ascending>()).unwrap(),
                value
            );
            assert_eq!(
                char::decode::<Descending>(value.encode::<Descending>()).unwrap(),
                value
            );
        }

        // Surrogate code points are not scalar values.
        let bad = char::decode::<Ascending>(&0xD800u32.to_be_bytes()[..]);
        assert!(matches!(bad, Err(Error::InvalidChar(0xD800))));
    }

    #[test]
    fn test_float_total_order() {
        let values = [
            f64::NEG_INFINITY,
            f64::MIN,
            -1.5,
            -f64::MIN_POSITIVE,
            -0.0,
            0.0,
            f64::MIN_POSITIVE,
            1.5,
            f64::MAX,
            f64::INFINITY,
            f64::NAN,
        ];
        for window in values.windows(2) {
            let (a, b) = (window[0], window[1]);
            assert!(
                a.encode::<Ascending>() < b.encode::<Ascending>(),
                "{} !< {}",
                a,
                b
            );
            assert!(
                a.encode::<Descending>() > b.encode::<Descending>(),
                "{} !> {} desc",
                a,
                b
            );
        }
    }

    #[test]
    fn test_float_signed_zero() {
        // Signed zeros are distinct keys and -0.0 sorts strictly first.
        assert!((-0.0f64).encode::<Ascending>() < 0.0f64.encode::<Ascending>());
        let decoded = f64::decode::<Ascending>((-0.0f64).encode::<Ascending>()).unwrap();
        assert!(decoded == 0.0 && decoded.is_sign_negative());
        let decoded = f64::decode::<Ascending>(0.0f64.encode::<Ascending>()).unwrap();
        assert!(decoded == 0.0 && decoded.is_sign_positive());
    }

    #[test]
    fn test_float_nan() {
        // NaN bit patterns survive the round trip; a negative NaN sorts below
        // -inf and a positive NaN above +inf.
        let quiet = f64::NAN;
        let negative = f64::from_bits(quiet.to_bits() | (1u64 << 63));
        let payload = f64::from_bits(quiet.to_bits() | 0xDEAD);

        for nan in [quiet, negative, payload] {
            let decoded = f64::decode::<Ascending>(nan.encode::<Ascending>()).unwrap();
            assert_eq!(decoded.to_bits(), nan.to_bits());
        }
        assert!(negative.encode::<Ascending>() < f64::NEG_INFINITY.encode::<Ascending>());
        assert!(quiet.encode::<Ascending>() > f64::INFINITY.encode::<Ascending>());
    }

    #[test]
    fn test_float_matches_total_cmp() {
        let values = [
            f32::NEG_INFINITY,
            -1.0f32,
            -0.0,
            0.0,
            1.0,
            f32::INFINITY,
            f32::NAN,
            -f32::NAN,
        ];
        for a in values {
            for b in values {
                let (ea, eb) = (a.encode::<Ascending>(), b.encode::<Ascending>());
                assert_eq!(ea.cmp(&eb), a.total_cmp(&b), "{} vs {}", a, b);
            }
        }
    }

    #[test]
    fn test_byte_array() {
        let values = [0x00u8, 0x42, 0xFF];
        let encoded = values.encode::<Ascending>();
        assert_eq!(encoded, &[0x00, 0x42, 0xFF][..]);
        assert_eq!(<[u8; 3]>::decode::<Ascending>(encoded).unwrap(), values);

        let encoded = values.encode::<Descending>();
        assert_eq!(encoded, &[0xFF, 0xBD, 0x00][..]);
        assert_eq!(<[u8; 3]>::decode::<Descending>(encoded).unwrap(), values);
    }

    #[test]
    fn test_conformity() {
        // Bool
        assert_eq!(false.encode::<Ascending>(), &[0x00][..]);
        assert_eq!(true.encode::<Ascending>(), &[0x01][..]);
        assert_eq!(false.encode::<Descending>(), &[0xFF][..]);
        assert_eq!(true.encode::<Descending>(), &[0xFE][..]);

        // 8-bit integers
        assert_eq!(0i8.encode::<Ascending>(), &[0x80][..]);
        assert_eq!((-1i8).encode::<Ascending>(), &[0x7F][..]);
        assert_eq!(i8::MIN.encode::<Ascending>(), &[0x00][..]);
        assert_eq!(i8::MAX.encode::<Ascending>(), &[0xFF][..]);
        assert_eq!(0i8.encode::<Descending>(), &[0x7F][..]);

        // 32-bit integers
        assert_eq!(0i32.encode::<Ascending>(), &[0x80, 0x00, 0x00, 0x00][..]);
        assert_eq!(
            0x12345678i32.encode::<Ascending>(),
            &[0x92, 0x34, 0x56, 0x78][..]
        );
        assert_eq!((-1i32).encode::<Ascending>(), &[0x7F, 0xFF, 0xFF, 0xFF][..]);
        assert_eq!(i32::MIN.encode::<Ascending>(), &[0x00, 0x00, 0x00, 0x00][..]);
        assert_eq!(i32::MAX.encode::<Ascending>(), &[0xFF, 0xFF, 0xFF, 0xFF][..]);

        // 64-bit integers
        assert_eq!(
            5i64.encode::<Ascending>(),
            &[0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x05][..]
        );
        assert_eq!(
            (-5i64).encode::<Ascending>(),
            &[0x7F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFB][..]
        );
        assert_eq!(
            5i64.encode::<Descending>(),
            &[0x7F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFA][..]
        );

        // Unsigned passthrough
        assert_eq!(0xABCDu16.encode::<Ascending>(), &[0xAB, 0xCD][..]);
        assert_eq!(0xABCDu16.encode::<Descending>(), &[0x54, 0x32][..]);

        // 32-bit floats: positive values get the sign bit set, negative
        // values are fully complemented.
        assert_eq!(1.0f32.encode::<Ascending>(), &[0xBF, 0x80, 0x00, 0x00][..]);
        assert_eq!(
            (-1.0f32).encode::<Ascending>(),
            &[0x40, 0x7F, 0xFF, 0xFF][..]
        );
        assert_eq!(0.0f32.encode::<Ascending>(), &[0x80, 0x00, 0x00, 0x00][..]);
        assert_eq!(
            (-0.0f32).encode::<Ascending>(),
            &[0x7F, 0xFF, 0xFF, 0xFF][..]
        );

        // 64-bit floats
        assert_eq!(
            1.0f64.encode::<Ascending>(),
            &[0xBF, 0xF0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00][..]
        );
        assert_eq!(
            (-1.0f64).encode::<Ascending>(),
            &[0x40, 0x0F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF][..]
        );

        // Char
        assert_eq!('A'.encode::<Ascending>(), &[0x00, 0x00, 0x00, 0x41][..]);
        assert_eq!('A'.encode::<Descending>(), &[0xFF, 0xFF, 0xFF, 0xBE][..]);
    }
}
