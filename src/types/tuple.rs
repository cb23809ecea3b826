//! Composite keys as tuples.
//!
//! A tuple encodes as the plain concatenation of its fields' encodings in
//! declaration order, no separators: every field encoding is fixed-width or
//! self-terminating, so the boundaries are unambiguous. Byte-wise comparison
//! of two encoded tuples equals lexicographic field-by-field comparison,
//! which is exactly the multi-column index key contract.

use crate::{order::Order, EncodeSize, Error, FixedSize, Read, Write};
use bytes::{Buf, BufMut};
use paste::paste;

macro_rules! impl_key_for_tuple {
    ($($index:literal),*) => {
        paste! {
            impl<$( [<T $index>]: Write ),*> Write for ( $( [<T $index>], )* ) {
                #[inline]
                fn write<O: Order>(&self, buf: &mut impl BufMut) {
                    $( self.$index.write::<O>(buf); )*
                }
            }

            impl<$( [<T $index>]: EncodeSize ),*> EncodeSize for ( $( [<T $index>], )* ) {
                #[inline]
                fn encode_size(&self) -> usize {
                    0 $( + self.$index.encode_size() )*
                }
            }

            impl<$( [<T $index>]: Read ),*> Read for ( $( [<T $index>], )* ) {
                #[inline]
                fn read<O: Order>(buf: &mut impl Buf) -> Result<Self, Error> {
                    Ok(( $( [<T $index>]::read::<O>(buf)?, )* ))
                }
            }

            impl<$( [<T $index>]: FixedSize ),*> FixedSize for ( $( [<T $index>], )* ) {
                const SIZE: usize = 0 $( + [<T $index>]::SIZE )*;
            }
        }
    };
}

// Generate implementations for tuple sizes 1 through 12
impl_key_for_tuple!(0);
impl_key_for_tuple!(0, 1);
impl_key_for_tuple!(0, 1, 2);
impl_key_for_tuple!(0, 1, 2, 3);
impl_key_for_tuple!(0, 1, 2, 3, 4);
impl_key_for_tuple!(0, 1, 2, 3, 4, 5);
impl_key_for_tuple!(0, 1, 2, 3, 4, 5, 6);
impl_key_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7);
impl_key_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7, 8);
impl_key_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7, 8, 9);
impl_key_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10);
impl_key_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11);
