//! Implementations of the key codec for supported column types.
//!
//! Fixed-width types live in [`primitives`], nullable columns in
//! [`nullable`], self-terminating variable-length fields in [`bytes`] and
//! [`string`], and composite-key tuples in [`tuple`].

pub mod bytes;
pub mod nullable;
pub mod primitives;
pub mod string;
pub mod tuple;
