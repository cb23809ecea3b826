//! Order-preserving binary key encoding.
//!
//! # Overview
//!
//! A codec that serializes typed column values into byte sequences whose
//! unsigned lexicographic order matches the values' natural order. Keys built
//! this way can be compared with a single `memcmp`, which is what B-tree and
//! LSM index structures want: no type information is needed at comparison
//! time.
//!
//! Every encoding exists in an ascending and a descending variant, selected
//! by a zero-sized [`Order`] type parameter. The descending variant is the
//! ascending byte sequence with every byte complemented, so sorted byte order
//! is exactly reversed. The encoder and decoder for a column must agree on
//! the direction; no format tag is embedded.
//!
//! # Supported Types
//!
//! - Fixed width: `bool`, `i8`..`i128`, `u8`..`u128`, `char`, `f32`, `f64`,
//!   and `[u8; N]`
//! - Variable length (self-terminating): `&[u8]`, `Vec<u8>`, `Bytes`,
//!   `&str`, `String`
//! - Nullable columns: `Option<T>`, with null ordered below every value
//!   (ascending) or above (descending)
//! - Composite keys: tuples up to 12 fields, encoded as the plain
//!   concatenation of their fields
//!
//! Variable-length fields embed an escape/terminator scheme instead of a
//! length prefix, so fields can be concatenated into one composite key
//! without corrupting the ordering.
//!
//! # Example
//!
//! ```
//! use ordkey::{Ascending, Decode, Encode};
//!
//! // Composite (i64, text) keys: compare bytes, get tuple order.
//! let a = (42i64, "apple").encode::<Ascending>();
//! let b = (42i64, "banana").encode::<Ascending>();
//! let c = (43i64, "apple").encode::<Ascending>();
//! assert!(a < b);
//! assert!(b < c);
//!
//! // Keys decode back exactly.
//! let (id, name) = <(i64, String)>::decode::<Ascending>(a).unwrap();
//! assert_eq!(id, 42);
//! assert_eq!(name, "apple");
//! ```
//!
//! # Example (Descending)
//!
//! ```
//! use ordkey::{Descending, Encode};
//!
//! // Descending keys sort newest-first.
//! let newer = 1700000000i64.encode::<Descending>();
//! let older = 1600000000i64.encode::<Descending>();
//! assert!(newer < older);
//! ```
//!
//! # Example (Nullable)
//!
//! ```
//! use ordkey::{Ascending, Encode};
//!
//! // Null sorts below every present value in ascending order.
//! let null: Option<i32> = None;
//! assert!(null.encode::<Ascending>() < Some(i32::MIN).encode::<Ascending>());
//! ```

pub mod codec;
pub mod error;
pub mod order;
pub mod types;
mod util;

// Re-export main types and traits
pub use codec::{Codec, Decode, Encode, EncodeSize, FixedSize, Read, Write};
pub use error::Error;
pub use order::{Ascending, Descending, Order};
