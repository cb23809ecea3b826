#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use ordkey::{Ascending, Codec, Decode, Descending, Encode, EncodeSize};
use std::fmt::Debug;

// For every pair of same-typed values: both round trip exactly, encoded
// sizes are honest, and byte order of the encodings matches natural order
// (reversed for descending).
fn check_pair<T: Codec + Ord + Debug>(a: T, b: T) {
    let ea = a.encode::<Ascending>();
    let eb = b.encode::<Ascending>();
    assert_eq!(ea.len(), a.encode_size());
    assert_eq!(eb.len(), b.encode_size());
    assert_eq!(
        T::decode::<Ascending>(&ea[..]).expect("failed to decode encoded key"),
        a
    );
    assert_eq!(ea.cmp(&eb), a.cmp(&b));

    let da = a.encode::<Descending>();
    let db = b.encode::<Descending>();
    assert_eq!(da.len(), a.encode_size());
    assert_eq!(
        T::decode::<Descending>(&da[..]).expect("failed to decode descending key"),
        a
    );
    assert_eq!(da.cmp(&db), b.cmp(&a));
}

// Floats have no Ord; compare against the IEEE total order and require
// bit-exact round trips (NaN payloads included).
fn check_float_pair(a: f64, b: f64) {
    let ea = a.encode::<Ascending>();
    let eb = b.encode::<Ascending>();
    let decoded = f64::decode::<Ascending>(&ea[..]).expect("failed to decode f64 key");
    assert_eq!(decoded.to_bits(), a.to_bits());
    assert_eq!(ea.cmp(&eb), a.total_cmp(&b));

    let da = a.encode::<Descending>();
    let db = b.encode::<Descending>();
    assert_eq!(da.cmp(&db), b.total_cmp(&a));
}

// Arbitrary decode input must never panic; it either decodes or errors.
fn check_decode_garbage(data: &[u8]) {
    let _ = Vec::<u8>::decode::<Ascending>(data);
    let _ = String::decode::<Ascending>(data);
    let _ = Option::<i64>::decode::<Ascending>(data);
    let _ = <(i32, String)>::decode::<Ascending>(data);
    let _ = f64::decode::<Descending>(data);
}

#[derive(Arbitrary, Debug)]
enum FuzzInput {
    Bool(bool, bool),
    I8(i8, i8),
    I16(i16, i16),
    I32(i32, i32),
    I64(i64, i64),
    I128(i128, i128),
    U64(u64, u64),
    Char(char, char),
    F64(f64, f64),
    Bytes(Vec<u8>, Vec<u8>),
    Text(String, String),
    OptionalInt(Option<i32>, Option<i32>),
    OptionalText(Option<String>, Option<String>),
    Composite((i64, String), (i64, String)),
    Garbage(Vec<u8>),
}

fn fuzz(input: FuzzInput) {
    match input {
        FuzzInput::Bool(a, b) => check_pair(a, b),
        FuzzInput::I8(a, b) => check_pair(a, b),
        FuzzInput::I16(a, b) => check_pair(a, b),
        FuzzInput::I32(a, b) => check_pair(a, b),
        FuzzInput::I64(a, b) => check_pair(a, b),
        FuzzInput::I128(a, b) => check_pair(a, b),
        FuzzInput::U64(a, b) => check_pair(a, b),
        FuzzInput::Char(a, b) => check_pair(a, b),
        FuzzInput::F64(a, b) => check_float_pair(a, b),
        FuzzInput::Bytes(a, b) => check_pair(a, b),
        FuzzInput::Text(a, b) => check_pair(a, b),
        FuzzInput::OptionalInt(a, b) => check_pair(a, b),
        FuzzInput::OptionalText(a, b) => check_pair(a, b),
        FuzzInput::Composite(a, b) => check_pair(a, b),
        FuzzInput::Garbage(data) => check_decode_garbage(&data),
    }
}

fuzz_target!(|input: FuzzInput| {
    fuzz(input);
});
