// SPDX-License-Identifier: Apache-2.0

//! Decoding single root values: numbers with saturation, floats, strings.

use core::cell::Cell;
use mapjson::{decode, Error, Slot};
use test_log::test;

fn string_contents(cells: &Cell<[u8]>) -> Vec<u8> {
    cells
        .as_slice_of_cells()
        .iter()
        .map(Cell::get)
        .take_while(|&byte| byte != 0)
        .collect()
}

macro_rules! saturation_case {
    ($ty:ident, $over:expr, $max:expr, $under:expr, $min:expr) => {
        paste::paste! {
            #[test]
            fn [<saturates_ $ty>]() {
                let n = Cell::new(0 as $ty);
                decode(&Slot::$ty(&n), $max).unwrap();
                assert_eq!(n.get(), <$ty>::MAX);
                decode(&Slot::$ty(&n), $over).unwrap();
                assert_eq!(n.get(), <$ty>::MAX);
                decode(&Slot::$ty(&n), $min).unwrap();
                assert_eq!(n.get(), <$ty>::MIN);
                decode(&Slot::$ty(&n), $under).unwrap();
                assert_eq!(n.get(), <$ty>::MIN);
            }
        }
    };
}

saturation_case!(i8, b"128", b"127", b"-129", b"-128");
saturation_case!(i16, b"32768", b"32767", b"-32769", b"-32768");
saturation_case!(i32, b"2147483648", b"2147483647", b"-2147483649", b"-2147483648");
saturation_case!(
    i64,
    b"9223372036854775808",
    b"9223372036854775807",
    b"-9223372036854775809",
    b"-9223372036854775808"
);

#[test]
fn plain_integers() {
    let n = Cell::new(0i8);
    for (json, expected) in [
        (&b"1"[..], 1i8),
        (b"64", 64),
        (b"127", 127),
        (b"-1", -1),
        (b"-64", -64),
        (b"-128", -128),
    ] {
        decode(&Slot::i8(&n), json).unwrap();
        assert_eq!(n.get(), expected, "input {json:?}");
    }

    let wide = Cell::new(0i64);
    decode(&Slot::i64(&wide), b"13371337").unwrap();
    assert_eq!(wide.get(), 13371337);
}

#[test]
fn floats_with_exponents() {
    let f = Cell::new(0.0f32);
    for (json, expected) in [
        (&b"3.1415926"[..], 3.1415926f32),
        (b"3.1415926e1", 31.415926),
        (b"3.1415926e+1", 31.415926),
        (b"3.1415926e-1", 0.31415926),
        (b"-3.1415926", -3.1415926),
        (b"-3.1415926e+1", -31.415926),
    ] {
        decode(&Slot::f32(&f), json).unwrap();
        assert!((f.get() - expected).abs() < 1e-6, "input {json:?}");
    }

    let d = Cell::new(0.0f64);
    for (json, expected) in [
        (&b"2.718281828459"[..], 2.718281828459f64),
        (b"2.718281828459e1", 27.18281828459),
        (b"2.718281828459e-1", 0.2718281828459),
        (b"-2.718281828459e+1", -27.18281828459),
        (b"0.007e3", 7.0),
        (b"57.77e-1", 5.777),
    ] {
        decode(&Slot::f64(&d), json).unwrap();
        assert!((d.get() - expected).abs() < 1e-9, "input {json:?}");
    }
}

#[test]
fn oversized_float_clamps_instead_of_infinity() {
    let f = Cell::new(0.0f32);
    decode(&Slot::f32(&f), b"1e300").unwrap();
    assert_eq!(f.get(), f32::MAX);
    assert!(f.get().is_finite());
}

#[test]
fn strings_in_both_quote_styles() {
    let buf = Cell::new([0u8; 64]);
    decode(&Slot::string(&buf), b"'Hello Json!'").unwrap();
    assert_eq!(string_contents(&buf), b"Hello Json!");

    decode(&Slot::string(&buf), b"\"Hello Json!\"").unwrap();
    assert_eq!(string_contents(&buf), b"Hello Json!");

    decode(&Slot::string(&buf), b"'!'").unwrap();
    assert_eq!(string_contents(&buf), b"!");
}

#[test]
fn escape_sequences_decode() {
    let buf = Cell::new([0u8; 64]);
    decode(&Slot::string(&buf), b"'Hello\\nJson!'").unwrap();
    assert_eq!(string_contents(&buf), b"Hello\nJson!");
}

#[test]
fn long_string_truncates_to_capacity() {
    let buf = Cell::new([0u8; 6]);
    decode(&Slot::string(&buf), b"'abcdefghij'").unwrap();
    assert_eq!(string_contents(&buf), b"abcde");
}

#[test]
fn invalid_single_values() {
    let n = Cell::new(0i8);
    let root = Slot::i8(&n);
    assert_eq!(decode(&root, b""), Err(Error::InvalidArgument));
    for json in [
        &b"."[..],
        b",",
        b"e",
        b"e1",
        b" ",
        b"\n\t\r",
        b"1.",
        b"+1",
        b"1.2.3",
        b"1 2",
        b"1, 2",
    ] {
        assert_eq!(decode(&root, json), Err(Error::Syntax), "input {json:?}");
    }
}

#[test]
fn bareword_literals_are_rejected() {
    let n = Cell::new(0i8);
    for json in [&b"true"[..], b"false", b"null"] {
        assert_eq!(
            decode(&Slot::i8(&n), json),
            Err(Error::Syntax),
            "input {json:?}"
        );
    }
}

#[test]
fn unterminated_strings_are_rejected() {
    let buf = Cell::new([0u8; 16]);
    let root = Slot::string(&buf);
    for json in [&b"'"[..], b"\"", b" ' "] {
        assert_eq!(decode(&root, json), Err(Error::Syntax), "input {json:?}");
    }
}
