// SPDX-License-Identifier: Apache-2.0

//! Encoding mappings back to JSON text.

use core::cell::Cell;
use mapjson::{encode, Attr, Error, Slot};
use test_log::test;

fn set_string(cells: &Cell<[u8]>, text: &[u8]) {
    let cells = cells.as_slice_of_cells();
    for (cell, &byte) in cells.iter().zip(text) {
        cell.set(byte);
    }
    cells[text.len()].set(0);
}

#[test]
fn mixed_array_with_object() {
    let n1 = Cell::new(5i32);
    let n2 = Cell::new(7i32);
    let word1 = Cell::new([0u8; 16]);
    let word2 = Cell::new([0u8; 16]);
    set_string(&word1, b"Hello");
    set_string(&word2, b"json");
    let f = Cell::new(2.5f32);

    let attrs = [
        Attr::new("word1", Slot::string(&word1)),
        Attr::new("word2", Slot::string(&word2)),
    ];
    let elements = [
        Slot::i32(&n1),
        Slot::i32(&n2),
        Slot::object(&attrs),
        Slot::f32(&f),
    ];
    let root = Slot::array(&elements);

    let mut buf = [0u8; 128];
    let len = encode(&mut buf, &root).unwrap();
    assert_eq!(
        &buf[..len],
        &b"[5,7,{word1:\"Hello\",word2:\"json\"},2.5]"[..]
    );
    // Always NUL-terminated within the bound.
    assert_eq!(buf[len], 0);
}

#[test]
fn empty_containers() {
    let mut buf = [0u8; 16];
    let len = encode(&mut buf, &Slot::array(&[])).unwrap();
    assert_eq!(&buf[..len], b"[]");
    let len = encode(&mut buf, &Slot::object(&[])).unwrap();
    assert_eq!(&buf[..len], b"{}");
}

#[test]
fn truncation_is_silent() {
    let n1 = Cell::new(1000i32);
    let n2 = Cell::new(2000i32);
    let elements = [Slot::i32(&n1), Slot::i32(&n2)];
    let root = Slot::array(&elements);
    let mut buf = [0u8; 6];
    let len = encode(&mut buf, &root).unwrap();
    assert_eq!(len, 5);
    assert_eq!(&buf[..6], b"[1000\0");
}

#[test]
fn zero_sized_buffer_fails() {
    let n = Cell::new(0i32);
    let mut buf: [u8; 0] = [];
    assert_eq!(
        encode(&mut buf, &Slot::i32(&n)),
        Err(Error::InvalidArgument)
    );
}

#[test]
fn string_payload_is_not_escaped() {
    // Deliberate asymmetry with the decoder: payload bytes are trusted to
    // be JSON-safe and pass through verbatim.
    let word = Cell::new([0u8; 16]);
    set_string(&word, b"a/b");
    let mut buf = [0u8; 16];
    let len = encode(&mut buf, &Slot::string(&word)).unwrap();
    assert_eq!(&buf[..len], b"\"a/b\"");
}
