//! Upstream: buffer (npm polyfill), test/methods.js.
//!
//! Method-level behavior matrix: toJSON, copy (including in-place overlap),
//! sequential write offsets, concat, fill, slice, and lastIndexOf.

use byteview::{ByteBuf, Encoding};
use serde_json::json;

#[test]
fn buffer_to_json() {
    let buf = ByteBuf::from_slice(&[1, 2, 3, 4]);
    assert_eq!(buf.to_json(), json!({"type": "Buffer", "data": [1, 2, 3, 4]}));
    assert_eq!(ByteBuf::from_json(&buf.to_json()).unwrap(), buf);
}

#[test]
fn buffer_copy() {
    // copied from nodejs.org example
    let buf1 = ByteBuf::alloc(26);
    let buf2 = ByteBuf::alloc(26);
    for i in 0..26 {
        buf1.set(i, i as u8 + 97); // 97 is ASCII a
        buf2.set(i, 33); // ASCII !
    }
    buf1.copy(&buf2, 8, 16, Some(20));
    assert_eq!(
        buf2.to_text(Encoding::Ascii, 0, Some(25)),
        "!!!!!!!!qrst!!!!!!!!!!!!!"
    );
}

#[test]
fn write_offset_returns_are_correct() {
    let buf = ByteBuf::alloc(16);
    assert_eq!(buf.write_u32_le(0, 0).unwrap(), 4);
    assert_eq!(buf.write_u16_le(0, 4).unwrap(), 6);
    assert_eq!(buf.write_u8(0, 6).unwrap(), 7);
    assert_eq!(buf.write_i8(0, 7).unwrap(), 8);
    assert_eq!(buf.write_f64_le(0.0, 8).unwrap(), 16);
}

#[test]
fn concat_a_varying_number_of_buffers() {
    let zero: [ByteBuf; 0] = [];
    let one = [ByteBuf::from("asdf")];
    let long: Vec<ByteBuf> = (0..10).map(|_| ByteBuf::from("asdf")).collect();

    let flat_zero = ByteBuf::concat(&zero, None);
    let flat_one = ByteBuf::concat(&one, None);
    let flat_long = ByteBuf::concat(&long, None);
    let flat_long_len = ByteBuf::concat(&long, Some(40));

    assert_eq!(flat_zero.len(), 0);
    assert_eq!(flat_one.to_text(Encoding::Utf8, 0, None), "asdf");
    assert_eq!(flat_one, one[0]);
    assert_eq!(flat_long.to_text(Encoding::Utf8, 0, None), "asdf".repeat(10));
    assert_eq!(
        flat_long_len.to_text(Encoding::Utf8, 0, None),
        "asdf".repeat(10)
    );
}

#[test]
fn concat_works_on_raw_byte_arrays() {
    let result = ByteBuf::concat(&[[1u8, 2], [3, 4]], None);
    assert_eq!(result, ByteBuf::from_slice(&[1, 2, 3, 4]));
}

#[test]
fn concat_works_on_raw_byte_arrays_for_smaller_provided_total_length() {
    let result = ByteBuf::concat(&[[1u8, 2], [3, 4]], Some(3));
    assert_eq!(result, ByteBuf::from_slice(&[1, 2, 3]));
}

#[test]
fn fill() {
    let buf = ByteBuf::alloc(10);
    buf.fill_byte(2, 0, None);
    assert_eq!(buf.to_text(Encoding::Hex, 0, None), "02020202020202020202");
}

#[test]
fn fill_string() {
    let buf = ByteBuf::alloc(10);
    buf.fill_text("abc", 0, None, Encoding::Utf8).unwrap();
    assert_eq!(buf.to_text(Encoding::Utf8, 0, None), "abcabcabca");
    // Two-byte character: five whole repetitions fit exactly.
    buf.fill_text("է", 0, None, Encoding::Utf8).unwrap();
    assert_eq!(buf.to_text(Encoding::Utf8, 0, None), "էէէէէ");
}

#[test]
fn copy_empty_source_range() {
    let source = ByteBuf::from_slice(&[42]);
    let destination = ByteBuf::from_slice(&[43]);
    assert_eq!(source.copy(&destination, 0, 0, Some(0)), 0);
    assert_eq!(destination.read_u8(0).unwrap(), 43);
}

#[test]
fn copy_after_slice() {
    let source = ByteBuf::alloc(200);
    let dest = ByteBuf::alloc(200);
    let expected = ByteBuf::alloc(200);
    for i in 0..200 {
        source.set(i, i as u8);
    }
    source.slice(2, None).copy(&dest, 0, 0, None);
    source.copy(&expected, 0, 2, None);
    assert_eq!(dest, expected);
}

#[test]
fn copy_ascending_overlap() {
    let buf = ByteBuf::from("abcdefghij");
    buf.copy(&buf, 0, 3, Some(10));
    assert_eq!(buf.to_text(Encoding::Utf8, 0, None), "defghijhij");
}

#[test]
fn copy_descending_overlap() {
    let buf = ByteBuf::from("abcdefghij");
    buf.copy(&buf, 3, 0, Some(7));
    assert_eq!(buf.to_text(Encoding::Utf8, 0, None), "abcabcdefg");
}

#[test]
fn slice_sets_indexes() {
    let buf = ByteBuf::from("hallo");
    assert_eq!(buf.slice(0, Some(5)).to_text(Encoding::Utf8, 0, None), "hallo");
}

#[test]
fn slice_out_of_range() {
    let buf = ByteBuf::from("hallo");
    assert_eq!(buf.slice(0, Some(10)).to_text(Encoding::Utf8, 0, None), "hallo");
    assert_eq!(buf.slice(10, Some(2)).to_text(Encoding::Utf8, 0, None), "");
}

#[test]
fn last_index_of_with_encoding() {
    let buf = ByteBuf::from("abcdefghij");
    assert_eq!(buf.last_index_of(b"b", None), Some(1));
    assert_eq!(buf.last_index_of_text("b", Encoding::Utf8), Some(1));
    assert_eq!(buf.last_index_of_text("b", Encoding::Latin1), Some(1));
    assert_eq!(
        buf.last_index_of_text("b", Encoding::from_name("binary").unwrap()),
        Some(1)
    );
}
