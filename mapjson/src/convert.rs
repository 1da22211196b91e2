// SPDX-License-Identifier: Apache-2.0

use core::cell::Cell;

use crate::mapping::{FloatSlot, IntSlot};

/// Parses a number token span. The tokenizer only emits spans shaped like
/// `-?digits(.digits)?([eE][+-]?digits)?`, which `f64::from_str` always
/// accepts; the fallback covers the unreachable case without panicking.
fn parse_f64(raw: &[u8]) -> f64 {
    match core::str::from_utf8(raw).ok().and_then(|text| text.parse().ok()) {
        Some(value) => value,
        None => 0.0,
    }
}

/// Coerces a number token into a signed integer destination.
///
/// The value saturates at the destination width's bounds instead of
/// wrapping or failing: `"128"` into an `i8` stores 127, `"-129"` stores
/// -128.
pub(crate) fn store_int(dest: IntSlot<'_>, raw: &[u8]) {
    let value = parse_f64(raw);
    // `as` from float to int saturates, which is exactly the contract.
    match dest {
        IntSlot::I8(cell) => cell.set(value as i8),
        IntSlot::I16(cell) => cell.set(value as i16),
        IntSlot::I32(cell) => cell.set(value as i32),
        IntSlot::I64(cell) => cell.set(value as i64),
    }
}

/// Coerces a number token into a floating-point destination.
///
/// Narrowing to `f32` clamps the magnitude to `f32::MAX` first, so valid
/// input text never produces an infinity.
pub(crate) fn store_float(dest: FloatSlot<'_>, raw: &[u8]) {
    let value = parse_f64(raw);
    match dest {
        FloatSlot::F32(cell) => {
            let clamped = value.clamp(-f64::from(f32::MAX), f64::from(f32::MAX));
            cell.set(clamped as f32);
        }
        FloatSlot::F64(cell) => cell.set(value),
    }
}

/// Copies a string token span into a fixed destination buffer.
///
/// At most `capacity - 1` source bytes are consumed and a NUL terminator is
/// always appended; longer input truncates silently. The escape set
/// `\" \\ \/ \b \f \n \r \t` decodes to single bytes; an unrecognized
/// escape is copied through literally as the backslash plus the following
/// byte rather than rejected.
pub(crate) fn store_str(dest: &[Cell<u8>], raw: &[u8]) {
    let Some(limit) = dest.len().checked_sub(1) else {
        return;
    };
    let take = raw.len().min(limit);
    let mut out = 0;
    let mut i = 0;
    while i < take {
        let byte = raw[i];
        if byte == b'\\' && i + 1 < take {
            i += 1;
            let escaped = raw[i];
            match escaped {
                b'"' => dest[out].set(b'"'),
                b'\\' => dest[out].set(b'\\'),
                b'/' => dest[out].set(b'/'),
                b'b' => dest[out].set(0x08),
                b'f' => dest[out].set(0x0C),
                b'n' => dest[out].set(b'\n'),
                b'r' => dest[out].set(b'\r'),
                b't' => dest[out].set(b'\t'),
                other => {
                    dest[out].set(b'\\');
                    out += 1;
                    dest[out].set(other);
                }
            }
        } else {
            dest[out].set(byte);
        }
        out += 1;
        i += 1;
    }
    dest[out].set(0);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contents(cells: &[Cell<u8>]) -> Vec<u8> {
        cells
            .iter()
            .map(Cell::get)
            .take_while(|&byte| byte != 0)
            .collect()
    }

    #[test]
    fn int_saturates_at_each_width() {
        let n8 = Cell::new(0i8);
        store_int(IntSlot::I8(&n8), b"128");
        assert_eq!(n8.get(), 127);
        store_int(IntSlot::I8(&n8), b"-129");
        assert_eq!(n8.get(), -128);

        let n16 = Cell::new(0i16);
        store_int(IntSlot::I16(&n16), b"32768");
        assert_eq!(n16.get(), 32767);

        let n32 = Cell::new(0i32);
        store_int(IntSlot::I32(&n32), b"2147483648");
        assert_eq!(n32.get(), 2147483647);
        store_int(IntSlot::I32(&n32), b"-2147483649");
        assert_eq!(n32.get(), -2147483648);

        let n64 = Cell::new(0i64);
        store_int(IntSlot::I64(&n64), b"99999999999999999999999");
        assert_eq!(n64.get(), i64::MAX);
    }

    #[test]
    fn int_accepts_float_syntax() {
        let n = Cell::new(0i32);
        store_int(IntSlot::I32(&n), b"1.9e2");
        assert_eq!(n.get(), 190);
    }

    #[test]
    fn float_narrowing_never_makes_infinity() {
        let f = Cell::new(0.0f32);
        store_float(FloatSlot::F32(&f), b"1e300");
        assert_eq!(f.get(), f32::MAX);
        store_float(FloatSlot::F32(&f), b"-1e300");
        assert_eq!(f.get(), f32::MIN);

        let d = Cell::new(0.0f64);
        store_float(FloatSlot::F64(&d), b"1e300");
        assert_eq!(d.get(), 1e300);
    }

    #[test]
    fn escape_set_decodes() {
        let buf: [Cell<u8>; 32] = core::array::from_fn(|_| Cell::new(0xFF));
        store_str(&buf, br#"a\"b\\c\/d\be\ff\ng\rh\ti"#);
        assert_eq!(contents(&buf), b"a\"b\\c/d\x08e\x0Cf\ng\rh\ti");
    }

    #[test]
    fn unrecognized_escape_passes_through() {
        let buf: [Cell<u8>; 16] = core::array::from_fn(|_| Cell::new(0xFF));
        store_str(&buf, br"a\qb");
        assert_eq!(contents(&buf), br"a\qb");
    }

    #[test]
    fn overlong_input_truncates_with_terminator() {
        let buf: [Cell<u8>; 4] = core::array::from_fn(|_| Cell::new(0xFF));
        store_str(&buf, b"abcdefg");
        assert_eq!(contents(&buf), b"abc");
        assert_eq!(buf[3].get(), 0);
    }

    #[test]
    fn empty_destination_is_left_alone() {
        let buf: [Cell<u8>; 0] = [];
        store_str(&buf, b"anything");
    }

    #[test]
    fn capacity_one_stores_only_terminator() {
        let buf: [Cell<u8>; 1] = core::array::from_fn(|_| Cell::new(0xFF));
        store_str(&buf, b"abc");
        assert_eq!(buf[0].get(), 0);
    }
}
