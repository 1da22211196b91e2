// SPDX-License-Identifier: Apache-2.0

/// Lexical class of a single input byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Class {
    /// Any byte with no meaning in the accepted dialect.
    Invalid,
    /// Space, tab, carriage return, line feed.
    Blank,
    /// `-`
    Minus,
    /// `.`
    Dot,
    /// `0`-`9`
    Digit,
    /// `_`, `a`-`z`, `A`-`Z`
    Letter,
    /// `'` or `"`
    Quote,
    /// `,`
    Comma,
    /// `:`
    Colon,
    /// `[`
    ArrayOpen,
    /// `]`
    ArrayClose,
    /// `{`
    ObjectOpen,
    /// `}`
    ObjectClose,
}

/// Byte classification table shared by the tokenizer. Bytes >= 0x80 are
/// all invalid; the accepted dialect is ASCII-framed (string payloads may
/// still carry arbitrary non-quote bytes).
pub(crate) static CLASS: [Class; 256] = build_table();

const fn build_table() -> [Class; 256] {
    let mut table = [Class::Invalid; 256];
    table[b'\t' as usize] = Class::Blank;
    table[b'\n' as usize] = Class::Blank;
    table[b'\r' as usize] = Class::Blank;
    table[b' ' as usize] = Class::Blank;
    table[b'-' as usize] = Class::Minus;
    table[b'.' as usize] = Class::Dot;
    let mut b = b'0';
    while b <= b'9' {
        table[b as usize] = Class::Digit;
        b += 1;
    }
    let mut b = b'A';
    while b <= b'Z' {
        table[b as usize] = Class::Letter;
        b += 1;
    }
    let mut b = b'a';
    while b <= b'z' {
        table[b as usize] = Class::Letter;
        b += 1;
    }
    table[b'_' as usize] = Class::Letter;
    table[b'\'' as usize] = Class::Quote;
    table[b'"' as usize] = Class::Quote;
    table[b',' as usize] = Class::Comma;
    table[b':' as usize] = Class::Colon;
    table[b'[' as usize] = Class::ArrayOpen;
    table[b']' as usize] = Class::ArrayClose;
    table[b'{' as usize] = Class::ObjectOpen;
    table[b'}' as usize] = Class::ObjectClose;
    table
}

/// Classify one byte.
pub(crate) fn classify(byte: u8) -> Class {
    CLASS[byte as usize]
}
