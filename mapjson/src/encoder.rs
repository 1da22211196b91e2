// SPDX-License-Identifier: Apache-2.0

use core::cell::Cell;
use core::fmt::Write;

use crate::error::Error;
use crate::mapping::{Attr, FloatSlot, IntSlot, Slot};

/// Encodes the mapping's current destination values as JSON text.
///
/// Serializes depth-first into `buf`, never writing past its bounds: the
/// last byte is reserved so the text is always NUL-terminated within the
/// buffer, and output that does not fit is truncated silently. Returns the
/// text length excluding the terminator. Fails only for an empty buffer.
///
/// String payloads are emitted as-is between double quotes, up to their
/// first NUL byte; the encoder trusts them to be JSON-safe. Object
/// attribute names render unquoted, which the decoder accepts back.
///
/// # Example
/// ```
/// use core::cell::Cell;
/// use mapjson::{encode, Attr, Slot};
///
/// let n = Cell::new(5i32);
/// let attrs = [Attr::new("n", Slot::i32(&n))];
/// let root = Slot::object(&attrs);
/// let mut buf = [0u8; 32];
/// let len = encode(&mut buf, &root).unwrap();
/// assert_eq!(&buf[..len], b"{n:5}");
/// ```
pub fn encode(buf: &mut [u8], root: &Slot<'_>) -> Result<usize, Error> {
    let Some(limit) = buf.len().checked_sub(1) else {
        return Err(Error::InvalidArgument);
    };
    let mut writer = JsonWriter {
        out: buf,
        pos: 0,
        limit,
    };
    writer.value(root);
    let end = writer.pos;
    buf[end] = 0;
    Ok(end)
}

/// Bounded output writer. All writes truncate silently at `limit`.
struct JsonWriter<'w> {
    out: &'w mut [u8],
    pos: usize,
    limit: usize,
}

impl JsonWriter<'_> {
    fn byte(&mut self, byte: u8) {
        if self.pos < self.limit {
            self.out[self.pos] = byte;
            self.pos += 1;
        }
    }

    fn raw(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            if self.pos >= self.limit {
                return;
            }
            self.out[self.pos] = byte;
            self.pos += 1;
        }
    }

    fn value(&mut self, slot: &Slot<'_>) {
        match *slot {
            Slot::Int(dest) => self.integer(dest),
            Slot::Float(dest) => self.float(dest),
            Slot::Str(dest) => self.string(dest),
            Slot::Array(elements) => self.array(elements),
            Slot::Object(attrs) => self.object(attrs),
        }
    }

    fn integer(&mut self, dest: IntSlot<'_>) {
        let mut text = FmtBuffer::new();
        let _ = match dest {
            IntSlot::I8(cell) => write!(text, "{}", cell.get()),
            IntSlot::I16(cell) => write!(text, "{}", cell.get()),
            IntSlot::I32(cell) => write!(text, "{}", cell.get()),
            IntSlot::I64(cell) => write!(text, "{}", cell.get()),
        };
        self.raw(text.as_bytes());
    }

    fn float(&mut self, dest: FloatSlot<'_>) {
        let mut text = FmtBuffer::new();
        match dest {
            FloatSlot::F32(cell) => general_form(&mut text, f64::from(cell.get())),
            FloatSlot::F64(cell) => general_form(&mut text, cell.get()),
        }
        self.raw(text.as_bytes());
    }

    fn string(&mut self, dest: &[Cell<u8>]) {
        self.byte(b'"');
        for cell in dest {
            let byte = cell.get();
            if byte == 0 {
                break;
            }
            self.byte(byte);
        }
        self.byte(b'"');
    }

    fn array(&mut self, elements: &[Slot<'_>]) {
        self.byte(b'[');
        for (i, element) in elements.iter().enumerate() {
            if i > 0 {
                self.byte(b',');
            }
            self.value(element);
        }
        self.byte(b']');
    }

    fn object(&mut self, attrs: &[Attr<'_>]) {
        self.byte(b'{');
        for (i, attr) in attrs.iter().enumerate() {
            if i > 0 {
                self.byte(b',');
            }
            self.raw(attr.name.as_bytes());
            self.byte(b':');
            self.value(&attr.slot);
        }
        self.byte(b'}');
    }
}

/// General decimal form: plain notation in the range where it stays short,
/// exponent notation outside it. Not guaranteed shortest round-trip, but
/// always re-parseable by the tokenizer.
fn general_form(text: &mut FmtBuffer, value: f64) {
    let magnitude = value.abs();
    let _ = if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        write!(text, "{value:e}")
    } else {
        write!(text, "{value}")
    };
}

/// Small on-stack target for `core::fmt`. 40 bytes covers the widest
/// integer and any float rendered by `general_form`.
struct FmtBuffer {
    bytes: [u8; 40],
    len: usize,
}

impl FmtBuffer {
    fn new() -> Self {
        FmtBuffer {
            bytes: [0; 40],
            len: 0,
        }
    }

    fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }
}

impl Write for FmtBuffer {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        let available = self.bytes.len() - self.len;
        let take = s.len().min(available);
        self.bytes[self.len..self.len + take].copy_from_slice(&s.as_bytes()[..take]);
        self.len += take;
        if take < s.len() {
            return Err(core::fmt::Error);
        }
        Ok(())
    }
}
