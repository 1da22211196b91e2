// SPDX-License-Identifier: Apache-2.0

use core::cell::Cell;

/// One node of a mapping schema: a JSON value shape bound to a native
/// destination.
///
/// The tree is declared up front by the caller and stays read-only during a
/// call; destinations are `Cell`s so that decoding can write through a shared
/// mapping. A slot's declared size is the slice length for strings, arrays
/// and objects, and the destination width for scalars.
///
/// # Example
/// ```
/// use core::cell::Cell;
/// use mapjson::{decode, Slot};
///
/// let value = Cell::new(0i32);
/// decode(&Slot::i32(&value), b"42").unwrap();
/// assert_eq!(value.get(), 42);
/// ```
#[derive(Debug, Clone, Copy)]
pub enum Slot<'m> {
    /// JSON number coerced into a signed integer, saturating at the
    /// destination's bounds.
    Int(IntSlot<'m>),
    /// JSON number converted to a floating-point destination.
    Float(FloatSlot<'m>),
    /// JSON string copied into a fixed byte buffer, NUL-terminated and
    /// truncated to capacity - 1 payload bytes.
    Str(&'m [Cell<u8>]),
    /// JSON array decoded element-by-element into nested slots.
    Array(&'m [Slot<'m>]),
    /// JSON object decoded attribute-by-attribute into named slots.
    Object(&'m [Attr<'m>]),
}

/// Signed integer destination, by declared width.
#[derive(Debug, Clone, Copy)]
pub enum IntSlot<'m> {
    I8(&'m Cell<i8>),
    I16(&'m Cell<i16>),
    I32(&'m Cell<i32>),
    I64(&'m Cell<i64>),
}

/// Floating-point destination, by declared width.
#[derive(Debug, Clone, Copy)]
pub enum FloatSlot<'m> {
    F32(&'m Cell<f32>),
    F64(&'m Cell<f64>),
}

/// A named mapping node; used only inside [`Slot::Object`] mappings.
#[derive(Debug, Clone, Copy)]
pub struct Attr<'m> {
    /// Declared attribute name, matched byte-for-byte against object keys.
    pub name: &'m str,
    /// Destination for the attribute's value.
    pub slot: Slot<'m>,
}

impl<'m> Attr<'m> {
    /// Declares a named attribute.
    pub const fn new(name: &'m str, slot: Slot<'m>) -> Self {
        Attr { name, slot }
    }
}

impl<'m> Slot<'m> {
    /// Declares an 8-bit integer destination.
    pub const fn i8(dest: &'m Cell<i8>) -> Self {
        Slot::Int(IntSlot::I8(dest))
    }

    /// Declares a 16-bit integer destination.
    pub const fn i16(dest: &'m Cell<i16>) -> Self {
        Slot::Int(IntSlot::I16(dest))
    }

    /// Declares a 32-bit integer destination.
    pub const fn i32(dest: &'m Cell<i32>) -> Self {
        Slot::Int(IntSlot::I32(dest))
    }

    /// Declares a 64-bit integer destination.
    pub const fn i64(dest: &'m Cell<i64>) -> Self {
        Slot::Int(IntSlot::I64(dest))
    }

    /// Declares a single-precision float destination.
    pub const fn f32(dest: &'m Cell<f32>) -> Self {
        Slot::Float(FloatSlot::F32(dest))
    }

    /// Declares a double-precision float destination.
    pub const fn f64(dest: &'m Cell<f64>) -> Self {
        Slot::Float(FloatSlot::F64(dest))
    }

    /// Declares a string destination over a fixed byte buffer.
    ///
    /// The buffer's length is the declared capacity: decoding stores at most
    /// `len - 1` payload bytes plus a NUL terminator, and encoding emits
    /// payload bytes up to the first NUL.
    ///
    /// A `&Cell<[u8; N]>` coerces to the expected `&Cell<[u8]>`:
    /// ```
    /// use core::cell::Cell;
    /// use mapjson::Slot;
    ///
    /// let buf = Cell::new([0u8; 16]);
    /// let slot = Slot::string(&buf);
    /// ```
    pub fn string(dest: &'m Cell<[u8]>) -> Self {
        Slot::Str(dest.as_slice_of_cells())
    }

    /// Declares a nested array mapping with one slot per element.
    pub const fn array(elements: &'m [Slot<'m>]) -> Self {
        Slot::Array(elements)
    }

    /// Declares a nested object mapping with named attributes.
    pub const fn object(attrs: &'m [Attr<'m>]) -> Self {
        Slot::Object(attrs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_slot_spans_whole_buffer() {
        let buf = Cell::new([0u8; 16]);
        let slot = Slot::string(&buf);
        match slot {
            Slot::Str(cells) => assert_eq!(cells.len(), 16),
            _ => panic!("expected a string slot"),
        }
    }

    #[test]
    fn mapping_tree_is_copy() {
        let n = Cell::new(0i32);
        let elements = [Slot::i32(&n)];
        let root = Slot::array(&elements);
        let copy = root;
        // Both copies write through the same destination.
        match (root, copy) {
            (Slot::Array(a), Slot::Array(b)) => {
                assert_eq!(a.len(), 1);
                assert_eq!(b.len(), 1);
            }
            _ => panic!("expected array slots"),
        }
    }
}
