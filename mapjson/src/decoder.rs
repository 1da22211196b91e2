// SPDX-License-Identifier: Apache-2.0

use log::{debug, trace};

use crate::arena::{Arena, Context, Frame, FrameMap, IndexList, DEFAULT_DEPTH, DEFAULT_POOL};
use crate::convert;
use crate::error::Error;
use crate::mapping::Slot;
use crate::resolver;
use crate::tokenizer::{Token, TokenKind, Tokenizer};

/// Decodes JSON text into the destinations declared by `root`, using a
/// default-capacity arena on the stack.
///
/// On success every matched destination is populated in place; JSON content
/// with no matching slot, or whose type does not match the declared slot, is
/// validated and silently discarded. On failure some destinations may
/// already have been written.
///
/// # Example
/// ```
/// use core::cell::Cell;
/// use mapjson::{decode, Attr, Slot};
///
/// let id = Cell::new(0i32);
/// let name = Cell::new([0u8; 16]);
/// let attrs = [
///     Attr::new("id", Slot::i32(&id)),
///     Attr::new("name", Slot::string(&name)),
/// ];
/// decode(&Slot::object(&attrs), b"{name:'box', id:7}").unwrap();
/// assert_eq!(id.get(), 7);
/// ```
pub fn decode<'m>(root: &'m Slot<'m>, json: &[u8]) -> Result<(), Error> {
    let mut arena: Arena<'m, DEFAULT_DEPTH, DEFAULT_POOL> = Arena::new();
    decode_with(root, json, &mut arena)
}

/// Decodes with a caller-provisioned arena.
///
/// Input nested deeper than the arena's frame capacity, or whose object
/// mappings need more candidate-list entries than its pool holds, fails
/// with [`Error::ArenaFull`]; provision a larger arena up front for such
/// documents. The arena is reset on entry, so one instance can serve many
/// sequential calls.
pub fn decode_with<'m, const DEPTH: usize, const POOL: usize>(
    root: &'m Slot<'m>,
    json: &[u8],
    arena: &mut Arena<'m, DEPTH, POOL>,
) -> Result<(), Error> {
    if json.is_empty() {
        return Err(Error::InvalidArgument);
    }
    arena.reset();
    arena.push(Frame::root(core::slice::from_ref(root)))?;

    let mut tokens = Tokenizer::new(json);
    let mut prev = TokenKind::Start;
    loop {
        let token = tokens.next_token();
        match token.kind {
            TokenKind::End => {
                if arena.top().context != Context::Value || prev == TokenKind::Start {
                    return fail(&token);
                }
                return Ok(());
            }
            TokenKind::ArrayOpen | TokenKind::ObjectOpen => {
                if !value_position(arena.top().context, prev) {
                    return fail(&token);
                }
                push_nested(arena, token.kind)?;
            }
            TokenKind::ArrayClose => {
                if arena.top().context != Context::Array || prev == TokenKind::Comma {
                    return fail(&token);
                }
                trace!("pop array frame");
                arena.pop()?;
            }
            TokenKind::ObjectClose => {
                if arena.top().context != Context::Object
                    || prev == TokenKind::Comma
                    || prev == TokenKind::Name
                {
                    return fail(&token);
                }
                trace!("pop object frame");
                arena.pop()?;
            }
            TokenKind::Comma => {
                let frame = arena.top_mut();
                match frame.context {
                    Context::Value => return fail(&token),
                    Context::Array => {
                        if prev == TokenKind::ArrayOpen {
                            return fail(&token);
                        }
                        frame.index += 1;
                    }
                    Context::Object => {
                        if prev == TokenKind::ObjectOpen || prev == TokenKind::Name {
                            return fail(&token);
                        }
                    }
                }
            }
            TokenKind::Number | TokenKind::Str => {
                if !value_position(arena.top().context, prev) {
                    return fail(&token);
                }
                store_scalar(arena.top(), &token, json);
            }
            TokenKind::Name => {
                if arena.top().context != Context::Object
                    || (prev != TokenKind::ObjectOpen && prev != TokenKind::Comma)
                {
                    return fail(&token);
                }
                let key = &json[token.start..token.start + token.len];
                let (frame, pool) = arena.top_with_pool();
                resolver::resolve(frame, pool, key);
            }
            TokenKind::Error | TokenKind::Start => return fail(&token),
        }
        prev = token.kind;
    }
}

/// Whether a value (scalar or opening bracket) may appear here.
fn value_position(context: Context, prev: TokenKind) -> bool {
    match context {
        Context::Value => prev == TokenKind::Start,
        Context::Array => prev == TokenKind::ArrayOpen || prev == TokenKind::Comma,
        Context::Object => prev == TokenKind::Name,
    }
}

fn fail(token: &Token) -> Result<(), Error> {
    debug!("syntax error at byte {} ({:?})", token.start, token.kind);
    Err(Error::Syntax)
}

/// Pushes the frame for an opening bracket. The new frame inherits the
/// enclosing slot's nested mapping only when the declared type matches the
/// bracket kind; otherwise it is unmapped and its contents are parsed for
/// validity and discarded.
fn push_nested<'m, const DEPTH: usize, const POOL: usize>(
    arena: &mut Arena<'m, DEPTH, POOL>,
    opening: TokenKind,
) -> Result<(), Error> {
    let parent = *arena.top();
    let context = if opening == TokenKind::ObjectOpen {
        Context::Object
    } else {
        Context::Array
    };
    let mut frame = Frame {
        context,
        map: FrameMap::Unmapped,
        size: 0,
        index: 0,
        list: IndexList::EMPTY,
        mark: arena.mark(),
    };
    if parent.index < parent.size {
        match (parent.slot_at(parent.index), opening) {
            (Some(Slot::Array(elements)), TokenKind::ArrayOpen) => {
                frame.map = FrameMap::Elements(elements);
                frame.size = elements.len();
            }
            (Some(Slot::Object(attrs)), TokenKind::ObjectOpen) => {
                frame.map = FrameMap::Attrs(attrs);
                frame.size = attrs.len();
            }
            _ => {}
        }
    }
    if frame.context == Context::Object && frame.size > 0 {
        frame.list = arena.alloc_indices(frame.size)?;
    }
    trace!(
        "push {:?} frame, declared size {}",
        frame.context,
        frame.size
    );
    arena.push(frame)
}

/// Writes a scalar token into the current slot if the index is in range and
/// the declared type matches the token kind; otherwise the value is
/// discarded. A mismatch is never a parse failure.
fn store_scalar(frame: &Frame<'_>, token: &Token, json: &[u8]) {
    if frame.index >= frame.size {
        return;
    }
    let Some(slot) = frame.slot_at(frame.index) else {
        return;
    };
    let raw = &json[token.start..token.start + token.len];
    match (slot, token.kind) {
        (Slot::Int(dest), TokenKind::Number) => convert::store_int(dest, raw),
        (Slot::Float(dest), TokenKind::Number) => convert::store_float(dest, raw),
        (Slot::Str(dest), TokenKind::Str) => convert::store_str(dest, raw),
        _ => {}
    }
}
