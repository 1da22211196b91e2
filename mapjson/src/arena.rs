// SPDX-License-Identifier: Apache-2.0

use crate::error::Error;
use crate::mapping::{Attr, Slot};

/// Default frame-stack capacity: maximum JSON nesting depth plus the root
/// value frame.
pub const DEFAULT_DEPTH: usize = 32;

/// Default index-pool capacity, in attribute-candidate entries shared by all
/// live object frames.
pub const DEFAULT_POOL: usize = 256;

/// Parsing context of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Context {
    /// The root singular value.
    Value,
    /// Inside a JSON array.
    Array,
    /// Inside a JSON object.
    Object,
}

/// The live mapping slice a frame decodes into.
#[derive(Debug, Clone, Copy)]
pub(crate) enum FrameMap<'m> {
    /// Array elements, or the one-element root sequence.
    Elements(&'m [Slot<'m>]),
    /// Object attributes.
    Attrs(&'m [Attr<'m>]),
    /// No destination: contents are validated and discarded.
    Unmapped,
}

/// A frame's candidate-attribute list inside the arena pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct IndexList {
    pub start: usize,
    pub len: usize,
}

impl IndexList {
    pub(crate) const EMPTY: IndexList = IndexList { start: 0, len: 0 };
}

/// One level of the parser's context stack: an in-progress array, object or
/// root value.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Frame<'m> {
    pub context: Context,
    pub map: FrameMap<'m>,
    /// Declared size of the mapping slice; zero for unmapped frames.
    pub size: usize,
    /// Current slot index. May pass `size`, in which case scalar content is
    /// discarded.
    pub index: usize,
    /// Candidate list of not-yet-consumed attribute indices (objects only).
    pub list: IndexList,
    /// Pool high-water mark to restore when this frame pops.
    pub mark: usize,
}

impl<'m> Frame<'m> {
    /// The initial frame: the caller's root mapping treated uniformly as a
    /// one-element sequence.
    pub(crate) fn root(slots: &'m [Slot<'m>]) -> Self {
        Frame {
            context: Context::Value,
            map: FrameMap::Elements(slots),
            size: slots.len(),
            index: 0,
            list: IndexList::EMPTY,
            mark: 0,
        }
    }

    const fn idle() -> Self {
        Frame {
            context: Context::Value,
            map: FrameMap::Unmapped,
            size: 0,
            index: 0,
            list: IndexList::EMPTY,
            mark: 0,
        }
    }

    /// The mapping slot at `index`, if any.
    pub(crate) fn slot_at(&self, index: usize) -> Option<Slot<'m>> {
        match self.map {
            FrameMap::Elements(elements) => elements.get(index).copied(),
            FrameMap::Attrs(attrs) => attrs.get(index).map(|attr| attr.slot),
            FrameMap::Unmapped => None,
        }
    }
}

/// Fixed-capacity storage for one decode call: the frame stack and the
/// contiguous index pool that backs per-object candidate lists.
///
/// Push and pop restore saved offsets, so allocation is O(1) and released in
/// exact stack order. Exceeding either capacity fails the decode with
/// [`Error::ArenaFull`]; nothing grows. One arena may be reused across
/// sequential decode calls.
///
/// ```
/// use core::cell::Cell;
/// use mapjson::{decode_with, Arena, Slot};
///
/// let n = Cell::new(0i64);
/// let mut arena: Arena<'_, 128, 1024> = Arena::new();
/// decode_with(&Slot::i64(&n), b"7", &mut arena).unwrap();
/// assert_eq!(n.get(), 7);
/// ```
#[derive(Debug)]
pub struct Arena<'m, const DEPTH: usize = DEFAULT_DEPTH, const POOL: usize = DEFAULT_POOL> {
    frames: [Frame<'m>; DEPTH],
    depth: usize,
    pool: [u32; POOL],
    mark: usize,
}

impl<'m, const DEPTH: usize, const POOL: usize> Arena<'m, DEPTH, POOL> {
    /// Creates an empty arena.
    pub fn new() -> Self {
        Arena {
            frames: [Frame::idle(); DEPTH],
            depth: 0,
            pool: [0; POOL],
            mark: 0,
        }
    }

    /// Discards all frames and pool allocations.
    pub(crate) fn reset(&mut self) {
        self.depth = 0;
        self.mark = 0;
    }

    /// Current pool high-water mark.
    pub(crate) fn mark(&self) -> usize {
        self.mark
    }

    pub(crate) fn push(&mut self, frame: Frame<'m>) -> Result<(), Error> {
        if self.depth >= DEPTH {
            return Err(Error::ArenaFull);
        }
        self.frames[self.depth] = frame;
        self.depth += 1;
        Ok(())
    }

    /// Pops the top frame, releasing its pool allocations. Refuses to pop
    /// the root frame: a close token at depth one is an unbalanced close.
    pub(crate) fn pop(&mut self) -> Result<(), Error> {
        if self.depth <= 1 {
            return Err(Error::Syntax);
        }
        self.depth -= 1;
        self.mark = self.frames[self.depth].mark;
        Ok(())
    }

    pub(crate) fn top(&self) -> &Frame<'m> {
        &self.frames[self.depth - 1]
    }

    pub(crate) fn top_mut(&mut self) -> &mut Frame<'m> {
        &mut self.frames[self.depth - 1]
    }

    /// Top frame and the whole pool, split-borrowed for attribute
    /// resolution.
    pub(crate) fn top_with_pool(&mut self) -> (&mut Frame<'m>, &mut [u32]) {
        (&mut self.frames[self.depth - 1], &mut self.pool)
    }

    /// Allocates a candidate list of `count` entries initialized to
    /// `0..count`, advancing the high-water mark.
    pub(crate) fn alloc_indices(&mut self, count: usize) -> Result<IndexList, Error> {
        let start = self.mark;
        let end = start.checked_add(count).ok_or(Error::ArenaFull)?;
        if end > POOL {
            return Err(Error::ArenaFull);
        }
        for (offset, entry) in self.pool[start..end].iter_mut().enumerate() {
            *entry = offset as u32;
        }
        self.mark = end;
        Ok(IndexList { start, len: count })
    }
}

impl<'m, const DEPTH: usize, const POOL: usize> Default for Arena<'m, DEPTH, POOL> {
    fn default() -> Self {
        Self::new()
    }
}
