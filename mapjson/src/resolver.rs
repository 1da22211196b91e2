// SPDX-License-Identifier: Apache-2.0

use crate::arena::{Frame, FrameMap};

/// Resolves an object key to a mapping slot index.
///
/// Scans the frame's candidate list linearly, comparing the key bytes
/// against each candidate's declared name. The first match wins and is
/// removed from the list: a match in the first half shifts the leading
/// entries up and advances the list offset, a match in the second half
/// shifts the trailing entries down. Removal amortizes lookup cost for
/// arrays of similarly shaped objects without a hash structure, and makes a
/// repeated key resolve to "no destination" on its second occurrence.
///
/// Without a match (or on an unmapped frame) the slot index is set to the
/// declared size, so following scalar content is validated but discarded.
pub(crate) fn resolve(frame: &mut Frame<'_>, pool: &mut [u32], key: &[u8]) {
    let FrameMap::Attrs(attrs) = frame.map else {
        frame.index = frame.size;
        return;
    };
    let list = &mut pool[frame.list.start..frame.list.start + frame.list.len];
    let found = list
        .iter()
        .position(|&candidate| attrs[candidate as usize].name.as_bytes() == key);
    let Some(position) = found else {
        frame.index = frame.size;
        return;
    };
    frame.index = list[position] as usize;
    if position < list.len() / 2 {
        list.copy_within(0..position, 1);
        frame.list.start += 1;
    } else {
        list.copy_within(position + 1.., position);
    }
    frame.list.len -= 1;
}
