// SPDX-License-Identifier: Apache-2.0

/// Errors that can occur while decoding or encoding.
///
/// Decoding aborts on the first error with no partial-result recovery;
/// destinations written before the failure keep their new values. The
/// result carries no position information.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Malformed token, unbalanced brackets or braces, or a misplaced
    /// comma or attribute name.
    Syntax,
    /// The arena ran out of capacity for nested frames or an attribute
    /// candidate list.
    ArenaFull,
    /// Empty input text, or a zero-sized output buffer.
    InvalidArgument,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Syntax => write!(f, "malformed JSON input"),
            Error::ArenaFull => write!(f, "arena capacity exceeded"),
            Error::InvalidArgument => write!(f, "empty input or output buffer"),
        }
    }
}
