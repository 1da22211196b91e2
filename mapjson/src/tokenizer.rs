// SPDX-License-Identifier: Apache-2.0

use crate::classify::{classify, Class};

/// Kind of one lexical unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TokenKind {
    /// Synthetic "before any token" kind; never produced by the tokenizer.
    Start,
    /// End of input.
    End,
    /// `[`
    ArrayOpen,
    /// `]`
    ArrayClose,
    /// `{`
    ObjectOpen,
    /// `}`
    ObjectClose,
    /// `,`
    Comma,
    /// Number literal.
    Number,
    /// String literal; `start`/`len` span the payload between the quotes.
    Str,
    /// Object attribute name followed by a colon; quotes and colon excluded
    /// from the span.
    Name,
    /// Input matching no token rule. The parser aborts on the first one.
    Error,
}

/// One token. Ephemeral; consumed immediately by the structural parser.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub len: usize,
}

impl Token {
    fn error(start: usize) -> Self {
        Token {
            kind: TokenKind::Error,
            start,
            len: 0,
        }
    }
}

/// Scans raw input bytes into tokens, advancing an internal cursor.
#[derive(Debug)]
pub(crate) struct Tokenizer<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Tokenizer { data, pos: 0 }
    }

    /// Class of the byte at `pos`, or `Invalid` past the end. Keeps the
    /// bounds checks in one place.
    fn class_at(&self, pos: usize) -> Class {
        match self.data.get(pos) {
            Some(&byte) => classify(byte),
            None => Class::Invalid,
        }
    }

    fn skip_blanks(&mut self) {
        while self.class_at(self.pos) == Class::Blank {
            self.pos += 1;
        }
    }

    /// Produces the next token and advances the cursor past it.
    pub fn next_token(&mut self) -> Token {
        self.skip_blanks();
        let Some(&byte) = self.data.get(self.pos) else {
            return Token {
                kind: TokenKind::End,
                start: self.pos,
                len: 0,
            };
        };
        match classify(byte) {
            Class::ArrayOpen => self.symbol(TokenKind::ArrayOpen),
            Class::ArrayClose => self.symbol(TokenKind::ArrayClose),
            Class::ObjectOpen => self.symbol(TokenKind::ObjectOpen),
            Class::ObjectClose => self.symbol(TokenKind::ObjectClose),
            Class::Comma => self.symbol(TokenKind::Comma),
            Class::Minus | Class::Digit => self.number(),
            Class::Quote => self.quoted(byte),
            Class::Letter => self.bare_name(),
            _ => Token::error(self.pos),
        }
    }

    fn symbol(&mut self, kind: TokenKind) -> Token {
        let start = self.pos;
        self.pos += 1;
        Token {
            kind,
            start,
            len: 1,
        }
    }

    fn digit_run(&mut self) -> usize {
        let start = self.pos;
        while self.class_at(self.pos) == Class::Digit {
            self.pos += 1;
        }
        self.pos - start
    }

    /// Number: `-? digits ( '.' digits )? ( [eE] [+-]? digits )?`.
    fn number(&mut self) -> Token {
        let start = self.pos;
        if self.class_at(self.pos) == Class::Minus {
            self.pos += 1;
        }
        if self.class_at(self.pos) != Class::Digit {
            return Token::error(start);
        }
        self.digit_run();
        if self.data.get(self.pos) == Some(&b'.') {
            self.pos += 1;
            if self.class_at(self.pos) != Class::Digit {
                return Token::error(start);
            }
            self.digit_run();
        }
        if matches!(self.data.get(self.pos), Some(b'e' | b'E')) {
            self.pos += 1;
            if matches!(self.data.get(self.pos), Some(b'+' | b'-')) {
                self.pos += 1;
            }
            if self.class_at(self.pos) != Class::Digit {
                return Token::error(start);
            }
            self.digit_run();
        }
        Token {
            kind: TokenKind::Number,
            start,
            len: self.pos - start,
        }
    }

    /// Quoted string, and possibly a quoted attribute name.
    ///
    /// The string closes at the first occurrence of the opening quote byte
    /// that is not immediately preceded by a backslash. If a colon follows
    /// (after blanks) the token is an attribute name instead, restricted to
    /// identifier characters; without the colon it stays an ordinary string.
    fn quoted(&mut self, quote: u8) -> Token {
        self.pos += 1;
        let start = self.pos;
        let mut kind = TokenKind::Error;
        let mut len = 0;
        while let Some(&byte) = self.data.get(self.pos) {
            if byte == quote && self.data.get(self.pos - 1) != Some(&b'\\') {
                kind = TokenKind::Str;
                self.pos += 1;
                break;
            }
            len += 1;
            self.pos += 1;
        }
        // Unterminated strings keep the Error kind and run to end of input.
        self.skip_blanks();
        if self.pos >= self.data.len() {
            return Token { kind, start, len };
        }
        if self.class_at(self.pos) == Class::Colon {
            self.pos += 1;
            if self.class_at(start) != Class::Letter {
                return Token::error(start);
            }
            for offset in 1..len {
                let class = self.class_at(start + offset);
                if class != Class::Letter && class != Class::Digit {
                    return Token::error(start);
                }
            }
            return Token {
                kind: TokenKind::Name,
                start,
                len,
            };
        }
        Token { kind, start, len }
    }

    /// Unquoted attribute name: `letter (letter | digit)*` followed, after
    /// blanks, by a colon. Anything else is an error, which also rejects
    /// bareword literals like `true` or `null`.
    fn bare_name(&mut self) -> Token {
        let start = self.pos;
        self.pos += 1;
        loop {
            let class = self.class_at(self.pos);
            if class != Class::Letter && class != Class::Digit {
                break;
            }
            self.pos += 1;
        }
        let len = self.pos - start;
        self.skip_blanks();
        if self.class_at(self.pos) != Class::Colon {
            return Token::error(start);
        }
        self.pos += 1;
        Token {
            kind: TokenKind::Name,
            start,
            len,
        }
    }
}
