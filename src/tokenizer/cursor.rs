// Copyright 2014 The html5io Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The [`InputCursor`] struct and its [`Position`].
//!
//! The cursor owns one decoded input buffer and a read position into it.
//! Runs returned by [`chars_while`] and [`chars_until`] are subtendrils of
//! that buffer, so scanning does not copy the input.
//!
//! [`InputCursor`]: struct.InputCursor.html
//! [`Position`]: struct.Position.html
//! [`chars_while`]: struct.InputCursor.html#method.chars_while
//! [`chars_until`]: struct.InputCursor.html#method.chars_until

use mac::unwrap_or_return;
use tendril::StrTendril;

use crate::util::charset::CharSet;

/// Where the cursor is.
///
/// `offset` counts the characters (Unicode scalar values) before the
/// current one. `line` starts at 1. `column` starts at 0 and counts the
/// characters since the last newline.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Default for Position {
    fn default() -> Position {
        Position {
            offset: 0,
            line: 1,
            column: 0,
        }
    }
}

/// A read position over one owned input buffer.
///
/// End of input is signalled by `None` from `current`, `peek` and `next`.
#[derive(Clone, Debug)]
pub struct InputCursor {
    buf: StrTendril,
    /// Byte index of the current character, or `buf.len()` at end of input.
    pos: usize,
    position: Position,
}

impl InputCursor {
    pub fn new(buf: StrTendril) -> InputCursor {
        InputCursor {
            buf,
            pos: 0,
            position: Position::default(),
        }
    }

    #[inline]
    fn rest(&self) -> &str {
        &self.buf[self.pos..]
    }

    /// Is the cursor at end of input?
    pub fn is_eof(&self) -> bool {
        self.pos >= self.buf.len()
    }

    /// The character at the read position, if any.
    pub fn current(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// The character after the current one, without advancing.
    pub fn peek(&self) -> Option<char> {
        let mut chars = self.rest().chars();
        chars.next()?;
        chars.next()
    }

    /// Advance past the current character and return the new current one.
    ///
    /// At end of input this does not move and returns `None`.
    pub fn next(&mut self) -> Option<char> {
        let c = unwrap_or_return!(self.current(), None);
        self.pos += c.len_utf8();
        self.position.offset += 1;
        if c == '\n' {
            self.position.line += 1;
            self.position.column = 0;
        } else {
            self.position.column += 1;
        }
        self.current()
    }

    /// Advance up to `n` characters, stopping at end of input.
    pub fn consume(&mut self, n: usize) {
        for _ in 0..n {
            if self.is_eof() {
                break;
            }
            self.next();
        }
    }

    /// Move the read position back by `n` characters.
    ///
    /// Panics if that would move before the start of the input; callers
    /// can only give back what they have consumed.
    pub fn unconsume(&mut self, n: usize) {
        assert!(
            n <= self.position.offset,
            "unconsume({}) past the start of input (offset {})",
            n,
            self.position.offset
        );

        let mut crossed_newline = false;
        for _ in 0..n {
            let c = match self.buf[..self.pos].chars().next_back() {
                Some(c) => c,
                None => break,
            };
            self.pos -= c.len_utf8();
            self.position.offset -= 1;
            if c == '\n' {
                self.position.line -= 1;
                crossed_newline = true;
            }
        }

        if crossed_newline {
            self.position.column = self.buf[..self.pos]
                .rsplit('\n')
                .next()
                .map_or(0, |line| line.chars().count());
        } else {
            self.position.column -= n;
        }
    }

    /// Consume and return the longest run of characters, starting at the
    /// current one, which are all in `set`.
    pub fn chars_while(&mut self, set: CharSet) -> StrTendril {
        let n = set.member_prefix_len(self.rest().as_bytes());
        self.take_run(n)
    }

    /// Consume and return the characters up to, but not including, the
    /// first one in `set`. Consumes to end of input if there is none.
    pub fn chars_until(&mut self, set: CharSet) -> StrTendril {
        let n = set.nonmember_prefix_len(self.rest().as_bytes());
        self.take_run(n)
    }

    /// Consume and return everything up to end of input.
    pub fn remaining_chars(&mut self) -> StrTendril {
        let n = self.buf.len() - self.pos;
        self.take_run(n)
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn current_line(&self) -> usize {
        self.position.line
    }

    pub fn column_offset(&self) -> usize {
        self.position.column
    }

    // `n` is a byte count ending on a character boundary.
    fn take_run(&mut self, n: usize) -> StrTendril {
        if n == 0 {
            return StrTendril::new();
        }

        let run = &self.buf[self.pos..self.pos + n];
        let chars = run.chars().count();
        match run.rfind('\n') {
            Some(last) => {
                self.position.line += run.bytes().filter(|&b| b == b'\n').count();
                self.position.column = run[last + 1..].chars().count();
            }
            None => self.position.column += chars,
        }
        self.position.offset += chars;

        let out = self.buf.subtendril(self.pos as u32, n as u32);
        self.pos += n;
        out
    }
}

impl<'a> From<&'a str> for InputCursor {
    fn from(input: &'a str) -> InputCursor {
        InputCursor::new(StrTendril::from_slice(input))
    }
}

impl From<String> for InputCursor {
    fn from(input: String) -> InputCursor {
        InputCursor::new(StrTendril::from(input))
    }
}
